//! Intent classification using an ordered rule table.
//!
//! Rules are evaluated top to bottom and the first match wins. The order is
//! part of the contract: farewells beat greetings, both bypass the topic
//! gate, and the topic gate runs before any help category.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::keywords::TopicFilter;

/// Detected intent category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Greeting (hola, buenos días, qué más, etc.)
    Greeting,
    /// Farewell (adiós, chao, nos vemos, etc.)
    Farewell,
    /// Outside the software-development domain
    OffTopic,
    /// Errors, bugs, failing builds
    ErrorHelp,
    /// Performance and optimization
    OptimizationHelp,
    /// "What is / explain / difference between" questions
    Explanation,
    /// Nothing matched
    Fallback,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Returns a human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Farewell => "farewell",
            Category::OffTopic => "off_topic",
            Category::ErrorHelp => "error_help",
            Category::OptimizationHelp => "optimization_help",
            Category::Explanation => "explanation",
            Category::Fallback => "fallback",
        }
    }
}

/// Secondary tag resolved inside a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTopic {
    /// SQL, queries, databases
    Database,
    /// JavaScript runtime / null references
    Runtime,
    /// JS ecosystem frameworks
    Framework,
    /// Category matched but no sub-pattern did
    General,
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Outer category
    pub category: Category,
    /// Inner tag, only for categories with sub-dispatch
    pub topic: Option<SubTopic>,
    /// Text fragment (or keyword) that decided the category
    pub matched: Option<String>,
}

/// How a rule decides whether it applies
#[derive(Debug, Clone)]
pub enum RuleTest {
    /// Regex over the lowercased input
    Pattern(&'static Regex),
    /// Input contains no domain keyword
    OffTopic,
}

/// One entry of a sub-dispatch table
#[derive(Debug, Clone)]
pub struct TopicRule {
    pub pattern: &'static Regex,
    pub topic: SubTopic,
}

/// One entry of the priority table
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub category: Category,
    pub test: RuleTest,
    /// Checked in order when the rule fires; `General` if none matches.
    /// Empty for categories without sub-dispatch.
    pub topics: Vec<TopicRule>,
}

// Compile patterns once at startup
// NOTE: expect() is acceptable here, the patterns are constants
static FAREWELL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(adios|adiós|chao|chau|nos vemos|hasta luego|hasta pronto|hasta la vista|que vaya bien|cuídate|cuídese|que esté bien|que le vaya bien|hasta después)",
    )
    .expect("Invalid regex: farewell phrases")
});

static GREETING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(hola|hi|hey|buenos|buenas|saludos|qué tal|como estás|qué más|buen día|buenos días|buenas tardes|buenas noches|quihubo|quihubole|qué hubo|qué pasa)",
    )
    .expect("Invalid regex: greeting phrases")
});

static ERROR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(error|problema|bug|fallo|no funciona|no compila|exception|undefined|null)")
        .expect("Invalid regex: error vocabulary")
});

static OPTIMIZATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(optimizar|mejorar|performance|rendimiento|velocidad|rápido|lento|eficiente)",
    )
    .expect("Invalid regex: optimization vocabulary")
});

static EXPLANATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(qué es|qué son|explica|diferencia entre|cómo funciona|qué significa)")
        .expect("Invalid regex: explanation phrases")
});

static DATABASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(sql|consulta|query|database|base de datos)")
        .expect("Invalid regex: database vocabulary")
});

static RUNTIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(javascript|js|undefined|null|referenceerror|typeerror)")
        .expect("Invalid regex: runtime vocabulary")
});

static FRAMEWORK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(react|vue|angular|framework)").expect("Invalid regex: framework names")
});

/// Intent classifier driven by an ordered rule table
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
    topic_filter: TopicFilter,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier with the default vocabulary
    pub fn new() -> Self {
        Self::with_topic_filter(TopicFilter::new())
    }

    /// Create a classifier gated by a custom topic filter
    pub fn with_topic_filter(topic_filter: TopicFilter) -> Self {
        Self {
            rules: Self::default_rules(),
            topic_filter,
        }
    }

    fn default_rules() -> Vec<IntentRule> {
        let database = TopicRule {
            pattern: &DATABASE_PATTERN,
            topic: SubTopic::Database,
        };

        vec![
            IntentRule {
                category: Category::Farewell,
                test: RuleTest::Pattern(&FAREWELL_PATTERN),
                topics: vec![],
            },
            IntentRule {
                category: Category::Greeting,
                test: RuleTest::Pattern(&GREETING_PATTERN),
                topics: vec![],
            },
            IntentRule {
                category: Category::OffTopic,
                test: RuleTest::OffTopic,
                topics: vec![],
            },
            IntentRule {
                category: Category::ErrorHelp,
                test: RuleTest::Pattern(&ERROR_PATTERN),
                topics: vec![
                    database.clone(),
                    TopicRule {
                        pattern: &RUNTIME_PATTERN,
                        topic: SubTopic::Runtime,
                    },
                ],
            },
            IntentRule {
                category: Category::OptimizationHelp,
                test: RuleTest::Pattern(&OPTIMIZATION_PATTERN),
                topics: vec![database],
            },
            IntentRule {
                category: Category::Explanation,
                test: RuleTest::Pattern(&EXPLANATION_PATTERN),
                topics: vec![TopicRule {
                    pattern: &FRAMEWORK_PATTERN,
                    topic: SubTopic::Framework,
                }],
            },
        ]
    }

    /// The priority table, in evaluation order
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn topic_filter(&self) -> &TopicFilter {
        &self.topic_filter
    }

    /// Classify a message. Total: every input maps to exactly one category.
    pub fn classify(&self, text: &str) -> Classification {
        let lower = text.to_lowercase();

        for rule in &self.rules {
            let matched = match &rule.test {
                RuleTest::Pattern(pattern) => match pattern.find(&lower) {
                    Some(m) => m.as_str().to_string(),
                    None => continue,
                },
                RuleTest::OffTopic => {
                    if self.topic_filter.is_on_topic(&lower) {
                        continue;
                    }
                    String::new()
                }
            };

            return Classification {
                category: rule.category,
                topic: Self::resolve_topic(rule, &lower),
                matched: (!matched.is_empty()).then_some(matched),
            };
        }

        Classification {
            category: Category::Fallback,
            topic: None,
            matched: None,
        }
    }

    fn resolve_topic(rule: &IntentRule, lower: &str) -> Option<SubTopic> {
        if rule.topics.is_empty() {
            return None;
        }

        let topic = rule
            .topics
            .iter()
            .find(|t| t.pattern.is_match(lower))
            .map(|t| t.topic)
            .unwrap_or(SubTopic::General);

        Some(topic)
    }
}
