//! Topic relevance filter.
//!
//! Decides whether a message belongs to the software-development domain by
//! plain substring containment against a static vocabulary. There is no
//! tokenization: a keyword also matches inside a larger word ("app" inside
//! "aplicación", "git" inside "digital").

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Competency-domain vocabulary
const DEFAULT_KEYWORDS: &[&str] = &[
    "programación",
    "código",
    "software",
    "desarrollo",
    "aplicación",
    "app",
    "web",
    "móvil",
    "lenguaje",
    "framework",
    "biblioteca",
    "API",
    "base de datos",
    "SQL",
    "arquitectura",
    "algoritmo",
    "estructura de datos",
    "debug",
    "error",
    "compilación",
    "sintaxis",
    "función",
    "variable",
    "clase",
    "objeto",
    "array",
    "async",
    "promesa",
    "callback",
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Python",
    "Java",
    "C++",
    "Git",
    "repo",
    "repositorio",
    "commit",
    "push",
    "pull",
    "branch",
    "merge",
    "deploy",
    "servidor",
    "cliente",
    "frontend",
    "backend",
    "fullstack",
    "DevOps",
    "Docker",
    "Kubernetes",
    "microservicios",
    "REST",
    "GraphQL",
    "JSON",
    "XML",
    "HTTP",
    "HTTPS",
    "protocolo",
    "endpoint",
    "autenticación",
    "autorización",
    "seguridad",
    "cifrado",
    "hash",
    "token",
    "cookies",
    "session",
    "cache",
    "optimización",
    "performance",
    "rendimiento",
];

/// Immutable set of lowercase domain keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawKeywordSet")]
pub struct KeywordSet {
    keywords: BTreeSet<String>,
}

/// Wire shape of a keyword set before normalization
#[derive(Deserialize)]
struct RawKeywordSet {
    keywords: Vec<String>,
}

impl From<RawKeywordSet> for KeywordSet {
    fn from(raw: RawKeywordSet) -> Self {
        Self::new(raw.keywords)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl KeywordSet {
    /// Build a set from arbitrary keywords.
    ///
    /// Keywords are lowercased; empty ones are dropped since an empty needle
    /// would match every input.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self { keywords }
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains(&keyword.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

/// Substring-based topic relevance check
#[derive(Debug, Clone, Default)]
pub struct TopicFilter {
    keywords: KeywordSet,
}

impl TopicFilter {
    /// Create a filter over the default software-development vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter over a custom vocabulary
    pub fn with_keywords(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Returns true if any keyword occurs anywhere in the lowercased text
    pub fn is_on_topic(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// Returns the first keyword (in set order) found in the text
    pub fn first_match(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.keywords.iter().find(|k| lower.contains(k))
    }
}
