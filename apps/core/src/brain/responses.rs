//! Response bank: pre-authored templates per category and sub-topic.
//!
//! Templates are returned verbatim apart from the `{input}` placeholder.
//! Markdown-like markers (code fences, inline code, bold) are left for the
//! rendering layer.

use rand::Rng;

use super::intent::{Category, Classification, SubTopic};

/// Placeholder replaced by the user's original message
pub const INPUT_PLACEHOLDER: &str = "{input}";

const GREETINGS: &[&str] = &[
    "¡Qué más! ¡Cómo así! Estoy acá para ayudarle con cualquier duda sobre desarrollo de software. Puedo asistirle con programación, arquitecturas, bases de datos, herramientas de desarrollo, optimización de código, resolución de errores y mucho más. ¿En qué puedo ayudarle hoy?",
    "¡Hola! ¡Qué tal! Con gusto le ayudo con cualquier cosa de desarrollo de software. Puedo asistirle con programación, bases de datos, herramientas y todo eso relacionado con el desarrollo. ¿Qué necesita hoy?",
    "¡Qué más! ¡Bienvenido! Estoy aquí para ayudarle con todo lo relacionado con desarrollo de software. Desde programación hasta arquitecturas y bases de datos, lo que necesite. ¿En qué puedo asistirle?",
];

const FAREWELLS: &[&str] = &[
    "¡Que le vaya bien! Cualquier cosa relacionada con desarrollo de software, aquí estaré para ayudarle. ¡Cuídese mucho!",
    "¡Nos vemos! Si necesita algo más de programación o desarrollo de software, aquí estaré. ¡Que esté bien!",
    "¡Hasta luego! Cualquier duda de desarrollo de software, no dude en preguntarme. ¡Que le vaya bien y cuídese!",
    "¡Chao! Estaré acá cuando necesite ayuda con algo de desarrollo de software. ¡Que esté bien!",
];

const OFF_TOPIC: &[&str] = &[
    "Ay sí, disculpe pero no soy experto en ese tema. Sin embargo, puedo ayudarle con cualquier pregunta sobre desarrollo de software. ¿Hay algo relacionado con programación, herramientas de desarrollo, arquitecturas o tecnologías en las que pueda asistirle?",
    "Ay sí, con gusto pero ese tema no es de mi especialidad. Lo que sí puedo ayudarle es con cualquier cosa de desarrollo de software: programación, bases de datos, herramientas y eso. ¿En qué puedo asistirle?",
    "Ay, disculpe pero ese tema no lo manejo. Lo que sí puedo ayudarle es con desarrollo de software. ¿Hay algo de programación o tecnologías en lo que pueda asistirle?",
];

const ERROR_DATABASE: &str = r#"Ay sí, veo que tiene un problema relacionado con bases de datos. Para ayudarle mejor, necesitaría ver el error específico que está recibiendo. Algunas causas comunes incluyen:

```sql
-- Ejemplo de consulta problemática
SELECT * FROM usuarios WHERE nombre LIKE '%valor%';
```

**Sugerencias generales:**
- Verifique la sintaxis SQL correcta según su motor de base de datos
- Asegúrese de que las tablas y columnas existan
- Revise los tipos de datos en las condiciones WHERE
- Compruebe permisos de acceso a la base de datos

Si comparte el error exacto, puedo darle una solución más específica."#;

const ERROR_RUNTIME: &str = r#"Para errores en JavaScript, acá le dejo algunas soluciones comunes:

```javascript
// Errores comunes y soluciones:

// 1. Undefined o Null
const valor = objeto?.propiedad?.subpropiedad; // Optional chaining

// 2. ReferenceError - variable no definida
// Siempre declare variables con let, const o var
let miVariable = 'valor';

// 3. TypeError - método no existe
if (array && Array.isArray(array)) {
    array.forEach(item => console.log(item));
}
```

**Buenas prácticas:**
- Use TypeScript o validación de tipos
- Implemente manejo de errores con try-catch
- Valide datos antes de usarlos

¿Puede compartir el mensaje de error completo para darle una solución más específica?"#;

const ERROR_GENERAL: &str = r#"Para resolver este problema, necesitaría más información:

1. **El mensaje de error exacto** que está recibiendo
2. **El lenguaje o tecnología** que está usando
3. **El contexto** donde ocurre el error

Mientras tanto, acá le dejo algunas prácticas generales para debugging:

```javascript
// 1. Use console.log estratégicamente
console.log('Valor de variable:', variable);

// 2. Manejo de errores
try {
    // código que puede fallar
} catch (error) {
    console.error('Error:', error.message);
    // manejo del error
}
```

¿Puede compartir más detalles sobre el error específico?"#;

const OPTIMIZATION_SQL: &str = r#"Para optimizar consultas SQL, acá le dejo estrategias clave:

```sql
-- ❌ Consulta lenta
SELECT * FROM usuarios WHERE nombre LIKE '%buscar%';

-- ✅ Consulta optimizada
SELECT id, nombre, email
FROM usuarios
WHERE nombre LIKE 'buscar%'  -- Índice usable al inicio
LIMIT 100;

-- ✅ Con índices
CREATE INDEX idx_nombre ON usuarios(nombre);
```

**Principios de optimización SQL:**
1. **Use índices** en columnas frecuentemente consultadas
2. **Evite SELECT *** - seleccione solo columnas necesarias
3. **Limite resultados** con LIMIT cuando sea posible
4. **Use WHERE eficiente** - evite funciones en WHERE
5. **Evite subconsultas anidadas** innecesarias
6. **Use JOIN apropiados** en lugar de subconsultas

¿Tiene una consulta específica que quiera optimizar?"#;

const OPTIMIZATION_CODE: &str = r#"Para optimizar código, considere estos principios:

**1. Complejidad algorítmica**
- Evite bucles anidados innecesarios
- Use estructuras de datos eficientes (Map, Set)

**2. Buena práctica de código**
```javascript
// ❌ Ineficiente
const resultado = [];
for (let i = 0; i < array.length; i++) {
    if (array[i] > 10) {
        resultado.push(array[i] * 2);
    }
}

// ✅ Optimizado y legible
const resultado = array
    .filter(item => item > 10)
    .map(item => item * 2);
```

**3. Caching y memoización**
```javascript
const memoize = (fn) => {
    const cache = new Map();
    return (...args) => {
        const key = JSON.stringify(args);
        if (cache.has(key)) return cache.get(key);
        const result = fn(...args);
        cache.set(key, result);
        return result;
    };
};
```

¿Qué aspecto específico le gustaría optimizar?"#;

const EXPLANATION_FRAMEWORKS: &str = r#"Los frameworks modernos de JavaScript ofrecen diferentes enfoques:

**React** - Biblioteca declarativa con componente funcionales
```javascript
function Componente() {
    const [estado, setEstado] = useState(0);
    return <button onClick={() => setEstado(estado + 1)}>{estado}</button>;
}
```

**Vue** - Framework progresivo con sintaxis template
```javascript
export default {
    data() {
        return { contador: 0 }
    },
    template: '<button @click="contador++">{{ contador }}</button>'
}
```

**Angular** - Framework completo con TypeScript

¿Sobre qué framework específico le gustaría aprender más?"#;

const EXPLANATION_GENERAL: &str = r#"¡Claro que sí! Puedo ayudarle con ese tema. Para darle una respuesta más precisa y útil, podría necesitar un poco más de contexto:

- ¿En qué lenguaje o tecnología está trabajando?
- ¿Cuál es su nivel de experiencia?
- ¿Hay algún caso de uso específico que quiera abordar?

Mientras tanto, acá le dejo información general sobre desarrollo de software:

**Buenas prácticas fundamentales:**
- **Código limpio y legible** - Nombres descriptivos, funciones pequeñas
- **Modularidad** - Separación de responsabilidades
- **Documentación** - Comentarios útiles y README actualizados
- **Testing** - Cobertura de casos importantes
- **Control de versiones** - Commits descriptivos con Git

¿Puede especificar más sobre lo que necesita?"#;

const FALLBACK: &str = r#"Entiendo su pregunta sobre "{input}". Para darle la mejor respuesta posible, sería útil conocer:

1. **El lenguaje o tecnología** específica con la que está trabajando
2. **El contexto** o caso de uso donde aplica esto
3. **Su objetivo final** - ¿qué está tratando de lograr?

Mientras tanto, acá le dejo algunos principios generales de desarrollo de software que pueden aplicarse:

**Arquitectura limpia:**
- Separación de capas (presentación, lógica de negocio, datos)
- Principio de responsabilidad única
- Inversión de dependencias

**Gestión de estado:**
- Mantenga el estado lo más local posible
- Use patrones apropiados (Redux, Context API, Vuex, etc.)

**Performance:**
- Lazy loading cuando sea posible
- Code splitting
- Optimización de imágenes y assets

¿Puede compartir más detalles para darle una respuesta más específica?"#;

/// Static mapping from (category, sub-topic) to response variants
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseBank;

impl ResponseBank {
    pub fn new() -> Self {
        Self
    }

    /// All variants for a category. Never empty.
    pub fn variants(&self, category: Category, topic: Option<SubTopic>) -> &'static [&'static str] {
        match (category, topic) {
            (Category::Greeting, _) => GREETINGS,
            (Category::Farewell, _) => FAREWELLS,
            (Category::OffTopic, _) => OFF_TOPIC,
            (Category::ErrorHelp, Some(SubTopic::Database)) => &[ERROR_DATABASE],
            (Category::ErrorHelp, Some(SubTopic::Runtime)) => &[ERROR_RUNTIME],
            (Category::ErrorHelp, _) => &[ERROR_GENERAL],
            (Category::OptimizationHelp, Some(SubTopic::Database)) => &[OPTIMIZATION_SQL],
            (Category::OptimizationHelp, _) => &[OPTIMIZATION_CODE],
            (Category::Explanation, Some(SubTopic::Framework)) => &[EXPLANATION_FRAMEWORKS],
            (Category::Explanation, _) => &[EXPLANATION_GENERAL],
            (Category::Fallback, _) => &[FALLBACK],
        }
    }

    /// Pick a variant uniformly at random and fill in the placeholder
    pub fn select<R>(&self, classification: &Classification, input: &str, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let variants = self.variants(classification.category, classification.topic);
        let index = rng.gen_range(0..variants.len());

        render(variants[index], input)
    }
}

/// Substitute the placeholder once; the inserted input is not rescanned.
pub fn render(template: &str, input: &str) -> String {
    template.replacen(INPUT_PLACEHOLDER, input, 1)
}
