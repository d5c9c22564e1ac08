//! Static in-process dictionary adapter.
//!
//! Catalogs are plain maps of namespace to key to template, fixed at
//! construction. Lookups never fail: an absent namespace or key resolves to
//! the key itself, matching the universal fallback without involving the
//! facade. Templates support `{{name}}` interpolation in a single
//! left-to-right pass, so substituted values are never re-expanded.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::adapter::{
    LookupError, Translate, TranslateOptions, TranslationAdapter, Translator, DEFAULT_NAMESPACE,
};

/// Namespace to key to template string.
pub type Dictionary = HashMap<String, HashMap<String, String>>;

/// Adapter over a fixed dictionary.
pub struct StaticDictionaryAdapter {
    dictionary: Arc<Dictionary>,
}

impl StaticDictionaryAdapter {
    /// Create an adapter over the given catalog.
    ///
    /// # Arguments
    /// * `dictionary` - Templates keyed by namespace and key
    pub fn new(dictionary: Dictionary) -> Self {
        StaticDictionaryAdapter {
            dictionary: Arc::new(dictionary),
        }
    }
}

impl TranslationAdapter for StaticDictionaryAdapter {
    fn translator(&self, namespace: Option<&str>) -> Translator {
        Box::new(DictionaryTranslator {
            dictionary: self.dictionary.clone(),
            namespace: namespace.unwrap_or(DEFAULT_NAMESPACE).to_string(),
        })
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Translator bound to one namespace of a dictionary.
struct DictionaryTranslator {
    dictionary: Arc<Dictionary>,
    namespace: String,
}

impl Translate for DictionaryTranslator {
    fn translate(&self, key: &str, options: Option<&TranslateOptions>) -> Result<String, LookupError> {
        let template = self
            .dictionary
            .get(&self.namespace)
            .and_then(|entries| entries.get(key));

        match template {
            Some(template) => Ok(interpolate(template, options)),
            None => Ok(key.to_string()),
        }
    }
}

/// Substitute `{{name}}` placeholders in a single left-to-right pass.
///
/// Each placeholder whose name appears in `options` is replaced by the
/// value's string form; placeholders without a matching parameter are kept
/// verbatim, as is a `{{` with no closing `}}`. Substituted text is never
/// rescanned, so values containing placeholder syntax pass through
/// untouched.
///
/// # Arguments
/// * `template` - The template text to expand
/// * `options` - Parameter values keyed by placeholder name
pub fn interpolate(template: &str, options: Option<&TranslateOptions>) -> String {
    let Some(options) = options.filter(|options| !options.is_empty()) else {
        return template.to_string();
    };

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            // Unterminated placeholder; keep the tail verbatim.
            output.push_str(&rest[start..]);
            return output;
        };

        let name = &after[..end];
        match options.get(name) {
            Some(value) => output.push_str(&value_text(value)),
            None => {
                output.push_str("{{");
                output.push_str(name);
                output.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    output.push_str(rest);
    output
}

/// String form of a parameter value.
///
/// Strings render raw; every other value renders as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
