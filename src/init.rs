//! Bootstrap configuration for the wrapped translation library.
//!
//! Applications call [`initialize_i18n`] once at startup with their resource
//! bundles and options. The active initializer (usually
//! [`default_initializer`]) merges both into a single [`InitConfig`]:
//! defaults are computed first, then every caller-supplied option overlays
//! the computed value under the same key. The merged object is handed to the
//! installed backend and returned to the caller as the opaque handle for the
//! configured library.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::registry::AdapterRegistry;

/// Resource bundles keyed by language code.
///
/// Each value holds the namespace/key tree for that language. Insertion
/// order is significant: the first language doubles as the default `lng`
/// when the caller does not pick one.
pub type Resources = Map<String, Value>;

/// Fallback language directive accepted from callers.
///
/// Mirrors the two shapes translation libraries commonly accept: a single
/// code or an ordered preference list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FallbackLanguages {
    /// One fallback language code.
    Single(String),

    /// Ordered list of fallback language codes.
    Multiple(Vec<String>),
}

/// Caller-supplied initialization options.
///
/// Every field is optional; unset fields fall back to values computed from
/// the resource bundles. Unknown fields are collected in `extra` and passed
/// through to the merged configuration untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    /// Active language override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Fallback language(s) override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_language: Option<FallbackLanguages>,

    /// Interpolation settings, overlaid on `{"escapeValue": false}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<Map<String, Value>>,

    /// Library debug logging toggle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Language detection settings, forwarded verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection: Option<Value>,

    /// Resource loading settings, forwarded verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<Value>,

    /// Passthrough fields not interpreted by the bridge.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Merged bootstrap configuration produced by an initializer.
///
/// A flat key/value object in the shape the wrapped library expects. The
/// bridge never interprets it beyond the accessors below; backends receive
/// it whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InitConfig {
    values: Map<String, Value>,
}

impl InitConfig {
    /// Look up a top-level configuration value.
    ///
    /// # Arguments
    /// * `key` - The configuration field name (e.g. `"fallbackLng"`)
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The active language, when one was resolved.
    pub fn language(&self) -> Option<&str> {
        self.values.get("lng").and_then(Value::as_str)
    }

    /// The full merged object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

/// Merge resource bundles and caller options into an [`InitConfig`].
///
/// Defaults are computed from the bundles first: `lng` is the caller's
/// `defaultLanguage` or the first bundled language, `supportedLngs` lists
/// every bundled language, `fallbackLng` defaults to
/// `{"default": [..all languages..]}`, interpolation starts from
/// `{"escapeValue": false}`, and `debug` is off. Every field the caller
/// actually set is then overlaid on the computed object key by key, so
/// caller intent always wins and unknown fields pass through untouched.
///
/// # Arguments
/// * `resources` - Resource bundles keyed by language code
/// * `options` - Caller options; unset fields keep their computed defaults
///
/// # Returns
/// * `Ok(config)` with the merged configuration
/// * `Err` when the options fail to serialize into a JSON object
pub fn default_initializer(resources: &Resources, options: &InitOptions) -> Result<InitConfig> {
    let languages: Vec<String> = resources.keys().cloned().collect();

    let lng = options
        .default_language
        .clone()
        .or_else(|| languages.first().cloned())
        .map_or(Value::Null, Value::String);

    let mut interpolation = Map::new();
    interpolation.insert("escapeValue".to_string(), json!(false));
    if let Some(overrides) = &options.interpolation {
        for (key, value) in overrides {
            interpolation.insert(key.clone(), value.clone());
        }
    }

    let fallback_lng = match &options.fallback_language {
        Some(fallback) => serde_json::to_value(fallback)
            .context("failed to serialize fallback languages")?,
        None => json!({ "default": languages }),
    };

    let mut values = Map::new();
    values.insert("lng".to_string(), lng);
    values.insert("resources".to_string(), Value::Object(resources.clone()));
    values.insert("interpolation".to_string(), Value::Object(interpolation));
    values.insert("supportedLngs".to_string(), json!(languages));
    values.insert("fallbackLng".to_string(), fallback_lng);
    values.insert("debug".to_string(), json!(options.debug.unwrap_or(false)));
    if let Some(detection) = &options.detection {
        values.insert("detection".to_string(), detection.clone());
    }
    if let Some(backend) = &options.backend {
        values.insert("backend".to_string(), backend.clone());
    }

    // Raw caller options overlay the computed defaults key by key.
    let raw = serde_json::to_value(options).context("failed to serialize init options")?;
    if let Value::Object(overrides) = raw {
        for (key, value) in overrides {
            values.insert(key, value);
        }
    }

    debug!(
        language = values.get("lng").and_then(serde_json::Value::as_str).unwrap_or("<none>"),
        supported = languages.len(),
        "merged i18n bootstrap configuration"
    );

    Ok(InitConfig { values })
}

/// Initialize the translation layer through the global registry.
///
/// Runs the initializer registered in the global [`AdapterRegistry`] (the
/// [`default_initializer`] unless the application swapped one in), forwards
/// the merged configuration to the installed backend when one is present,
/// and returns the configuration as the opaque library handle.
///
/// # Arguments
/// * `resources` - Resource bundles keyed by language code
/// * `options` - Caller options; unset fields keep their computed defaults
///
/// # Returns
/// * `Ok(config)` with the merged configuration the backend was given
/// * `Err` when the initializer or the backend configuration fails
pub fn initialize_i18n(resources: &Resources, options: &InitOptions) -> Result<InitConfig> {
    AdapterRegistry::global().initialize(resources, options)
}
