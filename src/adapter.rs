//! Adapter contract: the shape every translation source must implement.
//!
//! An adapter maps a namespace to a translator; a translator resolves keys
//! into display strings. Lookup failures are surfaced as a typed
//! [`LookupError`] so the facade can apply the universal fallback policy
//! (return the key) in one place instead of per adapter.

use std::fmt;

use thiserror::Error;

/// Namespace used when the caller does not supply one.
pub const DEFAULT_NAMESPACE: &str = "common";

/// Open mapping of parameter name to value.
///
/// Carries interpolation parameters and source-specific controls
/// (pluralization `count`, `context`, `ns`, ...). Keys are consumer-defined;
/// no schema is enforced.
pub type TranslateOptions = serde_json::Map<String, serde_json::Value>;

/// Error raised by a translator when a key cannot be resolved.
///
/// These never reach application code: the facade recovers every variant by
/// returning the untranslated key.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The key is not present in the wrapped source.
    #[error("translation key '{key}' not found in namespace '{namespace}'")]
    MissingKey {
        /// The key that failed to resolve.
        key: String,
        /// The namespace the lookup ran against.
        namespace: String,
    },

    /// The wrapped source is not available in this runtime.
    #[error("translation source unavailable: {reason}")]
    Unavailable {
        /// Why the source could not be reached.
        reason: String,
    },

    /// The wrapped source failed while resolving the key.
    #[error("translation source failed: {reason}")]
    Source {
        /// The underlying failure, rendered as text.
        reason: String,
    },
}

/// A translate operation bound to a namespace.
///
/// Stateless from the caller's perspective; implementations may close over
/// a namespace or a handle to their source.
pub trait Translate: Send + Sync {
    /// Resolve `key` into a display string.
    ///
    /// # Arguments
    /// * `key` - The translation key to resolve
    /// * `options` - Optional interpolation parameters and source controls
    ///
    /// # Returns
    /// * `Ok(text)` with the resolved (and interpolated) string
    /// * `Err(LookupError)` when the source cannot produce a value
    fn translate(&self, key: &str, options: Option<&TranslateOptions>) -> Result<String, LookupError>;
}

/// Boxed translator handed out by adapters.
pub type Translator = Box<dyn Translate>;

/// Pluggable translation source.
///
/// Exactly one adapter is active process-wide at any time (see
/// [`crate::AdapterRegistry`]). Acquisition never fails: an adapter that
/// cannot reach its source hands out the [`IdentityTranslator`] and logs a
/// warning instead of raising.
pub trait TranslationAdapter: Send + Sync {
    /// Obtain a translator for the given namespace.
    ///
    /// # Arguments
    /// * `namespace` - Optional grouping key; adapters default it as their
    ///   source requires (usually [`DEFAULT_NAMESPACE`])
    fn translator(&self, namespace: Option<&str>) -> Translator;

    /// Display name used in log messages.
    fn name(&self) -> &str {
        "unnamed"
    }
}

impl fmt::Debug for dyn TranslationAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationAdapter")
            .field("name", &self.name())
            .finish()
    }
}

/// Degraded translator that returns every key unchanged.
///
/// This is the terminal fallback for every adapter: when no working
/// translation source is available, lookups succeed with the key itself.
pub struct IdentityTranslator;

impl Translate for IdentityTranslator {
    fn translate(&self, key: &str, _options: Option<&TranslateOptions>) -> Result<String, LookupError> {
        Ok(key.to_string())
    }
}
