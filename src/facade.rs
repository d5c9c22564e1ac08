//! Translation facade: the only surface application code calls.
//!
//! A [`TranslatedText`] handle binds a translator acquired from the active
//! adapter at construction. Lookups through the handle never fail: empty
//! input short-circuits to empty output, and every lookup error is recovered
//! by returning the key, logged once with its context. Because the handle
//! owns its translator, swapping the active adapter only affects handles
//! acquired after the swap.

use tracing::warn;

use crate::adapter::{TranslateOptions, Translator, DEFAULT_NAMESPACE};
use crate::metrics::TranslationMetrics;
use crate::registry::AdapterRegistry;

/// Translation handle bound to a namespace and an acquired translator.
pub struct TranslatedText {
    namespace: Option<String>,
    adapter: String,
    translator: Translator,
}

impl TranslatedText {
    /// Acquire a handle from a registry's active adapter.
    ///
    /// # Arguments
    /// * `registry` - The registry whose active adapter supplies the
    ///   translator
    /// * `namespace` - Optional grouping key forwarded to the adapter
    pub fn from_registry(registry: &AdapterRegistry, namespace: Option<&str>) -> Self {
        let adapter = registry.active_adapter();
        TranslatedText {
            namespace: namespace.map(str::to_string),
            adapter: adapter.name().to_string(),
            translator: adapter.translator(namespace),
        }
    }

    /// Resolve `text` into its translated form.
    ///
    /// # Arguments
    /// * `text` - The translation key; empty input returns empty output
    /// * `options` - Optional interpolation parameters and source controls
    ///
    /// # Returns
    /// The translated string, or `text` itself when the lookup fails.
    pub fn translate_text(&self, text: &str, options: Option<&TranslateOptions>) -> String {
        if text.is_empty() {
            return String::new();
        }

        let metrics = TranslationMetrics::global();
        metrics.record_lookup();

        match self.translator.translate(text, options) {
            Ok(translated) => translated,
            Err(error) => {
                warn!(
                    key = text,
                    namespace = self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE),
                    adapter = %self.adapter,
                    %error,
                    "translation lookup failed; returning key"
                );
                metrics.record_key_fallback();
                text.to_string()
            }
        }
    }
}

/// Acquire a translation handle from the global registry.
///
/// # Arguments
/// * `namespace` - Optional grouping key forwarded to the active adapter
pub fn translated_text(namespace: Option<&str>) -> TranslatedText {
    TranslatedText::from_registry(AdapterRegistry::global(), namespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{LookupError, Translate, TranslationAdapter};
    use serial_test::serial;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingTranslator {
        calls: Arc<AtomicUsize>,
    }

    impl Translate for CountingTranslator {
        fn translate(
            &self,
            key: &str,
            _options: Option<&TranslateOptions>,
        ) -> Result<String, LookupError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(format!("t:{}", key))
        }
    }

    struct CountingAdapter {
        calls: Arc<AtomicUsize>,
    }

    impl TranslationAdapter for CountingAdapter {
        fn translator(&self, _namespace: Option<&str>) -> Translator {
            Box::new(CountingTranslator {
                calls: self.calls.clone(),
            })
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    struct FailingAdapter;

    impl TranslationAdapter for FailingAdapter {
        fn translator(&self, namespace: Option<&str>) -> Translator {
            let namespace = namespace.unwrap_or(DEFAULT_NAMESPACE).to_string();
            struct FailingTranslator(String);

            impl Translate for FailingTranslator {
                fn translate(
                    &self,
                    key: &str,
                    _options: Option<&TranslateOptions>,
                ) -> Result<String, LookupError> {
                    Err(LookupError::MissingKey {
                        key: key.to_string(),
                        namespace: self.0.clone(),
                    })
                }
            }

            Box::new(FailingTranslator(namespace))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn registry_with(adapter: Arc<dyn TranslationAdapter>) -> AdapterRegistry {
        let registry = AdapterRegistry::new();
        registry.set_adapter(adapter);
        registry
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_translate_delegates_to_translator() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = registry_with(Arc::new(CountingAdapter {
            calls: calls.clone(),
        }));

        let handle = TranslatedText::from_registry(&registry, Some("common"));
        assert_eq!(handle.translate_text("title", None), "t:title");
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_empty_text_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = registry_with(Arc::new(CountingAdapter {
            calls: calls.clone(),
        }));

        let handle = TranslatedText::from_registry(&registry, None);
        assert_eq!(handle.translate_text("", None), "");

        // The translator was never consulted.
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_lookup_failure_returns_key() {
        let registry = registry_with(Arc::new(FailingAdapter));

        let handle = TranslatedText::from_registry(&registry, Some("common"));
        assert_eq!(handle.translate_text("missing.key", None), "missing.key");
    }

    // ==================== Acquisition Tests ====================

    #[test]
    fn test_handle_keeps_translator_across_adapter_swap() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = registry_with(Arc::new(CountingAdapter {
            calls: calls.clone(),
        }));

        let before = TranslatedText::from_registry(&registry, None);
        registry.set_adapter(Arc::new(FailingAdapter));
        let after = TranslatedText::from_registry(&registry, None);

        assert_eq!(before.translate_text("title", None), "t:title");
        assert_eq!(after.translate_text("title", None), "title");
    }

    // ==================== Metrics Tests ====================

    #[test]
    #[serial]
    fn test_metrics_track_lookups_and_fallbacks() {
        TranslationMetrics::global().reset();
        let registry = registry_with(Arc::new(FailingAdapter));

        let handle = TranslatedText::from_registry(&registry, None);
        handle.translate_text("title", None);
        handle.translate_text("", None);

        let metrics = TranslationMetrics::global();
        assert_eq!(metrics.lookups(), 1);
        assert_eq!(metrics.key_fallbacks(), 1);
    }
}
