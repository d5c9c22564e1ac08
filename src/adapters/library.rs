//! Generic adapter over the wrapped translation library.
//!
//! This is the default adapter: it forwards every lookup to a
//! [`TranslationBackend`], merging the namespace into the caller's options
//! under `ns` so the backend sees one flat options object. The backend is
//! either injected at construction or looked up from the installed slot at
//! acquisition time; when neither is present the adapter hands out the
//! identity translator and logs a warning.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::adapter::{
    IdentityTranslator, LookupError, Translate, TranslateOptions, TranslationAdapter, Translator,
    DEFAULT_NAMESPACE,
};
use crate::backend::{installed_backend, TranslationBackend};
use crate::metrics::TranslationMetrics;

/// Adapter delegating to a [`TranslationBackend`].
pub struct LibraryAdapter {
    backend: Option<Arc<dyn TranslationBackend>>,
}

impl LibraryAdapter {
    /// Create an adapter bound to a specific backend.
    ///
    /// # Arguments
    /// * `backend` - The backend every translator from this adapter uses
    pub fn new(backend: Arc<dyn TranslationBackend>) -> Self {
        LibraryAdapter {
            backend: Some(backend),
        }
    }

    /// Create an adapter that resolves the installed backend lazily.
    ///
    /// The lookup happens at each acquisition, so a backend installed after
    /// the adapter was constructed is still picked up.
    pub fn from_installed() -> Self {
        LibraryAdapter { backend: None }
    }
}

impl TranslationAdapter for LibraryAdapter {
    fn translator(&self, namespace: Option<&str>) -> Translator {
        let backend = self.backend.clone().or_else(installed_backend);

        match backend {
            Some(backend) => Box::new(BackendTranslator {
                backend,
                namespace: namespace.unwrap_or(DEFAULT_NAMESPACE).to_string(),
            }),
            None => {
                warn!(
                    adapter = self.name(),
                    "no translation backend available; degrading to identity translation"
                );
                TranslationMetrics::global().record_identity_degradation();
                Box::new(IdentityTranslator)
            }
        }
    }

    fn name(&self) -> &str {
        "base"
    }
}

/// Translator forwarding to a backend with the namespace merged in.
struct BackendTranslator {
    backend: Arc<dyn TranslationBackend>,
    namespace: String,
}

impl Translate for BackendTranslator {
    fn translate(&self, key: &str, options: Option<&TranslateOptions>) -> Result<String, LookupError> {
        let mut merged = options.cloned().unwrap_or_default();
        merged.insert("ns".to_string(), Value::String(self.namespace.clone()));
        self.backend.resolve(key, &merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::clear_backend;
    use crate::init::InitConfig;
    use anyhow::Result;
    use serial_test::serial;

    /// Backend that echoes the namespace it was handed.
    struct NamespaceEchoBackend;

    impl TranslationBackend for NamespaceEchoBackend {
        fn name(&self) -> &str {
            "ns-echo"
        }

        fn resolve(&self, key: &str, options: &TranslateOptions) -> Result<String, LookupError> {
            let ns = options
                .get("ns")
                .and_then(Value::as_str)
                .unwrap_or("<missing>");
            Ok(format!("{}:{}", ns, key))
        }

        fn configure(&self, _config: &InitConfig) -> Result<()> {
            Ok(())
        }
    }

    // ==================== Namespace Merge Tests ====================

    #[test]
    fn test_namespace_merged_under_ns() {
        let adapter = LibraryAdapter::new(Arc::new(NamespaceEchoBackend));
        let translator = adapter.translator(Some("checkout"));

        let result = translator.translate("title", None).unwrap();
        assert_eq!(result, "checkout:title");
    }

    #[test]
    fn test_namespace_defaults_to_common() {
        let adapter = LibraryAdapter::new(Arc::new(NamespaceEchoBackend));
        let translator = adapter.translator(None);

        let result = translator.translate("title", None).unwrap();
        assert_eq!(result, "common:title");
    }

    #[test]
    fn test_adapter_namespace_overrides_caller_ns() {
        let adapter = LibraryAdapter::new(Arc::new(NamespaceEchoBackend));
        let translator = adapter.translator(Some("checkout"));

        let mut options = TranslateOptions::new();
        options.insert("ns".to_string(), serde_json::json!("smuggled"));

        let result = translator.translate("title", Some(&options)).unwrap();
        assert_eq!(result, "checkout:title");
    }

    #[test]
    fn test_caller_options_forwarded() {
        struct OptionEchoBackend;

        impl TranslationBackend for OptionEchoBackend {
            fn name(&self) -> &str {
                "opt-echo"
            }

            fn resolve(
                &self,
                _key: &str,
                options: &TranslateOptions,
            ) -> Result<String, LookupError> {
                Ok(options
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("<missing>")
                    .to_string())
            }

            fn configure(&self, _config: &InitConfig) -> Result<()> {
                Ok(())
            }
        }

        let adapter = LibraryAdapter::new(Arc::new(OptionEchoBackend));
        let translator = adapter.translator(None);

        let mut options = TranslateOptions::new();
        options.insert("name".to_string(), serde_json::json!("Al"));

        let result = translator.translate("greeting", Some(&options)).unwrap();
        assert_eq!(result, "Al");
    }

    // ==================== Degradation Tests ====================

    #[test]
    #[serial]
    fn test_missing_backend_degrades_to_identity() {
        clear_backend();
        let adapter = LibraryAdapter::from_installed();
        let translator = adapter.translator(Some("checkout"));

        let result = translator.translate("title", None).unwrap();
        assert_eq!(result, "title");
    }

    #[test]
    #[serial]
    fn test_backend_installed_after_construction_is_used() {
        clear_backend();
        let adapter = LibraryAdapter::from_installed();

        crate::backend::install_backend(Arc::new(NamespaceEchoBackend));
        let translator = adapter.translator(Some("late"));

        let result = translator.translate("title", None).unwrap();
        assert_eq!(result, "late:title");

        clear_backend();
    }

    #[test]
    fn test_adapter_name() {
        assert_eq!(LibraryAdapter::from_installed().name(), "base");
    }
}
