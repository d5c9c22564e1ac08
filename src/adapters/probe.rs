//! Adapters over framework-bound translation hooks.
//!
//! Some translation sources only exist when a host framework is present in
//! the runtime. Rather than catching load failures, these adapters take the
//! hook as an `Option` resolved at startup: `None` means the capability is
//! absent and every acquisition degrades to identity translation with a
//! warning. A present probe may still fail per acquisition (the framework
//! is loaded but its translation state is not ready); that path degrades
//! the same way.

use std::sync::Arc;

use tracing::warn;

use crate::adapter::{IdentityTranslator, LookupError, TranslationAdapter, Translator};
use crate::metrics::TranslationMetrics;

/// Single-stage probe: namespace in, translator out.
pub type TranslatorProbe =
    Arc<dyn Fn(Option<&str>) -> Result<Translator, LookupError> + Send + Sync>;

/// Scope factory produced by a [`ScopedProbe`]: scope name in, translator
/// out.
pub type ScopeFactory = Box<dyn Fn(&str) -> Result<Translator, LookupError> + Send + Sync>;

/// Two-stage probe: first reach the framework, then bind a scope.
pub type ScopedProbe = Arc<dyn Fn() -> Result<ScopeFactory, LookupError> + Send + Sync>;

/// Adapter over a single-stage framework translation hook.
pub struct ProbeAdapter {
    probe: Option<TranslatorProbe>,
}

impl ProbeAdapter {
    /// Create an adapter around a resolved framework hook.
    ///
    /// # Arguments
    /// * `probe` - Hook that yields a translator for a namespace
    pub fn new(probe: TranslatorProbe) -> Self {
        ProbeAdapter { probe: Some(probe) }
    }

    /// Create an adapter for a runtime where the framework is absent.
    ///
    /// Every acquisition degrades to identity translation.
    pub fn unavailable() -> Self {
        ProbeAdapter { probe: None }
    }
}

impl TranslationAdapter for ProbeAdapter {
    fn translator(&self, namespace: Option<&str>) -> Translator {
        let Some(probe) = &self.probe else {
            return degrade(self.name(), "framework translation hook not present");
        };

        match probe(namespace) {
            Ok(translator) => translator,
            Err(error) => degrade(self.name(), &error.to_string()),
        }
    }

    fn name(&self) -> &str {
        "framework"
    }
}

/// Adapter over a two-stage framework hook (framework first, scope second).
///
/// The scope plays the role the namespace plays elsewhere; an absent
/// namespace binds the empty scope, which such frameworks treat as the
/// catalog root.
pub struct ScopedProbeAdapter {
    probe: Option<ScopedProbe>,
}

impl ScopedProbeAdapter {
    /// Create an adapter around a resolved two-stage hook.
    ///
    /// # Arguments
    /// * `probe` - Hook that yields a scope factory when the framework is
    ///   reachable
    pub fn new(probe: ScopedProbe) -> Self {
        ScopedProbeAdapter { probe: Some(probe) }
    }

    /// Create an adapter for a runtime where the framework is absent.
    pub fn unavailable() -> Self {
        ScopedProbeAdapter { probe: None }
    }
}

impl TranslationAdapter for ScopedProbeAdapter {
    fn translator(&self, namespace: Option<&str>) -> Translator {
        let Some(probe) = &self.probe else {
            return degrade(self.name(), "framework translation hook not present");
        };

        let factory = match probe() {
            Ok(factory) => factory,
            Err(error) => return degrade(self.name(), &error.to_string()),
        };

        match factory(namespace.unwrap_or("")) {
            Ok(translator) => translator,
            Err(error) => degrade(self.name(), &error.to_string()),
        }
    }

    fn name(&self) -> &str {
        "scoped"
    }
}

/// Log the degradation and hand out the identity translator.
fn degrade(adapter: &str, reason: &str) -> Translator {
    warn!(adapter, reason, "degrading to identity translation");
    TranslationMetrics::global().record_identity_degradation();
    Box::new(IdentityTranslator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{Translate, TranslateOptions};

    struct UpperTranslator;

    impl Translate for UpperTranslator {
        fn translate(
            &self,
            key: &str,
            _options: Option<&TranslateOptions>,
        ) -> Result<String, LookupError> {
            Ok(key.to_uppercase())
        }
    }

    // ==================== Single-Stage Probe Tests ====================

    #[test]
    fn test_present_probe_yields_translator() {
        let adapter = ProbeAdapter::new(Arc::new(|_ns| {
            Ok(Box::new(UpperTranslator) as Translator)
        }));

        let translator = adapter.translator(Some("common"));
        assert_eq!(translator.translate("title", None).unwrap(), "TITLE");
    }

    #[test]
    fn test_probe_receives_namespace() {
        let adapter = ProbeAdapter::new(Arc::new(|ns| {
            assert_eq!(ns, Some("checkout"));
            Ok(Box::new(UpperTranslator) as Translator)
        }));

        adapter.translator(Some("checkout"));
    }

    #[test]
    fn test_absent_probe_degrades_to_identity() {
        let adapter = ProbeAdapter::unavailable();

        let translator = adapter.translator(Some("common"));
        assert_eq!(translator.translate("title", None).unwrap(), "title");
    }

    #[test]
    fn test_failing_probe_degrades_to_identity() {
        let adapter = ProbeAdapter::new(Arc::new(|_ns| {
            Err(LookupError::Unavailable {
                reason: "translation state not ready".to_string(),
            })
        }));

        let translator = adapter.translator(None);
        assert_eq!(translator.translate("title", None).unwrap(), "title");
    }

    #[test]
    fn test_single_stage_adapter_name() {
        assert_eq!(ProbeAdapter::unavailable().name(), "framework");
    }

    // ==================== Two-Stage Probe Tests ====================

    #[test]
    fn test_scoped_probe_binds_scope() {
        let adapter = ScopedProbeAdapter::new(Arc::new(|| {
            Ok(Box::new(|scope: &str| {
                assert_eq!(scope, "checkout");
                Ok(Box::new(UpperTranslator) as Translator)
            }) as ScopeFactory)
        }));

        let translator = adapter.translator(Some("checkout"));
        assert_eq!(translator.translate("title", None).unwrap(), "TITLE");
    }

    #[test]
    fn test_scoped_probe_defaults_to_empty_scope() {
        let adapter = ScopedProbeAdapter::new(Arc::new(|| {
            Ok(Box::new(|scope: &str| {
                assert_eq!(scope, "");
                Ok(Box::new(UpperTranslator) as Translator)
            }) as ScopeFactory)
        }));

        adapter.translator(None);
    }

    #[test]
    fn test_absent_scoped_probe_degrades_to_identity() {
        let adapter = ScopedProbeAdapter::unavailable();

        let translator = adapter.translator(None);
        assert_eq!(translator.translate("title", None).unwrap(), "title");
    }

    #[test]
    fn test_framework_stage_failure_degrades() {
        let adapter = ScopedProbeAdapter::new(Arc::new(|| {
            Err(LookupError::Unavailable {
                reason: "framework context missing".to_string(),
            })
        }));

        let translator = adapter.translator(Some("common"));
        assert_eq!(translator.translate("title", None).unwrap(), "title");
    }

    #[test]
    fn test_scope_stage_failure_degrades() {
        let adapter = ScopedProbeAdapter::new(Arc::new(|| {
            Ok(Box::new(|_scope: &str| {
                Err(LookupError::Source {
                    reason: "scope rejected".to_string(),
                })
            }) as ScopeFactory)
        }));

        let translator = adapter.translator(Some("common"));
        assert_eq!(translator.translate("title", None).unwrap(), "title");
    }

    #[test]
    fn test_two_stage_adapter_name() {
        assert_eq!(ScopedProbeAdapter::unavailable().name(), "scoped");
    }
}
