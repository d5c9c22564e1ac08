//! Contract for the wrapped translation library.
//!
//! The bridge never implements resource loading, locale detection or
//! pluralization itself; those live behind [`TranslationBackend`], the
//! opaque external collaborator. A process-wide slot holds the backend the
//! application installed at startup, playing the role the wrapped library's
//! global instance plays in other ecosystems. Absence of a backend is an
//! ordinary state (`None`), answered by degrading to identity translation
//! at the adapter layer.

use std::sync::{Arc, PoisonError, RwLock};

use anyhow::Result;
use tracing::debug;

use crate::adapter::{LookupError, TranslateOptions};
use crate::init::InitConfig;

/// A concrete translation library wrapped behind the bridge.
///
/// Implementations own the whole resolution pipeline: resource storage,
/// fallback languages, pluralization. The bridge only forwards keys and a
/// merged options object.
pub trait TranslationBackend: Send + Sync {
    /// Display name used in log messages.
    fn name(&self) -> &str;

    /// Resolve `key` using the merged options.
    ///
    /// The options carry interpolation parameters plus backend-specific
    /// controls; the generic library adapter always merges the namespace in
    /// under `ns` before calling this.
    ///
    /// # Arguments
    /// * `key` - The translation key to resolve
    /// * `options` - Merged caller options, `ns` included
    fn resolve(&self, key: &str, options: &TranslateOptions) -> Result<String, LookupError>;

    /// Apply a bootstrap configuration produced by an initializer.
    ///
    /// # Arguments
    /// * `config` - The merged configuration object (`lng`, `resources`,
    ///   `fallbackLng`, ... plus any passthrough fields)
    fn configure(&self, config: &InitConfig) -> Result<()>;
}

/// Installed backend slot (empty until the application installs one)
static INSTALLED: RwLock<Option<Arc<dyn TranslationBackend>>> = RwLock::new(None);

/// Install the process-wide translation backend.
///
/// Expected to run once during application startup, before translators are
/// acquired. Last writer wins.
///
/// # Arguments
/// * `backend` - The backend instance adapters should default to
pub fn install_backend(backend: Arc<dyn TranslationBackend>) {
    debug!(backend = backend.name(), "installing translation backend");
    let mut slot = INSTALLED.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(backend);
}

/// Get the installed backend, if any.
///
/// # Returns
/// * `Some(backend)` when the application installed one
/// * `None` when no backend is present in this runtime
pub fn installed_backend() -> Option<Arc<dyn TranslationBackend>> {
    // A poisoned slot still holds a usable value.
    let slot = INSTALLED.read().unwrap_or_else(PoisonError::into_inner);
    slot.clone()
}

/// Remove the installed backend.
///
/// Only used by tests that need to observe the no-backend degradation path.
#[cfg(test)]
pub(crate) fn clear_backend() {
    let mut slot = INSTALLED.write().unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}
