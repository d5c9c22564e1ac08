//! Process-wide registry for the active adapter and initializer.
//!
//! Exactly one adapter and one initializer are active at any time. The
//! registry is an ordinary container so a composition root can own one
//! explicitly; the process-wide singleton plus the [`set_translation_adapter`]
//! and [`set_i18n_initializer`] free functions cover the common case of a
//! single shared configuration. Swaps take effect for acquisitions that
//! happen after the swap; translators already handed out keep their source.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::adapter::TranslationAdapter;
use crate::adapters::library::LibraryAdapter;
use crate::backend::installed_backend;
use crate::init::{default_initializer, InitConfig, InitOptions, Resources};

/// Initializer signature: merge resources and options into a bootstrap
/// configuration.
pub type InitializerFn =
    Arc<dyn Fn(&Resources, &InitOptions) -> Result<InitConfig> + Send + Sync>;

/// Holder for the active translation adapter and initializer.
///
/// Both slots follow last-writer-wins. Reads hand out clones of the inner
/// `Arc`s so callers never hold the lock across a lookup.
pub struct AdapterRegistry {
    adapter: RwLock<Arc<dyn TranslationAdapter>>,
    initializer: RwLock<InitializerFn>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<AdapterRegistry> = OnceLock::new();

impl AdapterRegistry {
    /// Create a registry with the default adapter and initializer.
    ///
    /// The default adapter is the generic library adapter bound to the
    /// installed backend; the default initializer is
    /// [`default_initializer`].
    pub fn new() -> Self {
        AdapterRegistry {
            adapter: RwLock::new(Arc::new(LibraryAdapter::from_installed())),
            initializer: RwLock::new(Arc::new(default_initializer)),
        }
    }

    /// Get the global registry instance.
    ///
    /// This method initializes the registry on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn global() -> &'static AdapterRegistry {
        REGISTRY.get_or_init(AdapterRegistry::new)
    }

    /// Replace the active adapter. Last writer wins.
    ///
    /// # Arguments
    /// * `adapter` - The adapter future translator acquisitions should use
    pub fn set_adapter(&self, adapter: Arc<dyn TranslationAdapter>) {
        debug!(adapter = adapter.name(), "switching translation adapter");
        let mut slot = self.adapter.write().unwrap_or_else(PoisonError::into_inner);
        *slot = adapter;
    }

    /// Get the active adapter.
    pub fn active_adapter(&self) -> Arc<dyn TranslationAdapter> {
        let slot = self.adapter.read().unwrap_or_else(PoisonError::into_inner);
        slot.clone()
    }

    /// Replace the active initializer. Last writer wins.
    ///
    /// # Arguments
    /// * `initializer` - The merge function [`crate::init::initialize_i18n`]
    ///   should run
    pub fn set_initializer(&self, initializer: InitializerFn) {
        debug!("switching i18n initializer");
        let mut slot = self
            .initializer
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = initializer;
    }

    /// Get the active initializer.
    pub fn active_initializer(&self) -> InitializerFn {
        let slot = self
            .initializer
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        slot.clone()
    }

    /// Run the active initializer and apply the merged configuration.
    ///
    /// The configuration is forwarded to the installed backend when one is
    /// present; without a backend a warning is logged and the configuration
    /// is still returned for the caller to apply later.
    ///
    /// # Arguments
    /// * `resources` - Resource bundles keyed by language code
    /// * `options` - Caller options forwarded to the initializer
    ///
    /// # Returns
    /// * `Ok(config)` with the merged configuration
    /// * `Err` when the initializer or the backend configuration fails
    pub fn initialize(&self, resources: &Resources, options: &InitOptions) -> Result<InitConfig> {
        let initializer = self.active_initializer();
        let config = initializer(resources, options)?;

        match installed_backend() {
            Some(backend) => {
                backend.configure(&config).with_context(|| {
                    format!("backend '{}' rejected configuration", backend.name())
                })?;
            }
            None => {
                warn!("no translation backend installed; configuration not applied");
            }
        }

        Ok(config)
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        AdapterRegistry::new()
    }
}

/// Replace the adapter in the global registry.
///
/// # Arguments
/// * `adapter` - The adapter future translator acquisitions should use
pub fn set_translation_adapter(adapter: Arc<dyn TranslationAdapter>) {
    AdapterRegistry::global().set_adapter(adapter);
}

/// Replace the initializer in the global registry.
///
/// # Arguments
/// * `initializer` - The merge function [`crate::init::initialize_i18n`]
///   should run
pub fn set_i18n_initializer(initializer: InitializerFn) {
    AdapterRegistry::global().set_initializer(initializer);
}
