//! Pluggable translation adapter layer behind a single text facade.
//!
//! Application code asks for a [`TranslatedText`] handle and calls
//! [`TranslatedText::translate_text`]; where the text actually comes from is
//! decided by the adapter active in the [`AdapterRegistry`]. Adapters ship
//! for a wrapped translation library ([`LibraryAdapter`]), framework-bound
//! translation hooks ([`ProbeAdapter`], [`ScopedProbeAdapter`]) and fixed
//! in-process catalogs ([`StaticDictionaryAdapter`]).
//!
//! Two policies hold everywhere: acquiring a translator never fails (an
//! unreachable source degrades to identity translation with a warning), and
//! a lookup that cannot resolve returns the key itself instead of an error.

pub mod adapter;
pub mod adapters;
pub mod backend;
pub mod facade;
pub mod init;
pub mod metrics;
pub mod registry;
pub mod validator;

pub use adapter::{
    IdentityTranslator, LookupError, Translate, TranslateOptions, TranslationAdapter, Translator,
    DEFAULT_NAMESPACE,
};
pub use adapters::{
    interpolate, Dictionary, LibraryAdapter, ProbeAdapter, ScopedProbeAdapter,
    StaticDictionaryAdapter,
};
pub use backend::{install_backend, installed_backend, TranslationBackend};
pub use facade::{translated_text, TranslatedText};
pub use init::{
    default_initializer, initialize_i18n, FallbackLanguages, InitConfig, InitOptions, Resources,
};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{
    set_i18n_initializer, set_translation_adapter, AdapterRegistry, InitializerFn,
};
pub use validator::{DictionaryValidator, ValidationReport};
