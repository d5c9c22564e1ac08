//! Built-in translation adapters.
//!
//! Three sources ship with the bridge: the generic library adapter over an
//! installed [`crate::backend::TranslationBackend`], the probe adapters for
//! framework-bound translation hooks, and the static dictionary adapter for
//! fixed in-process catalogs. All of them degrade to identity translation
//! instead of failing acquisition.

pub mod library;
pub mod probe;
pub mod static_dict;

pub use library::LibraryAdapter;
pub use probe::{ProbeAdapter, ScopedProbeAdapter};
pub use static_dict::{interpolate, Dictionary, StaticDictionaryAdapter};
