//! Translation metrics and observability module.
//!
//! Tracks how often the facade delegates to a translator, how often a
//! lookup error was recovered by falling back to the key, and how often an
//! adapter degraded to identity translation.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Number of facade delegations to a translator
    lookups: AtomicUsize,

    /// Number of lookup errors recovered by returning the key
    key_fallbacks: AtomicUsize,

    /// Number of translator acquisitions that degraded to identity
    identity_degradations: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    ///
    /// This method initializes the metrics on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            lookups: AtomicUsize::new(0),
            key_fallbacks: AtomicUsize::new(0),
            identity_degradations: AtomicUsize::new(0),
        })
    }

    /// Record a facade delegation to a translator.
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup error recovered by returning the key.
    pub fn record_key_fallback(&self) {
        self.key_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a translator acquisition that degraded to identity.
    pub fn record_identity_degradation(&self) {
        self.identity_degradations.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current lookup count.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Get the current key-fallback count.
    pub fn key_fallbacks(&self) -> usize {
        self.key_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current identity-degradation count.
    pub fn identity_degradations(&self) -> usize {
        self.identity_degradations.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let key_fallbacks = self.key_fallbacks();
        let fallback_rate = if lookups > 0 {
            (key_fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            key_fallbacks,
            fallback_rate,
            identity_degradations: self.identity_degradations(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.key_fallbacks.store(0, Ordering::Relaxed);
        self.identity_degradations.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of facade delegations
    pub lookups: usize,

    /// Number of lookup errors recovered by returning the key
    pub key_fallbacks: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,

    /// Number of translator acquisitions that degraded to identity
    pub identity_degradations: usize,
}
