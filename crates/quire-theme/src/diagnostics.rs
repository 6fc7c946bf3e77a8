//! Sinks for field fallback warnings.
//!
//! The loader never logs field problems directly; it hands each
//! [`FieldWarning`] to a [`Diagnostics`] implementation. The default,
//! [`TracingDiagnostics`], forwards them to `tracing`. Tests swap in
//! [`CollectingDiagnostics`] or [`SilentDiagnostics`] per loader instead of
//! touching a global log level.

use std::sync::Mutex;

use crate::fields::FieldWarning;

/// Receives one call per field that fell back to its default.
pub trait Diagnostics: Send + Sync {
    fn field_fallback(&self, warning: &FieldWarning);
}

/// Logs invalid values at `warn` and missing keys at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn field_fallback(&self, warning: &FieldWarning) {
        if warning.is_missing() {
            tracing::debug!(
                key = warning.key,
                default = warning.fallback,
                "paragraph field not set, using default"
            );
        } else {
            tracing::warn!(
                key = warning.key,
                issue = %warning.issue,
                default = warning.fallback,
                "invalid paragraph field, using default"
            );
        }
    }
}

/// Discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn field_fallback(&self, _warning: &FieldWarning) {}
}

/// Keeps every warning in memory.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    warnings: Mutex<Vec<FieldWarning>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the warnings collected so far.
    pub fn take(&self) -> Vec<FieldWarning> {
        std::mem::take(&mut *self.lock())
    }

    /// Warnings about values that were present but unusable.
    pub fn invalid(&self) -> Vec<FieldWarning> {
        self.lock()
            .iter()
            .filter(|warning| !warning.is_missing())
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<FieldWarning>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.warnings.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn field_fallback(&self, warning: &FieldWarning) {
        self.lock().push(warning.clone());
    }
}

impl<F> Diagnostics for F
where
    F: Fn(&FieldWarning) + Send + Sync,
{
    fn field_fallback(&self, warning: &FieldWarning) {
        self(warning)
    }
}
