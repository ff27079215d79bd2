use std::fmt::Display;
use std::time::Duration;
use tokio::time::Instant;

/// Type-safe identifier for toasts. Unique for the life of the toast stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

impl Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Suffix of the `toast-{type}` class.
    pub fn css_name(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}

/// A toast on screen.
///
/// `auto_dismiss == Duration::ZERO` means the toast stays until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
    pub auto_dismiss: Duration,
}

impl ToastEntry {
    pub fn is_persistent(&self) -> bool {
        self.auto_dismiss.is_zero()
    }
}
