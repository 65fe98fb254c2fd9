//! Diagnostics for degraded resolution
//!
//! Resolution never aborts on malformed content; it emits a fallback node
//! and records one of these. The surrounding service decides what an
//! accumulation of diagnostics means.

use std::fmt;

/// A note about content that resolved in degraded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub message: String,
}

impl Diagnostic {
    pub fn new(category: DiagnosticCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// Category of degraded resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCategory {
    /// Node shape matched no primitive tag and no component reference
    UnknownNode,
    /// Component name not present in the library
    Component,
    /// Variant name not present on the component
    Variant,
    /// `$each` source missing or not an array
    Each,
    /// Component instantiated itself, directly or transitively
    Recursion,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::UnknownNode => write!(f, "unknown-node"),
            DiagnosticCategory::Component => write!(f, "component"),
            DiagnosticCategory::Variant => write!(f, "variant"),
            DiagnosticCategory::Each => write!(f, "each"),
            DiagnosticCategory::Recursion => write!(f, "recursion"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let diag = Diagnostic::new(DiagnosticCategory::Component, "no component named 'Nav'");
        assert_eq!(diag.to_string(), "component: no component named 'Nav'");
    }
}
