//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A labeled span in the source table.
///
/// - **Primary labels** mark the cell or row the diagnostic is about.
/// - **Secondary labels** point at related places, such as the row that first
///   used a duplicated id.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span of this label.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the message of this label.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}
