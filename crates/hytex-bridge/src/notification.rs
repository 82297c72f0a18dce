/// Severity of a user-visible notification.
///
/// Classifies a toast by intent so the rendering side can pick the matching
/// style and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral informational message that does not indicate success or failure.
    Info,
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates a non-critical issue that the user should be aware of, but
    /// does not prevent normal operation.
    Warning,
    /// Indicates an error or failure that may affect functionality.
    Error,
}

impl Severity {
    /// Glyph class the renderer should attach to a toast of this severity.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "fas fa-info-circle",
            Severity::Success => "fas fa-check-circle",
            Severity::Warning => "fas fa-exclamation-triangle",
            Severity::Error => "fas fa-exclamation-circle",
        }
    }

    /// Per-severity style tag, appended to the base toast style
    /// (e.g. `toast toast-success`).
    pub fn css_suffix(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A notification payload intended for the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The severity of the notification, determining its visual style.
    pub severity: Severity,
    /// The text content to display to the user.
    pub message: String,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}
