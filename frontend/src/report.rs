use serde::Serialize;

/// Where a reported failure happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorContext {
    /// Component tag, e.g. `"categories"` or `"products"`.
    pub file: &'static str,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Sink for failures the page recovers from or shows to the visitor.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str, context: &ErrorContext);
}

/// Reports through `tracing` as a structured error event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, message: &str, context: &ErrorContext) {
        tracing::error!(
            file = context.file,
            url = %context.url,
            category = context.category.as_deref(),
            "{message}"
        );
    }
}
