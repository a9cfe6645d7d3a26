use serde_json::Map;
pub use serde_json::Value;
use std::fmt;

/// Structured fields attached to a log entry.
pub type Context = Map<String, Value>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Leveled structured logging sink.
pub trait AlertLogger: Send + Sync {
    fn log(&self, severity: Severity, message: &str, context: &Context);

    fn info(&self, message: &str, context: &Context) {
        self.log(Severity::Info, message, context)
    }
    fn warning(&self, message: &str, context: &Context) {
        self.log(Severity::Warning, message, context)
    }
    fn error(&self, message: &str, context: &Context) {
        self.log(Severity::Error, message, context)
    }
    fn critical(&self, message: &str, context: &Context) {
        self.log(Severity::Critical, message, context)
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl AlertLogger for NullLogger {
    fn log(&self, _severity: Severity, _message: &str, _context: &Context) {}
}

/// Forwards entries to `tracing`. `tracing` has no critical level, so critical
/// entries go out as errors tagged `critical = true`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl AlertLogger for TracingLogger {
    fn log(&self, severity: Severity, message: &str, context: &Context) {
        let context = Value::Object(context.clone());
        match severity {
            Severity::Info => tracing::info!(%context, "{}", message),
            Severity::Warning => tracing::warn!(%context, "{}", message),
            Severity::Error => tracing::error!(%context, "{}", message),
            Severity::Critical => tracing::error!(critical = true, %context, "{}", message),
        }
    }
}

/// Builds a [`Context`] from `key => value` pairs.
#[macro_export]
macro_rules! context {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::logger::Context::new();
        $(map.insert(($key).to_string(), $crate::logger::Value::from($value));)*
        map
    }};
}
