use crate::alert::Alert;
use crate::listener::listener::AlertListener;
use crate::logger::{AlertLogger, Context, NullLogger, Severity};

use std::sync::Arc;

/// Writes one structured log entry per alert event.
///
/// Received and sent alerts log at error when fatal, info for close_notify and
/// warning otherwise. Connection closure always logs at critical.
pub struct LoggingListener {
    logger: Arc<dyn AlertLogger>,
}

impl LoggingListener {
    pub fn new(logger: Arc<dyn AlertLogger>) -> Self {
        Self { logger }
    }

    fn alert_context(alert: &Alert) -> Context {
        crate::context! {
            "level" => alert.level().name(),
            "description" => alert.description().name(),
            "human_readable" => alert.human_readable(),
            "is_fatal" => alert.is_fatal(),
            "binary" => alert.to_hex(),
        }
    }

    fn severity(alert: &Alert) -> Severity {
        if alert.is_fatal() {
            Severity::Error
        } else if alert.is_close_notify() {
            Severity::Info
        } else {
            Severity::Warning
        }
    }
}

impl Default for LoggingListener {
    fn default() -> Self {
        Self::new(Arc::new(NullLogger))
    }
}

impl AlertListener for LoggingListener {
    fn on_alert_received(&self, alert: &Alert) {
        let severity = Self::severity(alert);
        let message = match severity {
            Severity::Error => "received fatal TLS alert",
            Severity::Info => "received TLS close_notify",
            _ => "received TLS alert",
        };
        self.logger.log(severity, message, &Self::alert_context(alert));
    }

    fn on_alert_sent(&self, alert: &Alert) {
        let severity = Self::severity(alert);
        let message = match severity {
            Severity::Error => "sent fatal TLS alert",
            Severity::Info => "sent TLS close_notify",
            _ => "sent TLS alert",
        };
        self.logger.log(severity, message, &Self::alert_context(alert));
    }

    fn on_connection_closed(&self, alert: &Alert) {
        let context = crate::context! {
            "reason_level" => alert.level().name(),
            "reason_description" => alert.description().name(),
            "reason_human_readable" => alert.human_readable(),
            "is_fatal" => alert.is_fatal(),
            "binary" => alert.to_hex(),
        };
        self.logger.critical("TLS connection closed", &context);
    }
}

#[cfg(test)]
mod tests {
    use crate::alert::{Alert, AlertDescription, AlertLevel};
    use crate::listener::listener::AlertListener;
    use crate::listener::logging::LoggingListener;
    use crate::logger::{AlertLogger, Context, Severity};

    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recording {
        entries: Mutex<Vec<(Severity, String, Context)>>,
    }

    impl Recording {
        fn entries(&self) -> Vec<(Severity, String, Context)> {
            self.entries.lock().expect("lock poisoned").clone()
        }
    }

    impl AlertLogger for Recording {
        fn log(&self, severity: Severity, message: &str, context: &Context) {
            self.entries
                .lock()
                .expect("lock poisoned")
                .push((severity, message.to_string(), context.clone()));
        }
    }

    fn listener() -> (Arc<Recording>, LoggingListener) {
        let recording = Arc::new(Recording::default());
        let listener = LoggingListener::new(recording.clone());
        (recording, listener)
    }

    #[test]
    fn fatal_received_logs_error_with_wire_form() {
        let (recording, listener) = listener();
        listener.on_alert_received(&Alert::new(AlertLevel::Fatal, AlertDescription::HandshakeFailure));

        let entries = recording.entries();
        assert_eq!(entries.len(), 1);
        let (severity, message, context) = &entries[0];
        assert_eq!(*severity, Severity::Error);
        assert_eq!(message, "received fatal TLS alert");
        assert_eq!(context["level"], "fatal");
        assert_eq!(context["description"], "handshake_failure");
        assert_eq!(context["is_fatal"], true);
        assert_eq!(context["binary"], "0228");
        assert!(context["human_readable"].as_str().map_or(false, |s| !s.is_empty()));
    }

    #[test]
    fn close_notify_logs_info() {
        let (recording, listener) = listener();
        let close = Alert::new(AlertLevel::Warning, AlertDescription::CloseNotify);
        listener.on_alert_received(&close);
        listener.on_alert_sent(&close);

        let entries = recording.entries();
        assert_eq!(entries[0].0, Severity::Info);
        assert_eq!(entries[1].0, Severity::Info);
        assert_eq!(entries[1].1, "sent TLS close_notify");
        assert_eq!(entries[1].2["binary"], "0100");
        assert_eq!(entries[1].2["is_fatal"], false);
    }

    #[test]
    fn other_warning_logs_warning() {
        let (recording, listener) = listener();
        listener.on_alert_sent(&Alert::new(AlertLevel::Warning, AlertDescription::UserCanceled));
        assert_eq!(recording.entries()[0].0, Severity::Warning);
    }

    #[test]
    fn connection_closed_is_always_critical() {
        let (recording, listener) = listener();
        listener.on_connection_closed(&Alert::new(AlertLevel::Warning, AlertDescription::CloseNotify));
        listener.on_connection_closed(&Alert::new(AlertLevel::Fatal, AlertDescription::DecodeError));

        let entries = recording.entries();
        assert!(entries.iter().all(|(severity, _, _)| *severity == Severity::Critical));
        assert_eq!(entries[0].2["is_fatal"], false);
        assert_eq!(entries[0].2["binary"], "0100");

        let context = &entries[1].2;
        assert_eq!(context.len(), 5);
        assert_eq!(context["reason_level"], "fatal");
        assert_eq!(context["reason_description"], "decode_error");
        assert!(context["reason_human_readable"].as_str().map_or(false, |s| !s.is_empty()));
        assert_eq!(context["is_fatal"], true);
        assert_eq!(context["binary"], "0232");
    }

    #[test]
    fn default_discards() {
        LoggingListener::default().on_connection_closed(&Alert::new(AlertLevel::Fatal, AlertDescription::InternalError));
    }
}
