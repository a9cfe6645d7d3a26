use crate::alert::{Alert, AlertDescription, AlertLevel};
use crate::errors;
use crate::listener::listener::AlertListener;
use crate::logger::{AlertLogger, Context, NullLogger};
use crate::pack;
use crate::record::ContentType;
use crate::transport::transport::RecordTransport;

use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Open,
    Closed,
}

/// Alert dispatcher for a single connection.
///
/// Decides when an alert ends the connection and fans every event out to the
/// registered listeners. Mutating calls take `&mut self`; a handler shared
/// between tasks needs its own lock.
pub struct AlertHandler<'a> {
    transport: &'a dyn RecordTransport,
    logger: Arc<dyn AlertLogger>,
    listeners: Vec<Arc<dyn AlertListener>>,

    state: ConnectionState,
    last_received: Option<Alert>,
    last_sent: Option<Alert>,
}

impl<'a> AlertHandler<'a> {
    pub fn new(transport: &'a dyn RecordTransport) -> AlertHandler<'a> {
        Self::with_logger(transport, Arc::new(NullLogger))
    }

    pub fn with_logger(transport: &'a dyn RecordTransport, logger: Arc<dyn AlertLogger>) -> AlertHandler<'a> {
        AlertHandler {
            transport,
            logger,
            listeners: Vec::new(),
            state: ConnectionState::Open,
            last_received: None,
            last_sent: None,
        }
    }

    /// Processes an alert from the peer.
    ///
    /// close_notify is checked before the level: it arrives as a warning but
    /// still ends the connection. Any other warning leaves it open.
    pub fn handle_alert(&mut self, alert: Alert) {
        self.last_received = Some(alert); // STATE CHANGE
        self.logger.info("received TLS alert", &summary(&alert));

        for listener in &self.listeners {
            listener.on_alert_received(&alert);
        }

        if alert.is_close_notify() {
            self.logger.info("received close_notify, closing connection", &Context::new());
            self.close(&alert);
        } else if alert.is_fatal() {
            self.logger.error("received fatal alert, connection must close", &detail(&alert));
            self.close(&alert);
        } else {
            self.logger.warning("received warning alert", &detail(&alert));
        }
    }

    /// Decodes an alert record body and handles it. Decode errors leave the
    /// handler untouched.
    pub fn receive(&mut self, v: &[u8]) -> Result<Alert, errors::AlertError> {
        let alert = pack::decode(v)?;
        self.handle_alert(alert);
        Ok(alert)
    }

    /// Sends an alert through the record layer.
    ///
    /// `last_sent` is recorded before the transport is called and is not
    /// rolled back on failure. Listeners hear about the alert only once it is
    /// on the wire. Sending close_notify does not close this side; sending a
    /// fatal alert does.
    pub fn send_alert(&mut self, alert: Alert) -> Result<(), errors::AlertError> {
        self.last_sent = Some(alert); // STATE CHANGE
        self.logger.info("sending TLS alert", &summary(&alert));

        if let Err(e) = self.transport.send_record(ContentType::Alert, &pack::encode(&alert)) {
            let context = crate::context! {
                "alert" => Value::Object(alert.to_record().to_json()),
                "error" => e.to_string(),
            };
            self.logger.error("failed to send TLS alert", &context);
            return Err(errors::AlertError::SendFailed(e));
        }

        for listener in &self.listeners {
            listener.on_alert_sent(&alert);
        }

        if alert.is_fatal() {
            self.close(&alert);
        }
        Ok(())
    }

    pub fn send_close_notify(&mut self) -> Result<(), errors::AlertError> {
        self.send_alert(Alert::new(AlertLevel::Warning, AlertDescription::CloseNotify))
    }

    pub fn send_fatal_alert(&mut self, description: AlertDescription) -> Result<(), errors::AlertError> {
        self.send_alert(Alert::new(AlertLevel::Fatal, description))
    }

    /// Duplicates are allowed; each registration is notified separately.
    pub fn add_listener(&mut self, listener: Arc<dyn AlertListener>) {
        self.listeners.push(listener);
    }

    /// Drops every registration of `listener`, compared by identity.
    /// Unknown listeners are ignored.
    pub fn remove_listener(&mut self, listener: &Arc<dyn AlertListener>) {
        self.listeners.retain(|l| !same_listener(l, listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connection_closed(&self) -> bool {
        self.state == ConnectionState::Closed
    }

    pub fn last_received_alert(&self) -> Option<Alert> {
        self.last_received
    }

    pub fn last_sent_alert(&self) -> Option<Alert> {
        self.last_sent
    }

    fn close(&mut self, alert: &Alert) {
        if self.state == ConnectionState::Closed {
            return;
        }
        self.state = ConnectionState::Closed; // STATE CHANGE
        self.logger.info("connection closed", &crate::context! { "reason" => alert.human_readable() });

        for listener in &self.listeners {
            listener.on_connection_closed(alert);
        }
    }
}

// Compares data pointers only; vtable pointers for one type can differ between codegen units.
fn same_listener(a: &Arc<dyn AlertListener>, b: &Arc<dyn AlertListener>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

fn summary(alert: &Alert) -> Context {
    crate::context! {
        "level" => alert.level().name(),
        "description" => alert.description().name(),
        "human_readable" => alert.human_readable(),
    }
}

fn detail(alert: &Alert) -> Context {
    crate::context! {
        "description" => alert.description().name(),
        "human_readable" => alert.human_readable(),
    }
}
