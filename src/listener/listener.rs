use crate::alert::Alert;

/// Observer of alert traffic on one connection.
///
/// Hooks run synchronously on the handler's call path, in registration
/// order. Anything slow belongs on a queue owned by the implementation.
pub trait AlertListener: Send + Sync {
    fn on_alert_received(&self, alert: &Alert);
    fn on_alert_sent(&self, alert: &Alert);
    /// Called once per connection, with the alert that closed it.
    fn on_connection_closed(&self, alert: &Alert);
}
