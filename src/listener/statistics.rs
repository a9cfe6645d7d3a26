use crate::alert::Alert;
use crate::listener::listener::AlertListener;

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Counters collected by [`StatisticsListener`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AlertStatistics {
    pub total_alerts_received: u64,
    pub total_alerts_sent: u64,
    pub fatal_alerts_received: u64,
    pub fatal_alerts_sent: u64,
    pub warning_alerts_received: u64,
    pub warning_alerts_sent: u64,
    pub connections_closed_count: u64,
    pub received_alerts_by_type: BTreeMap<String, u64>,
    pub sent_alerts_by_type: BTreeMap<String, u64>,
}

/// Counts alerts in both directions, split by level and by description name.
///
/// All counters sit behind one lock, so `snapshot` and `reset` never observe
/// or leave a half-updated set.
#[derive(Debug, Default)]
pub struct StatisticsListener {
    stats: Mutex<AlertStatistics>,
}

impl StatisticsListener {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, AlertStatistics> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> AlertStatistics {
        self.lock().clone()
    }

    pub fn reset(&self) {
        *self.lock() = AlertStatistics::default();
    }

    pub fn total_alerts_received(&self) -> u64 {
        self.lock().total_alerts_received
    }

    pub fn total_alerts_sent(&self) -> u64 {
        self.lock().total_alerts_sent
    }

    pub fn fatal_alerts_received(&self) -> u64 {
        self.lock().fatal_alerts_received
    }

    pub fn fatal_alerts_sent(&self) -> u64 {
        self.lock().fatal_alerts_sent
    }

    pub fn warning_alerts_received(&self) -> u64 {
        self.lock().warning_alerts_received
    }

    pub fn warning_alerts_sent(&self) -> u64 {
        self.lock().warning_alerts_sent
    }

    pub fn connections_closed_count(&self) -> u64 {
        self.lock().connections_closed_count
    }

    pub fn received_alerts_by_type(&self) -> BTreeMap<String, u64> {
        self.lock().received_alerts_by_type.clone()
    }

    pub fn sent_alerts_by_type(&self) -> BTreeMap<String, u64> {
        self.lock().sent_alerts_by_type.clone()
    }
}

impl AlertListener for StatisticsListener {
    fn on_alert_received(&self, alert: &Alert) {
        let mut stats = self.lock();
        stats.total_alerts_received += 1;
        if alert.is_fatal() {
            stats.fatal_alerts_received += 1;
        } else {
            stats.warning_alerts_received += 1;
        }
        *stats
            .received_alerts_by_type
            .entry(alert.description().name().to_string())
            .or_insert(0) += 1;
    }

    fn on_alert_sent(&self, alert: &Alert) {
        let mut stats = self.lock();
        stats.total_alerts_sent += 1;
        if alert.is_fatal() {
            stats.fatal_alerts_sent += 1;
        } else {
            stats.warning_alerts_sent += 1;
        }
        *stats.sent_alerts_by_type.entry(alert.description().name().to_string()).or_insert(0) += 1;
    }

    fn on_connection_closed(&self, _alert: &Alert) {
        self.lock().connections_closed_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::alert::{Alert, AlertDescription, AlertLevel};
    use crate::listener::listener::AlertListener;
    use crate::listener::statistics::{AlertStatistics, StatisticsListener};

    const HANDSHAKE_FAILURE: Alert = Alert::new(AlertLevel::Fatal, AlertDescription::HandshakeFailure);
    const CLOSE_NOTIFY: Alert = Alert::new(AlertLevel::Warning, AlertDescription::CloseNotify);

    #[test]
    fn starts_at_zero() {
        assert_eq!(StatisticsListener::new().snapshot(), AlertStatistics::default());
    }

    #[test]
    fn counts_received_by_level_and_type() {
        let listener = StatisticsListener::new();
        listener.on_alert_received(&HANDSHAKE_FAILURE);
        listener.on_alert_received(&HANDSHAKE_FAILURE);
        listener.on_alert_received(&CLOSE_NOTIFY);

        assert_eq!(listener.total_alerts_received(), 3);
        assert_eq!(listener.fatal_alerts_received(), 2);
        assert_eq!(listener.warning_alerts_received(), 1);
        assert_eq!(listener.total_alerts_sent(), 0);

        let by_type = listener.received_alerts_by_type();
        assert_eq!(by_type.get("handshake_failure"), Some(&2));
        assert_eq!(by_type.get("close_notify"), Some(&1));
        assert!(listener.sent_alerts_by_type().is_empty());
    }

    #[test]
    fn counts_sent_and_closures() {
        let listener = StatisticsListener::new();
        listener.on_alert_sent(&CLOSE_NOTIFY);
        listener.on_alert_sent(&Alert::new(AlertLevel::Fatal, AlertDescription::CertificateExpired));
        listener.on_connection_closed(&CLOSE_NOTIFY);

        assert_eq!(listener.total_alerts_sent(), 2);
        assert_eq!(listener.fatal_alerts_sent(), 1);
        assert_eq!(listener.warning_alerts_sent(), 1);
        assert_eq!(listener.connections_closed_count(), 1);
        assert_eq!(listener.sent_alerts_by_type().get("certificate_expired"), Some(&1));
    }

    #[test]
    fn reset_zeroes_everything() {
        let listener = StatisticsListener::new();
        listener.on_alert_received(&HANDSHAKE_FAILURE);
        listener.on_alert_sent(&CLOSE_NOTIFY);
        listener.on_connection_closed(&HANDSHAKE_FAILURE);
        listener.reset();
        assert_eq!(listener.snapshot(), AlertStatistics::default());

        listener.on_alert_received(&CLOSE_NOTIFY);
        assert_eq!(listener.total_alerts_received(), 1);
    }

    #[test]
    fn snapshot_serializes_with_stable_keys() {
        let listener = StatisticsListener::new();
        listener.on_alert_received(&HANDSHAKE_FAILURE);
        let json = serde_json::to_value(listener.snapshot()).expect("serializing statistics failed");
        assert_eq!(json["total_alerts_received"], 1);
        assert_eq!(json["received_alerts_by_type"]["handshake_failure"], 1);
        assert_eq!(json.as_object().map(|o| o.len()), Some(9));
    }
}
