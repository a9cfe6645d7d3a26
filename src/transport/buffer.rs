use crate::record::ContentType;
use crate::transport::transport::{RecordTransport, TransportError};

use bytes::Bytes;
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Queues outbound records until the record layer drains them.
///
/// Once closed, further sends fail with `NotConnected`.
#[derive(Debug, Default)]
pub struct RecordBuffer {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<(ContentType, Bytes)>,
    closed: bool,
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queued records, oldest first, without removing them.
    pub fn records(&self) -> Vec<(ContentType, Bytes)> {
        self.lock().records.clone()
    }

    pub fn drain(&self) -> Vec<(ContentType, Bytes)> {
        std::mem::take(&mut self.lock().records)
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    pub fn close(&self) {
        self.lock().closed = true;
    }
}

impl RecordTransport for RecordBuffer {
    fn send_record(&self, content_type: ContentType, payload: &[u8]) -> Result<(), TransportError> {
        let mut inner = self.lock();
        if inner.closed {
            return Err(Box::new(io::Error::new(io::ErrorKind::NotConnected, "record buffer closed")));
        }
        inner.records.push((content_type, Bytes::copy_from_slice(payload)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::record::ContentType;
    use crate::transport::buffer::RecordBuffer;
    use crate::transport::transport::RecordTransport;

    #[test]
    fn queues_in_order_and_drains() {
        let buffer = RecordBuffer::new();
        buffer.send_record(ContentType::Alert, &[1, 0]).expect("send failed");
        buffer.send_record(ContentType::ApplicationData, b"hi").expect("send failed");
        assert_eq!(buffer.len(), 2);

        let records = buffer.drain();
        assert_eq!(records[0].0, ContentType::Alert);
        assert_eq!(&records[0].1[..], &[1, 0]);
        assert_eq!(records[1].0, ContentType::ApplicationData);
        assert!(buffer.is_empty());
    }

    #[test]
    fn closed_buffer_refuses_records() {
        let buffer = RecordBuffer::new();
        buffer.close();
        let err = buffer.send_record(ContentType::Alert, &[2, 40]).expect_err("closed buffer accepted a record");
        assert_eq!(err.to_string(), "record buffer closed");
        assert!(buffer.is_empty());
    }
}
