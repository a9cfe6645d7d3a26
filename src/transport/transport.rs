use crate::record::ContentType;

use std::error::Error;

/// Failure reported by the record layer. Kept opaque; the handler only wraps it.
pub type TransportError = Box<dyn Error + Send + Sync>;

/// The one record-layer operation the alert handler needs: hand a payload of
/// a given content type to whatever frames, protects and ships records.
pub trait RecordTransport {
    fn send_record(&self, content_type: ContentType, payload: &[u8]) -> Result<(), TransportError>;
}

