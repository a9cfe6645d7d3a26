use crate::transport::TransportError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("alert needs at least 2 bytes")]
    TruncatedInput,
    #[error("Unknown alert level: {}", _0)]
    UnknownLevel(u8),
    #[error("Unknown alert description: {}", _0)]
    UnknownDescription(u8),
    #[error("Invalid content type: {}", _0)]
    UnknownContentType(u8),

    #[error("Unknown error key: {:?}", _0)]
    UnknownErrorKey(String),

    #[error("failed to send alert: {}", _0)]
    SendFailed(#[source] TransportError),
}
