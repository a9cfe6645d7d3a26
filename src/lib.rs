//!# TLS Alert
//! The TLS alert sub-protocol.
//!
//! `tls-alert` encodes and decodes the 2-byte alert message, decides when an
//! alert ends a connection, and tells registered listeners about every alert
//! sent or received.
//!
//! It does not frame, encrypt or ship records. Outbound alerts are handed to a
//! [`RecordTransport`](transport::RecordTransport).
//!

#[macro_use]
extern crate enum_primitive_derive;
extern crate num_traits;

#[cfg(test)]
#[macro_use]
mod test;

pub mod alert;
pub mod errors;
pub mod factory;
pub mod handler;
pub mod logger;
pub mod pack;
pub mod record;
pub mod listener {
    pub mod listener;
    pub mod logging;
    pub mod statistics;

    pub use self::listener::AlertListener;
    pub use self::logging::LoggingListener;
    pub use self::statistics::{AlertStatistics, StatisticsListener};
}
pub mod transport {
    pub mod buffer;
    pub mod transport;

    pub use self::buffer::RecordBuffer;
    pub use self::transport::{RecordTransport, TransportError};
}

pub use alert::{Alert, AlertDescription, AlertLevel, AlertRecord};
pub use errors::AlertError;
pub use handler::{AlertHandler, ConnectionState};
pub use pack::{decode, encode, Pack};
