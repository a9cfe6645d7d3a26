use crate::pack;

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Primitive)]
#[repr(u8)]
pub enum AlertLevel {
    Warning = 1,
    Fatal = 2,
}

impl AlertLevel {
    pub const ALL: [AlertLevel; 2] = [AlertLevel::Warning, AlertLevel::Fatal];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            AlertLevel::Warning => "warning",
            AlertLevel::Fatal => "fatal",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Primitive)]
#[repr(u8)]
pub enum AlertDescription {
    CloseNotify = 0,
    UnexpectedMessage = 10,
    BadRecordMac = 20,
    DecryptionFailed = 21,
    RecordOverflow = 22,
    DecompressionFailure = 30,
    HandshakeFailure = 40,
    BadCertificate = 42,
    UnsupportedCertificate = 43,
    CertificateRevoked = 44,
    CertificateExpired = 45,
    CertificateUnknown = 46,
    IllegalParameter = 47,
    UnknownCa = 48,
    AccessDenied = 49,
    DecodeError = 50,
    DecryptError = 51,
    ProtocolVersion = 70,
    InsufficientSecurity = 71,
    InternalError = 80,
    InappropriateFallback = 86,
    UserCanceled = 90,
    MissingExtension = 109,
    UnsupportedExtension = 110,
    CertificateUnobtainable = 111,
    UnrecognizedName = 112,
    BadCertificateStatusResponse = 113,
    BadCertificateHashValue = 114,
    UnknownPskIdentity = 115,
    CertificateRequired = 116,
    NoApplicationProtocol = 120,
}

impl AlertDescription {
    /// Every description, in code order.
    pub const ALL: [AlertDescription; 31] = [
        AlertDescription::CloseNotify,
        AlertDescription::UnexpectedMessage,
        AlertDescription::BadRecordMac,
        AlertDescription::DecryptionFailed,
        AlertDescription::RecordOverflow,
        AlertDescription::DecompressionFailure,
        AlertDescription::HandshakeFailure,
        AlertDescription::BadCertificate,
        AlertDescription::UnsupportedCertificate,
        AlertDescription::CertificateRevoked,
        AlertDescription::CertificateExpired,
        AlertDescription::CertificateUnknown,
        AlertDescription::IllegalParameter,
        AlertDescription::UnknownCa,
        AlertDescription::AccessDenied,
        AlertDescription::DecodeError,
        AlertDescription::DecryptError,
        AlertDescription::ProtocolVersion,
        AlertDescription::InsufficientSecurity,
        AlertDescription::InternalError,
        AlertDescription::InappropriateFallback,
        AlertDescription::UserCanceled,
        AlertDescription::MissingExtension,
        AlertDescription::UnsupportedExtension,
        AlertDescription::CertificateUnobtainable,
        AlertDescription::UnrecognizedName,
        AlertDescription::BadCertificateStatusResponse,
        AlertDescription::BadCertificateHashValue,
        AlertDescription::UnknownPskIdentity,
        AlertDescription::CertificateRequired,
        AlertDescription::NoApplicationProtocol,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            AlertDescription::CloseNotify => "close_notify",
            AlertDescription::UnexpectedMessage => "unexpected_message",
            AlertDescription::BadRecordMac => "bad_record_mac",
            AlertDescription::DecryptionFailed => "decryption_failed",
            AlertDescription::RecordOverflow => "record_overflow",
            AlertDescription::DecompressionFailure => "decompression_failure",
            AlertDescription::HandshakeFailure => "handshake_failure",
            AlertDescription::BadCertificate => "bad_certificate",
            AlertDescription::UnsupportedCertificate => "unsupported_certificate",
            AlertDescription::CertificateRevoked => "certificate_revoked",
            AlertDescription::CertificateExpired => "certificate_expired",
            AlertDescription::CertificateUnknown => "certificate_unknown",
            AlertDescription::IllegalParameter => "illegal_parameter",
            AlertDescription::UnknownCa => "unknown_ca",
            AlertDescription::AccessDenied => "access_denied",
            AlertDescription::DecodeError => "decode_error",
            AlertDescription::DecryptError => "decrypt_error",
            AlertDescription::ProtocolVersion => "protocol_version",
            AlertDescription::InsufficientSecurity => "insufficient_security",
            AlertDescription::InternalError => "internal_error",
            AlertDescription::InappropriateFallback => "inappropriate_fallback",
            AlertDescription::UserCanceled => "user_canceled",
            AlertDescription::MissingExtension => "missing_extension",
            AlertDescription::UnsupportedExtension => "unsupported_extension",
            AlertDescription::CertificateUnobtainable => "certificate_unobtainable",
            AlertDescription::UnrecognizedName => "unrecognized_name",
            AlertDescription::BadCertificateStatusResponse => "bad_certificate_status_response",
            AlertDescription::BadCertificateHashValue => "bad_certificate_hash_value",
            AlertDescription::UnknownPskIdentity => "unknown_psk_identity",
            AlertDescription::CertificateRequired => "certificate_required",
            AlertDescription::NoApplicationProtocol => "no_application_protocol",
        }
    }

    /// Inverse of `name()`. Case-sensitive.
    pub fn from_name(name: &str) -> Option<AlertDescription> {
        Self::ALL.iter().copied().find(|d| d.name() == name)
    }

    // None renders through the fallback in `Alert::human_readable`.
    fn sentence(self) -> Option<&'static str> {
        let s = match self {
            AlertDescription::CloseNotify => "The connection was closed normally",
            AlertDescription::UnexpectedMessage => "An unexpected message was received",
            AlertDescription::BadRecordMac => "A record failed MAC verification",
            AlertDescription::DecryptionFailed => "Decryption of a record failed",
            AlertDescription::RecordOverflow => "A record exceeded the maximum allowed length",
            AlertDescription::DecompressionFailure => "Decompression of a record failed",
            AlertDescription::HandshakeFailure => "No acceptable set of security parameters could be negotiated",
            AlertDescription::BadCertificate => "The certificate was corrupt or malformed",
            AlertDescription::UnsupportedCertificate => "The certificate type is not supported",
            AlertDescription::CertificateRevoked => "The certificate was revoked by its signer",
            AlertDescription::CertificateExpired => "The certificate has expired",
            AlertDescription::CertificateUnknown => "An unspecified issue occurred while processing the certificate",
            AlertDescription::IllegalParameter => "A protocol field was out of range or inconsistent",
            AlertDescription::UnknownCa => "The certificate authority could not be verified",
            AlertDescription::AccessDenied => "The client certificate was refused",
            AlertDescription::DecodeError => "A message could not be decoded",
            AlertDescription::DecryptError => "A handshake cryptographic operation failed",
            AlertDescription::ProtocolVersion => "The protocol version is not supported",
            AlertDescription::InsufficientSecurity => "The negotiated security is too weak",
            AlertDescription::InternalError => "An internal error unrelated to the peer occurred",
            AlertDescription::InappropriateFallback => "An inappropriate protocol version fallback was attempted",
            AlertDescription::UserCanceled => "The user canceled the handshake",
            AlertDescription::MissingExtension => "A required extension is missing",
            AlertDescription::UnsupportedExtension => "An unsupported extension was received",
            AlertDescription::CertificateUnobtainable => "The certificate could not be obtained",
            AlertDescription::UnrecognizedName => "The server name was not recognized",
            AlertDescription::BadCertificateStatusResponse => "The certificate status response was invalid",
            AlertDescription::BadCertificateHashValue => "The certificate hash value did not match",
            AlertDescription::UnknownPskIdentity => "The pre-shared key identity is unknown",
            AlertDescription::CertificateRequired => "A client certificate is required",
            AlertDescription::NoApplicationProtocol => "No application protocol could be agreed on",
        };
        Some(s)
    }
}

impl fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A TLS alert message: one level and one description.
///
/// Values are immutable once built. Decoding rejects unknown codes, so an
/// `Alert` always holds valid members of both enumerations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Alert {
    level: AlertLevel,
    description: AlertDescription,
}

impl Alert {
    pub const fn new(level: AlertLevel, description: AlertDescription) -> Self {
        Self { level, description }
    }

    pub fn level(&self) -> AlertLevel {
        self.level
    }

    pub fn description(&self) -> AlertDescription {
        self.description
    }

    pub fn is_fatal(&self) -> bool {
        self.level == AlertLevel::Fatal
    }

    pub fn is_warning(&self) -> bool {
        self.level == AlertLevel::Warning
    }

    /// Checks the description only; the level plays no part.
    pub fn is_close_notify(&self) -> bool {
        self.description == AlertDescription::CloseNotify
    }

    pub fn human_readable(&self) -> Cow<'static, str> {
        match self.description.sentence() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(format!("{}{}", UNKNOWN_ALERT_PREFIX, self.description.name())),
        }
    }

    /// Lowercase hex of the 2-byte wire form, e.g. `"0228"`.
    pub fn to_hex(&self) -> String {
        hex::encode(pack::encode(self))
    }

    pub fn to_record(&self) -> AlertRecord {
        AlertRecord {
            level: self.level.code(),
            level_name: self.level.name(),
            description: self.description.code(),
            description_name: self.description.name(),
            human_readable: self.human_readable().into_owned(),
            is_fatal: self.is_fatal(),
            is_close_notify: self.is_close_notify(),
        }
    }
}

pub(crate) const UNKNOWN_ALERT_PREFIX: &str = "Unknown alert: ";

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level.name(), self.description.name(), self.human_readable())
    }
}

/// Structured view of an [`Alert`]. The field set is fixed; log sinks and
/// listeners key on these names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlertRecord {
    pub level: u8,
    pub level_name: &'static str,
    pub description: u8,
    pub description_name: &'static str,
    pub human_readable: String,
    pub is_fatal: bool,
    pub is_close_notify: bool,
}

impl AlertRecord {
    pub fn to_json(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("level".to_string(), self.level.into());
        map.insert("level_name".to_string(), self.level_name.into());
        map.insert("description".to_string(), self.description.into());
        map.insert("description_name".to_string(), self.description_name.into());
        map.insert("human_readable".to_string(), self.human_readable.clone().into());
        map.insert("is_fatal".to_string(), self.is_fatal.into());
        map.insert("is_close_notify".to_string(), self.is_close_notify.into());
        map
    }
}
