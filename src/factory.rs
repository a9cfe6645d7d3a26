use crate::alert::{Alert, AlertDescription, AlertLevel};
use crate::errors::AlertError;

/// Level an alert with this description is normally sent at.
/// Only close_notify is a warning.
pub fn conventional_level(description: AlertDescription) -> AlertLevel {
    match description {
        AlertDescription::CloseNotify => AlertLevel::Warning,
        _ => AlertLevel::Fatal,
    }
}

pub fn conventional(description: AlertDescription) -> Alert {
    Alert::new(conventional_level(description), description)
}

/// Maps an error key such as `"handshake_failure"` to the alert to send for it.
///
/// Keys are the canonical description names, matched exactly.
pub fn from_error_key(key: &str) -> Result<Alert, AlertError> {
    let description = AlertDescription::from_name(key).ok_or_else(|| AlertError::UnknownErrorKey(key.to_string()))?;
    Ok(conventional(description))
}

macro_rules! new_alert_factory {
    ($($name:ident => $description:ident),* $(,)?) => {
        $(
            pub fn $name() -> Alert {
                conventional(AlertDescription::$description)
            }
        )*
    };
}

new_alert_factory!(
    close_notify => CloseNotify,
    unexpected_message => UnexpectedMessage,
    bad_record_mac => BadRecordMac,
    record_overflow => RecordOverflow,
    handshake_failure => HandshakeFailure,
    bad_certificate => BadCertificate,
    unsupported_certificate => UnsupportedCertificate,
    certificate_revoked => CertificateRevoked,
    certificate_expired => CertificateExpired,
    illegal_parameter => IllegalParameter,
    unknown_ca => UnknownCa,
    access_denied => AccessDenied,
    decode_error => DecodeError,
    decrypt_error => DecryptError,
    protocol_version => ProtocolVersion,
    insufficient_security => InsufficientSecurity,
    internal_error => InternalError,
    user_canceled => UserCanceled,
    missing_extension => MissingExtension,
    unsupported_extension => UnsupportedExtension,
    unrecognized_name => UnrecognizedName,
    bad_certificate_status_response => BadCertificateStatusResponse,
    unknown_psk_identity => UnknownPskIdentity,
    certificate_required => CertificateRequired,
    no_application_protocol => NoApplicationProtocol,
);
