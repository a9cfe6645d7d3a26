use crate::alert::{Alert, AlertDescription, AlertLevel};
use crate::errors::AlertError;

use num_traits::FromPrimitive;

/// Wire encoding for the pieces of an alert record.
///
/// `unpack` reads from the front of `v` and hands back whatever it did not
/// consume, so callers can decode from a larger buffered window.
pub trait Pack: Sized {
    fn len(&self) -> usize {
        self.pack().len()
    }
    fn pack(&self) -> Vec<u8>;
    fn unpack(v: &[u8]) -> Result<(Self, &[u8]), AlertError>;
}

impl Pack for AlertLevel {
    fn pack(&self) -> Vec<u8> {
        vec![self.code()]
    }

    fn unpack(v: &[u8]) -> Result<(Self, &[u8]), AlertError> {
        match v.split_first() {
            None => Err(AlertError::TruncatedInput),
            Some((&code, rest)) => {
                let level = Self::from_u8(code).ok_or(AlertError::UnknownLevel(code))?;
                Ok((level, rest))
            }
        }
    }
}

impl Pack for AlertDescription {
    fn pack(&self) -> Vec<u8> {
        vec![self.code()]
    }

    fn unpack(v: &[u8]) -> Result<(Self, &[u8]), AlertError> {
        match v.split_first() {
            None => Err(AlertError::TruncatedInput),
            Some((&code, rest)) => {
                let description = Self::from_u8(code).ok_or(AlertError::UnknownDescription(code))?;
                Ok((description, rest))
            }
        }
    }
}

impl Pack for Alert {
    fn len(&self) -> usize {
        ALERT_LENGTH
    }

    fn pack(&self) -> Vec<u8> {
        encode(self).to_vec()
    }

    fn unpack(v: &[u8]) -> Result<(Self, &[u8]), AlertError> {
        // Length is checked up front so a lone bad level byte still reports truncation.
        if v.len() < ALERT_LENGTH {
            return Err(AlertError::TruncatedInput);
        }
        let (level, v) = AlertLevel::unpack(v)?;
        let (description, rest) = AlertDescription::unpack(v)?;
        Ok((Alert::new(level, description), rest))
    }
}

pub const ALERT_LENGTH: usize = 2;

/// Decodes an alert from the first two bytes of `v`. Anything after them is ignored.
pub fn decode(v: &[u8]) -> Result<Alert, AlertError> {
    let (alert, _) = Alert::unpack(v)?;
    Ok(alert)
}

pub fn encode(alert: &Alert) -> [u8; ALERT_LENGTH] {
    [alert.level().code(), alert.description().code()]
}
