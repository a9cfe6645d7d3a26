use crate::errors;
use crate::pack::Pack;

use num_traits::FromPrimitive;

/// Record-layer content type. Alerts always travel as `ContentType::Alert`;
/// the other values exist so a transport can carry every record kind.
#[derive(Debug, Copy, Clone, Primitive, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContentType {
    ChangeCipherSpec = 20,
    Alert = 21,
    Handshake = 22,
    ApplicationData = 23,
}

impl Pack for ContentType {
    fn pack(&self) -> Vec<u8> {
        vec![*self as u8]
    }

    fn unpack(v: &[u8]) -> Result<(Self, &[u8]), errors::AlertError> {
        match v.split_first() {
            None => Err(errors::AlertError::TruncatedInput),
            Some((&code, rest)) => {
                let content_type = Self::from_u8(code).ok_or(errors::AlertError::UnknownContentType(code))?;
                Ok((content_type, rest))
            }
        }
    }
}
