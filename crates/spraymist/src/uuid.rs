//! Bluetooth UUIDs
//!
//! Every UUID is stored as a full 128-bit value. 16-bit and 32-bit
//! SIG-assigned aliases expand onto the Bluetooth base UUID
//! `00000000-0000-1000-8000-00805F9B34FB`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 128-bit Bluetooth UUID, kept in little-endian byte order.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Uuid {
    bytes: [u8; 16],
}

/// The base UUID in little-endian representation.
const BASE_UUID_BYTES: [u8; 16] = [
    0xFB, 0x34, 0x9B, 0x5F, 0x80, 0x00, 0x00, 0x80, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Offset within the base UUID where the 16/32-bit value is inserted.
const BASE_OFFSET: usize = 12;

impl Uuid {
    /// Creates a UUID from 16 bytes in big-endian (textual) order.
    pub const fn from_bytes_be(bytes: [u8; 16]) -> Self {
        let mut le = [0u8; 16];
        let mut i = 0;
        while i < 16 {
            le[i] = bytes[15 - i];
            i += 1;
        }
        Uuid { bytes: le }
    }

    /// Creates a UUID from a 16-bit SIG-assigned value.
    pub const fn from_u16(uuid16: u16) -> Self {
        let mut bytes = BASE_UUID_BYTES;
        bytes[BASE_OFFSET] = uuid16 as u8;
        bytes[BASE_OFFSET + 1] = (uuid16 >> 8) as u8;
        Uuid { bytes }
    }

    /// Creates a UUID from a 32-bit SIG-assigned value.
    pub const fn from_u32(uuid32: u32) -> Self {
        let mut bytes = BASE_UUID_BYTES;
        bytes[BASE_OFFSET] = uuid32 as u8;
        bytes[BASE_OFFSET + 1] = (uuid32 >> 8) as u8;
        bytes[BASE_OFFSET + 2] = (uuid32 >> 16) as u8;
        bytes[BASE_OFFSET + 3] = (uuid32 >> 24) as u8;
        Uuid { bytes }
    }

    /// Creates a UUID from its 128-bit integer value.
    pub const fn from_u128(value: u128) -> Self {
        Uuid {
            bytes: value.to_le_bytes(),
        }
    }

    /// Returns the bytes in big-endian order.
    pub fn as_bytes_be(&self) -> [u8; 16] {
        let mut bytes = self.bytes;
        bytes.reverse();
        bytes
    }

    /// Returns the 128-bit integer value.
    pub const fn as_u128(&self) -> u128 {
        u128::from_le_bytes(self.bytes)
    }

    fn is_sig_assigned(&self) -> bool {
        self.bytes[0..BASE_OFFSET] == BASE_UUID_BYTES[0..BASE_OFFSET]
    }

    /// The 16-bit alias, if this is a SIG-assigned 16-bit UUID.
    pub fn as_u16(&self) -> Option<u16> {
        if self.is_sig_assigned()
            && self.bytes[BASE_OFFSET + 2] == 0
            && self.bytes[BASE_OFFSET + 3] == 0
        {
            Some(u16::from_le_bytes([
                self.bytes[BASE_OFFSET],
                self.bytes[BASE_OFFSET + 1],
            ]))
        } else {
            None
        }
    }
}

impl From<u16> for Uuid {
    fn from(uuid16: u16) -> Self {
        Uuid::from_u16(uuid16)
    }
}

impl From<u32> for Uuid {
    fn from(uuid32: u32) -> Self {
        Uuid::from_u32(uuid32)
    }
}

impl PartialEq<u16> for Uuid {
    fn eq(&self, other: &u16) -> bool {
        self.as_u16() == Some(*other)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.as_bytes_be();
        write!(
            f,
            "{}-{}-{}-{}-{}",
            hex::encode(&b[0..4]),
            hex::encode(&b[4..6]),
            hex::encode(&b[6..8]),
            hex::encode(&b[8..10]),
            hex::encode(&b[10..16])
        )
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_u16() {
            Some(short) => write!(f, "Uuid(0x{:04X})", short),
            None => write!(f, "Uuid({})", self),
        }
    }
}

#[derive(Debug, Error)]
pub enum UuidParseError {
    #[error("invalid UUID length: {0} hex digits")]
    InvalidLength(usize),

    #[error("invalid UUID digits: {0}")]
    InvalidDigits(#[from] hex::FromHexError),
}

impl FromStr for Uuid {
    type Err = UuidParseError;

    /// Accepts `180f`, `0000180f` and the full form with or without hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.chars().filter(|c| *c != '-').collect();

        match cleaned.len() {
            4 => {
                let mut be = [0u8; 2];
                hex::decode_to_slice(&cleaned, &mut be)?;
                Ok(Uuid::from_u16(u16::from_be_bytes(be)))
            }
            8 => {
                let mut be = [0u8; 4];
                hex::decode_to_slice(&cleaned, &mut be)?;
                Ok(Uuid::from_u32(u32::from_be_bytes(be)))
            }
            32 => {
                let mut be = [0u8; 16];
                hex::decode_to_slice(&cleaned, &mut be)?;
                Ok(Uuid::from_bytes_be(be))
            }
            n => Err(UuidParseError::InvalidLength(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sig_alias_display() {
        let uuid = Uuid::from_u16(0xfcc0);
        assert_eq!(uuid.to_string(), "0000fcc0-0000-1000-8000-00805f9b34fb");
        assert_eq!(uuid.as_u16(), Some(0xfcc0));
        assert_eq!(format!("{:?}", uuid), "Uuid(0xFCC0)");
    }

    #[test]
    fn test_parse_forms() {
        let full: Uuid = "0000180f-0000-1000-8000-00805f9b34fb".parse().unwrap();
        let short: Uuid = "180F".parse().unwrap();
        let mid: Uuid = "0000180f".parse().unwrap();
        assert_eq!(full, short);
        assert_eq!(full, mid);
        assert_eq!(full, 0x180fu16);
    }

    #[test]
    fn test_vendor_uuid_has_no_alias() {
        let uuid = Uuid::from_u128(0x6e400001_b5a3_f393_e0a9_e50e24dcca9e);
        assert_eq!(uuid.as_u16(), None);
        assert_eq!(uuid.to_string(), "6e400001-b5a3-f393-e0a9-e50e24dcca9e");
        assert_eq!(uuid.as_u128(), 0x6e400001_b5a3_f393_e0a9_e50e24dcca9e);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "12345".parse::<Uuid>(),
            Err(UuidParseError::InvalidLength(5))
        ));
        assert!(matches!(
            "zz0f".parse::<Uuid>(),
            Err(UuidParseError::InvalidDigits(_))
        ));
    }
}
