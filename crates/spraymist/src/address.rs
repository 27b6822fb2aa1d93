//! Bluetooth device addresses

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A Bluetooth device address, stored little-endian as on the air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BdAddr {
    pub bytes: [u8; 6],
}

impl BdAddr {
    pub fn new(bytes: [u8; 6]) -> Self {
        Self { bytes }
    }

    /// Bytes in display order, most significant octet first.
    pub fn to_be_bytes(&self) -> [u8; 6] {
        let mut bytes = self.bytes;
        bytes.reverse();
        bytes
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.bytes[5],
            self.bytes[4],
            self.bytes[3],
            self.bytes[2],
            self.bytes[1],
            self.bytes[0]
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("expected 6 octets, found {0}")]
    OctetCount(usize),

    #[error("invalid octet {0:?}")]
    InvalidOctet(String),
}

impl FromStr for BdAddr {
    type Err = AddressParseError;

    /// Parses `AA:BB:CC:DD:EE:FF`. Octets may be written with a single digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let octets: Vec<&str> = s.trim().split([':', '-']).collect();
        if octets.len() != 6 {
            return Err(AddressParseError::OctetCount(octets.len()));
        }

        let mut bytes = [0u8; 6];
        for (i, octet) in octets.iter().enumerate() {
            if octet.is_empty() || octet.len() > 2 {
                return Err(AddressParseError::InvalidOctet(octet.to_string()));
            }
            bytes[5 - i] = u8::from_str_radix(octet, 16)
                .map_err(|_| AddressParseError::InvalidOctet(octet.to_string()))?;
        }

        Ok(Self { bytes })
    }
}
