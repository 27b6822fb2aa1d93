//! Error types for the spraymist driver
//!
//! Faults are classified at the accessor boundary into transport,
//! resolution and decode failures. The driver collapses all three into
//! [`Error`] for getters.

use crate::protocol::Property;
use crate::uuid::Uuid;
use thiserror::Error;

/// The BLE transport failed to carry out an operation.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("device not connected")]
    NotConnected,

    #[error("device {0} not found")]
    DeviceNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "btleplug")]
    #[error("BLE backend error: {0}")]
    Backend(#[from] ::btleplug::Error),

    #[error("{0}")]
    Other(String),
}

/// A characteristic could not be resolved to exactly one readable handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("service {0} not found")]
    ServiceNotFound(Uuid),

    #[error("characteristic {0} not found")]
    CharacteristicNotFound(Uuid),

    #[error("characteristic {uuid} is ambiguous ({count} matches)")]
    Ambiguous { uuid: Uuid, count: usize },

    #[error("characteristic {0} is not readable")]
    NotReadable(Uuid),
}

/// A payload did not match the wire format of its property.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{property}: expected {expected} bytes, got {actual}")]
    Length {
        property: Property,
        expected: usize,
        actual: usize,
    },

    #[error("{property}: unexpected header {found:02X?}")]
    Header { property: Property, found: Vec<u8> },

    #[error("{property}: unknown value 0x{value:02X}")]
    UnknownValue { property: Property, value: u8 },
}

/// Any failure while accessing a property.
#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("transport fault: {0}")]
    Transport(#[from] TransportError),

    #[error("property unavailable: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("decode fault: {0}")]
    Decode(#[from] DecodeError),
}

/// Error reported by the driver's getters.
#[derive(Error, Debug)]
#[error("failed to read {property}")]
pub struct Error {
    pub property: Property,
    #[source]
    pub source: PropertyError,
}

impl Error {
    pub(crate) fn new(property: Property, source: impl Into<PropertyError>) -> Self {
        Self {
            property,
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
