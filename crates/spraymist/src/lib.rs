//! spraymist - driver for the SprayMist F638 BLE irrigation controller
//!
//! The driver talks to the device through any [`GattTransport`]: it opens
//! the link, resolves the device's GATT characteristics, and translates
//! their compact binary payloads into typed values (working and running
//! mode, battery level, manual watering timer, pause days).
//!
//! With the `btleplug` feature, [`BtleplugTransport`] provides a blocking
//! transport on top of the platform Bluetooth stack.
//!
//! ```ignore
//! use spraymist::{BtleplugConfig, BtleplugTransport, SprayMist};
//!
//! let transport = BtleplugTransport::new(BtleplugConfig::default())?;
//! let mut device = SprayMist::new(transport, "C4:7C:8D:6A:0B:1E".parse()?);
//! println!("battery: {}%", device.battery_level()?);
//! device.switch_manual_on(Some(30));
//! device.disconnect();
//! ```

pub mod address;
pub mod driver;
pub mod error;
pub mod gatt;
pub mod protocol;
pub mod uuid;

#[cfg(feature = "btleplug")]
pub mod platform;

#[cfg(test)]
mod mock;

pub use address::BdAddr;
pub use driver::SprayMist;
pub use error::{DecodeError, Error, PropertyError, ResolutionError, Result, TransportError};
pub use gatt::{ConnectionState, GattTransport, PropertyAddress};
pub use protocol::{ManualTimer, Property, RunningMode, WorkingMode};
pub use crate::uuid::Uuid;

#[cfg(feature = "btleplug")]
pub use platform::{BtleplugConfig, BtleplugTransport};
