//! GATT access
//!
//! The transport trait the driver consumes, the service/characteristic
//! handles it hands out, and the accessor that resolves and reads or
//! writes a single property over it.

pub mod accessor;
pub mod transport;
pub mod types;


pub use accessor::{ConnectionState, FaultPolicy, PropertyAccessor};
pub use transport::GattTransport;
pub use types::{Characteristic, CharacteristicProperty, PropertyAddress, Service};
