use crate::address::BdAddr;
use crate::error::TransportError;
use crate::gatt::types::{Characteristic, Service};
use crate::uuid::Uuid;

/// One BLE link to a peripheral.
///
/// Every call blocks until the underlying stack answers. Implementations do
/// not track connection state on the driver's behalf; the accessor does.
pub trait GattTransport {
    /// Open the link to `address`. Called again on an open link to re-establish it.
    fn connect(&mut self, address: &BdAddr) -> Result<(), TransportError>;

    fn disconnect(&mut self) -> Result<(), TransportError>;

    /// Look up a service by UUID. `Ok(None)` means the device has no such service.
    fn service(&mut self, uuid: &Uuid) -> Result<Option<Service>, TransportError>;

    /// All characteristics of `service` whose UUID equals `uuid`.
    fn characteristics(
        &mut self,
        service: &Service,
        uuid: &Uuid,
    ) -> Result<Vec<Characteristic>, TransportError>;

    fn read(&mut self, characteristic: &Characteristic) -> Result<Vec<u8>, TransportError>;

    /// Write `value`, waiting for the ATT write response when `with_response` is set.
    fn write(
        &mut self,
        characteristic: &Characteristic,
        value: &[u8],
        with_response: bool,
    ) -> Result<(), TransportError>;
}
