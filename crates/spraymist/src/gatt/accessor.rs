//! Property accessor
//!
//! Owns the transport and the connection state. Every property access
//! goes through [`PropertyAccessor::read_property`] or
//! [`PropertyAccessor::write_property`], which resolve the characteristic,
//! perform the operation and apply the fault policy.

use crate::address::BdAddr;
use crate::error::{PropertyError, ResolutionError, TransportError};
use crate::gatt::transport::GattTransport;
use crate::gatt::types::{Characteristic, PropertyAddress};
use log::{debug, info, warn};

/// Connection state of the link to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

/// What a transport fault during a write does to the connection state.
///
/// The driver's setters use [`FaultPolicy::Tolerate`]. [`FaultPolicy::Disconnect`]
/// is the strict policy for callers that drive the accessor directly and
/// want write faults handled like read faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultPolicy {
    /// Treat the link as lost.
    Disconnect,
    /// Report the failure and keep the current state.
    Tolerate,
}

pub struct PropertyAccessor<T: GattTransport> {
    transport: T,
    address: BdAddr,
    state: ConnectionState,
}

impl<T: GattTransport> std::fmt::Debug for PropertyAccessor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyAccessor")
            .field("address", &self.address)
            .field("state", &self.state)
            .finish()
    }
}

impl<T: GattTransport> PropertyAccessor<T> {
    /// Wrap an unopened transport for the device at `address`.
    pub fn new(transport: T, address: BdAddr) -> Self {
        Self {
            transport,
            address,
            state: ConnectionState::Disconnected,
        }
    }

    pub fn address(&self) -> &BdAddr {
        &self.address
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Open (or re-open) the link. On failure the state is `Disconnected`.
    pub fn connect(&mut self) -> Result<(), TransportError> {
        match self.transport.connect(&self.address) {
            Ok(()) => {
                info!("connected to {}", self.address);
                self.state = ConnectionState::Connected;
                Ok(())
            }
            Err(err) => {
                warn!("failed to connect to {}: {}", self.address, err);
                self.state = ConnectionState::Disconnected;
                Err(err)
            }
        }
    }

    /// Close the link. A failed close leaves the state as it was.
    pub fn disconnect(&mut self) -> Result<(), TransportError> {
        if self.state == ConnectionState::Disconnected {
            return Ok(());
        }

        if let Err(err) = self.transport.disconnect() {
            warn!("failed to disconnect from {}: {}", self.address, err);
            return Err(err);
        }

        info!("disconnected from {}", self.address);
        self.state = ConnectionState::Disconnected;
        Ok(())
    }

    /// Read the raw value of the property at `address`.
    ///
    /// Connects first if needed. A transport fault anywhere on the way
    /// marks the link as lost.
    pub fn read_property(&mut self, address: &PropertyAddress) -> Result<Vec<u8>, PropertyError> {
        let result = self.try_read(address);
        if let Err(PropertyError::Transport(err)) = &result {
            self.lose_link(err);
        }
        result
    }

    /// Write `value` to the property at `address` and wait for the acknowledgement.
    pub fn write_property(
        &mut self,
        address: &PropertyAddress,
        value: &[u8],
        policy: FaultPolicy,
    ) -> Result<(), PropertyError> {
        let result = self.try_write(address, value);
        if let Err(PropertyError::Transport(err)) = &result {
            match policy {
                FaultPolicy::Disconnect => self.lose_link(err),
                FaultPolicy::Tolerate => {
                    debug!("write to {} failed: {}", address.characteristic, err)
                }
            }
        }
        result
    }

    fn try_read(&mut self, address: &PropertyAddress) -> Result<Vec<u8>, PropertyError> {
        self.ensure_connected()?;
        let characteristic = self.resolve(address)?;
        let value = self.transport.read(&characteristic)?;
        debug!("read {} -> {}", characteristic.uuid, hex::encode(&value));
        Ok(value)
    }

    fn try_write(&mut self, address: &PropertyAddress, value: &[u8]) -> Result<(), PropertyError> {
        self.ensure_connected()?;
        let characteristic = self.resolve(address)?;
        debug!("write {} <- {}", characteristic.uuid, hex::encode(value));
        self.transport.write(&characteristic, value, true)?;
        Ok(())
    }

    fn ensure_connected(&mut self) -> Result<(), TransportError> {
        if self.is_connected() {
            return Ok(());
        }
        self.connect()
    }

    /// Find the single readable characteristic behind `address`.
    fn resolve(&mut self, address: &PropertyAddress) -> Result<Characteristic, PropertyError> {
        let service = self
            .transport
            .service(&address.service)?
            .ok_or(ResolutionError::ServiceNotFound(address.service))?;

        let mut matches = self
            .transport
            .characteristics(&service, &address.characteristic)?;

        let characteristic = match matches.len() {
            0 => {
                return Err(ResolutionError::CharacteristicNotFound(address.characteristic).into())
            }
            1 => matches.remove(0),
            count => {
                return Err(ResolutionError::Ambiguous {
                    uuid: address.characteristic,
                    count,
                }
                .into())
            }
        };

        if !characteristic.properties.can_read() {
            return Err(ResolutionError::NotReadable(characteristic.uuid).into());
        }

        Ok(characteristic)
    }

    fn lose_link(&mut self, err: &TransportError) {
        if self.state == ConnectionState::Connected {
            warn!("link to {} lost: {}", self.address, err);
        }
        self.state = ConnectionState::Disconnected;
    }
}
