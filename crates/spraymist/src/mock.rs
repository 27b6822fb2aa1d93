//! Scriptable transport for unit tests

use crate::address::BdAddr;
use crate::error::TransportError;
use crate::gatt::{Characteristic, CharacteristicProperty, GattTransport, Service};
use crate::protocol::constants::{BATTERY_SERVICE_UUID, DEVICE_STATUS_SERVICE_UUID};
use crate::uuid::Uuid;
use std::collections::HashMap;

fn fault(what: &str) -> TransportError {
    TransportError::Io(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        format!("{what} failed"),
    ))
}

/// In-memory stand-in for a BLE link.
///
/// Every characteristic UUID that is looked up resolves to `matches`
/// copies of one characteristic with `properties`; reads return whatever
/// was stored with [`MockTransport::set_value`].
pub(crate) struct MockTransport {
    pub services: Vec<Uuid>,
    pub matches: usize,
    pub properties: CharacteristicProperty,
    pub values: HashMap<Uuid, Vec<u8>>,

    pub fail_connect: bool,
    pub fail_disconnect: bool,
    pub fail_lookup: bool,
    pub fail_read: bool,
    pub fail_write: bool,

    pub connects: Vec<BdAddr>,
    pub disconnects: usize,
    pub lookups: Vec<(Uuid, Uuid)>,
    pub reads: usize,
    pub writes: Vec<(Uuid, Vec<u8>, bool)>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            services: vec![DEVICE_STATUS_SERVICE_UUID, BATTERY_SERVICE_UUID],
            matches: 1,
            properties: CharacteristicProperty::READ | CharacteristicProperty::WRITE,
            values: HashMap::new(),
            fail_connect: false,
            fail_disconnect: false,
            fail_lookup: false,
            fail_read: false,
            fail_write: false,
            connects: Vec::new(),
            disconnects: 0,
            lookups: Vec::new(),
            reads: 0,
            writes: Vec::new(),
        }
    }

    /// Store the value read back from `characteristic`, given as hex.
    pub fn set_value(&mut self, characteristic: Uuid, value: &str) {
        self.values
            .insert(characteristic, hex::decode(value).unwrap());
    }

    /// Hex of every value written so far.
    pub fn written(&self) -> Vec<String> {
        self.writes
            .iter()
            .map(|(_, value, _)| hex::encode_upper(value))
            .collect()
    }
}

impl GattTransport for MockTransport {
    fn connect(&mut self, address: &BdAddr) -> Result<(), TransportError> {
        self.connects.push(*address);
        if self.fail_connect {
            return Err(fault("connect"));
        }
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), TransportError> {
        self.disconnects += 1;
        if self.fail_disconnect {
            return Err(fault("disconnect"));
        }
        Ok(())
    }

    fn service(&mut self, uuid: &Uuid) -> Result<Option<Service>, TransportError> {
        if self.fail_lookup {
            return Err(fault("service lookup"));
        }
        Ok(self.services.contains(uuid).then(|| Service {
            uuid: *uuid,
            is_primary: true,
        }))
    }

    fn characteristics(
        &mut self,
        service: &Service,
        uuid: &Uuid,
    ) -> Result<Vec<Characteristic>, TransportError> {
        self.lookups.push((service.uuid, *uuid));
        let characteristic = Characteristic {
            uuid: *uuid,
            service_uuid: service.uuid,
            properties: self.properties,
        };
        Ok(vec![characteristic; self.matches])
    }

    fn read(&mut self, characteristic: &Characteristic) -> Result<Vec<u8>, TransportError> {
        self.reads += 1;
        if self.fail_read {
            return Err(fault("read"));
        }
        Ok(self
            .values
            .get(&characteristic.uuid)
            .cloned()
            .unwrap_or_default())
    }

    fn write(
        &mut self,
        characteristic: &Characteristic,
        value: &[u8],
        with_response: bool,
    ) -> Result<(), TransportError> {
        if self.fail_write {
            return Err(fault("write"));
        }
        self.writes
            .push((characteristic.uuid, value.to_vec(), with_response));
        Ok(())
    }
}
