//! Blocking [`GattTransport`] over btleplug
//!
//! btleplug is async; this transport drives it from a private tokio
//! runtime so the driver stays synchronous.

use crate::address::BdAddr;
use crate::error::TransportError;
use crate::gatt::{Characteristic, CharacteristicProperty, GattTransport, Service};
use crate::uuid::Uuid;
use btleplug::api::{BDAddr, Central, Manager as _, Peripheral as _, ScanFilter, WriteType};
use btleplug::platform::{Adapter, Manager, Peripheral};
use log::{debug, info};
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

/// Configuration for the btleplug transport
#[derive(Debug, Clone)]
pub struct BtleplugConfig {
    /// Index of the Bluetooth adapter to use
    pub adapter_index: usize,
    /// How long to scan for the device before giving up
    pub scan_timeout: Duration,
    /// Delay between checks of the scan results
    pub scan_interval: Duration,
}

impl Default for BtleplugConfig {
    fn default() -> Self {
        Self {
            adapter_index: 0,
            scan_timeout: Duration::from_secs(10),
            scan_interval: Duration::from_millis(500),
        }
    }
}

pub struct BtleplugTransport {
    runtime: Runtime,
    adapter: Adapter,
    config: BtleplugConfig,
    peripheral: Option<Peripheral>,
}

fn to_btleplug_uuid(uuid: &Uuid) -> ::uuid::Uuid {
    ::uuid::Uuid::from_u128(uuid.as_u128())
}

fn from_btleplug_uuid(uuid: &::uuid::Uuid) -> Uuid {
    Uuid::from_u128(uuid.as_u128())
}

impl BtleplugTransport {
    /// Open the configured Bluetooth adapter. No device is contacted yet.
    pub fn new(config: BtleplugConfig) -> Result<Self, TransportError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let index = config.adapter_index;
        let adapter = runtime.block_on(async {
            let manager = Manager::new().await?;
            manager
                .adapters()
                .await?
                .into_iter()
                .nth(index)
                .ok_or_else(|| TransportError::Other(format!("no Bluetooth adapter #{index}")))
        })?;

        Ok(Self {
            runtime,
            adapter,
            config,
            peripheral: None,
        })
    }

    fn peripheral(&self) -> Result<&Peripheral, TransportError> {
        self.peripheral.as_ref().ok_or(TransportError::NotConnected)
    }

    async fn scan_for(
        adapter: &Adapter,
        config: &BtleplugConfig,
        target: BDAddr,
    ) -> Result<Peripheral, TransportError> {
        adapter.start_scan(ScanFilter::default()).await?;
        let deadline = Instant::now() + config.scan_timeout;

        let found = loop {
            let hit = adapter
                .peripherals()
                .await?
                .into_iter()
                .find(|p| p.address() == target);
            if hit.is_some() || Instant::now() >= deadline {
                break hit;
            }
            tokio::time::sleep(config.scan_interval).await;
        };

        adapter.stop_scan().await?;
        found.ok_or_else(|| TransportError::DeviceNotFound(target.to_string()))
    }

    /// The btleplug characteristic behind one of ours.
    fn lookup(
        &self,
        characteristic: &Characteristic,
    ) -> Result<btleplug::api::Characteristic, TransportError> {
        let uuid = to_btleplug_uuid(&characteristic.uuid);
        let service_uuid = to_btleplug_uuid(&characteristic.service_uuid);
        self.peripheral()?
            .characteristics()
            .into_iter()
            .find(|c| c.uuid == uuid && c.service_uuid == service_uuid)
            .ok_or_else(|| {
                TransportError::Other(format!("characteristic {} vanished", characteristic.uuid))
            })
    }
}

impl GattTransport for BtleplugTransport {
    fn connect(&mut self, address: &BdAddr) -> Result<(), TransportError> {
        let target = BDAddr::from(address.to_be_bytes());

        let peripheral = match self.peripheral.take() {
            Some(p) if p.address() == target => p,
            _ => {
                debug!("scanning for {}", address);
                self.runtime
                    .block_on(Self::scan_for(&self.adapter, &self.config, target))?
            }
        };

        self.runtime.block_on(async {
            peripheral.connect().await?;
            peripheral.discover_services().await
        })?;
        info!("{} connected, {} services", address, peripheral.services().len());

        self.peripheral = Some(peripheral);
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), TransportError> {
        let peripheral = self.peripheral()?;
        self.runtime.block_on(peripheral.disconnect())?;
        Ok(())
    }

    fn service(&mut self, uuid: &Uuid) -> Result<Option<Service>, TransportError> {
        let target = to_btleplug_uuid(uuid);
        Ok(self
            .peripheral()?
            .services()
            .into_iter()
            .find(|s| s.uuid == target)
            .map(|s| Service {
                uuid: from_btleplug_uuid(&s.uuid),
                is_primary: s.primary,
            }))
    }

    fn characteristics(
        &mut self,
        service: &Service,
        uuid: &Uuid,
    ) -> Result<Vec<Characteristic>, TransportError> {
        let service_uuid = to_btleplug_uuid(&service.uuid);
        let target = to_btleplug_uuid(uuid);

        Ok(self
            .peripheral()?
            .services()
            .into_iter()
            .filter(|s| s.uuid == service_uuid)
            .flat_map(|s| s.characteristics)
            .filter(|c| c.uuid == target)
            .map(|c| Characteristic {
                uuid: from_btleplug_uuid(&c.uuid),
                service_uuid: from_btleplug_uuid(&c.service_uuid),
                properties: CharacteristicProperty::from_bits_truncate(c.properties.bits()),
            })
            .collect())
    }

    fn read(&mut self, characteristic: &Characteristic) -> Result<Vec<u8>, TransportError> {
        let target = self.lookup(characteristic)?;
        let peripheral = self.peripheral()?;
        Ok(self.runtime.block_on(peripheral.read(&target))?)
    }

    fn write(
        &mut self,
        characteristic: &Characteristic,
        value: &[u8],
        with_response: bool,
    ) -> Result<(), TransportError> {
        let target = self.lookup(characteristic)?;
        let write_type = if with_response {
            WriteType::WithResponse
        } else {
            WriteType::WithoutResponse
        };
        let peripheral = self.peripheral()?;
        self.runtime
            .block_on(peripheral.write(&target, value, write_type))?;
        Ok(())
    }
}
