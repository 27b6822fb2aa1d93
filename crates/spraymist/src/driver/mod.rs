//! SprayMist F638 driver
//!
//! [`SprayMist`] owns one transport to one device. Getters return
//! [`crate::Result`]; setters and connection calls report plain success
//! and never fail loudly, since actuation is best effort.

use crate::address::BdAddr;
use crate::error::{Error, PropertyError, Result};
use crate::gatt::{ConnectionState, FaultPolicy, GattTransport, PropertyAccessor};
use crate::protocol::constants::DEFAULT_MANUAL_SECONDS;
use crate::protocol::{
    BatteryLevel, ManualTimer, ManualTimerUpdate, PauseDays, Property, RunningMode, WorkingMode,
};
use log::{debug, warn};


#[derive(Debug)]
pub struct SprayMist<T: GattTransport> {
    accessor: PropertyAccessor<T>,
}

impl<T: GattTransport> SprayMist<T> {
    /// Create a driver for the device at `address`. Nothing is opened yet.
    pub fn new(transport: T, address: BdAddr) -> Self {
        Self {
            accessor: PropertyAccessor::new(transport, address),
        }
    }

    pub fn address(&self) -> &BdAddr {
        self.accessor.address()
    }

    pub fn transport(&self) -> &T {
        self.accessor.transport()
    }

    pub fn transport_mut(&mut self) -> &mut T {
        self.accessor.transport_mut()
    }

    /// Open the link, re-opening it if already connected.
    pub fn connect(&mut self) -> bool {
        self.accessor.connect().is_ok()
    }

    /// Close the link. Succeeds trivially when not connected.
    ///
    /// If the transport fails to close the link the driver still considers
    /// itself connected.
    pub fn disconnect(&mut self) -> bool {
        self.accessor.disconnect().is_ok()
    }

    pub fn connected(&self) -> bool {
        self.accessor.is_connected()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.accessor.connection_state()
    }

    pub fn working_mode(&mut self) -> Result<WorkingMode> {
        let payload = self.read(Property::WorkingMode)?;
        WorkingMode::decode(&payload).map_err(|e| Error::new(Property::WorkingMode, e))
    }

    pub fn running_mode(&mut self) -> Result<RunningMode> {
        let payload = self.read(Property::RunningMode)?;
        RunningMode::decode(&payload).map_err(|e| Error::new(Property::RunningMode, e))
    }

    /// Battery charge in percent.
    pub fn battery_level(&mut self) -> Result<u8> {
        let payload = self.read(Property::BatteryLevel)?;
        BatteryLevel::decode(&payload)
            .map(|level| level.percent())
            .map_err(|e| Error::new(Property::BatteryLevel, e))
    }

    /// Both manual timer fields from a single read.
    pub fn manual_timer(&mut self) -> Result<ManualTimer> {
        self.read_manual_timer()
            .map_err(|e| Error::new(Property::ManualTimer, e))
    }

    pub fn manual_on(&mut self) -> Result<bool> {
        self.manual_timer().map(|timer| timer.enabled)
    }

    /// Manual watering duration in seconds.
    pub fn manual_time(&mut self) -> Result<u16> {
        self.manual_timer().map(|timer| timer.seconds)
    }

    /// Start manual watering for `seconds`, [`DEFAULT_MANUAL_SECONDS`] if `None`.
    pub fn switch_manual_on(&mut self, seconds: Option<u16>) -> bool {
        self.update_manual_timer(ManualTimerUpdate {
            enabled: Some(true),
            seconds: Some(seconds.unwrap_or(DEFAULT_MANUAL_SECONDS)),
        })
    }

    /// Stop manual watering, keeping the stored duration.
    pub fn switch_manual_off(&mut self) -> bool {
        self.update_manual_timer(ManualTimerUpdate {
            enabled: Some(false),
            seconds: None,
        })
    }

    /// Days the automatic schedule is suspended.
    pub fn pause_days(&mut self) -> Result<u8> {
        let payload = self.read(Property::PauseDays)?;
        PauseDays::decode(&payload)
            .map(|days| days.days())
            .map_err(|e| Error::new(Property::PauseDays, e))
    }

    /// Suspend the automatic schedule for `days` days; 0 resumes it.
    pub fn set_pause_days(&mut self, days: u8) -> bool {
        let frame = PauseDays::new(days).encode();
        self.write(Property::PauseDays, &frame)
    }

    fn read(&mut self, property: Property) -> Result<Vec<u8>> {
        debug!("reading {}", property);
        self.accessor
            .read_property(&property.address())
            .map_err(|e| Error::new(property, e))
    }

    fn read_manual_timer(&mut self) -> std::result::Result<ManualTimer, PropertyError> {
        let payload = self.accessor.read_property(&Property::ManualTimer.address())?;
        Ok(ManualTimer::decode(&payload)?)
    }

    /// Read the timer, merge `update` into it and write it back.
    fn update_manual_timer(&mut self, update: ManualTimerUpdate) -> bool {
        let current = match self.read_manual_timer() {
            Ok(current) => current,
            Err(err) => {
                warn!("cannot update manual timer: {}", err);
                return false;
            }
        };

        let next = current.merge(update);
        self.write(Property::ManualTimer, &next.encode())
    }

    fn write(&mut self, property: Property, frame: &[u8]) -> bool {
        match self
            .accessor
            .write_property(&property.address(), frame, FaultPolicy::Tolerate)
        {
            Ok(()) => true,
            Err(err) => {
                warn!("failed to write {}: {}", property, err);
                false
            }
        }
    }
}
