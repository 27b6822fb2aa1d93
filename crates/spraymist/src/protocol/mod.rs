//! SprayMist F638 property protocol
//!
//! Fixed GATT addresses and the binary layout of every property the
//! driver exposes.

pub mod codec;
pub mod constants;

#[cfg(test)]
mod tests;

pub use codec::{
    BatteryLevel, ManualTimer, ManualTimerUpdate, PauseDays, RunningMode, WorkingMode,
};

use crate::gatt::PropertyAddress;
use std::fmt;

/// Properties exposed by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    WorkingMode,
    RunningMode,
    BatteryLevel,
    ManualTimer,
    PauseDays,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkingMode => "working mode",
            Self::RunningMode => "running mode",
            Self::BatteryLevel => "battery level",
            Self::ManualTimer => "manual timer",
            Self::PauseDays => "pause days",
        }
    }

    /// GATT location of the property.
    pub fn address(&self) -> PropertyAddress {
        match self {
            Self::WorkingMode => constants::WORKING_MODE,
            Self::RunningMode => constants::RUNNING_MODE,
            Self::BatteryLevel => constants::BATTERY_LEVEL,
            Self::ManualTimer => constants::MANUAL_TIMER,
            Self::PauseDays => constants::PAUSE_DAYS,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
