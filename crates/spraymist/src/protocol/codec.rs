//! Property codec
//!
//! Pure conversions between characteristic payloads and typed values.
//! Framed properties start with a two byte header naming the property;
//! decoding checks it along with the payload length.

use super::constants::*;
use super::Property;
use crate::error::DecodeError;
use byteorder::{BigEndian, ByteOrder};
use std::fmt;

/// Check length and header of a framed payload and return its body.
fn unframe<'a>(
    property: Property,
    header: &[u8; 2],
    payload: &'a [u8],
    body_len: usize,
) -> Result<&'a [u8], DecodeError> {
    let expected = header.len() + body_len;
    if payload.len() != expected {
        return Err(DecodeError::Length {
            property,
            expected,
            actual: payload.len(),
        });
    }

    let (found, body) = payload.split_at(header.len());
    if found != header {
        return Err(DecodeError::Header {
            property,
            found: found.to_vec(),
        });
    }

    Ok(body)
}

/// Scheduling mode the device is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkingMode {
    Auto,
    Manual,
}

impl WorkingMode {
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let body = unframe(Property::WorkingMode, &WORKING_MODE_HEADER, payload, 1)?;
        match body[0] {
            WORKING_MODE_AUTO => Ok(Self::Auto),
            WORKING_MODE_MANUAL => Ok(Self::Manual),
            value => Err(DecodeError::UnknownValue {
                property: Property::WorkingMode,
                value,
            }),
        }
    }

    pub fn encode(&self) -> [u8; 3] {
        let value = match self {
            Self::Auto => WORKING_MODE_AUTO,
            Self::Manual => WORKING_MODE_MANUAL,
        };
        [WORKING_MODE_HEADER[0], WORKING_MODE_HEADER[1], value]
    }
}

impl fmt::Display for WorkingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

/// What the device is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunningMode {
    Off,
    Stopped,
    RunningAutomatic,
    RunningManual,
}

impl RunningMode {
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let body = unframe(Property::RunningMode, &RUNNING_MODE_HEADER, payload, 1)?;
        let status = body[0];
        match status {
            RUNNING_MODE_OFF => Ok(Self::Off),
            RUNNING_MODE_STOPPED => Ok(Self::Stopped),
            RUNNING_MODE_AUTOMATIC => Ok(Self::RunningAutomatic),
            s if s & RUNNING_MODE_MANUAL_FLAG != 0
                && matches!(
                    s & !RUNNING_MODE_MANUAL_FLAG,
                    RUNNING_MODE_OFF | RUNNING_MODE_STOPPED
                ) =>
            {
                Ok(Self::RunningManual)
            }
            value => Err(DecodeError::UnknownValue {
                property: Property::RunningMode,
                value,
            }),
        }
    }

    pub fn encode(&self) -> [u8; 3] {
        let status = match self {
            Self::Off => RUNNING_MODE_OFF,
            Self::Stopped => RUNNING_MODE_STOPPED,
            Self::RunningAutomatic => RUNNING_MODE_AUTOMATIC,
            Self::RunningManual => RUNNING_MODE_MANUAL_FLAG | RUNNING_MODE_STOPPED,
        };
        [RUNNING_MODE_HEADER[0], RUNNING_MODE_HEADER[1], status]
    }
}

impl fmt::Display for RunningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Off => "off",
            Self::Stopped => "stopped",
            Self::RunningAutomatic => "running (automatic)",
            Self::RunningManual => "running (manual)",
        };
        f.write_str(s)
    }
}

/// Battery charge in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    pub fn percent(&self) -> u8 {
        self.0
    }

    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        match payload {
            [level] if *level <= MAX_BATTERY_LEVEL => Ok(Self(*level)),
            [level] => Err(DecodeError::UnknownValue {
                property: Property::BatteryLevel,
                value: *level,
            }),
            _ => Err(DecodeError::Length {
                property: Property::BatteryLevel,
                expected: 1,
                actual: payload.len(),
            }),
        }
    }

    pub fn encode(&self) -> [u8; 1] {
        [self.0]
    }
}

/// Manual watering switch and its duration
///
/// Both fields share one characteristic, so changing either one means
/// writing the whole payload back. Use [`ManualTimer::merge`] on a freshly
/// read value rather than building one from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualTimer {
    pub enabled: bool,
    pub seconds: u16,
}

/// Fields to change in a [`ManualTimer`]; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualTimerUpdate {
    pub enabled: Option<bool>,
    pub seconds: Option<u16>,
}

impl ManualTimer {
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let body = unframe(
            Property::ManualTimer,
            &MANUAL_TIMER_HEADER,
            payload,
            MANUAL_TIMER_FRAME_LEN - MANUAL_TIMER_HEADER.len(),
        )?;

        let enabled = match body[0] {
            MANUAL_TIMER_ENABLED => true,
            MANUAL_TIMER_DISABLED => false,
            value => {
                return Err(DecodeError::UnknownValue {
                    property: Property::ManualTimer,
                    value,
                })
            }
        };
        let seconds = BigEndian::read_u16(&body[1..3]);

        Ok(Self { enabled, seconds })
    }

    pub fn encode(&self) -> [u8; MANUAL_TIMER_FRAME_LEN] {
        let mut frame = [0u8; MANUAL_TIMER_FRAME_LEN];
        frame[..2].copy_from_slice(&MANUAL_TIMER_HEADER);
        frame[2] = if self.enabled {
            MANUAL_TIMER_ENABLED
        } else {
            MANUAL_TIMER_DISABLED
        };
        BigEndian::write_u16(&mut frame[3..5], self.seconds);
        frame
    }

    pub fn merge(self, update: ManualTimerUpdate) -> Self {
        Self {
            enabled: update.enabled.unwrap_or(self.enabled),
            seconds: update.seconds.unwrap_or(self.seconds),
        }
    }
}

/// Days the automatic schedule is suspended, 0 when not paused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PauseDays(u8);

impl PauseDays {
    pub fn new(days: u8) -> Self {
        Self(days)
    }

    pub fn days(&self) -> u8 {
        self.0
    }

    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let body = unframe(Property::PauseDays, &PAUSE_DAYS_HEADER, payload, 1)?;
        Ok(Self(body[0]))
    }

    pub fn encode(&self) -> [u8; 3] {
        [PAUSE_DAYS_HEADER[0], PAUSE_DAYS_HEADER[1], self.0]
    }
}
