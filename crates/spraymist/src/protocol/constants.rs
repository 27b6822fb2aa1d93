//! Protocol constants

use crate::gatt::PropertyAddress;
use crate::uuid::Uuid;

// Services
pub const DEVICE_STATUS_SERVICE_UUID: Uuid = Uuid::from_u16(0xFCC0);
pub const BATTERY_SERVICE_UUID: Uuid = Uuid::from_u16(0x180F);

// Characteristics
pub const WORKING_MODE_CHAR_UUID: Uuid = Uuid::from_u16(0xFCC2);
pub const RUNNING_MODE_CHAR_UUID: Uuid = Uuid::from_u16(0xFCD1);
pub const MANUAL_TIMER_CHAR_UUID: Uuid = Uuid::from_u16(0xFCD9);
pub const PAUSE_DAYS_CHAR_UUID: Uuid = Uuid::from_u16(0xFCD6);
pub const BATTERY_LEVEL_CHAR_UUID: Uuid = Uuid::from_u16(0x2A19);

pub const WORKING_MODE: PropertyAddress =
    PropertyAddress::new(DEVICE_STATUS_SERVICE_UUID, WORKING_MODE_CHAR_UUID);
pub const RUNNING_MODE: PropertyAddress =
    PropertyAddress::new(DEVICE_STATUS_SERVICE_UUID, RUNNING_MODE_CHAR_UUID);
pub const MANUAL_TIMER: PropertyAddress =
    PropertyAddress::new(DEVICE_STATUS_SERVICE_UUID, MANUAL_TIMER_CHAR_UUID);
pub const PAUSE_DAYS: PropertyAddress =
    PropertyAddress::new(DEVICE_STATUS_SERVICE_UUID, PAUSE_DAYS_CHAR_UUID);
pub const BATTERY_LEVEL: PropertyAddress =
    PropertyAddress::new(BATTERY_SERVICE_UUID, BATTERY_LEVEL_CHAR_UUID);

// Frame headers
pub const WORKING_MODE_HEADER: [u8; 2] = [0x52, 0x01];
pub const RUNNING_MODE_HEADER: [u8; 2] = [0x61, 0x01];
pub const MANUAL_TIMER_HEADER: [u8; 2] = [0x69, 0x03];
pub const PAUSE_DAYS_HEADER: [u8; 2] = [0x66, 0x01];

// Working mode values
pub const WORKING_MODE_MANUAL: u8 = 0x00;
pub const WORKING_MODE_AUTO: u8 = 0x01;

// Running mode status values
pub const RUNNING_MODE_OFF: u8 = 0x01;
pub const RUNNING_MODE_STOPPED: u8 = 0x02;
pub const RUNNING_MODE_AUTOMATIC: u8 = 0x04;
/// Set in every manual-run status; the low bits carry the previous state.
pub const RUNNING_MODE_MANUAL_FLAG: u8 = 0x08;

// Manual timer
pub const MANUAL_TIMER_FRAME_LEN: usize = 5;
pub const MANUAL_TIMER_DISABLED: u8 = 0x00;
pub const MANUAL_TIMER_ENABLED: u8 = 0x01;
/// Duration used by `switch_manual_on` when none is given.
pub const DEFAULT_MANUAL_SECONDS: u16 = 60;

pub const MAX_BATTERY_LEVEL: u8 = 100;
