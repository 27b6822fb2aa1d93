//! Unit tests for the property codec

use super::codec::*;
use super::constants::*;
use super::Property;
use crate::error::DecodeError;

fn bytes(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

#[test]
fn test_working_mode_decoding() {
    assert_eq!(WorkingMode::decode(&bytes("520101")), Ok(WorkingMode::Auto));
    assert_eq!(WorkingMode::decode(&bytes("520100")), Ok(WorkingMode::Manual));

    assert_eq!(
        WorkingMode::decode(&bytes("520103")),
        Err(DecodeError::UnknownValue {
            property: Property::WorkingMode,
            value: 0x03
        })
    );
}

#[test]
fn test_working_mode_round_trip() {
    for mode in [WorkingMode::Auto, WorkingMode::Manual] {
        assert_eq!(WorkingMode::decode(&mode.encode()), Ok(mode));
    }
}

#[test]
fn test_running_mode_decoding() {
    assert_eq!(RunningMode::decode(&bytes("610101")), Ok(RunningMode::Off));
    assert_eq!(RunningMode::decode(&bytes("610102")), Ok(RunningMode::Stopped));
    assert_eq!(
        RunningMode::decode(&bytes("610104")),
        Ok(RunningMode::RunningAutomatic)
    );
    assert_eq!(
        RunningMode::decode(&bytes("61010A")),
        Ok(RunningMode::RunningManual)
    );
    assert_eq!(
        RunningMode::decode(&bytes("610109")),
        Ok(RunningMode::RunningManual)
    );

    for status in ["610103", "61010C", "610108", "610100", "6101FF"] {
        assert!(
            matches!(
                RunningMode::decode(&bytes(status)),
                Err(DecodeError::UnknownValue { .. })
            ),
            "{status} should not decode"
        );
    }
}

#[test]
fn test_running_mode_round_trip() {
    for mode in [
        RunningMode::Off,
        RunningMode::Stopped,
        RunningMode::RunningAutomatic,
        RunningMode::RunningManual,
    ] {
        assert_eq!(RunningMode::decode(&mode.encode()), Ok(mode));
    }
}

#[test]
fn test_header_and_length_are_checked() {
    assert_eq!(
        WorkingMode::decode(&bytes("610101")),
        Err(DecodeError::Header {
            property: Property::WorkingMode,
            found: vec![0x61, 0x01]
        })
    );
    assert_eq!(
        RunningMode::decode(&bytes("6101")),
        Err(DecodeError::Length {
            property: Property::RunningMode,
            expected: 3,
            actual: 2
        })
    );
    assert!(ManualTimer::decode(&bytes("6903000000FF")).is_err());
    assert!(PauseDays::decode(&[]).is_err());
}

#[test]
fn test_battery_level_decoding() {
    assert_eq!(BatteryLevel::decode(&bytes("24")).unwrap().percent(), 36);
    assert_eq!(BatteryLevel::decode(&bytes("00")).unwrap().percent(), 0);
    assert_eq!(BatteryLevel::decode(&bytes("64")).unwrap().percent(), 100);

    assert!(matches!(
        BatteryLevel::decode(&bytes("65")),
        Err(DecodeError::UnknownValue { value: 0x65, .. })
    ));
    assert!(matches!(
        BatteryLevel::decode(&[]),
        Err(DecodeError::Length { actual: 0, .. })
    ));
}

#[test]
fn test_manual_timer_decoding() {
    let timer = ManualTimer::decode(&bytes("690300001E")).unwrap();
    assert!(!timer.enabled);
    assert_eq!(timer.seconds, 30);

    let timer = ManualTimer::decode(&bytes("690301012C")).unwrap();
    assert!(timer.enabled);
    assert_eq!(timer.seconds, 300);

    assert!(matches!(
        ManualTimer::decode(&bytes("690302001E")),
        Err(DecodeError::UnknownValue { value: 0x02, .. })
    ));
}

#[test]
fn test_manual_timer_merge_keeps_untouched_field() {
    let current = ManualTimer::decode(&bytes("690300001E")).unwrap();

    let switched_on = current.merge(ManualTimerUpdate {
        enabled: Some(true),
        seconds: None,
    });
    assert_eq!(switched_on.encode().to_vec(), bytes("690301001E"));

    let retimed = current.merge(ManualTimerUpdate {
        enabled: None,
        seconds: Some(60),
    });
    assert_eq!(retimed.encode().to_vec(), bytes("690300003C"));

    assert_eq!(current.merge(ManualTimerUpdate::default()), current);
}

#[test]
fn test_pause_days() {
    let days = PauseDays::decode(&bytes("660100")).unwrap();
    assert_eq!(days.days(), 0);

    let days = PauseDays::decode(&bytes("660107")).unwrap();
    assert_eq!(days.days(), 7);

    assert_eq!(PauseDays::new(7).encode().to_vec(), bytes("660107"));
    assert_eq!(PauseDays::new(255).encode().to_vec(), bytes("6601FF"));
}

#[test]
fn test_addresses() {
    assert_eq!(
        MANUAL_TIMER.characteristic.to_string(),
        "0000fcd9-0000-1000-8000-00805f9b34fb"
    );
    assert_eq!(
        PAUSE_DAYS.characteristic.to_string(),
        "0000fcd6-0000-1000-8000-00805f9b34fb"
    );
    assert_eq!(
        BATTERY_LEVEL.service.to_string(),
        "0000180f-0000-1000-8000-00805f9b34fb"
    );
    assert_eq!(WORKING_MODE.service, DEVICE_STATUS_SERVICE_UUID);
}
