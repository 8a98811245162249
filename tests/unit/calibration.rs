//! Unit tests for calibration status and offset profiles

use crate::common::create_initialized_driver;
use crate::common::test_utils::assert_float_eq;
use bno055::{Error, OffsetProfile, Page, Vector3};

const EPSILON: f32 = 1e-4;

#[test]
fn test_calibration_status_decode() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    // sys = 3, gyr = 2, acc = 1, mag = 0
    interface.set_calibration_status(0b1110_0100);

    let status = driver.calibration_status().unwrap();
    assert_eq!(status.system, 3);
    assert_eq!(status.gyroscope, 2);
    assert_eq!(status.accelerometer, 1);
    assert_eq!(status.magnetometer, 0);
    assert!(!status.is_fully_calibrated());
}

#[test]
fn test_fully_calibrated() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    interface.set_calibration_status(0xFF);

    let status = driver.calibration_status().unwrap();
    assert_eq!(status.system, 3);
    assert_eq!(status.gyroscope, 3);
    assert_eq!(status.accelerometer, 3);
    assert_eq!(status.magnetometer, 3);
    assert!(status.is_fully_calibrated());
}

#[test]
fn test_offsets_read_scaled() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    let mut block = [0u8; 22];
    // Accel offset (1.0, -2.0, 0.5) m/s² at 100 LSB/(m/s²)
    block[0..2].copy_from_slice(&100i16.to_le_bytes());
    block[2..4].copy_from_slice(&(-200i16).to_le_bytes());
    block[4..6].copy_from_slice(&50i16.to_le_bytes());
    // Mag offset (1.0, -2.0, 3.0) µT at 16 LSB/µT
    block[6..8].copy_from_slice(&16i16.to_le_bytes());
    block[8..10].copy_from_slice(&(-32i16).to_le_bytes());
    block[10..12].copy_from_slice(&48i16.to_le_bytes());
    // Gyro offset (2.0, -1.0, 0.5) dps at 16 LSB/dps
    block[12..14].copy_from_slice(&32i16.to_le_bytes());
    block[14..16].copy_from_slice(&(-16i16).to_le_bytes());
    block[16..18].copy_from_slice(&8i16.to_le_bytes());
    // Radii: 1000 LSB accel -> 10.0 m/s², 480 LSB mag -> 30.0 µT
    block[18..20].copy_from_slice(&1000i16.to_le_bytes());
    block[20..22].copy_from_slice(&480i16.to_le_bytes());
    interface.set_offset_registers(&block);

    let profile = driver.offsets().unwrap();
    assert_float_eq(profile.accel_offset.x, 1.0, EPSILON);
    assert_float_eq(profile.accel_offset.y, -2.0, EPSILON);
    assert_float_eq(profile.accel_offset.z, 0.5, EPSILON);
    assert_float_eq(profile.mag_offset.x, 1.0, EPSILON);
    assert_float_eq(profile.mag_offset.y, -2.0, EPSILON);
    assert_float_eq(profile.mag_offset.z, 3.0, EPSILON);
    assert_float_eq(profile.gyro_offset.x, 2.0, EPSILON);
    assert_float_eq(profile.gyro_offset.y, -1.0, EPSILON);
    assert_float_eq(profile.gyro_offset.z, 0.5, EPSILON);
    assert_float_eq(profile.accel_radius, 10.0, EPSILON);
    assert_float_eq(profile.mag_radius, 30.0, EPSILON);
}

#[test]
fn test_offsets_write_round_trip() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    let profile = OffsetProfile {
        accel_offset: Vector3 {
            x: 1.0,
            y: -2.0,
            z: 0.5,
        },
        mag_offset: Vector3 {
            x: 12.5,
            y: -3.25,
            z: 0.0,
        },
        gyro_offset: Vector3 {
            x: 0.5,
            y: 0.0,
            z: -1.5,
        },
        accel_radius: 10.0,
        mag_radius: 30.0,
    };

    driver.set_offsets(&profile).unwrap();

    // First accel offset word: 1.0 m/s² * 100 = 100 LSB little-endian
    assert!(interface.verify_register(Page::Page0, 0x55, 100));
    assert!(interface.verify_register(Page::Page0, 0x56, 0));

    let read_back = driver.offsets().unwrap();
    assert_float_eq(read_back.accel_offset.x, profile.accel_offset.x, EPSILON);
    assert_float_eq(read_back.accel_offset.y, profile.accel_offset.y, EPSILON);
    assert_float_eq(read_back.accel_offset.z, profile.accel_offset.z, EPSILON);
    assert_float_eq(read_back.mag_offset.x, profile.mag_offset.x, EPSILON);
    assert_float_eq(read_back.mag_offset.y, profile.mag_offset.y, EPSILON);
    assert_float_eq(read_back.gyro_offset.z, profile.gyro_offset.z, EPSILON);
    assert_float_eq(read_back.accel_radius, profile.accel_radius, EPSILON);
    assert_float_eq(read_back.mag_radius, profile.mag_radius, EPSILON);
}

#[test]
fn test_set_offsets_requires_config_mode() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    // Device left CONFIG behind the driver's back
    interface.set_operating_mode_raw(0x0C);

    let result = driver.set_offsets(&OffsetProfile::default());
    assert!(matches!(result, Err(Error::InvalidState(0x0C))));
    assert_eq!(
        interface.write_count(Page::Page0, 0x55),
        0,
        "Rejected offset restore must not touch the offset registers"
    );
}

#[test]
fn test_set_offsets_rejects_overflow() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    // 400 m/s² at 100 LSB/(m/s²) exceeds the 16-bit offset registers
    let profile = OffsetProfile {
        accel_offset: Vector3 {
            x: 400.0,
            y: 0.0,
            z: 0.0,
        },
        ..OffsetProfile::default()
    };

    let result = driver.set_offsets(&profile);
    assert!(matches!(result, Err(Error::InvalidConfig)));
    assert_eq!(interface.write_count(Page::Page0, 0x55), 0);
}
