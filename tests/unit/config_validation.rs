//! Unit tests for sensor configuration and axis remapping

use crate::common::create_initialized_driver;
use bno055::{
    AccelBandwidth, AccelOperation, AccelRange, AccelerometerConfig, Axis, AxisRemap, Error,
    GyroBandwidth, GyroOperation, GyroRange, GyroscopeConfig, Page,
};

#[test]
fn test_accel_config_wire_format() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    let config = AccelerometerConfig {
        range: AccelRange::G8,
        bandwidth: AccelBandwidth::Hz125,
        operation: AccelOperation::Normal,
    };
    driver.set_accelerometer_config(config).unwrap();

    // range = 0b10, bandwidth = 0b100 << 2, operation = 0b000 << 5
    assert!(
        interface.verify_register(Page::Page1, 0x08, 0x12),
        "ACC_CONFIG should encode range, bandwidth and operation"
    );

    let read_back = driver.accelerometer_config().unwrap();
    assert_eq!(read_back, config);
}

#[test]
fn test_gyro_config_wire_format() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    let config = GyroscopeConfig {
        range: GyroRange::Dps500,
        bandwidth: GyroBandwidth::Hz47,
        operation: GyroOperation::Normal,
    };
    driver.set_gyroscope_config(config).unwrap();

    // range = 0b010, bandwidth = 0b011 << 3
    assert!(interface.verify_register(Page::Page1, 0x0A, 0x1A));
    assert!(interface.verify_register(Page::Page1, 0x0B, 0x00));

    let read_back = driver.gyroscope_config().unwrap();
    assert_eq!(read_back, config);
}

#[test]
fn test_default_configs_read_back() {
    let (mut driver, _interface, _pin) = create_initialized_driver();

    // Power-on register values decode to the Default structs
    let accel = driver.accelerometer_config().unwrap();
    assert_eq!(accel, AccelerometerConfig::default());

    let gyro = driver.gyroscope_config().unwrap();
    assert_eq!(gyro, GyroscopeConfig::default());
}

#[test]
fn test_config_writes_require_config_mode() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    // Device left CONFIG behind the driver's back
    interface.set_operating_mode_raw(0x08);

    let result = driver.set_accelerometer_config(AccelerometerConfig::default());
    assert!(matches!(result, Err(Error::InvalidState(0x08))));

    let result = driver.set_gyroscope_config(GyroscopeConfig::default());
    assert!(matches!(result, Err(Error::InvalidState(0x08))));

    // Page 1 configuration must be untouched
    assert!(interface.verify_register(Page::Page1, 0x08, 0x0D));
    assert!(interface.verify_register(Page::Page1, 0x0A, 0x38));
}

#[test]
fn test_axis_remap_wire_format() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    // Swap X and Y, invert the new X
    let remap = AxisRemap {
        x: Axis::Y,
        y: Axis::X,
        z: Axis::Z,
        invert_x: true,
        invert_y: false,
        invert_z: false,
    };
    driver.set_axis_remap(remap).unwrap();

    assert!(
        interface.verify_register(Page::Page0, 0x41, 0x21),
        "AXIS_MAP_CONFIG should pack the axis selection"
    );
    assert!(
        interface.verify_register(Page::Page0, 0x42, 0x04),
        "AXIS_MAP_SIGN should carry the X inversion bit"
    );

    let read_back = driver.axis_remap().unwrap();
    assert_eq!(read_back, remap);
}

#[test]
fn test_axis_remap_rejects_duplicate_axes() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    let remap = AxisRemap {
        x: Axis::X,
        y: Axis::X,
        z: Axis::Z,
        ..AxisRemap::default()
    };

    let result = driver.set_axis_remap(remap);
    assert!(matches!(result, Err(Error::InvalidConfig)));
    assert_eq!(
        interface.write_count(Page::Page0, 0x41),
        0,
        "Invalid remap must be rejected before any bus traffic"
    );
}

#[test]
fn test_default_axis_remap_read_back() {
    let (mut driver, _interface, _pin) = create_initialized_driver();

    // Reset value 0x24 is the identity mapping
    let remap = driver.axis_remap().unwrap();
    assert_eq!(remap, AxisRemap::default());
}
