//! Unit tests for error propagation and recovery

use crate::common::mock_interface::MockError;
use crate::common::{create_initialized_driver, create_mock_driver, MockDelay};
use bno055::{Error, OperatingMode, Page, VectorKind};

#[test]
fn test_init_success() {
    let (mut driver, _interface, _pin) = create_mock_driver();

    driver.init(&mut MockDelay).unwrap();
    assert_eq!(driver.chip_id().unwrap(), 0xA0);
}

#[test]
fn test_init_rejects_wrong_chip_id() {
    let (mut driver, interface, _pin) = create_mock_driver();

    // Some other device is answering on this address
    interface.set_chip_id(0x00);

    let result = driver.init(&mut MockDelay);
    assert!(matches!(result, Err(Error::InvalidDevice(0x00))));
}

#[test]
fn test_init_bus_error() {
    let (mut driver, interface, _pin) = create_mock_driver();

    interface.fail_next_read();

    let result = driver.init(&mut MockDelay);
    assert!(matches!(
        result,
        Err(Error::Bus(MockError::Communication))
    ));
}

#[test]
fn test_init_pin_error() {
    let (mut driver, _interface, pin) = create_mock_driver();

    // Identity check passes, releasing the reset line fails
    pin.fail_next();

    let result = driver.init(&mut MockDelay);
    assert!(matches!(result, Err(Error::Pin(_))));
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    interface.fail_next_read();
    let result = driver.calibration_status();
    assert!(result.is_err(), "Read should fail when error is injected");

    let result = driver.calibration_status();
    assert!(
        result.is_ok(),
        "Subsequent read should succeed after single failure"
    );
}

#[test]
fn test_write_failure_recovery() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    interface.fail_next_write();
    let result = driver.set_operating_mode(OperatingMode::Ndof, &mut MockDelay);
    assert!(matches!(
        result,
        Err(Error::Bus(MockError::Communication))
    ));

    driver
        .set_operating_mode(OperatingMode::Ndof, &mut MockDelay)
        .unwrap();
    assert!(
        interface.verify_register(Page::Page0, 0x3D, 0x0C),
        "Retry should reach the device"
    );
}

#[test]
fn test_page_switch_failure_propagation() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    // Accelerometer configuration lives on page 1
    interface.fail_page_switch(true);
    let result = driver.accelerometer_config();
    assert!(matches!(result, Err(Error::Bus(MockError::PageSwitch))));

    interface.fail_page_switch(false);
    let result = driver.accelerometer_config();
    assert!(result.is_ok(), "Should succeed once page switching works");
}

#[test]
fn test_error_state_isolation() {
    let (mut driver, interface, _pin) = create_initialized_driver();

    interface.fail_next_read();
    let result = driver.read_vector(VectorKind::Accelerometer);
    assert!(result.is_err(), "Accelerometer read should fail");

    // Unrelated reads are unaffected
    interface.set_temperature_data(25);
    let temperature = driver.read_temperature().unwrap();
    assert!((temperature - 25.0).abs() < 1e-4);

    interface.set_accel_data(100, 200, 300);
    let result = driver.read_vector(VectorKind::Accelerometer);
    assert!(result.is_ok(), "Accelerometer read should recover");
}
