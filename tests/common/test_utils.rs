//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use bno055::Bno055Driver;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock delay implementation for testing
///
/// This is a no-op delay that implements the embedded-hal DelayNs trait
/// for use in tests where actual delays are not needed.
#[derive(Debug, Clone, Copy)]
pub struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // No-op for testing
    }

    fn delay_us(&mut self, _us: u32) {
        // No-op for testing
    }

    fn delay_ms(&mut self, _ms: u32) {
        // No-op for testing
    }
}

/// Delay implementation that records every requested delay in milliseconds
///
/// Used to verify settling delays without actually sleeping.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    /// Requested delays, in call order
    pub delays_ms: Vec<u32>,
}

impl RecordingDelay {
    /// Create a new recording delay
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_ms.push(ns / 1_000_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.delays_ms.push(us / 1000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

/// Shared state for the mock reset pin
#[derive(Debug, Default)]
struct PinState {
    levels: Vec<bool>,
    fail_next: bool,
}

/// Mock output pin for the nRST line
///
/// Records every level change so tests can verify reset pulses. Clones
/// share state with the pin held by the driver.
#[derive(Clone, Default)]
pub struct MockPin {
    state: Rc<RefCell<PinState>>,
}

impl MockPin {
    /// Create a new mock pin
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get every level the pin was driven to, in order
    #[allow(dead_code)]
    pub fn levels(&self) -> Vec<bool> {
        self.state.borrow().levels.clone()
    }

    /// Inject a failure on the next set_low/set_high call
    #[allow(dead_code)]
    pub fn fail_next(&self) {
        self.state.borrow_mut().fail_next = true;
    }
}

/// Mock pin error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.fail_next {
            state.fail_next = false;
            return Err(MockPinError);
        }
        state.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.fail_next {
            state.fail_next = false;
            return Err(MockPinError);
        }
        state.levels.push(true);
        Ok(())
    }
}

/// Create a mock driver for testing
///
/// Returns (driver, interface, pin) where interface and pin are clones
/// sharing state with the ones held by the driver.
pub fn create_mock_driver() -> (Bno055Driver<MockInterface, MockPin>, MockInterface, MockPin) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let pin = MockPin::new();
    let pin_clone = pin.clone();
    let driver = Bno055Driver::new(interface, pin);
    (driver, interface_clone, pin_clone)
}

/// Create a mock driver and run it through init()
///
/// The operations log is cleared afterwards so tests only see their own
/// traffic.
#[allow(dead_code)]
pub fn create_initialized_driver() -> (Bno055Driver<MockInterface, MockPin>, MockInterface, MockPin)
{
    let (mut driver, interface, pin) = create_mock_driver();
    driver
        .init(&mut MockDelay)
        .expect("Failed to initialize mock driver");
    interface.clear_operations();
    (driver, interface, pin)
}

/// Assert that two floating point values are approximately equal
#[allow(dead_code)]
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
