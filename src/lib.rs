#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod calibration;
pub mod device;
pub mod interface;
pub mod modes;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use calibration::{CalibrationStatus, OffsetProfile};
pub use device::{
    Bno055Driver, Revision, SelfTestResult, SensorKind, SystemError, SystemStatus, VectorKind,
};
pub use interface::I2cInterface;
pub use modes::{OperatingMode, PowerMode};
pub use sensors::{
    AccelBandwidth, AccelOperation, AccelRange, AccelUnit, AccelerometerConfig, AngularRateUnit,
    Axis, AxisRemap, EulerUnit, GyroBandwidth, GyroOperation, GyroRange, GyroscopeConfig,
    OrientationConvention, Quaternion, ScaleTable, SensorReading, TemperatureUnit, UnitSelection,
    Vector3,
};

/// BNO055 I2C address when the COM3 pin is low (default: 0x28)
///
/// This is the most common configuration; most breakout boards pull COM3
/// low. Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_COM3_LOW: u8 = 0x28;

/// BNO055 I2C address when the COM3 pin is high (alternative: 0x29)
///
/// Use this address when the COM3 pin is explicitly pulled high to VDD.
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_COM3_HIGH: u8 = 0x29;

/// Expected value of the `CHIP_ID` register
pub const CHIP_ID_VALUE: u8 = 0xA0;

/// Register page identifiers
///
/// The BNO055 maps two register pages onto one address space; the active
/// page is selected through `PAGE_ID` (0x07, present on both pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Page 0 - identity, mode, unit and sensor data registers
    Page0 = 0,
    /// Page 1 - physical sensor configuration registers
    Page1 = 1,
}

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E, PinE> {
    /// Communication error with the device
    Bus(E),
    /// Reset line GPIO error
    Pin(PinE),
    /// Invalid `CHIP_ID` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Operation requires CONFIG mode (contains the raw mode bits read)
    InvalidState(u8),
    /// Invalid configuration parameter
    InvalidConfig,
}

impl<E, PinE> From<E> for Error<E, PinE> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
