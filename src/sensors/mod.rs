//! Sensor data types, measurement units and physical sensor configuration
//!
//! This module provides the types shared by all sensor outputs of the BNO055:
//! - Measurement unit selection and the scale factors derived from it
//! - Decoded sensor output (vectors, quaternions, temperature)
//! - Physical sensor configuration (range, bandwidth, operation mode)
//!   and axis remapping
//!
//! All sensor operations are performed through methods on `Bno055Driver`.

pub mod config;
pub mod data;
pub mod units;

// Re-export main types
pub use config::{
    AccelBandwidth, AccelOperation, AccelRange, AccelerometerConfig, Axis, AxisRemap,
    GyroBandwidth, GyroOperation, GyroRange, GyroscopeConfig,
};
pub use data::{Quaternion, SensorReading, Vector3};
pub use units::{
    AccelUnit, AngularRateUnit, EulerUnit, OrientationConvention, ScaleTable, TemperatureUnit,
    UnitSelection,
};
