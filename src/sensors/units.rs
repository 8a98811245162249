//! Measurement unit selection and output scaling
//!
//! The BNO055 outputs fixed-point values whose meaning depends on the
//! `UNIT_SEL` register. [`UnitSelection`] describes one complete choice of
//! units; [`ScaleTable`] holds the matching LSB-per-unit divisors used to
//! convert raw register values to floating point.
//!
//! Magnetometer output is always in microteslas and quaternion output is
//! always in 2^-14 fixed point, regardless of `UNIT_SEL`.

/// Acceleration output unit
///
/// Applies to the accelerometer, linear acceleration and gravity vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelUnit {
    /// Meters per second squared (100 LSB = 1 m/s²)
    #[default]
    MetersPerSecondSquared,
    /// Milli-g (1 LSB = 1 mg)
    MilliG,
}

impl AccelUnit {
    /// `UNIT_SEL` bit 0 value for this unit
    pub(crate) const fn bit(self) -> bool {
        matches!(self, Self::MilliG)
    }

    /// LSB per output unit
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Self::MetersPerSecondSquared => 100.0,
            Self::MilliG => 1.0,
        }
    }
}

/// Angular rate output unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AngularRateUnit {
    /// Degrees per second (16 LSB = 1 dps)
    #[default]
    DegreesPerSecond,
    /// Radians per second (900 LSB = 1 rps)
    RadiansPerSecond,
}

impl AngularRateUnit {
    /// `UNIT_SEL` bit 1 value for this unit
    pub(crate) const fn bit(self) -> bool {
        matches!(self, Self::RadiansPerSecond)
    }

    /// LSB per output unit
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Self::DegreesPerSecond => 16.0,
            Self::RadiansPerSecond => 900.0,
        }
    }
}

/// Euler angle output unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EulerUnit {
    /// Degrees (16 LSB = 1 degree)
    #[default]
    Degrees,
    /// Radians (900 LSB = 1 radian)
    Radians,
}

impl EulerUnit {
    /// `UNIT_SEL` bit 2 value for this unit
    pub(crate) const fn bit(self) -> bool {
        matches!(self, Self::Radians)
    }

    /// LSB per output unit
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Self::Degrees => 16.0,
            Self::Radians => 900.0,
        }
    }
}

/// Temperature output unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    /// Celsius (1 LSB = 1 °C)
    #[default]
    Celsius,
    /// Fahrenheit (2 LSB = 1 °F)
    Fahrenheit,
}

impl TemperatureUnit {
    /// `UNIT_SEL` bit 4 value for this unit
    pub(crate) const fn bit(self) -> bool {
        matches!(self, Self::Fahrenheit)
    }

    /// LSB per output unit
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Self::Celsius => 1.0,
            Self::Fahrenheit => 0.5,
        }
    }
}

/// Orientation output convention
///
/// Selects the pitch rotation convention of the fusion output. Android uses
/// clockwise-increasing pitch, Windows counterclockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OrientationConvention {
    /// Android rotation convention
    #[default]
    Android,
    /// Windows rotation convention
    Windows,
}

impl OrientationConvention {
    /// `UNIT_SEL` bit 7 value for this convention
    pub(crate) const fn bit(self) -> bool {
        matches!(self, Self::Windows)
    }
}

/// Complete measurement unit selection
///
/// Written to `UNIT_SEL` by
/// [`Bno055Driver::set_units`](crate::Bno055Driver::set_units). The default
/// matches the device reset state: m/s², degrees per second, degrees,
/// Celsius, Android convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnitSelection {
    /// Unit for acceleration, linear acceleration and gravity
    pub acceleration: AccelUnit,
    /// Unit for angular rate
    pub angular_rate: AngularRateUnit,
    /// Unit for Euler angles
    pub euler_angles: EulerUnit,
    /// Unit for temperature
    pub temperature: TemperatureUnit,
    /// Orientation convention for fusion output
    pub orientation: OrientationConvention,
}

impl UnitSelection {
    /// Derive the LSB-per-unit divisors for this selection
    #[must_use]
    pub const fn scale_table(self) -> ScaleTable {
        ScaleTable {
            accel: self.acceleration.scale(),
            gyro: self.angular_rate.scale(),
            euler: self.euler_angles.scale(),
            temp: self.temperature.scale(),
            mag: ScaleTable::MAG_LSB_PER_MICROTESLA,
            quat: ScaleTable::QUAT_LSB_PER_UNIT,
        }
    }
}

/// LSB-per-unit divisors for converting raw register values
///
/// Raw 16-bit register values are divided by these factors to produce
/// measurements in the selected units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleTable {
    /// Divisor for accelerometer, linear acceleration and gravity output
    pub accel: f32,
    /// Divisor for gyroscope output
    pub gyro: f32,
    /// Divisor for Euler angle output
    pub euler: f32,
    /// Divisor for temperature output
    pub temp: f32,
    /// Divisor for magnetometer output, fixed at 16 LSB/µT
    pub mag: f32,
    /// Divisor for quaternion output, fixed at 2^14 LSB
    pub quat: f32,
}

impl ScaleTable {
    /// Magnetometer output is always 16 LSB per microtesla
    pub const MAG_LSB_PER_MICROTESLA: f32 = 16.0;
    /// Quaternion output is always 2^14 LSB per unit
    pub const QUAT_LSB_PER_UNIT: f32 = 16384.0;
}

impl Default for ScaleTable {
    fn default() -> Self {
        UnitSelection::default().scale_table()
    }
}
