//! Physical sensor configuration and axis remapping
//!
//! Range, bandwidth and operation mode of the accelerometer and gyroscope
//! live on register page 1 and are only writable in CONFIG mode. In fusion
//! modes the BNO055 manages these settings itself, so manual configuration
//! is mainly useful for the non-fusion modes.
//!
//! Defaults match the device reset state.

/// Accelerometer G range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2g
    G2 = 0,
    /// ±4g
    G4 = 1,
    /// ±8g
    G8 = 2,
    /// ±16g
    G16 = 3,
}

impl AccelRange {
    /// Decode from the `ACC_CONFIG` range field
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::G2),
            1 => Some(Self::G4),
            2 => Some(Self::G8),
            3 => Some(Self::G16),
            _ => None,
        }
    }
}

/// Accelerometer low-pass filter bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelBandwidth {
    /// 7.81 Hz
    Hz7_81 = 0,
    /// 15.63 Hz
    Hz15_63 = 1,
    /// 31.25 Hz
    Hz31_25 = 2,
    /// 62.5 Hz
    Hz62_5 = 3,
    /// 125 Hz
    Hz125 = 4,
    /// 250 Hz
    Hz250 = 5,
    /// 500 Hz
    Hz500 = 6,
    /// 1000 Hz
    Hz1000 = 7,
}

impl AccelBandwidth {
    /// Decode from the `ACC_CONFIG` bandwidth field
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Hz7_81),
            1 => Some(Self::Hz15_63),
            2 => Some(Self::Hz31_25),
            3 => Some(Self::Hz62_5),
            4 => Some(Self::Hz125),
            5 => Some(Self::Hz250),
            6 => Some(Self::Hz500),
            7 => Some(Self::Hz1000),
            _ => None,
        }
    }

    /// Filter bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> f32 {
        match self {
            Self::Hz7_81 => 7.81,
            Self::Hz15_63 => 15.63,
            Self::Hz31_25 => 31.25,
            Self::Hz62_5 => 62.5,
            Self::Hz125 => 125.0,
            Self::Hz250 => 250.0,
            Self::Hz500 => 500.0,
            Self::Hz1000 => 1000.0,
        }
    }
}

/// Accelerometer operation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOperation {
    /// Continuous measurement
    Normal = 0,
    /// Suspended, no measurement
    Suspend = 1,
    /// Duty-cycled measurement, variant 1
    LowPower1 = 2,
    /// Standby, fast wake-up
    Standby = 3,
    /// Duty-cycled measurement, variant 2
    LowPower2 = 4,
    /// Deep suspend, lowest power
    DeepSuspend = 5,
}

impl AccelOperation {
    /// Decode from the `ACC_CONFIG` operation mode field
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Normal),
            1 => Some(Self::Suspend),
            2 => Some(Self::LowPower1),
            3 => Some(Self::Standby),
            4 => Some(Self::LowPower2),
            5 => Some(Self::DeepSuspend),
            _ => None,
        }
    }
}

/// Complete accelerometer configuration (`ACC_CONFIG`, page 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelerometerConfig {
    /// G range
    pub range: AccelRange,
    /// Low-pass filter bandwidth
    pub bandwidth: AccelBandwidth,
    /// Operation mode
    pub operation: AccelOperation,
}

impl Default for AccelerometerConfig {
    fn default() -> Self {
        // Reset state: ±4g, 62.5 Hz, normal
        Self {
            range: AccelRange::G4,
            bandwidth: AccelBandwidth::Hz62_5,
            operation: AccelOperation::Normal,
        }
    }
}

/// Gyroscope angular rate range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±2000 degrees per second
    Dps2000 = 0,
    /// ±1000 degrees per second
    Dps1000 = 1,
    /// ±500 degrees per second
    Dps500 = 2,
    /// ±250 degrees per second
    Dps250 = 3,
    /// ±125 degrees per second
    Dps125 = 4,
}

impl GyroRange {
    /// Decode from the `GYR_CONFIG_0` range field
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Dps2000),
            1 => Some(Self::Dps1000),
            2 => Some(Self::Dps500),
            3 => Some(Self::Dps250),
            4 => Some(Self::Dps125),
            _ => None,
        }
    }
}

/// Gyroscope low-pass filter bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroBandwidth {
    /// 523 Hz
    Hz523 = 0,
    /// 230 Hz
    Hz230 = 1,
    /// 116 Hz
    Hz116 = 2,
    /// 47 Hz
    Hz47 = 3,
    /// 23 Hz
    Hz23 = 4,
    /// 12 Hz
    Hz12 = 5,
    /// 64 Hz
    Hz64 = 6,
    /// 32 Hz
    Hz32 = 7,
}

impl GyroBandwidth {
    /// Decode from the `GYR_CONFIG_0` bandwidth field
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Hz523),
            1 => Some(Self::Hz230),
            2 => Some(Self::Hz116),
            3 => Some(Self::Hz47),
            4 => Some(Self::Hz23),
            5 => Some(Self::Hz12),
            6 => Some(Self::Hz64),
            7 => Some(Self::Hz32),
            _ => None,
        }
    }

    /// Filter bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz523 => 523,
            Self::Hz230 => 230,
            Self::Hz116 => 116,
            Self::Hz47 => 47,
            Self::Hz23 => 23,
            Self::Hz12 => 12,
            Self::Hz64 => 64,
            Self::Hz32 => 32,
        }
    }
}

/// Gyroscope operation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroOperation {
    /// Continuous measurement
    Normal = 0,
    /// Fast power up from suspend
    FastPowerUp = 1,
    /// Deep suspend, lowest power
    DeepSuspend = 2,
    /// Suspended, no measurement
    Suspend = 3,
    /// Automatic switching between normal and fast power up
    AdvancedPowersave = 4,
}

impl GyroOperation {
    /// Decode from the `GYR_CONFIG_1` operation mode field
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Normal),
            1 => Some(Self::FastPowerUp),
            2 => Some(Self::DeepSuspend),
            3 => Some(Self::Suspend),
            4 => Some(Self::AdvancedPowersave),
            _ => None,
        }
    }
}

/// Complete gyroscope configuration (`GYR_CONFIG_0`/`GYR_CONFIG_1`, page 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroscopeConfig {
    /// Angular rate range
    pub range: GyroRange,
    /// Low-pass filter bandwidth
    pub bandwidth: GyroBandwidth,
    /// Operation mode
    pub operation: GyroOperation,
}

impl Default for GyroscopeConfig {
    fn default() -> Self {
        // Reset state: ±2000 dps, 32 Hz, normal
        Self {
            range: GyroRange::Dps2000,
            bandwidth: GyroBandwidth::Hz32,
            operation: GyroOperation::Normal,
        }
    }
}

/// One of the three device axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Device X axis
    X = 0,
    /// Device Y axis
    Y = 1,
    /// Device Z axis
    Z = 2,
}

impl Axis {
    /// Decode from an `AXIS_MAP_CONFIG` field
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }
}

/// Axis remap configuration (`AXIS_MAP_CONFIG`/`AXIS_MAP_SIGN`, page 0)
///
/// Maps device axes to chassis axes for boards where the sensor is not
/// mounted in its reference orientation. Every device axis must be used
/// exactly once; [`Bno055Driver::set_axis_remap`](crate::Bno055Driver::set_axis_remap)
/// rejects configurations that reuse an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisRemap {
    /// Device axis output as chassis X
    pub x: Axis,
    /// Device axis output as chassis Y
    pub y: Axis,
    /// Device axis output as chassis Z
    pub z: Axis,
    /// Invert the chassis X axis
    pub invert_x: bool,
    /// Invert the chassis Y axis
    pub invert_y: bool,
    /// Invert the chassis Z axis
    pub invert_z: bool,
}

impl AxisRemap {
    /// Whether each device axis is used exactly once
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(
            (self.x, self.y, self.z),
            (Axis::X, Axis::X, _)
                | (Axis::Y, Axis::Y, _)
                | (Axis::Z, Axis::Z, _)
                | (Axis::X, _, Axis::X)
                | (Axis::Y, _, Axis::Y)
                | (Axis::Z, _, Axis::Z)
                | (_, Axis::X, Axis::X)
                | (_, Axis::Y, Axis::Y)
                | (_, Axis::Z, Axis::Z)
        )
    }
}

impl Default for AxisRemap {
    fn default() -> Self {
        // Reset state: identity mapping, no inversion
        Self {
            x: Axis::X,
            y: Axis::Y,
            z: Axis::Z,
            invert_x: false,
            invert_y: false,
            invert_z: false,
        }
    }
}
