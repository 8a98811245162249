//! Operating and power mode definitions
//!
//! The BNO055 starts in CONFIG mode after reset. Sensor data is only produced
//! in one of the non-config modes; configuration registers are only writable
//! in CONFIG mode. Switching between modes requires a settling delay which
//! [`Bno055Driver::set_operating_mode`](crate::Bno055Driver::set_operating_mode)
//! handles internally.

/// Operating mode of the BNO055
///
/// Non-fusion modes output raw calibrated sensor data from the selected
/// sensors. Fusion modes additionally run the on-chip sensor fusion and
/// produce orientation output (Euler angles, quaternion, linear acceleration
/// and gravity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Configuration mode, no sensor output. All writable registers accessible.
    Config = 0x00,
    /// Accelerometer only
    AccOnly = 0x01,
    /// Magnetometer only
    MagOnly = 0x02,
    /// Gyroscope only
    GyroOnly = 0x03,
    /// Accelerometer and magnetometer
    AccMag = 0x04,
    /// Accelerometer and gyroscope
    AccGyro = 0x05,
    /// Magnetometer and gyroscope
    MagGyro = 0x06,
    /// All three sensors, no fusion
    Amg = 0x07,
    /// Fusion of accelerometer and gyroscope (relative orientation)
    Imu = 0x08,
    /// Fusion of accelerometer and magnetometer (absolute heading)
    Compass = 0x09,
    /// Magnetometer for games: fusion of accelerometer and magnetometer
    /// with magnetometer substituting for the gyroscope
    M4g = 0x0A,
    /// Full fusion with the fast magnetometer calibration disabled
    NdofFmcOff = 0x0B,
    /// Full 9 degrees of freedom fusion (absolute orientation)
    Ndof = 0x0C,
}

impl OperatingMode {
    /// Decode an operating mode from the low nibble of `OPR_MODE`
    ///
    /// Returns `None` for the reserved values 0x0D-0x0F.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x00 => Some(Self::Config),
            0x01 => Some(Self::AccOnly),
            0x02 => Some(Self::MagOnly),
            0x03 => Some(Self::GyroOnly),
            0x04 => Some(Self::AccMag),
            0x05 => Some(Self::AccGyro),
            0x06 => Some(Self::MagGyro),
            0x07 => Some(Self::Amg),
            0x08 => Some(Self::Imu),
            0x09 => Some(Self::Compass),
            0x0A => Some(Self::M4g),
            0x0B => Some(Self::NdofFmcOff),
            0x0C => Some(Self::Ndof),
            _ => None,
        }
    }

    /// Whether this mode runs the on-chip sensor fusion
    ///
    /// Only fusion modes produce Euler angles, quaternions, linear
    /// acceleration and gravity output.
    #[must_use]
    pub const fn is_fusion(self) -> bool {
        matches!(
            self,
            Self::Imu | Self::Compass | Self::M4g | Self::NdofFmcOff | Self::Ndof
        )
    }
}

/// Power mode of the BNO055
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// All selected sensors always on
    Normal = 0x00,
    /// Enters a reduced power state when no motion is detected
    LowPower = 0x01,
    /// System paused, all sensors and the microcontroller in sleep
    Suspend = 0x02,
}

impl PowerMode {
    /// Decode a power mode from the low bits of `PWR_MODE`
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x00 => Some(Self::Normal),
            0x01 => Some(Self::LowPower),
            0x02 => Some(Self::Suspend),
            _ => None,
        }
    }
}
