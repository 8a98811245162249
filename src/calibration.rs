//! Calibration status and sensor offset profiles
//!
//! The BNO055 calibrates itself continuously while running. [`CalibrationStatus`]
//! reports the per-sensor confidence the fusion has reached. Once fully
//! calibrated, the learned offsets can be read out as an [`OffsetProfile`],
//! persisted by the application and written back after the next power cycle
//! to skip the calibration dance.
//!
//! Offsets are stored on the device as 16-bit values in the currently
//! selected measurement units, so a profile read under one unit selection
//! must be written back under the same selection.

use crate::sensors::{ScaleTable, Vector3};

/// Per-sensor calibration confidence from `CALIB_STAT`
///
/// Each field ranges from 0 (uncalibrated) to 3 (fully calibrated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationStatus {
    /// Fusion system confidence
    pub system: u8,
    /// Gyroscope confidence
    pub gyroscope: u8,
    /// Accelerometer confidence
    pub accelerometer: u8,
    /// Magnetometer confidence
    pub magnetometer: u8,
}

impl CalibrationStatus {
    /// Whether every sensor and the fusion have reached full confidence
    #[must_use]
    pub const fn is_fully_calibrated(&self) -> bool {
        self.system == 3 && self.gyroscope == 3 && self.accelerometer == 3 && self.magnetometer == 3
    }
}

/// Sensor offsets and radii learned by the calibration
///
/// Read with [`Bno055Driver::offsets`](crate::Bno055Driver::offsets) and
/// restored with [`Bno055Driver::set_offsets`](crate::Bno055Driver::set_offsets).
/// Offsets are expressed in the measurement units active at the time of the
/// read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OffsetProfile {
    /// Accelerometer offset, in the selected acceleration unit
    pub accel_offset: Vector3,
    /// Magnetometer offset, in microteslas
    pub mag_offset: Vector3,
    /// Gyroscope offset, in the selected angular rate unit
    pub gyro_offset: Vector3,
    /// Accelerometer radius, in the selected acceleration unit
    pub accel_radius: f32,
    /// Magnetometer radius, in microteslas
    pub mag_radius: f32,
}

impl OffsetProfile {
    /// Decode the 22-byte offset register block at `ACC_OFFSET_X_LSB`
    pub(crate) fn from_registers(bytes: &[u8; 22], scale: &ScaleTable) -> Self {
        let word = |index: usize| i16::from_le_bytes([bytes[index], bytes[index + 1]]);
        Self {
            accel_offset: Vector3::from_raw(word(0), word(2), word(4), scale.accel),
            mag_offset: Vector3::from_raw(word(6), word(8), word(10), scale.mag),
            gyro_offset: Vector3::from_raw(word(12), word(14), word(16), scale.gyro),
            accel_radius: f32::from(word(18)) / scale.accel,
            mag_radius: f32::from(word(20)) / scale.mag,
        }
    }

    /// Encode into the 22-byte offset register block
    ///
    /// Returns `None` when a scaled value does not fit the 16-bit registers.
    pub(crate) fn to_registers(&self, scale: &ScaleTable) -> Option<[u8; 22]> {
        let values = [
            (self.accel_offset.x, scale.accel),
            (self.accel_offset.y, scale.accel),
            (self.accel_offset.z, scale.accel),
            (self.mag_offset.x, scale.mag),
            (self.mag_offset.y, scale.mag),
            (self.mag_offset.z, scale.mag),
            (self.gyro_offset.x, scale.gyro),
            (self.gyro_offset.y, scale.gyro),
            (self.gyro_offset.z, scale.gyro),
            (self.accel_radius, scale.accel),
            (self.mag_radius, scale.mag),
        ];

        let mut bytes = [0u8; 22];
        for (slot, (value, scale)) in bytes.chunks_exact_mut(2).zip(values) {
            let raw = encode_word(value, scale)?;
            slot.copy_from_slice(&raw.to_le_bytes());
        }
        Some(bytes)
    }
}

/// Scale a physical value to a raw register word, rejecting overflow
fn encode_word(value: f32, scale: f32) -> Option<i16> {
    let scaled = libm::roundf(value * scale);
    if scaled < f32::from(i16::MIN) || scaled > f32::from(i16::MAX) {
        return None;
    }
    // Bounds checked above
    #[allow(clippy::cast_possible_truncation)]
    Some(scaled as i16)
}
