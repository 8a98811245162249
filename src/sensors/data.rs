//! Decoded sensor output types
//!
//! All BNO055 outputs are 16-bit little-endian fixed point. The driver
//! divides raw values by the active [`ScaleTable`](super::ScaleTable)
//! divisor to produce these floating point types.

/// A three-axis measurement in physical units
///
/// The meaning of the components depends on which output the vector was
/// read from: acceleration, magnetic field, angular rate or Euler angles
/// (stored as heading = x, roll = y, pitch = z).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    /// X component (heading for Euler output)
    pub x: f32,
    /// Y component (roll for Euler output)
    pub y: f32,
    /// Z component (pitch for Euler output)
    pub z: f32,
}

impl Vector3 {
    /// Convert raw register values to physical units
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `scale` - LSB per output unit (from the active `ScaleTable`)
    #[must_use]
    pub fn from_raw(raw_x: i16, raw_y: i16, raw_z: i16, scale: f32) -> Self {
        Self {
            x: f32::from(raw_x) / scale,
            y: f32::from(raw_y) / scale,
            z: f32::from(raw_z) / scale,
        }
    }

    /// Get the magnitude of the vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the vector (make magnitude = 1.0)
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            }
        } else {
            *self
        }
    }
}

/// An orientation quaternion from the fusion output
///
/// Output in 2^-14 fixed point; a valid orientation has magnitude 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quaternion {
    /// Scalar component
    pub w: f32,
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Quaternion {
    /// Convert raw register values to unit-scaled components
    ///
    /// # Arguments
    ///
    /// * `raw_w` - Raw scalar value
    /// * `raw_x` - Raw X value
    /// * `raw_y` - Raw Y value
    /// * `raw_z` - Raw Z value
    /// * `scale` - LSB per unit (2^14 for the BNO055)
    #[must_use]
    pub fn from_raw(raw_w: i16, raw_x: i16, raw_y: i16, raw_z: i16, scale: f32) -> Self {
        Self {
            w: f32::from(raw_w) / scale,
            x: f32::from(raw_x) / scale,
            y: f32::from(raw_y) / scale,
            z: f32::from(raw_z) / scale,
        }
    }

    /// Get the magnitude of the quaternion
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the quaternion (make magnitude = 1.0)
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                w: self.w / mag,
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            }
        } else {
            *self
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        // Identity rotation
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

/// A reading from any of the BNO055 outputs
///
/// Returned by [`Bno055Driver::read_sensor`](crate::Bno055Driver::read_sensor)
/// when the caller selects the output at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorReading {
    /// A three-axis vector output
    Vector(Vector3),
    /// The fusion quaternion output
    Quaternion(Quaternion),
    /// The die temperature
    Temperature(f32),
}
