//! High-level driver API for the BNO055
//!
//! This module provides a user-friendly interface to the BNO055 sensor,
//! handling register page switching, operating mode transitions, unit
//! scaling and data reading.

use crate::registers::Bno055 as RegisterDevice;
use crate::{Error, Page, CHIP_ID_VALUE};

use crate::calibration::{CalibrationStatus, OffsetProfile};
use crate::modes::{OperatingMode, PowerMode};
use crate::sensors::{
    AccelBandwidth, AccelOperation, AccelRange, AccelerometerConfig, Axis, AxisRemap,
    GyroBandwidth, GyroOperation, GyroRange, GyroscopeConfig, Quaternion, ScaleTable,
    SensorReading, UnitSelection, Vector3,
};

use device_driver::RegisterInterface;
use embedded_hal::digital::OutputPin;

/// Settling time after an operating mode change
///
/// Datasheet table 3-6 lists 7 ms to enter CONFIG mode and 19 ms to leave
/// it; a single conservative value covers both directions.
const MODE_SETTLE_MS: u32 = 50;

/// Settling time after switching the clock source
const CRYSTAL_SETTLE_MS: u32 = 650;

/// Width of the reset pulse on the nRST pin
const RESET_PULSE_MS: u32 = 100;

/// Time for the built-in self test to run
const SELF_TEST_SETTLE_MS: u32 = 400;

/// A three-axis output of the BNO055
///
/// The fusion outputs (Euler angles, linear acceleration, gravity) only
/// produce data in a fusion operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VectorKind {
    /// Calibrated accelerometer output (gravity plus motion)
    Accelerometer,
    /// Calibrated magnetometer output
    Magnetometer,
    /// Calibrated gyroscope output
    Gyroscope,
    /// Fusion orientation as Euler angles (heading, roll, pitch)
    EulerAngles,
    /// Fusion linear acceleration (motion with gravity removed)
    LinearAcceleration,
    /// Fusion gravity vector
    Gravity,
}

impl VectorKind {
    /// First register of this output's 6-byte little-endian block
    const fn base_address(self) -> u8 {
        match self {
            Self::Accelerometer => 0x08,
            Self::Magnetometer => 0x0E,
            Self::Gyroscope => 0x14,
            Self::EulerAngles => 0x1A,
            Self::LinearAcceleration => 0x28,
            Self::Gravity => 0x2E,
        }
    }
}

/// Any readable output of the BNO055
///
/// Used with [`Bno055Driver::read_sensor`] when the output to read is
/// selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorKind {
    /// Calibrated accelerometer output
    Accelerometer,
    /// Calibrated magnetometer output
    Magnetometer,
    /// Calibrated gyroscope output
    Gyroscope,
    /// Fusion orientation as Euler angles
    EulerAngles,
    /// Fusion linear acceleration
    LinearAcceleration,
    /// Fusion gravity vector
    Gravity,
    /// Fusion orientation as a quaternion
    Quaternion,
    /// Die temperature
    Temperature,
}

/// Chip and firmware revision identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Revision {
    /// Accelerometer chip ID
    pub accelerometer: u8,
    /// Magnetometer chip ID
    pub magnetometer: u8,
    /// Gyroscope chip ID
    pub gyroscope: u8,
    /// Fusion software revision
    pub software: u16,
    /// Bootloader revision
    pub bootloader: u8,
}

/// Result of the built-in self test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelfTestResult {
    /// Accelerometer self test passed
    pub accelerometer: bool,
    /// Magnetometer self test passed
    pub magnetometer: bool,
    /// Gyroscope self test passed
    pub gyroscope: bool,
    /// Microcontroller self test passed
    pub microcontroller: bool,
}

impl SelfTestResult {
    /// Whether every tested component passed
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.accelerometer && self.magnetometer && self.gyroscope && self.microcontroller
    }
}

/// System status from `SYS_STATUS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemStatus {
    /// System idle
    Idle,
    /// A system error occurred; see [`Bno055Driver::system_error`]
    SystemError,
    /// Initializing peripherals
    InitializingPeripherals,
    /// System initialization in progress
    SystemInitialization,
    /// Executing the self test
    ExecutingSelfTest,
    /// Sensor fusion algorithm running
    RunningFusion,
    /// Running without sensor fusion
    RunningNoFusion,
    /// A status code not listed in the datasheet
    Unknown(u8),
}

impl SystemStatus {
    /// Decode a `SYS_STATUS` register value
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Idle,
            1 => Self::SystemError,
            2 => Self::InitializingPeripherals,
            3 => Self::SystemInitialization,
            4 => Self::ExecutingSelfTest,
            5 => Self::RunningFusion,
            6 => Self::RunningNoFusion,
            other => Self::Unknown(other),
        }
    }
}

/// System error code from `SYS_ERR`
///
/// Only meaningful while [`SystemStatus::SystemError`] is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemError {
    /// No error
    None,
    /// Peripheral initialization failed
    PeripheralInitError,
    /// System initialization failed
    SystemInitError,
    /// Self test failed
    SelfTestFailed,
    /// Register map value out of range
    RegisterMapValueOutOfRange,
    /// Register map address out of range
    RegisterMapAddressOutOfRange,
    /// Register map write error
    RegisterMapWriteError,
    /// Low power mode not available for the selected operating mode
    LowPowerNotAvailable,
    /// Accelerometer power mode not available
    AccelPowerModeNotAvailable,
    /// Fusion algorithm configuration error
    FusionConfigError,
    /// Sensor configuration error
    SensorConfigError,
    /// An error code not listed in the datasheet
    Unknown(u8),
}

impl SystemError {
    /// Decode a `SYS_ERR` register value
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0x00 => Self::None,
            0x01 => Self::PeripheralInitError,
            0x02 => Self::SystemInitError,
            0x03 => Self::SelfTestFailed,
            0x04 => Self::RegisterMapValueOutOfRange,
            0x05 => Self::RegisterMapAddressOutOfRange,
            0x06 => Self::RegisterMapWriteError,
            0x07 => Self::LowPowerNotAvailable,
            0x08 => Self::AccelPowerModeNotAvailable,
            0x09 => Self::FusionConfigError,
            0x0A => Self::SensorConfigError,
            other => Self::Unknown(other),
        }
    }
}

/// Main driver for the BNO055
pub struct Bno055Driver<I, RST> {
    device: RegisterDevice<I>,
    reset: RST,
    current_page: Option<Page>,
    scale: ScaleTable,
}

impl<I, RST> Bno055Driver<I, RST>
where
    I: RegisterInterface<AddressType = u8>,
    RST: OutputPin,
{
    /// Create a new BNO055 driver instance
    ///
    /// This does not touch the bus. Call [`init()`](Self::init) after
    /// construction to verify the device identity and bring it into a
    /// known state.
    ///
    /// # Arguments
    /// * `interface` - The register interface (see [`I2cInterface`](crate::I2cInterface))
    /// * `reset` - Output pin wired to the active-low nRST line
    pub fn new(interface: I, reset: RST) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            reset,
            current_page: None,
            scale: ScaleTable::default(),
        }
    }

    /// Initialize the device
    ///
    /// Verifies the `CHIP_ID` register, releases the reset line, selects
    /// register page 0 and enters CONFIG mode.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `CHIP_ID` register contains an unexpected value
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error, RST::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        let chip_id = self.chip_id()?;
        if chip_id != CHIP_ID_VALUE {
            return Err(Error::InvalidDevice(chip_id));
        }

        // Hold nRST at its inactive level
        self.reset.set_high().map_err(Error::Pin)?;

        self.set_operating_mode(OperatingMode::Config, delay)?;
        // The device may still be settling out of a fusion mode even when
        // OPR_MODE already reads CONFIG
        delay.delay_ms(MODE_SETTLE_MS);

        #[cfg(feature = "defmt")]
        defmt::debug!("BNO055 initialized, chip id 0x{:02X}", chip_id);

        Ok(())
    }

    /// Configure units and enter an operating mode
    ///
    /// Enables the external crystal, writes the unit selection and switches
    /// into `mode`. The device must already be in CONFIG mode (the state
    /// [`init()`](Self::init) leaves it in).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the
    /// device is not in CONFIG mode.
    pub fn configure<D>(
        &mut self,
        mode: OperatingMode,
        units: UnitSelection,
        delay: &mut D,
    ) -> Result<(), Error<I::Error, RST::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.set_external_crystal(true, delay)?;
        self.set_operating_mode(OperatingMode::Config, delay)?;
        self.set_units(units)?;
        self.set_operating_mode(mode, delay)?;

        #[cfg(feature = "defmt")]
        defmt::info!("BNO055 configured, operating mode {}", mode);

        Ok(())
    }

    /// Pulse the reset line
    ///
    /// Brings the device back to its power-on state: CONFIG mode, page 0,
    /// default units. The page cache and scale table are invalidated, so
    /// call [`init()`](Self::init) and [`configure()`](Self::configure)
    /// again afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset pin fails.
    pub fn hardware_reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error, RST::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.reset.set_low().map_err(Error::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.reset.set_high().map_err(Error::Pin)?;

        // Everything on the device is back at reset defaults
        self.current_page = None;
        self.scale = ScaleTable::default();

        #[cfg(feature = "defmt")]
        defmt::debug!("BNO055 reset pulsed, state invalidated");

        Ok(())
    }

    /// Select a register page
    ///
    /// The BNO055 has 2 register pages that must be selected before
    /// accessing registers on that page. The active page is cached, so
    /// repeated access to the same page costs no bus traffic. When the
    /// cache is cold the hardware `PAGE_ID` is read back first and the
    /// write is skipped if the device already has the right page selected.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn ensure_page(&mut self, page: Page) -> Result<(), Error<I::Error, RST::Error>> {
        if self.current_page == Some(page) {
            return Ok(());
        }

        if self.current_page.is_none() {
            let reg = self.device.page_id().read()?;
            if reg.page_id() == page as u8 {
                self.current_page = Some(page);
                return Ok(());
            }
        }

        // Invalidate across the write so a bus error cannot leave the cache
        // claiming a page the device never switched to
        self.current_page = None;
        self.device.page_id().write(|w| {
            w.set_page_id(page as u8);
        })?;
        self.current_page = Some(page);
        Ok(())
    }

    /// Read the `CHIP_ID` register
    ///
    /// Should return 0xA0 for a valid BNO055
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn chip_id(&mut self) -> Result<u8, Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page0)?;
        let reg = self.device.chip_id().read()?;
        Ok(reg.chip_id())
    }

    /// Read the chip and firmware revision identifiers
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn revision(&mut self) -> Result<Revision, Error<I::Error, RST::Error>> {
        // Register addresses: ACC_ID (0x01) through BL_REV_ID (0x06)
        const ACC_ID: u8 = 0x01;
        let mut buffer = [0u8; 6];
        self.ensure_page(Page::Page0)?;
        self.device.interface.read_register(ACC_ID, 48, &mut buffer)?;

        Ok(Revision {
            accelerometer: buffer[0],
            magnetometer: buffer[1],
            gyroscope: buffer[2],
            software: u16::from_le_bytes([buffer[3], buffer[4]]),
            bootloader: buffer[5],
        })
    }

    /// Read the current operating mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or
    /// `OPR_MODE` holds a reserved value.
    pub fn operating_mode(&mut self) -> Result<OperatingMode, Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page0)?;
        let raw = self.device.opr_mode().read()?.operating_mode();
        OperatingMode::from_raw(raw).ok_or(Error::InvalidState(raw))
    }

    /// Switch the operating mode
    ///
    /// Reads back the current mode first: if the device already runs in
    /// `mode` nothing is written and no settling delay is taken. Otherwise
    /// the mode is written and the call blocks for the switching time.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_operating_mode<D>(
        &mut self,
        mode: OperatingMode,
        delay: &mut D,
    ) -> Result<(), Error<I::Error, RST::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.ensure_page(Page::Page0)?;
        let current = self.device.opr_mode().read()?;
        if current.operating_mode() == mode as u8 {
            return Ok(());
        }

        self.device.opr_mode().modify(|w| {
            w.set_operating_mode(mode as u8);
        })?;
        delay.delay_ms(MODE_SETTLE_MS);
        Ok(())
    }

    /// Verify the device is in CONFIG mode before a configuration write
    fn require_config_mode(&mut self) -> Result<(), Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page0)?;
        let raw = self.device.opr_mode().read()?.operating_mode();
        if raw != OperatingMode::Config as u8 {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Rejecting configuration access outside CONFIG mode (OPR_MODE 0x{:02X})",
                raw
            );
            return Err(Error::InvalidState(raw));
        }
        Ok(())
    }

    /// Select the clock source
    ///
    /// Most breakout boards wire up the external 32 kHz crystal, which
    /// gives better fusion accuracy than the internal oscillator. The
    /// device must be in CONFIG mode; the switch takes a long settling
    /// delay to stabilize.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the
    /// device is not in CONFIG mode.
    pub fn set_external_crystal<D>(
        &mut self,
        enabled: bool,
        delay: &mut D,
    ) -> Result<(), Error<I::Error, RST::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.require_config_mode()?;
        self.device.sys_trigger().modify(|w| {
            w.set_ext_clk_sel(enabled);
        })?;
        delay.delay_ms(CRYSTAL_SETTLE_MS);
        Ok(())
    }

    /// Write the measurement unit selection
    ///
    /// Compares against the current `UNIT_SEL` content and skips the write
    /// when nothing changes; reserved bits are preserved either way. The
    /// returned scale table always reflects `units` and is also applied to
    /// all subsequent reads.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the
    /// device is not in CONFIG mode.
    pub fn set_units(
        &mut self,
        units: UnitSelection,
    ) -> Result<ScaleTable, Error<I::Error, RST::Error>> {
        self.require_config_mode()?;

        let current = self.device.unit_sel().read()?;
        let differs = current.acc_unit() != units.acceleration.bit()
            || current.gyr_unit() != units.angular_rate.bit()
            || current.eul_unit() != units.euler_angles.bit()
            || current.temp_unit() != units.temperature.bit()
            || current.ori_android_windows() != units.orientation.bit();

        if differs {
            self.device.unit_sel().modify(|w| {
                w.set_acc_unit(units.acceleration.bit());
                w.set_gyr_unit(units.angular_rate.bit());
                w.set_eul_unit(units.euler_angles.bit());
                w.set_temp_unit(units.temperature.bit());
                w.set_ori_android_windows(units.orientation.bit());
            })?;
        }

        // Scales track the requested selection even when the register
        // already held it
        self.scale = units.scale_table();
        Ok(self.scale)
    }

    /// Read a three-axis output
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_vector(&mut self, kind: VectorKind) -> Result<Vector3, Error<I::Error, RST::Error>> {
        // Read all 6 bytes atomically to prevent torn reads
        let mut buffer = [0u8; 6];
        self.ensure_page(Page::Page0)?;
        self.device
            .interface
            .read_register(kind.base_address(), 48, &mut buffer)?;

        let x = i16::from_le_bytes([buffer[0], buffer[1]]);
        let y = i16::from_le_bytes([buffer[2], buffer[3]]);
        let z = i16::from_le_bytes([buffer[4], buffer[5]]);

        Ok(Vector3::from_raw(x, y, z, self.vector_scale(kind)))
    }

    /// Read the fusion quaternion
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_quaternion(&mut self) -> Result<Quaternion, Error<I::Error, RST::Error>> {
        // Read all 8 bytes atomically to prevent torn reads
        // Register addresses: QUA_DATA_W_LSB (0x20) through QUA_DATA_Z_MSB (0x27)
        const QUA_DATA_W_LSB: u8 = 0x20;
        let mut buffer = [0u8; 8];
        self.ensure_page(Page::Page0)?;
        self.device
            .interface
            .read_register(QUA_DATA_W_LSB, 64, &mut buffer)?;

        let w = i16::from_le_bytes([buffer[0], buffer[1]]);
        let x = i16::from_le_bytes([buffer[2], buffer[3]]);
        let y = i16::from_le_bytes([buffer[4], buffer[5]]);
        let z = i16::from_le_bytes([buffer[6], buffer[7]]);

        Ok(Quaternion::from_raw(w, x, y, z, self.scale.quat))
    }

    /// Read the die temperature in the selected unit
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<f32, Error<I::Error, RST::Error>> {
        const TEMP: u8 = 0x34;
        let mut buffer = [0u8; 1];
        self.ensure_page(Page::Page0)?;
        self.device.interface.read_register(TEMP, 8, &mut buffer)?;

        // Output is a signed byte
        #[allow(clippy::cast_possible_wrap)]
        let raw = buffer[0] as i8;
        Ok(f32::from(raw) / self.scale.temp)
    }

    /// Read any output selected at runtime
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_sensor(
        &mut self,
        kind: SensorKind,
    ) -> Result<SensorReading, Error<I::Error, RST::Error>> {
        match kind {
            SensorKind::Accelerometer => self
                .read_vector(VectorKind::Accelerometer)
                .map(SensorReading::Vector),
            SensorKind::Magnetometer => self
                .read_vector(VectorKind::Magnetometer)
                .map(SensorReading::Vector),
            SensorKind::Gyroscope => self
                .read_vector(VectorKind::Gyroscope)
                .map(SensorReading::Vector),
            SensorKind::EulerAngles => self
                .read_vector(VectorKind::EulerAngles)
                .map(SensorReading::Vector),
            SensorKind::LinearAcceleration => self
                .read_vector(VectorKind::LinearAcceleration)
                .map(SensorReading::Vector),
            SensorKind::Gravity => self
                .read_vector(VectorKind::Gravity)
                .map(SensorReading::Vector),
            SensorKind::Quaternion => self.read_quaternion().map(SensorReading::Quaternion),
            SensorKind::Temperature => self.read_temperature().map(SensorReading::Temperature),
        }
    }

    /// Read the per-sensor calibration confidence
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn calibration_status(
        &mut self,
    ) -> Result<CalibrationStatus, Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page0)?;
        let reg = self.device.calib_stat().read()?;
        Ok(CalibrationStatus {
            system: reg.sys_calib(),
            gyroscope: reg.gyr_calib(),
            accelerometer: reg.acc_calib(),
            magnetometer: reg.mag_calib(),
        })
    }

    /// Read the calibration offset profile
    ///
    /// The profile is expressed in the currently selected units, so write
    /// it back later under the same unit selection.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn offsets(&mut self) -> Result<OffsetProfile, Error<I::Error, RST::Error>> {
        // Read the whole block atomically so the offsets stay consistent
        // Register addresses: ACC_OFFSET_X_LSB (0x55) through MAG_RADIUS_MSB (0x6A)
        const ACC_OFFSET_X_LSB: u8 = 0x55;
        let mut buffer = [0u8; 22];
        self.ensure_page(Page::Page0)?;
        self.device
            .interface
            .read_register(ACC_OFFSET_X_LSB, 176, &mut buffer)?;

        Ok(OffsetProfile::from_registers(&buffer, &self.scale))
    }

    /// Restore a previously saved calibration offset profile
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, the device
    /// is not in CONFIG mode, or a profile value does not fit the 16-bit
    /// offset registers under the current unit selection.
    pub fn set_offsets(
        &mut self,
        profile: &OffsetProfile,
    ) -> Result<(), Error<I::Error, RST::Error>> {
        const ACC_OFFSET_X_LSB: u8 = 0x55;
        self.require_config_mode()?;
        let bytes = profile
            .to_registers(&self.scale)
            .ok_or(Error::InvalidConfig)?;
        self.device
            .interface
            .write_register(ACC_OFFSET_X_LSB, 176, &bytes)?;
        Ok(())
    }

    /// Read the power mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or
    /// `PWR_MODE` holds a reserved value.
    pub fn power_mode(&mut self) -> Result<PowerMode, Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page0)?;
        let raw = self.device.pwr_mode().read()?.power_mode();
        PowerMode::from_raw(raw).ok_or(Error::InvalidState(raw))
    }

    /// Set the power mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the
    /// device is not in CONFIG mode.
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), Error<I::Error, RST::Error>> {
        self.require_config_mode()?;
        self.device.pwr_mode().modify(|w| {
            w.set_power_mode(mode as u8);
        })?;
        Ok(())
    }

    /// Read the axis remap configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or
    /// `AXIS_MAP_CONFIG` holds a reserved axis value.
    pub fn axis_remap(&mut self) -> Result<AxisRemap, Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page0)?;
        let config = self.device.axis_map_config().read()?;
        let sign = self.device.axis_map_sign().read()?;

        let x = Axis::from_raw(config.x_axis()).ok_or(Error::InvalidConfig)?;
        let y = Axis::from_raw(config.y_axis()).ok_or(Error::InvalidConfig)?;
        let z = Axis::from_raw(config.z_axis()).ok_or(Error::InvalidConfig)?;

        Ok(AxisRemap {
            x,
            y,
            z,
            invert_x: sign.x_sign(),
            invert_y: sign.y_sign(),
            invert_z: sign.z_sign(),
        })
    }

    /// Write the axis remap configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, the device
    /// is not in CONFIG mode, or `remap` does not use each device axis
    /// exactly once.
    pub fn set_axis_remap(&mut self, remap: AxisRemap) -> Result<(), Error<I::Error, RST::Error>> {
        if !remap.is_valid() {
            return Err(Error::InvalidConfig);
        }
        self.require_config_mode()?;

        self.device.axis_map_config().write(|w| {
            w.set_x_axis(remap.x as u8);
            w.set_y_axis(remap.y as u8);
            w.set_z_axis(remap.z as u8);
        })?;
        self.device.axis_map_sign().write(|w| {
            w.set_x_sign(remap.invert_x);
            w.set_y_sign(remap.invert_y);
            w.set_z_sign(remap.invert_z);
        })?;
        Ok(())
    }

    /// Read the accelerometer configuration (page 1)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or
    /// `ACC_CONFIG` holds a reserved value.
    pub fn accelerometer_config(
        &mut self,
    ) -> Result<AccelerometerConfig, Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page1)?;
        let reg = self.device.acc_config().read()?;

        let range = AccelRange::from_raw(reg.acc_range()).ok_or(Error::InvalidConfig)?;
        let bandwidth = AccelBandwidth::from_raw(reg.acc_bandwidth()).ok_or(Error::InvalidConfig)?;
        let operation = AccelOperation::from_raw(reg.acc_op_mode()).ok_or(Error::InvalidConfig)?;

        Ok(AccelerometerConfig {
            range,
            bandwidth,
            operation,
        })
    }

    /// Write the accelerometer configuration (page 1)
    ///
    /// In fusion modes the device manages these settings itself; manual
    /// configuration is for the non-fusion modes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the
    /// device is not in CONFIG mode.
    pub fn set_accelerometer_config(
        &mut self,
        config: AccelerometerConfig,
    ) -> Result<(), Error<I::Error, RST::Error>> {
        self.require_config_mode()?;
        self.ensure_page(Page::Page1)?;
        self.device.acc_config().write(|w| {
            w.set_acc_range(config.range as u8);
            w.set_acc_bandwidth(config.bandwidth as u8);
            w.set_acc_op_mode(config.operation as u8);
        })?;
        Ok(())
    }

    /// Read the gyroscope configuration (page 1)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or a
    /// `GYR_CONFIG` register holds a reserved value.
    pub fn gyroscope_config(&mut self) -> Result<GyroscopeConfig, Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page1)?;
        let config_0 = self.device.gyr_config_0().read()?;
        let config_1 = self.device.gyr_config_1().read()?;

        let range = GyroRange::from_raw(config_0.gyr_range()).ok_or(Error::InvalidConfig)?;
        let bandwidth =
            GyroBandwidth::from_raw(config_0.gyr_bandwidth()).ok_or(Error::InvalidConfig)?;
        let operation =
            GyroOperation::from_raw(config_1.gyr_op_mode()).ok_or(Error::InvalidConfig)?;

        Ok(GyroscopeConfig {
            range,
            bandwidth,
            operation,
        })
    }

    /// Write the gyroscope configuration (page 1)
    ///
    /// In fusion modes the device manages these settings itself; manual
    /// configuration is for the non-fusion modes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the
    /// device is not in CONFIG mode.
    pub fn set_gyroscope_config(
        &mut self,
        config: GyroscopeConfig,
    ) -> Result<(), Error<I::Error, RST::Error>> {
        self.require_config_mode()?;
        self.ensure_page(Page::Page1)?;
        self.device.gyr_config_0().write(|w| {
            w.set_gyr_range(config.range as u8);
            w.set_gyr_bandwidth(config.bandwidth as u8);
        })?;
        self.device.gyr_config_1().write(|w| {
            w.set_gyr_op_mode(config.operation as u8);
        })?;
        Ok(())
    }

    /// Run the built-in self test
    ///
    /// Triggers the test, waits for it to complete and reads back the
    /// result. The device must be in CONFIG mode.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the
    /// device is not in CONFIG mode.
    pub fn trigger_self_test<D>(
        &mut self,
        delay: &mut D,
    ) -> Result<SelfTestResult, Error<I::Error, RST::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.require_config_mode()?;
        self.device.sys_trigger().modify(|w| {
            w.set_self_test(true);
        })?;
        delay.delay_ms(SELF_TEST_SETTLE_MS);
        self.self_test_result()
    }

    /// Read the result of the last self test
    ///
    /// The power-on self test runs automatically at boot, so this is
    /// meaningful even without [`trigger_self_test()`](Self::trigger_self_test).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn self_test_result(&mut self) -> Result<SelfTestResult, Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page0)?;
        let reg = self.device.st_result().read()?;
        Ok(SelfTestResult {
            accelerometer: reg.acc_st(),
            magnetometer: reg.mag_st(),
            gyroscope: reg.gyr_st(),
            microcontroller: reg.mcu_st(),
        })
    }

    /// Read the system status code
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn system_status(&mut self) -> Result<SystemStatus, Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page0)?;
        let reg = self.device.sys_status().read()?;
        Ok(SystemStatus::from_raw(reg.system_status()))
    }

    /// Read the system error code
    ///
    /// Meaningful while [`system_status()`](Self::system_status) reports
    /// [`SystemStatus::SystemError`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn system_error(&mut self) -> Result<SystemError, Error<I::Error, RST::Error>> {
        self.ensure_page(Page::Page0)?;
        let reg = self.device.sys_err().read()?;
        Ok(SystemError::from_raw(reg.system_error()))
    }

    /// Scale factor for a vector output under the active unit selection
    const fn vector_scale(&self, kind: VectorKind) -> f32 {
        match kind {
            VectorKind::Accelerometer | VectorKind::LinearAcceleration | VectorKind::Gravity => {
                self.scale.accel
            }
            VectorKind::Magnetometer => self.scale.mag,
            VectorKind::Gyroscope => self.scale.gyro,
            VectorKind::EulerAngles => self.scale.euler,
        }
    }

    /// Get the scale table derived from the last unit selection
    #[must_use]
    pub const fn scale_table(&self) -> ScaleTable {
        self.scale
    }

    /// Get the cached register page, if known
    ///
    /// `None` until the first register access after construction or a
    /// hardware reset.
    #[must_use]
    pub const fn current_page(&self) -> Option<Page> {
        self.current_page
    }

    /// Consume the driver and return the underlying interface and reset pin
    pub fn release(self) -> (I, RST) {
        (self.device.interface, self.reset)
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &crate::registers::Bno055<I> {
        &self.device
    }

    /// Get a mutable reference to the underlying register device (for advanced usage)
    pub const fn device_mut(&mut self) -> &mut crate::registers::Bno055<I> {
        &mut self.device
    }
}
