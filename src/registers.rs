//! Register definitions for the BNO055
//!
//! This module contains the register definitions for both pages of the BNO055.
//! The BNO055 uses a paged architecture where registers at addresses 0x00-0x7F
//! have different meanings depending on which page is selected via `PAGE_ID` (0x07).
//!
//! ## Page Architecture
//! - **Page 0**: Identity, operating mode, unit selection, system control and
//!   all sensor data output registers
//! - **Page 1**: Physical sensor configuration (range, bandwidth, power)
//!
//! Registers that share addresses across pages use `ALLOW_ADDRESS_OVERLAP = true`.
//! The multi-byte sensor data and offset blocks are read as bursts through the
//! register interface directly and are not declared here.

device_driver::create_device!(
    device_name: Bno055,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        // ==================== PAGE 0 REGISTERS ====================
        // Identity, mode, units, system control

        /// CHIP_ID - Device ID Register (Page 0, 0x00)
        /// Expected value: 0xA0
        register ChipId {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Device ID (should read 0xA0)
            chip_id: uint = 0..8,
        },

        /// PAGE_ID - Register Page Select (0x07, present on both pages)
        register PageId {
            const ADDRESS = 0x07;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Active register page (0 or 1)
            page_id: uint = 0..8,
        },

        /// CALIB_STAT - Calibration Status (Page 0, 0x35)
        ///
        /// Four 2-bit confidence fields, 0 (uncalibrated) to 3 (fully calibrated).
        register CalibStat {
            const ADDRESS = 0x35;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Magnetometer calibration confidence
            mag_calib: uint = 0..2,
            /// Accelerometer calibration confidence
            acc_calib: uint = 2..4,
            /// Gyroscope calibration confidence
            gyr_calib: uint = 4..6,
            /// System (fusion) calibration confidence
            sys_calib: uint = 6..8,
        },

        /// ST_RESULT - Built-in Self Test Result (Page 0, 0x36)
        register StResult {
            const ADDRESS = 0x36;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer self test passed
            acc_st: bool = 0,
            /// Magnetometer self test passed
            mag_st: bool = 1,
            /// Gyroscope self test passed
            gyr_st: bool = 2,
            /// Microcontroller self test passed
            mcu_st: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// SYS_STATUS - System Status Code (Page 0, 0x39)
        register SysStatus {
            const ADDRESS = 0x39;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// System status code (see datasheet table 4-5)
            system_status: uint = 0..8,
        },

        /// SYS_ERR - System Error Code (Page 0, 0x3A)
        register SysErr {
            const ADDRESS = 0x3A;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// System error code (see datasheet table 4-5)
            system_error: uint = 0..8,
        },

        /// UNIT_SEL - Measurement Unit Selection (Page 0, 0x3B)
        register UnitSel {
            const ADDRESS = 0x3B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Acceleration unit (false = m/s², true = mg)
            acc_unit: bool = 0,
            /// Angular rate unit (false = dps, true = rps)
            gyr_unit: bool = 1,
            /// Euler angle unit (false = degrees, true = radians)
            eul_unit: bool = 2,
            reserved_3: uint = 3..4,
            /// Temperature unit (false = Celsius, true = Fahrenheit)
            temp_unit: bool = 4,
            reserved_6_5: uint = 5..7,
            /// Orientation output convention (false = Android, true = Windows)
            ori_android_windows: bool = 7,
        },

        /// OPR_MODE - Operating Mode (Page 0, 0x3D)
        ///
        /// Writable only while the device has settled; mode changes require a
        /// post-write delay before further register access.
        register OprMode {
            const ADDRESS = 0x3D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Operating mode (0x00 = CONFIG through 0x0C = NDOF)
            operating_mode: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// PWR_MODE - Power Mode (Page 0, 0x3E)
        register PwrMode {
            const ADDRESS = 0x3E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Power mode (0 = normal, 1 = low power, 2 = suspend)
            power_mode: uint = 0..2,
            reserved_7_2: uint = 2..8,
        },

        /// SYS_TRIGGER - System Trigger (Page 0, 0x3F)
        ///
        /// Self test and clock source control; writable only in CONFIG mode.
        register SysTrigger {
            const ADDRESS = 0x3F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Trigger the built-in self test
            self_test: bool = 0,
            reserved_4_1: uint = 1..5,
            /// Reset the interrupt status bits
            rst_int: bool = 5,
            /// Trigger a system (soft) reset
            rst_sys: bool = 6,
            /// Use the external 32 kHz crystal as clock source
            ext_clk_sel: bool = 7,
        },

        /// AXIS_MAP_CONFIG - Axis Remap Configuration (Page 0, 0x41)
        register AxisMapConfig {
            const ADDRESS = 0x41;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Device axis mapped to the chassis X axis (0 = X, 1 = Y, 2 = Z)
            x_axis: uint = 0..2,
            /// Device axis mapped to the chassis Y axis
            y_axis: uint = 2..4,
            /// Device axis mapped to the chassis Z axis
            z_axis: uint = 4..6,
            reserved_7_6: uint = 6..8,
        },

        /// AXIS_MAP_SIGN - Axis Sign Configuration (Page 0, 0x42)
        register AxisMapSign {
            const ADDRESS = 0x42;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Invert the chassis Z axis
            z_sign: bool = 0,
            /// Invert the chassis Y axis
            y_sign: bool = 1,
            /// Invert the chassis X axis
            x_sign: bool = 2,
            reserved_7_3: uint = 3..8,
        },

        // ==================== PAGE 1 REGISTERS ====================
        // Physical sensor configuration

        /// ACC_CONFIG - Accelerometer Configuration (Page 1, 0x08)
        register AccConfig {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// G range (0 = ±2g through 3 = ±16g)
            acc_range: uint = 0..2,
            /// Low-pass filter bandwidth (0 = 7.81 Hz through 7 = 1000 Hz)
            acc_bandwidth: uint = 2..5,
            /// Accelerometer operation mode
            acc_op_mode: uint = 5..8,
        },

        /// GYR_CONFIG_0 - Gyroscope Configuration 0 (Page 1, 0x0A)
        register GyrConfig0 {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Angular rate range (0 = ±2000 dps through 4 = ±125 dps)
            gyr_range: uint = 0..3,
            /// Low-pass filter bandwidth (0 = 523 Hz through 7 = 32 Hz)
            gyr_bandwidth: uint = 3..6,
            reserved_7_6: uint = 6..8,
        },

        /// GYR_CONFIG_1 - Gyroscope Configuration 1 (Page 1, 0x0B)
        register GyrConfig1 {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope operation mode
            gyr_op_mode: uint = 0..3,
            reserved_7_3: uint = 3..8,
        },
    }
);
