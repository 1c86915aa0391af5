#![allow(dead_code)]

/// Sample rate divider
pub const SMPLRT_DIV: u8 = 0x19;

/// External frame synchronization and digital low pass filter
pub const CONFIG: u8 = 0x1A;

/// Accelerometer self-test and full scale range
pub const ACCEL_CONFIG: u8 = 0x1C;

/// ACCEL_X(MSB)
pub const ACCEL_XOUT_H: u8 = 0x3B;
/// ACCEL_X(LSB)
pub const ACCEL_XOUT_L: u8 = 0x3C;
/// ACCEL_Y(MSB)
pub const ACCEL_YOUT_H: u8 = 0x3D;
/// ACCEL_Y(LSB)
pub const ACCEL_YOUT_L: u8 = 0x3E;
/// ACCEL_Z(MSB)
pub const ACCEL_ZOUT_H: u8 = 0x3F;
/// ACCEL_Z(LSB)
pub const ACCEL_ZOUT_L: u8 = 0x40;

/// Temperature(MSB)
pub const TEMP_OUT_H: u8 = 0x41;
/// Temperature(LSB)
pub const TEMP_OUT_L: u8 = 0x42;

/// Sleep, reset and clock source selection
pub const PWR_MGMT_1: u8 = 0x6B;

/// Low power wake-up frequency and per-axis standby
pub const PWR_MGMT_2: u8 = 0x6C;

/// Upper 6 bits of the 7-bit I2C address, always 0x68 regardless of AD0
pub const WHO_AM_I: u8 = 0x75;
