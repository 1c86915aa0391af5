#![cfg_attr(not(test), no_std)]

mod register;

use bitflags::bitflags;
use embedded_hal::i2c::I2c;

/// I2C address with AD0 pulled low.
pub const ADDRESS: u8 = 0x68;

/// I2C address with AD0 pulled high.
pub const ADDRESS_AD0_HIGH: u8 = 0x69;

/// Expected contents of the WHO_AM_I register.
pub const IDENTITY: u8 = 0x68;

/// Counts per g at the power-on full scale range of ±2g.
pub const SENSITIVITY_2G: f32 = 16384.0;

/// m/s² per g.
pub const GRAVITY: f32 = 9.81;

const ACCELERATION_DATA_SIZE: usize = 6;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PowerManagement: u8 {
        const DEVICE_RESET        = 0b1000_0000;
        const SLEEP               = 0b0100_0000;
        const CYCLE               = 0b0010_0000;
        const TEMPERATURE_DISABLE = 0b0000_1000;
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

/// Driver settings. The defaults match a factory-fresh part at address 0x68.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub address: u8,
    pub identity: u8,
    /// Counts per g for the configured full scale range.
    pub sensitivity: f32,
    /// m/s² per g.
    pub gravity: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: ADDRESS,
            identity: IDENTITY,
            sensitivity: SENSITIVITY_2G,
            gravity: GRAVITY,
        }
    }
}

/// Acceleration counts as read from the data registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawAcceleration {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawAcceleration {
    /// Each axis is stored high byte first, in X, Y, Z order.
    pub fn from_be_bytes(buf: [u8; ACCELERATION_DATA_SIZE]) -> Self {
        RawAcceleration {
            x: i16::from_be_bytes([buf[0], buf[1]]),
            y: i16::from_be_bytes([buf[2], buf[3]]),
            z: i16::from_be_bytes([buf[4], buf[5]]),
        }
    }

    pub fn scaled(&self, sensitivity: f32, gravity: f32) -> Acceleration {
        let scale = |raw: i16| (raw as f32 / sensitivity) * gravity;

        Acceleration {
            x: scale(self.x),
            y: scale(self.y),
            z: scale(self.z),
        }
    }
}

/// Acceleration in m/s².
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Acceleration {
    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    Bus(E),
    DeviceNotDetected(u8),
}

impl<E: core::fmt::Display> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        match self {
            Error::Bus(e) => write!(f, "Bus error: {}", e),
            Error::DeviceNotDetected(id) => write!(f, "Device not detected, WHO_AM_I: {:#04x}", id),
        }
    }
}

impl<E> core::convert::From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Bus(error)
    }
}

pub struct MPU6050<I2C> {
    config: Config,
    i2c: I2C,
}

impl<I2C: I2c<Error = E>, E> MPU6050<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self::with_config(i2c, Config::default())
    }

    pub fn with_config(i2c: I2C, config: Config) -> Self {
        MPU6050 { config, i2c }
    }

    /// Returns the bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check the identity register and wake the device up.
    /// The device powers up asleep, and nothing is written to it
    /// unless the identity matches.
    pub fn initialize(&mut self) -> Result<(), Error<E>> {
        let identity = self.identity()?;

        if identity != self.config.identity {
            return Err(Error::DeviceNotDetected(identity));
        }

        self.wake()
    }

    pub fn identity(&mut self) -> Result<u8, Error<E>> {
        self.read_u8(register::WHO_AM_I)
    }

    /// Clear the sleep bit. This also resets the clock source to the
    /// internal oscillator.
    pub fn wake(&mut self) -> Result<(), Error<E>> {
        self.write_register(register::PWR_MGMT_1, PowerManagement::empty().bits())
    }

    pub fn power_management(&mut self) -> Result<PowerManagement, Error<E>> {
        let value = self.read_u8(register::PWR_MGMT_1)?;
        Ok(PowerManagement::from_bits_truncate(value))
    }

    pub fn raw_acceleration(&mut self) -> Result<RawAcceleration, Error<E>> {
        let mut buf = [0; ACCELERATION_DATA_SIZE];
        self.read_registers(register::ACCEL_XOUT_H, &mut buf)?;
        Ok(RawAcceleration::from_be_bytes(buf))
    }

    /// Acceleration on all three axes in m/s².
    pub fn acceleration(&mut self) -> Result<Acceleration, Error<E>> {
        let raw = self.raw_acceleration()?;
        Ok(raw.scaled(self.config.sensitivity, self.config.gravity))
    }

    // Register r/w utilities

    fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c.write_read(self.config.address, &[register], buf)?;
        Ok(())
    }

    fn read_u8(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut data: [u8; 1] = [0; 1];
        self.read_registers(register, &mut data)?;
        Ok(data[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<E>> {
        self.i2c.write(self.config.address, &[register, value])?;
        Ok(())
    }
}
