use core::convert::Infallible;

use embedded_hal::i2c::I2c;
use mpu6050::{Acceleration, MPU6050};

/// Anything that can be polled for a 3-axis acceleration sample in m/s².
pub trait AccelerationSource {
    type Error;

    fn acceleration(&mut self) -> Result<Acceleration, Self::Error>;
}

impl<I2C: I2c> AccelerationSource for MPU6050<I2C> {
    type Error = mpu6050::Error<I2C::Error>;

    fn acceleration(&mut self) -> Result<Acceleration, Self::Error> {
        MPU6050::acceleration(self)
    }
}

/// Default push used by [ConstantAcceleration::lift], in m/s².
pub const SIMULATED_LIFT: f32 = 0.5;

/// A source that always reports the same sample, for bench testing the
/// loop without a sensor attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantAcceleration(pub Acceleration);

impl ConstantAcceleration {
    /// A steady lift along X.
    pub fn lift() -> Self {
        ConstantAcceleration(Acceleration {
            x: SIMULATED_LIFT,
            ..Acceleration::default()
        })
    }
}

impl AccelerationSource for ConstantAcceleration {
    type Error = Infallible;

    fn acceleration(&mut self) -> Result<Acceleration, Self::Error> {
        Ok(self.0)
    }
}
