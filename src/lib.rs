#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod heartbeat;
pub mod source;
pub mod tracker;

pub use mpu6050::{Acceleration, Axis, MPU6050};
pub use tracker::Tracker;
pub use velocity_integrator::VelocityIntegrator;
