use core::fmt::{Debug, Write};

use embedded_hal::{delay::DelayNs, digital::OutputPin};
use mpu6050::Axis;
use velocity_integrator::VelocityIntegrator;

use crate::{heartbeat::Heartbeat, source::AccelerationSource};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Axis fed to the integrator.
    pub axis: Axis,
    /// Seconds assumed to pass between two samples when using [Tracker::step].
    pub dt: f32,
    /// Delay between cycles in [Tracker::run].
    pub period_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            axis: Axis::X,
            dt: 0.1,
            period_ms: 100,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<S, P> {
    Source(S),
    Output,
    Heartbeat(P),
}

impl<S: Debug, P: Debug> core::fmt::Display for Error<S, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        match self {
            Error::Source(e) => write!(f, "Sensor error: {:?}", e),
            Error::Output => write!(f, "Failed to write status"),
            Error::Heartbeat(e) => write!(f, "Heartbeat error: {:?}", e),
        }
    }
}

impl<S, P> From<core::fmt::Error> for Error<S, P> {
    fn from(_: core::fmt::Error) -> Self {
        Error::Output
    }
}

/// Polls a source, integrates one axis into a velocity and reports it as a
/// line of text on `output`.
pub struct Tracker<S, L, W> {
    config: Config,
    source: S,
    integrator: VelocityIntegrator,
    heartbeat: Heartbeat<L>,
    output: W,
}

impl<S, L, W> Tracker<S, L, W>
where
    S: AccelerationSource,
    S::Error: Debug,
    L: OutputPin,
    W: Write,
{
    pub fn new(source: S, integrator: VelocityIntegrator, led: L, output: W, config: Config) -> Self {
        Tracker {
            config,
            source,
            integrator,
            heartbeat: Heartbeat::new(led),
            output,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn velocity(&self) -> f32 {
        self.integrator.velocity()
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Start a new set from rest.
    pub fn reset(&mut self) {
        log::info!("Velocity reset");
        self.integrator.reset();
    }

    /// Run one cycle with the configured fixed time step.
    pub fn step(&mut self) -> Result<f32, Error<S::Error, L::Error>> {
        self.step_with_dt(self.config.dt)
    }

    /// Run one cycle with a measured time step in seconds.
    ///
    /// The integrator commits the new velocity before the status line is
    /// written and the heartbeat toggled. If either of those fails the
    /// velocity is still available from [Tracker::velocity].
    /// A failed read leaves the integrator untouched and always returns
    /// [Error::Source], even when the error line can't be written.
    pub fn step_with_dt(&mut self, dt: f32) -> Result<f32, Error<S::Error, L::Error>> {
        let sample = match self.source.acceleration() {
            Ok(sample) => sample,
            Err(e) => {
                log::warn!("Failed to read acceleration: {:?}", e);
                if write!(self.output, "Status: Sensor error: {:?}\r\n", e).is_err() {
                    log::warn!("Failed to write sensor error status");
                }
                return Err(Error::Source(e));
            }
        };

        let velocity = self.integrator.update(sample.axis(self.config.axis), dt);
        log::debug!("a={:?} dt={} v={}", sample, dt, velocity);

        write!(self.output, "Status: Lifting... V: {:.2} m/s\r\n", velocity)?;

        self.heartbeat.toggle().map_err(Error::Heartbeat)?;

        Ok(velocity)
    }

    /// Step forever, sleeping `period_ms` between cycles.
    /// Failed cycles are logged and the loop carries on.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> ! {
        loop {
            if let Err(e) = self.step() {
                log::error!("{}", e);
            }

            delay.delay_ms(self.config.period_ms);
        }
    }

    pub fn release(self) -> (S, L, W) {
        (self.source, self.heartbeat.release(), self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ConstantAcceleration;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::{
        digital::{Mock as PinMock, State, Transaction as PinTrans},
        i2c::{Mock as I2cMock, Transaction as I2cTrans},
    };
    use mpu6050::{Acceleration, MPU6050};

    fn trans_acceleration(data: [u8; 6]) -> I2cTrans {
        I2cTrans::write_read(mpu6050::ADDRESS, vec![0x3B], data.to_vec())
    }

    #[test]
    fn simulated_lift_reports_accumulating_velocity() {
        let expectations = [PinTrans::set(State::High), PinTrans::set(State::Low)];
        let mut tracker = Tracker::new(
            ConstantAcceleration::lift(),
            VelocityIntegrator::new(),
            PinMock::new(&expectations),
            String::new(),
            Config::default(),
        );

        let first = tracker.step().unwrap();
        let second = tracker.step().unwrap();

        assert!((first - 0.05).abs() < 1e-6);
        assert!((second - 0.10).abs() < 1e-6);
        assert_eq!(
            tracker.output(),
            "Status: Lifting... V: 0.05 m/s\r\nStatus: Lifting... V: 0.10 m/s\r\n"
        );

        let (_, mut led, _) = tracker.release();
        led.done();
    }

    #[test]
    fn integrates_selected_axis() {
        let config = Config {
            axis: Axis::Z,
            dt: 0.5,
            ..Config::default()
        };
        let source = ConstantAcceleration(Acceleration {
            x: 100.0,
            y: -100.0,
            z: 2.0,
        });
        let mut tracker = Tracker::new(
            source,
            VelocityIntegrator::new(),
            PinMock::new(&[PinTrans::set(State::High)]),
            String::new(),
            config,
        );

        assert_eq!(tracker.step(), Ok(1.0));

        let (_, mut led, _) = tracker.release();
        led.done();
    }

    #[test]
    fn measured_dt_overrides_fixed_step() {
        let mut tracker = Tracker::new(
            ConstantAcceleration::lift(),
            VelocityIntegrator::new(),
            PinMock::new(&[PinTrans::set(State::High)]),
            String::new(),
            Config::default(),
        );

        assert_eq!(tracker.step_with_dt(2.0), Ok(1.0));
        assert_eq!(tracker.velocity(), 1.0);

        let (_, mut led, _) = tracker.release();
        led.done();
    }

    #[test]
    fn reset_starts_a_new_set() {
        let expectations = [PinTrans::set(State::High), PinTrans::set(State::Low)];
        let mut tracker = Tracker::new(
            ConstantAcceleration::lift(),
            VelocityIntegrator::new(),
            PinMock::new(&expectations),
            String::new(),
            Config::default(),
        );

        tracker.step().unwrap();
        tracker.reset();
        assert_eq!(tracker.velocity(), 0.0);

        let velocity = tracker.step().unwrap();
        assert!((velocity - 0.05).abs() < 1e-6);

        let (_, mut led, _) = tracker.release();
        led.done();
    }

    #[test]
    fn sensor_failure_is_reported_and_propagated() {
        let i2c_expectations = [
            trans_acceleration([0x10, 0x00, 0x00, 0x00, 0x00, 0x00]),
            trans_acceleration([0; 6]).with_error(ErrorKind::Other),
        ];
        let mut tracker = Tracker::new(
            MPU6050::new(I2cMock::new(&i2c_expectations)),
            VelocityIntegrator::new(),
            PinMock::new(&[PinTrans::set(State::High)]),
            String::new(),
            Config::default(),
        );

        let velocity = tracker.step().unwrap();
        assert!((velocity - 0.24525).abs() < 1e-5);

        assert_eq!(
            tracker.step(),
            Err(Error::Source(mpu6050::Error::Bus(ErrorKind::Other)))
        );
        // The failed cycle neither integrates nor blinks
        assert_eq!(tracker.velocity(), velocity);
        assert!(tracker.output().ends_with("Status: Sensor error: Bus(Other)\r\n"));

        let (sensor, mut led, _) = tracker.release();
        sensor.release().done();
        led.done();
    }

    struct RejectingWriter;

    impl Write for RejectingWriter {
        fn write_str(&mut self, _: &str) -> core::fmt::Result {
            Err(core::fmt::Error)
        }
    }

    #[test]
    fn sensor_failure_survives_unwritable_output() {
        let i2c_expectations = [trans_acceleration([0; 6]).with_error(ErrorKind::Other)];
        let mut tracker = Tracker::new(
            MPU6050::new(I2cMock::new(&i2c_expectations)),
            VelocityIntegrator::new(),
            PinMock::new(&[]),
            RejectingWriter,
            Config::default(),
        );

        assert_eq!(
            tracker.step(),
            Err(Error::Source(mpu6050::Error::Bus(ErrorKind::Other)))
        );
        assert_eq!(tracker.velocity(), 0.0);

        let (sensor, mut led, _) = tracker.release();
        sensor.release().done();
        led.done();
    }

    #[test]
    fn velocity_is_committed_when_status_write_fails() {
        let mut tracker = Tracker::new(
            ConstantAcceleration::lift(),
            VelocityIntegrator::new(),
            PinMock::new(&[]),
            RejectingWriter,
            Config::default(),
        );

        assert_eq!(tracker.step(), Err(Error::Output));
        assert!((tracker.velocity() - 0.05).abs() < 1e-6);

        let (_, mut led, _) = tracker.release();
        led.done();
    }
}
