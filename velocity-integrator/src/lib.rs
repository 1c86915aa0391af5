#![cfg_attr(not(test), no_std)]

/// Default half-width of the band around zero that is treated as no
/// acceleration, in the units of the acceleration passed to
/// [VelocityIntegrator::update].
pub const DEADZONE: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub deadzone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config { deadzone: DEADZONE }
    }
}

/// First-order (Euler) integration of a single acceleration axis.
///
/// There is no drift correction: the only filtering is the deadzone,
/// so any bias outside of it accumulates until [VelocityIntegrator::reset].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VelocityIntegrator {
    config: Config,
    velocity: f32,
    last_velocity: f32,
}

impl Default for VelocityIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityIntegrator {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        VelocityIntegrator {
            config,
            velocity: 0.0,
            last_velocity: 0.0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Integrate `acceleration` over `dt` seconds and return the new velocity.
    ///
    /// Readings strictly inside `(-deadzone, deadzone)` count as zero.
    /// A `dt` that is not a positive finite number is treated as no time
    /// having passed, and the velocity is held.
    pub fn update(&mut self, acceleration: f32, dt: f32) -> f32 {
        let acceleration = if self.in_deadzone(acceleration) {
            0.0
        } else {
            acceleration
        };

        self.velocity = if acceleration == 0.0 || !(dt > 0.0 && dt.is_finite()) {
            self.last_velocity
        } else {
            self.last_velocity + acceleration * dt
        };
        self.last_velocity = self.velocity;

        self.velocity
    }

    /// Start a new tracking interval from rest.
    pub fn reset(&mut self) {
        self.velocity = 0.0;
        self.last_velocity = 0.0;
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn last_velocity(&self) -> f32 {
        self.last_velocity
    }

    pub fn is_zeroed(&self) -> bool {
        self.velocity == 0.0 && self.last_velocity == 0.0
    }

    fn in_deadzone(&self, acceleration: f32) -> bool {
        -self.config.deadzone < acceleration && acceleration < self.config.deadzone
    }
}
