use embedded_hal::digital::OutputPin;

/// Status LED that flips once per completed tracking cycle.
pub struct Heartbeat<P> {
    pin: P,
    lit: bool,
}

impl<P: OutputPin> Heartbeat<P> {
    /// The pin is assumed to start low.
    pub fn new(pin: P) -> Self {
        Heartbeat { pin, lit: false }
    }

    pub fn enable(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()?;
        self.lit = true;
        Ok(())
    }

    pub fn disable(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.lit = false;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<(), P::Error> {
        if self.lit {
            self.disable()
        } else {
            self.enable()
        }
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn release(self) -> P {
        self.pin
    }
}
