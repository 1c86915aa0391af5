use esp_hal::{
    gpio::{Level, Output},
    i2c::master::{Config, I2c},
    peripherals::{Peripherals, I2C0},
    time::RateExtU32,
    Blocking,
};
use lift_tracker::bus::{timeout_cycles, BUS_TIMEOUT_MS};

pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Width of the I2C SCL timeout counter.
const I2C_TIMEOUT_MAX_CYCLES: u32 = 0xF_FFFF;

/// SCL timeout in bus clock cycles.
pub const I2C_TIMEOUT: u32 = timeout_cycles(BUS_TIMEOUT_MS, I2C_FREQUENCY_HZ, I2C_TIMEOUT_MAX_CYCLES);

pub mod pins {
    use esp_hal::gpio::GpioPin;

    // I2C
    pub const SDA: u8 = 21;
    pub type Sda = GpioPin<SDA>;
    pub const SCL: u8 = 22;
    pub type Scl = GpioPin<SCL>;

    // On-board LED of most ESP32 devkits
    pub const STATUS_LED: u8 = 2;
    pub type StatusLed = GpioPin<STATUS_LED>;

    pub struct I2cPins {
        pub sda: Sda,
        pub scl: Scl,
    }
}

pub struct Board {
    pub i2c0: I2C0,
    pub i2c_pins: pins::I2cPins,
    pub status_led: pins::StatusLed,
}

impl Board {
    pub fn new(peripherals: Peripherals) -> Self {
        Board {
            i2c0: peripherals.I2C0,
            i2c_pins: pins::I2cPins {
                sda: peripherals.GPIO21,
                scl: peripherals.GPIO22,
            },
            status_led: peripherals.GPIO2,
        }
    }
}

pub fn init_i2c<'d>(i2c0: I2C0, pins: pins::I2cPins) -> I2c<'d, Blocking> {
    let config = Config::default()
        .with_frequency(I2C_FREQUENCY_HZ.Hz())
        .with_timeout(I2C_TIMEOUT);

    I2c::new(i2c0, config)
        .unwrap()
        .with_sda(pins.sda)
        .with_scl(pins.scl)
}

pub fn init_status_led<'d>(pin: pins::StatusLed) -> Output<'d> {
    Output::new(pin, Level::Low)
}
