#![no_std]
#![no_main]

mod board;

use embedded_hal::delay::DelayNs;
use esp_backtrace as _;
use esp_hal::{delay::Delay, entry};
use esp_println::{println, Printer};
use lift_tracker::{tracker, Tracker, VelocityIntegrator, MPU6050};

use board::Board;

#[entry]
fn main() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());
    esp_println::logger::init_logger(log::LevelFilter::Info);

    let board = Board::new(peripherals);
    let mut delay = Delay::new();

    let i2c = board::init_i2c(board.i2c0, board.i2c_pins);
    let led = board::init_status_led(board.status_led);

    let mut sensor = MPU6050::new(i2c);
    if let Err(e) = sensor.initialize() {
        log::error!("MPU6050 initialization failed: {:?}", e);
        println!("Status: {:?}\r", e);

        // Nothing to track without the sensor
        loop {
            delay.delay_ms(1000);
        }
    }
    log::info!("MPU6050 awake");

    let mut tracker = Tracker::new(
        sensor,
        VelocityIntegrator::new(),
        led,
        Printer,
        tracker::Config::default(),
    );

    tracker.run(&mut delay)
}
