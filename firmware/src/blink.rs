use cortex_m::delay::Delay;
use embedded_hal::digital::v2::OutputPin;

const UNIT_MILLIS: u32 = 200;

/// LED pattern. Each entry lights the LED for that many units, 0 keeps it
/// dark for one unit.
pub struct Signal(&'static [u8]);

pub const BOOT: Signal = Signal(&[4, 0]);
pub const PANIC: Signal = Signal(&[1, 0, 1, 0, 1, 0]);

pub fn blink(
    pin: &mut dyn OutputPin<Error = core::convert::Infallible>,
    delay: &mut Delay,
    signal: &Signal,
) {
    for &units in signal.0 {
        let _ = if units != 0 {
            pin.set_high()
        } else {
            pin.set_low()
        };
        delay.delay_ms(UNIT_MILLIS * units.max(1) as u32);
    }

    let _ = pin.set_low();
    delay.delay_ms(UNIT_MILLIS * 2);
}

pub fn blink_loop(
    pin: &mut dyn OutputPin<Error = core::convert::Infallible>,
    delay: &mut Delay,
    signal: &Signal,
) -> ! {
    loop {
        blink(pin, delay, signal);
        delay.delay_ms(UNIT_MILLIS * 5);
    }
}
