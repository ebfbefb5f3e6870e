use embedded_hal::digital::v2::OutputPin;
use rp_pico::{hal, pac};

use crate::blink;

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    // Nothing may touch the speaker lines from here on
    cortex_m::interrupt::disable();

    defmt::error!("{}", defmt::Display2Format(info));

    let core = unsafe { pac::CorePeripherals::steal() };
    let mut pac = unsafe { pac::Peripherals::steal() };

    let sio = hal::Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let _ = pins.gpio16.into_push_pull_output().set_low();
    let _ = pins.gpio17.into_push_pull_output().set_low();

    let mut delay = cortex_m::delay::Delay::new(core.SYST, config::SYSTEM_CLOCK_HZ);
    let mut led_pin = pins.led.into_push_pull_output();

    blink::blink_loop(&mut led_pin, &mut delay, &blink::PANIC);
}
