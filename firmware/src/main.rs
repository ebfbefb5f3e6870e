#![no_std]
#![no_main]

mod blink;
mod mutebutton;
mod panic;
mod player;

use core::sync::atomic::{AtomicU16, Ordering};

use defmt::info;
use defmt_rtt as _;
use embedded_hal::digital::v2::{OutputPin, PinState};
// The macro for our start-up function
use rp_pico::entry;

use rp_pico::hal;
use rp_pico::hal::pac;
use rp_pico::hal::Clock;

use tones::{high_volume, DifferentialSpeaker, VolumeMode, END, REPEAT};

const NOTE_C5: u16 = 523;
const NOTE_D5: u16 = 587;
const NOTE_E5: u16 = 659;
const NOTE_F5: u16 = 698;
const NOTE_G5: u16 = 784;
const NOTE_A5: u16 = 880;
const REST: u16 = 0;

// Durations are in 1024ths of a second
const BEAT: u16 = 256;

#[rustfmt::skip]
static MELODY: [u16; 33] = [
    NOTE_E5, BEAT, NOTE_D5, BEAT, NOTE_C5, BEAT, NOTE_D5, BEAT,
    NOTE_E5, BEAT, NOTE_E5, BEAT, NOTE_E5, BEAT * 2,
    NOTE_D5, BEAT, NOTE_D5, BEAT, NOTE_D5, BEAT * 2,
    NOTE_E5, BEAT, high_volume(NOTE_G5), BEAT, high_volume(NOTE_G5), BEAT * 2,
    REST, BEAT, NOTE_F5, BEAT / 2, NOTE_A5, BEAT / 2,
    REPEAT,
];

const SWEEP_STEPS: usize = 8;
#[allow(clippy::declare_interior_mutable_const)]
const SWEEP_INIT: AtomicU16 = AtomicU16::new(END);
static SWEEP: [AtomicU16; SWEEP_STEPS * 2 + 1] = [SWEEP_INIT; SWEEP_STEPS * 2 + 1];

/// Rewrites the RAM sweep. Must not run while the sweep is playing.
fn fill_sweep(base: u16) {
    for (i, pair) in SWEEP.chunks_exact(2).enumerate() {
        pair[0].store(high_volume(base + i as u16 * 110), Ordering::Relaxed);
        pair[1].store(64, Ordering::Relaxed);
    }
    SWEEP[SWEEP_STEPS * 2].store(END, Ordering::Relaxed);
}

/// Waits until playback ends or `limit_millis` have passed, mirroring the
/// mute state on the LED meanwhile.
fn wait_for_player(
    led_pin: &mut dyn OutputPin<Error = core::convert::Infallible>,
    delay: &mut cortex_m::delay::Delay,
    limit_millis: Option<u32>,
) {
    let mut waited = 0;
    while player::is_playing() && limit_millis.map_or(true, |limit| waited < limit) {
        let _ = led_pin.set_state(PinState::from(mutebutton::sound_enabled()));
        delay.delay_ms(config::STATUS_POLL_MILLIS);
        waited += config::STATUS_POLL_MILLIS;
    }
}

/// Entry point to our bare-metal application.
///
/// The `#[entry]` macro ensures the Cortex-M start-up code calls this function
/// as soon as all global variables are initialised.
///
/// The function configures the RP2040 peripherals, then cycles through the
/// demo tunes forever. The button on GPIO5 mutes and unmutes the speaker.
#[entry]
fn main() -> ! {
    info!("Booting...");

    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
    let clocks = hal::clocks::init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());
    let mut led_pin = pins.led.into_push_pull_output();

    let speaker = DifferentialSpeaker::new(
        pins.gpio16.into_push_pull_output(),
        pins.gpio17.into_push_pull_output(),
    );

    let mut timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS);
    player::setup_timer_interrupt(&mut timer, speaker, mutebutton::sound_enabled);
    mutebutton::setup_interrupt(&mut timer, pins.gpio5.into_pull_up_input());

    player::set_volume_mode(VolumeMode::from(config::VOLUME_MODE));
    blink::blink(&mut led_pin, &mut delay, &blink::BOOT);

    let mut round: u16 = 0;
    loop {
        info!("round {}: jingle", round);
        player::play_three(NOTE_C5, 128, NOTE_E5, 128, high_volume(NOTE_G5), 256);
        wait_for_player(&mut led_pin, &mut delay, None);

        info!("sweep");
        fill_sweep(330 + (round % 4) * 55);
        player::play_sequence_in_ram(&SWEEP);
        wait_for_player(&mut led_pin, &mut delay, None);

        info!("melody");
        player::play_sequence(&MELODY);
        wait_for_player(&mut led_pin, &mut delay, Some(config::MELODY_MILLIS));
        player::stop();

        player::play_two(NOTE_G5, 96, NOTE_C5, 192);
        wait_for_player(&mut led_pin, &mut delay, None);

        // One second of timed silence
        player::play_one(REST, 1024);
        wait_for_player(&mut led_pin, &mut delay, None);

        round = round.wrapping_add(1);
    }
}
