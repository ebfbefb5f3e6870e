use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use cortex_m::interrupt::Mutex;
use embedded_hal::digital::v2::InputPin;
use fugit::ExtU32;
use rp_pico::hal::{
    self,
    gpio::Interrupt,
    pac::{self, interrupt},
    timer::{Alarm, Alarm2},
};

use hal::gpio;

pub type ButtonPin = gpio::Pin<gpio::bank0::Gpio5, gpio::PullUpInput>;

static SOUND_ENABLED: AtomicBool = AtomicBool::new(true);

/// Mute gate handed to the tone player. Runs in the tone interrupt.
pub fn sound_enabled() -> bool {
    SOUND_ENABLED.load(Ordering::Relaxed)
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum ButtonState {
    Pressed,
    Released,
}

struct IrqData {
    button: ButtonPin,
    alarm: Alarm2,
    debouncing: bool,
    state: ButtonState,
}

static IRQ_DATA: Mutex<RefCell<Option<IrqData>>> = Mutex::new(RefCell::new(None));

pub fn setup_interrupt(timer: &mut hal::Timer, button: ButtonPin) {
    let mut alarm = timer.alarm_2().unwrap();
    alarm.enable_interrupt();

    cortex_m::interrupt::free(|cs| {
        let mut data = IRQ_DATA.borrow(cs).borrow_mut();
        let data = data.insert(IrqData {
            button,
            alarm,
            debouncing: false,
            state: ButtonState::Released,
        });

        data.button.set_interrupt_enabled(Interrupt::EdgeLow, true);
        data.button.set_interrupt_enabled(Interrupt::EdgeHigh, true);
    });

    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_2);
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    cortex_m::interrupt::free(|cs| {
        let mut data = IRQ_DATA.borrow(cs).borrow_mut();
        let Some(data) = data.as_mut() else {
            return;
        };

        for edge in [Interrupt::EdgeLow, Interrupt::EdgeHigh] {
            if data.button.interrupt_status(edge) {
                data.button.clear_interrupt(edge);
            }
        }

        // Sample the line once it has settled
        if !data.debouncing {
            data.debouncing = true;
            let _ = data.alarm.schedule(config::BUTTON_DEBOUNCE_MILLIS.millis());
        }
    });
}

#[interrupt]
fn TIMER_IRQ_2() {
    cortex_m::interrupt::free(|cs| {
        let mut data = IRQ_DATA.borrow(cs).borrow_mut();
        let Some(data) = data.as_mut() else {
            return;
        };

        data.alarm.clear_interrupt();
        data.debouncing = false;

        let current = if data.button.is_low().unwrap_or(false) {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        };
        if current == ButtonState::Pressed && data.state == ButtonState::Released {
            let enabled = !SOUND_ENABLED.load(Ordering::Relaxed);
            SOUND_ENABLED.store(enabled, Ordering::Relaxed);
            defmt::info!("sound enabled: {}", enabled);
        }
        data.state = current;
    });
}
