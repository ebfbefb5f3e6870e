use core::cell::RefCell;
use core::sync::atomic::AtomicU16;

use cortex_m::interrupt::Mutex;
use fugit::MicrosDurationU32;
use rp_pico::hal;
use rp_pico::hal::pac;

use hal::gpio::bank0::{Gpio16, Gpio17};
use hal::gpio::{Pin, PushPullOutput};
use hal::timer::Alarm;
use hal::timer::Alarm0;
use pac::interrupt;
use tones::{DifferentialSpeaker, HalfPeriod, ToneTimer, Tones, VolumeMode};

pub type SpeakerA = Pin<Gpio16, PushPullOutput>;
pub type SpeakerB = Pin<Gpio17, PushPullOutput>;
type Speaker = DifferentialSpeaker<SpeakerA, SpeakerB>;
type Player = Tones<'static, AlarmTimer, Speaker, fn() -> bool>;

/// Alarm 0 re-armed after every firing, which turns the one-shot alarm into
/// the periodic tone clock.
pub struct AlarmTimer {
    alarm: Alarm0,
    period: Option<MicrosDurationU32>,
}

impl AlarmTimer {
    fn acknowledge(&mut self) {
        self.alarm.clear_interrupt();
    }

    fn reschedule(&mut self) {
        if let Some(period) = self.period {
            let _ = self.alarm.schedule(period);
        }
    }
}

impl ToneTimer for AlarmTimer {
    fn disable(&mut self) {
        self.period = None;
        self.alarm.disable_interrupt();
        self.alarm.clear_interrupt();
    }

    fn enable(&mut self, half_period: HalfPeriod) {
        let period: MicrosDurationU32 = half_period.convert();
        self.period = Some(period);
        self.alarm.clear_interrupt();
        self.alarm.enable_interrupt();
        let _ = self.alarm.schedule(period);
    }
}

static TIMER_IRQ_DATA: Mutex<RefCell<Option<Player>>> = Mutex::new(RefCell::new(None));

pub fn setup_timer_interrupt(timer: &mut hal::Timer, speaker: Speaker, mute_gate: fn() -> bool) {
    let alarm = AlarmTimer {
        alarm: timer.alarm_0().unwrap(),
        period: None,
    };
    cortex_m::interrupt::free(|cs| {
        TIMER_IRQ_DATA
            .borrow(cs)
            .replace(Some(Tones::new(alarm, speaker, mute_gate)));
    });

    unsafe {
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
    }
}

fn with_player<R>(f: impl FnOnce(&mut Player) -> R) -> Option<R> {
    cortex_m::interrupt::free(|cs| TIMER_IRQ_DATA.borrow(cs).borrow_mut().as_mut().map(f))
}

pub fn play_one(freq: u16, dur: u16) {
    with_player(|p| p.play_one(freq, dur));
}

pub fn play_two(freq1: u16, dur1: u16, freq2: u16, dur2: u16) {
    with_player(|p| p.play_two(freq1, dur1, freq2, dur2));
}

pub fn play_three(freq1: u16, dur1: u16, freq2: u16, dur2: u16, freq3: u16, dur3: u16) {
    with_player(|p| p.play_three(freq1, dur1, freq2, dur2, freq3, dur3));
}

pub fn play_sequence(tones: &'static [u16]) {
    with_player(|p| p.play_sequence(tones));
}

pub fn play_sequence_in_ram(tones: &'static [AtomicU16]) {
    with_player(|p| p.play_sequence_in_ram(tones));
}

pub fn stop() {
    with_player(|p| p.stop());
}

pub fn set_volume_mode(mode: VolumeMode) {
    with_player(|p| p.set_volume_mode(mode));
}

pub fn is_playing() -> bool {
    with_player(|p| p.is_playing()).unwrap_or(false)
}

#[interrupt]
fn TIMER_IRQ_0() {
    cortex_m::interrupt::free(|cs| {
        let mut data = TIMER_IRQ_DATA.borrow(cs).borrow_mut();
        let Some(player) = data.as_mut() else {
            return;
        };

        player.timer_mut().acknowledge();
        player.on_timer_interrupt();
        player.timer_mut().reschedule();
    })
}
