use core::sync::atomic::AtomicU16;

use config::SILENT_FREQ;

use crate::source::{Cursor, InlineTones, ToneSource};
use crate::{half_period, MuteGate, Speaker, ToneTimer, Volume, VolumeMode, END, REPEAT};

/// Toggles left in the current tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Remaining {
    Forever,
    Toggles(u32),
}

/// Number of half-period toggles for `dur` 1024ths of a second at `freq` Hz.
///
/// Divides by 512 instead of 500, so a duration read as milliseconds comes
/// out 2.34% short.
pub fn toggle_count(dur: u16, freq: u16) -> Remaining {
    if dur == 0 {
        Remaining::Forever
    } else {
        Remaining::Toggles((dur as u32 * freq as u32) >> 9)
    }
}

pub(crate) struct ToneState {
    pub(crate) silent: bool,
    pub(crate) volume: Volume,
    pub(crate) polarity: bool,
    pub(crate) remaining: Remaining,
}

impl ToneState {
    const fn idle() -> Self {
        Self {
            silent: true,
            volume: Volume::Normal,
            polarity: false,
            remaining: Remaining::Toggles(0),
        }
    }
}

/// Tone sequencer bound to a timer, a speaker and a mute gate.
///
/// Every public call pauses the timer before touching playback state, so
/// foreground calls never race the interrupt as long as the interrupt itself
/// is the only other caller (typically both run under the same
/// `cortex_m::interrupt::Mutex`).
pub struct Tones<'a, T, S, M> {
    timer: T,
    pub(crate) speaker: S,
    mute: M,
    mode: VolumeMode,
    inline: InlineTones,
    cursor: Cursor<'a>,
    playing: bool,
    pub(crate) tone: ToneState,
}

impl<'a, T: ToneTimer, S: Speaker, M: MuteGate> Tones<'a, T, S, M> {
    pub fn new(timer: T, speaker: S, mute: M) -> Self {
        let mut ret = Self {
            timer,
            speaker,
            mute,
            mode: VolumeMode::InTone,
            inline: InlineTones::new(),
            cursor: Cursor::new(ToneSource::Inline),
            playing: false,
            tone: ToneState::idle(),
        };
        ret.timer.disable();
        ret.speaker.release();
        ret
    }

    /// Plays a single tone. A `dur` of 0 plays until stopped or replaced.
    pub fn play_one(&mut self, freq: u16, dur: u16) {
        self.play_inline(&[(freq, dur)]);
    }

    pub fn play_two(&mut self, freq1: u16, dur1: u16, freq2: u16, dur2: u16) {
        self.play_inline(&[(freq1, dur1), (freq2, dur2)]);
    }

    pub fn play_three(
        &mut self,
        freq1: u16,
        dur1: u16,
        freq2: u16,
        dur2: u16,
        freq3: u16,
        dur3: u16,
    ) {
        self.play_inline(&[(freq1, dur1), (freq2, dur2), (freq3, dur3)]);
    }

    /// Plays immutable data, normally a `static` left in flash. The data must
    /// end with [`END`] or [`REPEAT`].
    pub fn play_sequence(&mut self, tones: &'a [u16]) {
        self.timer.disable();
        self.start(ToneSource::Flash(tones));
    }

    /// Plays data the caller may rewrite between plays. The data must end
    /// with [`END`] or [`REPEAT`].
    pub fn play_sequence_in_ram(&mut self, tones: &'a [AtomicU16]) {
        self.timer.disable();
        self.start(ToneSource::Ram(tones));
    }

    /// Halts playback immediately. Does nothing when already stopped.
    pub fn stop(&mut self) {
        self.timer.disable();
        if self.playing {
            #[cfg(feature = "defmt")]
            defmt::trace!("tones: stopped");
            self.playing = false;
            self.release();
        }
    }

    pub fn set_volume_mode(&mut self, mode: VolumeMode) {
        self.mode = mode;
    }

    pub fn volume_mode(&self) -> VolumeMode {
        self.mode
    }

    /// True while a sequence is active, muted or not.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    fn play_inline(&mut self, tones: &[(u16, u16)]) {
        self.timer.disable();
        self.inline.load(tones);
        self.start(ToneSource::Inline);
    }

    fn start(&mut self, source: ToneSource<'a>) {
        #[cfg(feature = "defmt")]
        defmt::trace!("tones: start");
        self.cursor = Cursor::new(source);
        self.advance();
    }

    fn release(&mut self) {
        self.tone.polarity = false;
        self.speaker.release();
    }

    /// Moves to the next entry of the active sequence and arms the timer for
    /// it. The timer must be disabled, or this must run from its interrupt.
    pub(crate) fn advance(&mut self) {
        let mut freq = self.cursor.read_next(&self.inline);
        if freq == END {
            self.stop();
            return;
        }

        if freq == REPEAT {
            self.cursor.rewind();
            freq = self.cursor.read_next(&self.inline);
            // A sequence without a single tone has nothing to repeat
            if freq == END || freq == REPEAT {
                self.stop();
                return;
            }
        }
        self.playing = true;

        let (volume, mut freq) = self.mode.resolve(freq);
        let mut silent = false;
        if freq == 0 {
            freq = SILENT_FREQ;
            silent = true;
        }
        if !self.mute.sound_enabled() {
            silent = true;
        }

        let dur = self.cursor.read_next(&self.inline);

        self.tone.silent = silent;
        self.tone.volume = volume;
        self.tone.remaining = toggle_count(dur, freq);
        if silent {
            self.release();
        }

        self.timer.enable(half_period(freq));
    }
}
