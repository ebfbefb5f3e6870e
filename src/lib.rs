//! Square wave tone sequencing driven by a single recurring timer interrupt.
//!
//! A sequence is a flat list of `u16` values: frequency/duration pairs
//! terminated by [`END`] or [`REPEAT`]. Frequencies are in hertz, with
//! [`HIGH_VOLUME`] or-ed in to request the louder antiphase drive. A
//! frequency of 0 is a rest. Durations are in 1024ths of a second, 0 means
//! "until stopped".
//!
//! ```ignore
//! static MELODY: [u16; 5] = [220, 1024, 0, 256, tones::REPEAT];
//! player.play_sequence(&MELODY);
//! ```
#![cfg_attr(not(test), no_std)]

mod mute;
mod output;
mod sequencer;
mod source;
mod timer;
mod volume;
mod waveform;

pub use mute::MuteGate;
pub use output::{DifferentialSpeaker, Speaker};
pub use sequencer::{toggle_count, Remaining, Tones};
pub use timer::{half_period, HalfPeriod, ToneTimer};
pub use volume::{Volume, VolumeMode};

/// Frequency slot value terminating a sequence. No duration follows.
pub const END: u16 = 0x8000;
/// Frequency slot value restarting a sequence from its first entry. No duration follows.
pub const REPEAT: u16 = 0x8001;
/// Added to a frequency to play that tone at high volume.
pub const HIGH_VOLUME: u16 = 0x8000;

/// Maximum number of tones accepted by the inline `play_*` calls.
pub const MAX_TONES: usize = config::MAX_TONES;

pub const fn high_volume(freq: u16) -> u16 {
    freq | HIGH_VOLUME
}
