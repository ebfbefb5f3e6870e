#![no_std]

// ----------------------------------------------------------------------------
// Configurable
// ----------------------------------------------------------------------------
pub const MAX_TONES: usize = 3; // Tones accepted by a single inline call
pub const SILENT_FREQ: u16 = 25; // Pulse rate used to time rests (Hz)

pub const VOLUME_MODE: u8 = 0; // 0: per tone, 1: always normal, 2: always high
pub const BUTTON_DEBOUNCE_MILLIS: u32 = 30;
pub const STATUS_POLL_MILLIS: u32 = 10;
pub const MELODY_MILLIS: u32 = 8_000; // How long the looping melody plays

// ----------------------------------------------------------------------------
// Should probably not be changed:
// ----------------------------------------------------------------------------
pub const TIMER_TICK_HZ: u32 = 1_000_000; // RP2040 timer runs at 1MHz
pub const SYSTEM_CLOCK_HZ: u32 = 125_000_000;

// ----------------------------------------------------------------------------
// Derived from other values:
// ----------------------------------------------------------------------------
pub const INLINE_LEN: usize = MAX_TONES * 2 + 1; // Pairs plus terminator
