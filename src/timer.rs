use config::TIMER_TICK_HZ;

/// Time between two output toggles, in hardware timer ticks.
pub type HalfPeriod = fugit::TimerDurationU32<TIMER_TICK_HZ>;

/// The periodic compare-match interrupt that clocks the waveform.
///
/// Once enabled the timer must keep firing every `half_period` until it is
/// disabled or re-enabled with a new period, calling
/// [`Tones::on_timer_interrupt`](crate::Tones::on_timer_interrupt) each time.
pub trait ToneTimer {
    fn disable(&mut self);
    fn enable(&mut self, half_period: HalfPeriod);
}

/// One toggle per half cycle of `freq`.
pub fn half_period(freq: u16) -> HalfPeriod {
    HalfPeriod::from_ticks(TIMER_TICK_HZ / 2 / (freq.max(1) as u32))
}
