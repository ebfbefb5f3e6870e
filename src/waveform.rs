use crate::{MuteGate, Remaining, Speaker, ToneTimer, Tones};

impl<'a, T: ToneTimer, S: Speaker, M: MuteGate> Tones<'a, T, S, M> {
    /// Timer compare-match handler. Flips the output once per call and moves
    /// on to the next tone when the current one has run out.
    pub fn on_timer_interrupt(&mut self) {
        if !self.is_playing() {
            return;
        }

        let exhausted = match &mut self.tone.remaining {
            Remaining::Toggles(0) => true,
            Remaining::Toggles(n) => {
                *n -= 1;
                false
            }
            Remaining::Forever => false,
        };
        if exhausted {
            self.advance();
            return;
        }

        if !self.tone.silent {
            self.tone.polarity = !self.tone.polarity;
            self.speaker.drive(self.tone.polarity, self.tone.volume);
        }
    }
}
