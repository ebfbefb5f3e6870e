use embedded_hal::digital::v2::{OutputPin, PinState};

use crate::Volume;

/// The physical output stage.
pub trait Speaker {
    /// Drives one half cycle. `polarity` flips on every toggle.
    fn drive(&mut self, polarity: bool, volume: Volume);

    /// Leaves the load unpowered.
    fn release(&mut self);
}

/// A speaker wired across two GPIO lines.
///
/// Normal volume toggles line `a` and holds `b` low. High volume toggles both
/// lines in antiphase, doubling the swing across the load.
pub struct DifferentialSpeaker<A, B> {
    a: A,
    b: B,
}

impl<A: OutputPin, B: OutputPin> DifferentialSpeaker<A, B> {
    pub fn new(a: A, b: B) -> Self {
        let mut ret = Self { a, b };
        ret.release();
        ret
    }

    pub fn free(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: OutputPin, B: OutputPin> Speaker for DifferentialSpeaker<A, B> {
    fn drive(&mut self, polarity: bool, volume: Volume) {
        let partner = match volume {
            Volume::Normal => false,
            Volume::High => !polarity,
        };
        let _ = self.a.set_state(PinState::from(polarity));
        let _ = self.b.set_state(PinState::from(partner));
    }

    fn release(&mut self) {
        let _ = self.a.set_low();
        let _ = self.b.set_low();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Default)]
    struct FakePin {
        high: bool,
    }

    impl OutputPin for FakePin {
        type Error = core::convert::Infallible;

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    fn lines(speaker: &DifferentialSpeaker<FakePin, FakePin>) -> (bool, bool) {
        (speaker.a.high, speaker.b.high)
    }

    #[test]
    fn test_new_releases() {
        let speaker = DifferentialSpeaker::new(FakePin { high: true }, FakePin { high: true });
        assert_eq!(lines(&speaker), (false, false));
    }

    #[test]
    fn test_normal_volume_holds_partner_low() {
        let mut speaker = DifferentialSpeaker::new(FakePin::default(), FakePin::default());
        speaker.drive(true, Volume::Normal);
        assert_eq!(lines(&speaker), (true, false));
        speaker.drive(false, Volume::Normal);
        assert_eq!(lines(&speaker), (false, false));
    }

    #[test]
    fn test_high_volume_is_antiphase() {
        let mut speaker = DifferentialSpeaker::new(FakePin::default(), FakePin::default());
        speaker.drive(true, Volume::High);
        assert_eq!(lines(&speaker), (true, false));
        speaker.drive(false, Volume::High);
        assert_eq!(lines(&speaker), (false, true));
        speaker.release();
        let (a, b) = speaker.free();
        assert!(!a.high && !b.high);
    }
}
