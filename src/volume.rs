use crate::HIGH_VOLUME;

/// Global override applied on top of the per-tone volume bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VolumeMode {
    /// Each tone's [`HIGH_VOLUME`] bit decides.
    #[default]
    InTone,
    AlwaysNormal,
    AlwaysHigh,
}

impl From<u8> for VolumeMode {
    /// Classic numeric codes: 1 is always normal, 2 is always high, anything
    /// else leaves the volume to the tones.
    fn from(code: u8) -> Self {
        match code {
            1 => VolumeMode::AlwaysNormal,
            2 => VolumeMode::AlwaysHigh,
            _ => VolumeMode::InTone,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Volume {
    /// One line toggles, its partner is held low.
    Normal,
    /// Both lines toggle in antiphase.
    High,
}

impl VolumeMode {
    /// Resolves the volume for a raw frequency value and strips the volume
    /// bit from it. Always-normal beats everything, always-high beats the
    /// tone bit.
    pub fn resolve(self, freq: u16) -> (Volume, u16) {
        let tone_high = freq & HIGH_VOLUME != 0;
        let volume = match (self, tone_high) {
            (VolumeMode::AlwaysNormal, _) => Volume::Normal,
            (VolumeMode::AlwaysHigh, _) | (VolumeMode::InTone, true) => Volume::High,
            (VolumeMode::InTone, false) => Volume::Normal,
        };
        (volume, freq & !HIGH_VOLUME)
    }
}
