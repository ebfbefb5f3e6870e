/// Decides, once per tone boundary, whether the next tone is audible.
///
/// Called from interrupt context, so implementations must return quickly
/// and must not block.
pub trait MuteGate {
    fn sound_enabled(&mut self) -> bool;
}

impl<F: FnMut() -> bool> MuteGate for F {
    fn sound_enabled(&mut self) -> bool {
        self()
    }
}
