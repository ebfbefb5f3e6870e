use core::sync::atomic::{AtomicU16, Ordering};

use config::INLINE_LEN;

use crate::{END, MAX_TONES};

/// Where the active sequence is read from.
#[derive(Clone, Copy)]
pub(crate) enum ToneSource<'a> {
    /// The engine's own [`InlineTones`] buffer.
    Inline,
    /// Immutable data, usually a `static` that stays in flash.
    Flash(&'a [u16]),
    /// Caller-owned RAM that may be rewritten between plays.
    Ram(&'a [AtomicU16]),
}

/// Fixed-capacity copy of up to [`MAX_TONES`] frequency/duration pairs.
pub(crate) struct InlineTones {
    data: [u16; INLINE_LEN],
}

impl InlineTones {
    pub(crate) const fn new() -> Self {
        Self {
            data: [END; INLINE_LEN],
        }
    }

    /// Copies `tones` in and terminates them with [`END`]. Pairs beyond
    /// [`MAX_TONES`] are dropped.
    pub(crate) fn load(&mut self, tones: &[(u16, u16)]) {
        let count = tones.len().min(MAX_TONES);
        for (i, &(freq, dur)) in tones[..count].iter().enumerate() {
            self.data[i * 2] = freq;
            self.data[i * 2 + 1] = dur;
        }
        self.data[count * 2] = END;
    }
}

/// Read position into a [`ToneSource`]. Rewinding always returns to the
/// first element of the source.
pub(crate) struct Cursor<'a> {
    source: ToneSource<'a>,
    index: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(source: ToneSource<'a>) -> Self {
        Self { source, index: 0 }
    }

    pub(crate) fn rewind(&mut self) {
        self.index = 0;
    }

    /// Returns the element under the cursor and advances it. Running off the
    /// end of the source reads as [`END`].
    pub(crate) fn read_next(&mut self, inline: &InlineTones) -> u16 {
        let value = match self.source {
            ToneSource::Inline => inline.data.get(self.index).copied(),
            ToneSource::Flash(data) => data.get(self.index).copied(),
            ToneSource::Ram(data) => data.get(self.index).map(|v| v.load(Ordering::Relaxed)),
        };
        self.index += 1;
        value.unwrap_or(END)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::REPEAT;

    #[test]
    fn test_inline_load_terminates() {
        let mut inline = InlineTones::new();
        inline.load(&[(440, 100), (880, 200), (220, 300)]);
        assert_eq!(&inline.data, &[440, 100, 880, 200, 220, 300, END]);

        inline.load(&[(1000, 5)]);
        assert_eq!(&inline.data[..3], &[1000, 5, END]);
    }

    #[test]
    fn test_inline_load_truncates() {
        let mut inline = InlineTones::new();
        inline.load(&[(1, 1), (2, 2), (3, 3), (4, 4)]);
        assert_eq!(&inline.data, &[1, 1, 2, 2, 3, 3, END]);
    }

    #[test]
    fn test_cursor_reads_each_source() {
        let mut inline = InlineTones::new();
        inline.load(&[(300, 10)]);
        let mut c = Cursor::new(ToneSource::Inline);
        assert_eq!(c.read_next(&inline), 300);
        assert_eq!(c.read_next(&inline), 10);
        assert_eq!(c.read_next(&inline), END);

        let flash = [220, 1024, REPEAT];
        let mut c = Cursor::new(ToneSource::Flash(&flash));
        assert_eq!(c.read_next(&inline), 220);
        assert_eq!(c.read_next(&inline), 1024);
        assert_eq!(c.read_next(&inline), REPEAT);
        c.rewind();
        assert_eq!(c.read_next(&inline), 220);

        let ram = [AtomicU16::new(500), AtomicU16::new(7), AtomicU16::new(END)];
        let mut c = Cursor::new(ToneSource::Ram(&ram));
        assert_eq!(c.read_next(&inline), 500);
        ram[1].store(9, Ordering::Relaxed);
        assert_eq!(c.read_next(&inline), 9);
    }

    #[test]
    fn test_cursor_past_end_reads_end() {
        let inline = InlineTones::new();
        let flash = [440, 100];
        let mut c = Cursor::new(ToneSource::Flash(&flash));
        c.read_next(&inline);
        c.read_next(&inline);
        assert_eq!(c.read_next(&inline), END);
        assert_eq!(c.read_next(&inline), END);
    }
}
