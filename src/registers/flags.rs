use bitmaps::Bitmap;

use crate::registers::map::{FLAGS_LO_PWM_ENABLED, FLAGS_LO_WRITE_ENABLED};

/// Bit view of one flags register byte.
///
/// Reserved bits are plain storage with no side effects.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Flags(Bitmap<8>);

impl Flags {
    /// Wraps a raw flags byte.
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        Self(Bitmap::from_value(byte))
    }

    /// Returns the raw flags byte.
    #[inline]
    pub fn into_byte(self) -> u8 {
        self.0.into_value()
    }

    /// Reads bit `bit`.
    ///
    /// # Panics
    /// Panics if `bit >= 8`.
    #[inline]
    pub fn get(&self, bit: usize) -> bool {
        assert!(bit < 8, "flag bit {} out of range", bit);
        self.0.get(bit)
    }

    /// Sets bit `bit` to `value`.
    ///
    /// # Panics
    /// Panics if `bit >= 8`.
    #[inline]
    pub fn set(&mut self, bit: usize, value: bool) {
        assert!(bit < 8, "flag bit {} out of range", bit);
        self.0.set(bit, value);
    }

    #[inline]
    pub fn pwm_enabled(&self) -> bool {
        self.get(FLAGS_LO_PWM_ENABLED)
    }

    #[inline]
    pub fn write_enabled(&self) -> bool {
        self.get(FLAGS_LO_WRITE_ENABLED)
    }
}

impl core::fmt::Debug for Flags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Flags({:#010b})", self.into_byte())
    }
}
