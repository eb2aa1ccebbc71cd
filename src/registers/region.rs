//! Static address classification and transfer range checks.

use crate::registers::{
    RegisterError,
    map::{
        MAX_REGISTER, MAX_RO_REGISTER, MAX_RW_REGISTER, MIN_RO_REGISTER, MIN_RW_REGISTER,
        MIN_SW_REGISTER, REGISTER_COUNT,
    },
};

/// Write behavior of a register address, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// `0x00..=0x0F`: firmware-authored status, bus writes are ignored.
    ReadOnly,
    /// `0x10..=0x1F`: bus writes always apply.
    ReadWrite,
    /// `0x20..=0x3F`: bus writes apply only while the write-enable gate is open.
    SafeReadWrite,
}

impl Region {
    /// Classifies `addr`, or returns `None` past the last register.
    ///
    /// ```
    /// use servo_registers::registers::Region;
    ///
    /// assert_eq!(Region::of(0x09), Some(Region::ReadOnly));
    /// assert_eq!(Region::of(0x10), Some(Region::ReadWrite));
    /// assert_eq!(Region::of(0x3F), Some(Region::SafeReadWrite));
    /// assert_eq!(Region::of(0x40), None);
    /// ```
    pub const fn of(addr: u8) -> Option<Region> {
        match addr {
            MIN_RO_REGISTER..=MAX_RO_REGISTER => Some(Region::ReadOnly),
            MIN_RW_REGISTER..=MAX_RW_REGISTER => Some(Region::ReadWrite),
            MIN_SW_REGISTER..=MAX_REGISTER => Some(Region::SafeReadWrite),
            _ => None,
        }
    }
}

/// Calculates the byte offset range for a transfer of `len` bytes at `addr`.
///
/// Returns `(start, end)` with `end` exclusive.
///
/// # Errors
/// * [`RegisterError::ZeroLength`] - if `len` is 0
/// * [`RegisterError::OutOfBounds`] - if the transfer runs past the last register
pub fn range_span(addr: u8, len: usize) -> Result<(usize, usize), RegisterError> {
    if len == 0 {
        return Err(RegisterError::ZeroLength);
    }

    let offset = addr as usize;
    let end = offset.checked_add(len).ok_or(RegisterError::OutOfBounds)?;

    if end > REGISTER_COUNT {
        return Err(RegisterError::OutOfBounds);
    }

    Ok((offset, end))
}
