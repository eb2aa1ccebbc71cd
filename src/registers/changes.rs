use bitmaps::Bitmap;

use crate::registers::{RegisterError, region::range_span};

/// Registers written by applied bus writes since the set was last drained.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ChangeSet(Bitmap<64>);

impl ChangeSet {
    pub(crate) fn from_bits(bits: u64) -> Self {
        Self(Bitmap::from_value(bits))
    }

    /// Returns true if no register changed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of changed registers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if `addr` changed. Addresses past the bank never change.
    pub fn contains(&self, addr: u8) -> bool {
        (addr as usize) < 64 && self.0.get(addr as usize)
    }

    /// Returns true if any register in `addr..addr + len` changed.
    pub fn overlaps(&self, addr: u8, len: usize) -> Result<bool, RegisterError> {
        let (start, end) = range_span(addr, len)?;
        Ok((start..end).any(|i| self.0.get(i)))
    }

    /// Iterates changed addresses in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        let mut next = self.0.first_index();
        core::iter::from_fn(move || {
            let idx = next?;
            next = self.0.next_index(idx);
            Some(idx as u8)
        })
    }
}

impl core::fmt::Debug for ChangeSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_yields_ascending_addresses() {
        let set = ChangeSet::from_bits((1 << 0x22) | (1 << 0x10) | (1 << 0x3F));

        let mut addrs = [0u8; 4];
        let mut count = 0;
        for addr in set.iter() {
            addrs[count] = addr;
            count += 1;
        }

        assert_eq!(count, 3);
        assert_eq!(set.len(), 3);
        assert_eq!(&addrs[..count], &[0x10, 0x22, 0x3F]);
    }

    #[test]
    fn overlaps_scenarios() {
        let set = ChangeSet::from_bits(1 << 0x23);

        assert!(set.overlaps(0x22, 2).unwrap()); // pgain word
        assert!(!set.overlaps(0x24, 2).unwrap()); // dgain word
        assert!(set.overlaps(0x20, 32).unwrap());
        assert_eq!(set.overlaps(0x3F, 2), Err(RegisterError::OutOfBounds));
        assert_eq!(set.overlaps(0x20, 0), Err(RegisterError::ZeroLength));
    }

    #[test]
    fn empty_set() {
        let set = ChangeSet::from_bits(0);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
        assert!(!set.contains(0x40));
    }
}
