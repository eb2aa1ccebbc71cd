use crate::registers::region::Region;

/// State of the write-enable gate guarding the safe read/write region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteGate {
    /// Safe read/write registers reject bus writes.
    #[default]
    Locked,
    /// Safe read/write registers accept bus writes.
    Unlocked,
}

impl WriteGate {
    #[inline]
    pub(crate) fn from_bit(enabled: bool) -> Self {
        if enabled {
            WriteGate::Unlocked
        } else {
            WriteGate::Locked
        }
    }

    /// Returns true if the gate is open.
    #[inline]
    pub fn is_unlocked(self) -> bool {
        matches!(self, WriteGate::Unlocked)
    }
}

/// Decides whether a bus-originated write to a register takes effect.
///
/// Firmware-side writes never consult the policy.
pub trait AccessPolicy {
    /// Returns true if a bus write to `addr` should be applied while the
    /// write-enable gate is in state `gate`.
    fn can_write(&self, addr: u8, gate: WriteGate) -> bool;
}

/// Default policy enforcing the region table.
///
/// | Range | Region | Bus write |
/// |---|---|---|
/// | `0x00..=0x0F` | read-only | dropped |
/// | `0x10..=0x1F` | read-write | applied |
/// | `0x20..=0x3F` | safe read-write | applied iff unlocked |
#[derive(Debug, Default, Clone, Copy)]
pub struct RegionPolicy {}

impl AccessPolicy for RegionPolicy {
    fn can_write(&self, addr: u8, gate: WriteGate) -> bool {
        match Region::of(addr) {
            Some(Region::ReadWrite) => true,
            Some(Region::SafeReadWrite) => gate.is_unlocked(),
            Some(Region::ReadOnly) | None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gate_is_locked() {
        assert_eq!(WriteGate::default(), WriteGate::Locked);
        assert!(!WriteGate::default().is_unlocked());
    }

    #[test]
    fn region_policy_follows_region_table() {
        let policy = RegionPolicy::default();

        for addr in 0x00..=0x0F {
            assert!(!policy.can_write(addr, WriteGate::Locked));
            assert!(!policy.can_write(addr, WriteGate::Unlocked));
        }
        for addr in 0x10..=0x1F {
            assert!(policy.can_write(addr, WriteGate::Locked));
            assert!(policy.can_write(addr, WriteGate::Unlocked));
        }
        for addr in 0x20..=0x3F {
            assert!(!policy.can_write(addr, WriteGate::Locked));
            assert!(policy.can_write(addr, WriteGate::Unlocked));
        }
    }

    #[test]
    fn region_policy_rejects_unmapped() {
        let policy = RegionPolicy::default();
        assert!(!policy.can_write(0x40, WriteGate::Unlocked));
    }
}
