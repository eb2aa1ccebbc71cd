use core::{
    cell::Cell,
    sync::atomic::{AtomicU8, Ordering},
};

use critical_section::{CriticalSection, Mutex};

use crate::registers::{changes::ChangeSet, map::REGISTER_COUNT};

/// Backing storage of the register bank.
///
/// Every slot is individually atomic so single byte accesses need no lock.
/// Multi-byte consistency is the caller's job: anything touching more than
/// one slot must run inside a critical section.
pub(crate) struct RegisterTable {
    bytes: [AtomicU8; REGISTER_COUNT],
    changed: Mutex<Cell<u64>>,
}

impl RegisterTable {
    pub(crate) const fn new() -> Self {
        Self {
            bytes: [const { AtomicU8::new(0) }; REGISTER_COUNT],
            changed: Mutex::new(Cell::new(0)),
        }
    }

    /// # Panics
    /// Panics if `addr` is past the last register.
    #[inline]
    pub(crate) fn load(&self, addr: u8) -> u8 {
        self.bytes[addr as usize].load(Ordering::Relaxed)
    }

    /// # Panics
    /// Panics if `addr` is past the last register.
    #[inline]
    pub(crate) fn store(&self, addr: u8, value: u8) {
        self.bytes[addr as usize].store(value, Ordering::Relaxed)
    }

    pub(crate) fn fill(&self, _cs: CriticalSection<'_>, value: u8) {
        for slot in &self.bytes {
            slot.store(value, Ordering::Relaxed);
        }
    }

    pub(crate) fn mark_changed(&self, cs: CriticalSection<'_>, addr: u8) {
        let cell = self.changed.borrow(cs);
        cell.set(cell.get() | (1u64 << addr));
    }

    pub(crate) fn any_changed(&self, cs: CriticalSection<'_>) -> bool {
        self.changed.borrow(cs).get() != 0
    }

    pub(crate) fn take_changed(&self, cs: CriticalSection<'_>) -> ChangeSet {
        ChangeSet::from_bits(self.changed.borrow(cs).replace(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_zeroed() {
        let table = RegisterTable::new();
        for addr in 0..REGISTER_COUNT as u8 {
            assert_eq!(table.load(addr), 0);
        }
        critical_section::with(|cs| assert!(!table.any_changed(cs)));
    }

    #[test]
    fn store_then_load() {
        let table = RegisterTable::new();
        table.store(0x3F, 0xA5);
        assert_eq!(table.load(0x3F), 0xA5);
        assert_eq!(table.load(0x3E), 0x00);
    }

    #[test]
    fn fill_overwrites_every_slot() {
        let table = RegisterTable::new();
        critical_section::with(|cs| table.fill(cs, 0xFF));
        for addr in 0..REGISTER_COUNT as u8 {
            assert_eq!(table.load(addr), 0xFF);
        }
    }

    #[test]
    fn take_changed_drains() {
        let table = RegisterTable::new();
        critical_section::with(|cs| {
            table.mark_changed(cs, 0x10);
            table.mark_changed(cs, 0x3F);
            assert!(table.any_changed(cs));

            let changed = table.take_changed(cs);
            assert!(changed.contains(0x10));
            assert!(changed.contains(0x3F));
            assert!(!changed.contains(0x11));

            assert!(!table.any_changed(cs));
            assert!(table.take_changed(cs).is_empty());
        });
    }

    #[test]
    #[should_panic]
    fn load_out_of_range() {
        RegisterTable::new().load(0x40);
    }
}
