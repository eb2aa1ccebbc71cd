use critical_section::CriticalSection;

use crate::registers::{
    ChangeSet, RegisterError,
    fields::{impl_byte_field, impl_register_fields, impl_word_field},
    flags::Flags,
    map::{FLAGS_LO_PWM_ENABLED, FLAGS_LO_WRITE_ENABLED, REG_FLAGS_HI, REG_FLAGS_LO},
    policy::WriteGate,
    region::range_span,
    table::RegisterTable,
};

/// Exclusive view of the whole register bank.
///
/// A view only exists inside a critical section, so every access made
/// through it is consistent with every other access made through the same
/// view. Use it to publish several related fields at once or to take a
/// coherent snapshot. All writes are firmware-side and skip the access policy.
pub struct LockedView<'cs> {
    table: &'cs RegisterTable,
    cs: CriticalSection<'cs>,
}

impl<'cs> core::fmt::Debug for LockedView<'cs> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LockedView").finish_non_exhaustive()
    }
}

impl<'cs> LockedView<'cs> {
    pub(crate) fn new(table: &'cs RegisterTable, cs: CriticalSection<'cs>) -> Self {
        Self { table, cs }
    }

    /// Token of the critical section this view lives in.
    #[inline]
    pub fn critical_section(&self) -> CriticalSection<'cs> {
        self.cs
    }

    /// # Panics
    /// Panics if `addr` is past the last register.
    #[inline]
    pub fn read_byte(&self, addr: u8) -> u8 {
        self.table.load(addr)
    }

    /// # Panics
    /// Panics if `addr` is past the last register.
    #[inline]
    pub fn write_byte(&self, addr: u8, value: u8) {
        self.table.store(addr, value)
    }

    /// Reads a big-endian word from `addr_hi`/`addr_lo`.
    ///
    /// # Panics
    /// Panics if either address is past the last register.
    #[inline]
    pub fn read_word(&self, addr_hi: u8, addr_lo: u8) -> u16 {
        u16::from_be_bytes([self.table.load(addr_hi), self.table.load(addr_lo)])
    }

    /// Writes a big-endian word to `addr_hi`/`addr_lo`.
    ///
    /// # Panics
    /// Panics if either address is past the last register.
    #[inline]
    pub fn write_word(&self, addr_hi: u8, addr_lo: u8, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.table.store(addr_hi, hi);
        self.table.store(addr_lo, lo);
    }

    /// Copies `out.len()` consecutive registers starting at `addr` into `out`.
    pub fn copy_to_slice(&self, addr: u8, out: &mut [u8]) -> Result<(), RegisterError> {
        let (start, _) = range_span(addr, out.len())?;
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.table.load((start + i) as u8);
        }
        Ok(())
    }

    #[inline]
    pub fn flags_hi(&self) -> Flags {
        Flags::from_byte(self.read_byte(REG_FLAGS_HI))
    }

    #[inline]
    pub fn flags_lo(&self) -> Flags {
        Flags::from_byte(self.read_byte(REG_FLAGS_LO))
    }

    /// Read-modify-write of the high flags byte.
    pub fn modify_flags_hi(&self, f: impl FnOnce(&mut Flags)) {
        let mut flags = self.flags_hi();
        f(&mut flags);
        self.write_byte(REG_FLAGS_HI, flags.into_byte());
    }

    /// Read-modify-write of the low flags byte.
    pub fn modify_flags_lo(&self, f: impl FnOnce(&mut Flags)) {
        let mut flags = self.flags_lo();
        f(&mut flags);
        self.write_byte(REG_FLAGS_LO, flags.into_byte());
    }

    #[inline]
    pub fn write_gate(&self) -> WriteGate {
        WriteGate::from_bit(self.flags_lo().write_enabled())
    }

    pub fn set_write_gate(&self, gate: WriteGate) {
        self.modify_flags_lo(|flags| flags.set(FLAGS_LO_WRITE_ENABLED, gate.is_unlocked()));
    }

    #[inline]
    pub fn pwm_enabled(&self) -> bool {
        self.flags_lo().pwm_enabled()
    }

    pub fn set_pwm_enabled(&self, enabled: bool) {
        self.modify_flags_lo(|flags| flags.set(FLAGS_LO_PWM_ENABLED, enabled));
    }

    /// Returns and clears the set of registers changed by bus writes.
    pub fn take_changed(&self) -> ChangeSet {
        self.table.take_changed(self.cs)
    }

    impl_register_fields!();
}
