use critical_section::CriticalSection;

use crate::registers::{
    ChangeSet,
    defaults::Defaults,
    fields::{impl_byte_field, impl_register_fields, impl_word_field},
    flags::Flags,
    map::{MAX_REGISTER, MIN_RW_REGISTER, REG_FLAGS_HI, REG_FLAGS_LO},
    policy::{AccessPolicy, RegionPolicy, WriteGate},
    table::RegisterTable,
    view::LockedView,
};

/// The shared register bank.
///
/// One bank is meant to live for the whole program as a `static`, shared
/// between the bus interrupt handler and the control loop:
///
/// ```
/// use servo_registers::prelude::*;
///
/// static REGISTERS: RegisterBank = RegisterBank::new();
///
/// // Boot, before interrupts are enabled.
/// REGISTERS.init();
/// REGISTERS.load_defaults();
///
/// // Control loop publishes telemetry.
/// REGISTERS.write_word(REG_POSITION_HI, REG_POSITION_LO, 0x0123);
///
/// // Bus handler reads it back without tearing.
/// assert_eq!(REGISTERS.read_word(REG_POSITION_HI, REG_POSITION_LO), 0x0123);
/// ```
///
/// Single byte accesses are indivisible on their own. Word accesses, flag
/// updates, bus transfers and [`with_view`](Self::with_view) run inside a
/// critical section that restores the previous interrupt state on exit, so
/// they nest. Nesting only guards against preemption: a context that
/// re-enters the bank from inside its own view sees its own partial updates.
///
/// # Type Parameters
/// - `AP`: Access policy deciding which bus writes take effect
pub struct RegisterBank<AP = RegionPolicy>
where
    AP: AccessPolicy,
{
    pub(crate) table: RegisterTable,
    pub(crate) access_policy: AP,
    pub(crate) defaults: Defaults,
}

impl RegisterBank<RegionPolicy> {
    /// Creates a zeroed bank with the standard region policy and
    /// [`Defaults::new`].
    pub const fn new() -> Self {
        Self::with_config(RegionPolicy {}, Defaults::new())
    }
}

impl Default for RegisterBank<RegionPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<AP> core::fmt::Debug for RegisterBank<AP>
where
    AP: AccessPolicy,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegisterBank")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl<AP> RegisterBank<AP>
where
    AP: AccessPolicy,
{
    /// Creates a zeroed bank with a custom policy and default values.
    pub const fn with_config(access_policy: AP, defaults: Defaults) -> Self {
        Self {
            table: RegisterTable::new(),
            access_policy,
            defaults,
        }
    }

    /// Values used by [`init`](Self::init) and [`load_defaults`](Self::load_defaults).
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Zeroes every register, stamps the device identity and clears
    /// change tracking.
    ///
    /// Leaves the write-enable gate locked. Call before enabling interrupts.
    pub fn init(&self) {
        critical_section::with(|cs| {
            self.table.fill(cs, 0);
            self.table.take_changed(cs);

            let view = self.view(cs);
            view.set_device_type(self.defaults.device_type);
            view.set_device_subtype(self.defaults.device_subtype);
            view.set_version_major(self.defaults.version_major);
            view.set_version_minor(self.defaults.version_minor);
        });

        #[cfg(feature = "defmt")]
        defmt::debug!("register bank initialized");
    }

    /// Overwrites the read/write and safe read/write regions with nominal
    /// values and applies the default PWM state.
    ///
    /// Reserved registers in those regions are zeroed, so repeated calls
    /// always produce the same bytes. Read-only telemetry and the
    /// write-enable gate are left alone, and nothing is marked changed.
    pub fn load_defaults(&self) {
        critical_section::with(|cs| {
            let view = self.view(cs);
            let d = &self.defaults;

            for addr in MIN_RW_REGISTER..=MAX_REGISTER {
                view.write_byte(addr, 0);
            }

            view.set_seek(d.seek);
            view.set_maximum_pwm(d.maximum_pwm);

            view.set_bus_address(d.bus_address);
            view.set_pid_pgain(d.pid_pgain);
            view.set_pid_dgain(d.pid_dgain);
            view.set_pid_igain(d.pid_igain);
            view.set_min_seek(d.min_seek);
            view.set_max_seek(d.max_seek);
            view.set_reverse_seek(d.reverse_seek as u8);

            view.set_pwm_enabled(d.pwm_enabled);
        });

        #[cfg(feature = "defmt")]
        defmt::debug!("register defaults loaded");
    }

    /// Reads one register.
    ///
    /// # Panics
    /// Panics if `addr` is past the last register.
    #[inline]
    pub fn read_byte(&self, addr: u8) -> u8 {
        self.table.load(addr)
    }

    /// Writes one register, bypassing the access policy.
    ///
    /// Bus-originated writes go through [`bus_write_byte`](Self::bus_write_byte).
    ///
    /// # Panics
    /// Panics if `addr` is past the last register.
    #[inline]
    pub fn write_byte(&self, addr: u8, value: u8) {
        self.table.store(addr, value)
    }

    /// Reads a big-endian word inside a critical section.
    ///
    /// # Panics
    /// Panics if either address is past the last register.
    pub fn read_word(&self, addr_hi: u8, addr_lo: u8) -> u16 {
        critical_section::with(|cs| self.view(cs).read_word(addr_hi, addr_lo))
    }

    /// Writes a big-endian word inside a critical section, bypassing the
    /// access policy.
    ///
    /// # Panics
    /// Panics if either address is past the last register.
    pub fn write_word(&self, addr_hi: u8, addr_lo: u8, value: u16) {
        critical_section::with(|cs| self.view(cs).write_word(addr_hi, addr_lo, value))
    }

    /// Bit view of the high flags register.
    pub fn flags_hi(&self) -> Flags {
        Flags::from_byte(self.read_byte(REG_FLAGS_HI))
    }

    /// Bit view of the low flags register, holding the gate and PWM bits.
    pub fn flags_lo(&self) -> Flags {
        Flags::from_byte(self.read_byte(REG_FLAGS_LO))
    }

    /// Current state of the write-enable gate.
    pub fn write_gate(&self) -> WriteGate {
        WriteGate::from_bit(self.flags_lo().write_enabled())
    }

    /// Returns true if bus writes to the safe read/write region take effect.
    pub fn is_write_enabled(&self) -> bool {
        self.write_gate().is_unlocked()
    }

    /// Opens the gate: bus writes to the safe read/write region take effect.
    pub fn enable_writes(&self) {
        critical_section::with(|cs| self.view(cs).set_write_gate(WriteGate::Unlocked));

        #[cfg(feature = "defmt")]
        defmt::debug!("safe register writes enabled");
    }

    /// Closes the gate: bus writes to the safe read/write region are dropped.
    pub fn disable_writes(&self) {
        critical_section::with(|cs| self.view(cs).set_write_gate(WriteGate::Locked));

        #[cfg(feature = "defmt")]
        defmt::debug!("safe register writes disabled");
    }

    /// Returns true if the PWM-enabled flag is set.
    pub fn pwm_enabled(&self) -> bool {
        self.flags_lo().pwm_enabled()
    }

    /// Sets the PWM-enabled flag.
    pub fn enable_pwm(&self) {
        critical_section::with(|cs| self.view(cs).set_pwm_enabled(true));
    }

    /// Clears the PWM-enabled flag.
    pub fn disable_pwm(&self) {
        critical_section::with(|cs| self.view(cs).set_pwm_enabled(false));
    }

    /// Runs `f` with exclusive access to the whole bank.
    pub fn with_view<R>(&self, f: impl FnOnce(&LockedView<'_>) -> R) -> R {
        critical_section::with(|cs| f(&self.view(cs)))
    }

    /// Borrows the bank under a critical section the caller already holds.
    pub fn view<'cs>(&'cs self, cs: CriticalSection<'cs>) -> LockedView<'cs> {
        LockedView::new(&self.table, cs)
    }

    /// Returns true if any bus write took effect since the last drain.
    pub fn any_changed(&self) -> bool {
        critical_section::with(|cs| self.table.any_changed(cs))
    }

    /// Returns and clears the set of registers changed by bus writes.
    pub fn take_changed(&self) -> ChangeSet {
        critical_section::with(|cs| self.table.take_changed(cs))
    }

    impl_register_fields!();
}

#[cfg(test)]
mod tests {
    use crate::registers::{
        Defaults, RegisterBank, WriteGate,
        map::*,
        test_support::{snapshot, test_bank},
    };

    #[test]
    fn init_zeroes_bank_and_stamps_identity() {
        let bank = RegisterBank::new();
        for addr in 0..=MAX_REGISTER {
            bank.write_byte(addr, 0xA5);
        }
        bank.enable_writes();
        bank.bus_write_byte(REG_SEEK_HI, 0x01).unwrap();

        bank.init();

        let bytes = snapshot(&bank);
        assert_eq!(&bytes[..4], &[0x01, 0x01, 0x00, 0x02]);
        assert!(bytes[4..].iter().all(|&b| b == 0));
        assert_eq!(bank.write_gate(), WriteGate::Locked);
        assert!(!bank.is_write_enabled());
        assert!(!bank.any_changed());
    }

    #[test]
    fn init_uses_configured_identity() {
        let defaults = Defaults::new().with_identity(0x07, 0x03).with_version(1, 4);
        let bank = RegisterBank::with_config(crate::registers::RegionPolicy {}, defaults);
        bank.init();

        assert_eq!(bank.device_type(), 0x07);
        assert_eq!(bank.device_subtype(), 0x03);
        assert_eq!(bank.version_major(), 1);
        assert_eq!(bank.version_minor(), 4);
        assert_eq!(bank.defaults(), &defaults);
    }

    #[test]
    fn load_defaults_sets_nominal_values() {
        let bank = test_bank();
        bank.load_defaults();

        assert_eq!(bank.seek(), 0x0200);
        assert_eq!(bank.maximum_pwm(), 0xFF);
        assert_eq!(bank.bus_address(), 0x10);
        assert_eq!(bank.pid_pgain(), 0x0600);
        assert_eq!(bank.pid_dgain(), 0x0C00);
        assert_eq!(bank.pid_igain(), 0x0000);
        assert_eq!(bank.min_seek(), 0x0060);
        assert_eq!(bank.max_seek(), 0x03A0);
        assert_eq!(bank.reverse_seek(), 0);
        assert!(bank.pwm_enabled());
        assert!(!bank.any_changed());
    }

    #[test]
    fn load_defaults_is_deterministic() {
        let clean = test_bank();
        clean.load_defaults();
        let expected = snapshot(&clean);

        // Scribble over everything load_defaults owns, through both paths
        let dirty = test_bank();
        dirty.enable_writes();
        dirty.bus_write(MIN_RW_REGISTER, &[0xEE; 48]).unwrap();
        dirty.disable_writes();
        for addr in MIN_RW_REGISTER..=MAX_REGISTER {
            dirty.write_byte(addr, addr);
        }
        dirty.disable_pwm();

        dirty.load_defaults();
        dirty.load_defaults();

        assert_eq!(snapshot(&dirty), expected);
    }

    #[test]
    fn load_defaults_keeps_gate_and_telemetry() {
        let bank = test_bank();
        bank.set_position(0x0321);
        bank.enable_writes();

        bank.load_defaults();

        assert!(bank.is_write_enabled());
        assert_eq!(bank.position(), 0x0321);
    }

    #[test]
    fn write_then_read_for_every_register() {
        let bank = test_bank();
        for addr in 0..=MAX_REGISTER {
            bank.write_byte(addr, addr.wrapping_mul(3));
            assert_eq!(bank.read_byte(addr), addr.wrapping_mul(3));
        }
    }

    #[test]
    fn word_round_trip_example() {
        let bank = test_bank();
        bank.write_word(0x08, 0x09, 0x1234);

        assert_eq!(bank.read_byte(0x08), 0x12);
        assert_eq!(bank.read_byte(0x09), 0x34);
        assert_eq!(bank.read_word(0x08, 0x09), 0x1234);
    }

    #[test]
    fn gate_cycles() {
        let bank = test_bank();
        assert_eq!(bank.write_gate(), WriteGate::Locked);

        for _ in 0..3 {
            bank.enable_writes();
            assert!(bank.is_write_enabled());
            assert!(bank.flags_lo().write_enabled());

            bank.disable_writes();
            assert!(!bank.is_write_enabled());
        }
    }

    #[test]
    fn gate_does_not_disturb_other_flag_bits() {
        let bank = test_bank();
        bank.with_view(|view| {
            view.modify_flags_lo(|flags| flags.set(6, true));
            view.modify_flags_hi(|flags| flags.set(0, true));
        });
        bank.enable_pwm();

        bank.enable_writes();
        bank.disable_writes();

        assert!(bank.pwm_enabled());
        assert!(bank.flags_lo().get(6));
        assert_eq!(bank.flags_hi().into_byte(), 0x01);
    }

    #[test]
    fn nested_sections_compose() {
        let bank = test_bank();

        let seen = bank.with_view(|view| {
            view.set_velocity(0x0102);
            // Word access from inside a view nests its own section
            bank.write_word(REG_POWER_HI, REG_POWER_LO, 0x0304);
            (bank.read_word(REG_VELOCITY_HI, REG_VELOCITY_LO), view.power())
        });

        assert_eq!(seen, (0x0102, 0x0304));
    }

    #[test]
    fn view_can_reuse_outer_section() {
        let bank = test_bank();
        critical_section::with(|cs| {
            let view = bank.view(cs);
            view.set_seek(0x0111);
            assert_eq!(view.seek(), 0x0111);
        });
        assert_eq!(bank.seek(), 0x0111);
    }

    #[test]
    fn view_drains_bus_changes() {
        let bank = test_bank();
        bank.bus_write(REG_SEEK_HI, &[0x01, 0x23]).unwrap();

        let changed = bank.with_view(|view| view.take_changed());
        assert!(changed.contains(REG_SEEK_HI));
        assert!(changed.contains(REG_SEEK_LO));
        assert_eq!(changed.len(), 2);
        assert!(!bank.any_changed());
    }

    #[test]
    fn view_token_opens_nested_views() {
        let bank = test_bank();
        bank.with_view(|view| {
            let inner = bank.view(view.critical_section());
            inner.set_power(0x0456);
            assert_eq!(view.power(), 0x0456);
        });
        assert_eq!(bank.power(), 0x0456);
    }

    #[test]
    #[should_panic]
    fn read_past_bank_panics() {
        test_bank().read_byte(0x40);
    }
}
