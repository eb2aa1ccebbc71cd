//! Test support utilities - only compiled in test builds.

use crate::registers::{
    bank::RegisterBank,
    defaults::Defaults,
    policy::{AccessPolicy, WriteGate},
};

/// Policy that drops every bus write
pub struct DenyAllPolicy;

impl AccessPolicy for DenyAllPolicy {
    fn can_write(&self, _addr: u8, _gate: WriteGate) -> bool {
        false
    }
}

/// Freshly initialized bank with the standard policy, defaults not loaded
pub fn test_bank() -> RegisterBank {
    let bank = RegisterBank::new();
    bank.init();
    bank
}

/// Freshly initialized bank that ignores every bus write
pub fn deny_all_bank() -> RegisterBank<DenyAllPolicy> {
    let bank = RegisterBank::with_config(DenyAllPolicy, Defaults::new());
    bank.init();
    bank
}

/// Copies the whole bank out in one critical section.
pub fn snapshot<AP: AccessPolicy>(bank: &RegisterBank<AP>) -> [u8; 64] {
    let mut bytes = [0u8; 64];
    bank.bus_read(0, &mut bytes).unwrap();
    bytes
}

/// Asserts that registers starting at `addr` match expected data.
pub fn assert_bytes<AP: AccessPolicy>(bank: &RegisterBank<AP>, addr: u8, expected: &[u8]) {
    for (i, &byte) in expected.iter().enumerate() {
        assert_eq!(
            bank.read_byte(addr + i as u8),
            byte,
            "register 0x{:02X}",
            addr as usize + i
        );
    }
}
