//! Entry points for bus-originated transfers.
//!
//! These enforce the access policy on every byte. A write the policy
//! rejects is dropped without an error, so the bus master sees the same
//! acknowledge either way and must read back or check
//! [`RegisterBank::is_write_enabled`] to know whether it landed.

use crate::registers::{RegisterBank, RegisterError, policy::AccessPolicy, region::range_span};

impl<AP> RegisterBank<AP>
where
    AP: AccessPolicy,
{
    /// Applies a bus write of one register if the policy allows it.
    pub fn bus_write_byte(&self, addr: u8, value: u8) -> Result<(), RegisterError> {
        self.bus_write(addr, &[value])
    }

    /// Applies a sequential bus write starting at `addr`.
    ///
    /// Each byte is checked against the policy on its own, so a transfer
    /// crossing a region boundary may land partially. The whole transfer
    /// runs in one critical section: a word written by the bus master in a
    /// single transfer is never observed torn.
    ///
    /// # Errors
    /// * [`RegisterError::ZeroLength`] - if `data` is empty
    /// * [`RegisterError::OutOfBounds`] - if the transfer runs past the last
    ///   register; nothing is written
    pub fn bus_write(&self, addr: u8, data: &[u8]) -> Result<(), RegisterError> {
        let (start, _) = range_span(addr, data.len())?;

        critical_section::with(|cs| {
            let view = self.view(cs);
            let gate = view.write_gate();

            for (i, &value) in data.iter().enumerate() {
                let addr = (start + i) as u8;
                if self.access_policy.can_write(addr, gate) {
                    view.write_byte(addr, value);
                    self.table.mark_changed(cs, addr);
                } else {
                    #[cfg(feature = "defmt")]
                    defmt::trace!(
                        "dropped bus write: addr=0x{:02X} value=0x{:02X} gate={}",
                        addr,
                        value,
                        gate
                    );
                }
            }
        });

        Ok(())
    }

    /// Serves a sequential bus read starting at `addr`.
    ///
    /// Reads are never denied. The registers are copied in one critical
    /// section so multi-byte fields arrive consistent.
    ///
    /// # Errors
    /// * [`RegisterError::ZeroLength`] - if `out` is empty
    /// * [`RegisterError::OutOfBounds`] - if the transfer runs past the last register
    pub fn bus_read(&self, addr: u8, out: &mut [u8]) -> Result<(), RegisterError> {
        critical_section::with(|cs| self.view(cs).copy_to_slice(addr, out))
    }
}
