/// Addressing faults reported by bus transfers.
///
/// Policy denials are not errors: a write the policy rejects is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// Transfer runs past the last register.
    OutOfBounds,
    /// Transfer attempted with zero length.
    ZeroLength,
}

impl core::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegisterError::OutOfBounds => write!(f, "transfer runs past the last register"),
            RegisterError::ZeroLength => write!(f, "transfer attempted with zero length"),
        }
    }
}
