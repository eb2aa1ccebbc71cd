pub mod bank;
pub mod bus;
pub mod changes;
pub mod defaults;
pub mod error;
pub(crate) mod fields;
pub mod flags;
pub mod map;
pub mod policy;
pub mod region;
pub(crate) mod table;
pub mod view;

#[cfg(test)]
mod test_support;

pub use bank::RegisterBank;
pub use changes::ChangeSet;
pub use defaults::Defaults;
pub use error::RegisterError;
pub use flags::Flags;
pub use policy::{AccessPolicy, RegionPolicy, WriteGate};
pub use region::Region;
pub use view::LockedView;

pub mod prelude {
    pub use super::map::*;
    pub use super::{
        AccessPolicy, ChangeSet, Defaults, Flags, LockedView, Region, RegionPolicy, RegisterBank,
        RegisterError, WriteGate,
    };
}
