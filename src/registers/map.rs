//! Register addresses and flag bit positions.
//!
//! Words are stored big-endian: the `_HI` byte lives at the lower address.

/// Number of byte-wide registers in the bank.
pub const REGISTER_COUNT: usize = 64;

// Read-only status registers. Bus writes have no effect.

pub const REG_DEVICE_TYPE: u8 = 0x00;
pub const REG_DEVICE_SUBTYPE: u8 = 0x01;
pub const REG_VERSION_MAJOR: u8 = 0x02;
pub const REG_VERSION_MINOR: u8 = 0x03;
pub const REG_FLAGS_HI: u8 = 0x04;
pub const REG_FLAGS_LO: u8 = 0x05;
pub const REG_TIMER_HI: u8 = 0x06;
pub const REG_TIMER_LO: u8 = 0x07;

pub const REG_POSITION_HI: u8 = 0x08;
pub const REG_POSITION_LO: u8 = 0x09;
pub const REG_VELOCITY_HI: u8 = 0x0A;
pub const REG_VELOCITY_LO: u8 = 0x0B;
pub const REG_POWER_HI: u8 = 0x0C;
pub const REG_POWER_LO: u8 = 0x0D;
pub const REG_PWM_CW: u8 = 0x0E;
pub const REG_PWM_CCW: u8 = 0x0F;

// Read/write control registers. 0x13..=0x1F are reserved.

pub const REG_SEEK_HI: u8 = 0x10;
pub const REG_SEEK_LO: u8 = 0x11;
pub const REG_MAXIMUM_PWM: u8 = 0x12;

// Safe read/write registers, writable only while the write-enable gate is
// open. 0x21, 0x2D..=0x3F are reserved.

pub const REG_BUS_ADDRESS: u8 = 0x20;
pub const REG_PID_PGAIN_HI: u8 = 0x22;
pub const REG_PID_PGAIN_LO: u8 = 0x23;
pub const REG_PID_DGAIN_HI: u8 = 0x24;
pub const REG_PID_DGAIN_LO: u8 = 0x25;
pub const REG_PID_IGAIN_HI: u8 = 0x26;
pub const REG_PID_IGAIN_LO: u8 = 0x27;

pub const REG_MIN_SEEK_HI: u8 = 0x28;
pub const REG_MIN_SEEK_LO: u8 = 0x29;
pub const REG_MAX_SEEK_HI: u8 = 0x2A;
pub const REG_MAX_SEEK_LO: u8 = 0x2B;
pub const REG_REVERSE_SEEK: u8 = 0x2C;

pub const MIN_RO_REGISTER: u8 = 0x00;
pub const MAX_RO_REGISTER: u8 = 0x0F;
pub const MIN_RW_REGISTER: u8 = 0x10;
pub const MAX_RW_REGISTER: u8 = 0x1F;
pub const MIN_SW_REGISTER: u8 = 0x20;
pub const MAX_SW_REGISTER: u8 = 0x3F;
pub const MAX_REGISTER: u8 = MAX_SW_REGISTER;

/// Bit position of the PWM-enabled flag in [`REG_FLAGS_LO`].
pub const FLAGS_LO_PWM_ENABLED: usize = 0;
/// Bit position of the write-enable gate in [`REG_FLAGS_LO`].
pub const FLAGS_LO_WRITE_ENABLED: usize = 1;
