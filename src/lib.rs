//! A `no_std`, no-alloc shared register bank for bus-controlled servo firmware.
//!
//! The bank is the only state shared between the bus interrupt handler,
//! which serves register reads and writes for the bus master, and the
//! periodic control loop, which publishes telemetry and consumes
//! configuration.
//!
//! # Features
//!
//! - **Fixed register map** - 64 byte-wide registers, words stored high byte first
//! - **Region policy** - read-only, read-write and gated safe read-write regions
//! - **Tear-free words** - 16-bit accesses run inside a critical section
//! - **Change tracking** - the control loop can drain which registers the bus wrote
//! - **Zero `unsafe`** - single byte slots are atomics, everything wider is locked
//!
//! # Address space
//!
//! ```text
//! 0x00 ┌──────────────────────┐
//!      │ read-only            │  status, telemetry   bus writes ignored
//! 0x10 ├──────────────────────┤
//!      │ read-write           │  seek, max PWM       bus writes applied
//! 0x20 ├──────────────────────┤
//!      │ safe read-write      │  address, gains,     bus writes applied
//!      │                      │  seek limits         only while unlocked
//! 0x3F └──────────────────────┘
//! ```
//!
//! The write-enable gate is bit 1 of the low flags register (`0x05`). It
//! starts locked after [`init`](registers::RegisterBank::init) and only
//! moves through [`enable_writes`](registers::RegisterBank::enable_writes)
//! and [`disable_writes`](registers::RegisterBank::disable_writes).
//!
//! # Example
//!
//! ```rust
//! use servo_registers::prelude::*;
//!
//! static REGISTERS: RegisterBank = RegisterBank::new();
//!
//! REGISTERS.init();
//! REGISTERS.load_defaults();
//!
//! // Control loop: publish a consistent telemetry frame.
//! REGISTERS.with_view(|view| {
//!     view.set_position(0x0200);
//!     view.set_velocity(0x0004);
//!     view.set_power(0x0030);
//! });
//!
//! // Bus handler: the master writes a new seek target.
//! REGISTERS.bus_write(REG_SEEK_HI, &[0x02, 0x40]).unwrap();
//!
//! // Safe registers stay untouched until writes are enabled.
//! REGISTERS.bus_write_byte(REG_BUS_ADDRESS, 0x22).unwrap();
//! assert_eq!(REGISTERS.bus_address(), 0x10);
//!
//! // Control loop: pick up the reconfiguration.
//! let changed = REGISTERS.take_changed();
//! assert!(changed.overlaps(REG_SEEK_HI, 2).unwrap());
//! assert_eq!(REGISTERS.seek(), 0x0240);
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod registers;

pub mod prelude {
    pub use crate::registers::prelude::*;
}
