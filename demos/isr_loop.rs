//! ISR / control loop example: a bus master reconfiguring a running servo
//!
//! This example demonstrates:
//! - A `static` register bank shared between contexts
//! - A simulated bus interrupt applying register writes through the policy
//! - A control loop publishing telemetry frames and draining bus changes
//! - The write-enable gate protecting the safe registers

use servo_registers::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

static REGISTERS: RegisterBank = RegisterBank::new();

// Simulate the bus peripheral raising its interrupt
static BUS_PENDING: AtomicBool = AtomicBool::new(false);
static BUS_STEP: AtomicUsize = AtomicUsize::new(0);

fn main() {
    println!("=== ISR / Control Loop Example ===\n");

    // Boot: happens before any interrupt source is enabled
    REGISTERS.init();
    REGISTERS.load_defaults();
    println!(
        "Boot: device {:02X}.{:02X} v{}.{} seek=0x{:04X} gate={:?}\n",
        REGISTERS.device_type(),
        REGISTERS.device_subtype(),
        REGISTERS.version_major(),
        REGISTERS.version_minor(),
        REGISTERS.seek(),
        REGISTERS.write_gate(),
    );

    let isr_thread = thread::spawn(|| {
        println!("Bus ISR simulator: Started");

        for _ in 0..40 {
            if BUS_PENDING.swap(false, Ordering::AcqRel) {
                handle_bus_interrupt(BUS_STEP.fetch_add(1, Ordering::AcqRel));
            }
            thread::sleep(Duration::from_millis(25));
        }

        println!("Bus ISR simulator: Stopped");
    });

    let mut position = REGISTERS.seek();

    for cycle in 0..5 {
        // Control loop: move one step toward the seek target
        let seek = REGISTERS.seek();
        let step = seek.abs_diff(position).min(0x40);
        position = if seek > position {
            position + step
        } else {
            position - step
        };

        REGISTERS.with_view(|view| {
            view.set_position(position);
            view.set_velocity(step);
            view.set_timer(cycle);
        });
        println!("Control loop: cycle {cycle} position=0x{position:04X}");

        let changed = REGISTERS.take_changed();
        if !changed.is_empty() {
            println!("  Bus changed registers: {changed:02X?}");
            if changed.overlaps(REG_PID_PGAIN_HI, 6).unwrap() {
                println!("  Reloading PID gains: P=0x{:04X}", REGISTERS.pid_pgain());
            }
        }

        BUS_PENDING.store(true, Ordering::Release);
        thread::sleep(Duration::from_millis(200));
    }

    isr_thread.join().unwrap();

    println!("\nControl loop: Complete");
}

// Simulates the bus interrupt handler decoding one master transaction
fn handle_bus_interrupt(step: usize) {
    println!("\n>>> Bus ISR: transaction {step}");

    match step {
        0 => {
            // New seek target, always writable
            REGISTERS.bus_write(REG_SEEK_HI, &[0x01, 0x80]).unwrap();
            println!("    Seek -> 0x0180");
        }
        1 => {
            // Gain change while locked is dropped silently
            REGISTERS.bus_write(REG_PID_PGAIN_HI, &[0x08, 0x00]).unwrap();
            println!("    P gain write while locked, P=0x{:04X}", REGISTERS.pid_pgain());
        }
        2 => {
            // Master sends the write-enable command, then retries
            REGISTERS.enable_writes();
            REGISTERS.bus_write(REG_PID_PGAIN_HI, &[0x08, 0x00]).unwrap();
            REGISTERS.disable_writes();
            println!("    P gain write while unlocked, P=0x{:04X}", REGISTERS.pid_pgain());
        }
        _ => {
            let mut frame = [0u8; 6];
            REGISTERS.bus_read(REG_POSITION_HI, &mut frame).unwrap();
            println!("    Telemetry frame: {frame:02X?}");
        }
    }

    println!("<<< Bus ISR: Complete\n");
}
