//! Walks the gate simulator through the button presses of a typical lesson
//! and prints what the display would draw after each one.
//!
//! Run with `RUST_LOG=qcompare=debug` to see the engine's trace.

use qcompare::{Gate, GateSimulator, QcError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QcError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("--- qcompare: Gate Simulator Walkthrough ---");

    let mut sim = GateSimulator::new()?;
    println!("\n{}", sim.snapshot());

    let presses = [Gate::Cnot, Gate::PauliX, Gate::Cnot, Gate::Cnot, Gate::Hadamard, Gate::Cnot];
    for gate in presses {
        let snap = sim.apply(gate)?;
        println!("Pressed [{}]\n{}", gate, snap);
    }

    println!("Reset\n{}", sim.reset()?);
    Ok(())
}
