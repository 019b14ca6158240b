//! rvv-emu library
//!
//! Instruction-word utilities for a RISC-V vector emulator.

pub mod bits;
pub mod collections;
pub mod config;
pub mod isa;
