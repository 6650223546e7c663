//! Arithmetic units.
//!
//! The computational leaves of the semantic functions:
//! 1. **MDU:** Integer multiply/divide with the RISC-V division conventions.
//! 2. **FPU:** Correctly-rounded IEEE 754 arithmetic over a softfloat backend.

/// Floating-point unit (softfloat adapter, NaN handling, rounding, flags).
pub mod fpu;

/// Integer multiply/divide unit.
pub mod mdu;
