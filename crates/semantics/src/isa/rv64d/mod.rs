//! RISC-V Double-Precision Floating-Point Extension (D).
//!
//! Defines the encodings for double-precision (64-bit) floating-point
//! instructions. The major opcodes and funct3 codes are shared with the F
//! extension (see `rv64f`); only the funct7 tables differ.

/// Function code 7 definitions for double-precision operations.
pub mod funct7;
