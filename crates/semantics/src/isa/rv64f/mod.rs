//! RISC-V Single-Precision Floating-Point Extension (F).
//!
//! Defines the encodings for single-precision (32-bit) floating-point
//! instructions, plus the major opcodes shared by the F and D extensions.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes for floating-point load, store, arithmetic, and fused ops.
//! - `funct3`: Function codes for comparison types, sign injection modes, and moves.
//! - `funct7`: Function codes for specific single-precision operations.

/// Function code 3 definitions shared by the F and D extensions.
pub mod funct3;

/// Function code 7 definitions for single-precision operations.
pub mod funct7;

/// Floating-point major opcodes (shared by F and D).
pub mod opcodes;
