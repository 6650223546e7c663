//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains encoding tables and field-extraction logic for the extensions
//! this crate implements, organised by RISC-V extension.
//!
//! # Extensions
//!
//! * `rv64m`: Standard Extension for Integer Multiplication and Division.
//! * `rv64f`: Standard Extension for Single-Precision Floating-Point.
//! * `rv64d`: Standard Extension for Double-Precision Floating-Point.

/// Instruction disassembly for the M/F/D inventory.
pub mod disasm;

/// Instruction field extraction for the R/I/S/R4 layouts.
pub mod instruction;

/// Double-precision floating-point extension encodings.
pub mod rv64d;

/// Single-precision floating-point extension encodings (plus the shared
/// F/D opcodes).
pub mod rv64f;

/// Integer multiply/divide extension encodings.
pub mod rv64m;
