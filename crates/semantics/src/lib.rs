//! Executable instruction-set semantics for the RISC-V M, F, and D extensions.
//!
//! This crate implements the architectural behaviour of the integer
//! multiply/divide (M) and single/double-precision floating-point (F/D)
//! extensions as a family of pure semantic functions. Given the current
//! hart state, a raw 32-bit instruction word, and whether that word was
//! expanded from a compressed encoding, each function decides whether the
//! instruction belongs to its family and, if so, applies the mandated
//! state update: destination register, accrued floating-point flags,
//! program counter, or trap CSRs.
//!
//! The crate is organised as follows:
//! 1. **Common:** Bit manipulation, memory access types, and exception causes.
//! 2. **Hart:** The host-supplied machine-state interface (registers, CSRs, PC, memory, translation).
//! 3. **ISA:** Instruction field extraction and per-extension encoding tables.
//! 4. **Units:** The multiply/divide unit and the softfloat-backed floating-point unit.
//! 5. **Exec:** The per-family semantic functions and the finish helpers they share.
//!
//! The hart infrastructure itself (instruction fetch, full-ISA dispatch,
//! CSR files, MMU, trap delivery) is the host's concern; this crate
//! consumes it through the [`hart::Hart`] trait and produces nothing but
//! the state update. Callers chain the `exec_*` entry points until one
//! reports [`exec::Outcome::Retired`]; if every family reports
//! [`exec::Outcome::Illegal`], the instruction is not part of these
//! extensions and the host raises the illegal-instruction trap.

/// Common utilities: bit manipulation, access types, exception causes.
pub mod common;

/// Host-supplied hart interface (registers, CSRs, PC, memory, translation).
pub mod hart;

/// Instruction field extraction and per-extension encoding tables.
pub mod isa;

/// Arithmetic units: integer multiply/divide and floating-point.
pub mod units;

/// Per-family semantic functions and shared finish helpers.
pub mod exec;

pub use crate::exec::Outcome;
pub use crate::hart::Hart;
