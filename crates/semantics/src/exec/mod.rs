//! Semantic function plumbing.
//!
//! This module holds what every instruction family shares:
//! 1. **Outcome:** The legality verdict each semantic function returns.
//! 2. **Finish Helpers:** The single write-back points that update a destination
//!    register, accrue `fflags`, advance the PC, or record a trap.
//!
//! The finish helpers are the only places the semantic functions mutate
//! architectural state, so the invariants (x0 stays zero, results are
//! truncated to XLEN, `fflags` only accrues, PC steps by exactly 2 or 4)
//! are enforced once here rather than per instruction.

use crate::hart::{Hart, CSR_FFLAGS, CSR_MCAUSE, CSR_MTVAL};
use crate::common::Exception;
use crate::units::fpu::exception_flags::FpFlags;
use crate::units::fpu::nan_handling::box_f32;

/// Integer multiply/divide semantics (M extension).
pub mod rv64m;

/// Floating-point semantics (F and D extensions).
pub mod fp;

/// Verdict of a semantic function on one instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The encoding belongs to this family and the architectural state
    /// update has been applied (including a recorded trap, for faulting
    /// loads and stores).
    Retired,

    /// The encoding does not belong to this family, or names a variant
    /// that is illegal in the current state (extension disabled in
    /// `misa`, reserved rounding mode, RV64-only operation on an RV32
    /// hart). The hart is untouched; the caller tries the next family or
    /// raises the illegal-instruction trap.
    Illegal,
}

/// Advances the PC past the current instruction.
///
/// The step is 2 when the word was expanded from a compressed encoding,
/// otherwise 4. The new PC is truncated to XLEN.
#[inline]
pub fn advance_pc<H: Hart>(hart: &mut H, is_compressed: bool) {
    let step = if is_compressed { 2 } else { 4 };
    let next = hart.pc().wrapping_add(step);
    hart.set_pc(hart.xlen().truncate(next));
}

/// Writes an integer destination register and advances the PC.
///
/// The value is truncated to XLEN before the write; writes to x0 are
/// discarded by the hart.
pub fn finish_gpr<H: Hart>(hart: &mut H, rd: usize, val: u64, is_compressed: bool) {
    let val = hart.xlen().truncate(val);
    hart.write_gpr(rd, val);
    advance_pc(hart, is_compressed);
}

/// Writes an integer destination register, accrues `fflags`, and
/// advances the PC.
///
/// Used by the floating-point operations with integer destinations
/// (comparisons and float-to-integer conversions).
pub fn finish_gpr_fflags<H: Hart>(
    hart: &mut H,
    rd: usize,
    val: u64,
    flags: FpFlags,
    is_compressed: bool,
) {
    accrue_fflags(hart, flags);
    finish_gpr(hart, rd, val, is_compressed);
}

/// Writes a floating-point destination register and advances the PC.
///
/// Single-precision results (`box_sp`) are NaN-boxed into the 64-bit
/// register; double-precision results are written as-is.
pub fn finish_fpr<H: Hart>(hart: &mut H, rd: usize, val: u64, box_sp: bool, is_compressed: bool) {
    let val = if box_sp { box_f32(val as u32) } else { val };
    hart.write_fpr(rd, val);
    advance_pc(hart, is_compressed);
}

/// Writes a floating-point destination register, accrues `fflags`, and
/// advances the PC.
pub fn finish_fpr_fflags<H: Hart>(
    hart: &mut H,
    rd: usize,
    val: u64,
    box_sp: bool,
    flags: FpFlags,
    is_compressed: bool,
) {
    accrue_fflags(hart, flags);
    finish_fpr(hart, rd, val, box_sp, is_compressed);
}

/// ORs raised exception flags into the `fflags` CSR.
///
/// Bits are only ever set here, never cleared; clearing `fflags` is a
/// CSR write the host performs on software's behalf.
pub fn accrue_fflags<H: Hart>(hart: &mut H, flags: FpFlags) {
    if !flags.is_empty() {
        let fflags = hart.read_csr(CSR_FFLAGS);
        hart.write_csr(CSR_FFLAGS, fflags | flags.bits() as u64);
    }
}

/// Records a trap for a faulting memory access.
///
/// Writes the cause into `mcause` and the faulting effective address into
/// `mtval`. The PC is deliberately left alone: redirecting to the trap
/// vector (and saving `mepc`) is the host trap layer's responsibility.
pub fn finish_trap<H: Hart>(hart: &mut H, cause: Exception, tval: u64) {
    hart.write_csr(CSR_MCAUSE, cause.code());
    hart.write_csr(CSR_MTVAL, hart.xlen().truncate(tval));
}
