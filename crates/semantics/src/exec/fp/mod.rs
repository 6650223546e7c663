//! F/D-extension semantic functions.
//!
//! Each family follows the same shape: decode the fields, compute the
//! discriminants that identify its encodings, decide legality (opcode
//! match, extension availability in `misa`, rounding-mode legality,
//! RV64-only restrictions), read the operands, compute through the FPU,
//! and retire through a finish helper. Loads and stores additionally walk
//! the translate-then-access state machine and retire through the trap
//! finish helper when an access faults.
//!
//! Single-precision operands are read through the NaN-unboxing rule: a
//! 64-bit register whose upper half is not all 1s reads as the canonical
//! NaN. Single-precision results are NaN-boxed on write-back.

use crate::hart::{misa_has, Hart, CSR_FRM, MISA_EXT_D, MISA_EXT_F};
use crate::units::fpu::nan_handling::unbox_f32;
use crate::units::fpu::rounding_modes::RoundingMode;

/// Arithmetic and fused multiply-add families.
pub mod arith;

/// Comparison family (FEQ/FLT/FLE).
pub mod compare;

/// Conversion family (the FCVT matrix).
pub mod convert;

/// Load and store families (FLW/FLD/FSW/FSD).
pub mod mem;

/// Min/max family (FMIN/FMAX).
pub mod minmax;

/// Move and classify families (FMV.*, FCLASS).
pub mod move_classify;

/// Sign-injection family (FSGNJ/FSGNJN/FSGNJX).
pub mod sign_inject;

pub use arith::{exec_fp_fused, exec_fp_op};
pub use compare::exec_fp_compare;
pub use convert::exec_fp_convert;
pub use mem::{exec_fp_load, exec_fp_store};
pub use minmax::exec_fp_min_max;
pub use move_classify::{exec_fp_classify, exec_fp_move};
pub use sign_inject::exec_fp_sign_inject;

/// Returns whether single-precision operations are available (F in `misa`).
#[inline]
pub(crate) fn sp_enabled<H: Hart>(hart: &H) -> bool {
    misa_has(hart, MISA_EXT_F)
}

/// Returns whether double-precision operations are available (F and D in
/// `misa`).
#[inline]
pub(crate) fn dp_enabled<H: Hart>(hart: &H) -> bool {
    misa_has(hart, MISA_EXT_F) && misa_has(hart, MISA_EXT_D)
}

/// Reads a single-precision operand from a floating-point register,
/// applying the NaN-unboxing rule.
#[inline]
pub(crate) fn read_sp<H: Hart>(hart: &H, idx: usize) -> u32 {
    unbox_f32(hart.read_fpr(idx))
}

/// Resolves the instruction's rounding-mode field against the `frm` CSR.
///
/// Returns `None` when the combination is illegal (§11.2: reserved `rm`
/// encoding, or the dynamic sentinel over a reserved `frm`).
#[inline]
pub(crate) fn resolve_rm<H: Hart>(hart: &H, rm_field: u32) -> Option<RoundingMode> {
    RoundingMode::resolve(rm_field, hart.read_csr(CSR_FRM))
}
