//! Floating-point min/max semantics.
//!
//! FMIN and FMAX select an operand rather than compute a new value, so
//! the result preserves the chosen operand's bit pattern except where the
//! NaN ladder substitutes the canonical NaN. Signalling NaN operands
//! raise NV; quiet NaNs select silently.

use super::{dp_enabled, read_sp, sp_enabled};
use crate::exec::{finish_fpr_fflags, Outcome};
use crate::hart::Hart;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv64d::funct7 as d;
use crate::isa::rv64f::funct7 as f;
use crate::isa::rv64f::{funct3, opcodes};
use crate::units::fpu;

/// Executes the min/max group: FMIN, FMAX, in single or double
/// precision.
///
/// The min/max funct7 group has exactly two funct3 points; the rest are
/// reserved. No rounding mode applies.
///
/// # Returns
///
/// [`Outcome::Retired`] if the encoding belongs to this family,
/// [`Outcome::Illegal`] (hart untouched) otherwise.
pub fn exec_fp_min_max<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    if inst.opcode() != opcodes::OP_FP {
        return Outcome::Illegal;
    }
    let dp = match inst.funct7() {
        f::FMIN_MAX => false,
        d::FMIN_MAX_D => true,
        _ => return Outcome::Illegal,
    };
    let is_max = match inst.funct3() {
        funct3::FMIN => false,
        funct3::FMAX => true,
        _ => return Outcome::Illegal,
    };
    if dp && !dp_enabled(hart) || !dp && !sp_enabled(hart) {
        return Outcome::Illegal;
    }

    let (val, flags) = if dp {
        let a = hart.read_fpr(inst.rs1());
        let b = hart.read_fpr(inst.rs2());
        fpu::min_max_f64(is_max, a, b)
    } else {
        let a = read_sp(hart, inst.rs1());
        let b = read_sp(hart, inst.rs2());
        let (bits, flags) = fpu::min_max_f32(is_max, a, b);
        (bits as u64, flags)
    };
    finish_fpr_fflags(hart, inst.rd(), val, !dp, flags, is_compressed);
    Outcome::Retired
}
