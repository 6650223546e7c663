//! Floating-point comparison semantics.
//!
//! FEQ, FLT, and FLE write 0 or 1 into an integer register. Any NaN
//! operand makes the result 0. FEQ is a quiet comparison (NV only for
//! signalling NaNs); FLT and FLE are signalling (NV for any NaN).

use super::{dp_enabled, read_sp, sp_enabled};
use crate::exec::{finish_gpr_fflags, Outcome};
use crate::hart::Hart;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv64d::funct7 as d;
use crate::isa::rv64f::funct7 as f;
use crate::isa::rv64f::{funct3, opcodes};
use crate::units::fpu::{self, FpCmp};

/// Executes the comparison group: FEQ, FLT, FLE, in single or double
/// precision.
///
/// # Returns
///
/// [`Outcome::Retired`] if the encoding belongs to this family,
/// [`Outcome::Illegal`] (hart untouched) otherwise.
pub fn exec_fp_compare<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    if inst.opcode() != opcodes::OP_FP {
        return Outcome::Illegal;
    }
    let dp = match inst.funct7() {
        f::FCMP => false,
        d::FCMP_D => true,
        _ => return Outcome::Illegal,
    };
    let cmp = match inst.funct3() {
        funct3::FEQ => FpCmp::Eq,
        funct3::FLT => FpCmp::Lt,
        funct3::FLE => FpCmp::Le,
        _ => return Outcome::Illegal,
    };
    if dp && !dp_enabled(hart) || !dp && !sp_enabled(hart) {
        return Outcome::Illegal;
    }

    let (result, flags) = if dp {
        let a = hart.read_fpr(inst.rs1());
        let b = hart.read_fpr(inst.rs2());
        fpu::compare_f64(cmp, a, b)
    } else {
        let a = read_sp(hart, inst.rs1());
        let b = read_sp(hart, inst.rs2());
        fpu::compare_f32(cmp, a, b)
    };
    finish_gpr_fflags(hart, inst.rd(), result as u64, flags, is_compressed);
    Outcome::Retired
}
