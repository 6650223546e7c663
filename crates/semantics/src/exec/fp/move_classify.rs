//! Floating-point move and classify semantics.
//!
//! The classify/move funct7 groups hold three kinds of instruction:
//!
//! * **FMV.X.W / FMV.X.D**: raw bit move from a floating-point register
//!   to an integer register. FMV.X.W sign-extends the low 32 bits; no
//!   unboxing check is applied, the bits move as they are.
//! * **FMV.W.X / FMV.D.X**: raw bit move the other way. FMV.W.X NaN-boxes
//!   the low 32 bits of the source.
//! * **FCLASS**: writes the ten-bit one-hot class mask of the operand.
//!
//! None of these raise exception flags. The 64-bit moves exist only on
//! RV64.

use super::{dp_enabled, read_sp, sp_enabled};
use crate::common::bits::sext32;
use crate::exec::{finish_fpr, finish_gpr, Outcome};
use crate::hart::{Hart, Xlen};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv64d::funct7 as d;
use crate::isa::rv64f::funct7 as f;
use crate::isa::rv64f::{funct3, opcodes};
use crate::units::fpu::classify::{classify_f32, classify_f64};

/// Executes the move group: FMV.X.W, FMV.W.X, FMV.X.D, FMV.D.X.
///
/// All four require `rs2 == 0` and the move-to-integer direction shares
/// its funct7 with FCLASS, distinguished by funct3.
///
/// # Returns
///
/// [`Outcome::Retired`] if the encoding belongs to this family,
/// [`Outcome::Illegal`] (hart untouched) otherwise.
pub fn exec_fp_move<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    if inst.opcode() != opcodes::OP_FP || inst.rs2() != 0 {
        return Outcome::Illegal;
    }
    match (inst.funct7(), inst.funct3()) {
        (f::FCLASS_FMV_X, funct3::FMV) => {
            if !sp_enabled(hart) {
                return Outcome::Illegal;
            }
            let val = sext32(hart.read_fpr(inst.rs1()) as u32);
            finish_gpr(hart, inst.rd(), val, is_compressed);
            Outcome::Retired
        }
        (f::FMV_W_X, funct3::FMV) => {
            if !sp_enabled(hart) {
                return Outcome::Illegal;
            }
            let val = hart.read_gpr(inst.rs1()) as u32 as u64;
            finish_fpr(hart, inst.rd(), val, true, is_compressed);
            Outcome::Retired
        }
        (d::FCLASS_FMV_X_D, funct3::FMV) => {
            if hart.xlen() != Xlen::Rv64 || !dp_enabled(hart) {
                return Outcome::Illegal;
            }
            let val = hart.read_fpr(inst.rs1());
            finish_gpr(hart, inst.rd(), val, is_compressed);
            Outcome::Retired
        }
        (d::FMV_D_X, funct3::FMV) => {
            if hart.xlen() != Xlen::Rv64 || !dp_enabled(hart) {
                return Outcome::Illegal;
            }
            let val = hart.read_gpr(inst.rs1());
            finish_fpr(hart, inst.rd(), val, false, is_compressed);
            Outcome::Retired
        }
        _ => Outcome::Illegal,
    }
}

/// Executes the classify group: FCLASS.S, FCLASS.D.
///
/// The single-precision variant classifies the unboxed operand, so a
/// malformed register classifies as a quiet NaN.
///
/// Same contract as [`exec_fp_move`].
pub fn exec_fp_classify<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    if inst.opcode() != opcodes::OP_FP || inst.rs2() != 0 || inst.funct3() != funct3::FCLASS {
        return Outcome::Illegal;
    }
    let val = match inst.funct7() {
        f::FCLASS_FMV_X => {
            if !sp_enabled(hart) {
                return Outcome::Illegal;
            }
            classify_f32(read_sp(hart, inst.rs1()))
        }
        d::FCLASS_FMV_X_D => {
            if !dp_enabled(hart) {
                return Outcome::Illegal;
            }
            classify_f64(hart.read_fpr(inst.rs1()))
        }
        _ => return Outcome::Illegal,
    };
    finish_gpr(hart, inst.rd(), val, is_compressed);
    Outcome::Retired
}
