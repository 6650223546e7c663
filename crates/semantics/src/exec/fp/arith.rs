//! Floating-point arithmetic semantics.
//!
//! Two families: the two-operand arithmetic group (FADD/FSUB/FMUL/FDIV
//! plus FSQRT) under the FP major opcode, and the three-operand fused
//! multiply-add group (FMADD/FMSUB/FNMSUB/FNMADD) under its four
//! dedicated opcodes. The fused group performs a single rounding.

use super::{dp_enabled, read_sp, resolve_rm, sp_enabled};
use crate::exec::{finish_fpr_fflags, Outcome};
use crate::hart::Hart;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv64d::funct7 as d;
use crate::isa::rv64f::funct7 as f;
use crate::isa::rv64f::opcodes;
use crate::units::fpu::{self, FpOp};

/// Executes the arithmetic group: FADD, FSUB, FMUL, FDIV, FSQRT, in
/// single or double precision.
///
/// # Arguments
///
/// * `hart` - The hart whose state the instruction transforms.
/// * `inst` - The raw 32-bit instruction word.
/// * `is_compressed` - Whether the word came from a compressed encoding.
///
/// # Returns
///
/// [`Outcome::Retired`] if the encoding belongs to this family,
/// [`Outcome::Illegal`] (hart untouched) otherwise.
pub fn exec_fp_op<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    if inst.opcode() != opcodes::OP_FP {
        return Outcome::Illegal;
    }
    let (op, dp) = match inst.funct7() {
        f::FADD => (FpOp::Add, false),
        f::FSUB => (FpOp::Sub, false),
        f::FMUL => (FpOp::Mul, false),
        f::FDIV => (FpOp::Div, false),
        f::FSQRT => (FpOp::Sqrt, false),
        d::FADD_D => (FpOp::Add, true),
        d::FSUB_D => (FpOp::Sub, true),
        d::FMUL_D => (FpOp::Mul, true),
        d::FDIV_D => (FpOp::Div, true),
        d::FSQRT_D => (FpOp::Sqrt, true),
        _ => return Outcome::Illegal,
    };
    // FSQRT encodes a single source; its rs2 field is fixed at zero.
    if op == FpOp::Sqrt && inst.rs2() != 0 {
        return Outcome::Illegal;
    }
    if dp && !dp_enabled(hart) || !dp && !sp_enabled(hart) {
        return Outcome::Illegal;
    }
    let rm = match resolve_rm(hart, inst.rm()) {
        Some(rm) => rm,
        None => return Outcome::Illegal,
    };

    let (val, flags) = if dp {
        let a = hart.read_fpr(inst.rs1());
        let b = hart.read_fpr(inst.rs2());
        fpu::execute_f64(op, a, b, 0, rm)
    } else {
        let a = read_sp(hart, inst.rs1());
        let b = read_sp(hart, inst.rs2());
        let (bits, flags) = fpu::execute_f32(op, a, b, 0, rm);
        (bits as u64, flags)
    };
    finish_fpr_fflags(hart, inst.rd(), val, !dp, flags, is_compressed);
    Outcome::Retired
}

/// Executes the fused multiply-add group: FMADD, FMSUB, FNMSUB, FNMADD,
/// in single or double precision.
///
/// These use the R4 layout: rs3 lives in the top five bits and the
/// two-bit format field distinguishes single (00) from double (01).
/// The product and addend are combined with one rounding.
///
/// Same contract as [`exec_fp_op`].
pub fn exec_fp_fused<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    let op = match inst.opcode() {
        opcodes::OP_FMADD => FpOp::MulAdd,
        opcodes::OP_FMSUB => FpOp::MulSub,
        opcodes::OP_FNMSUB => FpOp::NegMulSub,
        opcodes::OP_FNMADD => FpOp::NegMulAdd,
        _ => return Outcome::Illegal,
    };
    let dp = match inst.funct2() {
        0b00 => false,
        0b01 => true,
        _ => return Outcome::Illegal,
    };
    if dp && !dp_enabled(hart) || !dp && !sp_enabled(hart) {
        return Outcome::Illegal;
    }
    let rm = match resolve_rm(hart, inst.rm()) {
        Some(rm) => rm,
        None => return Outcome::Illegal,
    };

    let (val, flags) = if dp {
        let a = hart.read_fpr(inst.rs1());
        let b = hart.read_fpr(inst.rs2());
        let c = hart.read_fpr(inst.rs3());
        fpu::execute_f64(op, a, b, c, rm)
    } else {
        let a = read_sp(hart, inst.rs1());
        let b = read_sp(hart, inst.rs2());
        let c = read_sp(hart, inst.rs3());
        let (bits, flags) = fpu::execute_f32(op, a, b, c, rm);
        (bits as u64, flags)
    };
    finish_fpr_fflags(hart, inst.rd(), val, !dp, flags, is_compressed);
    Outcome::Retired
}
