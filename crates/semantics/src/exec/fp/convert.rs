//! Floating-point conversion semantics (the FCVT matrix).
//!
//! Six funct7 groups cover the conversions, with the rs2 field acting as
//! a selector inside each group:
//!
//! * float -> integer and integer -> float, per source/destination width:
//!   rs2 = 0 signed 32-bit, 1 unsigned 32-bit, 2 signed 64-bit,
//!   3 unsigned 64-bit. The 64-bit integer variants exist only on RV64.
//! * format conversion: the convert-to-single group with rs2 = 1 is
//!   FCVT.S.D, the convert-to-double group with rs2 = 0 is FCVT.D.S.
//!
//! Word-sized integer results are sign-extended to XLEN, including the
//! unsigned ones. Out-of-range and NaN inputs saturate with NV raised;
//! that behaviour lives in the FPU adapter.

use super::{dp_enabled, read_sp, resolve_rm, sp_enabled};
use crate::exec::{finish_fpr_fflags, finish_gpr_fflags, Outcome};
use crate::hart::{Hart, Xlen};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv64d::funct7 as d;
use crate::isa::rv64f::funct7 as f;
use crate::isa::rv64f::opcodes;
use crate::units::fpu;

/// Integer kind selected by the rs2 field of a conversion.
#[derive(Clone, Copy, PartialEq, Eq)]
enum IntKind {
    Signed32,
    Unsigned32,
    Signed64,
    Unsigned64,
}

impl IntKind {
    /// Decodes the rs2 selector. The 64-bit kinds are RV64-only.
    fn decode(rs2: usize, xlen: Xlen) -> Option<Self> {
        match rs2 {
            0 => Some(Self::Signed32),
            1 => Some(Self::Unsigned32),
            2 if xlen == Xlen::Rv64 => Some(Self::Signed64),
            3 if xlen == Xlen::Rv64 => Some(Self::Unsigned64),
            _ => None,
        }
    }
}

/// Executes the conversion family: every FCVT encoding.
///
/// # Returns
///
/// [`Outcome::Retired`] if the encoding belongs to this family,
/// [`Outcome::Illegal`] (hart untouched) otherwise.
pub fn exec_fp_convert<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    if inst.opcode() != opcodes::OP_FP {
        return Outcome::Illegal;
    }
    match inst.funct7() {
        f::FCVT_INT_S => from_float_to_int(hart, inst, false, is_compressed),
        d::FCVT_INT_D => from_float_to_int(hart, inst, true, is_compressed),
        f::FCVT_S_INT => from_int_to_float(hart, inst, false, is_compressed),
        d::FCVT_D_INT => from_int_to_float(hart, inst, true, is_compressed),
        f::FCVT_S_FMT => narrow_to_single(hart, inst, is_compressed),
        d::FCVT_D_FMT => widen_to_double(hart, inst, is_compressed),
        _ => Outcome::Illegal,
    }
}

/// FCVT.{W,WU,L,LU}.{S,D}: float to integer, result in a GPR.
fn from_float_to_int<H: Hart>(hart: &mut H, inst: u32, dp: bool, is_compressed: bool) -> Outcome {
    let kind = match IntKind::decode(inst.rs2(), hart.xlen()) {
        Some(kind) => kind,
        None => return Outcome::Illegal,
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
        match kind {
            IntKind::Signed32 => fpu::f64_to_i32(a, rm),
            IntKind::Unsigned32 => fpu::f64_to_u32(a, rm),
            IntKind::Signed64 => fpu::f64_to_i64(a, rm),
            IntKind::Unsigned64 => fpu::f64_to_u64(a, rm),
        }
    } else {
        let a = read_sp(hart, inst.rs1());
        match kind {
            IntKind::Signed32 => fpu::f32_to_i32(a, rm),
            IntKind::Unsigned32 => fpu::f32_to_u32(a, rm),
            IntKind::Signed64 => fpu::f32_to_i64(a, rm),
            IntKind::Unsigned64 => fpu::f32_to_u64(a, rm),
        }
    };
    finish_gpr_fflags(hart, inst.rd(), val, flags, is_compressed);
    Outcome::Retired
}

/// FCVT.{S,D}.{W,WU,L,LU}: integer to float, result in an FPR.
fn from_int_to_float<H: Hart>(hart: &mut H, inst: u32, dp: bool, is_compressed: bool) -> Outcome {
    let kind = match IntKind::decode(inst.rs2(), hart.xlen()) {
        Some(kind) => kind,
        None => return Outcome::Illegal,
    };
    if dp && !dp_enabled(hart) || !dp && !sp_enabled(hart) {
        return Outcome::Illegal;
    }
    let rm = match resolve_rm(hart, inst.rm()) {
        Some(rm) => rm,
        None => return Outcome::Illegal,
    };

    let value = hart.read_gpr(inst.rs1());
    let (val, flags) = if dp {
        match kind {
            IntKind::Signed32 => fpu::i32_to_f64(value, rm),
            IntKind::Unsigned32 => fpu::u32_to_f64(value, rm),
            IntKind::Signed64 => fpu::i64_to_f64(value, rm),
            IntKind::Unsigned64 => fpu::u64_to_f64(value, rm),
        }
    } else {
        let (bits, flags) = match kind {
            IntKind::Signed32 => fpu::i32_to_f32(value, rm),
            IntKind::Unsigned32 => fpu::u32_to_f32(value, rm),
            IntKind::Signed64 => fpu::i64_to_f32(value, rm),
            IntKind::Unsigned64 => fpu::u64_to_f32(value, rm),
        };
        (bits as u64, flags)
    };
    finish_fpr_fflags(hart, inst.rd(), val, !dp, flags, is_compressed);
    Outcome::Retired
}

/// FCVT.S.D: double to single. The convert-to-single group's only legal
/// source selector is rs2 = 1 (double).
fn narrow_to_single<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    if inst.rs2() != 1 || !dp_enabled(hart) {
        return Outcome::Illegal;
    }
    let rm = match resolve_rm(hart, inst.rm()) {
        Some(rm) => rm,
        None => return Outcome::Illegal,
    };

    let a = hart.read_fpr(inst.rs1());
    let (bits, flags) = fpu::f64_to_f32(a, rm);
    finish_fpr_fflags(hart, inst.rd(), bits as u64, true, flags, is_compressed);
    Outcome::Retired
}

/// FCVT.D.S: single to double. The convert-to-double group's only legal
/// source selector is rs2 = 0 (single).
fn widen_to_double<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    if inst.rs2() != 0 || !dp_enabled(hart) {
        return Outcome::Illegal;
    }
    let rm = match resolve_rm(hart, inst.rm()) {
        Some(rm) => rm,
        None => return Outcome::Illegal,
    };

    let a = read_sp(hart, inst.rs1());
    let (val, flags) = fpu::f32_to_f64(a, rm);
    finish_fpr_fflags(hart, inst.rd(), val, false, flags, is_compressed);
    Outcome::Retired
}
