//! Floating-Point Unit (FPU).
//!
//! This module adapts a correctly-rounded IEEE 754-2008 softfloat backend
//! to the shapes the F/D semantic functions need. It provides:
//! 1. **Arithmetic:** add/sub/mul/div/sqrt and the single-rounding fused multiply-add family.
//! 2. **Comparison:** quiet (FEQ) and signalling (FLT/FLE) predicates.
//! 3. **Min/Max:** the IEEE 754-2008 minNum/maxNum selection with RISC-V NaN handling.
//! 4. **Conversion:** the full integer <-> float and single <-> double matrix.
//!
//! Every entry point takes raw bit patterns plus an explicit rounding
//! mode and returns the result together with the exception flags the
//! operation raised, so callers accumulate `fflags` without touching any
//! shared state. NaN results are canonicalised against this crate's
//! constants before they are returned (spec §11.3).
//!
//! Operations are organised into submodules:
//! - [`nan_handling`]: NaN boxing/unboxing and canonical NaN handling.
//! - [`rounding_modes`]: Rounding mode encoding and dynamic resolution.
//! - [`exception_flags`]: Accrued exception flag representation.
//! - [`classify`]: FCLASS one-hot classification masks.

/// FCLASS one-hot classification masks.
pub mod classify;

/// Floating-point exception flag types.
pub mod exception_flags;

/// NaN boxing, unboxing, and canonical NaN handling.
pub mod nan_handling;

/// Rounding mode definitions and resolution.
pub mod rounding_modes;

use softfloat_wrapper::{ExceptionFlags, Float, F32, F64};

use self::exception_flags::FpFlags;
use self::nan_handling::{
    canonicalize_f32, canonicalize_f64, CANONICAL_NAN_F32, CANONICAL_NAN_F64, F32_SIGN_BIT,
    F64_SIGN_BIT,
};
use self::rounding_modes::RoundingMode;

/// Floating-point arithmetic operation selector.
///
/// The fused variants are single-rounding primitives; they must never be
/// synthesised from a multiply followed by an add.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpOp {
    /// rs1 + rs2.
    Add,
    /// rs1 - rs2.
    Sub,
    /// rs1 * rs2.
    Mul,
    /// rs1 / rs2.
    Div,
    /// sqrt(rs1).
    Sqrt,
    /// rs1 * rs2 + rs3 (FMADD).
    MulAdd,
    /// rs1 * rs2 - rs3 (FMSUB).
    MulSub,
    /// -(rs1 * rs2) + rs3 (FNMSUB).
    NegMulSub,
    /// -(rs1 * rs2) - rs3 (FNMADD).
    NegMulAdd,
}

/// Floating-point comparison selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpCmp {
    /// Equality; quiet (NV only for signalling NaN operands).
    Eq,
    /// Less-than; signalling (NV for any NaN operand).
    Lt,
    /// Less-than-or-equal; signalling (NV for any NaN operand).
    Le,
}

/// Runs a softfloat operation and captures the exception flags it raised.
///
/// The backend keeps its sticky flags in thread-local state; this clears
/// them, runs the operation, and reads back what accrued, so each call
/// observes exactly its own exceptions.
fn with_flags<T>(op: impl FnOnce() -> T) -> (T, FpFlags) {
    let mut raised = ExceptionFlags::default();
    raised.set();
    let value = op();
    raised.get();
    (value, FpFlags::from_softfloat(&raised))
}

/// Executes a single-precision arithmetic operation.
///
/// # Arguments
///
/// * `op` - The operation to perform.
/// * `a`, `b`, `c` - Operand bit patterns; `b` and `c` are ignored by the
///   operations that do not use them.
/// * `rm` - The resolved rounding mode for this operation.
///
/// # Returns
///
/// The result bit pattern (NaN results canonicalised) and the raised
/// exception flags.
pub fn execute_f32(op: FpOp, a: u32, b: u32, c: u32, rm: RoundingMode) -> (u32, FpFlags) {
    let x = F32::from_bits(a);
    let y = F32::from_bits(b);
    let z = F32::from_bits(c);
    let srm = rm.to_softfloat();
    let (result, flags) = with_flags(|| match op {
        FpOp::Add => x.add(y, srm),
        FpOp::Sub => x.sub(y, srm),
        FpOp::Mul => x.mul(y, srm),
        FpOp::Div => x.div(y, srm),
        FpOp::Sqrt => x.sqrt(srm),
        FpOp::MulAdd => x.fused_mul_add(y, z, srm),
        FpOp::MulSub => x.fused_mul_add(y, z.neg(), srm),
        FpOp::NegMulSub => x.neg().fused_mul_add(y, z, srm),
        FpOp::NegMulAdd => x.neg().fused_mul_add(y, z.neg(), srm),
    });
    (canonicalize_f32(result.to_bits()), flags)
}

/// Executes a double-precision arithmetic operation.
///
/// Same contract as [`execute_f32`] over 64-bit operands.
pub fn execute_f64(op: FpOp, a: u64, b: u64, c: u64, rm: RoundingMode) -> (u64, FpFlags) {
    let x = F64::from_bits(a);
    let y = F64::from_bits(b);
    let z = F64::from_bits(c);
    let srm = rm.to_softfloat();
    let (result, flags) = with_flags(|| match op {
        FpOp::Add => x.add(y, srm),
        FpOp::Sub => x.sub(y, srm),
        FpOp::Mul => x.mul(y, srm),
        FpOp::Div => x.div(y, srm),
        FpOp::Sqrt => x.sqrt(srm),
        FpOp::MulAdd => x.fused_mul_add(y, z, srm),
        FpOp::MulSub => x.fused_mul_add(y, z.neg(), srm),
        FpOp::NegMulSub => x.neg().fused_mul_add(y, z, srm),
        FpOp::NegMulAdd => x.neg().fused_mul_add(y, z.neg(), srm),
    });
    (canonicalize_f64(result.to_bits()), flags)
}

/// Compares two single-precision values.
///
/// Any NaN operand makes the result false. FEQ raises NV only for
/// signalling NaNs; FLT and FLE raise NV for any NaN (spec §11.8).
pub fn compare_f32(cmp: FpCmp, a: u32, b: u32) -> (bool, FpFlags) {
    let x = F32::from_bits(a);
    let y = F32::from_bits(b);
    let mut flags = FpFlags::NONE;
    let result = match cmp {
        FpCmp::Eq => {
            if x.is_signaling_nan() || y.is_signaling_nan() {
                flags = flags | FpFlags::NV;
            }
            !x.is_nan() && !y.is_nan() && x.eq(y)
        }
        FpCmp::Lt => {
            if x.is_nan() || y.is_nan() {
                flags = flags | FpFlags::NV;
                false
            } else {
                x.lt(y)
            }
        }
        FpCmp::Le => {
            if x.is_nan() || y.is_nan() {
                flags = flags | FpFlags::NV;
                false
            } else {
                x.le(y)
            }
        }
    };
    (result, flags)
}

/// Compares two double-precision values.
///
/// Same contract as [`compare_f32`].
pub fn compare_f64(cmp: FpCmp, a: u64, b: u64) -> (bool, FpFlags) {
    let x = F64::from_bits(a);
    let y = F64::from_bits(b);
    let mut flags = FpFlags::NONE;
    let result = match cmp {
        FpCmp::Eq => {
            if x.is_signaling_nan() || y.is_signaling_nan() {
                flags = flags | FpFlags::NV;
            }
            !x.is_nan() && !y.is_nan() && x.eq(y)
        }
        FpCmp::Lt => {
            if x.is_nan() || y.is_nan() {
                flags = flags | FpFlags::NV;
                false
            } else {
                x.lt(y)
            }
        }
        FpCmp::Le => {
            if x.is_nan() || y.is_nan() {
                flags = flags | FpFlags::NV;
                false
            } else {
                x.le(y)
            }
        }
    };
    (result, flags)
}

/// Single-precision minNum/maxNum (FMIN.S / FMAX.S).
///
/// Selection priority (spec §11.9, identical for both widths):
/// 1. Both operands signalling NaN: canonical NaN, NV raised.
/// 2. Exactly one signalling NaN: the other operand, NV raised.
/// 3. Both quiet NaN: canonical NaN.
/// 4. Exactly one quiet NaN: the other operand.
/// 5. Zeros of opposite sign: FMIN picks -0, FMAX picks +0.
/// 6. Otherwise the lesser (FMIN) or greater (FMAX) value.
pub fn min_max_f32(is_max: bool, a: u32, b: u32) -> (u32, FpFlags) {
    let x = F32::from_bits(a);
    let y = F32::from_bits(b);
    let mut flags = FpFlags::NONE;
    if x.is_signaling_nan() || y.is_signaling_nan() {
        flags = flags | FpFlags::NV;
    }
    let result = if x.is_nan() && y.is_nan() {
        CANONICAL_NAN_F32
    } else if x.is_nan() {
        b
    } else if y.is_nan() {
        a
    } else if (x.is_negative_zero() && y.is_positive_zero())
        || (x.is_positive_zero() && y.is_negative_zero())
    {
        if is_max {
            0
        } else {
            F32_SIGN_BIT
        }
    } else if x.lt_quiet(y) != is_max {
        a
    } else {
        b
    };
    (result, flags)
}

/// Double-precision minNum/maxNum (FMIN.D / FMAX.D).
///
/// Same selection ladder as [`min_max_f32`].
pub fn min_max_f64(is_max: bool, a: u64, b: u64) -> (u64, FpFlags) {
    let x = F64::from_bits(a);
    let y = F64::from_bits(b);
    let mut flags = FpFlags::NONE;
    if x.is_signaling_nan() || y.is_signaling_nan() {
        flags = flags | FpFlags::NV;
    }
    let result = if x.is_nan() && y.is_nan() {
        CANONICAL_NAN_F64
    } else if x.is_nan() {
        b
    } else if y.is_nan() {
        a
    } else if (x.is_negative_zero() && y.is_positive_zero())
        || (x.is_positive_zero() && y.is_negative_zero())
    {
        if is_max {
            0
        } else {
            F64_SIGN_BIT
        }
    } else if x.lt_quiet(y) != is_max {
        a
    } else {
        b
    };
    (result, flags)
}

// --- Float -> integer conversions ---
//
// Word-sized results are sign-extended from bit 31 to 64 bits, including
// the unsigned variants: FCVT.WU writes a sign-extended 32-bit value to
// an RV64 register (spec §11.7). Out-of-range and NaN inputs produce the
// saturated values the backend defines for RISC-V, with NV raised.

/// FCVT.W.S: single to signed 32-bit integer.
pub fn f32_to_i32(a: u32, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F32::from_bits(a).to_i32(rm.to_softfloat(), true));
    (v as i64 as u64, flags)
}

/// FCVT.WU.S: single to unsigned 32-bit integer.
pub fn f32_to_u32(a: u32, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F32::from_bits(a).to_u32(rm.to_softfloat(), true));
    (v as i32 as i64 as u64, flags)
}

/// FCVT.L.S: single to signed 64-bit integer.
pub fn f32_to_i64(a: u32, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F32::from_bits(a).to_i64(rm.to_softfloat(), true));
    (v as u64, flags)
}

/// FCVT.LU.S: single to unsigned 64-bit integer.
pub fn f32_to_u64(a: u32, rm: RoundingMode) -> (u64, FpFlags) {
    with_flags(|| F32::from_bits(a).to_u64(rm.to_softfloat(), true))
}

/// FCVT.W.D: double to signed 32-bit integer.
pub fn f64_to_i32(a: u64, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F64::from_bits(a).to_i32(rm.to_softfloat(), true));
    (v as i64 as u64, flags)
}

/// FCVT.WU.D: double to unsigned 32-bit integer.
pub fn f64_to_u32(a: u64, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F64::from_bits(a).to_u32(rm.to_softfloat(), true));
    (v as i32 as i64 as u64, flags)
}

/// FCVT.L.D: double to signed 64-bit integer.
pub fn f64_to_i64(a: u64, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F64::from_bits(a).to_i64(rm.to_softfloat(), true));
    (v as u64, flags)
}

/// FCVT.LU.D: double to unsigned 64-bit integer.
pub fn f64_to_u64(a: u64, rm: RoundingMode) -> (u64, FpFlags) {
    with_flags(|| F64::from_bits(a).to_u64(rm.to_softfloat(), true))
}

// --- Integer -> float conversions ---
//
// The integer operand arrives as the raw register value; the signed
// variants reinterpret the relevant low bits in two's complement.

/// FCVT.S.W: signed 32-bit integer to single.
pub fn i32_to_f32(value: u64, rm: RoundingMode) -> (u32, FpFlags) {
    let (v, flags) = with_flags(|| F32::from_i32(value as i32, rm.to_softfloat()));
    (v.to_bits(), flags)
}

/// FCVT.S.WU: unsigned 32-bit integer to single.
pub fn u32_to_f32(value: u64, rm: RoundingMode) -> (u32, FpFlags) {
    let (v, flags) = with_flags(|| F32::from_u32(value as u32, rm.to_softfloat()));
    (v.to_bits(), flags)
}

/// FCVT.S.L: signed 64-bit integer to single.
pub fn i64_to_f32(value: u64, rm: RoundingMode) -> (u32, FpFlags) {
    let (v, flags) = with_flags(|| F32::from_i64(value as i64, rm.to_softfloat()));
    (v.to_bits(), flags)
}

/// FCVT.S.LU: unsigned 64-bit integer to single.
pub fn u64_to_f32(value: u64, rm: RoundingMode) -> (u32, FpFlags) {
    let (v, flags) = with_flags(|| F32::from_u64(value, rm.to_softfloat()));
    (v.to_bits(), flags)
}

/// FCVT.D.W: signed 32-bit integer to double.
pub fn i32_to_f64(value: u64, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F64::from_i32(value as i32, rm.to_softfloat()));
    (v.to_bits(), flags)
}

/// FCVT.D.WU: unsigned 32-bit integer to double.
pub fn u32_to_f64(value: u64, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F64::from_u32(value as u32, rm.to_softfloat()));
    (v.to_bits(), flags)
}

/// FCVT.D.L: signed 64-bit integer to double.
pub fn i64_to_f64(value: u64, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F64::from_i64(value as i64, rm.to_softfloat()));
    (v.to_bits(), flags)
}

/// FCVT.D.LU: unsigned 64-bit integer to double.
pub fn u64_to_f64(value: u64, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F64::from_u64(value, rm.to_softfloat()));
    (v.to_bits(), flags)
}

// --- Format conversions ---

/// FCVT.D.S: single to double (exact; NV for signalling NaN input).
pub fn f32_to_f64(a: u32, rm: RoundingMode) -> (u64, FpFlags) {
    let (v, flags) = with_flags(|| F32::from_bits(a).to_f64(rm.to_softfloat()));
    (canonicalize_f64(v.to_bits()), flags)
}

/// FCVT.S.D: double to single (rounded; may raise OF/UF/NX).
pub fn f64_to_f32(a: u64, rm: RoundingMode) -> (u32, FpFlags) {
    let (v, flags) = with_flags(|| F64::from_bits(a).to_f32(rm.to_softfloat()));
    (canonicalize_f32(v.to_bits()), flags)
}
