//! Integer multiply/divide unit (M extension).
//!
//! Evaluates one [`MulDivOp`] over two register values. The unit is
//! width-parameterised: the full-width path works directly on the 64-bit
//! operands, while the word path (`is32`) discards everything above bit
//! 31 of each operand, computes in 32 bits, and hands back a result that
//! the caller's write-back sign-extends.
//!
//! Divide and remainder never fail. A zero divisor and the lone signed
//! overflow case (most-negative dividend over -1) produce the fixed
//! results the architecture assigns them, so callers need no error path
//! around this unit.

use crate::common::bits::sext32;

/// Multiply/divide operation selector.
///
/// Signedness lives in the selector: the same pair of raw register
/// values can be multiplied as signed, unsigned, or mixed depending on
/// which variant the instruction named.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MulDivOp {
    /// Low XLEN bits of signed * signed.
    Mul,
    /// High XLEN bits of signed * signed.
    Mulh,
    /// High XLEN bits of signed rs1 * unsigned rs2.
    Mulhsu,
    /// High XLEN bits of unsigned * unsigned.
    Mulhu,
    /// Signed truncated quotient.
    Div,
    /// Unsigned quotient.
    Divu,
    /// Signed remainder, sign of the dividend.
    Rem,
    /// Unsigned remainder.
    Remu,
}

/// Evaluates a multiply/divide operation.
///
/// # Arguments
///
/// * `op`   - The operation to perform.
/// * `a`    - First operand (rs1): dividend or first factor.
/// * `b`    - Second operand (rs2): divisor or second factor.
/// * `is32` - Select the word-sized evaluation: operand bits above 31
///   do not participate and the 32-bit result returns sign-extended.
///
/// # Returns
///
/// The 64-bit result, including the fixed divide-by-zero and overflow
/// outcomes: quotients by zero are all-ones, remainders by zero return
/// the dividend, and the most-negative-dividend / -1 pair yields the
/// dividend back with remainder zero.
pub fn execute(op: MulDivOp, a: u64, b: u64, is32: bool) -> u64 {
    if is32 {
        sext32(execute_word(op, a as u32, b as u32))
    } else {
        execute_full(op, a, b)
    }
}

/// Full-width (64-bit) evaluation.
fn execute_full(op: MulDivOp, a: u64, b: u64) -> u64 {
    match op {
        // The low half of the product is the same under every signedness
        // reading, so one wrapping multiply serves MUL outright.
        MulDivOp::Mul => a.wrapping_mul(b),
        MulDivOp::Mulh => {
            let product = i128::from(a as i64) * i128::from(b as i64);
            (product >> 64) as u64
        }
        MulDivOp::Mulhsu => {
            let product = i128::from(a as i64) * i128::from(b);
            (product >> 64) as u64
        }
        MulDivOp::Mulhu => {
            let product = u128::from(a) * u128::from(b);
            (product >> 64) as u64
        }
        MulDivOp::Div => {
            let (dividend, divisor) = (a as i64, b as i64);
            if divisor == 0 {
                u64::MAX
            } else if dividend == i64::MIN && divisor == -1 {
                // The one quotient that does not fit; it wraps to itself.
                dividend as u64
            } else {
                (dividend / divisor) as u64
            }
        }
        MulDivOp::Divu => {
            if b == 0 {
                u64::MAX
            } else {
                a / b
            }
        }
        MulDivOp::Rem => {
            let (dividend, divisor) = (a as i64, b as i64);
            if divisor == 0 {
                a
            } else if dividend == i64::MIN && divisor == -1 {
                // Overflowed quotient leaves nothing behind.
                0
            } else {
                (dividend % divisor) as u64
            }
        }
        MulDivOp::Remu => {
            if b == 0 {
                a
            } else {
                a % b
            }
        }
    }
}

/// Word-sized (32-bit) evaluation.
///
/// Operands arrive already truncated; the caller sign-extends the
/// returned word. The zero-divisor remainders therefore hand back the
/// truncated dividend, which is what the word instructions require.
fn execute_word(op: MulDivOp, a: u32, b: u32) -> u32 {
    match op {
        MulDivOp::Mul => a.wrapping_mul(b),
        MulDivOp::Mulh => {
            let product = i64::from(a as i32) * i64::from(b as i32);
            (product >> 32) as u32
        }
        MulDivOp::Mulhsu => {
            let product = i64::from(a as i32) * i64::from(b);
            (product >> 32) as u32
        }
        MulDivOp::Mulhu => {
            let product = u64::from(a) * u64::from(b);
            (product >> 32) as u32
        }
        MulDivOp::Div => {
            let (dividend, divisor) = (a as i32, b as i32);
            if divisor == 0 {
                u32::MAX
            } else if dividend == i32::MIN && divisor == -1 {
                dividend as u32
            } else {
                (dividend / divisor) as u32
            }
        }
        MulDivOp::Divu => {
            if b == 0 {
                u32::MAX
            } else {
                a / b
            }
        }
        MulDivOp::Rem => {
            let (dividend, divisor) = (a as i32, b as i32);
            if divisor == 0 {
                a
            } else if dividend == i32::MIN && divisor == -1 {
                0
            } else {
                (dividend % divisor) as u32
            }
        }
        MulDivOp::Remu => {
            if b == 0 {
                a
            } else {
                a % b
            }
        }
    }
}
