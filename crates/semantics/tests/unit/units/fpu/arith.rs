//! FPU adapter tests: arithmetic, flags, min/max, compares, conversions.

use riscv_semantics::units::fpu::exception_flags::FpFlags;
use riscv_semantics::units::fpu::nan_handling::{CANONICAL_NAN_F32, CANONICAL_NAN_F64};
use riscv_semantics::units::fpu::rounding_modes::RoundingMode;
use riscv_semantics::units::fpu::{self, FpCmp, FpOp};

const RNE: RoundingMode = RoundingMode::Rne;

// ─── Arithmetic and flags ────────────────────────────────────────────────────

#[test]
fn add_f64_exact_raises_no_flags() {
    let (bits, flags) = fpu::execute_f64(
        FpOp::Add,
        1.5f64.to_bits(),
        2.25f64.to_bits(),
        0,
        RNE,
    );
    assert_eq!(f64::from_bits(bits), 3.75);
    assert!(flags.is_empty());
}

/// Scenario: 1.0 / 0.0 is +infinity with DZ raised.
#[test]
fn div_f32_by_zero_raises_dz() {
    let (bits, flags) = fpu::execute_f32(
        FpOp::Div,
        1.0f32.to_bits(),
        0.0f32.to_bits(),
        0,
        RNE,
    );
    assert_eq!(bits, 0x7F80_0000, "expected +infinity");
    assert!(flags.contains(FpFlags::DZ));
    assert!(!flags.contains(FpFlags::NV));
}

#[test]
fn zero_div_zero_raises_nv_and_canonical_nan() {
    let (bits, flags) = fpu::execute_f32(FpOp::Div, 0, 0, 0, RNE);
    assert_eq!(bits, CANONICAL_NAN_F32);
    assert!(flags.contains(FpFlags::NV));
}

#[test]
fn sqrt_of_negative_raises_nv() {
    let (bits, flags) = fpu::execute_f64(FpOp::Sqrt, (-4.0f64).to_bits(), 0, 0, RNE);
    assert_eq!(bits, CANONICAL_NAN_F64);
    assert!(flags.contains(FpFlags::NV));
}

#[test]
fn overflow_raises_of_and_nx() {
    let max = f32::MAX.to_bits();
    let (bits, flags) = fpu::execute_f32(FpOp::Mul, max, max, 0, RNE);
    assert_eq!(bits, 0x7F80_0000);
    assert!(flags.contains(FpFlags::OF));
    assert!(flags.contains(FpFlags::NX));
}

#[test]
fn snan_operand_quiets_to_canonical_nan_with_nv() {
    let snan = 0x7F80_0001u32;
    let (bits, flags) = fpu::execute_f32(FpOp::Add, snan, 0.0f32.to_bits(), 0, RNE);
    assert_eq!(bits, CANONICAL_NAN_F32);
    assert!(flags.contains(FpFlags::NV));
}

/// The fused multiply-add rounds once: (1 + 2^-52)^2 - (1 + 2^-51)
/// is exactly 2^-104, which a separate multiply would have rounded away.
#[test]
fn fused_mul_add_is_single_rounding() {
    let a = 0x3FF0_0000_0000_0001u64; // 1 + 2^-52
    let c = 0xBFF0_0000_0000_0002u64; // -(1 + 2^-51)
    let (bits, flags) = fpu::execute_f64(FpOp::MulAdd, a, a, c, RNE);
    assert_eq!(bits, 0x3970_0000_0000_0000, "expected exactly 2^-104");
    assert!(flags.is_empty(), "the fused result is exact");

    // The two-rounding sequence loses the low term entirely.
    let (product, _) = fpu::execute_f64(FpOp::Mul, a, a, 0, RNE);
    let (two_step, _) = fpu::execute_f64(FpOp::Add, product, c, 0, RNE);
    assert_eq!(f64::from_bits(two_step), 0.0);
}

#[test]
fn fused_variants_apply_the_right_signs() {
    let a = 2.0f64.to_bits();
    let b = 3.0f64.to_bits();
    let c = 1.0f64.to_bits();
    let expect = |v: f64, got: (u64, FpFlags)| assert_eq!(f64::from_bits(got.0), v);
    expect(7.0, fpu::execute_f64(FpOp::MulAdd, a, b, c, RNE)); // 2*3 + 1
    expect(5.0, fpu::execute_f64(FpOp::MulSub, a, b, c, RNE)); // 2*3 - 1
    expect(-5.0, fpu::execute_f64(FpOp::NegMulSub, a, b, c, RNE)); // -(2*3) + 1
    expect(-7.0, fpu::execute_f64(FpOp::NegMulAdd, a, b, c, RNE)); // -(2*3) - 1
}

// ─── Min/max ladder ──────────────────────────────────────────────────────────

/// Scenario: FMIN.D of an sNaN and +1.0 selects +1.0 and raises NV.
#[test]
fn min_with_snan_selects_other_and_raises_nv() {
    let snan = 0x7FF0_0000_0000_0001u64;
    let one = 1.0f64.to_bits();
    let (bits, flags) = fpu::min_max_f64(false, snan, one);
    assert_eq!(bits, one);
    assert!(flags.contains(FpFlags::NV));
}

#[test]
fn min_with_qnan_selects_other_silently() {
    let one = 1.0f64.to_bits();
    let (bits, flags) = fpu::min_max_f64(false, CANONICAL_NAN_F64, one);
    assert_eq!(bits, one);
    assert!(flags.is_empty());
}

#[test]
fn min_of_two_nans_is_canonical_nan() {
    let qnan_payload = 0x7FF8_0000_0000_BEEFu64;
    let (bits, flags) = fpu::min_max_f64(false, qnan_payload, qnan_payload);
    assert_eq!(bits, CANONICAL_NAN_F64);
    assert!(flags.is_empty());

    let snan = 0x7F80_0001u32;
    let (bits, flags) = fpu::min_max_f32(false, snan, snan);
    assert_eq!(bits, CANONICAL_NAN_F32);
    assert!(flags.contains(FpFlags::NV));
}

/// FMIN(-0, +0) = -0 and FMAX(-0, +0) = +0, in both operand orders.
#[test]
fn signed_zeros_order_correctly() {
    let pz = 0u32;
    let nz = 0x8000_0000u32;
    assert_eq!(fpu::min_max_f32(false, pz, nz).0, nz);
    assert_eq!(fpu::min_max_f32(false, nz, pz).0, nz);
    assert_eq!(fpu::min_max_f32(true, pz, nz).0, pz);
    assert_eq!(fpu::min_max_f32(true, nz, pz).0, pz);
}

#[test]
fn min_max_select_by_magnitude() {
    let a = 1.5f32.to_bits();
    let b = (-2.0f32).to_bits();
    assert_eq!(fpu::min_max_f32(false, a, b).0, b);
    assert_eq!(fpu::min_max_f32(true, a, b).0, a);
}

// ─── Compares ────────────────────────────────────────────────────────────────

#[test]
fn eq_is_quiet_for_quiet_nans() {
    let one = 1.0f64.to_bits();
    let (result, flags) = fpu::compare_f64(FpCmp::Eq, CANONICAL_NAN_F64, one);
    assert!(!result);
    assert!(flags.is_empty(), "FEQ must not signal on quiet NaN");
}

#[test]
fn eq_signals_on_signalling_nan() {
    let snan = 0x7FF0_0000_0000_0001u64;
    let (result, flags) = fpu::compare_f64(FpCmp::Eq, snan, 1.0f64.to_bits());
    assert!(!result);
    assert!(flags.contains(FpFlags::NV));
}

/// FLT and FLE signal on any NaN, quiet or not.
#[test]
fn lt_le_signal_on_any_nan() {
    let one = 1.0f32.to_bits();
    for cmp in [FpCmp::Lt, FpCmp::Le] {
        let (result, flags) = fpu::compare_f32(cmp, CANONICAL_NAN_F32, one);
        assert!(!result);
        assert!(flags.contains(FpFlags::NV), "{cmp:?}");
    }
}

#[test]
fn ordered_compares() {
    let one = 1.0f64.to_bits();
    let two = 2.0f64.to_bits();
    assert!(fpu::compare_f64(FpCmp::Lt, one, two).0);
    assert!(!fpu::compare_f64(FpCmp::Lt, two, one).0);
    assert!(fpu::compare_f64(FpCmp::Le, one, one).0);
    assert!(fpu::compare_f64(FpCmp::Eq, two, two).0);
    // -0 == +0 in IEEE comparison.
    assert!(fpu::compare_f64(FpCmp::Eq, 0x8000_0000_0000_0000, 0).0);
}

// ─── Conversions ─────────────────────────────────────────────────────────────

#[test]
fn float_to_int_rounds_per_mode() {
    let v = 7.5f32.to_bits();
    assert_eq!(fpu::f32_to_i32(v, RoundingMode::Rtz).0, 7);
    assert_eq!(fpu::f32_to_i32(v, RoundingMode::Rdn).0, 7);
    assert_eq!(fpu::f32_to_i32(v, RoundingMode::Rup).0, 8);
    // Ties to even: 7.5 rounds to 8; 6.5 rounds to 6.
    assert_eq!(fpu::f32_to_i32(v, RNE).0, 8);
    assert_eq!(fpu::f32_to_i32(6.5f32.to_bits(), RNE).0, 6);
    // Ties away from zero: 6.5 rounds to 7.
    assert_eq!(fpu::f32_to_i32(6.5f32.to_bits(), RoundingMode::Rmm).0, 7);
}

#[test]
fn inexact_conversion_raises_nx() {
    let (_, flags) = fpu::f32_to_i32(7.5f32.to_bits(), RNE);
    assert!(flags.contains(FpFlags::NX));
    let (_, flags) = fpu::f32_to_i32(7.0f32.to_bits(), RNE);
    assert!(flags.is_empty());
}

/// NaN and out-of-range inputs saturate to the architecture's values
/// with NV raised (spec table 11.4).
#[test]
fn float_to_int_saturates() {
    let nan = CANONICAL_NAN_F32;
    let (v, flags) = fpu::f32_to_i32(nan, RNE);
    assert_eq!(v, i32::MAX as u64);
    assert!(flags.contains(FpFlags::NV));

    let neg_inf = 0xFF80_0000u32;
    let (v, _) = fpu::f32_to_i32(neg_inf, RNE);
    assert_eq!(v, i32::MIN as i64 as u64);

    // Unsigned conversion of a negative value saturates to 0.
    let (v, flags) = fpu::f32_to_u32((-1.0f32).to_bits(), RNE);
    assert_eq!(v, 0);
    assert!(flags.contains(FpFlags::NV));

    // Unsigned conversion of NaN saturates to all-ones (sign-extended).
    let (v, flags) = fpu::f64_to_u32(CANONICAL_NAN_F64, RNE);
    assert_eq!(v, u64::MAX);
    assert!(flags.contains(FpFlags::NV));
}

/// FCVT.WU results are sign-extended from bit 31 even though the value
/// is unsigned (spec §11.7).
#[test]
fn unsigned_word_results_sign_extend() {
    let v = 4_000_000_000.0f64.to_bits(); // fits u32, bit 31 set
    let (bits, flags) = fpu::f64_to_u32(v, RNE);
    assert_eq!(bits, 4_000_000_000u32 as i32 as i64 as u64);
    assert!(flags.is_empty());
}

#[test]
fn int_to_float_conversions() {
    assert_eq!(fpu::i32_to_f32(-2i64 as u64, RNE).0, (-2.0f32).to_bits());
    assert_eq!(fpu::u32_to_f32(2, RNE).0, 2.0f32.to_bits());
    assert_eq!(fpu::i64_to_f64(-5i64 as u64, RNE).0, (-5.0f64).to_bits());
    assert_eq!(fpu::u64_to_f64(5, RNE).0, 5.0f64.to_bits());
    // u32 conversion ignores the upper half of the register.
    assert_eq!(fpu::u32_to_f64(0xFFFF_FFFF_0000_0002, RNE).0, 2.0f64.to_bits());
}

#[test]
fn large_int_to_f32_is_inexact() {
    // 2^24 + 1 is not representable in f32.
    let (_, flags) = fpu::i32_to_f32(16_777_217, RNE);
    assert!(flags.contains(FpFlags::NX));
}

#[test]
fn format_conversions() {
    let (bits, flags) = fpu::f32_to_f64(1.5f32.to_bits(), RNE);
    assert_eq!(f64::from_bits(bits), 1.5);
    assert!(flags.is_empty(), "widening is exact");

    let (bits, _) = fpu::f64_to_f32(2.25f64.to_bits(), RNE);
    assert_eq!(f32::from_bits(bits), 2.25);

    // Narrowing an sNaN raises NV and produces the canonical NaN.
    let snan = 0x7FF0_0000_0000_0001u64;
    let (bits, flags) = fpu::f64_to_f32(snan, RNE);
    assert_eq!(bits, CANONICAL_NAN_F32);
    assert!(flags.contains(FpFlags::NV));
}
