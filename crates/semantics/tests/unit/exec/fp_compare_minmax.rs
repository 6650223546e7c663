//! F/D comparison and min/max semantic tests.

use crate::common::builder::InstructionBuilder as Enc;
use crate::common::TestHart;
use riscv_semantics::exec::fp::{exec_fp_compare, exec_fp_min_max};
use riscv_semantics::hart::{Hart, CSR_FFLAGS};
use riscv_semantics::units::fpu::exception_flags::FpFlags;
use riscv_semantics::units::fpu::nan_handling::box_f32;
use riscv_semantics::Outcome;

const SNAN_D: u64 = 0x7FF0_0000_0000_0001;

fn boxed(v: f32) -> u64 {
    box_f32(v.to_bits())
}

/// Scenario: FMIN.D of an sNaN and +1.0 writes +1.0 and accrues NV.
#[test]
fn fmin_d_snan_scenario() {
    let mut hart = TestHart::new();
    hart.write_fpr(10, SNAN_D);
    hart.write_fpr(11, 1.0f64.to_bits());
    let inst = Enc::fmin_d(10, 10, 11);
    assert_eq!(exec_fp_min_max(&mut hart, inst, false), Outcome::Retired);
    assert_eq!(f64::from_bits(hart.read_fpr(10)), 1.0);
    assert_eq!(hart.read_csr(CSR_FFLAGS), FpFlags::NV.bits() as u64);
}

#[test]
fn fmax_s_orders_signed_zeros() {
    let mut hart = TestHart::new();
    hart.write_fpr(1, boxed(-0.0));
    hart.write_fpr(2, boxed(0.0));
    let inst = Enc::fmax_s(3, 1, 2);
    assert_eq!(exec_fp_min_max(&mut hart, inst, false), Outcome::Retired);
    assert_eq!(hart.read_fpr(3), boxed(0.0), "FMAX(-0, +0) is +0");
    assert_eq!(hart.read_csr(CSR_FFLAGS), 0);
}

/// Scenario: FEQ.D of equal values writes 1.
#[test]
fn feq_d_equal() {
    let mut hart = TestHart::new();
    hart.write_fpr(1, 2.5f64.to_bits());
    hart.write_fpr(2, 2.5f64.to_bits());
    let inst = Enc::feq_d(10, 1, 2);
    assert_eq!(exec_fp_compare(&mut hart, inst, false), Outcome::Retired);
    assert_eq!(hart.read_gpr(10), 1);
}

/// A NaN operand makes every comparison 0.
#[test]
fn nan_compares_as_zero() {
    let mut hart = TestHart::new();
    hart.write_fpr(1, SNAN_D);
    hart.write_fpr(2, 2.5f64.to_bits());
    let inst = Enc::feq_d(10, 1, 2);
    hart.write_gpr(10, 0xAAAA);
    assert_eq!(exec_fp_compare(&mut hart, inst, false), Outcome::Retired);
    assert_eq!(hart.read_gpr(10), 0);
    assert_eq!(hart.read_csr(CSR_FFLAGS), FpFlags::NV.bits() as u64);
}

/// FLT raises NV even for quiet NaNs; FEQ does not.
#[test]
fn flt_signals_quiet_nan_feq_does_not() {
    let qnan = box_f32(0x7FC0_0000);

    let mut hart = TestHart::new();
    hart.write_fpr(1, qnan);
    hart.write_fpr(2, boxed(1.0));
    let inst = Enc::flt_s(3, 1, 2);
    assert_eq!(exec_fp_compare(&mut hart, inst, false), Outcome::Retired);
    assert_eq!(hart.read_gpr(3), 0);
    assert_eq!(hart.read_csr(CSR_FFLAGS), FpFlags::NV.bits() as u64);

    let mut hart = TestHart::new();
    hart.write_fpr(1, qnan);
    hart.write_fpr(2, boxed(1.0));
    let inst = Enc::fp(
        riscv_semantics::isa::rv64f::funct7::FCMP,
        riscv_semantics::isa::rv64f::funct3::FEQ,
        3,
        1,
        2,
    );
    assert_eq!(exec_fp_compare(&mut hart, inst, false), Outcome::Retired);
    assert_eq!(hart.read_gpr(3), 0);
    assert_eq!(hart.read_csr(CSR_FFLAGS), 0, "FEQ is quiet for qNaN");
}

#[test]
fn fle_s_ordered() {
    let mut hart = TestHart::new();
    hart.write_fpr(1, boxed(1.0));
    hart.write_fpr(2, boxed(2.0));
    let inst = Enc::fle_s(3, 1, 2);
    assert_eq!(exec_fp_compare(&mut hart, inst, false), Outcome::Retired);
    assert_eq!(hart.read_gpr(3), 1);

    let inst = Enc::fle_s(3, 2, 1);
    assert_eq!(exec_fp_compare(&mut hart, inst, false), Outcome::Retired);
    assert_eq!(hart.read_gpr(3), 0);
}
