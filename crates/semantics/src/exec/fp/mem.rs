//! Floating-point load and store semantics.
//!
//! FLW/FLD and FSW/FSD are the only operations in this crate that touch
//! memory, and the only ones that can trap. Each walks the same state
//! machine:
//!
//! 1. Compute the effective address: rs1 + sign-extended 12-bit
//!    immediate, truncated to XLEN.
//! 2. Translate through the host when virtual memory is active; a
//!    translation fault records a trap with the effective address.
//! 3. Access memory at the physical address; an access fault records a
//!    trap the same way.
//! 4. On success, write the destination (NaN-boxing a 32-bit load) or
//!    acknowledge the store, and advance the PC.
//!
//! A trapping access retires without advancing the PC; the host trap
//! layer saves `mepc` and redirects.

use super::{dp_enabled, sp_enabled};
use crate::common::AccessType;
use crate::exec::{advance_pc, finish_fpr, finish_trap, Outcome};
use crate::hart::Hart;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv64f::{funct3, opcodes};

/// Executes the load group: FLW, FLD.
///
/// # Returns
///
/// [`Outcome::Retired`] if the encoding belongs to this family (whether
/// the access succeeded or recorded a trap), [`Outcome::Illegal`] (hart
/// untouched) otherwise.
pub fn exec_fp_load<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    if inst.opcode() != opcodes::OP_LOAD_FP {
        return Outcome::Illegal;
    }
    let width = inst.funct3();
    let legal = match width {
        funct3::WIDTH_WORD => sp_enabled(hart),
        funct3::WIDTH_DOUBLE => dp_enabled(hart),
        _ => false,
    };
    if !legal {
        return Outcome::Illegal;
    }

    let base = hart.read_gpr(inst.rs1());
    let effective = hart.xlen().truncate(base.wrapping_add(inst.imm_i()));

    let paddr = if hart.vm_active(AccessType::Read) {
        match hart.translate(AccessType::Read, effective) {
            Ok(paddr) => paddr,
            Err(cause) => {
                finish_trap(hart, cause, effective);
                return Outcome::Retired;
            }
        }
    } else {
        effective
    };

    match hart.mem_read(width, paddr) {
        Ok(val) => {
            let box_sp = width == funct3::WIDTH_WORD;
            finish_fpr(hart, inst.rd(), val, box_sp, is_compressed);
        }
        Err(cause) => finish_trap(hart, cause, effective),
    }
    Outcome::Retired
}

/// Executes the store group: FSW, FSD.
///
/// FSW stores the low 32 bits of the source register as they are; the
/// NaN-boxing check does not apply to stores.
///
/// Same contract as [`exec_fp_load`].
pub fn exec_fp_store<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    if inst.opcode() != opcodes::OP_STORE_FP {
        return Outcome::Illegal;
    }
    let width = inst.funct3();
    let legal = match width {
        funct3::WIDTH_WORD => sp_enabled(hart),
        funct3::WIDTH_DOUBLE => dp_enabled(hart),
        _ => false,
    };
    if !legal {
        return Outcome::Illegal;
    }

    let base = hart.read_gpr(inst.rs1());
    let effective = hart.xlen().truncate(base.wrapping_add(inst.imm_s()));
    let val = hart.read_fpr(inst.rs2());

    let paddr = if hart.vm_active(AccessType::Write) {
        match hart.translate(AccessType::Write, effective) {
            Ok(paddr) => paddr,
            Err(cause) => {
                finish_trap(hart, cause, effective);
                return Outcome::Retired;
            }
        }
    } else {
        effective
    };

    match hart.mem_write(width, paddr, val) {
        Ok(()) => advance_pc(hart, is_compressed),
        Err(cause) => finish_trap(hart, cause, effective),
    }
    Outcome::Retired
}
