//! M-extension semantic functions.
//!
//! Four families cover the integer multiply/divide instructions: the
//! multiply group (MUL/MULH/MULHSU/MULHU), the divide group (DIV/DIVU),
//! the remainder group (REM/REMU), and the RV64-only word-sized group
//! (MULW/DIVW/DIVUW/REMW/REMUW). All four share the same shape: decode,
//! decide legality, run the multiply/divide unit, write back through the
//! finish helper.
//!
//! Division by zero and signed overflow retire normally with the values
//! the architecture defines; they are never traps.

use crate::exec::{finish_gpr, Outcome};
use crate::hart::{misa_has, Hart, Xlen, MISA_EXT_M};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv64m::{funct3, opcodes};
use crate::units::mdu::{self, MulDivOp};

/// Executes the multiply group: MUL, MULH, MULHSU, MULHU.
///
/// # Arguments
///
/// * `hart` - The hart whose state the instruction transforms.
/// * `inst` - The raw 32-bit instruction word.
/// * `is_compressed` - Whether the word was expanded from a 16-bit
///   encoding (PC advances by 2 instead of 4).
///
/// # Returns
///
/// [`Outcome::Retired`] if the encoding belongs to this family,
/// [`Outcome::Illegal`] (hart untouched) otherwise.
pub fn exec_mul<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    let op = match (inst.opcode(), inst.funct7(), inst.funct3()) {
        (opcodes::OP_REG, opcodes::M_EXTENSION, funct3::MUL) => MulDivOp::Mul,
        (opcodes::OP_REG, opcodes::M_EXTENSION, funct3::MULH) => MulDivOp::Mulh,
        (opcodes::OP_REG, opcodes::M_EXTENSION, funct3::MULHSU) => MulDivOp::Mulhsu,
        (opcodes::OP_REG, opcodes::M_EXTENSION, funct3::MULHU) => MulDivOp::Mulhu,
        _ => return Outcome::Illegal,
    };
    if !misa_has(hart, MISA_EXT_M) {
        return Outcome::Illegal;
    }

    let a = hart.read_gpr(inst.rs1());
    let b = hart.read_gpr(inst.rs2());
    let is32 = hart.xlen() == Xlen::Rv32;
    finish_gpr(hart, inst.rd(), mdu::execute(op, a, b, is32), is_compressed);
    Outcome::Retired
}

/// Executes the divide group: DIV, DIVU.
///
/// Same contract as [`exec_mul`].
pub fn exec_div<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    let op = match (inst.opcode(), inst.funct7(), inst.funct3()) {
        (opcodes::OP_REG, opcodes::M_EXTENSION, funct3::DIV) => MulDivOp::Div,
        (opcodes::OP_REG, opcodes::M_EXTENSION, funct3::DIVU) => MulDivOp::Divu,
        _ => return Outcome::Illegal,
    };
    if !misa_has(hart, MISA_EXT_M) {
        return Outcome::Illegal;
    }

    let a = hart.read_gpr(inst.rs1());
    let b = hart.read_gpr(inst.rs2());
    let is32 = hart.xlen() == Xlen::Rv32;
    finish_gpr(hart, inst.rd(), mdu::execute(op, a, b, is32), is_compressed);
    Outcome::Retired
}

/// Executes the remainder group: REM, REMU.
///
/// Same contract as [`exec_mul`].
pub fn exec_rem<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    let op = match (inst.opcode(), inst.funct7(), inst.funct3()) {
        (opcodes::OP_REG, opcodes::M_EXTENSION, funct3::REM) => MulDivOp::Rem,
        (opcodes::OP_REG, opcodes::M_EXTENSION, funct3::REMU) => MulDivOp::Remu,
        _ => return Outcome::Illegal,
    };
    if !misa_has(hart, MISA_EXT_M) {
        return Outcome::Illegal;
    }

    let a = hart.read_gpr(inst.rs1());
    let b = hart.read_gpr(inst.rs2());
    let is32 = hart.xlen() == Xlen::Rv32;
    finish_gpr(hart, inst.rd(), mdu::execute(op, a, b, is32), is_compressed);
    Outcome::Retired
}

/// Executes the word-sized group: MULW, DIVW, DIVUW, REMW, REMUW.
///
/// RV64 only. The operation reads the low 32 bits of each operand and
/// sign-extends its 32-bit result to the full register. The high-multiply
/// codes have no word-sized variants and stay illegal here.
///
/// Same contract as [`exec_mul`].
pub fn exec_mul_div_word<H: Hart>(hart: &mut H, inst: u32, is_compressed: bool) -> Outcome {
    let op = match (inst.opcode(), inst.funct7(), inst.funct3()) {
        (opcodes::OP_REG_32, opcodes::M_EXTENSION, funct3::MUL) => MulDivOp::Mul,
        (opcodes::OP_REG_32, opcodes::M_EXTENSION, funct3::DIV) => MulDivOp::Div,
        (opcodes::OP_REG_32, opcodes::M_EXTENSION, funct3::DIVU) => MulDivOp::Divu,
        (opcodes::OP_REG_32, opcodes::M_EXTENSION, funct3::REM) => MulDivOp::Rem,
        (opcodes::OP_REG_32, opcodes::M_EXTENSION, funct3::REMU) => MulDivOp::Remu,
        _ => return Outcome::Illegal,
    };
    if hart.xlen() != Xlen::Rv64 || !misa_has(hart, MISA_EXT_M) {
        return Outcome::Illegal;
    }

    let a = hart.read_gpr(inst.rs1());
    let b = hart.read_gpr(inst.rs2());
    finish_gpr(hart, inst.rd(), mdu::execute(op, a, b, true), is_compressed);
    Outcome::Retired
}
