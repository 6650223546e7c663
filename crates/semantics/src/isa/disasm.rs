//! Instruction disassembly for the M/F/D inventory.
//!
//! Renders the mnemonic and operands of every instruction this crate
//! executes, for trace output and test diagnostics. Encodings outside
//! the M, F, and D extensions (or with reserved field values) render as
//! `None`; legality that depends on machine state, such as `misa` bits
//! or the current `frm`, is deliberately not consulted here.

use super::instruction::InstructionBits;
use super::rv64d::funct7 as d;
use super::rv64f::funct7 as f;
use super::rv64f::{funct3 as fp3, opcodes as fp_op};
use super::rv64m::{funct3 as m3, opcodes as m_op};

/// Disassembles a 32-bit instruction word.
///
/// # Returns
///
/// The rendered instruction, or `None` if the encoding is not part of
/// the M, F, or D extensions.
pub fn disassemble(inst: u32) -> Option<String> {
    match inst.opcode() {
        m_op::OP_REG | m_op::OP_REG_32 => disasm_mul_div(inst),
        fp_op::OP_LOAD_FP => disasm_load(inst),
        fp_op::OP_STORE_FP => disasm_store(inst),
        fp_op::OP_FP => disasm_fp(inst),
        fp_op::OP_FMADD => disasm_fused(inst, "fmadd"),
        fp_op::OP_FMSUB => disasm_fused(inst, "fmsub"),
        fp_op::OP_FNMSUB => disasm_fused(inst, "fnmsub"),
        fp_op::OP_FNMADD => disasm_fused(inst, "fnmadd"),
        _ => None,
    }
}

fn r_type(name: &str, inst: u32) -> Option<String> {
    Some(format!(
        "{} x{},x{},x{}",
        name,
        inst.rd(),
        inst.rs1(),
        inst.rs2()
    ))
}

fn fp_r_type(name: &str, inst: u32) -> Option<String> {
    Some(format!(
        "{} f{},f{},f{}",
        name,
        inst.rd(),
        inst.rs1(),
        inst.rs2()
    ))
}

fn disasm_mul_div(inst: u32) -> Option<String> {
    if inst.funct7() != m_op::M_EXTENSION {
        return None;
    }
    let word = inst.opcode() == m_op::OP_REG_32;
    let name = match (inst.funct3(), word) {
        (m3::MUL, false) => "mul",
        (m3::MULH, false) => "mulh",
        (m3::MULHSU, false) => "mulhsu",
        (m3::MULHU, false) => "mulhu",
        (m3::DIV, false) => "div",
        (m3::DIVU, false) => "divu",
        (m3::REM, false) => "rem",
        (m3::REMU, false) => "remu",
        (m3::MUL, true) => "mulw",
        (m3::DIV, true) => "divw",
        (m3::DIVU, true) => "divuw",
        (m3::REM, true) => "remw",
        (m3::REMU, true) => "remuw",
        _ => return None,
    };
    r_type(name, inst)
}

fn disasm_load(inst: u32) -> Option<String> {
    let name = match inst.funct3() {
        fp3::WIDTH_WORD => "flw",
        fp3::WIDTH_DOUBLE => "fld",
        _ => return None,
    };
    let imm = inst.imm_i() as i64;
    Some(format!("{} f{},{}(x{})", name, inst.rd(), imm, inst.rs1()))
}

fn disasm_store(inst: u32) -> Option<String> {
    let name = match inst.funct3() {
        fp3::WIDTH_WORD => "fsw",
        fp3::WIDTH_DOUBLE => "fsd",
        _ => return None,
    };
    let imm = inst.imm_s() as i64;
    Some(format!("{} f{},{}(x{})", name, inst.rs2(), imm, inst.rs1()))
}

fn disasm_fused(inst: u32, base: &str) -> Option<String> {
    let suffix = match inst.funct2() {
        0b00 => "s",
        0b01 => "d",
        _ => return None,
    };
    Some(format!(
        "{}.{} f{},f{},f{},f{}",
        base,
        suffix,
        inst.rd(),
        inst.rs1(),
        inst.rs2(),
        inst.rs3()
    ))
}

/// The integer-kind suffix selected by rs2 in the FCVT groups.
fn cvt_suffix(rs2: usize) -> Option<&'static str> {
    match rs2 {
        0 => Some("w"),
        1 => Some("wu"),
        2 => Some("l"),
        3 => Some("lu"),
        _ => None,
    }
}

fn disasm_fp(inst: u32) -> Option<String> {
    let (rd, rs1, rs2) = (inst.rd(), inst.rs1(), inst.rs2());
    match inst.funct7() {
        f::FADD => fp_r_type("fadd.s", inst),
        f::FSUB => fp_r_type("fsub.s", inst),
        f::FMUL => fp_r_type("fmul.s", inst),
        f::FDIV => fp_r_type("fdiv.s", inst),
        d::FADD_D => fp_r_type("fadd.d", inst),
        d::FSUB_D => fp_r_type("fsub.d", inst),
        d::FMUL_D => fp_r_type("fmul.d", inst),
        d::FDIV_D => fp_r_type("fdiv.d", inst),
        f::FSQRT if rs2 == 0 => Some(format!("fsqrt.s f{},f{}", rd, rs1)),
        d::FSQRT_D if rs2 == 0 => Some(format!("fsqrt.d f{},f{}", rd, rs1)),
        f::FSGNJ | d::FSGNJ_D => {
            let suffix = if inst.funct7() == f::FSGNJ { "s" } else { "d" };
            let name = match inst.funct3() {
                fp3::FSGNJ => "fsgnj",
                fp3::FSGNJN => "fsgnjn",
                fp3::FSGNJX => "fsgnjx",
                _ => return None,
            };
            fp_r_type(&format!("{}.{}", name, suffix), inst)
        }
        f::FMIN_MAX | d::FMIN_MAX_D => {
            let suffix = if inst.funct7() == f::FMIN_MAX { "s" } else { "d" };
            let name = match inst.funct3() {
                fp3::FMIN => "fmin",
                fp3::FMAX => "fmax",
                _ => return None,
            };
            fp_r_type(&format!("{}.{}", name, suffix), inst)
        }
        f::FCMP | d::FCMP_D => {
            let suffix = if inst.funct7() == f::FCMP { "s" } else { "d" };
            let name = match inst.funct3() {
                fp3::FEQ => "feq",
                fp3::FLT => "flt",
                fp3::FLE => "fle",
                _ => return None,
            };
            Some(format!("{}.{} x{},f{},f{}", name, suffix, rd, rs1, rs2))
        }
        f::FCVT_INT_S => {
            let suffix = cvt_suffix(rs2)?;
            Some(format!("fcvt.{}.s x{},f{}", suffix, rd, rs1))
        }
        d::FCVT_INT_D => {
            let suffix = cvt_suffix(rs2)?;
            Some(format!("fcvt.{}.d x{},f{}", suffix, rd, rs1))
        }
        f::FCVT_S_INT => {
            let suffix = cvt_suffix(rs2)?;
            Some(format!("fcvt.s.{} f{},x{}", suffix, rd, rs1))
        }
        d::FCVT_D_INT => {
            let suffix = cvt_suffix(rs2)?;
            Some(format!("fcvt.d.{} f{},x{}", suffix, rd, rs1))
        }
        f::FCVT_S_FMT if rs2 == 1 => Some(format!("fcvt.s.d f{},f{}", rd, rs1)),
        d::FCVT_D_FMT if rs2 == 0 => Some(format!("fcvt.d.s f{},f{}", rd, rs1)),
        f::FCLASS_FMV_X if rs2 == 0 => match inst.funct3() {
            fp3::FMV => Some(format!("fmv.x.w x{},f{}", rd, rs1)),
            fp3::FCLASS => Some(format!("fclass.s x{},f{}", rd, rs1)),
            _ => None,
        },
        d::FCLASS_FMV_X_D if rs2 == 0 => match inst.funct3() {
            fp3::FMV => Some(format!("fmv.x.d x{},f{}", rd, rs1)),
            fp3::FCLASS => Some(format!("fclass.d x{},f{}", rd, rs1)),
            _ => None,
        },
        f::FMV_W_X if rs2 == 0 && inst.funct3() == fp3::FMV => {
            Some(format!("fmv.w.x f{},x{}", rd, rs1))
        }
        d::FMV_D_X if rs2 == 0 && inst.funct3() == fp3::FMV => {
            Some(format!("fmv.d.x f{},x{}", rd, rs1))
        }
        _ => None,
    }
}
