//! RISC-V Multiply/Divide Extension (M) opcodes.
//!
//! The M extension shares the register-register major opcodes with the
//! base integer instructions. It is distinguished by the `funct7` field
//! having the value 1.

/// Register-register arithmetic (shared with ADD, SUB, etc.).
pub const OP_REG: u32 = 0b0110011;

/// 32-bit register-register arithmetic (shared with ADDW, etc.) - RV64 only.
pub const OP_REG_32: u32 = 0b0111011;

/// M-extension selector in the funct7 field.
/// When `opcode` is `OP_REG` or `OP_REG_32` and `funct7` is `M_EXTENSION`,
/// the instruction is a multiply or divide operation.
pub const M_EXTENSION: u32 = 0b0000001;
