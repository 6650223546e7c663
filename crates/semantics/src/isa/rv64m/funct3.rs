//! RISC-V M-Extension function codes (funct3).
//!
//! Identifies the specific multiply or divide operation when the opcode
//! is register-register and `funct7 == 1`. The same codes select the
//! word-sized variants (MULW, DIVW, ...) under the 32-bit opcode; the
//! high-multiply codes have no word-sized variants.

/// Multiply (signed * signed) -> lower XLEN bits.
pub const MUL: u32 = 0b000;

/// Multiply High (signed * signed) -> upper XLEN bits.
pub const MULH: u32 = 0b001;

/// Multiply High Signed/Unsigned (signed * unsigned) -> upper XLEN bits.
pub const MULHSU: u32 = 0b010;

/// Multiply High Unsigned (unsigned * unsigned) -> upper XLEN bits.
pub const MULHU: u32 = 0b011;

/// Divide (signed).
pub const DIV: u32 = 0b100;

/// Divide Unsigned.
pub const DIVU: u32 = 0b101;

/// Remainder (signed).
pub const REM: u32 = 0b110;

/// Remainder Unsigned.
pub const REMU: u32 = 0b111;
