//! RISC-V Floating-Point (F/D) function codes (funct3).
//!
//! These values distinguish variants of floating-point instructions that
//! share a funct7 group: comparison types, sign injection modes, min/max
//! selection, and the classify/move pair. Width codes for the FP loads
//! and stores also live in the funct3 field.

/// Floating-point Sign Injection (copy sign).
pub const FSGNJ: u32 = 0b000;
/// Floating-point Sign Injection Negate (negate sign).
pub const FSGNJN: u32 = 0b001;
/// Floating-point Sign Injection XOR (XOR signs).
pub const FSGNJX: u32 = 0b010;

/// Floating-point Minimum.
pub const FMIN: u32 = 0b000;
/// Floating-point Maximum.
pub const FMAX: u32 = 0b001;

/// Floating-point Less Than or Equal (FLE).
pub const FLE: u32 = 0b000;
/// Floating-point Less Than (FLT).
pub const FLT: u32 = 0b001;
/// Floating-point Equal (FEQ).
pub const FEQ: u32 = 0b010;

/// Move to integer register (FMV.X.W / FMV.X.D).
pub const FMV: u32 = 0b000;
/// Floating-point Classify (FCLASS).
pub const FCLASS: u32 = 0b001;

/// Width code for 32-bit FP loads and stores (FLW/FSW).
pub const WIDTH_WORD: u32 = 0b010;
/// Width code for 64-bit FP loads and stores (FLD/FSD).
pub const WIDTH_DOUBLE: u32 = 0b011;
