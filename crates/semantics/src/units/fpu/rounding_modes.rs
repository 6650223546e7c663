//! Floating-point rounding mode support.
//!
//! RISC-V defines five rounding modes (spec §11.2):
//!
//! | Value | Mode | Description                          |
//! |-------|------|--------------------------------------|
//! | 0b000 | RNE  | Round to Nearest, ties to Even       |
//! | 0b001 | RTZ  | Round towards Zero                   |
//! | 0b010 | RDN  | Round Down (towards -inf)            |
//! | 0b011 | RUP  | Round Up (towards +inf)              |
//! | 0b100 | RMM  | Round to Nearest, ties to Max Magnitude |
//!
//! The instruction's `rm` field either names one of these statically or
//! holds the dynamic sentinel 0b111, deferring to the `frm` CSR.
//! [`RoundingMode::resolve`] performs that resolution; a reserved
//! encoding in either place makes the instruction illegal.

use softfloat_wrapper::RoundingMode as SoftRoundingMode;

/// Dynamic rounding mode sentinel in the instruction's `rm` field.
pub const DYN: u32 = 0b111;

/// RISC-V rounding mode encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even (default IEEE mode).
    Rne = 0b000,
    /// Round towards Zero.
    Rtz = 0b001,
    /// Round Down (towards negative infinity).
    Rdn = 0b010,
    /// Round Up (towards positive infinity).
    Rup = 0b011,
    /// Round to Nearest, ties to Max Magnitude.
    Rmm = 0b100,
}

impl RoundingMode {
    /// Decodes a 3-bit rounding mode field.
    ///
    /// Returns `None` for the reserved encodings (0b101, 0b110) and the
    /// dynamic sentinel (0b111), which must be resolved against `frm` by
    /// the caller.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::Rne),
            0b001 => Some(Self::Rtz),
            0b010 => Some(Self::Rdn),
            0b011 => Some(Self::Rup),
            0b100 => Some(Self::Rmm),
            _ => None, // 0b101, 0b110 reserved; 0b111 = dynamic
        }
    }

    /// Resolves an instruction `rm` field against the current `frm` CSR.
    ///
    /// Static modes resolve to themselves; the dynamic sentinel resolves
    /// to `frm`. Returns `None` when the instruction is illegal: a
    /// reserved `rm` encoding, or the dynamic sentinel over a reserved
    /// `frm` value.
    pub fn resolve(rm_field: u32, frm: u64) -> Option<Self> {
        if rm_field == DYN {
            Self::from_bits(frm as u32)
        } else {
            Self::from_bits(rm_field)
        }
    }

    /// Translates to the softfloat backend's rounding mode.
    pub fn to_softfloat(self) -> SoftRoundingMode {
        match self {
            Self::Rne => SoftRoundingMode::TiesToEven,
            Self::Rtz => SoftRoundingMode::TowardZero,
            Self::Rdn => SoftRoundingMode::TowardNegative,
            Self::Rup => SoftRoundingMode::TowardPositive,
            Self::Rmm => SoftRoundingMode::TiesToAway,
        }
    }
}
