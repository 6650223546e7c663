//! Floating-point exception (accrued) flags.
//!
//! RISC-V defines five exception flags in `fflags` (spec §11.2):
//!
//! | Bit | Flag | Description         |
//! |-----|------|---------------------|
//! |  4  | NV   | Invalid Operation   |
//! |  3  | DZ   | Divide by Zero      |
//! |  2  | OF   | Overflow            |
//! |  1  | UF   | Underflow           |
//! |  0  | NX   | Inexact             |
//!
//! Flags accrue: execution only ever ORs bits into `fflags`, never clears
//! them. Floating-point exceptions do not trap in this crate; the host
//! decides what to make of the accrued state.

use std::ops::BitOr;

use softfloat_wrapper::ExceptionFlags;

/// Floating-point exception flags (RISC-V `fflags`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FpFlags(u8);

impl FpFlags {
    /// No exceptions raised.
    pub const NONE: Self = Self(0);
    /// Invalid Operation.
    pub const NV: Self = Self(1 << 4);
    /// Divide by Zero.
    pub const DZ: Self = Self(1 << 3);
    /// Overflow.
    pub const OF: Self = Self(1 << 2);
    /// Underflow.
    pub const UF: Self = Self(1 << 1);
    /// Inexact.
    pub const NX: Self = Self(1 << 0);

    /// Collects the flags an operation raised in the softfloat backend.
    pub fn from_softfloat(raised: &ExceptionFlags) -> Self {
        let mut flags = Self::NONE;
        if raised.is_invalid() {
            flags = flags | Self::NV;
        }
        if raised.is_infinite() {
            flags = flags | Self::DZ;
        }
        if raised.is_overflow() {
            flags = flags | Self::OF;
        }
        if raised.is_underflow() {
            flags = flags | Self::UF;
        }
        if raised.is_inexact() {
            flags = flags | Self::NX;
        }
        flags
    }

    /// Returns the raw 5-bit flag value for ORing into `fflags`.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no flags are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for FpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
