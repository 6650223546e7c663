//! Synchronous exception causes.
//!
//! This module defines the exception causes the M/F/D semantic functions
//! can observe or report. It provides:
//! 1. **Cause Codes:** The `mcause` encodings fixed by the RISC-V Privileged Specification.
//! 2. **Error Integration:** Standard `Display` and `Error` implementations for host-level reporting.
//!
//! Only the floating-point load/store path produces traps in this crate;
//! the translation and memory interfaces return one of these causes and
//! the trap finish helper records it together with the faulting effective
//! address. Illegal encodings are not exceptions here: they are reported
//! through the `Outcome` value so the host can try the next instruction
//! family before raising its own illegal-instruction trap.

use std::fmt;

/// Synchronous exception cause.
///
/// The discriminants are the `mcause` codes mandated by the RISC-V
/// Privileged Specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum Exception {
    /// Illegal instruction (cause 2).
    IllegalInstruction = 2,

    /// Load address misaligned (cause 4).
    LoadAddressMisaligned = 4,

    /// Load access fault (cause 5).
    LoadAccessFault = 5,

    /// Store/AMO address misaligned (cause 6).
    StoreAddressMisaligned = 6,

    /// Store/AMO access fault (cause 7).
    StoreAccessFault = 7,

    /// Load page fault (cause 13).
    LoadPageFault = 13,

    /// Store/AMO page fault (cause 15).
    StorePageFault = 15,
}

impl Exception {
    /// Returns the `mcause` code for this exception.
    #[inline]
    pub fn code(self) -> u64 {
        self as u64
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Exception::IllegalInstruction => "IllegalInstruction",
            Exception::LoadAddressMisaligned => "LoadAddressMisaligned",
            Exception::LoadAccessFault => "LoadAccessFault",
            Exception::StoreAddressMisaligned => "StoreAddressMisaligned",
            Exception::StoreAccessFault => "StoreAccessFault",
            Exception::LoadPageFault => "LoadPageFault",
            Exception::StorePageFault => "StorePageFault",
        };
        write!(f, "{} (cause {})", name, self.code())
    }
}

impl std::error::Error for Exception {}
