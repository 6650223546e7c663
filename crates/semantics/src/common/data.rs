//! Memory access types.
//!
//! Classifies the accesses the core hands to the host's translation and
//! memory interfaces. The classification determines which permission is
//! checked and which fault cause a failing access reports.

/// Type of memory access operation.
///
/// Floating-point loads translate and access as [`AccessType::Read`],
/// stores as [`AccessType::Write`]. [`AccessType::Fetch`] is carried for
/// interface completeness: the host uses the same translation entry point
/// for instruction fetch, which is outside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access. Requires Execute permission.
    Fetch,

    /// Data read access. Requires Read permission.
    Read,

    /// Data write access. Requires Write permission.
    Write,
}
