//! Architectural register selection.

use rand::Rng;
use std::fmt;

/// One of the 32 general-purpose integer registers, `x0`..`x31`.
///
/// The generator treats `x0` like any other register: the hard-wired-zero
/// semantics belong to execution, not to encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reg(u8);

impl Reg {
    /// Wrap a register index. Indices above 31 are masked into range.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index & 0x1F)
    }

    /// Draw one register uniformly from the 32-entry file.
    ///
    /// `gen_range` samples without modulo bias, so each register has
    /// probability exactly 1/32.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..32))
    }

    /// The register index as an encoder field value.
    #[must_use]
    pub fn index(self) -> u32 {
        u32::from(self.0)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}
