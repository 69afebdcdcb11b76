//! Uniform-random instruction synthesis.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::EncodedInstruction;
use crate::synth::operands;
use crate::isa::Mnemonic;

/// Synthesize one instruction from a caller-supplied random source.
///
/// Picks a mnemonic uniformly from the 36-entry catalog and dispatches to
/// its operand generator. Total: there is no error path.
pub fn synthesize_with<R: Rng>(rng: &mut R) -> EncodedInstruction {
    let m = Mnemonic::ALL[rng.gen_range(0..Mnemonic::ALL.len())];
    operands::generate(rng, m)
}

/// A seeded instruction synthesizer that owns its random source.
///
/// The source is explicit rather than ambient: two synthesizers built from
/// the same seed produce identical instruction sequences, and independent
/// synthesizers can run on separate threads without sharing state.
#[derive(Debug)]
pub struct Synthesizer {
    rng: SmallRng,
}

impl Synthesizer {
    /// Create a synthesizer seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Synthesize the next instruction in this synthesizer's sequence.
    pub fn synthesize(&mut self) -> EncodedInstruction {
        synthesize_with(&mut self.rng)
    }
}
