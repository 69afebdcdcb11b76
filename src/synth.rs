//! Random instruction generation.
//!
//! The pipeline is: pick a mnemonic uniformly from the catalog, draw the
//! registers and immediate its shape needs, pack the word through the
//! matching format encoder, and render the assembly text.

mod operands;
mod register;
mod synthesizer;

pub use operands::generate;
pub use register::Reg;
pub use synthesizer::{Synthesizer, synthesize_with};
