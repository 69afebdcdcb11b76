// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Rvgen: a random RV32I instruction generator.
//!
//! This crate synthesizes syntactically valid, randomly parameterized RV32I
//! instructions, producing both the rendered assembly text and the packed
//! 32-bit encoding. It is a building block for fuzzing RISC-V decoders,
//! assemblers, and simulators with varied but spec-conformant bit patterns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       Instruction Synthesizer       │
//! ├─────────────────────────────────────┤
//! │   Operand / Immediate Generators    │
//! ├─────────────────────────────────────┤
//! │  Mnemonic Catalog │ Format Encoders │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use rvgen::Synthesizer;
//!
//! let mut synth = Synthesizer::new(42);
//! let inst = synth.synthesize();
//! println!("{}\n{:x}", inst.asm, inst.word);
//! ```

pub mod isa;
pub mod synth;

use serde::{Deserialize, Serialize};

// Re-export key types at crate root for convenience
pub use isa::{Format, Mnemonic};
pub use synth::{Reg, Synthesizer, synthesize_with};

/// A synthesized instruction: rendered assembly plus the packed encoding.
///
/// Created once per synthesis call and handed to the caller; the two fields
/// always describe the same instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedInstruction {
    /// Assembly rendering, e.g. `addi x1, x0, 5`.
    pub asm: String,
    /// The 32-bit packed encoding of the same instruction.
    pub word: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_instruction_serializes() {
        let inst = EncodedInstruction {
            asm: "addi x1, x0, 5".to_string(),
            word: 0x00500093,
        };
        let json = serde_json::to_string(&inst).unwrap();
        assert!(json.contains("addi x1, x0, 5"));
        let back: EncodedInstruction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inst);
    }
}
