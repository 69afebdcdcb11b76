//! RV32I instruction set definitions: formats, mnemonics, and bit packing.

pub mod format;
mod mnemonic;

pub use mnemonic::{Format, Mnemonic};
