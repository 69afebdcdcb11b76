//! The RV32I mnemonic catalog.
//!
//! The catalog is a closed enum rather than a name-indexed table: every
//! mnemonic carries its format tag and opcode/funct constants through `match`
//! arms, so dispatch can never miss a key at runtime.

use std::fmt;

/// RISC-V major opcode constants.
pub(crate) const LOAD: u32 = 0b000_0011;
pub(crate) const STORE: u32 = 0b010_0011;
pub(crate) const BRANCH: u32 = 0b110_0011;
pub(crate) const JALR: u32 = 0b110_0111;
pub(crate) const JAL: u32 = 0b110_1111;
pub(crate) const OP_IMM: u32 = 0b001_0011;
pub(crate) const OP: u32 = 0b011_0011;
pub(crate) const AUIPC: u32 = 0b001_0111;
pub(crate) const LUI: u32 = 0b011_0111;

/// One of the six fixed 32-bit field layouts defined by the RISC-V spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Register-register.
    R,
    /// Register-immediate (also loads, JALR, shifts).
    I,
    /// Store.
    S,
    /// Branch.
    B,
    /// Upper immediate.
    U,
    /// Jump.
    J,
}

/// An RV32I base-set mnemonic.
///
/// Exactly the 36 instructions this generator can synthesize. System
/// instructions (ECALL, EBREAK, FENCE) are outside the supported set.
#[allow(missing_docs)] // Variant names are the RISC-V spec mnemonics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // U-type
    Lui,
    Auipc,

    // Jumps
    Jal,
    Jalr,

    // B-type
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,

    // Loads (I-type format)
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,

    // S-type
    Sb,
    Sh,
    Sw,

    // Immediate arithmetic
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,

    // Immediate shifts
    Slli,
    Srli,
    Srai,

    // R-type
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
}

impl Mnemonic {
    /// Every supported mnemonic, in catalog order.
    pub const ALL: [Self; 37] = [
        Self::Lui,
        Self::Auipc,
        Self::Jal,
        Self::Jalr,
        Self::Beq,
        Self::Bne,
        Self::Blt,
        Self::Bge,
        Self::Bltu,
        Self::Bgeu,
        Self::Lb,
        Self::Lh,
        Self::Lw,
        Self::Lbu,
        Self::Lhu,
        Self::Sb,
        Self::Sh,
        Self::Sw,
        Self::Addi,
        Self::Slti,
        Self::Sltiu,
        Self::Xori,
        Self::Ori,
        Self::Andi,
        Self::Slli,
        Self::Srli,
        Self::Srai,
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
    ];

    /// Assembly name, lowercase as rendered in listings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lui => "lui",
            Self::Auipc => "auipc",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Bltu => "bltu",
            Self::Bgeu => "bgeu",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Slli => "slli",
            Self::Srli => "srli",
            Self::Srai => "srai",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
        }
    }

    /// The instruction format this mnemonic encodes into.
    #[must_use]
    pub fn format(self) -> Format {
        match self {
            Self::Lui | Self::Auipc => Format::U,
            Self::Jal => Format::J,
            Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bltu | Self::Bgeu => Format::B,
            Self::Sb | Self::Sh | Self::Sw => Format::S,
            Self::Add
            | Self::Sub
            | Self::Sll
            | Self::Slt
            | Self::Sltu
            | Self::Xor
            | Self::Srl
            | Self::Sra
            | Self::Or
            | Self::And => Format::R,
            _ => Format::I,
        }
    }

    /// The 7-bit major opcode.
    #[must_use]
    pub fn opcode(self) -> u32 {
        match self {
            Self::Lui => LUI,
            Self::Auipc => AUIPC,
            Self::Jal => JAL,
            Self::Jalr => JALR,
            Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bltu | Self::Bgeu => BRANCH,
            Self::Lb | Self::Lh | Self::Lw | Self::Lbu | Self::Lhu => LOAD,
            Self::Sb | Self::Sh | Self::Sw => STORE,
            Self::Addi
            | Self::Slti
            | Self::Sltiu
            | Self::Xori
            | Self::Ori
            | Self::Andi
            | Self::Slli
            | Self::Srli
            | Self::Srai => OP_IMM,
            Self::Add
            | Self::Sub
            | Self::Sll
            | Self::Slt
            | Self::Sltu
            | Self::Xor
            | Self::Srl
            | Self::Sra
            | Self::Or
            | Self::And => OP,
        }
    }

    /// The 3-bit funct3 constant, if this mnemonic's format carries one.
    ///
    /// `None` only for LUI, AUIPC, and JAL, whose formats have no funct3
    /// field.
    #[must_use]
    pub fn funct3(self) -> Option<u32> {
        match self {
            Self::Lui | Self::Auipc | Self::Jal => None,
            Self::Jalr | Self::Beq | Self::Lb | Self::Sb | Self::Addi | Self::Add | Self::Sub => {
                Some(0b000)
            }
            Self::Bne | Self::Lh | Self::Sh | Self::Slli | Self::Sll => Some(0b001),
            Self::Lw | Self::Sw | Self::Slti | Self::Slt => Some(0b010),
            Self::Sltiu | Self::Sltu => Some(0b011),
            Self::Blt | Self::Lbu | Self::Xori | Self::Xor => Some(0b100),
            Self::Bge | Self::Lhu | Self::Srli | Self::Srai | Self::Srl | Self::Sra => Some(0b101),
            Self::Bltu | Self::Ori | Self::Or => Some(0b110),
            Self::Bgeu | Self::Andi | Self::And => Some(0b111),
        }
    }

    /// The 7-bit funct7 constant, if this mnemonic's encoding carries one.
    ///
    /// Present for R-type instructions and for the immediate shifts, where
    /// it occupies imm[11:5] and selects the logical/arithmetic variant.
    #[must_use]
    pub fn funct7(self) -> Option<u32> {
        match self {
            Self::Sub | Self::Sra | Self::Srai => Some(0b010_0000),
            Self::Slli
            | Self::Srli
            | Self::Add
            | Self::Sll
            | Self::Slt
            | Self::Sltu
            | Self::Xor
            | Self::Srl
            | Self::Or
            | Self::And => Some(0b000_0000),
            _ => None,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_36_distinct_entries() {
        let names: HashSet<&str> = Mnemonic::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(Mnemonic::ALL.len(), 36);
        assert_eq!(names.len(), 36);
    }

    #[test]
    fn test_funct3_presence_matches_format() {
        for m in Mnemonic::ALL {
            match m.format() {
                Format::U | Format::J => assert!(m.funct3().is_none(), "{m} has no funct3 field"),
                _ => assert!(m.funct3().is_some(), "{m} must carry funct3"),
            }
        }
    }

    #[test]
    fn test_funct7_only_on_r_type_and_shifts() {
        for m in Mnemonic::ALL {
            let is_shift = matches!(m, Mnemonic::Slli | Mnemonic::Srli | Mnemonic::Srai);
            let expected = m.format() == Format::R || is_shift;
            assert_eq!(m.funct7().is_some(), expected, "funct7 mismatch for {m}");
        }
    }

    #[test]
    fn test_spot_constants() {
        assert_eq!(Mnemonic::Lui.opcode(), 0b011_0111);
        assert_eq!(Mnemonic::Jal.opcode(), 0b110_1111);
        assert_eq!(Mnemonic::Beq.funct3(), Some(0b000));
        assert_eq!(Mnemonic::Bgeu.funct3(), Some(0b111));
        assert_eq!(Mnemonic::Sub.funct7(), Some(0b010_0000));
        assert_eq!(Mnemonic::Srai.funct7(), Some(0b010_0000));
        assert_eq!(Mnemonic::Srli.funct7(), Some(0b000_0000));
    }

    #[test]
    fn test_display_is_lowercase_name() {
        assert_eq!(Mnemonic::Sltiu.to_string(), "sltiu");
        assert_eq!(Mnemonic::Auipc.to_string(), "auipc");
    }
}
