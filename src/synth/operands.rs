//! Per-shape operand and immediate generators.
//!
//! One generator per instruction shape family. Each draws the registers the
//! shape needs, draws an immediate from the shape's legal range, fixes the
//! opcode/funct constants from the mnemonic catalog, packs the word through
//! exactly one format encoder, and renders the assembly text in the standard
//! operand order.

use rand::Rng;

use crate::EncodedInstruction;
use crate::synth::register::Reg;
use crate::isa::{Mnemonic, format};

/// Inclusive bounds of a signed 12-bit immediate.
const IMM12_MIN: i32 = -(1 << 11);
const IMM12_MAX: i32 = (1 << 11) - 1;

/// Inclusive bounds of a signed 21-bit jump offset.
const JUMP_MIN: i32 = -(1 << 20);
const JUMP_MAX: i32 = (1 << 20) - 1;

/// Largest unsigned 20-bit upper immediate.
const UIMM20_MAX: u32 = (1 << 20) - 1;

/// Clear the low bit of a branch or jump offset.
///
/// B and J layouts never encode bit 0, so the offset is forced even before
/// rendering to keep the text and the packed word in agreement.
fn align_even(offset: i32) -> i32 {
    offset & !1
}

/// Synthesize the operands for `m` and produce a complete instruction.
///
/// Dispatches to the shape family the mnemonic belongs to. Registers may
/// alias freely; draws are independent between calls.
pub fn generate<R: Rng>(rng: &mut R, m: Mnemonic) -> EncodedInstruction {
    match m {
        Mnemonic::Lui | Mnemonic::Auipc => upper(rng, m),
        Mnemonic::Jal => jump(rng, m),
        Mnemonic::Jalr => jump_register(rng, m),
        Mnemonic::Beq
        | Mnemonic::Bne
        | Mnemonic::Blt
        | Mnemonic::Bge
        | Mnemonic::Bltu
        | Mnemonic::Bgeu => branch(rng, m),
        Mnemonic::Lb | Mnemonic::Lh | Mnemonic::Lw | Mnemonic::Lbu | Mnemonic::Lhu => load(rng, m),
        Mnemonic::Sb | Mnemonic::Sh | Mnemonic::Sw => store(rng, m),
        Mnemonic::Addi
        | Mnemonic::Slti
        | Mnemonic::Sltiu
        | Mnemonic::Xori
        | Mnemonic::Ori
        | Mnemonic::Andi => immediate_arith(rng, m),
        Mnemonic::Slli | Mnemonic::Srli | Mnemonic::Srai => shift_immediate(rng, m),
        Mnemonic::Add
        | Mnemonic::Sub
        | Mnemonic::Sll
        | Mnemonic::Slt
        | Mnemonic::Sltu
        | Mnemonic::Xor
        | Mnemonic::Srl
        | Mnemonic::Sra
        | Mnemonic::Or
        | Mnemonic::And => register_register(rng, m),
    }
}

/// LUI, AUIPC: rd plus an unsigned 20-bit immediate.
fn upper<R: Rng>(rng: &mut R, m: Mnemonic) -> EncodedInstruction {
    let rd = Reg::random(rng);
    let imm = rng.gen_range(0..=UIMM20_MAX);

    let word = format::encode_u(imm, rd.index(), m.opcode());

    EncodedInstruction {
        asm: format!("{m} {rd}, {imm}"),
        word,
    }
}

/// JAL: rd plus a signed 21-bit offset.
///
/// The offset is forced even before rendering, matching the branch
/// generator, so the displayed offset always equals the encoded one.
fn jump<R: Rng>(rng: &mut R, m: Mnemonic) -> EncodedInstruction {
    let rd = Reg::random(rng);
    let offset = align_even(rng.gen_range(JUMP_MIN..=JUMP_MAX));

    let word = format::encode_j(offset, rd.index(), m.opcode());

    EncodedInstruction {
        asm: format!("{m} {rd}, {offset}"),
        word,
    }
}

/// JALR: rd, rs1, and a signed 12-bit offset.
fn jump_register<R: Rng>(rng: &mut R, m: Mnemonic) -> EncodedInstruction {
    let rd = Reg::random(rng);
    let rs1 = Reg::random(rng);
    let offset = rng.gen_range(IMM12_MIN..=IMM12_MAX);

    let word = format::encode_i(
        offset,
        rs1.index(),
        m.funct3().unwrap_or(0),
        rd.index(),
        m.opcode(),
    );

    EncodedInstruction {
        asm: format!("{m} {rd}, {rs1}, {offset}"),
        word,
    }
}

/// BEQ, BNE, BLT, BGE, BLTU, BGEU: rs1, rs2, and an even signed 12-bit offset.
fn branch<R: Rng>(rng: &mut R, m: Mnemonic) -> EncodedInstruction {
    let rs1 = Reg::random(rng);
    let rs2 = Reg::random(rng);
    let offset = align_even(rng.gen_range(IMM12_MIN..=IMM12_MAX));

    let word = format::encode_b(
        offset,
        rs2.index(),
        rs1.index(),
        m.funct3().unwrap_or(0),
        m.opcode(),
    );

    EncodedInstruction {
        asm: format!("{m} {rs1}, {rs2}, {offset}"),
        word,
    }
}

/// LB, LH, LW, LBU, LHU: rd and a signed 12-bit offset off a base register.
fn load<R: Rng>(rng: &mut R, m: Mnemonic) -> EncodedInstruction {
    let rd = Reg::random(rng);
    let rs1 = Reg::random(rng);
    let offset = rng.gen_range(IMM12_MIN..=IMM12_MAX);

    let word = format::encode_i(
        offset,
        rs1.index(),
        m.funct3().unwrap_or(0),
        rd.index(),
        m.opcode(),
    );

    EncodedInstruction {
        asm: format!("{m} {rd}, {offset}({rs1})"),
        word,
    }
}

/// SB, SH, SW: a source register stored at a signed 12-bit offset off a base.
fn store<R: Rng>(rng: &mut R, m: Mnemonic) -> EncodedInstruction {
    let rs1 = Reg::random(rng);
    let rs2 = Reg::random(rng);
    let offset = rng.gen_range(IMM12_MIN..=IMM12_MAX);

    let word = format::encode_s(
        offset,
        rs2.index(),
        rs1.index(),
        m.funct3().unwrap_or(0),
        m.opcode(),
    );

    EncodedInstruction {
        asm: format!("{m} {rs2}, {offset}({rs1})"),
        word,
    }
}

/// ADDI, SLTI, SLTIU, XORI, ORI, ANDI: rd, rs1, and a signed 12-bit immediate.
fn immediate_arith<R: Rng>(rng: &mut R, m: Mnemonic) -> EncodedInstruction {
    let rd = Reg::random(rng);
    let rs1 = Reg::random(rng);
    let imm = rng.gen_range(IMM12_MIN..=IMM12_MAX);

    let word = format::encode_i(
        imm,
        rs1.index(),
        m.funct3().unwrap_or(0),
        rd.index(),
        m.opcode(),
    );

    EncodedInstruction {
        asm: format!("{m} {rd}, {rs1}, {imm}"),
        word,
    }
}

/// SLLI, SRLI, SRAI: rd, rs1, and a 5-bit shift amount.
///
/// The funct7 variant selector occupies imm[11:5] alongside the shift
/// amount in imm[4:0].
fn shift_immediate<R: Rng>(rng: &mut R, m: Mnemonic) -> EncodedInstruction {
    let rd = Reg::random(rng);
    let rs1 = Reg::random(rng);
    let shamt = rng.gen_range(0..32_u32);

    #[allow(clippy::cast_possible_wrap)]
    let imm = ((m.funct7().unwrap_or(0) << 5) | shamt) as i32;
    let word = format::encode_i(
        imm,
        rs1.index(),
        m.funct3().unwrap_or(0),
        rd.index(),
        m.opcode(),
    );

    EncodedInstruction {
        asm: format!("{m} {rd}, {rs1}, {shamt}"),
        word,
    }
}

/// ADD through AND: rd, rs1, rs2, no immediate.
fn register_register<R: Rng>(rng: &mut R, m: Mnemonic) -> EncodedInstruction {
    let rd = Reg::random(rng);
    let rs1 = Reg::random(rng);
    let rs2 = Reg::random(rng);

    let word = format::encode_r(
        m.funct7().unwrap_or(0),
        rs2.index(),
        rs1.index(),
        m.funct3().unwrap_or(0),
        rd.index(),
        m.opcode(),
    );

    EncodedInstruction {
        asm: format!("{m} {rd}, {rs1}, {rs2}"),
        word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0xC0FFEE)
    }

    #[test]
    fn test_align_even_clears_low_bit() {
        assert_eq!(align_even(7), 6);
        assert_eq!(align_even(6), 6);
        assert_eq!(align_even(0), 0);
        assert_eq!(align_even(-1), -2);
        assert_eq!(align_even(-2048), -2048);
    }

    #[test]
    fn test_upper_immediate_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let inst = generate(&mut rng, Mnemonic::Lui);
            assert_eq!(format::opcode(inst.word), 0b011_0111);
            assert!(format::u_imm(inst.word) <= 0xF_FFFF);
            assert!(inst.asm.starts_with("lui x"));
        }
    }

    #[test]
    fn test_branch_offsets_are_even_and_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let inst = generate(&mut rng, Mnemonic::Bne);
            let off = format::b_imm(inst.word);
            assert_eq!(off & 1, 0, "branch offset must be even");
            assert!((-2048..=2046).contains(&off));
            assert_eq!(format::funct3(inst.word), 0b001);
        }
    }

    #[test]
    fn test_branch_text_matches_encoded_offset() {
        let mut rng = rng();
        for _ in 0..200 {
            let inst = generate(&mut rng, Mnemonic::Beq);
            let rendered: i32 = inst
                .asm
                .rsplit(' ')
                .next()
                .and_then(|t| t.parse().ok())
                .expect("branch text ends with the offset");
            assert_eq!(rendered, format::b_imm(inst.word));
        }
    }

    #[test]
    fn test_jal_offset_even_and_text_consistent() {
        let mut rng = rng();
        for _ in 0..500 {
            let inst = generate(&mut rng, Mnemonic::Jal);
            let off = format::j_imm(inst.word);
            assert_eq!(off & 1, 0, "jal offset must be even");
            assert!((JUMP_MIN..=JUMP_MAX).contains(&off));
            let rendered: i32 = inst
                .asm
                .rsplit(' ')
                .next()
                .and_then(|t| t.parse().ok())
                .expect("jal text ends with the offset");
            assert_eq!(rendered, off, "rendered and encoded offsets must agree");
        }
    }

    #[test]
    fn test_load_renders_offset_base_syntax() {
        let mut rng = rng();
        let inst = generate(&mut rng, Mnemonic::Lw);
        assert!(inst.asm.starts_with("lw x"));
        assert!(inst.asm.contains('(') && inst.asm.ends_with(')'));
        assert_eq!(format::opcode(inst.word), 0b000_0011);
        assert_eq!(format::funct3(inst.word), 0b010);
    }

    #[test]
    fn test_store_renders_source_then_offset_base() {
        let mut rng = rng();
        for _ in 0..200 {
            let inst = generate(&mut rng, Mnemonic::Sh);
            assert_eq!(format::opcode(inst.word), 0b010_0011);
            assert!((-2048..=2047).contains(&format::s_imm(inst.word)));
            // "sh x<rs2>, <off>(x<rs1>)"
            let operands = inst.asm.strip_prefix("sh ").expect("sh mnemonic");
            let rs2_text: u32 = operands
                .split(',')
                .next()
                .and_then(|t| t.strip_prefix('x'))
                .and_then(|t| t.parse().ok())
                .expect("first operand is rs2");
            assert_eq!(rs2_text, format::rs2(inst.word));
        }
    }

    #[test]
    fn test_immediate_arith_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let inst = generate(&mut rng, Mnemonic::Andi);
            assert!((-2048..=2047).contains(&format::i_imm(inst.word)));
            assert_eq!(format::funct3(inst.word), 0b111);
        }
    }

    #[test]
    fn test_shift_variants_set_funct7() {
        let mut rng = rng();
        for _ in 0..200 {
            let srai = generate(&mut rng, Mnemonic::Srai);
            assert_eq!(format::funct7(srai.word), 0b010_0000);
            assert!(format::shamt(srai.word) < 32);

            let srli = generate(&mut rng, Mnemonic::Srli);
            assert_eq!(format::funct7(srli.word), 0b000_0000);
            assert_eq!(format::funct3(srli.word), 0b101);
        }
    }

    #[test]
    fn test_register_register_fields() {
        let mut rng = rng();
        for _ in 0..200 {
            let inst = generate(&mut rng, Mnemonic::Sub);
            assert_eq!(format::opcode(inst.word), 0b011_0011);
            assert_eq!(format::funct3(inst.word), 0b000);
            assert_eq!(format::funct7(inst.word), 0b010_0000);
            assert!(format::rd(inst.word) < 32);
            assert!(format::rs1(inst.word) < 32);
            assert!(format::rs2(inst.word) < 32);
        }
    }

    #[test]
    fn test_jalr_funct3_zero() {
        let mut rng = rng();
        let inst = generate(&mut rng, Mnemonic::Jalr);
        assert_eq!(format::opcode(inst.word), 0b110_0111);
        assert_eq!(format::funct3(inst.word), 0);
        assert!(inst.asm.starts_with("jalr x"));
    }
}
