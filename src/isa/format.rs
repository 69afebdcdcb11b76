//! RV32I instruction format packing and field extraction.
//!
//! The cast warnings below are intentionally allowed because RISC-V encoding
//! requires deliberate signed/unsigned reinterpretation of 32-bit values.

#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

/// Pack an R-type instruction.
///
/// Layout: `funct7[31:25] | rs2[24:20] | rs1[19:15] | funct3[14:12] | rd[11:7] | opcode[6:0]`
///
/// Every field is masked to its width before packing, so the function is
/// total: out-of-range inputs are silently truncated rather than rejected.
#[must_use]
pub fn encode_r(funct7: u32, rs2: u32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    ((funct7 & 0x7F) << 25)
        | ((rs2 & 0x1F) << 20)
        | ((rs1 & 0x1F) << 15)
        | ((funct3 & 0x07) << 12)
        | ((rd & 0x1F) << 7)
        | (opcode & 0x7F)
}

/// Pack an I-type instruction.
///
/// Layout: `imm[31:20] | rs1[19:15] | funct3[14:12] | rd[11:7] | opcode[6:0]`
#[must_use]
pub fn encode_i(imm: i32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    (((imm as u32) & 0xFFF) << 20)
        | ((rs1 & 0x1F) << 15)
        | ((funct3 & 0x07) << 12)
        | ((rd & 0x1F) << 7)
        | (opcode & 0x7F)
}

/// Pack an S-type instruction.
///
/// Layout: `imm[11:5] at [31:25] | rs2[24:20] | rs1[19:15] | funct3[14:12] | imm[4:0] at [11:7] | opcode[6:0]`
#[must_use]
pub fn encode_s(imm: i32, rs2: u32, rs1: u32, funct3: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    let imm11_5 = (imm >> 5) & 0x7F;
    let imm4_0 = imm & 0x1F;

    (imm11_5 << 25)
        | ((rs2 & 0x1F) << 20)
        | ((rs1 & 0x1F) << 15)
        | ((funct3 & 0x07) << 12)
        | (imm4_0 << 7)
        | (opcode & 0x7F)
}

/// Pack a B-type instruction.
///
/// Layout: `imm[12|10:5] at [31:25] | rs2[24:20] | rs1[19:15] | funct3[14:12] | imm[4:1|11] at [11:7] | opcode[6:0]`
///
/// Bit 0 of the offset is never placed in the word; the architecture defines
/// branch targets as 2-byte aligned.
#[must_use]
pub fn encode_b(imm: i32, rs2: u32, rs1: u32, funct3: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    let imm12 = (imm >> 12) & 0x1;
    let imm11 = (imm >> 11) & 0x1;
    let imm10_5 = (imm >> 5) & 0x3F;
    let imm4_1 = (imm >> 1) & 0xF;

    (imm12 << 31)
        | (imm10_5 << 25)
        | ((rs2 & 0x1F) << 20)
        | ((rs1 & 0x1F) << 15)
        | ((funct3 & 0x07) << 12)
        | (imm4_1 << 8)
        | (imm11 << 7)
        | (opcode & 0x7F)
}

/// Pack a U-type instruction.
///
/// Layout: `imm[31:12] | rd[11:7] | opcode[6:0]`
#[must_use]
pub fn encode_u(imm: u32, rd: u32, opcode: u32) -> u32 {
    ((imm & 0xF_FFFF) << 12) | ((rd & 0x1F) << 7) | (opcode & 0x7F)
}

/// Pack a J-type instruction.
///
/// Layout: `imm[20|10:1|11|19:12] at [31:12] | rd[11:7] | opcode[6:0]`
///
/// As with B-type, bit 0 of the offset is implicitly zero and never encoded.
#[must_use]
pub fn encode_j(imm: i32, rd: u32, opcode: u32) -> u32 {
    let imm = imm as u32;
    let imm20 = (imm >> 20) & 0x1;
    let imm19_12 = (imm >> 12) & 0xFF;
    let imm11 = (imm >> 11) & 0x1;
    let imm10_1 = (imm >> 1) & 0x3FF;

    (imm20 << 31)
        | (imm10_1 << 21)
        | (imm11 << 20)
        | (imm19_12 << 12)
        | ((rd & 0x1F) << 7)
        | (opcode & 0x7F)
}

// ==================== Field Extractors ====================
//
// Exact inverses of the packers above, used to verify round-trips and to
// inspect synthesized words.

/// Extract the major opcode (bits [6:0]).
#[must_use]
pub fn opcode(word: u32) -> u32 {
    word & 0x7F
}

/// Extract the destination register index (bits [11:7]).
#[must_use]
pub fn rd(word: u32) -> u32 {
    (word >> 7) & 0x1F
}

/// Extract the funct3 sub-opcode (bits [14:12]).
#[must_use]
pub fn funct3(word: u32) -> u32 {
    (word >> 12) & 0x07
}

/// Extract the first source register index (bits [19:15]).
#[must_use]
pub fn rs1(word: u32) -> u32 {
    (word >> 15) & 0x1F
}

/// Extract the second source register index (bits [24:20]).
#[must_use]
pub fn rs2(word: u32) -> u32 {
    (word >> 20) & 0x1F
}

/// Extract the funct7 sub-opcode (bits [31:25]).
#[must_use]
pub fn funct7(word: u32) -> u32 {
    word >> 25
}

/// Extract the I-type immediate (12-bit, sign-extended).
#[must_use]
pub fn i_imm(word: u32) -> i32 {
    (word as i32) >> 20
}

/// Extract the shift amount from a shift-immediate instruction (bits [24:20]).
#[must_use]
pub fn shamt(word: u32) -> u32 {
    (word >> 20) & 0x1F
}

/// Extract the S-type immediate (12-bit, sign-extended).
#[must_use]
pub fn s_imm(word: u32) -> i32 {
    let imm11_5 = (word >> 25) & 0x7F;
    let imm4_0 = (word >> 7) & 0x1F;
    let imm = (imm11_5 << 5) | imm4_0;
    // Sign-extend from bit 11
    ((imm as i32) << 20) >> 20
}

/// Extract the B-type immediate (13-bit, sign-extended, bit 0 always 0).
#[must_use]
pub fn b_imm(word: u32) -> i32 {
    let imm12 = (word >> 31) & 0x1;
    let imm11 = (word >> 7) & 0x1;
    let imm10_5 = (word >> 25) & 0x3F;
    let imm4_1 = (word >> 8) & 0xF;
    let imm = (imm12 << 12) | (imm11 << 11) | (imm10_5 << 5) | (imm4_1 << 1);
    // Sign-extend from bit 12
    ((imm as i32) << 19) >> 19
}

/// Extract the U-type immediate as the raw 20-bit field (bits [31:12]).
#[must_use]
pub fn u_imm(word: u32) -> u32 {
    (word >> 12) & 0xF_FFFF
}

/// Extract the J-type immediate (21-bit, sign-extended, bit 0 always 0).
#[must_use]
pub fn j_imm(word: u32) -> i32 {
    let imm20 = (word >> 31) & 0x1;
    let imm19_12 = (word >> 12) & 0xFF;
    let imm11 = (word >> 20) & 0x1;
    let imm10_1 = (word >> 21) & 0x3FF;
    let imm = (imm20 << 20) | (imm19_12 << 12) | (imm11 << 11) | (imm10_1 << 1);
    // Sign-extend from bit 20
    ((imm as i32) << 11) >> 11
}
