#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rvgen::isa::format;

/// Raw, unconstrained field values for the format encoders.
#[derive(Arbitrary, Debug)]
struct EncodeInput {
    funct7: u32,
    rs2: u32,
    rs1: u32,
    funct3: u32,
    rd: u32,
    opcode: u32,
    imm: i32,
    uimm: u32,
}

fuzz_target!(|input: EncodeInput| {
    // Encoders are total: any input must produce a word whose extracted
    // fields equal the masked inputs. No panics, no error paths.
    let r = format::encode_r(
        input.funct7,
        input.rs2,
        input.rs1,
        input.funct3,
        input.rd,
        input.opcode,
    );
    assert_eq!(format::funct7(r), input.funct7 & 0x7F);
    assert_eq!(format::rs2(r), input.rs2 & 0x1F);
    assert_eq!(format::rs1(r), input.rs1 & 0x1F);
    assert_eq!(format::funct3(r), input.funct3 & 0x07);
    assert_eq!(format::rd(r), input.rd & 0x1F);
    assert_eq!(format::opcode(r), input.opcode & 0x7F);

    // Signed immediates survive within their declared widths.
    let masked12 = (input.imm << 20) >> 20;
    let i = format::encode_i(input.imm, input.rs1, input.funct3, input.rd, input.opcode);
    assert_eq!(format::i_imm(i), masked12);

    let s = format::encode_s(input.imm, input.rs2, input.rs1, input.funct3, input.opcode);
    assert_eq!(format::s_imm(s), masked12);

    let masked13 = ((input.imm << 19) >> 19) & !1;
    let b = format::encode_b(input.imm, input.rs2, input.rs1, input.funct3, input.opcode);
    assert_eq!(format::b_imm(b), masked13);

    let u = format::encode_u(input.uimm, input.rd, input.opcode);
    assert_eq!(format::u_imm(u), input.uimm & 0xF_FFFF);

    let masked21 = ((input.imm << 11) >> 11) & !1;
    let j = format::encode_j(input.imm, input.rd, input.opcode);
    assert_eq!(format::j_imm(j), masked21);
});
