#![no_main]

use libfuzzer_sys::fuzz_target;
use rvgen::isa::format;
use rvgen::{Mnemonic, Synthesizer};

fuzz_target!(|seed: u64| {
    let mut synth = Synthesizer::new(seed);

    for _ in 0..64 {
        let inst = synth.synthesize();

        // The rendered mnemonic must exist in the catalog and agree with
        // the word's opcode.
        let name = inst.asm.split(' ').next().unwrap_or("");
        let mnemonic = Mnemonic::ALL
            .iter()
            .find(|m| m.name() == name)
            .unwrap_or_else(|| panic!("unknown mnemonic in {:?}", inst.asm));
        assert_eq!(format::opcode(inst.word), mnemonic.opcode());

        // Control-flow offsets are always even.
        match format::opcode(inst.word) {
            0b110_0011 => assert_eq!(format::b_imm(inst.word) & 1, 0),
            0b110_1111 => assert_eq!(format::j_imm(inst.word) & 1, 0),
            _ => {}
        }
    }
});
