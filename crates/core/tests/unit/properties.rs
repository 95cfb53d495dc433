//! Properties that hold for every 32-bit word.
//!
//! Decoding is total and deterministic, the rendered text is never empty, and the
//! classification flags never contradict each other.

use mipsdis_core::config::Config;
use mipsdis_core::isa::abi::RegisterFile;
use mipsdis_core::{InstrCategory, InstrId, Instruction};
use proptest::prelude::*;

fn arb_category() -> impl Strategy<Value = InstrCategory> {
    prop::sample::select(InstrCategory::ALL.to_vec())
}

/// Words biased toward the dense coprocessor and SPECIAL encodings.
fn arb_word() -> impl Strategy<Value = u32> {
    prop_oneof![
        any::<u32>(),
        0u32..0x0400_0000,
        (0u32..0x0400_0000).prop_map(|low| 0x4000_0000 | low),
        (0u32..0x0400_0000).prop_map(|low| 0x4400_0000 | low),
        (0u32..0x0400_0000).prop_map(|low| 0x4800_0000 | low),
        (0u32..0x0400_0000).prop_map(|low| 0xC800_0000 | low),
    ]
}

proptest! {
    #[test]
    fn decoding_is_deterministic(word in arb_word(), vram in any::<u32>(), category in arb_category()) {
        let a = Instruction::new(word, vram, category);
        let b = Instruction::new(word, 0, category);
        prop_assert_eq!(a.id(), b.id());
        prop_assert_eq!(a.id_type(), b.id_type());
        prop_assert_eq!(a.word(), word);
    }

    #[test]
    fn rendering_is_never_empty(word in arb_word(), vram in any::<u32>(), category in arb_category()) {
        let config = Config::default();
        let instr = Instruction::new(word, vram, category);
        let text = instr.disassemble_with(&config, None, None);
        prop_assert!(!text.is_empty());
        prop_assert_eq!(&text, &instr.disassemble_with(&config, None, None));
        if !instr.is_valid() {
            prop_assert!(text.starts_with(".word"));
        }
    }

    #[test]
    fn flags_are_consistent(word in arb_word(), category in arb_category()) {
        let instr = Instruction::new(word, 0, category);
        prop_assert!(!(instr.is_branch() && instr.is_jump()));
        prop_assert!(!(instr.does_load() && instr.does_store()));
        if instr.does_dereference() {
            prop_assert!(instr.access_type().size() > 0);
        }
        if instr.is_branch() {
            prop_assert!(instr.branch_vram().is_some());
        }
        if instr.is_jump_with_address() {
            prop_assert!(instr.instr_index_as_vram().is_some());
        }
        if instr.is_function_call() {
            prop_assert!(instr.modifies_register(RegisterFile::Gpr));
        }
    }

    #[test]
    fn invalid_means_no_flags(word in arb_word(), category in arb_category()) {
        let instr = Instruction::new(word, 0, category);
        if instr.id() == InstrId::Invalid {
            prop_assert!(instr.id_type().is_invalid());
            prop_assert!(instr.entry().flags.is_empty());
            prop_assert!(instr.entry().operands.is_empty());
        } else {
            prop_assert!(!instr.id_type().is_invalid());
        }
    }

    #[test]
    fn r3000_accepts_a_subset_of_the_cpu(word in arb_word()) {
        let gte = Instruction::new(word, 0, InstrCategory::R3000Gte);
        let cpu = Instruction::new(word, 0, InstrCategory::Cpu);
        // outside COP0 exceptions and COP2, an R3000 instruction is also a CPU one
        let opcode = gte.get_opcode();
        if gte.is_valid() && opcode != 0x10 && opcode != 0x12 {
            prop_assert_eq!(gte.id(), cpu.id());
        }
    }
}
