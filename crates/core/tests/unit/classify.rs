//! Classification Predicates.
//!
//! # Coverage
//!
//! - Control flow: jumps, branches, calls, returns, jump tables, delay slots.
//! - Memory: loads, stores, access widths.
//! - Register effects: field-level flags and per-file queries.
//! - The invalid sentinel answers `false` everywhere.

use mipsdis_core::common::data::AccessType;
use mipsdis_core::config::Config;
use mipsdis_core::isa::abi::RegisterFile;
use mipsdis_core::isa::operand::Operand;
use mipsdis_core::{InstrCategory, Instruction};
use rstest::rstest;

use crate::common::harness::cpu;

#[test]
fn load_word() {
    let lw = cpu(0x8C42_0000);
    assert!(lw.does_load());
    assert!(!lw.does_store());
    assert!(lw.does_dereference());
    assert_eq!(lw.access_type(), AccessType::Word);
    assert!(lw.modifies_rt());
    assert!(lw.reads_rs());
    assert!(!lw.reads_rt());
    assert_eq!(lw.destination_gpr(), Some(2));
    assert!(lw.modifies_register(RegisterFile::Gpr));
    assert!(lw.reads_register(RegisterFile::Gpr));
    assert!(!lw.modifies_register(RegisterFile::Fpr));
    assert!(lw.can_be_lo());
    assert!(!lw.is_branch() && !lw.is_jump());
}

#[test]
fn store_word() {
    let sw = cpu(0xAC42_0000);
    assert!(sw.does_store());
    assert!(!sw.does_load());
    assert!(sw.reads_rt());
    assert!(!sw.modifies_register(RegisterFile::Gpr));
    assert_eq!(sw.destination_gpr(), None);
}

#[rstest]
#[case::lbu(0x9082_0000, AccessType::Byte, true)]
#[case::lh(0x8482_0000, AccessType::Short, false)]
#[case::lwl(0x8882_0000, AccessType::WordLeft, false)]
#[case::ld(0xDC82_0000, AccessType::Doubleword, false)]
#[case::lwc1(0xC480_0000, AccessType::Float, false)]
#[case::ldc1(0xD480_0000, AccessType::DoubleFloat, false)]
fn access_widths(#[case] word: u32, #[case] access: AccessType, #[case] unsigned: bool) {
    let instr = cpu(word);
    assert!(instr.does_load());
    assert_eq!(instr.access_type(), access);
    assert_eq!(instr.does_unsigned_memory_access(), unsigned);
}

#[test]
fn jal_is_a_call_with_an_address() {
    let jal = Instruction::new(0x0C00_0010, 0x8000_1000, InstrCategory::Cpu);
    assert!(jal.is_jump());
    assert!(jal.is_jump_with_address());
    assert!(jal.is_function_call());
    assert!(jal.does_link());
    assert!(jal.has_delay_slot());
    assert!(!jal.is_branch());
    assert_eq!(jal.instr_index_as_vram(), Some(0x8000_0040));
    assert_eq!(jal.destination_gpr(), Some(31));
    assert!(jal.modifies_register(RegisterFile::Gpr));
}

#[test]
fn beq_is_a_branch() {
    let beq = Instruction::new(0x1022_0003, 0x8000_0000, InstrCategory::Cpu);
    assert!(beq.is_branch());
    assert!(!beq.is_jump());
    assert!(!beq.is_branch_likely());
    assert!(!beq.is_unconditional_branch());
    assert_eq!(beq.branch_offset(), Some(16));
    assert_eq!(beq.branch_vram(), Some(0x8000_0010));
    assert_eq!(beq.instr_index_as_vram(), None);
    assert!(beq.reads_rs() && beq.reads_rt());
}

#[test]
fn unconditional_branches() {
    assert!(cpu(0x1000_0004).is_unconditional_branch());
    // bgez $zero
    assert!(cpu(0x0401_0004).is_unconditional_branch());
    // beql is likely
    let beql = cpu(0x5022_0000);
    assert!(beql.is_branch_likely());
    assert!(beql.is_branch());
}

#[test]
fn returns_and_jump_tables() {
    let jr_ra = cpu(0x03E0_0008);
    assert!(jr_ra.is_return());
    assert!(jr_ra.is_jump());
    assert!(!jr_ra.is_jumptable_jump());
    assert!(!jr_ra.is_function_call());

    let jr_t9 = cpu(0x0320_0008);
    assert!(!jr_t9.is_return());
    assert!(jr_t9.is_jumptable_jump());

    let eret = cpu(0x4200_0018);
    assert!(eret.is_return());
    assert!(!eret.has_delay_slot());
    assert!(eret.not_emitted_by_compilers());
}

#[test]
fn jalr_links_through_rd() {
    let jalr = cpu(0x0320_F809);
    assert!(jalr.is_function_call());
    assert!(jalr.modifies_rd());
    assert!(jalr.reads_rs());
    assert_eq!(jalr.destination_gpr(), Some(31));
}

#[test]
fn hi_lo_effects() {
    // mult $a0, $a1
    let mult = cpu(0x0085_0018);
    assert!(mult.modifies_hi() && mult.modifies_lo());
    assert!(mult.modifies_register(RegisterFile::HiLo));
    assert!(!mult.reads_register(RegisterFile::HiLo));

    // mflo $v0
    let mflo = cpu(0x0000_1012);
    assert!(mflo.reads_lo());
    assert!(!mflo.reads_hi());
    assert!(mflo.reads_register(RegisterFile::HiLo));
    assert_eq!(mflo.destination_gpr(), Some(2));
}

#[test]
fn float_effects() {
    let add_s = cpu(0x4604_1000);
    assert!(add_s.is_float());
    assert!(!add_s.is_double());
    assert!(add_s.modifies_fd());
    assert!(add_s.reads_fs() && add_s.reads_ft());
    assert!(add_s.modifies_register(RegisterFile::Fpr));
    assert!(!add_s.modifies_register(RegisterFile::Gpr));

    // add.d $f0, $f2, $f4
    assert!(cpu(0x4624_1000).is_double());

    // mtc1 $a0, $f12
    let mtc1 = cpu(0x4484_6000);
    assert!(mtc1.modifies_fs());
    assert!(mtc1.reads_register(RegisterFile::Gpr));
    assert!(mtc1.modifies_register(RegisterFile::Fpr));
}

#[test]
fn coprocessor_register_files() {
    let mtc0 = cpu(0x4088_6000);
    assert!(mtc0.modifies_register(RegisterFile::Cop0));
    assert!(mtc0.reads_register(RegisterFile::Gpr));

    let cfc1 = cpu(0x4448_F800);
    assert!(cfc1.reads_register(RegisterFile::Cop1Control));
    assert!(cfc1.modifies_register(RegisterFile::Gpr));

    // generic COP2 on the CPU, GTE registers on the R3000
    let cpu_mtc2 = cpu(0x4888_6000);
    assert!(cpu_mtc2.modifies_register(RegisterFile::Cop2));
    let gte_mtc2 = Instruction::new(0x4888_6000, 0, InstrCategory::R3000Gte);
    assert!(gte_mtc2.modifies_register(RegisterFile::GteData));
    assert!(!gte_mtc2.modifies_register(RegisterFile::Cop2));
}

#[test]
fn rsp_vector_effects() {
    let vadd = Instruction::new(0x4A03_1050, 0, InstrCategory::Rsp);
    assert!(vadd.modifies_register(RegisterFile::RspVector));
    assert!(vadd.reads_register(RegisterFile::RspVector));
    assert!(!vadd.modifies_register(RegisterFile::Gpr));

    let lqv = Instruction::new(0xC881_2001, 0, InstrCategory::Rsp);
    assert!(lqv.does_load());
    assert_eq!(lqv.access_type(), AccessType::Quadword);
    assert!(lqv.modifies_register(RegisterFile::RspVector));
    assert!(lqv.reads_register(RegisterFile::Gpr));

    // sqv $v1[0], 0x0($a0)
    let sqv = Instruction::new(0xE881_2000, 0, InstrCategory::Rsp);
    assert!(sqv.does_store());
    assert!(sqv.reads_register(RegisterFile::RspVector));
}

#[rstest]
#[case::or_rt_zero(0x0080_1025, true)]
#[case::addu_rs_zero(0x0004_1021, true)]
#[case::add_rs_zero(0x0004_1020, true)]
#[case::or_both_nonzero(0x0085_1025, false)]
#[case::subu_rs_zero(0x0004_1023, false)]
fn move_candidates(#[case] word: u32, #[case] expected: bool) {
    assert_eq!(cpu(word).maybe_is_move(), expected);
}

#[test]
fn traps_and_immediates() {
    assert!(cpu(0x0085_01F4).is_trap());
    // teqi $a0, 0x5
    assert!(cpu(0x048C_0005).is_trap());
    let lui = cpu(0x3C01_8000);
    assert!(lui.is_unsigned());
    assert!(lui.can_be_hi());
    assert_eq!(lui.processed_immediate(), 0x8000);
    assert_eq!(cpu(0x27BD_FFE8).processed_immediate(), -0x18);
}

#[test]
fn writes_to_zero() {
    // addu $zero, $a0, $a1
    assert!(cpu(0x0085_0021).outputs_to_gpr_zero());
    assert!(!cpu(0x0085_1021).outputs_to_gpr_zero());
}

#[test]
fn operands_and_pseudos() {
    let lw = cpu(0x8C42_0000);
    assert!(lw.has_operand(Operand::CpuImmediateBase));
    assert!(!lw.has_operand(Operand::CpuImmediate));

    let config = Config::default();
    assert!(cpu(0x0080_1025).is_pseudo_with(&config));
    assert!(cpu(0x0000_0000).is_pseudo_with(&config));
    assert!(!lw.is_pseudo_with(&config));

    let mut off = Config::default();
    off.pseudos.enable_pseudos = false;
    assert!(!cpu(0x0080_1025).is_pseudo_with(&off));
}

#[rstest]
#[case::lui_k0(0x3C1A_8000, true)]
#[case::lw_k1_from_k0(0x8F5B_0000, true)]
#[case::eret(0x4200_0018, true)]
#[case::mfc0(0x4008_6000, true)]
#[case::unknown_word(0x0000_0001, true)]
#[case::addiu_sp(0x27BD_FFE8, false)]
#[case::addu_k0(0x0340_D021, false)]
#[case::lw(0x8C42_0000, false)]
fn handwritten_heuristic(#[case] word: u32, #[case] expected: bool) {
    assert_eq!(cpu(word).is_likely_handwritten(), expected);
}

#[rstest]
#[case::beq_forward(0x1022_0003, 0x8000_0400, Some(16), Some(0x8000_0410))]
#[case::beq_backward(0x1022_FFFF, 0x8000_0400, Some(0), Some(0x8000_0400))]
#[case::jal_backward(0x0C00_0100, 0x8000_0408, Some(-8), Some(0x8000_0400))]
#[case::j_forward(0x0800_0110, 0x8000_0400, Some(0x40), Some(0x8000_0440))]
#[case::jr_ra(0x03E0_0008, 0x8000_0400, None, None)]
#[case::lw(0x8C42_0000, 0x8000_0400, None, None)]
fn generic_targets(
    #[case] word: u32,
    #[case] vram: u32,
    #[case] offset: Option<i32>,
    #[case] target: Option<u32>,
) {
    let instr = Instruction::new(word, vram, InstrCategory::Cpu);
    assert_eq!(instr.branch_offset_generic(), offset);
    assert_eq!(instr.branch_vram_generic(), target);
    if instr.is_branch() {
        assert_eq!(instr.branch_vram_generic(), instr.branch_vram());
    }
}

#[rstest]
#[case::lw_base(0x8C42_0000, InstrCategory::Cpu, Operand::CpuRs, false, true)]
#[case::lw_offset(0x8C42_0000, InstrCategory::Cpu, Operand::CpuImmediate, false, true)]
#[case::lw_rt(0x8C42_0000, InstrCategory::Cpu, Operand::CpuRt, true, true)]
#[case::jalr_rs(0x0040_F809, InstrCategory::Cpu, Operand::CpuRs, false, true)]
#[case::jalr_rd(0x0040_F809, InstrCategory::Cpu, Operand::CpuRd, false, true)]
#[case::addu_immediate(0x0085_1021, InstrCategory::Cpu, Operand::CpuImmediate, false, false)]
#[case::vadd_vt(0x4B63_1050, InstrCategory::Rsp, Operand::RspVt, false, true)]
#[case::vadd_vd(0x4B63_1050, InstrCategory::Rsp, Operand::RspVd, true, true)]
#[case::lqv_base(0xC881_2001, InstrCategory::Rsp, Operand::CpuRs, false, true)]
fn operand_aliases(
    #[case] word: u32,
    #[case] category: InstrCategory,
    #[case] operand: Operand,
    #[case] exact: bool,
    #[case] aliased: bool,
) {
    let instr = Instruction::new(word, 0, category);
    assert_eq!(instr.has_operand(operand), exact);
    assert_eq!(instr.has_operand_alias(operand), aliased);
}

#[test]
fn operand_names() {
    assert_eq!(Operand::CpuImmediateBase.to_string(), "cpu_immediate_base");
    assert_eq!(Operand::RspVtElementHigh.to_string(), "rsp_vt_elementhigh");
    assert_eq!(Operand::R3000GteLm.to_string(), "r3000gte_lm");
}

#[test]
fn nop_is_word_zero() {
    assert!(cpu(0).is_nop());
    assert!(Instruction::new(0, 0, InstrCategory::Rsp).is_nop());
    assert!(!cpu(0x0002_1080).is_nop());
}

#[test]
fn same_opcode() {
    let a = cpu(0x8C42_0000);
    let b = cpu(0x8C43_0004);
    assert!(a.same_opcode(&b));
    assert!(a.same_opcode_but_different_arguments(&b));
    assert!(!a.same_opcode(&cpu(0xAC42_0000)));
}

#[rstest]
#[case::cpu(0x0000_0001, InstrCategory::Cpu)]
#[case::rsp(0x0085_0018, InstrCategory::Rsp)]
#[case::r3000gte(0xDC82_0000, InstrCategory::R3000Gte)]
fn invalid_sentinel_answers_false(#[case] word: u32, #[case] category: InstrCategory) {
    let instr = Instruction::new(word, 0, category);
    assert!(!instr.is_valid());
    assert!(!instr.is_jump() && !instr.is_branch() && !instr.is_function_call());
    assert!(!instr.is_return() && !instr.is_jumptable_jump() && !instr.has_delay_slot());
    assert!(!instr.does_load() && !instr.does_store() && !instr.is_trap());
    assert!(!instr.is_float() && !instr.is_unsigned() && !instr.maybe_is_move());
    assert!(!instr.modifies_register(RegisterFile::Gpr));
    assert!(!instr.reads_register(RegisterFile::Gpr));
    assert!(!instr.modifies_register(RegisterFile::HiLo));
    assert_eq!(instr.destination_gpr(), None);
    assert_eq!(instr.access_type(), AccessType::Invalid);
    assert_eq!(instr.branch_offset(), None);
    assert_eq!(instr.branch_vram_generic(), None);
    assert!(instr.is_likely_handwritten());
    assert!(!instr.same_opcode(&instr));
    assert!(!instr.is_pseudo_with(&Config::default()));
}
