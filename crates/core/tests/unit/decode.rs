//! Per-category decoding of representative words.

use mipsdis_core::isa::decode::{decode, invalid_id_type};
use mipsdis_core::isa::id::InstrIdType;
use mipsdis_core::{InstrCategory, InstrId, Instruction};
use rstest::rstest;

use crate::common::harness::init_tracing;
use crate::common::words::{WordBuilder, i_type, j_type, special};

#[rstest]
#[case::lw(0x8C42_0000, InstrCategory::Cpu, InstrId::Lw, InstrIdType::CpuNormal)]
#[case::sw(0xAC42_0000, InstrCategory::Cpu, InstrId::Sw, InstrIdType::CpuNormal)]
#[case::jal(0x0C00_0000, InstrCategory::Cpu, InstrId::Jal, InstrIdType::CpuNormal)]
#[case::beq(0x1022_0000, InstrCategory::Cpu, InstrId::Beq, InstrIdType::CpuNormal)]
#[case::sll_zero(0x0000_0000, InstrCategory::Cpu, InstrId::Sll, InstrIdType::CpuSpecial)]
#[case::jr(0x03E0_0008, InstrCategory::Cpu, InstrId::Jr, InstrIdType::CpuSpecial)]
#[case::bgezal(0x0411_0003, InstrCategory::Cpu, InstrId::Bgezal, InstrIdType::CpuRegimm)]
#[case::mfc0(0x4008_6000, InstrCategory::Cpu, InstrId::Mfc0, InstrIdType::CpuCop0)]
#[case::eret(0x4200_0018, InstrCategory::Cpu, InstrId::Eret, InstrIdType::CpuCop0Tlb)]
#[case::cfc1(0x4448_F800, InstrCategory::Cpu, InstrId::Cfc1, InstrIdType::CpuCop1)]
#[case::bc1t(0x4501_0003, InstrCategory::Cpu, InstrId::Bc1t, InstrIdType::CpuCop1Bc1)]
#[case::add_s(0x4604_1000, InstrCategory::Cpu, InstrId::AddS, InstrIdType::CpuCop1FpuS)]
#[case::ld(0xDC82_0000, InstrCategory::Cpu, InstrId::Ld, InstrIdType::CpuNormal)]
#[case::vadd(0x4A03_1050, InstrCategory::Rsp, InstrId::Vadd, InstrIdType::RspCop2Vu)]
#[case::lqv(0xC881_2001, InstrCategory::Rsp, InstrId::Lqv, InstrIdType::RspNormalLwc2)]
#[case::mfc0_rsp(0x4008_2000, InstrCategory::Rsp, InstrId::Mfc0, InstrIdType::RspCop0)]
#[case::mfc2_rsp(0x4808_0A00, InstrCategory::Rsp, InstrId::Mfc2, InstrIdType::RspCop2)]
#[case::lw_gte(0x8C42_0000, InstrCategory::R3000Gte, InstrId::Lw, InstrIdType::R3000GteNormal)]
#[case::rfe(0x4200_0010, InstrCategory::R3000Gte, InstrId::Rfe, InstrIdType::R3000GteCop0Tlb)]
#[case::mvmva(0x4A08_6412, InstrCategory::R3000Gte, InstrId::Mvmva, InstrIdType::R3000GteCop2Gte)]
#[case::mfc2_gte(0x4808_6000, InstrCategory::R3000Gte, InstrId::Mfc2, InstrIdType::R3000GteCop2)]
fn resolves(
    #[case] word: u32,
    #[case] category: InstrCategory,
    #[case] id: InstrId,
    #[case] id_type: InstrIdType,
) {
    init_tracing();
    let instr = decode(word, 0x8000_0000, category);
    assert_eq!(instr.id(), id);
    assert_eq!(instr.id_type(), id_type);
    assert_eq!(instr.word(), word);
    assert_eq!(instr.category(), category);
}

#[rstest]
// ld is MIPS III
#[case::ld_on_r3000(0xDC82_0000, InstrCategory::R3000Gte)]
// beql is MIPS II
#[case::beql_on_r3000(0x5022_0000, InstrCategory::R3000Gte)]
// rfe only exists on the R3000
#[case::rfe_on_cpu(0x4200_0010, InstrCategory::Cpu)]
// the CPU has no COP2 computational ops
#[case::vadd_on_cpu(0x4A03_1050, InstrCategory::Cpu)]
// the RSP has no HI/LO
#[case::mult_on_rsp(0x0085_0018, InstrCategory::Rsp)]
// the RSP has no unaligned loads
#[case::lwl_on_rsp(0x8882_0000, InstrCategory::Rsp)]
#[case::unassigned_special(0x0000_0001, InstrCategory::Cpu)]
#[case::unassigned_opcode(0xEC00_0000, InstrCategory::Cpu)]
fn resolves_to_the_invalid_sentinel(#[case] word: u32, #[case] category: InstrCategory) {
    init_tracing();
    let instr = decode(word, 0, category);
    assert_eq!(instr.id(), InstrId::Invalid);
    assert_eq!(instr.id_type(), invalid_id_type(category));
    assert!(instr.id_type().is_invalid());
}

#[test]
fn field_getters_read_the_word() {
    let instr = Instruction::new(i_type(0x23, 29, 2, -8), 0, InstrCategory::Cpu);
    assert_eq!(instr.get_opcode(), 0x23);
    assert_eq!(instr.get_rs(), 29);
    assert_eq!(instr.get_rt(), 2);
    assert_eq!(instr.get_immediate(), 0xFFF8);
    assert_eq!(instr.processed_immediate(), -8);

    let shift = Instruction::new(special(0, 4, 2, 31, 0x00), 0, InstrCategory::Cpu);
    assert_eq!(shift.get_rd(), 2);
    assert_eq!(shift.get_sa(), 31);
    assert_eq!(shift.get_function(), 0);

    let jump = Instruction::new(j_type(0x02, 0x03FF_FFFF), 0, InstrCategory::Cpu);
    assert_eq!(jump.get_instr_index(), 0x03FF_FFFF);
}

#[test]
fn break_codes_split_into_halves() {
    let instr = Instruction::new(0x0001_008D, 0, InstrCategory::Cpu);
    assert_eq!(instr.id(), InstrId::Break);
    assert_eq!(instr.get_code_upper(), 1);
    assert_eq!(instr.get_code_lower(), 2);
    assert_eq!(instr.get_code(), (1 << 10) | 2);
}

#[test]
fn field_snapshot_serializes() {
    let fields = Instruction::new(0x8C42_0010, 0, InstrCategory::Cpu).fields();
    let json = serde_json::to_value(fields).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(json["opcode"], 0x23);
    assert_eq!(json["rs"], 2);
    assert_eq!(json["rt"], 2);
    assert_eq!(json["immediate"], 0x10);
}

#[test]
fn gte_command_fields() {
    let instr = Instruction::new(0x4A08_6412, 0, InstrCategory::R3000Gte);
    assert_eq!(instr.get_gte_sf(), 1);
    assert_eq!(instr.get_gte_mx(), 0);
    assert_eq!(instr.get_gte_v(), 0);
    assert_eq!(instr.get_gte_cv(), 3);
    assert_eq!(instr.get_gte_lm(), 1);
}

#[test]
fn vector_fields() {
    let vadd = WordBuilder::new()
        .opcode(0x12)
        .co()
        .rs(0x1B)
        .rt(3)
        .rd(2)
        .sa(1)
        .function(0x10)
        .build();
    assert_eq!(vadd, 0x4B63_1050);

    let instr = Instruction::new(vadd, 0, InstrCategory::Rsp);
    assert_eq!(instr.id(), InstrId::Vadd);
    assert_eq!(instr.get_vd(), 1);
    assert_eq!(instr.get_vs(), 2);
    assert_eq!(instr.get_vt(), 3);
    assert_eq!(instr.get_element_high(), 11);

    let lqv = Instruction::new(0xC881_207F, 0, InstrCategory::Rsp);
    assert_eq!(lqv.get_vector_offset(), -1);
    assert_eq!(lqv.get_element_low(), 0);
}

#[test]
fn category_tags() {
    assert!(Instruction::from_tag(0, 0, "cpu").is_ok());
    let gte = Instruction::from_tag(0x4200_0010, 0, "R3000GTE");
    assert_eq!(gte.map(|i| i.id()), Ok(InstrId::Rfe));

    for tag in ["r4000allegrex", "r5900", "", "mips"] {
        let err = Instruction::from_tag(0, 0, tag).err();
        assert_eq!(err.map(|e| e.tag), Some(tag.to_owned()), "tag `{tag}`");
    }
}

#[test]
fn vram_does_not_affect_identity() {
    let a = Instruction::new(0x1022_0000, 0, InstrCategory::Cpu);
    let b = Instruction::new(0x1022_0000, 0x8000_0000, InstrCategory::Cpu);
    assert_eq!(a.id(), b.id());
    assert!(a.same_opcode(&b));
    assert!(!a.same_opcode_but_different_arguments(&b));
}
