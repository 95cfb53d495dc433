//! Pseudo-instruction rules and their switches.

use mipsdis_core::config::{Config, PseudosConfig};
use mipsdis_core::isa::pseudo::simplify;
use mipsdis_core::{InstrCategory, InstrId, Instruction};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{cpu, render, render_with};

#[rstest]
#[case::nop(0x0000_0000, InstrId::Nop, "nop")]
#[case::b(0x1000_0004, InstrId::B, "b           .L00000014")]
#[case::beqz(0x1080_0002, InstrId::Beqz, "beqz        $a0, .L0000000C")]
#[case::bnez(0x1480_0002, InstrId::Bnez, "bnez        $a0, .L0000000C")]
#[case::beqzl(0x5080_0002, InstrId::Beqzl, "beqzl       $a0, .L0000000C")]
#[case::bnezl(0x5480_0002, InstrId::Bnezl, "bnezl       $a0, .L0000000C")]
#[case::bal(0x0411_0003, InstrId::Bal, "bal         .L00000010")]
#[case::move_or(0x0080_1025, InstrId::Move, "move        $v0, $a0")]
#[case::move_addu(0x0080_1021, InstrId::Move, "move        $v0, $a0")]
#[case::move_daddu(0x0080_102D, InstrId::Move, "move        $v0, $a0")]
#[case::not(0x0080_1027, InstrId::Not, "not         $v0, $a0")]
#[case::negu(0x0004_1023, InstrId::Negu, "negu        $v0, $a0")]
#[case::neg(0x0004_1022, InstrId::Neg, "neg         $v0, $a0")]
#[case::dnegu(0x0004_102F, InstrId::Dnegu, "dnegu       $v0, $a0")]
#[case::dneg(0x0004_102E, InstrId::Dneg, "dneg        $v0, $a0")]
fn rules(#[case] word: u32, #[case] id: InstrId, #[case] text: &str) {
    let pseudos = PseudosConfig::default();
    let instr = cpu(word);
    assert_eq!(simplify(&instr, &pseudos).map(|p| p.id), Some(id));
    assert_eq!(render(word, 0, InstrCategory::Cpu), text);
}

#[rstest]
// beq $a0, $a1
#[case::beq_two_registers(0x1085_0002)]
// or $v0, $zero, $a0: only rt == $zero is a move
#[case::or_rs_zero(0x0004_1025)]
// subu $v0, $a0, $zero
#[case::subu_rt_zero(0x0080_1023)]
// bltzal $zero is not bal
#[case::bltzal_zero(0x0410_0003)]
// sll $zero, $zero, 1 is not word zero
#[case::sll_shift(0x0000_0040)]
fn non_matches(#[case] word: u32) {
    assert_eq!(simplify(&cpu(word), &PseudosConfig::default()), None);
}

#[test]
fn beq_falls_back_to_beqz_without_b() {
    let mut config = Config::default();
    config.pseudos.pseudo_b = false;
    assert_eq!(
        render_with(&config, 0x1000_0004, 0, InstrCategory::Cpu),
        "beqz        $zero, .L00000014"
    );

    config.pseudos.pseudo_beqz = false;
    assert_eq!(
        render_with(&config, 0x1000_0004, 0, InstrCategory::Cpu),
        "beq         $zero, $zero, .L00000014"
    );
}

#[rstest]
#[case::move_switch(0x0080_1025, "or          $v0, $a0, $zero")]
#[case::not_switch(0x0080_1027, "nor         $v0, $a0, $zero")]
#[case::negu_switch(0x0004_1023, "subu        $v0, $zero, $a0")]
#[case::bal_switch(0x0411_0003, "bgezal      $zero, .L00000010")]
#[case::bnez_switch(0x1480_0002, "bne         $a0, $zero, .L0000000C")]
fn each_switch_restores_the_raw_form(#[case] word: u32, #[case] raw: &str) {
    let mut config = Config::default();
    config.pseudos = PseudosConfig {
        pseudo_move: false,
        pseudo_not: false,
        pseudo_negu: false,
        pseudo_bal: false,
        pseudo_bnez: false,
        ..PseudosConfig::default()
    };
    assert_eq!(render_with(&config, word, 0, InstrCategory::Cpu), raw);
}

#[test]
fn master_switch_renders_raw_sll() {
    let mut config = Config::default();
    config.pseudos.enable_pseudos = false;
    assert_eq!(
        render_with(&config, 0x0000_0000, 0, InstrCategory::Cpu),
        "sll         $zero, $zero, 0"
    );
}

#[test]
fn rules_apply_in_every_category() {
    let rsp_move = Instruction::new(0x0080_1025, 0, InstrCategory::Rsp);
    assert_eq!(
        simplify(&rsp_move, &PseudosConfig::default()).map(|p| p.id),
        Some(InstrId::Move)
    );
    assert_eq!(render(0, 0, InstrCategory::R3000Gte), "nop");
}
