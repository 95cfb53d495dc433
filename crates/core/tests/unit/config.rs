//! # Configuration Tests
//!
//! Defaults, JSON deserialization and the process-wide instance.

use mipsdis_core::common::error::ConfigError;
use mipsdis_core::config::{Config, MiscConfig, PseudosConfig, RegNamesConfig};
use mipsdis_core::isa::abi::Abi;
use mipsdis_core::{InstrCategory, Instruction};

#[test]
fn test_reg_names_defaults() {
    let names = RegNamesConfig::default();
    assert_eq!(names.gpr_abi, Abi::O32);
    assert_eq!(names.fpr_abi, Abi::Numeric);
    assert!(names.named_registers);
    assert!(names.user_fpc_csr);
    assert!(names.cop0_named);
    assert!(names.rsp_cop0_named);
    assert!(names.gte_named);
}

#[test]
fn test_pseudos_defaults() {
    let pseudos = PseudosConfig::default();
    assert!(pseudos.enable_pseudos);
    assert!(pseudos.pseudo_b);
    assert!(pseudos.pseudo_beqz);
    assert!(pseudos.pseudo_bnez);
    assert!(pseudos.pseudo_bal);
    assert!(pseudos.pseudo_move);
    assert!(pseudos.pseudo_not);
    assert!(pseudos.pseudo_negu);
}

#[test]
fn test_misc_defaults() {
    let misc = MiscConfig::default();
    assert_eq!(misc.opcode_ljust, 11);
    assert!(misc.upper_case_imm);
    assert!(!misc.omit_0x_on_small_imm);
    assert!(misc.unknown_instr_comment);
    assert!(!misc.expand_jalr);
    assert_eq!(misc.default_category, InstrCategory::Cpu);
}

#[test]
fn test_full_document() {
    let json = r#"{
        "reg_names": {
            "gpr_abi": "n32",
            "fpr_abi": "n64",
            "named_registers": true,
            "user_fpc_csr": false,
            "cop0_named": false,
            "rsp_cop0_named": true,
            "gte_named": false
        },
        "pseudos": { "enable_pseudos": false },
        "misc": {
            "opcode_ljust": 8,
            "upper_case_imm": false,
            "omit_0x_on_small_imm": true,
            "unknown_instr_comment": false,
            "expand_jalr": true,
            "default_category": "r3000gte"
        }
    }"#;
    let config = Config::from_json(json).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(config.reg_names.gpr_abi, Abi::N32);
    assert_eq!(config.reg_names.fpr_abi, Abi::N64);
    assert!(!config.reg_names.user_fpc_csr);
    assert!(!config.reg_names.cop0_named);
    assert!(!config.reg_names.gte_named);
    assert!(!config.pseudos.enable_pseudos);
    assert!(config.pseudos.pseudo_move);
    assert_eq!(config.misc.opcode_ljust, 8);
    assert!(config.misc.expand_jalr);
    assert_eq!(config.misc.default_category, InstrCategory::R3000Gte);
}

#[test]
fn test_malformed_documents() {
    assert!(matches!(
        Config::from_json("{"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{"misc": {"default_category": "r5900"}}"#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{"misc": {"opcode_ljust": "wide"}}"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_serialization_round_trip() {
    let mut config = Config::default();
    config.reg_names.gpr_abi = Abi::Numeric;
    config.misc.default_category = InstrCategory::Rsp;
    let json = serde_json::to_string(&config).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(Config::from_json(&json).ok(), Some(config));
}

#[test]
fn test_dump_is_stable() {
    let dump = Config::default().dump();
    assert!(dump.starts_with("reg_names.gpr_abi = o32\n"));
    assert!(dump.contains("pseudos.pseudo_b = true\n"));
    assert!(dump.ends_with("misc.default_category = cpu"));
    assert_eq!(dump.lines().count(), 21);
    assert!(dump.lines().all(|line| line.contains(" = ")));
    assert_eq!(dump, Config::default().dump());
}

#[test]
fn test_global_is_initialized_once() {
    let global = Config::global();
    assert!(std::ptr::eq(global, Config::global()));
    assert!(matches!(
        Config::default().install(),
        Err(ConfigError::AlreadyInitialized)
    ));
    assert_eq!(Config::info(), global.dump());
}

#[test]
fn test_default_category_decoding() {
    let instr = Instruction::with_default_category(0x8C42_0000, 0);
    assert_eq!(instr.category(), Config::global().misc.default_category);
}
