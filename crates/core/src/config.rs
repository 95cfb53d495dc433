//! Configuration system for the disassembler.
//!
//! This module defines the settings that shape decoding defaults and rendered text.
//! It provides:
//! 1. **Defaults:** Baseline values for every knob.
//! 2. **Structures:** Register naming, pseudo-instruction and miscellaneous settings.
//! 3. **Lifecycle:** A process-wide instance, initialized at most once.
//!
//! Configuration is supplied as JSON (every field optional) or built with
//! `Config::default()`. Code that needs an isolated configuration passes a `&Config`
//! to the `*_with` variants of the formatter and classifier instead of installing one.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::error::ConfigError;
use crate::isa::abi::Abi;
use crate::isa::category::InstrCategory;

/// Default configuration constants.
mod defaults {
    /// Column the mnemonic is padded to before the first operand.
    pub const OPCODE_LJUST: usize = 11;

    /// Immediates with an absolute value below this are candidates for `omit_0x_on_small_imm`.
    pub const SMALL_IMM_LIMIT: u32 = 10;
}

pub use defaults::SMALL_IMM_LIMIT;

static GLOBAL: OnceLock<Config> = OnceLock::new();

/// Root configuration.
///
/// # Example
///
/// ```
/// use mipsdis_core::config::Config;
/// use mipsdis_core::isa::abi::Abi;
///
/// let json = r#"{
///     "reg_names": { "gpr_abi": "numeric" },
///     "pseudos": { "pseudo_move": false },
///     "misc": { "opcode_ljust": 7 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.reg_names.gpr_abi, Abi::Numeric);
/// assert!(!config.pseudos.pseudo_move);
/// assert!(config.pseudos.pseudo_b);
/// assert_eq!(config.misc.opcode_ljust, 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Register naming settings
    #[serde(default)]
    pub reg_names: RegNamesConfig,
    /// Pseudo-instruction settings
    #[serde(default)]
    pub pseudos: PseudosConfig,
    /// Formatting and decoding defaults
    #[serde(default)]
    pub misc: MiscConfig,
}

impl Config {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        debug!(?config, "parsed configuration");
        Ok(config)
    }

    /// Installs this configuration as the process-wide instance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyInitialized`] when a configuration was already
    /// installed, or when [`Config::global`] already initialized the default.
    pub fn install(self) -> Result<(), ConfigError> {
        GLOBAL
            .set(self)
            .map_err(|_| ConfigError::AlreadyInitialized)?;
        debug!("installed process-wide configuration");
        Ok(())
    }

    /// Returns the process-wide configuration, initializing it to the default on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            debug!("using default configuration");
            Self::default()
        })
    }

    /// Returns a stable, human-readable dump of this configuration.
    pub fn dump(&self) -> String {
        let r = &self.reg_names;
        let p = &self.pseudos;
        let m = &self.misc;
        [
            format!("reg_names.gpr_abi = {}", r.gpr_abi),
            format!("reg_names.fpr_abi = {}", r.fpr_abi),
            format!("reg_names.named_registers = {}", r.named_registers),
            format!("reg_names.user_fpc_csr = {}", r.user_fpc_csr),
            format!("reg_names.cop0_named = {}", r.cop0_named),
            format!("reg_names.rsp_cop0_named = {}", r.rsp_cop0_named),
            format!("reg_names.gte_named = {}", r.gte_named),
            format!("pseudos.enable_pseudos = {}", p.enable_pseudos),
            format!("pseudos.pseudo_b = {}", p.pseudo_b),
            format!("pseudos.pseudo_beqz = {}", p.pseudo_beqz),
            format!("pseudos.pseudo_bnez = {}", p.pseudo_bnez),
            format!("pseudos.pseudo_bal = {}", p.pseudo_bal),
            format!("pseudos.pseudo_move = {}", p.pseudo_move),
            format!("pseudos.pseudo_not = {}", p.pseudo_not),
            format!("pseudos.pseudo_negu = {}", p.pseudo_negu),
            format!("misc.opcode_ljust = {}", m.opcode_ljust),
            format!("misc.upper_case_imm = {}", m.upper_case_imm),
            format!("misc.omit_0x_on_small_imm = {}", m.omit_0x_on_small_imm),
            format!("misc.unknown_instr_comment = {}", m.unknown_instr_comment),
            format!("misc.expand_jalr = {}", m.expand_jalr),
            format!("misc.default_category = {}", m.default_category),
        ]
        .join("\n")
    }

    /// Returns [`Config::dump`] of the process-wide configuration.
    pub fn info() -> String {
        Self::global().dump()
    }
}

/// Register naming settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegNamesConfig {
    /// Naming convention for general-purpose registers
    #[serde(default)]
    pub gpr_abi: Abi,

    /// Naming convention for floating-point registers
    #[serde(default = "RegNamesConfig::default_fpr_abi")]
    pub fpr_abi: Abi,

    /// Master switch for symbolic names; when false every file renders numerically
    #[serde(default = "RegNamesConfig::default_true")]
    pub named_registers: bool,

    /// Render COP1 control registers 0 and 31 as `$FpcIrr`/`$FpcCsr`
    #[serde(default = "RegNamesConfig::default_true")]
    pub user_fpc_csr: bool,

    /// Render COP0 registers with VR4300 names
    #[serde(default = "RegNamesConfig::default_true")]
    pub cop0_named: bool,

    /// Render RSP COP0 registers with SP/DPC names
    #[serde(default = "RegNamesConfig::default_true")]
    pub rsp_cop0_named: bool,

    /// Render GTE data and control registers with their names
    #[serde(default = "RegNamesConfig::default_true")]
    pub gte_named: bool,
}

impl RegNamesConfig {
    fn default_fpr_abi() -> Abi {
        Abi::Numeric
    }

    fn default_true() -> bool {
        true
    }
}

impl Default for RegNamesConfig {
    fn default() -> Self {
        Self {
            gpr_abi: Abi::O32,
            fpr_abi: Abi::Numeric,
            named_registers: true,
            user_fpc_csr: true,
            cop0_named: true,
            rsp_cop0_named: true,
            gte_named: true,
        }
    }
}

/// Pseudo-instruction settings.
///
/// `enable_pseudos` gates every rule; the remaining switches gate one rule family each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudosConfig {
    /// Master switch for pseudo-instruction rendering
    #[serde(default = "PseudosConfig::default_true")]
    pub enable_pseudos: bool,
    /// `beq $zero, $zero` as `b`
    #[serde(default = "PseudosConfig::default_true")]
    pub pseudo_b: bool,
    /// `beq`/`beql` against `$zero` as `beqz`/`beqzl`
    #[serde(default = "PseudosConfig::default_true")]
    pub pseudo_beqz: bool,
    /// `bne`/`bnel` against `$zero` as `bnez`/`bnezl`
    #[serde(default = "PseudosConfig::default_true")]
    pub pseudo_bnez: bool,
    /// `bgezal $zero` as `bal`
    #[serde(default = "PseudosConfig::default_true")]
    pub pseudo_bal: bool,
    /// `or`/`addu`/`daddu` with `$zero` as `move`
    #[serde(default = "PseudosConfig::default_true")]
    pub pseudo_move: bool,
    /// `nor` with `$zero` as `not`
    #[serde(default = "PseudosConfig::default_true")]
    pub pseudo_not: bool,
    /// Subtraction from `$zero` as `negu`/`neg`/`dnegu`/`dneg`
    #[serde(default = "PseudosConfig::default_true")]
    pub pseudo_negu: bool,
}

impl PseudosConfig {
    fn default_true() -> bool {
        true
    }
}

impl Default for PseudosConfig {
    fn default() -> Self {
        Self {
            enable_pseudos: true,
            pseudo_b: true,
            pseudo_beqz: true,
            pseudo_bnez: true,
            pseudo_bal: true,
            pseudo_move: true,
            pseudo_not: true,
            pseudo_negu: true,
        }
    }
}

/// Formatting and decoding defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscConfig {
    /// Column the mnemonic is left-justified to (one space always follows)
    #[serde(default = "MiscConfig::default_opcode_ljust")]
    pub opcode_ljust: usize,

    /// Uppercase hex digits in immediates
    #[serde(default = "MiscConfig::default_true")]
    pub upper_case_imm: bool,

    /// Print immediates below 10 in decimal without the `0x` prefix
    #[serde(default)]
    pub omit_0x_on_small_imm: bool,

    /// Append `# invalid instruction` to words no table recognizes
    #[serde(default = "MiscConfig::default_true")]
    pub unknown_instr_comment: bool,

    /// Always render `jalr` with both rd and rs, even when rd is `$ra`
    #[serde(default)]
    pub expand_jalr: bool,

    /// Category used when none is given
    #[serde(default)]
    pub default_category: InstrCategory,
}

impl MiscConfig {
    fn default_opcode_ljust() -> usize {
        defaults::OPCODE_LJUST
    }

    fn default_true() -> bool {
        true
    }
}

impl Default for MiscConfig {
    fn default() -> Self {
        Self {
            opcode_ljust: defaults::OPCODE_LJUST,
            upper_case_imm: true,
            omit_0x_on_small_imm: false,
            unknown_instr_comment: true,
            expand_jalr: false,
            default_category: InstrCategory::Cpu,
        }
    }
}
