//! MIPS instruction decoding library.
//!
//! This crate turns 32-bit MIPS instruction words into structured, classified and
//! printable instructions:
//! 1. **Decode:** Table-driven lookup per category (CPU, RSP, R3000 + GTE) that always succeeds.
//! 2. **Classify:** Control-flow, memory-access and register-effect predicates.
//! 3. **Disassemble:** Assembly text with ABI register names and pseudo-instructions.
//! 4. **Configure:** A process-wide configuration, or an explicit one per call.
//!
//! ```
//! use mipsdis_core::{InstrCategory, Instruction};
//!
//! let instr = Instruction::new(0x8C42_0000, 0x8000_0000, InstrCategory::Cpu);
//! assert!(instr.does_load());
//! assert_eq!(instr.disassemble(None, None), "lw          $v0, 0x0($v0)");
//! ```

/// Common types and constants (bit fields, access widths, errors).
pub mod common;
/// Disassembler configuration (register names, pseudos, formatting).
pub mod config;
/// Instruction set (tables, decode, instruction, classification, rendering).
pub mod isa;
/// Free helper functions.
pub mod utils;

/// Root configuration type; use `Config::default()` or parse it from JSON.
pub use crate::config::Config;
/// Instruction category; parse tags with `str::parse`.
pub use crate::isa::category::InstrCategory;
/// Immediate replacement for one render.
pub use crate::isa::disasm::ImmediateOverride;
/// Resolved instruction identifier.
pub use crate::isa::id::InstrId;
/// Decoded instruction; construct with `Instruction::new`.
pub use crate::isa::instruction::Instruction;
