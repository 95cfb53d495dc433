//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode tables, decoding logic, classification and rendering,
//! organized by instruction category.
//!
//! # Categories
//!
//! * `cpu`: MIPS I-III integer, COP0, FPU and COP2 moves (VR4300 level).
//! * `rsp`: N64 Reality Signal Processor scalar subset and vector unit.
//! * `r3000gte`: PlayStation R3000 with the Geometry Transformation Engine on COP2.

/// Register naming conventions and register files.
pub mod abi;

/// Instruction category (CPU, RSP, R3000 + GTE).
pub mod category;

/// Flag and field-based instruction predicates.
pub mod classify;

/// Main CPU opcode tables.
pub mod cpu;

/// Word to table entry resolution for every category.
pub mod decode;

/// Assembly text rendering.
pub mod disasm;

/// Instruction identifiers and table identifiers.
pub mod id;

/// Decoded instruction and bit-field extraction.
pub mod instruction;

/// Operand kinds.
pub mod operand;

/// Pseudo-instruction simplification rules.
pub mod pseudo;

/// PlayStation R3000 + GTE opcode tables.
pub mod r3000gte;

/// N64 RSP opcode tables.
pub mod rsp;

/// Opcode table entries, flags and lookup.
pub mod table;
