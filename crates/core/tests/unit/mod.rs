//! # Unit Components
//!
//! This module serves as the central hub for the per-module suites of the decoder.

/// Register naming across conventions and register files.
pub mod abi;

/// Classification predicates over decoded instructions.
///
/// This module verifies control-flow, memory-access and register-effect
/// predicates, including their behavior on the invalid sentinel.
pub mod classify;

/// Configuration defaults, JSON parsing and the process-wide instance.
pub mod config;

/// Per-category decoding of representative words.
pub mod decode;


/// Properties that hold for every 32-bit word.
pub mod properties;

/// Pseudo-instruction rules and their switches.
pub mod pseudo;

/// Free helper functions.
pub mod utils;
