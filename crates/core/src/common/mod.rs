//! Common utilities and types used throughout the decoder.
//!
//! This module provides the building blocks that are shared across all components
//! of the engine. It includes:
//! 1. **Constants:** Bit-field positions and conventional register indices.
//! 2. **Memory Access:** Definitions for categorizing the width of loads and stores.
//! 3. **Error Handling:** Category, register-index and configuration error types.

/// Common constants used throughout the decoder.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, NOP_WORD};
pub use data::AccessType;
pub use error::{
    ConfigError, Error, InvalidAbiError, InvalidRegisterIndexError, UnsupportedCategoryError,
};
