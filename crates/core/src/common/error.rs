//! Error definitions.
//!
//! This module defines the structural failures the engine can report. It provides:
//! 1. **Category Errors:** Rejecting instruction-set tags the decoder has no tables for.
//! 2. **Register Errors:** Rejecting unknown naming conventions and register indices
//!    outside a register file.
//! 3. **Configuration Errors:** Reporting malformed JSON and repeated initialization.
//!
//! Unknown encodings are deliberately absent from this list: an unrecognized word
//! decodes to the invalid sentinel and is reported through the rendered text.

use thiserror::Error;

use crate::isa::abi::RegisterFile;

/// An instruction category tag that has no decoding tables.
///
/// Raised when parsing a category from a string tag such as `"r5900"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unsupported instruction category `{tag}` (expected one of: cpu, rsp, r3000gte)")]
pub struct UnsupportedCategoryError {
    /// The rejected tag, as supplied by the caller.
    pub tag: String,
}

/// A register naming convention tag that is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown ABI `{tag}` (expected one of: numeric, o32, n32, n64)")]
pub struct InvalidAbiError {
    /// The rejected tag, as supplied by the caller.
    pub tag: String,
}

/// A register index outside the valid range of its register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("register index {index} is out of range for the {file} register file")]
pub struct InvalidRegisterIndexError {
    /// The register file that was queried.
    pub file: RegisterFile,
    /// The rejected index.
    pub index: u32,
}

/// Configuration loading and installation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON or has mistyped fields.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The process-wide configuration was already initialized.
    #[error("process-wide configuration is already initialized")]
    AlreadyInitialized,
}

/// Umbrella error for callers that handle every failure the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`UnsupportedCategoryError`].
    #[error(transparent)]
    UnsupportedCategory(#[from] UnsupportedCategoryError),

    /// See [`InvalidAbiError`].
    #[error(transparent)]
    InvalidAbi(#[from] InvalidAbiError),

    /// See [`InvalidRegisterIndexError`].
    #[error(transparent)]
    InvalidRegisterIndex(#[from] InvalidRegisterIndexError),

    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
}
