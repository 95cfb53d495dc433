//! Instruction categories.
//!
//! A category is an instruction-set variant with its own opcode tables. The set is
//! closed: each variant selects its root table in [`crate::isa::decode`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::UnsupportedCategoryError;

/// Instruction-set variant used to interpret a word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrCategory {
    /// General MIPS CPU (MIPS I-III, VR4300 level).
    #[default]
    Cpu,
    /// N64 Reality Signal Processor (scalar subset plus vector unit).
    Rsp,
    /// PlayStation R3000 with the Geometry Transformation Engine on COP2.
    R3000Gte,
}

impl InstrCategory {
    /// Every supported category.
    pub const ALL: [Self; 3] = [Self::Cpu, Self::Rsp, Self::R3000Gte];

    /// Returns the lowercase tag accepted by [`FromStr`].
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Rsp => "rsp",
            Self::R3000Gte => "r3000gte",
        }
    }
}

impl fmt::Display for InstrCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for InstrCategory {
    type Err = UnsupportedCategoryError;

    /// Parses a category tag, ignoring ASCII case.
    ///
    /// `r4000allegrex` and `r5900` are known variants without tables and are
    /// rejected like any other unknown tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Ok(Self::Cpu),
            "rsp" => Ok(Self::Rsp),
            "r3000gte" => Ok(Self::R3000Gte),
            _ => Err(UnsupportedCategoryError { tag: s.to_owned() }),
        }
    }
}
