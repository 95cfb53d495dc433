//! Register naming conventions.
//!
//! Maps a register index to its display name for every register file the formatter
//! renders. General-purpose and floating-point registers follow the selected
//! [`Abi`]; the coprocessor files have one symbolic table each, used whenever the
//! convention is not [`Abi::Numeric`]. Files with fewer symbolic names than
//! registers fall back to the numeric name for the remaining indices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::constants::REGISTER_COUNT;
use crate::common::error::{InvalidAbiError, InvalidRegisterIndexError};

/// Register naming convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Abi {
    /// Plain indices (`$4`, `$f12`).
    Numeric,
    /// MIPS o32 names.
    #[default]
    O32,
    /// MIPS n32 names.
    N32,
    /// MIPS n64 names.
    N64,
}

impl Abi {
    /// Returns the lowercase tag accepted by [`FromStr`].
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::O32 => "o32",
            Self::N32 => "n32",
            Self::N64 => "n64",
        }
    }
}

impl fmt::Display for Abi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Abi {
    type Err = InvalidAbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" | "32" | "64" => Ok(Self::Numeric),
            "o32" => Ok(Self::O32),
            "n32" => Ok(Self::N32),
            "n64" => Ok(Self::N64),
            _ => Err(InvalidAbiError { tag: s.to_owned() }),
        }
    }
}

/// A register file with its own naming table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RegisterFile {
    /// General-purpose registers.
    Gpr,
    /// Floating-point registers.
    Fpr,
    /// HI and LO (index 0 and 1).
    HiLo,
    /// COP0 system control registers.
    Cop0,
    /// COP1 control registers.
    Cop1Control,
    /// Generic COP2 data registers.
    Cop2,
    /// Generic COP2 control registers.
    Cop2Control,
    /// RSP COP0 (SP and DP interface) registers.
    RspCop0,
    /// RSP vector registers.
    RspVector,
    /// RSP vector control registers.
    RspCop2Control,
    /// GTE data registers.
    GteData,
    /// GTE control registers.
    GteControl,
}

impl RegisterFile {
    /// Number of registers in the file.
    pub const fn count(self) -> u32 {
        match self {
            Self::HiLo => 2,
            _ => REGISTER_COUNT,
        }
    }

    /// Returns the display name of register `index` under `abi`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRegisterIndexError`] when `index` is outside the file.
    pub fn name(self, index: u32, abi: Abi) -> Result<&'static str, InvalidRegisterIndexError> {
        if index >= self.count() {
            return Err(InvalidRegisterIndexError { file: self, index });
        }
        let i = index as usize;
        let numeric = self.numeric_names();
        let named = match abi {
            Abi::Numeric => numeric,
            _ => self.symbolic_names(abi),
        };
        Ok(named.get(i).or_else(|| numeric.get(i)).copied().unwrap_or("$?"))
    }

    fn numeric_names(self) -> &'static [&'static str] {
        match self {
            Self::Fpr => &FPR_NUMERIC,
            Self::HiLo => &HILO,
            Self::RspVector => &RSP_VECTOR,
            _ => &NUMERIC,
        }
    }

    fn symbolic_names(self, abi: Abi) -> &'static [&'static str] {
        match self {
            Self::Gpr => match abi {
                Abi::N32 | Abi::N64 => &GPR_N64,
                _ => &GPR_O32,
            },
            Self::Fpr => match abi {
                Abi::N32 => &FPR_N32,
                Abi::N64 => &FPR_N64,
                _ => &FPR_O32,
            },
            Self::HiLo => &HILO,
            Self::Cop0 => &COP0_VR4300,
            Self::Cop1Control => &COP1_CONTROL,
            Self::Cop2 | Self::Cop2Control => &NUMERIC,
            Self::RspCop0 => &RSP_COP0,
            Self::RspVector => &RSP_VECTOR,
            Self::RspCop2Control => &RSP_COP2_CONTROL,
            Self::GteData => &GTE_DATA,
            Self::GteControl => &GTE_CONTROL,
        }
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gpr => "general-purpose",
            Self::Fpr => "floating-point",
            Self::HiLo => "hi/lo",
            Self::Cop0 => "cop0",
            Self::Cop1Control => "cop1 control",
            Self::Cop2 => "cop2",
            Self::Cop2Control => "cop2 control",
            Self::RspCop0 => "rsp cop0",
            Self::RspVector => "rsp vector",
            Self::RspCop2Control => "rsp cop2 control",
            Self::GteData => "gte data",
            Self::GteControl => "gte control",
        })
    }
}

const NUMERIC: [&str; 32] = [
    "$0", "$1", "$2", "$3", "$4", "$5", "$6", "$7", "$8", "$9", "$10", "$11", "$12", "$13",
    "$14", "$15", "$16", "$17", "$18", "$19", "$20", "$21", "$22", "$23", "$24", "$25", "$26",
    "$27", "$28", "$29", "$30", "$31",
];

const GPR_O32: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

const GPR_N64: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$a4", "$a5", "$a6", "$a7", "$t0",
    "$t1", "$t2", "$t3", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

const FPR_NUMERIC: [&str; 32] = [
    "$f0", "$f1", "$f2", "$f3", "$f4", "$f5", "$f6", "$f7", "$f8", "$f9", "$f10", "$f11",
    "$f12", "$f13", "$f14", "$f15", "$f16", "$f17", "$f18", "$f19", "$f20", "$f21", "$f22",
    "$f23", "$f24", "$f25", "$f26", "$f27", "$f28", "$f29", "$f30", "$f31",
];

const FPR_O32: [&str; 32] = [
    "$fv0", "$fv0f", "$fv1", "$fv1f", "$ft0", "$ft0f", "$ft1", "$ft1f", "$ft2", "$ft2f", "$ft3",
    "$ft3f", "$fa0", "$fa0f", "$fa1", "$fa1f", "$ft4", "$ft4f", "$ft5", "$ft5f", "$fs0",
    "$fs0f", "$fs1", "$fs1f", "$fs2", "$fs2f", "$fs3", "$fs3f", "$fs4", "$fs4f", "$fs5",
    "$fs5f",
];

const FPR_N32: [&str; 32] = [
    "$fv0", "$ft14", "$fv1", "$ft15", "$ft0", "$ft1", "$ft2", "$ft3", "$ft4", "$ft5", "$ft6",
    "$ft7", "$fa0", "$fa1", "$fa2", "$fa3", "$fa4", "$fa5", "$fa6", "$fa7", "$fs0", "$ft8",
    "$fs1", "$ft9", "$fs2", "$ft10", "$fs3", "$ft11", "$fs4", "$ft12", "$fs5", "$ft13",
];

const FPR_N64: [&str; 32] = [
    "$fv0", "$ft12", "$fv1", "$ft13", "$ft0", "$ft1", "$ft2", "$ft3", "$ft4", "$ft5", "$ft6",
    "$ft7", "$fa0", "$fa1", "$fa2", "$fa3", "$fa4", "$fa5", "$fa6", "$fa7", "$ft8", "$ft9",
    "$ft10", "$ft11", "$fs0", "$fs1", "$fs2", "$fs3", "$fs4", "$fs5", "$fs6", "$fs7",
];

const HILO: [&str; 2] = ["hi", "lo"];

const COP0_VR4300: [&str; 32] = [
    "$Index", "$Random", "$EntryLo0", "$EntryLo1", "$Context", "$PageMask", "$Wired", "$Reserved07",
    "$BadVaddr", "$Count", "$EntryHi", "$Compare", "$Status", "$Cause", "$EPC", "$PRevID", "$Config",
    "$LLAddr", "$WatchLo", "$WatchHi", "$XContext", "$Reserved21", "$Reserved22", "$Reserved23",
    "$Reserved24", "$Reserved25", "$PErr", "$CacheErr", "$TagLo", "$TagHi", "$ErrorEPC", "$Reserved31",
];

// Only the implementation/revision and control/status registers have names.
const COP1_CONTROL: [&str; 32] = [
    "$FpcIrr", "$1", "$2", "$3", "$4", "$5", "$6", "$7", "$8", "$9", "$10", "$11", "$12", "$13",
    "$14", "$15", "$16", "$17", "$18", "$19", "$20", "$21", "$22", "$23", "$24", "$25", "$26",
    "$27", "$28", "$29", "$30", "$FpcCsr",
];

const RSP_COP0: [&str; 16] = [
    "$SP_MEM_ADDR",
    "$SP_DRAM_ADDR",
    "$SP_RD_LEN",
    "$SP_WR_LEN",
    "$SP_STATUS",
    "$SP_DMA_FULL",
    "$SP_DMA_BUSY",
    "$SP_SEMAPHORE",
    "$DPC_START",
    "$DPC_END",
    "$DPC_CURRENT",
    "$DPC_STATUS",
    "$DPC_CLOCK",
    "$DPC_BUFBUSY",
    "$DPC_PIPEBUSY",
    "$DPC_TMEM",
];

const RSP_VECTOR: [&str; 32] = [
    "$v0", "$v1", "$v2", "$v3", "$v4", "$v5", "$v6", "$v7", "$v8", "$v9", "$v10", "$v11",
    "$v12", "$v13", "$v14", "$v15", "$v16", "$v17", "$v18", "$v19", "$v20", "$v21", "$v22",
    "$v23", "$v24", "$v25", "$v26", "$v27", "$v28", "$v29", "$v30", "$v31",
];

const RSP_COP2_CONTROL: [&str; 3] = ["$vco", "$vcc", "$vce"];

const GTE_DATA: [&str; 32] = [
    "$VXY0", "$VZ0", "$VXY1", "$VZ1", "$VXY2", "$VZ2", "$RGB", "$OTZ", "$IR0", "$IR1", "$IR2",
    "$IR3", "$SXY0", "$SXY1", "$SXY2", "$SXYP", "$SZ0", "$SZ1", "$SZ2", "$SZ3", "$RGB0",
    "$RGB1", "$RGB2", "$RES1", "$MAC0", "$MAC1", "$MAC2", "$MAC3", "$IRGB", "$ORGB", "$LZCS",
    "$LZCR",
];

const GTE_CONTROL: [&str; 32] = [
    "$R11R12", "$R13R21", "$R22R23", "$R31R32", "$R33", "$TRX", "$TRY", "$TRZ", "$L11L12",
    "$L13L21", "$L22L23", "$L31L32", "$L33", "$RBK", "$GBK", "$BBK", "$LR1LR2", "$LR3LG1",
    "$LG2LG3", "$LB1LB2", "$LB3", "$RFC", "$GFC", "$BFC", "$OFX", "$OFY", "$H", "$DQA", "$DQB",
    "$ZSF3", "$ZSF4", "$FLAG",
];
