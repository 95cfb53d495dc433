//! R3000 GTE tables.
//!
//! Only the parts that differ from the CPU live here: the R3000 exception table with
//! `rfe`, the GTE register moves and the GTE command set. Everything else is a MIPS I
//! view of the CPU tables.

#![allow(clippy::wildcard_imports, clippy::enum_glob_use)]

use crate::isa::cpu::tables::fl::*;
use crate::isa::cpu::tables::ops::*;
use crate::isa::id::InstrId as I;
use crate::isa::operand::Operand::{self, *};
use crate::isa::table::OpcodeEntry as E;

const RT_GTE_D: &[Operand] = &[CpuRt, R3000GteCop2d];
const RT_GTE_CD: &[Operand] = &[CpuRt, R3000GteCop2cd];
const SF_LM: &[Operand] = &[R3000GteSf, R3000GteLm];
const MVMVA: &[Operand] = &[R3000GteSf, R3000GteMx, R3000GteV, R3000GteCv, R3000GteLm];

/// COP0 TLB/exception table, keyed by function.
pub(crate) static TLB: &[E] = &[
    E::new(0x01, I::Tlbr, NONE, SYSTEM),
    E::new(0x02, I::Tlbwi, NONE, SYSTEM),
    E::new(0x06, I::Tlbwr, NONE, SYSTEM),
    E::new(0x08, I::Tlbp, NONE, SYSTEM),
    E::new(0x10, I::Rfe, NONE, SYSTEM),
];

/// GTE register moves, keyed by fmt.
pub(crate) static COP2: &[E] = &[
    E::new(0x00, I::Mfc2, RT_GTE_D, MF_C2),
    E::new(0x02, I::Cfc2, RT_GTE_CD, MF_C2),
    E::new(0x04, I::Mtc2, RT_GTE_D, MT_C2),
    E::new(0x06, I::Ctc2, RT_GTE_CD, MT_C2),
];

/// GTE commands, keyed by function.
pub(crate) static GTE: &[E] = &[
    E::new(0x01, I::Rtps, NONE, SYSTEM),
    E::new(0x06, I::Nclip, NONE, SYSTEM),
    E::new(0x0C, I::Op, SF_LM, SYSTEM),
    E::new(0x10, I::Dpcs, NONE, SYSTEM),
    E::new(0x11, I::Intpl, NONE, SYSTEM),
    E::new(0x12, I::Mvmva, MVMVA, SYSTEM),
    E::new(0x13, I::Ncds, NONE, SYSTEM),
    E::new(0x14, I::Cdp, NONE, SYSTEM),
    E::new(0x16, I::Ncdt, NONE, SYSTEM),
    E::new(0x1B, I::Nccs, NONE, SYSTEM),
    E::new(0x1C, I::Cc, NONE, SYSTEM),
    E::new(0x1E, I::Ncs, NONE, SYSTEM),
    E::new(0x20, I::Nct, NONE, SYSTEM),
    E::new(0x28, I::Sqr, SF_LM, SYSTEM),
    E::new(0x29, I::Dcpl, NONE, SYSTEM),
    E::new(0x2A, I::Dpct, NONE, SYSTEM),
    E::new(0x2D, I::Avsz3, NONE, SYSTEM),
    E::new(0x2E, I::Avsz4, NONE, SYSTEM),
    E::new(0x30, I::Rtpt, NONE, SYSTEM),
    E::new(0x3D, I::Gpf, SF_LM, SYSTEM),
    E::new(0x3E, I::Gpl, SF_LM, SYSTEM),
    E::new(0x3F, I::Ncct, NONE, SYSTEM),
];
