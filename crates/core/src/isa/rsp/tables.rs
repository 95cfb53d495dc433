//! RSP opcode tables.
//!
//! The scalar unit is a MIPS I subset without HI/LO, traps, unaligned or 64-bit
//! accesses. COP0 exposes the RSP/RDP control registers and COP2 is the vector unit.

#![allow(clippy::wildcard_imports, clippy::enum_glob_use)]

use crate::common::data::AccessType;
use crate::isa::cpu::tables::fl::*;
use crate::isa::cpu::tables::ops::*;
use crate::isa::id::InstrId as I;
use crate::isa::operand::Operand::{self, *};
use crate::isa::table::{InstrFlags as F, OpcodeEntry as E};

const RT_RSP_COP0D: &[Operand] = &[CpuRt, RspCop0d];
const RT_VS_INDEX: &[Operand] = &[CpuRt, RspVsIndex];
const RT_RSP_COP2CD: &[Operand] = &[CpuRt, RspCop2cd];
const VD_VS_VT: &[Operand] = &[RspVd, RspVs, RspVtElementHigh];
const VDDE_VT: &[Operand] = &[RspVdDe, RspVtElementHigh];
const VT_OFFSET: &[Operand] = &[RspVtElementLow, RspOffsetRs];

const VU3: F = F::MODIFIES_FD.union(F::READS_FS).union(F::READS_FT);
const VU2: F = F::MODIFIES_FD.union(F::READS_FT);
const VLOAD: F = F::DOES_LOAD.union(F::MODIFIES_FT).union(F::READS_RS);
const VSTORE: F = F::DOES_STORE.union(F::READS_FT).union(F::READS_RS);
const MF_VEC: F = F::MODIFIES_RT.union(F::READS_FS);
const MT_VEC: F = F::READS_RT.union(F::MODIFIES_FS);

/// Primary opcode table, keyed by opcode.
pub(crate) static NORMAL: &[E] = &[
    E::new(0x02, I::J, LABEL, J),
    E::new(0x03, I::Jal, LABEL, JAL),
    E::new(0x04, I::Beq, RS_RT_BRANCH, BRANCH_RS_RT),
    E::new(0x05, I::Bne, RS_RT_BRANCH, BRANCH_RS_RT),
    E::new(0x06, I::Blez, RS_BRANCH, BRANCH_RS),
    E::new(0x07, I::Bgtz, RS_BRANCH, BRANCH_RS),
    E::new(0x08, I::Addi, RT_RS_IMM, ALU_IMM),
    E::new(0x09, I::Addiu, RT_RS_IMM, ALU_IMM_LO),
    E::new(0x0A, I::Slti, RT_RS_IMM, ALU_IMM),
    E::new(0x0B, I::Sltiu, RT_RS_IMM, ALU_IMM),
    E::new(0x0C, I::Andi, RT_RS_IMM, ALU_UIMM),
    E::new(0x0D, I::Ori, RT_RS_IMM, ALU_UIMM.union(F::CAN_BE_LO)),
    E::new(0x0E, I::Xori, RT_RS_IMM, ALU_UIMM),
    E::new(0x0F, I::Lui, RT_IMM, LUI),
    E::new(0x20, I::Lb, RT_MEM, LOAD).access(AccessType::Byte),
    E::new(0x21, I::Lh, RT_MEM, LOAD).access(AccessType::Short),
    E::new(0x23, I::Lw, RT_MEM, LOAD).access(AccessType::Word),
    E::new(0x24, I::Lbu, RT_MEM, LOAD_U).access(AccessType::Byte),
    E::new(0x25, I::Lhu, RT_MEM, LOAD_U).access(AccessType::Short),
    E::new(0x27, I::Lwu, RT_MEM, LOAD_U).access(AccessType::Word),
    E::new(0x28, I::Sb, RT_MEM, STORE).access(AccessType::Byte),
    E::new(0x29, I::Sh, RT_MEM, STORE).access(AccessType::Short),
    E::new(0x2B, I::Sw, RT_MEM, STORE).access(AccessType::Word),
];

/// SPECIAL table, keyed by function.
pub(crate) static SPECIAL: &[E] = &[
    E::new(0x00, I::Sll, RD_RT_SA, SHIFT_SA),
    E::new(0x02, I::Srl, RD_RT_SA, SHIFT_SA),
    E::new(0x03, I::Sra, RD_RT_SA, SHIFT_SA),
    E::new(0x04, I::Sllv, RD_RT_RS, ALU_REG),
    E::new(0x06, I::Srlv, RD_RT_RS, ALU_REG),
    E::new(0x07, I::Srav, RD_RT_RS, ALU_REG),
    E::new(0x08, I::Jr, RS, JR),
    E::new(0x09, I::Jalr, MAYBE_RD_RS, JALR),
    E::new(0x0D, I::Break, CODE, SYSTEM),
    E::new(0x20, I::Add, RD_RS_RT, ALU_MOVE),
    E::new(0x21, I::Addu, RD_RS_RT, ALU_MOVE),
    E::new(0x22, I::Sub, RD_RS_RT, ALU_REG),
    E::new(0x23, I::Subu, RD_RS_RT, ALU_REG),
    E::new(0x24, I::And, RD_RS_RT, ALU_REG),
    E::new(0x25, I::Or, RD_RS_RT, ALU_MOVE),
    E::new(0x26, I::Xor, RD_RS_RT, ALU_REG),
    E::new(0x27, I::Nor, RD_RS_RT, ALU_REG),
    E::new(0x2A, I::Slt, RD_RS_RT, ALU_REG),
    E::new(0x2B, I::Sltu, RD_RS_RT, ALU_REG),
];

/// REGIMM table, keyed by rt.
pub(crate) static REGIMM: &[E] = &[
    E::new(0x00, I::Bltz, RS_BRANCH, BRANCH_RS),
    E::new(0x01, I::Bgez, RS_BRANCH, BRANCH_RS),
    E::new(0x10, I::Bltzal, RS_BRANCH, BRANCH_LINK),
    E::new(0x11, I::Bgezal, RS_BRANCH, BRANCH_LINK),
];

/// COP0 move table, keyed by fmt.
pub(crate) static COP0: &[E] = &[
    E::new(0x00, I::Mfc0, RT_RSP_COP0D, MF_COP),
    E::new(0x04, I::Mtc0, RT_RSP_COP0D, MT_COP),
];

/// COP2 move table, keyed by fmt.
pub(crate) static COP2: &[E] = &[
    E::new(0x00, I::Mfc2, RT_VS_INDEX, MF_VEC),
    E::new(0x02, I::Cfc2, RT_RSP_COP2CD, MF_C2),
    E::new(0x04, I::Mtc2, RT_VS_INDEX, MT_VEC),
    E::new(0x06, I::Ctc2, RT_RSP_COP2CD, MT_C2),
];

/// Vector unit computational table, keyed by function.
pub(crate) static VU: &[E] = &[
    E::new(0x00, I::Vmulf, VD_VS_VT, VU3),
    E::new(0x01, I::Vmulu, VD_VS_VT, VU3),
    E::new(0x02, I::Vrndp, VD_VS_VT, VU3),
    E::new(0x03, I::Vmulq, VD_VS_VT, VU3),
    E::new(0x04, I::Vmudl, VD_VS_VT, VU3),
    E::new(0x05, I::Vmudm, VD_VS_VT, VU3),
    E::new(0x06, I::Vmudn, VD_VS_VT, VU3),
    E::new(0x07, I::Vmudh, VD_VS_VT, VU3),
    E::new(0x08, I::Vmacf, VD_VS_VT, VU3),
    E::new(0x09, I::Vmacu, VD_VS_VT, VU3),
    E::new(0x0A, I::Vrndn, VD_VS_VT, VU3),
    E::new(0x0B, I::Vmacq, VD_VS_VT, VU3),
    E::new(0x0C, I::Vmadl, VD_VS_VT, VU3),
    E::new(0x0D, I::Vmadm, VD_VS_VT, VU3),
    E::new(0x0E, I::Vmadn, VD_VS_VT, VU3),
    E::new(0x0F, I::Vmadh, VD_VS_VT, VU3),
    E::new(0x10, I::Vadd, VD_VS_VT, VU3),
    E::new(0x11, I::Vsub, VD_VS_VT, VU3),
    E::new(0x13, I::Vabs, VD_VS_VT, VU3),
    E::new(0x14, I::Vaddc, VD_VS_VT, VU3),
    E::new(0x15, I::Vsubc, VD_VS_VT, VU3),
    E::new(0x1D, I::Vsar, VD_VS_VT, VU3),
    E::new(0x20, I::Vlt, VD_VS_VT, VU3),
    E::new(0x21, I::Veq, VD_VS_VT, VU3),
    E::new(0x22, I::Vne, VD_VS_VT, VU3),
    E::new(0x23, I::Vge, VD_VS_VT, VU3),
    E::new(0x24, I::Vcl, VD_VS_VT, VU3),
    E::new(0x25, I::Vch, VD_VS_VT, VU3),
    E::new(0x26, I::Vcr, VD_VS_VT, VU3),
    E::new(0x27, I::Vmrg, VD_VS_VT, VU3),
    E::new(0x28, I::Vand, VD_VS_VT, VU3),
    E::new(0x29, I::Vnand, VD_VS_VT, VU3),
    E::new(0x2A, I::Vor, VD_VS_VT, VU3),
    E::new(0x2B, I::Vnor, VD_VS_VT, VU3),
    E::new(0x2C, I::Vxor, VD_VS_VT, VU3),
    E::new(0x2D, I::Vnxor, VD_VS_VT, VU3),
    E::new(0x30, I::Vrcp, VDDE_VT, VU2),
    E::new(0x31, I::Vrcpl, VDDE_VT, VU2),
    E::new(0x32, I::Vrcph, VDDE_VT, VU2),
    E::new(0x33, I::Vmov, VDDE_VT, VU2),
    E::new(0x34, I::Vrsq, VDDE_VT, VU2),
    E::new(0x35, I::Vrsql, VDDE_VT, VU2),
    E::new(0x36, I::Vrsqh, VDDE_VT, VU2),
    E::new(0x37, I::Vnop, NONE, F::empty()),
];

/// Vector loads (LWC2), keyed by rd.
pub(crate) static LWC2: &[E] = &[
    E::new(0x00, I::Lbv, VT_OFFSET, VLOAD).access(AccessType::Byte),
    E::new(0x01, I::Lsv, VT_OFFSET, VLOAD).access(AccessType::Short),
    E::new(0x02, I::Llv, VT_OFFSET, VLOAD).access(AccessType::Word),
    E::new(0x03, I::Ldv, VT_OFFSET, VLOAD).access(AccessType::Doubleword),
    E::new(0x04, I::Lqv, VT_OFFSET, VLOAD).access(AccessType::Quadword),
    E::new(0x05, I::Lrv, VT_OFFSET, VLOAD).access(AccessType::Quadword),
    E::new(0x06, I::Lpv, VT_OFFSET, VLOAD).access(AccessType::Doubleword),
    E::new(0x07, I::Luv, VT_OFFSET, VLOAD).access(AccessType::Doubleword),
    E::new(0x08, I::Lhv, VT_OFFSET, VLOAD).access(AccessType::Quadword),
    E::new(0x09, I::Lfv, VT_OFFSET, VLOAD).access(AccessType::Quadword),
    E::new(0x0B, I::Ltv, VT_OFFSET, VLOAD).access(AccessType::Quadword),
];

/// Vector stores (SWC2), keyed by rd.
pub(crate) static SWC2: &[E] = &[
    E::new(0x00, I::Sbv, VT_OFFSET, VSTORE).access(AccessType::Byte),
    E::new(0x01, I::Ssv, VT_OFFSET, VSTORE).access(AccessType::Short),
    E::new(0x02, I::Slv, VT_OFFSET, VSTORE).access(AccessType::Word),
    E::new(0x03, I::Sdv, VT_OFFSET, VSTORE).access(AccessType::Doubleword),
    E::new(0x04, I::Sqv, VT_OFFSET, VSTORE).access(AccessType::Quadword),
    E::new(0x05, I::Srv, VT_OFFSET, VSTORE).access(AccessType::Quadword),
    E::new(0x06, I::Spv, VT_OFFSET, VSTORE).access(AccessType::Doubleword),
    E::new(0x07, I::Suv, VT_OFFSET, VSTORE).access(AccessType::Doubleword),
    E::new(0x08, I::Shv, VT_OFFSET, VSTORE).access(AccessType::Quadword),
    E::new(0x09, I::Sfv, VT_OFFSET, VSTORE).access(AccessType::Quadword),
    E::new(0x0A, I::Swv, VT_OFFSET, VSTORE).access(AccessType::Quadword),
    E::new(0x0B, I::Stv, VT_OFFSET, VSTORE).access(AccessType::Quadword),
];
