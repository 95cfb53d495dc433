//! MIPS CPU opcode tables (MIPS I-III, VR4300 level).
//!
//! Each slice is keyed by one field: the primary opcode, the SPECIAL function, the
//! REGIMM rt, the coprocessor fmt, the BCz rt or the FPU/TLB function. The RSP and
//! R3000 GTE tables reuse the operand lists and flag sets declared here.

#![allow(clippy::wildcard_imports, clippy::enum_glob_use)]

use crate::common::data::AccessType;
use crate::isa::id::InstrId as I;
use crate::isa::table::{InstrFlags, IsaVersion, OpcodeEntry as E};

use self::fl::*;
use self::ops::*;

/// Operand lists shared between tables.
pub(crate) mod ops {
    use crate::isa::operand::Operand::{self, *};

    pub(crate) const NONE: &[Operand] = &[];
    pub(crate) const LABEL: &[Operand] = &[CpuLabel];
    pub(crate) const BRANCH: &[Operand] = &[CpuBranchTargetLabel];
    pub(crate) const RS_BRANCH: &[Operand] = &[CpuRs, CpuBranchTargetLabel];
    pub(crate) const RS_RT_BRANCH: &[Operand] = &[CpuRs, CpuRt, CpuBranchTargetLabel];
    pub(crate) const RT_RS_IMM: &[Operand] = &[CpuRt, CpuRs, CpuImmediate];
    pub(crate) const RT_IMM: &[Operand] = &[CpuRt, CpuImmediate];
    pub(crate) const RS_IMM: &[Operand] = &[CpuRs, CpuImmediate];
    pub(crate) const RT_MEM: &[Operand] = &[CpuRt, CpuImmediateBase];
    pub(crate) const FT_MEM: &[Operand] = &[CpuFt, CpuImmediateBase];
    pub(crate) const COP2T_MEM: &[Operand] = &[CpuCop2t, CpuImmediateBase];
    pub(crate) const OP_MEM: &[Operand] = &[CpuOp, CpuImmediateBase];
    pub(crate) const HINT_MEM: &[Operand] = &[CpuHint, CpuImmediateBase];
    pub(crate) const RD_RT_SA: &[Operand] = &[CpuRd, CpuRt, CpuSa];
    pub(crate) const RD_RT_RS: &[Operand] = &[CpuRd, CpuRt, CpuRs];
    pub(crate) const RD_RS_RT: &[Operand] = &[CpuRd, CpuRs, CpuRt];
    pub(crate) const RS_RT: &[Operand] = &[CpuRs, CpuRt];
    pub(crate) const ZERO_RS_RT: &[Operand] = &[CpuZero, CpuRs, CpuRt];
    pub(crate) const RS_RT_CODE: &[Operand] = &[CpuRs, CpuRt, CpuCodeLower];
    pub(crate) const RS: &[Operand] = &[CpuRs];
    pub(crate) const RD: &[Operand] = &[CpuRd];
    pub(crate) const MAYBE_RD_RS: &[Operand] = &[CpuMaybeRdRs];
    pub(crate) const CODE: &[Operand] = &[CpuCode];
    pub(crate) const RT_COP0D: &[Operand] = &[CpuRt, CpuCop0d];
    pub(crate) const RT_FS: &[Operand] = &[CpuRt, CpuFs];
    pub(crate) const RT_COP1CS: &[Operand] = &[CpuRt, CpuCop1cs];
    pub(crate) const RT_COP2D: &[Operand] = &[CpuRt, CpuCop2d];
    pub(crate) const RT_COP2CD: &[Operand] = &[CpuRt, CpuCop2cd];
    pub(crate) const FD_FS_FT: &[Operand] = &[CpuFd, CpuFs, CpuFt];
    pub(crate) const FD_FS: &[Operand] = &[CpuFd, CpuFs];
    pub(crate) const FS_FT: &[Operand] = &[CpuFs, CpuFt];
}

/// Flag sets shared between tables.
pub(crate) mod fl {
    use crate::isa::table::InstrFlags as F;

    pub(crate) const J: F = F::IS_JUMP.union(F::IS_JUMP_WITH_ADDRESS);
    pub(crate) const JAL: F = J.union(F::DOES_LINK);
    pub(crate) const JR: F = F::IS_JUMP.union(F::READS_RS);
    pub(crate) const JALR: F = JR.union(F::DOES_LINK).union(F::MODIFIES_RD);
    pub(crate) const BRANCH_RS_RT: F = F::IS_BRANCH.union(F::READS_RS).union(F::READS_RT);
    pub(crate) const BRANCH_RS: F = F::IS_BRANCH.union(F::READS_RS);
    pub(crate) const BRANCH_LINK: F = BRANCH_RS.union(F::DOES_LINK);
    pub(crate) const COP_BRANCH: F = F::IS_BRANCH;
    pub(crate) const LIKELY: F = F::IS_BRANCH_LIKELY;
    pub(crate) const ALU_IMM: F = F::MODIFIES_RT.union(F::READS_RS);
    pub(crate) const ALU_IMM_LO: F = ALU_IMM.union(F::CAN_BE_LO);
    pub(crate) const ALU_UIMM: F = ALU_IMM.union(F::IS_UNSIGNED);
    pub(crate) const LUI: F = F::MODIFIES_RT.union(F::IS_UNSIGNED).union(F::CAN_BE_HI);
    pub(crate) const ALU_REG: F = F::MODIFIES_RD.union(F::READS_RS).union(F::READS_RT);
    pub(crate) const ALU_MOVE: F = ALU_REG.union(F::MAYBE_IS_MOVE);
    pub(crate) const SHIFT_SA: F = F::MODIFIES_RD.union(F::READS_RT);
    pub(crate) const LOAD: F = F::DOES_LOAD
        .union(F::MODIFIES_RT)
        .union(F::READS_RS)
        .union(F::CAN_BE_LO);
    pub(crate) const LOAD_U: F = LOAD.union(F::DOES_UNSIGNED_MEMORY_ACCESS);
    pub(crate) const LOAD_MERGE: F = LOAD.union(F::READS_RT);
    pub(crate) const STORE: F = F::DOES_STORE
        .union(F::READS_RT)
        .union(F::READS_RS)
        .union(F::CAN_BE_LO);
    pub(crate) const STORE_COND: F = STORE.union(F::MODIFIES_RT);
    pub(crate) const FP_LOAD: F = F::DOES_LOAD
        .union(F::MODIFIES_FT)
        .union(F::READS_RS)
        .union(F::CAN_BE_LO)
        .union(F::IS_FLOAT);
    pub(crate) const FP_STORE: F = F::DOES_STORE
        .union(F::READS_FT)
        .union(F::READS_RS)
        .union(F::CAN_BE_LO)
        .union(F::IS_FLOAT);
    pub(crate) const COP_LOAD: F = F::DOES_LOAD
        .union(F::MODIFIES_COP_REG)
        .union(F::READS_RS)
        .union(F::CAN_BE_LO);
    pub(crate) const COP_STORE: F = F::DOES_STORE
        .union(F::READS_COP_REG)
        .union(F::READS_RS)
        .union(F::CAN_BE_LO);
    pub(crate) const MULT: F = F::READS_RS
        .union(F::READS_RT)
        .union(F::MODIFIES_HI)
        .union(F::MODIFIES_LO);
    pub(crate) const MFHI: F = F::MODIFIES_RD.union(F::READS_HI);
    pub(crate) const MFLO: F = F::MODIFIES_RD.union(F::READS_LO);
    pub(crate) const MTHI: F = F::READS_RS.union(F::MODIFIES_HI);
    pub(crate) const MTLO: F = F::READS_RS.union(F::MODIFIES_LO);
    pub(crate) const TRAP_REG: F = F::IS_TRAP.union(F::READS_RS).union(F::READS_RT);
    pub(crate) const TRAP_IMM: F = F::IS_TRAP.union(F::READS_RS);
    pub(crate) const SYSTEM: F = F::NOT_EMITTED_BY_COMPILERS;
    pub(crate) const MF_COP: F = F::MODIFIES_RT
        .union(F::READS_COP_REG)
        .union(F::NOT_EMITTED_BY_COMPILERS);
    pub(crate) const MT_COP: F = F::READS_RT
        .union(F::MODIFIES_COP_REG)
        .union(F::NOT_EMITTED_BY_COMPILERS);
    pub(crate) const MF_FPR: F = F::MODIFIES_RT.union(F::READS_FS).union(F::IS_FLOAT);
    pub(crate) const MT_FPR: F = F::READS_RT.union(F::MODIFIES_FS).union(F::IS_FLOAT);
    pub(crate) const CF_FPU: F = F::MODIFIES_RT.union(F::READS_COP_REG);
    pub(crate) const CT_FPU: F = F::READS_RT.union(F::MODIFIES_COP_REG);
    pub(crate) const MF_C2: F = F::MODIFIES_RT.union(F::READS_COP_REG);
    pub(crate) const MT_C2: F = F::READS_RT.union(F::MODIFIES_COP_REG);
    pub(crate) const FP3: F = F::IS_FLOAT
        .union(F::MODIFIES_FD)
        .union(F::READS_FS)
        .union(F::READS_FT);
    pub(crate) const FP2: F = F::IS_FLOAT.union(F::MODIFIES_FD).union(F::READS_FS);
    pub(crate) const FP_CMP: F = F::IS_FLOAT.union(F::READS_FS).union(F::READS_FT);
    pub(crate) const DP3: F = FP3.union(F::IS_DOUBLE);
    pub(crate) const DP2: F = FP2.union(F::IS_DOUBLE);
    pub(crate) const DP_CMP: F = FP_CMP.union(F::IS_DOUBLE);
}

const M2: IsaVersion = IsaVersion::Mips2;
const M3: IsaVersion = IsaVersion::Mips3;

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
    E::new(0x0D, I::Ori, RT_RS_IMM, ALU_UIMM.union(InstrFlags::CAN_BE_LO)),
    E::new(0x0E, I::Xori, RT_RS_IMM, ALU_UIMM),
    E::new(0x0F, I::Lui, RT_IMM, LUI),
    E::new(0x14, I::Beql, RS_RT_BRANCH, BRANCH_RS_RT.union(LIKELY)).isa(M2),
    E::new(0x15, I::Bnel, RS_RT_BRANCH, BRANCH_RS_RT.union(LIKELY)).isa(M2),
    E::new(0x16, I::Blezl, RS_BRANCH, BRANCH_RS.union(LIKELY)).isa(M2),
    E::new(0x17, I::Bgtzl, RS_BRANCH, BRANCH_RS.union(LIKELY)).isa(M2),
    E::new(0x18, I::Daddi, RT_RS_IMM, ALU_IMM).isa(M3),
    E::new(0x19, I::Daddiu, RT_RS_IMM, ALU_IMM_LO).isa(M3),
    E::new(0x1A, I::Ldl, RT_MEM, LOAD_MERGE)
        .access(AccessType::DoublewordLeft)
        .isa(M3),
    E::new(0x1B, I::Ldr, RT_MEM, LOAD_MERGE)
        .access(AccessType::DoublewordRight)
        .isa(M3),
    E::new(0x20, I::Lb, RT_MEM, LOAD).access(AccessType::Byte),
    E::new(0x21, I::Lh, RT_MEM, LOAD).access(AccessType::Short),
    E::new(0x22, I::Lwl, RT_MEM, LOAD_MERGE).access(AccessType::WordLeft),
    E::new(0x23, I::Lw, RT_MEM, LOAD).access(AccessType::Word),
    E::new(0x24, I::Lbu, RT_MEM, LOAD_U).access(AccessType::Byte),
    E::new(0x25, I::Lhu, RT_MEM, LOAD_U).access(AccessType::Short),
    E::new(0x26, I::Lwr, RT_MEM, LOAD_MERGE).access(AccessType::WordRight),
    E::new(0x27, I::Lwu, RT_MEM, LOAD_U)
        .access(AccessType::Word)
        .isa(M3),
    E::new(0x28, I::Sb, RT_MEM, STORE).access(AccessType::Byte),
    E::new(0x29, I::Sh, RT_MEM, STORE).access(AccessType::Short),
    E::new(0x2A, I::Swl, RT_MEM, STORE).access(AccessType::WordLeft),
    E::new(0x2B, I::Sw, RT_MEM, STORE).access(AccessType::Word),
    E::new(0x2C, I::Sdl, RT_MEM, STORE)
        .access(AccessType::DoublewordLeft)
        .isa(M3),
    E::new(0x2D, I::Sdr, RT_MEM, STORE)
        .access(AccessType::DoublewordRight)
        .isa(M3),
    E::new(0x2E, I::Swr, RT_MEM, STORE).access(AccessType::WordRight),
    E::new(0x2F, I::Cache, OP_MEM, SYSTEM.union(InstrFlags::READS_RS)).isa(M3),
    E::new(0x30, I::Ll, RT_MEM, LOAD).access(AccessType::Word).isa(M2),
    E::new(0x31, I::Lwc1, FT_MEM, FP_LOAD).access(AccessType::Float),
    E::new(0x32, I::Lwc2, COP2T_MEM, COP_LOAD).access(AccessType::Word),
    E::new(0x33, I::Pref, HINT_MEM, InstrFlags::READS_RS).isa(M3),
    E::new(0x34, I::Lld, RT_MEM, LOAD)
        .access(AccessType::Doubleword)
        .isa(M3),
    E::new(0x35, I::Ldc1, FT_MEM, FP_LOAD.union(InstrFlags::IS_DOUBLE))
        .access(AccessType::DoubleFloat)
        .isa(M2),
    E::new(0x36, I::Ldc2, COP2T_MEM, COP_LOAD)
        .access(AccessType::Doubleword)
        .isa(M2),
    E::new(0x37, I::Ld, RT_MEM, LOAD)
        .access(AccessType::Doubleword)
        .isa(M3),
    E::new(0x38, I::Sc, RT_MEM, STORE_COND)
        .access(AccessType::Word)
        .isa(M2),
    E::new(0x39, I::Swc1, FT_MEM, FP_STORE).access(AccessType::Float),
    E::new(0x3A, I::Swc2, COP2T_MEM, COP_STORE).access(AccessType::Word),
    E::new(0x3C, I::Scd, RT_MEM, STORE_COND)
        .access(AccessType::Doubleword)
        .isa(M3),
    E::new(0x3D, I::Sdc1, FT_MEM, FP_STORE.union(InstrFlags::IS_DOUBLE))
        .access(AccessType::DoubleFloat)
        .isa(M2),
    E::new(0x3E, I::Sdc2, COP2T_MEM, COP_STORE)
        .access(AccessType::Doubleword)
        .isa(M2),
    E::new(0x3F, I::Sd, RT_MEM, STORE)
        .access(AccessType::Doubleword)
        .isa(M3),
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
    E::new(0x0C, I::Syscall, CODE, SYSTEM),
    E::new(0x0D, I::Break, CODE, SYSTEM),
    E::new(0x0F, I::Sync, NONE, SYSTEM).isa(M2),
    E::new(0x10, I::Mfhi, RD, MFHI),
    E::new(0x11, I::Mthi, RS, MTHI),
    E::new(0x12, I::Mflo, RD, MFLO),
    E::new(0x13, I::Mtlo, RS, MTLO),
    E::new(0x14, I::Dsllv, RD_RT_RS, ALU_REG).isa(M3),
    E::new(0x16, I::Dsrlv, RD_RT_RS, ALU_REG).isa(M3),
    E::new(0x17, I::Dsrav, RD_RT_RS, ALU_REG).isa(M3),
    E::new(0x18, I::Mult, RS_RT, MULT),
    E::new(0x19, I::Multu, RS_RT, MULT),
    E::new(0x1A, I::Div, ZERO_RS_RT, MULT),
    E::new(0x1B, I::Divu, ZERO_RS_RT, MULT),
    E::new(0x1C, I::Dmult, RS_RT, MULT).isa(M3),
    E::new(0x1D, I::Dmultu, RS_RT, MULT).isa(M3),
    E::new(0x1E, I::Ddiv, ZERO_RS_RT, MULT).isa(M3),
    E::new(0x1F, I::Ddivu, ZERO_RS_RT, MULT).isa(M3),
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
    E::new(0x2C, I::Dadd, RD_RS_RT, ALU_MOVE).isa(M3),
    E::new(0x2D, I::Daddu, RD_RS_RT, ALU_MOVE).isa(M3),
    E::new(0x2E, I::Dsub, RD_RS_RT, ALU_REG).isa(M3),
    E::new(0x2F, I::Dsubu, RD_RS_RT, ALU_REG).isa(M3),
    E::new(0x30, I::Tge, RS_RT_CODE, TRAP_REG).isa(M2),
    E::new(0x31, I::Tgeu, RS_RT_CODE, TRAP_REG).isa(M2),
    E::new(0x32, I::Tlt, RS_RT_CODE, TRAP_REG).isa(M2),
    E::new(0x33, I::Tltu, RS_RT_CODE, TRAP_REG).isa(M2),
    E::new(0x34, I::Teq, RS_RT_CODE, TRAP_REG).isa(M2),
    E::new(0x36, I::Tne, RS_RT_CODE, TRAP_REG).isa(M2),
    E::new(0x38, I::Dsll, RD_RT_SA, SHIFT_SA).isa(M3),
    E::new(0x3A, I::Dsrl, RD_RT_SA, SHIFT_SA).isa(M3),
    E::new(0x3B, I::Dsra, RD_RT_SA, SHIFT_SA).isa(M3),
    E::new(0x3C, I::Dsll32, RD_RT_SA, SHIFT_SA).isa(M3),
    E::new(0x3E, I::Dsrl32, RD_RT_SA, SHIFT_SA).isa(M3),
    E::new(0x3F, I::Dsra32, RD_RT_SA, SHIFT_SA).isa(M3),
];

/// REGIMM table, keyed by rt.
pub(crate) static REGIMM: &[E] = &[
    E::new(0x00, I::Bltz, RS_BRANCH, BRANCH_RS),
    E::new(0x01, I::Bgez, RS_BRANCH, BRANCH_RS),
    E::new(0x02, I::Bltzl, RS_BRANCH, BRANCH_RS.union(LIKELY)).isa(M2),
    E::new(0x03, I::Bgezl, RS_BRANCH, BRANCH_RS.union(LIKELY)).isa(M2),
    E::new(0x08, I::Tgei, RS_IMM, TRAP_IMM).isa(M2),
    E::new(0x09, I::Tgeiu, RS_IMM, TRAP_IMM).isa(M2),
    E::new(0x0A, I::Tlti, RS_IMM, TRAP_IMM).isa(M2),
    E::new(0x0B, I::Tltiu, RS_IMM, TRAP_IMM).isa(M2),
    E::new(0x0C, I::Teqi, RS_IMM, TRAP_IMM).isa(M2),
    E::new(0x0E, I::Tnei, RS_IMM, TRAP_IMM).isa(M2),
    E::new(0x10, I::Bltzal, RS_BRANCH, BRANCH_LINK),
    E::new(0x11, I::Bgezal, RS_BRANCH, BRANCH_LINK),
    E::new(0x12, I::Bltzall, RS_BRANCH, BRANCH_LINK.union(LIKELY)).isa(M2),
    E::new(0x13, I::Bgezall, RS_BRANCH, BRANCH_LINK.union(LIKELY)).isa(M2),
];

/// COP0 move table, keyed by fmt.
pub(crate) static COP0: &[E] = &[
    E::new(0x00, I::Mfc0, RT_COP0D, MF_COP),
    E::new(0x01, I::Dmfc0, RT_COP0D, MF_COP).isa(M3),
    E::new(0x02, I::Cfc0, RT_COP0D, MF_COP),
    E::new(0x04, I::Mtc0, RT_COP0D, MT_COP),
    E::new(0x05, I::Dmtc0, RT_COP0D, MT_COP).isa(M3),
    E::new(0x06, I::Ctc0, RT_COP0D, MT_COP),
];

/// COP0 branch table, keyed by rt.
pub(crate) static BC0: &[E] = &[
    E::new(0x00, I::Bc0f, BRANCH, COP_BRANCH),
    E::new(0x01, I::Bc0t, BRANCH, COP_BRANCH),
    E::new(0x02, I::Bc0fl, BRANCH, COP_BRANCH.union(LIKELY)).isa(M2),
    E::new(0x03, I::Bc0tl, BRANCH, COP_BRANCH.union(LIKELY)).isa(M2),
];

/// COP0 TLB/exception table, keyed by function.
pub(crate) static TLB: &[E] = &[
    E::new(0x01, I::Tlbr, NONE, SYSTEM),
    E::new(0x02, I::Tlbwi, NONE, SYSTEM),
    E::new(0x06, I::Tlbwr, NONE, SYSTEM),
    E::new(0x08, I::Tlbp, NONE, SYSTEM),
    E::new(0x18, I::Eret, NONE, SYSTEM.union(InstrFlags::IS_RETURN)).isa(M3),
];

/// COP1 move table, keyed by fmt.
pub(crate) static COP1: &[E] = &[
    E::new(0x00, I::Mfc1, RT_FS, MF_FPR),
    E::new(0x01, I::Dmfc1, RT_FS, MF_FPR).isa(M3),
    E::new(0x02, I::Cfc1, RT_COP1CS, CF_FPU),
    E::new(0x04, I::Mtc1, RT_FS, MT_FPR),
    E::new(0x05, I::Dmtc1, RT_FS, MT_FPR).isa(M3),
    E::new(0x06, I::Ctc1, RT_COP1CS, CT_FPU),
];

/// COP1 branch table, keyed by rt.
pub(crate) static BC1: &[E] = &[
    E::new(0x00, I::Bc1f, BRANCH, COP_BRANCH),
    E::new(0x01, I::Bc1t, BRANCH, COP_BRANCH),
    E::new(0x02, I::Bc1fl, BRANCH, COP_BRANCH.union(LIKELY)).isa(M2),
    E::new(0x03, I::Bc1tl, BRANCH, COP_BRANCH.union(LIKELY)).isa(M2),
];

/// Single-precision FPU table, keyed by function.
pub(crate) static FPU_S: &[E] = &[
    E::new(0x00, I::AddS, FD_FS_FT, FP3),
    E::new(0x01, I::SubS, FD_FS_FT, FP3),
    E::new(0x02, I::MulS, FD_FS_FT, FP3),
    E::new(0x03, I::DivS, FD_FS_FT, FP3),
    E::new(0x04, I::SqrtS, FD_FS, FP2).isa(M2),
    E::new(0x05, I::AbsS, FD_FS, FP2),
    E::new(0x06, I::MovS, FD_FS, FP2),
    E::new(0x07, I::NegS, FD_FS, FP2),
    E::new(0x08, I::RoundLS, FD_FS, FP2).isa(M3),
    E::new(0x09, I::TruncLS, FD_FS, FP2).isa(M3),
    E::new(0x0A, I::CeilLS, FD_FS, FP2).isa(M3),
    E::new(0x0B, I::FloorLS, FD_FS, FP2).isa(M3),
    E::new(0x0C, I::RoundWS, FD_FS, FP2).isa(M2),
    E::new(0x0D, I::TruncWS, FD_FS, FP2).isa(M2),
    E::new(0x0E, I::CeilWS, FD_FS, FP2).isa(M2),
    E::new(0x0F, I::FloorWS, FD_FS, FP2).isa(M2),
    E::new(0x21, I::CvtDS, FD_FS, FP2),
    E::new(0x24, I::CvtWS, FD_FS, FP2),
    E::new(0x25, I::CvtLS, FD_FS, FP2).isa(M3),
    E::new(0x30, I::CFS, FS_FT, FP_CMP),
    E::new(0x31, I::CUnS, FS_FT, FP_CMP),
    E::new(0x32, I::CEqS, FS_FT, FP_CMP),
    E::new(0x33, I::CUeqS, FS_FT, FP_CMP),
    E::new(0x34, I::COltS, FS_FT, FP_CMP),
    E::new(0x35, I::CUltS, FS_FT, FP_CMP),
    E::new(0x36, I::COleS, FS_FT, FP_CMP),
    E::new(0x37, I::CUleS, FS_FT, FP_CMP),
    E::new(0x38, I::CSfS, FS_FT, FP_CMP),
    E::new(0x39, I::CNgleS, FS_FT, FP_CMP),
    E::new(0x3A, I::CSeqS, FS_FT, FP_CMP),
    E::new(0x3B, I::CNglS, FS_FT, FP_CMP),
    E::new(0x3C, I::CLtS, FS_FT, FP_CMP),
    E::new(0x3D, I::CNgeS, FS_FT, FP_CMP),
    E::new(0x3E, I::CLeS, FS_FT, FP_CMP),
    E::new(0x3F, I::CNgtS, FS_FT, FP_CMP),
];

/// Double-precision FPU table, keyed by function.
pub(crate) static FPU_D: &[E] = &[
    E::new(0x00, I::AddD, FD_FS_FT, DP3),
    E::new(0x01, I::SubD, FD_FS_FT, DP3),
    E::new(0x02, I::MulD, FD_FS_FT, DP3),
    E::new(0x03, I::DivD, FD_FS_FT, DP3),
    E::new(0x04, I::SqrtD, FD_FS, DP2).isa(M2),
    E::new(0x05, I::AbsD, FD_FS, DP2),
    E::new(0x06, I::MovD, FD_FS, DP2),
    E::new(0x07, I::NegD, FD_FS, DP2),
    E::new(0x08, I::RoundLD, FD_FS, DP2).isa(M3),
    E::new(0x09, I::TruncLD, FD_FS, DP2).isa(M3),
    E::new(0x0A, I::CeilLD, FD_FS, DP2).isa(M3),
    E::new(0x0B, I::FloorLD, FD_FS, DP2).isa(M3),
    E::new(0x0C, I::RoundWD, FD_FS, DP2).isa(M2),
    E::new(0x0D, I::TruncWD, FD_FS, DP2).isa(M2),
    E::new(0x0E, I::CeilWD, FD_FS, DP2).isa(M2),
    E::new(0x0F, I::FloorWD, FD_FS, DP2).isa(M2),
    E::new(0x20, I::CvtSD, FD_FS, DP2),
    E::new(0x24, I::CvtWD, FD_FS, DP2),
    E::new(0x25, I::CvtLD, FD_FS, DP2).isa(M3),
    E::new(0x30, I::CFD, FS_FT, DP_CMP),
    E::new(0x31, I::CUnD, FS_FT, DP_CMP),
    E::new(0x32, I::CEqD, FS_FT, DP_CMP),
    E::new(0x33, I::CUeqD, FS_FT, DP_CMP),
    E::new(0x34, I::COltD, FS_FT, DP_CMP),
    E::new(0x35, I::CUltD, FS_FT, DP_CMP),
    E::new(0x36, I::COleD, FS_FT, DP_CMP),
    E::new(0x37, I::CUleD, FS_FT, DP_CMP),
    E::new(0x38, I::CSfD, FS_FT, DP_CMP),
    E::new(0x39, I::CNgleD, FS_FT, DP_CMP),
    E::new(0x3A, I::CSeqD, FS_FT, DP_CMP),
    E::new(0x3B, I::CNglD, FS_FT, DP_CMP),
    E::new(0x3C, I::CLtD, FS_FT, DP_CMP),
    E::new(0x3D, I::CNgeD, FS_FT, DP_CMP),
    E::new(0x3E, I::CLeD, FS_FT, DP_CMP),
    E::new(0x3F, I::CNgtD, FS_FT, DP_CMP),
];

/// 32-bit fixed-point conversions, keyed by function.
pub(crate) static FPU_W: &[E] = &[
    E::new(0x20, I::CvtSW, FD_FS, FP2),
    E::new(0x21, I::CvtDW, FD_FS, FP2),
];

/// 64-bit fixed-point conversions, keyed by function.
pub(crate) static FPU_L: &[E] = &[
    E::new(0x20, I::CvtSL, FD_FS, FP2).isa(M3),
    E::new(0x21, I::CvtDL, FD_FS, FP2).isa(M3),
];

/// COP2 move table, keyed by fmt.
pub(crate) static COP2: &[E] = &[
    E::new(0x00, I::Mfc2, RT_COP2D, MF_C2),
    E::new(0x01, I::Dmfc2, RT_COP2D, MF_C2).isa(M3),
    E::new(0x02, I::Cfc2, RT_COP2CD, MF_C2),
    E::new(0x04, I::Mtc2, RT_COP2D, MT_C2),
    E::new(0x05, I::Dmtc2, RT_COP2D, MT_C2).isa(M3),
    E::new(0x06, I::Ctc2, RT_COP2CD, MT_C2),
];

/// COP2 branch table, keyed by rt.
pub(crate) static BC2: &[E] = &[
    E::new(0x00, I::Bc2f, BRANCH, COP_BRANCH),
    E::new(0x01, I::Bc2t, BRANCH, COP_BRANCH),
    E::new(0x02, I::Bc2fl, BRANCH, COP_BRANCH.union(LIKELY)).isa(M2),
    E::new(0x03, I::Bc2tl, BRANCH, COP_BRANCH.union(LIKELY)).isa(M2),
];
