//! Instruction identifiers.
//!
//! Every table entry resolves to one [`InstrId`]. Identifiers are shared between
//! categories where the operation is the same (`addu` is `addu` on every variant);
//! per-category differences live in the table entries instead. Pseudo-instruction
//! mnemonics are identifiers too, so a simplified rendering is still a typed value.

use std::fmt;

use serde::Serialize;

macro_rules! instr_ids {
    ($($variant:ident => $name:literal,)*) => {
        /// Resolved semantic instruction kind.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
        pub enum InstrId {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl InstrId {
            /// Every identifier, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the assembler mnemonic of this identifier.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

instr_ids! {
    Invalid => "INVALID",

    // Primary opcodes
    J => "j",
    Jal => "jal",
    Beq => "beq",
    Bne => "bne",
    Blez => "blez",
    Bgtz => "bgtz",
    Addi => "addi",
    Addiu => "addiu",
    Slti => "slti",
    Sltiu => "sltiu",
    Andi => "andi",
    Ori => "ori",
    Xori => "xori",
    Lui => "lui",
    Beql => "beql",
    Bnel => "bnel",
    Blezl => "blezl",
    Bgtzl => "bgtzl",
    Daddi => "daddi",
    Daddiu => "daddiu",
    Ldl => "ldl",
    Ldr => "ldr",
    Lb => "lb",
    Lh => "lh",
    Lwl => "lwl",
    Lw => "lw",
    Lbu => "lbu",
    Lhu => "lhu",
    Lwr => "lwr",
    Lwu => "lwu",
    Sb => "sb",
    Sh => "sh",
    Swl => "swl",
    Sw => "sw",
    Sdl => "sdl",
    Sdr => "sdr",
    Swr => "swr",
    Cache => "cache",
    Ll => "ll",
    Lwc1 => "lwc1",
    Lwc2 => "lwc2",
    Pref => "pref",
    Lld => "lld",
    Ldc1 => "ldc1",
    Ldc2 => "ldc2",
    Ld => "ld",
    Sc => "sc",
    Swc1 => "swc1",
    Swc2 => "swc2",
    Scd => "scd",
    Sdc1 => "sdc1",
    Sdc2 => "sdc2",
    Sd => "sd",

    // SPECIAL
    Sll => "sll",
    Srl => "srl",
    Sra => "sra",
    Sllv => "sllv",
    Srlv => "srlv",
    Srav => "srav",
    Jr => "jr",
    Jalr => "jalr",
    Syscall => "syscall",
    Break => "break",
    Sync => "sync",
    Mfhi => "mfhi",
    Mthi => "mthi",
    Mflo => "mflo",
    Mtlo => "mtlo",
    Dsllv => "dsllv",
    Dsrlv => "dsrlv",
    Dsrav => "dsrav",
    Mult => "mult",
    Multu => "multu",
    Div => "div",
    Divu => "divu",
    Dmult => "dmult",
    Dmultu => "dmultu",
    Ddiv => "ddiv",
    Ddivu => "ddivu",
    Add => "add",
    Addu => "addu",
    Sub => "sub",
    Subu => "subu",
    And => "and",
    Or => "or",
    Xor => "xor",
    Nor => "nor",
    Slt => "slt",
    Sltu => "sltu",
    Dadd => "dadd",
    Daddu => "daddu",
    Dsub => "dsub",
    Dsubu => "dsubu",
    Tge => "tge",
    Tgeu => "tgeu",
    Tlt => "tlt",
    Tltu => "tltu",
    Teq => "teq",
    Tne => "tne",
    Dsll => "dsll",
    Dsrl => "dsrl",
    Dsra => "dsra",
    Dsll32 => "dsll32",
    Dsrl32 => "dsrl32",
    Dsra32 => "dsra32",

    // REGIMM
    Bltz => "bltz",
    Bgez => "bgez",
    Bltzl => "bltzl",
    Bgezl => "bgezl",
    Tgei => "tgei",
    Tgeiu => "tgeiu",
    Tlti => "tlti",
    Tltiu => "tltiu",
    Teqi => "teqi",
    Tnei => "tnei",
    Bltzal => "bltzal",
    Bgezal => "bgezal",
    Bltzall => "bltzall",
    Bgezall => "bgezall",

    // COP0
    Mfc0 => "mfc0",
    Dmfc0 => "dmfc0",
    Cfc0 => "cfc0",
    Mtc0 => "mtc0",
    Dmtc0 => "dmtc0",
    Ctc0 => "ctc0",
    Bc0f => "bc0f",
    Bc0t => "bc0t",
    Bc0fl => "bc0fl",
    Bc0tl => "bc0tl",
    Tlbr => "tlbr",
    Tlbwi => "tlbwi",
    Tlbwr => "tlbwr",
    Tlbp => "tlbp",
    Rfe => "rfe",
    Eret => "eret",

    // COP1
    Mfc1 => "mfc1",
    Dmfc1 => "dmfc1",
    Cfc1 => "cfc1",
    Mtc1 => "mtc1",
    Dmtc1 => "dmtc1",
    Ctc1 => "ctc1",
    Bc1f => "bc1f",
    Bc1t => "bc1t",
    Bc1fl => "bc1fl",
    Bc1tl => "bc1tl",

    // COP1 FPU.S
    AddS => "add.s",
    SubS => "sub.s",
    MulS => "mul.s",
    DivS => "div.s",
    SqrtS => "sqrt.s",
    AbsS => "abs.s",
    MovS => "mov.s",
    NegS => "neg.s",
    RoundLS => "round.l.s",
    TruncLS => "trunc.l.s",
    CeilLS => "ceil.l.s",
    FloorLS => "floor.l.s",
    RoundWS => "round.w.s",
    TruncWS => "trunc.w.s",
    CeilWS => "ceil.w.s",
    FloorWS => "floor.w.s",
    CvtDS => "cvt.d.s",
    CvtWS => "cvt.w.s",
    CvtLS => "cvt.l.s",
    CFS => "c.f.s",
    CUnS => "c.un.s",
    CEqS => "c.eq.s",
    CUeqS => "c.ueq.s",
    COltS => "c.olt.s",
    CUltS => "c.ult.s",
    COleS => "c.ole.s",
    CUleS => "c.ule.s",
    CSfS => "c.sf.s",
    CNgleS => "c.ngle.s",
    CSeqS => "c.seq.s",
    CNglS => "c.ngl.s",
    CLtS => "c.lt.s",
    CNgeS => "c.nge.s",
    CLeS => "c.le.s",
    CNgtS => "c.ngt.s",

    // COP1 FPU.D
    AddD => "add.d",
    SubD => "sub.d",
    MulD => "mul.d",
    DivD => "div.d",
    SqrtD => "sqrt.d",
    AbsD => "abs.d",
    MovD => "mov.d",
    NegD => "neg.d",
    RoundLD => "round.l.d",
    TruncLD => "trunc.l.d",
    CeilLD => "ceil.l.d",
    FloorLD => "floor.l.d",
    RoundWD => "round.w.d",
    TruncWD => "trunc.w.d",
    CeilWD => "ceil.w.d",
    FloorWD => "floor.w.d",
    CvtSD => "cvt.s.d",
    CvtWD => "cvt.w.d",
    CvtLD => "cvt.l.d",
    CFD => "c.f.d",
    CUnD => "c.un.d",
    CEqD => "c.eq.d",
    CUeqD => "c.ueq.d",
    COltD => "c.olt.d",
    CUltD => "c.ult.d",
    COleD => "c.ole.d",
    CUleD => "c.ule.d",
    CSfD => "c.sf.d",
    CNgleD => "c.ngle.d",
    CSeqD => "c.seq.d",
    CNglD => "c.ngl.d",
    CLtD => "c.lt.d",
    CNgeD => "c.nge.d",
    CLeD => "c.le.d",
    CNgtD => "c.ngt.d",

    // COP1 FPU.W / FPU.L
    CvtSW => "cvt.s.w",
    CvtDW => "cvt.d.w",
    CvtSL => "cvt.s.l",
    CvtDL => "cvt.d.l",

    // COP2
    Mfc2 => "mfc2",
    Dmfc2 => "dmfc2",
    Cfc2 => "cfc2",
    Mtc2 => "mtc2",
    Dmtc2 => "dmtc2",
    Ctc2 => "ctc2",
    Bc2f => "bc2f",
    Bc2t => "bc2t",
    Bc2fl => "bc2fl",
    Bc2tl => "bc2tl",

    // Pseudo-instructions
    Nop => "nop",
    B => "b",
    Beqz => "beqz",
    Bnez => "bnez",
    Beqzl => "beqzl",
    Bnezl => "bnezl",
    Bal => "bal",
    Move => "move",
    Not => "not",
    Neg => "neg",
    Negu => "negu",
    Dneg => "dneg",
    Dnegu => "dnegu",

    // RSP vector unit
    Vmulf => "vmulf",
    Vmulu => "vmulu",
    Vrndp => "vrndp",
    Vmulq => "vmulq",
    Vmudl => "vmudl",
    Vmudm => "vmudm",
    Vmudn => "vmudn",
    Vmudh => "vmudh",
    Vmacf => "vmacf",
    Vmacu => "vmacu",
    Vrndn => "vrndn",
    Vmacq => "vmacq",
    Vmadl => "vmadl",
    Vmadm => "vmadm",
    Vmadn => "vmadn",
    Vmadh => "vmadh",
    Vadd => "vadd",
    Vsub => "vsub",
    Vabs => "vabs",
    Vaddc => "vaddc",
    Vsubc => "vsubc",
    Vsar => "vsar",
    Vlt => "vlt",
    Veq => "veq",
    Vne => "vne",
    Vge => "vge",
    Vcl => "vcl",
    Vch => "vch",
    Vcr => "vcr",
    Vmrg => "vmrg",
    Vand => "vand",
    Vnand => "vnand",
    Vor => "vor",
    Vnor => "vnor",
    Vxor => "vxor",
    Vnxor => "vnxor",
    Vrcp => "vrcp",
    Vrcpl => "vrcpl",
    Vrcph => "vrcph",
    Vmov => "vmov",
    Vrsq => "vrsq",
    Vrsql => "vrsql",
    Vrsqh => "vrsqh",
    Vnop => "vnop",

    // RSP vector loads (LWC2)
    Lbv => "lbv",
    Lsv => "lsv",
    Llv => "llv",
    Ldv => "ldv",
    Lqv => "lqv",
    Lrv => "lrv",
    Lpv => "lpv",
    Luv => "luv",
    Lhv => "lhv",
    Lfv => "lfv",
    Ltv => "ltv",

    // RSP vector stores (SWC2)
    Sbv => "sbv",
    Ssv => "ssv",
    Slv => "slv",
    Sdv => "sdv",
    Sqv => "sqv",
    Srv => "srv",
    Spv => "spv",
    Suv => "suv",
    Shv => "shv",
    Sfv => "sfv",
    Swv => "swv",
    Stv => "stv",

    // R3000 GTE commands
    Rtps => "rtps",
    Nclip => "nclip",
    Op => "op",
    Dpcs => "dpcs",
    Intpl => "intpl",
    Mvmva => "mvmva",
    Ncds => "ncds",
    Cdp => "cdp",
    Ncdt => "ncdt",
    Nccs => "nccs",
    Cc => "cc",
    Ncs => "ncs",
    Nct => "nct",
    Sqr => "sqr",
    Dcpl => "dcpl",
    Dpct => "dpct",
    Avsz3 => "avsz3",
    Avsz4 => "avsz4",
    Rtpt => "rtpt",
    Gpf => "gpf",
    Gpl => "gpl",
    Ncct => "ncct",
}

impl fmt::Display for InstrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The table an identifier was resolved from.
///
/// Each category owns a `*Invalid` variant that is reported when no table matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum InstrIdType {
    /// No CPU table matched.
    CpuInvalid,
    /// CPU primary opcode table.
    CpuNormal,
    /// CPU SPECIAL table (function field).
    CpuSpecial,
    /// CPU REGIMM table (rt field).
    CpuRegimm,
    /// CPU COP0 move table (fmt field).
    CpuCop0,
    /// CPU COP0 branch table.
    CpuCop0Bc0,
    /// CPU COP0 TLB/exception table.
    CpuCop0Tlb,
    /// CPU COP1 move table (fmt field).
    CpuCop1,
    /// CPU COP1 branch table.
    CpuCop1Bc1,
    /// Single-precision FPU operations.
    CpuCop1FpuS,
    /// Double-precision FPU operations.
    CpuCop1FpuD,
    /// Word fixed-point FPU conversions.
    CpuCop1FpuW,
    /// Long fixed-point FPU conversions.
    CpuCop1FpuL,
    /// CPU COP2 move table.
    CpuCop2,
    /// CPU COP2 branch table.
    CpuCop2Bc2,

    /// No RSP table matched.
    RspInvalid,
    /// RSP primary opcode table.
    RspNormal,
    /// RSP vector loads (LWC2, rd field).
    RspNormalLwc2,
    /// RSP vector stores (SWC2, rd field).
    RspNormalSwc2,
    /// RSP SPECIAL table.
    RspSpecial,
    /// RSP REGIMM table.
    RspRegimm,
    /// RSP COP0 move table.
    RspCop0,
    /// RSP COP2 move table.
    RspCop2,
    /// RSP vector unit computational table.
    RspCop2Vu,

    /// No R3000 GTE table matched.
    R3000GteInvalid,
    /// R3000 primary opcode table.
    R3000GteNormal,
    /// R3000 SPECIAL table.
    R3000GteSpecial,
    /// R3000 REGIMM table.
    R3000GteRegimm,
    /// R3000 COP0 move table.
    R3000GteCop0,
    /// R3000 COP0 branch table.
    R3000GteCop0Bc0,
    /// R3000 COP0 TLB/exception table.
    R3000GteCop0Tlb,
    /// R3000 COP1 move table.
    R3000GteCop1,
    /// R3000 COP1 branch table.
    R3000GteCop1Bc1,
    /// R3000 single-precision FPU operations.
    R3000GteCop1FpuS,
    /// R3000 double-precision FPU operations.
    R3000GteCop1FpuD,
    /// R3000 word fixed-point FPU conversions.
    R3000GteCop1FpuW,
    /// R3000 GTE register moves.
    R3000GteCop2,
    /// R3000 GTE commands.
    R3000GteCop2Gte,
}

impl InstrIdType {
    /// Returns `true` for the per-category "no table matched" variants.
    pub const fn is_invalid(self) -> bool {
        matches!(
            self,
            Self::CpuInvalid | Self::RspInvalid | Self::R3000GteInvalid
        )
    }
}

impl fmt::Display for InstrIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
