//! Operand slots.
//!
//! Each table entry lists its operands as a slice of [`Operand`]. The formatter walks
//! that slice to render text, and the classifier uses it to map register files onto
//! encoding fields.

use std::fmt;

use serde::Serialize;

use crate::isa::abi::RegisterFile;

/// One operand slot of an instruction's textual form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operand {
    /// GPR in the rs field.
    CpuRs,
    /// GPR in the rt field.
    CpuRt,
    /// GPR in the rd field.
    CpuRd,
    /// Shift amount, decimal.
    CpuSa,
    /// Literal `$zero`, used by the three-operand `div` forms.
    CpuZero,
    /// COP0 register in the rd field.
    CpuCop0d,
    /// FPR in the fs field.
    CpuFs,
    /// FPR in the ft field.
    CpuFt,
    /// FPR in the fd field.
    CpuFd,
    /// COP1 control register in the rd field.
    CpuCop1cs,
    /// COP2 register in the rt field (`lwc2`/`swc2`).
    CpuCop2t,
    /// COP2 register in the rd field.
    CpuCop2d,
    /// COP2 control register in the rd field.
    CpuCop2cd,
    /// `cache` operation, rt field.
    CpuOp,
    /// `pref` hint, rt field.
    CpuHint,
    /// `syscall` code, or the upper and lower halves of a `break` code.
    CpuCode,
    /// Lower 10 bits of a trap code.
    CpuCodeLower,
    /// Raw coprocessor operation field.
    CpuCopraw,
    /// Jump target (`func_XXXXXXXX`).
    CpuLabel,
    /// Immediate value, sign-extended unless the entry is unsigned.
    CpuImmediate,
    /// Branch target (`.LXXXXXXXX`).
    CpuBranchTargetLabel,
    /// `offset(base)` memory operand.
    CpuImmediateBase,
    /// `rd, rs` for `jalr`, or just `rs` when rd is `$ra`.
    CpuMaybeRdRs,

    /// RSP COP0 register in the rd field.
    RspCop0d,
    /// RSP vector control register in the rd field.
    RspCop2cd,
    /// Vector register in the vs field.
    RspVs,
    /// Vector register in the vt field.
    RspVt,
    /// Vector register in the vd field.
    RspVd,
    /// `vt[element]` with the element in bits 24-21.
    RspVtElementHigh,
    /// `vt[element]` with the element in bits 10-7.
    RspVtElementLow,
    /// Destination element register in bits 15-11.
    RspVdDe,
    /// `vs[index]` with the index in bits 10-7.
    RspVsIndex,
    /// Scaled `offset(base)` of a vector load or store.
    RspOffsetRs,

    /// GTE data register in the rd field.
    R3000GteCop2d,
    /// GTE control register in the rd field.
    R3000GteCop2cd,
    /// Shift-fraction flag.
    R3000GteSf,
    /// Multiply matrix selector.
    R3000GteMx,
    /// Multiply vector selector.
    R3000GteV,
    /// Translation vector selector.
    R3000GteCv,
    /// Saturation flag.
    R3000GteLm,
}

/// Encoding field an operand is read from, for register-effect queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RegField {
    Rs,
    Rt,
    Rd,
    Fs,
    Ft,
    Fd,
    Cop,
}

impl Operand {
    /// Returns a stable lowercase name, used by [`fmt::Display`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::CpuRs => "cpu_rs",
            Self::CpuRt => "cpu_rt",
            Self::CpuRd => "cpu_rd",
            Self::CpuSa => "cpu_sa",
            Self::CpuZero => "cpu_zero",
            Self::CpuCop0d => "cpu_cop0d",
            Self::CpuFs => "cpu_fs",
            Self::CpuFt => "cpu_ft",
            Self::CpuFd => "cpu_fd",
            Self::CpuCop1cs => "cpu_cop1cs",
            Self::CpuCop2t => "cpu_cop2t",
            Self::CpuCop2d => "cpu_cop2d",
            Self::CpuCop2cd => "cpu_cop2cd",
            Self::CpuOp => "cpu_op",
            Self::CpuHint => "cpu_hint",
            Self::CpuCode => "cpu_code",
            Self::CpuCodeLower => "cpu_code_lower",
            Self::CpuCopraw => "cpu_copraw",
            Self::CpuLabel => "cpu_label",
            Self::CpuImmediate => "cpu_immediate",
            Self::CpuBranchTargetLabel => "cpu_branch_target_label",
            Self::CpuImmediateBase => "cpu_immediate_base",
            Self::CpuMaybeRdRs => "cpu_maybe_rd_rs",
            Self::RspCop0d => "rsp_cop0d",
            Self::RspCop2cd => "rsp_cop2cd",
            Self::RspVs => "rsp_vs",
            Self::RspVt => "rsp_vt",
            Self::RspVd => "rsp_vd",
            Self::RspVtElementHigh => "rsp_vt_elementhigh",
            Self::RspVtElementLow => "rsp_vt_elementlow",
            Self::RspVdDe => "rsp_vd_de",
            Self::RspVsIndex => "rsp_vs_index",
            Self::RspOffsetRs => "rsp_offset_rs",
            Self::R3000GteCop2d => "r3000gte_cop2d",
            Self::R3000GteCop2cd => "r3000gte_cop2cd",
            Self::R3000GteSf => "r3000gte_sf",
            Self::R3000GteMx => "r3000gte_mx",
            Self::R3000GteV => "r3000gte_v",
            Self::R3000GteCv => "r3000gte_cv",
            Self::R3000GteLm => "r3000gte_lm",
        }
    }

    /// Operands that render the same encoding field as this one.
    pub const fn aliases(self) -> &'static [Self] {
        match self {
            Self::CpuRs => &[Self::CpuImmediateBase, Self::CpuMaybeRdRs, Self::RspOffsetRs],
            Self::CpuRd => &[Self::CpuMaybeRdRs],
            Self::CpuImmediate => &[Self::CpuImmediateBase],
            Self::CpuImmediateBase => &[Self::CpuRs, Self::CpuImmediate],
            Self::CpuMaybeRdRs => &[Self::CpuRd, Self::CpuRs],
            Self::RspVs => &[Self::RspVsIndex],
            Self::RspVsIndex => &[Self::RspVs],
            Self::RspVt => &[Self::RspVtElementHigh, Self::RspVtElementLow],
            Self::RspVtElementHigh | Self::RspVtElementLow => &[Self::RspVt],
            Self::RspVd => &[Self::RspVdDe],
            Self::RspVdDe => &[Self::RspVd],
            Self::RspOffsetRs => &[Self::CpuRs],
            _ => &[],
        }
    }

    /// Register files and fields this operand names, if any.
    ///
    /// Memory operands name their base register; `jalr` names both rd and rs.
    pub(crate) const fn registers(self) -> &'static [(RegisterFile, RegField)] {
        match self {
            Self::CpuRs | Self::CpuImmediateBase | Self::RspOffsetRs => {
                &[(RegisterFile::Gpr, RegField::Rs)]
            }
            Self::CpuRt => &[(RegisterFile::Gpr, RegField::Rt)],
            Self::CpuRd => &[(RegisterFile::Gpr, RegField::Rd)],
            Self::CpuMaybeRdRs => &[
                (RegisterFile::Gpr, RegField::Rd),
                (RegisterFile::Gpr, RegField::Rs),
            ],
            Self::CpuFs => &[(RegisterFile::Fpr, RegField::Fs)],
            Self::CpuFt => &[(RegisterFile::Fpr, RegField::Ft)],
            Self::CpuFd => &[(RegisterFile::Fpr, RegField::Fd)],
            Self::CpuCop0d => &[(RegisterFile::Cop0, RegField::Cop)],
            Self::CpuCop1cs => &[(RegisterFile::Cop1Control, RegField::Cop)],
            Self::CpuCop2t | Self::CpuCop2d => &[(RegisterFile::Cop2, RegField::Cop)],
            Self::CpuCop2cd => &[(RegisterFile::Cop2Control, RegField::Cop)],
            Self::RspCop0d => &[(RegisterFile::RspCop0, RegField::Cop)],
            Self::RspCop2cd => &[(RegisterFile::RspCop2Control, RegField::Cop)],
            Self::RspVs | Self::RspVsIndex => &[(RegisterFile::RspVector, RegField::Fs)],
            Self::RspVt | Self::RspVtElementHigh | Self::RspVtElementLow => {
                &[(RegisterFile::RspVector, RegField::Ft)]
            }
            Self::RspVd | Self::RspVdDe => &[(RegisterFile::RspVector, RegField::Fd)],
            Self::R3000GteCop2d => &[(RegisterFile::GteData, RegField::Cop)],
            Self::R3000GteCop2cd => &[(RegisterFile::GteControl, RegField::Cop)],
            _ => &[],
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
