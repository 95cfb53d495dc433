//! Pseudo-instruction rules.
//!
//! Each rule rewrites one identifier under one field condition into a simpler
//! mnemonic with its own operand list. Rules are enumerated per identifier rather
//! than inferred, so the set is closed and every rule has a configuration switch.
//!
//! | Raw | Condition | Pseudo | Switch |
//! |-----|-----------|--------|--------|
//! | `sll` | word is zero | `nop` | `enable_pseudos` |
//! | `beq` | rs and rt are `$zero` | `b` | `pseudo_b` |
//! | `beq` / `beql` | rt is `$zero` | `beqz` / `beqzl` | `pseudo_beqz` |
//! | `bne` / `bnel` | rt is `$zero` | `bnez` / `bnezl` | `pseudo_bnez` |
//! | `bgezal` | rs is `$zero` | `bal` | `pseudo_bal` |
//! | `or` / `addu` / `daddu` | rt is `$zero` | `move` | `pseudo_move` |
//! | `nor` | rt is `$zero` | `not` | `pseudo_not` |
//! | `subu` / `sub` / `dsubu` / `dsub` | rs is `$zero` | `negu` / `neg` / `dnegu` / `dneg` | `pseudo_negu` |

use crate::common::constants::{GPR_ZERO, NOP_WORD};
use crate::config::PseudosConfig;
use crate::isa::id::InstrId;
use crate::isa::instruction::Instruction;
use crate::isa::operand::Operand::{self, CpuBranchTargetLabel, CpuRd, CpuRs, CpuRt};

const NONE: &[Operand] = &[];
const BRANCH: &[Operand] = &[CpuBranchTargetLabel];
const RS_BRANCH: &[Operand] = &[CpuRs, CpuBranchTargetLabel];
const RD_RS: &[Operand] = &[CpuRd, CpuRs];
const RD_RT: &[Operand] = &[CpuRd, CpuRt];

/// Simplified rendering of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PseudoForm {
    /// Pseudo-instruction identifier.
    pub id: InstrId,
    /// Operand slots of the simplified form.
    pub operands: &'static [Operand],
}

impl PseudoForm {
    const fn new(id: InstrId, operands: &'static [Operand]) -> Self {
        Self { id, operands }
    }
}

/// Returns the pseudo-instruction form of `instr`, if an enabled rule matches.
pub fn simplify(instr: &Instruction, pseudos: &PseudosConfig) -> Option<PseudoForm> {
    if !pseudos.enable_pseudos {
        return None;
    }

    let rs_zero = instr.get_rs() == GPR_ZERO;
    let rt_zero = instr.get_rt() == GPR_ZERO;

    let form = match instr.id() {
        InstrId::Sll if instr.word() == NOP_WORD => PseudoForm::new(InstrId::Nop, NONE),
        InstrId::Beq if rs_zero && rt_zero && pseudos.pseudo_b => {
            PseudoForm::new(InstrId::B, BRANCH)
        }
        InstrId::Beq if rt_zero && pseudos.pseudo_beqz => {
            PseudoForm::new(InstrId::Beqz, RS_BRANCH)
        }
        InstrId::Beql if rt_zero && pseudos.pseudo_beqz => {
            PseudoForm::new(InstrId::Beqzl, RS_BRANCH)
        }
        InstrId::Bne if rt_zero && pseudos.pseudo_bnez => {
            PseudoForm::new(InstrId::Bnez, RS_BRANCH)
        }
        InstrId::Bnel if rt_zero && pseudos.pseudo_bnez => {
            PseudoForm::new(InstrId::Bnezl, RS_BRANCH)
        }
        InstrId::Bgezal if rs_zero && pseudos.pseudo_bal => PseudoForm::new(InstrId::Bal, BRANCH),
        InstrId::Or | InstrId::Addu | InstrId::Daddu if rt_zero && pseudos.pseudo_move => {
            PseudoForm::new(InstrId::Move, RD_RS)
        }
        InstrId::Nor if rt_zero && pseudos.pseudo_not => PseudoForm::new(InstrId::Not, RD_RS),
        InstrId::Subu if rs_zero && pseudos.pseudo_negu => PseudoForm::new(InstrId::Negu, RD_RT),
        InstrId::Sub if rs_zero && pseudos.pseudo_negu => PseudoForm::new(InstrId::Neg, RD_RT),
        InstrId::Dsubu if rs_zero && pseudos.pseudo_negu => {
            PseudoForm::new(InstrId::Dnegu, RD_RT)
        }
        InstrId::Dsub if rs_zero && pseudos.pseudo_negu => PseudoForm::new(InstrId::Dneg, RD_RT),
        _ => return None,
    };
    Some(form)
}
