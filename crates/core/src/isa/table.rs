//! Opcode table primitives.
//!
//! Every category is described by flat `static` tables of [`OpcodeEntry`] values keyed
//! by one encoding field. The entries carry all metadata the classifier and formatter
//! need: identifier, operand list, behaviour flags, memory access width and minimum
//! ISA level.

use bitflags::bitflags;
use serde::Serialize;

use crate::common::data::AccessType;
use crate::isa::id::{InstrId, InstrIdType};
use crate::isa::operand::Operand;

bitflags! {
    /// Behaviour flags of a table entry.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InstrFlags: u64 {
        /// Conditional branch with a 16-bit offset.
        const IS_BRANCH = 1 << 0;
        /// Branch that nullifies its delay slot when not taken.
        const IS_BRANCH_LIKELY = 1 << 1;
        /// Unconditional jump.
        const IS_JUMP = 1 << 2;
        /// Jump whose target is encoded in the 26-bit index field.
        const IS_JUMP_WITH_ADDRESS = 1 << 3;
        /// Exception return.
        const IS_RETURN = 1 << 4;
        /// Writes a return address to a GPR.
        const DOES_LINK = 1 << 5;
        /// Conditional or unconditional trap.
        const IS_TRAP = 1 << 6;
        /// Floating-point operation.
        const IS_FLOAT = 1 << 7;
        /// Double-precision floating-point operation.
        const IS_DOUBLE = 1 << 8;
        /// Immediate is zero-extended instead of sign-extended.
        const IS_UNSIGNED = 1 << 9;
        /// Writes the GPR in rs.
        const MODIFIES_RS = 1 << 10;
        /// Writes the GPR in rt.
        const MODIFIES_RT = 1 << 11;
        /// Writes the GPR in rd.
        const MODIFIES_RD = 1 << 12;
        /// Reads the GPR in rs.
        const READS_RS = 1 << 13;
        /// Reads the GPR in rt.
        const READS_RT = 1 << 14;
        /// Reads the GPR in rd.
        const READS_RD = 1 << 15;
        /// Reads HI.
        const READS_HI = 1 << 16;
        /// Reads LO.
        const READS_LO = 1 << 17;
        /// Writes HI.
        const MODIFIES_HI = 1 << 18;
        /// Writes LO.
        const MODIFIES_LO = 1 << 19;
        /// Writes the register in the fs position.
        const MODIFIES_FS = 1 << 20;
        /// Writes the register in the ft position.
        const MODIFIES_FT = 1 << 21;
        /// Writes the register in the fd position.
        const MODIFIES_FD = 1 << 22;
        /// Reads the register in the fs position.
        const READS_FS = 1 << 23;
        /// Reads the register in the ft position.
        const READS_FT = 1 << 24;
        /// Reads the register in the fd position.
        const READS_FD = 1 << 25;
        /// Writes a coprocessor system or control register.
        const MODIFIES_COP_REG = 1 << 26;
        /// Reads a coprocessor system or control register.
        const READS_COP_REG = 1 << 27;
        /// Loads from memory.
        const DOES_LOAD = 1 << 28;
        /// Stores to memory.
        const DOES_STORE = 1 << 29;
        /// Can act as a register move when one source is `$zero`.
        const MAYBE_IS_MOVE = 1 << 30;
        /// Not produced by compilers; usually hand-written assembly.
        const NOT_EMITTED_BY_COMPILERS = 1 << 31;
        /// Can hold the `%hi` half of a symbol reference.
        const CAN_BE_HI = 1 << 32;
        /// Can hold the `%lo` half of a symbol reference.
        const CAN_BE_LO = 1 << 33;
        /// Zero-extends the loaded value.
        const DOES_UNSIGNED_MEMORY_ACCESS = 1 << 34;
    }
}

/// Minimum instruction-set level an entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IsaVersion {
    /// MIPS I.
    Mips1,
    /// MIPS II.
    Mips2,
    /// MIPS III.
    Mips3,
}

/// One row of an opcode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Value of the table's key field that selects this entry.
    pub key: u32,
    /// Resolved identifier.
    pub id: InstrId,
    /// Operand slots, in rendering order.
    pub operands: &'static [Operand],
    /// Behaviour flags.
    pub flags: InstrFlags,
    /// Memory access width, `Invalid` for non-memory instructions.
    pub access: AccessType,
    /// Minimum ISA level.
    pub isa: IsaVersion,
}

impl OpcodeEntry {
    /// Creates a MIPS I entry without memory access.
    pub const fn new(
        key: u32,
        id: InstrId,
        operands: &'static [Operand],
        flags: InstrFlags,
    ) -> Self {
        Self {
            key,
            id,
            operands,
            flags,
            access: AccessType::Invalid,
            isa: IsaVersion::Mips1,
        }
    }

    /// Sets the memory access width.
    #[must_use]
    pub const fn access(mut self, access: AccessType) -> Self {
        self.access = access;
        self
    }

    /// Sets the minimum ISA level.
    #[must_use]
    pub const fn isa(mut self, isa: IsaVersion) -> Self {
        self.isa = isa;
        self
    }

    /// Sentinel entry for words no table matched.
    pub const fn invalid() -> Self {
        Self::new(0, InstrId::Invalid, &[], InstrFlags::empty())
    }
}

/// A flat opcode table keyed by one encoding field.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    /// Identifier type reported for entries found here.
    pub id_type: InstrIdType,
    /// Rows of the table.
    pub entries: &'static [OpcodeEntry],
    /// Entries above this level are treated as absent.
    pub max_isa: IsaVersion,
}

impl Table {
    /// Creates a table that accepts every ISA level.
    pub const fn new(id_type: InstrIdType, entries: &'static [OpcodeEntry]) -> Self {
        Self {
            id_type,
            entries,
            max_isa: IsaVersion::Mips3,
        }
    }

    /// Creates a view of `entries` restricted to `max_isa`.
    pub const fn restricted(
        id_type: InstrIdType,
        entries: &'static [OpcodeEntry],
        max_isa: IsaVersion,
    ) -> Self {
        Self {
            id_type,
            entries,
            max_isa,
        }
    }

    /// Finds the entry selected by `key`.
    pub fn find(&self, key: u32) -> Option<&'static OpcodeEntry> {
        self.entries
            .iter()
            .find(|entry| entry.key == key && entry.isa <= self.max_isa)
    }

    /// Finds the entry selected by `key`, paired with this table's identifier type.
    pub fn lookup(&self, key: u32) -> Option<(InstrIdType, &'static OpcodeEntry)> {
        self.find(key).map(|entry| (self.id_type, entry))
    }
}

/// Sentinel shared by every category.
pub static INVALID_ENTRY: OpcodeEntry = OpcodeEntry::invalid();
