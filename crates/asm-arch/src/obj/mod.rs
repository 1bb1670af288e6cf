//! Link-architecture data shared with the object writer.
//!
//! Everything under this module is generated-style, read-only input: pointer
//! and register widths, byte order, register numbering bases, canonical
//! opcode name lists and the register pretty-printer.  The descriptor
//! builders only read from here.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use core::fmt;

#[cfg(feature = "arm")]
pub mod arm;
#[cfg(feature = "x86")]
pub mod i386;
#[cfg(feature = "ppc64")]
pub mod ppc64;
#[cfg(feature = "x86")]
pub mod x86;

/// Internal opcode number.
pub type Opcode = u16;

// ── Common opcodes ───────────────────────────────────────────────────────
//
// Shared by every architecture; architecture-specific opcodes are numbered
// from `A_ARCHSPECIFIC` upwards.

/// Invalid / placeholder opcode.
pub const AXXX: Opcode = 0;
/// Subroutine call.
pub const ACALL: Opcode = 1;
/// Nil-pointer check.
pub const ACHECKNIL: Opcode = 2;
/// `DATA` directive.
pub const ADATA: Opcode = 3;
/// Duff's-device copy.
pub const ADUFFCOPY: Opcode = 4;
/// Duff's-device zero.
pub const ADUFFZERO: Opcode = 5;
/// End of function.
pub const AEND: Opcode = 6;
/// `FUNCDATA` directive.
pub const AFUNCDATA: Opcode = 7;
/// `GLOBL` directive.
pub const AGLOBL: Opcode = 8;
/// Unconditional jump.
pub const AJMP: Opcode = 9;
/// No-op.
pub const ANOP: Opcode = 10;
/// `PCDATA` directive.
pub const APCDATA: Opcode = 11;
/// Return from subroutine.
pub const ARET: Opcode = 12;
/// `TEXT` directive.
pub const ATEXT: Opcode = 13;
/// Type annotation.
pub const ATYPE: Opcode = 14;
/// Undefined-instruction trap.
pub const AUNDEF: Opcode = 15;
/// Field-use annotation.
pub const AUSEFIELD: Opcode = 16;
/// Variable definition marker.
pub const AVARDEF: Opcode = 17;
/// Variable kill marker.
pub const AVARKILL: Opcode = 18;
/// First architecture-specific opcode.
pub const A_ARCHSPECIFIC: Opcode = 19;

/// Names of the common opcodes, indexed by opcode.
pub const ANAMES: [&str; A_ARCHSPECIFIC as usize] = [
    "XXX", "CALL", "CHECKNIL", "DATA", "DUFFCOPY", "DUFFZERO", "END", "FUNCDATA", "GLOBL", "JMP",
    "NOP", "PCDATA", "RET", "TEXT", "TYPE", "UNDEF", "USEFIELD", "VARDEF", "VARKILL",
];

// ── Register numbering ───────────────────────────────────────────────────

/// No register.
pub const REG_NONE: i16 = 0;
/// Base of the 386 register range.
pub const RBASE_386: i16 = 1024;
/// Base of the amd64 register range.
pub const RBASE_AMD64: i16 = 2 * 1024;
/// Base of the ARM register range.
pub const RBASE_ARM: i16 = 3 * 1024;
/// Base of the PPC64 register range.
pub const RBASE_PPC64: i16 = 4 * 1024;
/// Width of one family's register range.
pub const RBASE_SPAN: i16 = 1024;

// ── Link architectures ───────────────────────────────────────────────────

/// Byte order of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Least significant byte first.
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::LittleEndian => write!(f, "little-endian"),
            ByteOrder::BigEndian => write!(f, "big-endian"),
        }
    }
}

/// Link-level description of one target.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct LinkArch {
    /// Identifier of the target (`"amd64"`, `"ppc64le"`, ...).
    pub name: &'static str,
    /// Historical one-character tool letter.
    pub thechar: char,
    /// Byte order of the target.
    pub byte_order: ByteOrder,
    /// Minimum instruction size in bytes.
    pub min_lc: u8,
    /// Pointer width in bytes.
    pub ptr_size: u8,
    /// General register width in bytes.
    pub reg_size: u8,
}

// ── Name tables ──────────────────────────────────────────────────────────

/// Opcode of `name` in a family's specific name table.
///
/// Evaluated at compile time for the opcode constants of each family, so a
/// constant naming a missing mnemonic fails the build.
#[cfg_attr(not(feature = "x86"), allow(dead_code))]
pub(crate) const fn opcode_of(names: &[&str], name: &str) -> Opcode {
    let mut i = 0;
    while i < names.len() {
        if str_eq(names[i], name) {
            return A_ARCHSPECIFIC + i as Opcode;
        }
        i += 1;
    }
    panic!("mnemonic missing from opcode table");
}

#[cfg_attr(not(feature = "x86"), allow(dead_code))]
const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

// ── Printers ─────────────────────────────────────────────────────────────

/// Print an opcode using the common table and a family's specific table.
///
/// Opcodes outside both tables print as `A???<n>`.
pub fn aconv_with(names: &'static [&'static str], a: Opcode) -> Cow<'static, str> {
    if a < A_ARCHSPECIFIC {
        return Cow::Borrowed(ANAMES[a as usize]);
    }
    match names.get((a - A_ARCHSPECIFIC) as usize) {
        Some(name) => Cow::Borrowed(*name),
        None => Cow::Owned(format!("A???{}", a)),
    }
}

/// Print a register encoding.
///
/// Dispatches on the family range the encoding falls in. Encodings that no
/// compiled-in family claims print as `R???<n>`.
pub fn rconv(reg: i16) -> String {
    if reg == REG_NONE {
        return String::from("NONE");
    }
    let printed: Option<String> = match reg {
        #[cfg(feature = "x86")]
        r if (RBASE_386..RBASE_386 + RBASE_SPAN).contains(&r) => i386::rconv(r),
        #[cfg(feature = "x86")]
        r if (RBASE_AMD64..RBASE_AMD64 + RBASE_SPAN).contains(&r) => x86::rconv(r),
        #[cfg(feature = "arm")]
        r if (RBASE_ARM..RBASE_ARM + RBASE_SPAN).contains(&r) => arm::rconv(r),
        #[cfg(feature = "ppc64")]
        r if (RBASE_PPC64..RBASE_PPC64 + 3 * RBASE_SPAN).contains(&r) => ppc64::rconv(r),
        _ => None,
    };
    printed.unwrap_or_else(|| format!("R???{}", reg))
}
