//! PPC64 opcode and register tables.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

use super::{aconv_with, ByteOrder, LinkArch, Opcode, ACALL, AJMP, ARET, RBASE_PPC64};

/// 64-bit PowerPC, big-endian.
pub static LINK_PPC64: LinkArch = LinkArch {
    name: "ppc64",
    thechar: '9',
    byte_order: ByteOrder::BigEndian,
    min_lc: 4,
    ptr_size: 8,
    reg_size: 8,
};

/// 64-bit PowerPC, little-endian.
pub static LINK_PPC64LE: LinkArch = LinkArch {
    name: "ppc64le",
    thechar: '9',
    byte_order: ByteOrder::LittleEndian,
    min_lc: 4,
    ptr_size: 8,
    reg_size: 8,
};

/// General register `R0`; `R0`–`R31` are contiguous.
pub const REG_R0: i16 = RBASE_PPC64;
/// General register `R30`, reserved for the goroutine pointer.
pub const REG_R30: i16 = REG_R0 + 30;
/// General register `R31`.
pub const REG_R31: i16 = REG_R0 + 31;
/// Floating-point register `F0`; `F0`–`F31` are contiguous.
pub const REG_F0: i16 = REG_R0 + 32;
/// Floating-point register `F31`.
pub const REG_F31: i16 = REG_F0 + 31;
/// Condition register field `CR0`; `CR0`–`CR7` are contiguous.
pub const REG_CR0: i16 = REG_F0 + 32;
/// Condition register field `CR7`.
pub const REG_CR7: i16 = REG_CR0 + 7;
/// Machine state register.
pub const REG_MSR: i16 = REG_CR0 + 8;
/// Floating-point status and control register.
pub const REG_FPSCR: i16 = REG_MSR + 1;
/// Whole condition register.
pub const REG_CR: i16 = REG_FPSCR + 1;
/// First of the 1024 special-purpose registers.
pub const REG_SPR0: i16 = RBASE_PPC64 + 1024;
/// First of the 1024 device control registers.
pub const REG_DCR0: i16 = RBASE_PPC64 + 2048;
/// Fixed-point exception register (`SPR(1)`).
pub const REG_XER: i16 = REG_SPR0 + 1;
/// Link register (`SPR(8)`).
pub const REG_LR: i16 = REG_SPR0 + 8;
/// Count register (`SPR(9)`).
pub const REG_CTR: i16 = REG_SPR0 + 9;

/// Number of special-purpose registers.
pub const NSPR: i16 = 1024;

/// Unconditional branch; shares the common jump opcode.
pub const ABR: Opcode = AJMP;
/// Branch and link; shares the common call opcode.
pub const ABL: Opcode = ACALL;
/// Return; shares the common return opcode.
pub const ARETURN: Opcode = ARET;

/// Architecture-specific opcode names; `ANAMES[i]` is opcode
/// `A_ARCHSPECIFIC + i`.
pub const ANAMES: &[&str] = &[
    "ADD", "ADDCC", "ADDV", "ADDVCC", "ADDC", "ADDCCC", "ADDCV", "ADDCVCC", "ADDME", "ADDMECC",
    "ADDMEVCC", "ADDMEV", "ADDE", "ADDECC", "ADDEVCC", "ADDEV", "ADDZE", "ADDZECC", "ADDZEVCC",
    "ADDZEV", "AND", "ANDCC", "ANDN", "ANDNCC", "BC", "BCL", "BEQ", "BGE", "BGT", "BLE", "BLT",
    "BNE", "BVC", "BVS", "CMP", "CMPU", "CNTLZW", "CNTLZWCC", "CRAND", "CRANDN", "CREQV",
    "CRNAND", "CRNOR", "CROR", "CRORN", "CRXOR", "DIVW", "DIVWCC", "DIVWVCC", "DIVWV", "DIVWU",
    "DIVWUCC", "DIVWUVCC", "DIVWUV", "EQV", "EQVCC", "EXTSB", "EXTSBCC", "EXTSH", "EXTSHCC",
    "FABS", "FABSCC", "FADD", "FADDCC", "FADDS", "FADDSCC", "FCMPO", "FCMPU", "FCTIW",
    "FCTIWCC", "FCTIWZ", "FCTIWZCC", "FDIV", "FDIVCC", "FDIVS", "FDIVSCC", "FMADD", "FMADDCC",
    "FMADDS", "FMADDSCC", "FMOVD", "FMOVDCC", "FMOVDU", "FMOVS", "FMOVSU", "FMSUB", "FMSUBCC",
    "FMSUBS", "FMSUBSCC", "FMUL", "FMULCC", "FMULS", "FMULSCC", "FNABS", "FNABSCC", "FNEG",
    "FNEGCC", "FNMADD", "FNMADDCC", "FNMADDS", "FNMADDSCC", "FNMSUB", "FNMSUBCC", "FNMSUBS",
    "FNMSUBSCC", "FRSP", "FRSPCC", "FSUB", "FSUBCC", "FSUBS", "FSUBSCC", "MOVMW", "LSW", "LWAR",
    "MOVWBR", "MOVB", "MOVBU", "MOVBZ", "MOVBZU", "MOVH", "MOVHBR", "MOVHU", "MOVHZ", "MOVHZU",
    "MOVW", "MOVWU", "MOVFL", "MOVCRFS", "MTFSB0", "MTFSB0CC", "MTFSB1", "MTFSB1CC", "MULHW",
    "MULHWCC", "MULHWU", "MULHWUCC", "MULLW", "MULLWCC", "MULLWVCC", "MULLWV", "NAND", "NANDCC",
    "NEG", "NEGCC", "NEGVCC", "NEGV", "NOR", "NORCC", "OR", "ORCC", "ORN", "ORNCC", "REM",
    "REMCC", "REMV", "REMVCC", "REMU", "REMUCC", "REMUV", "REMUVCC", "RFI", "RLWMI", "RLWMICC",
    "RLWNM", "RLWNMCC", "SLW", "SLWCC", "SRW", "SRAW", "SRAWCC", "SRWCC", "STSW", "STWCCC",
    "SUB", "SUBCC", "SUBVCC", "SUBC", "SUBCCC", "SUBCV", "SUBCVCC", "SUBME", "SUBMECC",
    "SUBMEVCC", "SUBMEV", "SUBV", "SUBE", "SUBECC", "SUBEV", "SUBEVCC", "SUBZE", "SUBZECC",
    "SUBZEVCC", "SUBZEV", "SYNC", "XOR", "XORCC", "DCBF", "DCBI", "DCBST", "DCBT", "DCBTST",
    "DCBZ", "ECIWX", "ECOWX", "EIEIO", "ICBI", "ISYNC", "PTESYNC", "TLBIE", "TLBIEL", "TLBSYNC",
    "TW", "SYSCALL", "DWORD", "WORD", "RFCI", "FRES", "FRESCC", "FRSQRTE", "FRSQRTECC", "FSEL",
    "FSELCC", "FSQRT", "FSQRTCC", "FSQRTS", "FSQRTSCC", "CNTLZD", "CNTLZDCC", "CMPW", "CMPWU",
    "DIVD", "DIVDCC", "DIVDVCC", "DIVDV", "DIVDU", "DIVDUCC", "DIVDUVCC", "DIVDUV", "EXTSW",
    "EXTSWCC", "FCFID", "FCFIDCC", "FCTID", "FCTIDCC", "FCTIDZ", "FCTIDZCC", "LDAR", "MOVD",
    "MOVDU", "MOVWZ", "MOVWZU", "MULHD", "MULHDCC", "MULHDU", "MULHDUCC", "MULLD", "MULLDCC",
    "MULLDVCC", "MULLDV", "RFID", "RLDMI", "RLDMICC", "RLDC", "RLDCCC", "RLDCR", "RLDCRCC",
    "RLDCL", "RLDCLCC", "SLBIA", "SLBIE", "SLBMFEE", "SLBMFEV", "SLBMTE", "SLD", "SLDCC", "SRD",
    "SRAD", "SRADCC", "SRDCC", "STDCCC", "TD", "REMD", "REMDCC", "REMDV", "REMDVCC", "REMDU",
    "REMDUCC", "REMDUV", "REMDUVCC", "HRFID",
];

/// Print a PPC64 opcode.
pub fn aconv(a: Opcode) -> Cow<'static, str> {
    aconv_with(ANAMES, a)
}

/// Print a PPC64 register, if the encoding names one.
pub fn rconv(reg: i16) -> Option<String> {
    match reg {
        r if (REG_R0..=REG_R31).contains(&r) => Some(format!("R{}", r - REG_R0)),
        r if (REG_F0..=REG_F31).contains(&r) => Some(format!("F{}", r - REG_F0)),
        r if (REG_CR0..=REG_CR7).contains(&r) => Some(format!("CR{}", r - REG_CR0)),
        REG_MSR => Some(String::from("MSR")),
        REG_FPSCR => Some(String::from("FPSCR")),
        REG_CR => Some(String::from("CR")),
        REG_XER => Some(String::from("XER")),
        REG_LR => Some(String::from("LR")),
        REG_CTR => Some(String::from("CTR")),
        r if (REG_SPR0..REG_SPR0 + NSPR).contains(&r) => Some(format!("SPR({})", r - REG_SPR0)),
        r if (REG_DCR0..REG_DCR0 + 1024).contains(&r) => Some(format!("DCR({})", r - REG_DCR0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn names_are_unique() {
        let mut seen = BTreeSet::new();
        for name in ANAMES {
            assert!(seen.insert(*name), "duplicate opcode name {name}");
        }
    }

    #[test]
    fn rconv_names() {
        assert_eq!(rconv(REG_R30).as_deref(), Some("R30"));
        assert_eq!(rconv(REG_F0 + 3).as_deref(), Some("F3"));
        assert_eq!(rconv(REG_CR0 + 7).as_deref(), Some("CR7"));
        assert_eq!(rconv(REG_CR).as_deref(), Some("CR"));
        assert_eq!(rconv(REG_LR).as_deref(), Some("LR"));
        assert_eq!(rconv(REG_SPR0 + 268).as_deref(), Some("SPR(268)"));
        assert_eq!(rconv(REG_DCR0 + 1).as_deref(), Some("DCR(1)"));
        assert_eq!(rconv(REG_CR + 1), None);
    }

    #[test]
    fn branch_aliases_share_common_opcodes() {
        assert_eq!(aconv(ABR), "JMP");
        assert_eq!(aconv(ABL), "CALL");
        assert_eq!(aconv(ARETURN), "RET");
    }
}
