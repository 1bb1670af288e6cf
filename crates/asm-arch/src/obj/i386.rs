//! 386 opcode and register tables.

use alloc::borrow::Cow;
use alloc::string::String;

use super::{aconv_with, opcode_of, ByteOrder, LinkArch, Opcode, RBASE_386};

/// 32-bit x86.
pub static LINK_386: LinkArch = LinkArch {
    name: "386",
    thechar: '8',
    byte_order: ByteOrder::LittleEndian,
    min_lc: 1,
    ptr_size: 4,
    reg_size: 4,
};

/// First register encoding; `REGISTER[i]` is encoded `REG_AL + i`.
pub const REG_AL: i16 = RBASE_386;

/// Register names in encoding order.
pub const REGISTER: &[&str] = &[
    "AL", "CL", "DL", "BL", "AH", "CH", "DH", "BH", "AX", "CX", "DX", "BX", "SP", "BP", "SI",
    "DI", "F0", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "CS", "SS", "DS", "ES", "FS", "GS",
    "GDTR", "IDTR", "LDTR", "MSW", "TASK", "CR0", "CR1", "CR2", "CR3", "CR4", "CR5", "CR6",
    "CR7", "DR0", "DR1", "DR2", "DR3", "DR4", "DR5", "DR6", "DR7", "TR0", "TR1", "TR2", "TR3",
    "TR4", "TR5", "TR6", "TR7", "X0", "X1", "X2", "X3", "X4", "X5", "X6", "X7", "TLS",
];

/// Architecture-specific opcode names; `ANAMES[i]` is opcode
/// `A_ARCHSPECIFIC + i`.
pub const ANAMES: &[&str] = &[
    "AAA", "AAD", "AAM", "AAS", "ADCB", "ADCL", "ADCW", "ADDB", "ADDL", "ADDW", "ADJSP", "ANDB",
    "ANDL", "ANDW", "ARPL", "BOUNDL", "BOUNDW", "BSFL", "BSFW", "BSRL", "BSRW", "BTL", "BTW",
    "BTCL", "BTCW", "BTRL", "BTRW", "BTSL", "BTSW", "BYTE", "CLC", "CLD", "CLI", "CLTS", "CMC",
    "CMPB", "CMPL", "CMPW", "CMPSB", "CMPSL", "CMPSW", "DAA", "DAS", "DECB", "DECL", "DECW",
    "DIVB", "DIVL", "DIVW", "ENTER", "HLT", "IDIVB", "IDIVL", "IDIVW", "IMULB", "IMULL", "IMULW",
    "INB", "INL", "INW", "INCB", "INCL", "INCW", "INSB", "INSL", "INSW", "INT", "INTO", "IRETL",
    "IRETW", "JCC", "JCS", "JCXZL", "JCXZW", "JEQ", "JGE", "JGT", "JHI", "JLE", "JLS", "JLT",
    "JMI", "JNE", "JOC", "JOS", "JPC", "JPL", "JPS", "LAHF", "LARL", "LARW", "LEAL", "LEAW",
    "LEAVEL", "LEAVEW", "LOCK", "LODSB", "LODSL", "LODSW", "LONG", "LOOP", "LOOPEQ", "LOOPNE",
    "LSLL", "LSLW", "MOVB", "MOVL", "MOVW", "MOVQ", "MOVBLSX", "MOVBLZX", "MOVBWSX", "MOVBWZX",
    "MOVWLSX", "MOVWLZX", "MOVSB", "MOVSL", "MOVSW", "MULB", "MULL", "MULW", "NEGB", "NEGL",
    "NEGW", "NOTB", "NOTL", "NOTW", "ORB", "ORL", "ORW", "OUTB", "OUTL", "OUTW", "OUTSB",
    "OUTSL", "OUTSW", "PAUSE", "POPAL", "POPAW", "POPFL", "POPFW", "POPL", "POPW", "PUSHAL",
    "PUSHAW", "PUSHFL", "PUSHFW", "PUSHL", "PUSHW", "RCLB", "RCLL", "RCLW", "RCRB", "RCRL",
    "RCRW", "REP", "REPN", "ROLB", "ROLL", "ROLW", "RORB", "RORL", "RORW", "SAHF", "SALB",
    "SALL", "SALW", "SARB", "SARL", "SARW", "SBBB", "SBBL", "SBBW", "SCASB", "SCASL", "SCASW",
    "SETCC", "SETCS", "SETEQ", "SETGE", "SETGT", "SETHI", "SETLE", "SETLS", "SETLT", "SETMI",
    "SETNE", "SETOC", "SETOS", "SETPC", "SETPL", "SETPS", "CDQ", "CWD", "SHLB", "SHLL", "SHLW",
    "SHRB", "SHRL", "SHRW", "STC", "STD", "STI", "STOSB", "STOSL", "STOSW", "SUBB", "SUBL",
    "SUBW", "SYSCALL", "TESTB", "TESTL", "TESTW", "VERR", "VERW", "WAIT", "WORD", "XCHGB",
    "XCHGL", "XCHGW", "XLAT", "XORB", "XORL", "XORW", "FMOVB", "FMOVBP", "FMOVD", "FMOVDP",
    "FMOVF", "FMOVFP", "FMOVL", "FMOVLP", "FMOVV", "FMOVVP", "FMOVW", "FMOVWP", "FMOVX",
    "FMOVXP", "FCOMB", "FCOMBP", "FCOMD", "FCOMDP", "FCOMDPP", "FCOMF", "FCOMFP", "FCOMI",
    "FCOMIP", "FCOML", "FCOMLP", "FCOMW", "FCOMWP", "FUCOM", "FUCOMI", "FUCOMIP", "FUCOMP",
    "FUCOMPP", "FADDDP", "FADDW", "FADDL", "FADDF", "FADDD", "FMULDP", "FMULW", "FMULL",
    "FMULF", "FMULD", "FSUBDP", "FSUBW", "FSUBL", "FSUBF", "FSUBD", "FSUBRDP", "FSUBRW",
    "FSUBRL", "FSUBRF", "FSUBRD", "FDIVDP", "FDIVW", "FDIVL", "FDIVF", "FDIVD", "FDIVRDP",
    "FDIVRW", "FDIVRL", "FDIVRF", "FDIVRD", "FXCHD", "FFREE", "FLDCW", "FLDENV", "FRSTOR",
    "FSAVE", "FSTCW", "FSTENV", "FSTSW", "F2XM1", "FABS", "FCHS", "FCLEX", "FCOS", "FDECSTP",
    "FINCSTP", "FINIT", "FLD1", "FLDL2E", "FLDL2T", "FLDLG2", "FLDLN2", "FLDPI", "FLDZ", "FNOP",
    "FPATAN", "FPREM", "FPREM1", "FPTAN", "FRNDINT", "FSCALE", "FSIN", "FSINCOS", "FSQRT",
    "FTST", "FXAM", "FXTRACT", "FYL2X", "FYL2XP1", "CMPXCHGB", "CMPXCHGL", "CMPXCHGW",
    "CMPXCHG8B", "CPUID", "RDTSC", "XADDB", "XADDL", "XADDW", "CMOVLCC", "CMOVLCS", "CMOVLEQ",
    "CMOVLGE", "CMOVLGT", "CMOVLHI", "CMOVLLE", "CMOVLLS", "CMOVLLT", "CMOVLMI", "CMOVLNE",
    "CMOVLOC", "CMOVLOS", "CMOVLPC", "CMOVLPL", "CMOVLPS", "CMOVWCC", "CMOVWCS", "CMOVWEQ",
    "CMOVWGE", "CMOVWGT", "CMOVWHI", "CMOVWLE", "CMOVWLS", "CMOVWLT", "CMOVWMI", "CMOVWNE",
    "CMOVWOC", "CMOVWOS", "CMOVWPC", "CMOVWPL", "CMOVWPS", "FCMOVCC", "FCMOVCS", "FCMOVEQ",
    "FCMOVHI", "FCMOVLS", "FCMOVNE", "FCMOVNU", "FCMOVUN", "LFENCE", "MFENCE", "SFENCE", "EMMS",
    "PREFETCHT0", "PREFETCHT1", "PREFETCHT2", "PREFETCHNTA", "BSWAPL", "ADDPD", "ADDPS",
    "ADDSD", "ADDSS", "ANDNPD", "ANDNPS", "ANDPD", "ANDPS", "CMPPD", "CMPPS", "CMPSD", "CMPSS",
    "COMISD", "COMISS", "CVTPL2PD", "CVTPL2PS", "CVTPD2PL", "CVTPD2PS", "CVTPS2PL", "CVTPS2PD",
    "CVTSD2SL", "CVTSD2SS", "CVTSL2SD", "CVTSL2SS", "CVTSS2SD", "CVTSS2SL", "CVTTPD2PL",
    "CVTTPS2PL", "CVTTSD2SL", "CVTTSS2SL", "DIVPD", "DIVPS", "DIVSD", "DIVSS", "MASKMOVOU",
    "MAXPD", "MAXPS", "MAXSD", "MAXSS", "MINPD", "MINPS", "MINSD", "MINSS", "MOVAPD", "MOVAPS",
    "MOVO", "MOVOU", "MOVHLPS", "MOVHPD", "MOVHPS", "MOVLHPS", "MOVLPD", "MOVLPS", "MOVMSKPD",
    "MOVMSKPS", "MOVNTO", "MOVNTPD", "MOVNTPS", "MOVSD", "MOVSS", "MOVUPD", "MOVUPS", "MULPD",
    "MULPS", "MULSD", "MULSS", "ORPD", "ORPS", "PADDQ", "PAND", "PCMPEQB", "PMAXSW", "PMAXUB",
    "PMINSW", "PMINUB", "PMOVMSKB", "PSADBW", "PSUBB", "PSUBL", "PSUBQ", "PSUBSB", "PSUBSW",
    "PSUBUSB", "PSUBUSW", "PSUBW", "PUNPCKHQDQ", "PUNPCKLQDQ", "PXOR", "RCPPS", "RCPSS",
    "RSQRTPS", "RSQRTSS", "SQRTPD", "SQRTPS", "SQRTSD", "SQRTSS", "SUBPD", "SUBPS", "SUBSD",
    "SUBSS", "UCOMISD", "UCOMISS", "UNPCKHPD", "UNPCKHPS", "UNPCKLPD", "UNPCKLPS", "XORPD",
    "XORPS", "PSHUFHW", "PSHUFL", "PSHUFLW", "AESENC", "PINSRD", "PSHUFB",
];

// Opcodes referenced by the assembler's alias table.

/// Jump if carry clear.
pub const AJCC: Opcode = opcode_of(ANAMES, "JCC");
/// Jump if carry set.
pub const AJCS: Opcode = opcode_of(ANAMES, "JCS");
/// Jump if equal.
pub const AJEQ: Opcode = opcode_of(ANAMES, "JEQ");
/// Jump if greater or equal (signed).
pub const AJGE: Opcode = opcode_of(ANAMES, "JGE");
/// Jump if greater (signed).
pub const AJGT: Opcode = opcode_of(ANAMES, "JGT");
/// Jump if higher (unsigned).
pub const AJHI: Opcode = opcode_of(ANAMES, "JHI");
/// Jump if less or equal (signed).
pub const AJLE: Opcode = opcode_of(ANAMES, "JLE");
/// Jump if lower or same (unsigned).
pub const AJLS: Opcode = opcode_of(ANAMES, "JLS");
/// Jump if less (signed).
pub const AJLT: Opcode = opcode_of(ANAMES, "JLT");
/// Jump if minus.
pub const AJMI: Opcode = opcode_of(ANAMES, "JMI");
/// Jump if not equal.
pub const AJNE: Opcode = opcode_of(ANAMES, "JNE");
/// Jump if overflow clear.
pub const AJOC: Opcode = opcode_of(ANAMES, "JOC");
/// Jump if overflow set.
pub const AJOS: Opcode = opcode_of(ANAMES, "JOS");
/// Jump if parity clear.
pub const AJPC: Opcode = opcode_of(ANAMES, "JPC");
/// Jump if plus.
pub const AJPL: Opcode = opcode_of(ANAMES, "JPL");
/// Jump if parity set.
pub const AJPS: Opcode = opcode_of(ANAMES, "JPS");
/// Masked store of a 128-bit register.
pub const AMASKMOVOU: Opcode = opcode_of(ANAMES, "MASKMOVOU");
/// Aligned 128-bit move.
pub const AMOVO: Opcode = opcode_of(ANAMES, "MOVO");
/// Non-temporal 128-bit store.
pub const AMOVNTO: Opcode = opcode_of(ANAMES, "MOVNTO");

/// Print a 386 opcode.
pub fn aconv(a: Opcode) -> Cow<'static, str> {
    aconv_with(ANAMES, a)
}

/// Print a 386 register, if the encoding names one.
pub fn rconv(reg: i16) -> Option<String> {
    let idx = usize::try_from(reg.checked_sub(REG_AL)?).ok()?;
    REGISTER.get(idx).map(|s| String::from(*s))
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
        let mut seen = BTreeSet::new();
        for name in REGISTER {
            assert!(seen.insert(*name), "duplicate register name {name}");
        }
    }

    #[test]
    fn register_range_is_separate_from_amd64() {
        assert_eq!(rconv(REG_AL).as_deref(), Some("AL"));
        assert_eq!(rconv(REG_AL + 12).as_deref(), Some("SP"));
        assert_eq!(rconv(super::super::RBASE_AMD64), None);
    }
}
