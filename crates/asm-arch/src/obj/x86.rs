//! amd64 opcode and register tables.

use alloc::borrow::Cow;
use alloc::string::String;

use super::{aconv_with, opcode_of, ByteOrder, LinkArch, Opcode, RBASE_AMD64};

/// 64-bit x86.
pub static LINK_AMD64: LinkArch = LinkArch {
    name: "amd64",
    thechar: '6',
    byte_order: ByteOrder::LittleEndian,
    min_lc: 1,
    ptr_size: 8,
    reg_size: 8,
};

/// 64-bit x86 with 32-bit pointers.
pub static LINK_AMD64P32: LinkArch = LinkArch {
    name: "amd64p32",
    thechar: '6',
    byte_order: ByteOrder::LittleEndian,
    min_lc: 1,
    ptr_size: 4,
    reg_size: 8,
};

/// First register encoding; `REGISTER[i]` is encoded `REG_AL + i`.
pub const REG_AL: i16 = RBASE_AMD64;

/// Register names in encoding order.
pub const REGISTER: &[&str] = &[
    "AL", "CL", "DL", "BL", "SPB", "BPB", "SIB", "DIB", "R8B", "R9B", "R10B", "R11B", "R12B",
    "R13B", "R14B", "R15B", "AX", "CX", "DX", "BX", "SP", "BP", "SI", "DI", "R8", "R9", "R10",
    "R11", "R12", "R13", "R14", "R15", "AH", "CH", "DH", "BH", "F0", "F1", "F2", "F3", "F4",
    "F5", "F6", "F7", "M0", "M1", "M2", "M3", "M4", "M5", "M6", "M7", "X0", "X1", "X2", "X3",
    "X4", "X5", "X6", "X7", "X8", "X9", "X10", "X11", "X12", "X13", "X14", "X15", "CS", "SS",
    "DS", "ES", "FS", "GS", "GDTR", "IDTR", "LDTR", "MSW", "TASK", "CR0", "CR1", "CR2", "CR3",
    "CR4", "CR5", "CR6", "CR7", "CR8", "CR9", "CR10", "CR11", "CR12", "CR13", "CR14", "CR15",
    "DR0", "DR1", "DR2", "DR3", "DR4", "DR5", "DR6", "DR7", "TR0", "TR1", "TR2", "TR3", "TR4",
    "TR5", "TR6", "TR7", "TLS",
];

/// Architecture-specific opcode names; `ANAMES[i]` is opcode
/// `A_ARCHSPECIFIC + i`.
pub const ANAMES: &[&str] = &[
    "AAA", "AAD", "AAM", "AAS", "ADCB", "ADCL", "ADCW", "ADDB", "ADDL", "ADDW", "ADJSP", "ANDB",
    "ANDL", "ANDW", "ARPL", "BOUNDL", "BOUNDW", "BSFL", "BSFW", "BSRL", "BSRW", "BTL", "BTW",
    "BTCL", "BTCW", "BTRL", "BTRW", "BTSL", "BTSW", "BYTE", "CLC", "CLD", "CLI", "CLTS", "CMC",
    "CMPB", "CMPL", "CMPW", "CMPSB", "CMPSL", "CMPSW", "DAA", "DAS", "DECB", "DECL", "DECQ",
    "DECW", "DIVB", "DIVL", "DIVW", "ENTER", "HLT", "IDIVB", "IDIVL", "IDIVW", "IMULB", "IMULL",
    "IMULW", "INB", "INL", "INW", "INCB", "INCL", "INCQ", "INCW", "INSB", "INSL", "INSW", "INT",
    "INTO", "IRETL", "IRETW", "JCC", "JCS", "JCXZL", "JEQ", "JGE", "JGT", "JHI", "JLE", "JLS",
    "JLT", "JMI", "JNE", "JOC", "JOS", "JPC", "JPL", "JPS", "LAHF", "LARL", "LARW", "LEAL",
    "LEAW", "LEAVEL", "LEAVEW", "LOCK", "LODSB", "LODSL", "LODSW", "LONG", "LOOP", "LOOPEQ",
    "LOOPNE", "LSLL", "LSLW", "MOVB", "MOVL", "MOVW", "MOVBLSX", "MOVBLZX", "MOVBQSX",
    "MOVBQZX", "MOVBWSX", "MOVBWZX", "MOVWLSX", "MOVWLZX", "MOVWQSX", "MOVWQZX", "MOVSB",
    "MOVSL", "MOVSW", "MULB", "MULL", "MULW", "NEGB", "NEGL", "NEGW", "NOTB", "NOTL", "NOTW",
    "ORB", "ORL", "ORW", "OUTB", "OUTL", "OUTW", "OUTSB", "OUTSL", "OUTSW", "PAUSE", "POPAL",
    "POPAW", "POPFL", "POPFW", "POPL", "POPW", "PUSHAL", "PUSHAW", "PUSHFL", "PUSHFW", "PUSHL",
    "PUSHW", "RCLB", "RCLL", "RCLW", "RCRB", "RCRL", "RCRW", "REP", "REPN", "ROLB", "ROLL",
    "ROLW", "RORB", "RORL", "RORW", "SAHF", "SALB", "SALL", "SALW", "SARB", "SARL", "SARW",
    "SBBB", "SBBL", "SBBW", "SCASB", "SCASL", "SCASW", "SETCC", "SETCS", "SETEQ", "SETGE",
    "SETGT", "SETHI", "SETLE", "SETLS", "SETLT", "SETMI", "SETNE", "SETOC", "SETOS", "SETPC",
    "SETPL", "SETPS", "CDQ", "CWD", "SHLB", "SHLL", "SHLW", "SHRB", "SHRL", "SHRW", "STC", "STD",
    "STI", "STOSB", "STOSL", "STOSW", "SUBB", "SUBL", "SUBW", "SYSCALL", "TESTB", "TESTL",
    "TESTW", "VERR", "VERW", "WAIT", "WORD", "XCHGB", "XCHGL", "XCHGW", "XLAT", "XORB", "XORL",
    "XORW", "FMOVB", "FMOVBP", "FMOVD", "FMOVDP", "FMOVF", "FMOVFP", "FMOVL", "FMOVLP", "FMOVV",
    "FMOVVP", "FMOVW", "FMOVWP", "FMOVX", "FMOVXP", "FCOMD", "FCOMDP", "FCOMDPP", "FCOMF",
    "FCOMFP", "FUCOM", "FUCOMP", "FUCOMPP", "FADDDP", "FADDD", "FADDF", "FSUBDP", "FSUBD",
    "FSUBF", "FMULDP", "FMULD", "FMULF", "FDIVDP", "FDIVD", "FDIVF", "FXCHD", "FFREE", "FLDCW",
    "FLDENV", "FRSTOR", "FSAVE", "FSTCW", "FSTENV", "FSTSW", "F2XM1", "FABS", "FCHS", "FCLEX",
    "FCOS", "FDECSTP", "FINCSTP", "FINIT", "FLD1", "FLDL2E", "FLDL2T", "FLDLG2", "FLDLN2",
    "FLDPI", "FLDZ", "FNOP", "FPATAN", "FPREM", "FPREM1", "FPTAN", "FRNDINT", "FSCALE", "FSIN",
    "FSINCOS", "FSQRT", "FTST", "FXAM", "FXTRACT", "FYL2X", "FYL2XP1", "CMPXCHGB", "CMPXCHGL",
    "CMPXCHGW", "CMPXCHG8B", "CPUID", "INVD", "INVLPG", "LFENCE", "MFENCE", "MOVNTIL", "RDMSR",
    "RDPMC", "RDTSC", "RSM", "SFENCE", "SYSRET", "WBINVD", "WRMSR", "XADDB", "XADDL", "XADDW",
    "CMOVLCC", "CMOVLCS", "CMOVLEQ", "CMOVLGE", "CMOVLGT", "CMOVLHI", "CMOVLLE", "CMOVLLS",
    "CMOVLLT", "CMOVLMI", "CMOVLNE", "CMOVLOC", "CMOVLOS", "CMOVLPC", "CMOVLPL", "CMOVLPS",
    "CMOVQCC", "CMOVQCS", "CMOVQEQ", "CMOVQGE", "CMOVQGT", "CMOVQHI", "CMOVQLE", "CMOVQLS",
    "CMOVQLT", "CMOVQMI", "CMOVQNE", "CMOVQOC", "CMOVQOS", "CMOVQPC", "CMOVQPL", "CMOVQPS",
    "ADCQ", "ADDQ", "ANDQ", "BSFQ", "BSRQ", "BTCQ", "BTQ", "BTRQ", "BTSQ", "CMPQ", "CMPSQ",
    "CMPXCHGQ", "CQO", "DIVQ", "IDIVQ", "IMULQ", "IRETQ", "JCXZQ", "LEAQ", "LEAVEQ", "LODSQ",
    "MOVQ", "MOVLQSX", "MOVLQZX", "MOVNTIQ", "MOVSQ", "MULQ", "NEGQ", "NOTQ", "ORQ", "POPFQ",
    "POPQ", "PUSHFQ", "PUSHQ", "RCLQ", "RCRQ", "ROLQ", "RORQ", "QUAD", "SALQ", "SARQ", "SBBQ",
    "SCASQ", "SHLQ", "SHRQ", "STOSQ", "SUBQ", "TESTQ", "XADDQ", "XCHGQ", "XORQ", "ADDPD",
    "ADDPS", "ADDSD", "ADDSS", "ANDNPD", "ANDNPS", "ANDPD", "ANDPS", "CMPPD", "CMPPS", "CMPSD",
    "CMPSS", "COMISD", "COMISS", "CVTPD2PL", "CVTPD2PS", "CVTPL2PD", "CVTPL2PS", "CVTPS2PD",
    "CVTPS2PL", "CVTSD2SL", "CVTSD2SQ", "CVTSD2SS", "CVTSL2SD", "CVTSL2SS", "CVTSQ2SD",
    "CVTSQ2SS", "CVTSS2SD", "CVTSS2SL", "CVTSS2SQ", "CVTTPD2PL", "CVTTPS2PL", "CVTTSD2SL",
    "CVTTSD2SQ", "CVTTSS2SL", "CVTTSS2SQ", "DIVPD", "DIVPS", "DIVSD", "DIVSS", "EMMS",
    "FXRSTOR", "FXRSTOR64", "FXSAVE", "FXSAVE64", "LDMXCSR", "MASKMOVOU", "MASKMOVQ", "MAXPD",
    "MAXPS", "MAXSD", "MAXSS", "MINPD", "MINPS", "MINSD", "MINSS", "MOVAPD", "MOVAPS", "MOVOU",
    "MOVHLPS", "MOVHPD", "MOVHPS", "MOVLHPS", "MOVLPD", "MOVLPS", "MOVMSKPD", "MOVMSKPS",
    "MOVNTO", "MOVNTPD", "MOVNTPS", "MOVNTQ", "MOVO", "MOVQOZX", "MOVSD", "MOVSS", "MOVUPD",
    "MOVUPS", "MULPD", "MULPS", "MULSD", "MULSS", "ORPD", "ORPS", "PACKSSLW", "PACKSSWB",
    "PACKUSWB", "PADDB", "PADDL", "PADDQ", "PADDSB", "PADDSW", "PADDUSB", "PADDUSW", "PADDW",
    "PAND", "PANDN", "PAVGB", "PAVGW", "PCMPEQB", "PCMPEQL", "PCMPEQW", "PCMPGTB", "PCMPGTL",
    "PCMPGTW", "PEXTRW", "PFACC", "PFADD", "PFCMPEQ", "PFCMPGE", "PFCMPGT", "PFMAX", "PFMIN",
    "PFMUL", "PFNACC", "PFPNACC", "PFRCP", "PFRCPIT1", "PFRCPI2T", "PFRSQIT1", "PFRSQRT",
    "PFSUB", "PFSUBR", "PF2IL", "PF2IW", "PI2FL", "PI2FW", "PINSRW", "PMADDWL", "PMAXSW",
    "PMAXUB", "PMINSW", "PMINUB", "PMOVMSKB", "PMULHRW", "PMULHUW", "PMULHW", "PMULLW",
    "PMULULQ", "POR", "PSADBW", "PSHUFHW", "PSHUFL", "PSHUFLW", "PSHUFW", "PSHUFB", "PSLLO",
    "PSLLL", "PSLLQ", "PSLLW", "PSRAL", "PSRAW", "PSRLO", "PSRLL", "PSRLQ", "PSRLW", "PSUBB",
    "PSUBL", "PSUBQ", "PSUBSB", "PSUBSW", "PSUBUSB", "PSUBUSW", "PSUBW", "PSWAPL", "PUNPCKHBW",
    "PUNPCKHLQ", "PUNPCKHQDQ", "PUNPCKHWL", "PUNPCKLBW", "PUNPCKLLQ", "PUNPCKLQDQ",
    "PUNPCKLWL", "PXOR", "RCPPS", "RCPSS", "RSQRTPS", "RSQRTSS", "SHUFPD", "SHUFPS", "SQRTPD",
    "SQRTPS", "SQRTSD", "SQRTSS", "STMXCSR", "SUBPD", "SUBPS", "SUBSD", "SUBSS", "UCOMISD",
    "UCOMISS", "UNPCKHPD", "UNPCKHPS", "UNPCKLPD", "UNPCKLPS", "XORPD", "XORPS", "PREFETCHT0",
    "PREFETCHT1", "PREFETCHT2", "PREFETCHNTA", "MOVQL", "BSWAPL", "BSWAPQ", "AESENC",
    "AESENCLAST", "AESDEC", "AESDECLAST", "AESIMC", "AESKEYGENASSIST", "PSHUFD", "PCLMULQDQ",
    "CRC32B", "CRC32Q", "JCXZW", "FCMOVCC", "FCMOVCS", "FCMOVEQ", "FCMOVHI", "FCMOVLS",
    "FCMOVNE", "FCMOVNU", "FCMOVUN", "FCOMI", "FCOMIP", "FUCOMI", "FUCOMIP", "XACQUIRE",
    "XRELEASE", "XBEGIN", "XEND", "XABORT", "XTEST",
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
/// 64-bit move.
pub const AMOVQ: Opcode = opcode_of(ANAMES, "MOVQ");
/// 3DNow! float to int32.
pub const APF2IL: Opcode = opcode_of(ANAMES, "PF2IL");
/// 3DNow! int32 to float.
pub const API2FL: Opcode = opcode_of(ANAMES, "PI2FL");
/// Byte shift left of a 128-bit register.
pub const APSLLO: Opcode = opcode_of(ANAMES, "PSLLO");
/// Byte shift right of a 128-bit register.
pub const APSRLO: Opcode = opcode_of(ANAMES, "PSRLO");

/// Print an amd64 opcode.
pub fn aconv(a: Opcode) -> Cow<'static, str> {
    aconv_with(ANAMES, a)
}

/// Print an amd64 register, if the encoding names one.
pub fn rconv(reg: i16) -> Option<String> {
    let idx = usize::try_from(reg.checked_sub(REG_AL)?).ok()?;
    REGISTER.get(idx).map(|s| String::from(*s))
}
