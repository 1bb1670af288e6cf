//! ARM opcode and register tables.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

use super::{aconv_with, ByteOrder, LinkArch, Opcode, RBASE_ARM};

/// 32-bit ARM.
pub static LINK_ARM: LinkArch = LinkArch {
    name: "arm",
    thechar: '5',
    byte_order: ByteOrder::LittleEndian,
    min_lc: 4,
    ptr_size: 4,
    reg_size: 4,
};

/// General register `R0`; `R0`–`R15` are contiguous.
pub const REG_R0: i16 = RBASE_ARM;
/// General register `R10`, reserved for the goroutine pointer.
pub const REG_R10: i16 = REG_R0 + 10;
/// General register `R15`.
pub const REG_R15: i16 = REG_R0 + 15;
/// Floating-point register `F0`; `F0`–`F15` are contiguous.
pub const REG_F0: i16 = REG_R0 + 16;
/// Floating-point register `F15`.
pub const REG_F15: i16 = REG_F0 + 15;
/// Floating-point status register.
pub const REG_FPSR: i16 = REG_F0 + 16;
/// Floating-point control register.
pub const REG_FPCR: i16 = REG_FPSR + 1;
/// Current program status register.
pub const REG_CPSR: i16 = REG_FPCR + 1;
/// Saved program status register.
pub const REG_SPSR: i16 = REG_CPSR + 1;

/// Architecture-specific opcode names; `ANAMES[i]` is opcode
/// `A_ARCHSPECIFIC + i`.
pub const ANAMES: &[&str] = &[
    "AND", "EOR", "SUB", "RSB", "ADD", "ADC", "SBC", "RSC", "TST", "TEQ", "CMP", "CMN", "ORR",
    "BIC", "MVN", "BEQ", "BNE", "BCS", "BHS", "BCC", "BLO", "BMI", "BPL", "BVS", "BVC", "BHI",
    "BLS", "BGE", "BLT", "BGT", "BLE", "MOVWD", "MOVWF", "MOVDW", "MOVFW", "MOVFD", "MOVDF",
    "MOVF", "MOVD", "CMPF", "CMPD", "ADDF", "ADDD", "SUBF", "SUBD", "MULF", "MULD", "DIVF",
    "DIVD", "SQRTF", "SQRTD", "ABSF", "ABSD", "SRL", "SRA", "SLL", "MULU", "DIVU", "MUL", "DIV",
    "MOD", "MODU", "MOVB", "MOVBS", "MOVBU", "MOVH", "MOVHS", "MOVHU", "MOVW", "MOVM", "SWPBU",
    "SWPW", "RFE", "SWI", "MULA", "WORD", "BCASE", "CASE", "MULL", "MULAL", "MULLU", "MULALU",
    "BX", "BXRET", "DWORD", "LDREX", "STREX", "LDREXD", "STREXD", "PLD", "CLZ", "MULWT",
    "MULWB", "MULAWT", "MULAWB", "DATABUNDLE", "DATABUNDLEEND", "MRC",
];

/// Print an ARM opcode.
pub fn aconv(a: Opcode) -> Cow<'static, str> {
    aconv_with(ANAMES, a)
}

/// Print an ARM register, if the encoding names one.
pub fn rconv(reg: i16) -> Option<String> {
    match reg {
        r if (REG_R0..=REG_R15).contains(&r) => Some(format!("R{}", r - REG_R0)),
        r if (REG_F0..=REG_F15).contains(&r) => Some(format!("F{}", r - REG_F0)),
        REG_FPSR => Some(String::from("FPSR")),
        REG_FPCR => Some(String::from("FPCR")),
        REG_CPSR => Some(String::from("CPSR")),
        REG_SPSR => Some(String::from("SPSR")),
        _ => None,
    }
}
