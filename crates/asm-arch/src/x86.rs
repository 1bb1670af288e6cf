//! x86 descriptors (386 and amd64).
//!
//! Both widths name registers from the generated register lists, accept no
//! `PREFIX(n)` notation and reserve no general register for the runtime.
//! The alias tables capture the Intel condition-code spellings of the
//! conditional jumps plus a handful of SSE / 3DNow! mnemonics that the
//! object format folds onto a single opcode.

use crate::arch::Arch;
use crate::descriptor::{ArchDescriptor, DescriptorBuilder};
use crate::obj::{i386, x86, Opcode};

/// Conditional-jump spellings shared by both widths, expanded against one
/// family's opcode constants.
macro_rules! jump_aliases {
    ($m:ident) => {
        [
            ("JA", $m::AJHI),
            ("JAE", $m::AJCC),
            ("JB", $m::AJCS),
            ("JBE", $m::AJLS),
            ("JC", $m::AJCS),
            ("JE", $m::AJEQ),
            ("JG", $m::AJGT),
            ("JHS", $m::AJCC),
            ("JL", $m::AJLT),
            ("JLO", $m::AJCS),
            ("JNA", $m::AJLS),
            ("JNAE", $m::AJCS),
            ("JNB", $m::AJCC),
            ("JNBE", $m::AJHI),
            ("JNC", $m::AJCC),
            ("JNG", $m::AJLE),
            ("JNGE", $m::AJLT),
            ("JNL", $m::AJGE),
            ("JNLE", $m::AJGT),
            ("JNO", $m::AJOC),
            ("JNP", $m::AJPC),
            ("JNS", $m::AJPL),
            ("JNZ", $m::AJNE),
            ("JO", $m::AJOS),
            ("JP", $m::AJPS),
            ("JPE", $m::AJPS),
            ("JPO", $m::AJPC),
            ("JS", $m::AJMI),
            ("JZ", $m::AJEQ),
        ]
    };
}

/// Conditional-jump aliases for 386.
pub(crate) const JUMP_ALIASES_386: [(&str, Opcode); 29] = jump_aliases!(i386);

/// Conditional-jump aliases for amd64.
pub(crate) const JUMP_ALIASES_AMD64: [(&str, Opcode); 29] = jump_aliases!(x86);

/// 386 mnemonics folded onto another opcode.
pub(crate) const MOVE_ALIASES_386: &[(&str, Opcode)] = &[
    ("MASKMOVDQU", i386::AMASKMOVOU),
    ("MOVOA", i386::AMOVO),
    ("MOVNTDQ", i386::AMOVNTO),
];

/// amd64 mnemonics folded onto another opcode.
pub(crate) const MOVE_ALIASES_AMD64: &[(&str, Opcode)] = &[
    ("MASKMOVDQU", x86::AMASKMOVOU),
    ("MOVD", x86::AMOVQ),
    ("MOVDQ2Q", x86::AMOVQ),
    ("MOVNTDQ", x86::AMOVNTO),
    ("MOVOA", x86::AMOVO),
    ("PF2ID", x86::APF2IL),
    ("PI2FD", x86::API2FL),
    ("PSLLDQ", x86::APSLLO),
    ("PSRLDQ", x86::APSRLO),
];

/// Branches start with `J`; `CALL` is the only other control transfer.
pub(crate) fn jump_386(word: &str) -> bool {
    word.starts_with('J') || word == "CALL"
}

pub(crate) fn arch_386() -> ArchDescriptor {
    let mut b = DescriptorBuilder::new(Arch::I386, &i386::LINK_386, i386::aconv, jump_386);
    for (i, name) in i386::REGISTER.iter().enumerate() {
        b.register(*name, i386::REG_AL + i as i16);
    }
    b.pseudo_registers(false)
        .canonical(i386::ANAMES)
        .aliases(&JUMP_ALIASES_386)
        .aliases(MOVE_ALIASES_386)
        .build()
}

pub(crate) fn arch_amd64() -> ArchDescriptor {
    let mut b = DescriptorBuilder::new(Arch::Amd64, &x86::LINK_AMD64, x86::aconv, jump_386);
    for (i, name) in x86::REGISTER.iter().enumerate() {
        b.register(*name, x86::REG_AL + i as i16);
    }
    b.pseudo_registers(false)
        .canonical(x86::ANAMES)
        .aliases(&JUMP_ALIASES_AMD64)
        .aliases(MOVE_ALIASES_AMD64)
        .build()
}
