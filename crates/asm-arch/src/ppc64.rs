//! PPC64 descriptor, shared by the big- and little-endian targets.
//!
//! `R30` holds the goroutine pointer and is only reachable as `g`.

use crate::arch::Arch;
use crate::descriptor::{ArchDescriptor, DescriptorBuilder};
use crate::obj::{ppc64, Opcode};

pub(crate) const ALIASES: &[(&str, Opcode)] = &[
    ("BR", ppc64::ABR),
    ("BL", ppc64::ABL),
    ("RETURN", ppc64::ARETURN),
];

/// Prefixes accepted in `R(n)`, `F(n)`, `CR(n)` and `SPR(n)` notation.
pub(crate) const REGISTER_PREFIXES: &[&str] = &["CR", "F", "R", "SPR"];

/// Every branch and call mnemonic.
pub(crate) const JUMPS: &[&str] = &[
    "BC", "BCL", "BEQ", "BGE", "BGT", "BL", "BLE", "BLT", "BNE", "BR", "BVC", "BVS", "CALL",
    "JMP",
];

pub(crate) fn jump_ppc64(word: &str) -> bool {
    JUMPS.contains(&word)
}

pub(crate) fn ppc64_register_number(prefix: &str, n: i16) -> Option<i16> {
    let (base, count) = match prefix {
        "CR" => (ppc64::REG_CR0, 8),
        "F" => (ppc64::REG_F0, 32),
        "R" => (ppc64::REG_R0, 32),
        "SPR" => (ppc64::REG_SPR0, ppc64::NSPR),
        _ => return None,
    };
    (0..count).contains(&n).then(|| base + n)
}

/// Build the PPC64 tables against the big-endian link architecture; the
/// factory relinks them for each target.
pub(crate) fn arch_ppc64() -> ArchDescriptor {
    let mut b = DescriptorBuilder::new(Arch::Ppc64, &ppc64::LINK_PPC64, ppc64::aconv, jump_ppc64);
    b.register_range(ppc64::REG_R0..=ppc64::REG_R31)
        .register_range(ppc64::REG_F0..=ppc64::REG_F31)
        .register_range(ppc64::REG_CR0..=ppc64::REG_CR7)
        .register_range(ppc64::REG_MSR..=ppc64::REG_CR)
        .register("CR", ppc64::REG_CR)
        .register("XER", ppc64::REG_XER)
        .register("LR", ppc64::REG_LR)
        .register("CTR", ppc64::REG_CTR)
        .register("FPSCR", ppc64::REG_FPSCR)
        .register("MSR", ppc64::REG_MSR)
        .pseudo_registers(false)
        .reserve_g("R30", ppc64::REG_R30)
        .register_numbers(REGISTER_PREFIXES, ppc64_register_number)
        .canonical(ppc64::ANAMES)
        .aliases(ALIASES)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj;

    #[test]
    fn g_replaces_r30() {
        let a = arch_ppc64();
        assert_eq!(a.register("g"), Some(ppc64::REG_R30));
        assert_eq!(a.register("R30"), None);
        assert_eq!(a.register("R31"), Some(ppc64::REG_R31));
    }

    #[test]
    fn special_registers() {
        let a = arch_ppc64();
        assert_eq!(a.register("CR"), Some(ppc64::REG_CR));
        assert_eq!(a.register("CR3"), Some(ppc64::REG_CR0 + 3));
        assert_eq!(a.register("LR"), Some(ppc64::REG_LR));
        assert_eq!(a.register("CTR"), Some(ppc64::REG_CTR));
        assert_eq!(a.register("XER"), Some(ppc64::REG_XER));
        assert_eq!(a.register("FPSCR"), Some(ppc64::REG_FPSCR));
        assert_eq!(a.register("MSR"), Some(ppc64::REG_MSR));
        assert_eq!(a.register("SP"), None);
    }

    #[test]
    fn register_number_bounds() {
        assert_eq!(ppc64_register_number("R", 31), Some(ppc64::REG_R31));
        assert_eq!(ppc64_register_number("R", 32), None);
        assert_eq!(ppc64_register_number("F", 0), Some(ppc64::REG_F0));
        assert_eq!(ppc64_register_number("CR", 7), Some(ppc64::REG_CR7));
        assert_eq!(ppc64_register_number("CR", 8), None);
        assert_eq!(ppc64_register_number("SPR", 8), Some(ppc64::REG_LR));
        assert_eq!(ppc64_register_number("SPR", 1023), Some(ppc64::REG_SPR0 + 1023));
        assert_eq!(ppc64_register_number("SPR", 1024), None);
        assert_eq!(ppc64_register_number("SPR", -1), None);
        assert_eq!(ppc64_register_number("DCR", 0), None);
    }

    #[test]
    fn branch_aliases_print_as_common_opcodes() {
        let a = arch_ppc64();
        assert_eq!(a.instruction("BR"), Some(obj::AJMP));
        assert_eq!(a.instruction("BL"), Some(obj::ACALL));
        assert_eq!(a.instruction("RETURN"), Some(obj::ARET));
        assert_eq!(a.aconv(obj::ARET), "RET");
    }

    #[test]
    fn jumps_classified() {
        for word in JUMPS {
            assert!(jump_ppc64(word), "{word}");
        }
        assert!(!jump_ppc64("ADD"));
        assert!(!jump_ppc64("B"));
    }
}
