//! ARM descriptor.
//!
//! General and floating-point registers come from the register printer over
//! the contiguous range `R0`..`SPSR` (exclusive). `R10` holds the goroutine
//! pointer and is only reachable as `g`. Coprocessor registers `C0`–`C15`
//! use their raw number as encoding, and `SP` is a pseudo-register.

use crate::arch::Arch;
use crate::descriptor::{ArchDescriptor, DescriptorBuilder};
use crate::obj::{self, arm, Opcode};

/// Branch spellings folded onto the common opcodes.
pub(crate) const ALIASES: &[(&str, Opcode)] = &[("B", obj::AJMP), ("BL", obj::ACALL)];

/// Prefixes accepted in `R(n)` / `F(n)` notation.
pub(crate) const REGISTER_PREFIXES: &[&str] = &["F", "R"];

/// Every branch and call mnemonic.
pub(crate) const JUMPS: &[&str] = &[
    "B", "BL", "BEQ", "BNE", "BCS", "BHS", "BCC", "BLO", "BMI", "BPL", "BVS", "BVC", "BHI",
    "BLS", "BGE", "BLT", "BGT", "BLE", "CALL", "JMP",
];

pub(crate) fn jump_arm(word: &str) -> bool {
    JUMPS.contains(&word)
}

pub(crate) fn arm_register_number(prefix: &str, n: i16) -> Option<i16> {
    if !(0..=15).contains(&n) {
        return None;
    }
    match prefix {
        "R" => Some(arm::REG_R0 + n),
        "F" => Some(arm::REG_F0 + n),
        _ => None,
    }
}

pub(crate) fn arch_arm() -> ArchDescriptor {
    let mut b = DescriptorBuilder::new(Arch::Arm, &arm::LINK_ARM, arm::aconv, jump_arm);
    b.register_range(arm::REG_R0..arm::REG_SPSR)
        .reserve_g("R10", arm::REG_R10);
    for i in 0..16i16 {
        b.register(alloc::format!("C{}", i), i);
    }
    b.pseudo_registers(true)
        .register_numbers(REGISTER_PREFIXES, arm_register_number)
        .canonical(arm::ANAMES)
        .aliases(ALIASES)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::RSP;

    #[test]
    fn g_replaces_r10() {
        let a = arch_arm();
        assert_eq!(a.register("g"), Some(arm::REG_R10));
        assert_eq!(a.register("R10"), None);
        assert_eq!(a.register("R9"), Some(arm::REG_R0 + 9));
        assert_eq!(a.register("R11"), Some(arm::REG_R0 + 11));
    }

    #[test]
    fn status_registers_present_spsr_excluded() {
        let a = arch_arm();
        assert_eq!(a.register("FPSR"), Some(arm::REG_FPSR));
        assert_eq!(a.register("FPCR"), Some(arm::REG_FPCR));
        assert_eq!(a.register("CPSR"), Some(arm::REG_CPSR));
        assert_eq!(a.register("SPSR"), None);
    }

    #[test]
    fn coprocessor_registers_use_raw_numbers() {
        let a = arch_arm();
        assert_eq!(a.register("C0"), Some(0));
        assert_eq!(a.register("C15"), Some(15));
        assert_eq!(a.register("C16"), None);
    }

    #[test]
    fn sp_is_pseudo() {
        assert_eq!(arch_arm().register("SP"), Some(RSP));
    }

    #[test]
    fn register_number_bounds() {
        assert_eq!(arm_register_number("R", 0), Some(arm::REG_R0));
        assert_eq!(arm_register_number("R", 10), Some(arm::REG_R10));
        assert_eq!(arm_register_number("F", 15), Some(arm::REG_F15));
        assert_eq!(arm_register_number("R", 16), None);
        assert_eq!(arm_register_number("F", -1), None);
        assert_eq!(arm_register_number("C", 1), None);
    }

    #[test]
    fn branch_aliases() {
        let a = arch_arm();
        assert_eq!(a.instruction("B"), Some(obj::AJMP));
        assert_eq!(a.instruction("BL"), Some(obj::ACALL));
        assert_eq!(a.aconv(obj::AJMP), "JMP");
    }

    #[test]
    fn jumps_classified() {
        for word in JUMPS {
            assert!(jump_arm(word), "{word}");
        }
        assert!(!jump_arm("MOVW"));
        assert!(!jump_arm("BIC"));
        assert!(!jump_arm("BX"));
    }
}
