#![cfg(all(feature = "x86", feature = "arm", feature = "ppc64"))]
//! Property-based tests using proptest.
//!
//! Lookups run on identifiers and operands taken straight from source text,
//! so they must answer arbitrary input without panicking and stay
//! consistent with each other.

use asm_arch::{descriptor, Arch, ArchDescriptor};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_arch() -> impl Strategy<Value = Arch> {
    prop::sample::select(Arch::ALL.to_vec())
}

/// Short upper-case words, the shape of mnemonics and register names.
fn arb_word() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]{0,9}"
}

fn build(arch: Arch) -> ArchDescriptor {
    ArchDescriptor::new(arch).unwrap()
}

proptest! {
    #[test]
    fn arbitrary_identifiers_never_panic(s in ".{0,16}") {
        match descriptor(&s) {
            Ok(desc) => prop_assert_eq!(desc.arch().name(), s.as_str()),
            Err(err) => prop_assert!(err.to_string().contains(&s)),
        }
    }

    #[test]
    fn printer_total(arch in arb_arch(), op in any::<u16>()) {
        let desc = build(arch);
        let printed = desc.aconv(op);
        prop_assert!(!printed.is_empty());
        if let Some(back) = desc.instruction(&printed) {
            prop_assert_eq!(desc.aconv(back), printed);
        } else {
            prop_assert!(printed.starts_with("A???"));
        }
    }

    #[test]
    fn lookups_total(arch in arb_arch(), word in arb_word(), n in any::<i16>()) {
        let desc = build(arch);
        let _ = desc.instruction(&word);
        let _ = desc.register(&word);
        let _ = desc.is_jump(&word);
        let resolved = desc.register_number(&word, n);
        if resolved.is_some() {
            prop_assert!(desc.is_register_prefix(&word));
            prop_assert!(n >= 0);
        }
    }

    #[test]
    fn x86_register_numbers_always_fail(
        arch in prop::sample::select(vec![Arch::I386, Arch::Amd64, Arch::Amd64p32]),
        prefix in ".{0,4}",
        n in any::<i16>(),
    ) {
        prop_assert_eq!(build(arch).register_number(&prefix, n), None);
    }

    #[test]
    fn resolved_registers_are_real(arch in arb_arch(), n in 0i16..1100) {
        let desc = build(arch);
        let prefixes: Vec<&str> = desc.register_prefixes().collect();
        for prefix in prefixes {
            if let Some(reg) = desc.register_number(prefix, n) {
                prop_assert!(reg > 0);
                prop_assert!(!asm_arch::obj::rconv(reg).starts_with("R???"));
            }
        }
    }
}
