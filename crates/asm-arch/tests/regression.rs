//! Regression tests for table bugs.
//!
//! Each test pins a specific entry whose loss would silently change what the
//! assembler accepts or emits.

use asm_arch::{descriptor, Arch, ArchDescriptor, ArchError};

/// Regression: on ARM, `g` must carry exactly the encoding `R10` had, and
/// `R10` itself must not be accepted, so hand-written code cannot clobber
/// the goroutine pointer by accident.
#[test]
#[cfg(feature = "arm")]
fn arm_g_is_r10() {
    let arm = ArchDescriptor::new(Arch::Arm).unwrap();
    let r10 = asm_arch::obj::rconv(arm.register("g").unwrap());
    assert_eq!(r10, "R10");
    assert_eq!(arm.register("g"), Some(asm_arch::obj::arm::REG_R0 + 10));
    assert!(arm.register("R10").is_none());
    assert!(arm.registers().all(|(name, _)| name != "R10"));
}

/// Regression: `JAE` and `JNB` are two spellings of the carry-clear branch
/// and must assemble to the same opcode.
#[test]
#[cfg(feature = "x86")]
fn amd64_jae_equals_jnb() {
    let amd64 = descriptor("amd64").unwrap();
    let jae = amd64.instruction("JAE").unwrap();
    assert_eq!(amd64.instruction("JNB"), Some(jae));
    assert_eq!(amd64.aconv(jae), "JCC");
}

/// Regression: an unknown identifier must produce an error naming it, not a
/// default descriptor.
#[test]
fn unknown_identifier_is_explicit() {
    let err = descriptor("riscv64").unwrap_err();
    assert_eq!(
        err,
        ArchError::Unsupported {
            name: "riscv64".into()
        }
    );
    assert_eq!(err.to_string(), "unsupported architecture 'riscv64'");
}

/// Regression: `MOVOA` appears twice in the historical alias list; both
/// entries must name `MOVO`.
#[test]
#[cfg(feature = "x86")]
fn amd64_movoa_single_target() {
    let amd64 = descriptor("amd64").unwrap();
    assert_eq!(amd64.instruction("MOVOA"), amd64.instruction("MOVO"));
}

/// Regression: `SPR(n)` accepts exactly the 1024 special-purpose registers;
/// `SPR(1024)` would otherwise land on the first device control register.
#[test]
#[cfg(feature = "ppc64")]
fn ppc64_spr_upper_bound() {
    let ppc = descriptor("ppc64").unwrap();
    assert!(ppc.register_number("SPR", 1023).is_some());
    assert_eq!(ppc.register_number("SPR", 1024), None);
}

/// Regression: the empty mnemonic is not a jump, even on targets that
/// classify by first letter.
#[test]
#[cfg(feature = "x86")]
fn empty_mnemonic_is_not_a_jump() {
    assert!(!descriptor("386").unwrap().is_jump(""));
}

/// Regression: a family compiled out of the build must be reported as
/// disabled, for both of its identifiers, rather than failing to build or
/// being mistaken for an unknown name.
#[test]
#[cfg(not(feature = "ppc64"))]
fn ppc64_compiled_out_is_disabled() {
    for arch in [Arch::Ppc64, Arch::Ppc64le] {
        assert_eq!(
            ArchDescriptor::new(arch).unwrap_err(),
            ArchError::Disabled { arch }
        );
    }
    assert_eq!(
        descriptor("ppc64le").unwrap_err(),
        ArchError::Disabled {
            arch: Arch::Ppc64le
        }
    );
}

#[test]
#[cfg(not(feature = "x86"))]
fn x86_compiled_out_is_disabled() {
    for arch in [Arch::I386, Arch::Amd64, Arch::Amd64p32] {
        assert_eq!(
            ArchDescriptor::new(arch).unwrap_err(),
            ArchError::Disabled { arch }
        );
    }
}

#[test]
#[cfg(not(feature = "arm"))]
fn arm_compiled_out_is_disabled() {
    assert_eq!(
        descriptor("arm").unwrap_err(),
        ArchError::Disabled { arch: Arch::Arm }
    );
}
