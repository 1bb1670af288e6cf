//! # asm-arch — Architecture Descriptors for a Multi-Target Assembler
//!
//! `asm-arch` turns a target identifier into an immutable
//! [`ArchDescriptor`]: the mnemonic table, register table, `PREFIX(n)`
//! register notation, branch classifier and opcode printer that an assembler
//! front end needs, so its lexer and parser stay free of per-target
//! conditionals.
//!
//! ## Quick Start
//!
//! ```rust
//! use asm_arch::descriptor;
//!
//! let amd64 = descriptor("amd64").unwrap();
//! assert_eq!(amd64.instruction("JAE"), amd64.instruction("JNB"));
//! assert!(amd64.is_jump("JAE"));
//!
//! let arm = descriptor("arm").unwrap();
//! assert_eq!(arm.register("g"), arm.register_number("R", 10));
//! assert_eq!(arm.register("R10"), None);
//! ```
//!
//! ## Features
//!
//! - **Closed target set** — `386`, `amd64`, `amd64p32`, `arm`, `ppc64`,
//!   `ppc64le`; anything else is [`ArchError::Unsupported`].
//! - **Family gates** — `x86`, `arm` and `ppc64` Cargo features (all on by
//!   default) compile each family's tables in or out.
//! - **`no_std` + `alloc`** — tables are B-trees; `std` only adds
//!   `tracing/std`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args,
    clippy::doc_markdown
)]

extern crate alloc;

/// Target identifiers.
pub mod arch;
/// The descriptor record and its factory.
pub mod descriptor;
/// Error types.
pub mod error;
/// Link-architecture data: opcode and register tables per family.
pub mod obj;

#[cfg(feature = "arm")]
pub(crate) mod arm;
#[cfg(feature = "ppc64")]
pub(crate) mod ppc64;
#[cfg(feature = "x86")]
pub(crate) mod x86;

// Re-exports
pub use arch::Arch;
pub use descriptor::{
    no_register_number, ArchDescriptor, AconvFn, JumpFn, RegisterNumberFn, PSEUDOS, RFP, RPC,
    RSB, RSP,
};
pub use error::ArchError;
pub use obj::{ByteOrder, LinkArch, Opcode};

/// Build the descriptor for an architecture identifier such as `"amd64"`.
///
/// # Errors
///
/// Returns [`ArchError::Unsupported`] if `name` is not one of the supported
/// identifiers, and [`ArchError::Disabled`] if its family was compiled out.
///
/// # Examples
///
/// ```rust
/// use asm_arch::{descriptor, ArchError};
///
/// assert!(descriptor("ppc64le").is_ok());
/// assert_eq!(
///     descriptor("sparc64").unwrap_err(),
///     ArchError::Unsupported { name: "sparc64".into() }
/// );
/// ```
pub fn descriptor(name: &str) -> Result<ArchDescriptor, ArchError> {
    ArchDescriptor::from_name(name)
}
