//! Error types for descriptor construction.

use alloc::string::String;

use crate::arch::Arch;

/// Failure to produce an architecture descriptor.
///
/// Register and mnemonic lookups never fail with an error; they report
/// misses as `None`. Only the factory can fail, and when it does the
/// enclosing assembly run cannot continue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArchError {
    /// The identifier does not name any supported architecture.
    #[error("unsupported architecture '{name}'")]
    Unsupported {
        /// The identifier as given by the caller.
        name: String,
    },

    /// The architecture is known but its family was compiled out.
    #[error("architecture {arch} not enabled in this build")]
    Disabled {
        /// The architecture that was requested.
        arch: Arch,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn error_unsupported_display() {
        let err = ArchError::Unsupported {
            name: "mips64".into(),
        };
        assert_eq!(format!("{}", err), "unsupported architecture 'mips64'");
    }

    #[test]
    fn error_disabled_display() {
        let err = ArchError::Disabled { arch: Arch::Ppc64le };
        assert_eq!(
            format!("{}", err),
            "architecture ppc64le not enabled in this build"
        );
    }
}
