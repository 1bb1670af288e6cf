//! The closed set of target architectures.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::ArchError;

/// Target architecture.
///
/// One variant per CPU family, pointer width and byte order the assembler
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arch {
    /// 32-bit x86.
    I386,
    /// 64-bit x86.
    Amd64,
    /// 64-bit x86 with 32-bit pointers.
    Amd64p32,
    /// 32-bit ARM.
    Arm,
    /// 64-bit PowerPC, big-endian.
    Ppc64,
    /// 64-bit PowerPC, little-endian.
    Ppc64le,
}

impl Arch {
    /// Every architecture, in declaration order.
    pub const ALL: [Arch; 6] = [
        Arch::I386,
        Arch::Amd64,
        Arch::Amd64p32,
        Arch::Arm,
        Arch::Ppc64,
        Arch::Ppc64le,
    ];

    /// The identifier accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Arch::I386 => "386",
            Arch::Amd64 => "amd64",
            Arch::Amd64p32 => "amd64p32",
            Arch::Arm => "arm",
            Arch::Ppc64 => "ppc64",
            Arch::Ppc64le => "ppc64le",
        }
    }

    /// The architecture whose tables this one shares, if it is a variant.
    ///
    /// Variants differ from their base only in pointer width or byte order.
    #[must_use]
    pub fn base(self) -> Option<Arch> {
        match self {
            Arch::Amd64p32 => Some(Arch::Amd64),
            Arch::Ppc64le => Some(Arch::Ppc64),
            _ => None,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Arch {
    type Err = ArchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "386" => Ok(Arch::I386),
            "amd64" => Ok(Arch::Amd64),
            "amd64p32" => Ok(Arch::Amd64p32),
            "arm" => Ok(Arch::Arm),
            "ppc64" => Ok(Arch::Ppc64),
            "ppc64le" => Ok(Arch::Ppc64le),
            _ => Err(ArchError::Unsupported {
                name: String::from(s),
            }),
        }
    }
}
