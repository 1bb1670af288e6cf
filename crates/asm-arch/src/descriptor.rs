//! Architecture descriptor: the lookup tables the assembler front end
//! consults instead of branching on the target itself.
//!
//! A descriptor is built once per run by [`ArchDescriptor::new`] and only
//! read afterwards. It holds no interior mutability, so a single instance can
//! be shared by any number of threads.

use alloc::borrow::Cow;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;

use crate::arch::Arch;
use crate::error::ArchError;
use crate::obj::{self, LinkArch, Opcode};

// ── Pseudo-registers ─────────────────────────────────────────────────────
//
// Named by the constant without its leading R. Every real register
// encoding is non-negative.

/// Frame pointer pseudo-register (`FP`).
pub const RFP: i16 = -1;
/// Static base pseudo-register (`SB`).
pub const RSB: i16 = -2;
/// Stack pointer pseudo-register (`SP`), ARM only.
pub const RSP: i16 = -3;
/// Program counter pseudo-register (`PC`).
pub const RPC: i16 = -4;

/// Assembler directives shared by every architecture.
pub const PSEUDOS: &[(&str, Opcode)] = &[
    ("DATA", obj::ADATA),
    ("FUNCDATA", obj::AFUNCDATA),
    ("GLOBL", obj::AGLOBL),
    ("PCDATA", obj::APCDATA),
    ("TEXT", obj::ATEXT),
];

/// Resolves `PREFIX(n)` register notation, e.g. `R(10)` or `SPR(268)`.
pub type RegisterNumberFn = fn(&str, i16) -> Option<i16>;
/// Classifies a mnemonic as a branch or call.
pub type JumpFn = fn(&str) -> bool;
/// Prints an opcode for diagnostics.
pub type AconvFn = fn(Opcode) -> Cow<'static, str>;

/// Register-number resolver for architectures without `PREFIX(n)` notation.
///
/// Always fails, so callers treat "unsupported" like any other miss.
pub fn no_register_number(_prefix: &str, _n: i16) -> Option<i16> {
    None
}

/// Immutable description of one target architecture.
#[derive(Debug, Clone)]
pub struct ArchDescriptor {
    arch: Arch,
    link_arch: &'static LinkArch,
    instructions: BTreeMap<&'static str, Opcode>,
    registers: BTreeMap<String, i16>,
    register_prefixes: BTreeSet<&'static str>,
    register_number: RegisterNumberFn,
    is_jump: JumpFn,
    aconv: AconvFn,
}

impl ArchDescriptor {
    /// Build the descriptor for `arch`.
    ///
    /// Variants that only change pointer width or byte order reuse their
    /// base architecture's tables with a different link architecture.
    ///
    /// # Errors
    ///
    /// Returns [`ArchError::Disabled`] if the architecture's family was not
    /// compiled in.
    pub fn new(arch: Arch) -> Result<Self, ArchError> {
        let desc: ArchDescriptor = match arch {
            #[cfg(feature = "x86")]
            Arch::I386 => crate::x86::arch_386(),
            #[cfg(feature = "x86")]
            Arch::Amd64 => crate::x86::arch_amd64(),
            #[cfg(feature = "x86")]
            Arch::Amd64p32 => {
                crate::x86::arch_amd64().relink(Arch::Amd64p32, &obj::x86::LINK_AMD64P32)
            }
            #[cfg(feature = "arm")]
            Arch::Arm => crate::arm::arch_arm(),
            #[cfg(feature = "ppc64")]
            Arch::Ppc64 => crate::ppc64::arch_ppc64().relink(Arch::Ppc64, &obj::ppc64::LINK_PPC64),
            #[cfg(feature = "ppc64")]
            Arch::Ppc64le => {
                crate::ppc64::arch_ppc64().relink(Arch::Ppc64le, &obj::ppc64::LINK_PPC64LE)
            }
            #[allow(unreachable_patterns)]
            _ => return Err(ArchError::Disabled { arch }),
        };
        tracing::debug!(
            arch = %arch,
            instructions = desc.instructions.len(),
            registers = desc.registers.len(),
            prefixes = desc.register_prefixes.len(),
            "built architecture descriptor"
        );
        Ok(desc)
    }

    /// Parse an architecture identifier and build its descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ArchError::Unsupported`] for an unknown identifier and
    /// [`ArchError::Disabled`] for a family that was compiled out.
    pub fn from_name(name: &str) -> Result<Self, ArchError> {
        let arch = name.parse::<Arch>().map_err(|err| {
            tracing::debug!(%err, "rejected architecture identifier");
            err
        })?;
        Self::new(arch)
    }

    /// Swap the link architecture, keeping every table.
    #[cfg_attr(not(any(feature = "x86", feature = "ppc64")), allow(dead_code))]
    pub(crate) fn relink(mut self, arch: Arch, link_arch: &'static LinkArch) -> Self {
        self.arch = arch;
        self.link_arch = link_arch;
        self
    }

    /// The architecture this descriptor was built for.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Pointer size, byte order and friends.
    pub fn link_arch(&self) -> &'static LinkArch {
        self.link_arch
    }

    /// Opcode for a mnemonic, aliases included.
    pub fn instruction(&self, mnemonic: &str) -> Option<Opcode> {
        self.instructions.get(mnemonic).copied()
    }

    /// Encoding of a named register or pseudo-register.
    pub fn register(&self, name: &str) -> Option<i16> {
        self.registers.get(name).copied()
    }

    /// Whether `prefix` may appear in `PREFIX(n)` register notation.
    pub fn is_register_prefix(&self, prefix: &str) -> bool {
        self.register_prefixes.contains(prefix)
    }

    /// Resolve `PREFIX(n)` register notation.
    ///
    /// `None` both for unknown prefixes and for indexes the architecture
    /// has no register for.
    pub fn register_number(&self, prefix: &str, n: i16) -> Option<i16> {
        (self.register_number)(prefix, n)
    }

    /// Whether the mnemonic is a branch or call whose operand is a target.
    pub fn is_jump(&self, mnemonic: &str) -> bool {
        (self.is_jump)(mnemonic)
    }

    /// Mnemonic for an opcode; unknown opcodes print as `A???<n>`.
    pub fn aconv(&self, opcode: Opcode) -> Cow<'static, str> {
        (self.aconv)(opcode)
    }

    /// Opcode of an assembler directive (`TEXT`, `DATA`, ...).
    pub fn pseudo_op(&self, name: &str) -> Option<Opcode> {
        PSEUDOS
            .iter()
            .find(|(pseudo, _)| *pseudo == name)
            .map(|&(_, op)| op)
    }

    /// All mnemonics and their opcodes, in name order.
    pub fn instructions(&self) -> impl Iterator<Item = (&'static str, Opcode)> + '_ {
        self.instructions.iter().map(|(name, op)| (*name, *op))
    }

    /// All register names and their encodings, in name order.
    pub fn registers(&self) -> impl Iterator<Item = (&str, i16)> + '_ {
        self.registers.iter().map(|(name, reg)| (name.as_str(), *reg))
    }

    /// Prefixes accepted in `PREFIX(n)` notation.
    pub fn register_prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.register_prefixes.iter().copied()
    }
}

/// Assembles the tables of one descriptor.
///
/// Used by the per-family builders; order of calls matters only where
/// noted.
#[cfg_attr(
    not(any(feature = "x86", feature = "arm", feature = "ppc64")),
    allow(dead_code)
)]
pub(crate) struct DescriptorBuilder {
    arch: Arch,
    link_arch: &'static LinkArch,
    instructions: BTreeMap<&'static str, Opcode>,
    /// Every alias bound so far, across all `aliases` calls.
    alias_targets: BTreeMap<&'static str, Opcode>,
    registers: BTreeMap<String, i16>,
    register_prefixes: BTreeSet<&'static str>,
    register_number: RegisterNumberFn,
    is_jump: JumpFn,
    aconv: AconvFn,
}

#[cfg_attr(
    not(any(feature = "x86", feature = "arm", feature = "ppc64")),
    allow(dead_code)
)]
impl DescriptorBuilder {
    pub(crate) fn new(
        arch: Arch,
        link_arch: &'static LinkArch,
        aconv: AconvFn,
        is_jump: JumpFn,
    ) -> Self {
        Self {
            arch,
            link_arch,
            instructions: BTreeMap::new(),
            alias_targets: BTreeMap::new(),
            registers: BTreeMap::new(),
            register_prefixes: BTreeSet::new(),
            register_number: no_register_number,
            is_jump,
            aconv,
        }
    }

    /// Insert the common opcodes followed by the family's own.
    pub(crate) fn canonical(&mut self, names: &'static [&'static str]) -> &mut Self {
        for (op, name) in obj::ANAMES.iter().enumerate() {
            self.instructions.insert(*name, op as Opcode);
        }
        for (i, name) in names.iter().enumerate() {
            self.instructions.insert(*name, obj::A_ARCHSPECIFIC + i as Opcode);
        }
        self
    }

    /// Layer hand-maintained aliases over the canonical table.
    ///
    /// Must run after [`canonical`](Self::canonical): an alias replaces a
    /// canonical entry of the same name. A name may repeat across tables
    /// only with the same target.
    pub(crate) fn aliases(&mut self, aliases: &[(&'static str, Opcode)]) -> &mut Self {
        for &(name, op) in aliases {
            if let Some(prev) = self.alias_targets.insert(name, op) {
                debug_assert_eq!(prev, op, "alias {name} bound to two opcodes");
            }
            self.instructions.insert(name, op);
        }
        self
    }

    pub(crate) fn register(&mut self, name: impl Into<String>, reg: i16) -> &mut Self {
        self.registers.insert(name.into(), reg);
        self
    }

    /// Register every encoding in `range` under its printed name.
    #[cfg_attr(not(any(feature = "arm", feature = "ppc64")), allow(dead_code))]
    pub(crate) fn register_range(&mut self, range: impl Iterator<Item = i16>) -> &mut Self {
        for reg in range {
            self.registers.insert(obj::rconv(reg), reg);
        }
        self
    }

    /// Add `SB`, `FP` and `PC`, plus `SP` when the target treats the stack
    /// pointer as a pseudo-register.
    pub(crate) fn pseudo_registers(&mut self, with_sp: bool) -> &mut Self {
        self.register("SB", RSB).register("FP", RFP).register("PC", RPC);
        if with_sp {
            self.register("SP", RSP);
        }
        self
    }

    /// Hide the register holding the goroutine pointer behind `g`.
    #[cfg_attr(not(any(feature = "arm", feature = "ppc64")), allow(dead_code))]
    pub(crate) fn reserve_g(&mut self, raw: &str, reg: i16) -> &mut Self {
        self.registers.remove(raw);
        self.register("g", reg)
    }

    #[cfg_attr(not(any(feature = "arm", feature = "ppc64")), allow(dead_code))]
    pub(crate) fn register_numbers(
        &mut self,
        prefixes: &[&'static str],
        resolve: RegisterNumberFn,
    ) -> &mut Self {
        self.register_prefixes.extend(prefixes.iter().copied());
        self.register_number = resolve;
        self
    }

    pub(crate) fn build(&mut self) -> ArchDescriptor {
        ArchDescriptor {
            arch: self.arch,
            link_arch: self.link_arch,
            instructions: core::mem::take(&mut self.instructions),
            registers: core::mem::take(&mut self.registers),
            register_prefixes: core::mem::take(&mut self.register_prefixes),
            register_number: self.register_number,
            is_jump: self.is_jump,
            aconv: self.aconv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const NAMES: &[&str] = &["ADD", "MOVW"];

    fn never_jump(_: &str) -> bool {
        false
    }

    fn aconv(a: Opcode) -> Cow<'static, str> {
        obj::aconv_with(NAMES, a)
    }

    fn link() -> &'static LinkArch {
        static LINK: LinkArch = LinkArch {
            name: "test",
            thechar: '0',
            byte_order: obj::ByteOrder::LittleEndian,
            min_lc: 1,
            ptr_size: 8,
            reg_size: 8,
        };
        &LINK
    }

    #[test]
    fn alias_overrides_canonical_entry() {
        let add = obj::A_ARCHSPECIFIC;
        let movw = obj::A_ARCHSPECIFIC + 1;
        let desc = DescriptorBuilder::new(Arch::Amd64, link(), aconv, never_jump)
            .canonical(NAMES)
            .aliases(&[("MOVW", add), ("PLUS", add)])
            .build();
        assert_eq!(desc.instruction("MOVW"), Some(add));
        assert_eq!(desc.instruction("PLUS"), Some(add));
        assert_eq!(desc.instruction("ADD"), Some(add));
        assert_eq!(desc.aconv(movw), "MOVW");
    }

    #[test]
    fn alias_may_repeat_across_tables_with_same_target() {
        let add = obj::A_ARCHSPECIFIC;
        let desc = DescriptorBuilder::new(Arch::Amd64, link(), aconv, never_jump)
            .canonical(NAMES)
            .aliases(&[("PLUS", add)])
            .aliases(&[("PLUS", add), ("SUM", add)])
            .build();
        assert_eq!(desc.instruction("PLUS"), Some(add));
        assert_eq!(desc.instruction("SUM"), Some(add));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "alias PLUS bound to two opcodes")]
    fn alias_rebound_by_later_table_is_rejected() {
        let add = obj::A_ARCHSPECIFIC;
        let movw = obj::A_ARCHSPECIFIC + 1;
        DescriptorBuilder::new(Arch::Amd64, link(), aconv, never_jump)
            .canonical(NAMES)
            .aliases(&[("PLUS", add)])
            .aliases(&[("PLUS", movw)]);
    }

    #[test]
    fn canonical_includes_common_opcodes() {
        let desc = DescriptorBuilder::new(Arch::Amd64, link(), aconv, never_jump)
            .canonical(NAMES)
            .build();
        assert_eq!(desc.instruction("CALL"), Some(obj::ACALL));
        assert_eq!(desc.instruction("JMP"), Some(obj::AJMP));
        assert_eq!(desc.instructions().count(), obj::ANAMES.len() + NAMES.len());
    }

    #[test]
    fn reserve_g_renames_register() {
        let desc = DescriptorBuilder::new(Arch::Arm, link(), aconv, never_jump)
            .register("R1", 101)
            .register("R2", 102)
            .reserve_g("R2", 102)
            .build();
        assert_eq!(desc.register("g"), Some(102));
        assert_eq!(desc.register("R2"), None);
        assert_eq!(desc.register("R1"), Some(101));
    }

    #[test]
    fn pseudo_registers_are_negative_and_distinct() {
        let desc = DescriptorBuilder::new(Arch::Arm, link(), aconv, never_jump)
            .pseudo_registers(true)
            .build();
        let mut regs: Vec<i16> = desc.registers().map(|(_, r)| r).collect();
        regs.sort_unstable();
        assert_eq!(regs, [RPC, RSP, RSB, RFP]);
    }

    #[test]
    fn default_resolver_always_fails() {
        let desc = DescriptorBuilder::new(Arch::I386, link(), aconv, never_jump).build();
        assert_eq!(desc.register_number("R", 0), None);
        assert_eq!(desc.register_prefixes().count(), 0);
        assert!(!desc.is_register_prefix("R"));
    }

    #[test]
    fn pseudo_ops_resolve_independently_of_tables() {
        let desc = DescriptorBuilder::new(Arch::I386, link(), aconv, never_jump).build();
        assert_eq!(desc.pseudo_op("TEXT"), Some(obj::ATEXT));
        assert_eq!(desc.pseudo_op("GLOBL"), Some(obj::AGLOBL));
        assert_eq!(desc.pseudo_op("MOVW"), None);
    }

    #[test]
    fn descriptor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArchDescriptor>();
    }
}
