//! Performance benchmarks for `asm_arch`.
//!
//! Measures:
//! - Descriptor construction per architecture
//! - Mnemonic and register lookups on a built descriptor
//! - `PREFIX(n)` resolution and opcode printing
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use asm_arch::{Arch, ArchDescriptor};

// ─── Construction ────────────────────────────────────────────────────────────

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for arch in Arch::ALL {
        group.bench_function(arch.name(), |b| {
            b.iter(|| ArchDescriptor::new(black_box(arch)).unwrap())
        });
    }
    group.finish();
}

// ─── Lookups ─────────────────────────────────────────────────────────────────

fn bench_lookups(c: &mut Criterion) {
    let amd64 = ArchDescriptor::new(Arch::Amd64).unwrap();
    let ppc64 = ArchDescriptor::new(Arch::Ppc64).unwrap();
    let mut group = c.benchmark_group("lookup");

    group.bench_function("amd64_instruction_hit", |b| {
        b.iter(|| amd64.instruction(black_box("JNB")))
    });

    group.bench_function("amd64_instruction_miss", |b| {
        b.iter(|| amd64.instruction(black_box("FROBNICATE")))
    });

    group.bench_function("amd64_register", |b| {
        b.iter(|| amd64.register(black_box("X15")))
    });

    group.bench_function("amd64_is_jump", |b| {
        b.iter(|| amd64.is_jump(black_box("JLS")))
    });

    group.bench_function("ppc64_register_number", |b| {
        b.iter(|| ppc64.register_number(black_box("SPR"), black_box(268)))
    });

    group.bench_function("ppc64_aconv", |b| {
        b.iter(|| ppc64.aconv(black_box(200)))
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_lookups);
criterion_main!(benches);
