//! Print a summary of one architecture descriptor.
//!
//! Run with: `cargo run --example describe -- arm`

use std::process::ExitCode;

use asm_arch::descriptor;

fn main() -> ExitCode {
    let name = std::env::args().nth(1).unwrap_or_else(|| String::from("amd64"));
    let desc = match descriptor(&name) {
        Ok(desc) => desc,
        Err(err) => {
            eprintln!("asm-arch: {err}");
            return ExitCode::FAILURE;
        }
    };

    let link = desc.link_arch();
    println!("=== {} ===", desc.arch());
    println!("   pointer size:  {} bytes", link.ptr_size);
    println!("   register size: {} bytes", link.reg_size);
    println!("   byte order:    {}", link.byte_order);
    println!("   instructions:  {}", desc.instructions().count());
    println!("   registers:     {}", desc.registers().count());

    let prefixes: Vec<&str> = desc.register_prefixes().collect();
    if prefixes.is_empty() {
        println!("   PREFIX(n):     not supported");
    } else {
        println!("   PREFIX(n):     {}", prefixes.join(", "));
    }

    let jumps: Vec<&str> = desc
        .instructions()
        .filter(|(name, _)| desc.is_jump(name))
        .map(|(name, _)| name)
        .collect();
    println!("\n{} branch/call mnemonics:", jumps.len());
    for chunk in jumps.chunks(12) {
        println!("   {}", chunk.join(" "));
    }

    let pseudo: Vec<String> = desc
        .registers()
        .filter(|&(_, reg)| reg < 0)
        .map(|(name, reg)| format!("{name}={reg}"))
        .collect();
    println!("\npseudo-registers: {}", pseudo.join(" "));

    ExitCode::SUCCESS
}
