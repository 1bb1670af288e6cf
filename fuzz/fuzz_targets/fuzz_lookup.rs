#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // The factory must only ever return Ok/Err.
    let _ = asm_arch::descriptor(data);

    // Every lookup on every descriptor must be total over arbitrary words.
    for arch in asm_arch::Arch::ALL {
        let Ok(desc) = asm_arch::ArchDescriptor::new(arch) else {
            continue;
        };
        for word in data.split_whitespace() {
            let _ = desc.instruction(word);
            let _ = desc.register(word);
            let _ = desc.is_jump(word);
            if desc.is_register_prefix(word) {
                for n in [-1, 0, 15, 31, 1023, 1024, i16::MAX] {
                    let _ = desc.register_number(word, n);
                }
            }
        }
        let _ = desc.aconv(data.len() as u16);
    }
});
