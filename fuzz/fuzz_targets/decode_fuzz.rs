#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the decoder with arbitrary bytes and lengths.
    // It must never panic — only return errors.
    if data.len() < 2 {
        return;
    }
    let declared = u16::from_le_bytes([data[0], data[1]]) as usize;
    let stream = &data[2..];

    if let Ok(out) = swiftlz::decompress(stream, declared) {
        assert_eq!(out.len(), declared);
    }

    // Also drive the explicit-level entry points.
    for level in [1u32, 2] {
        let opts = swiftlz::DecompressOptions { level };
        if let Ok(out) = swiftlz::decompress_with_options(stream, declared, &opts) {
            assert_eq!(out.len(), declared);
        }
    }
});
