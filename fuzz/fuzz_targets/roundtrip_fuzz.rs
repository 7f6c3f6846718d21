#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any input must compress, and the stream must decode back exactly.
    let (compressed, len) = swiftlz::compress(data);
    assert_eq!(len, data.len());
    let restored = swiftlz::decompress(&compressed, len).expect("valid stream must decode");
    assert_eq!(restored, data);

    // Explicit levels must agree with their own decode side.
    for level in [1u32, 2] {
        let copts = swiftlz::CompressOptions {
            level,
            ..Default::default()
        };
        let (compressed, len) = swiftlz::compress_with_options(data, &copts).unwrap();
        let dopts = swiftlz::DecompressOptions { level };
        let restored =
            swiftlz::decompress_with_options(&compressed, len, &dopts).expect("roundtrip");
        assert_eq!(restored, data);
    }
});
