// Historical fixed points of the wire format.
//
// These byte-exact vectors pin backward compatibility: streams produced
// by earlier releases must keep decoding, and the degenerate inputs
// below must keep producing the exact bytes earlier releases produced.

use swiftlz::{compress, decompress};

fn hex_to_bytes(s: &str) -> Vec<u8> {
    let s = s.trim();
    if s.is_empty() {
        return Vec::new();
    }
    assert!(s.len().is_multiple_of(2), "hex string must have even length");
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

/// (input, expected compressed bytes) pairs.
fn fixed_vectors() -> Vec<(Vec<u8>, Vec<u8>)> {
    [
        ("", ""),
        ("00", "0000"),
        ("ff", "00ff"),
        ("01", "0001"),
        ("0000", "010000"),
        ("ffff", "01ffff"),
        ("0101", "010101"),
        ("0168656c6c6f00776f726c640000", "0d0168656c6c6f00776f726c640000"),
    ]
    .into_iter()
    .map(|(input, compressed)| (hex_to_bytes(input), hex_to_bytes(compressed)))
    .collect()
}

#[test]
fn compress_matches_historical_bytes() {
    for (input, expected) in fixed_vectors() {
        let (compressed, len) = compress(&input);
        assert_eq!(compressed, expected, "input {input:02x?}");
        assert_eq!(len, input.len());
    }
}

#[test]
fn decompress_accepts_historical_streams() {
    for (input, compressed) in fixed_vectors() {
        let restored = decompress(&compressed, input.len()).unwrap();
        assert_eq!(restored, input, "stream {compressed:02x?}");
    }
}

#[test]
fn no_repetition_input_is_one_literal_opcode() {
    // Fourteen bytes with no repeated trigram: a single count-14 literal
    // run, input verbatim after the opcode.
    let input = hex_to_bytes("0168656c6c6f00776f726c640000");
    let (compressed, len) = compress(&input);
    assert_eq!(len, 14);
    assert_eq!(compressed[0], 0x0D);
    assert_eq!(&compressed[1..], &input);
}

#[test]
fn nested_compression_unwinds_exactly() {
    // Compress 100 times, retaining each length, then decompress in
    // reverse order: the stack must unwind to the original bytes.
    let corpus: Vec<Vec<u8>> = [
        "",
        "00",
        "ff",
        "01",
        "0000",
        "ffff",
        "0101",
        "000000",
        "ffffff",
        "010101",
        "00000000",
        "ffffffff",
        "01010101",
        "0168656c6c6f00776f726c640000",
    ]
    .iter()
    .map(|s| hex_to_bytes(s))
    .collect();

    for original in corpus {
        let mut data = original.clone();
        let mut lengths = Vec::new();
        for _ in 0..100 {
            let (compressed, len) = compress(&data);
            lengths.push(len);
            data = compressed;
        }
        while let Some(len) = lengths.pop() {
            data = decompress(&data, len).unwrap();
        }
        assert_eq!(data, original);
    }
}

#[test]
fn length_field_idempotent_on_compressed_data() {
    let input = b"abcabcabcabc".repeat(32);
    let (once, len_once) = compress(&input);
    assert_eq!(len_once, input.len());
    let (_, len_twice) = compress(&once);
    assert_eq!(len_twice, once.len());
}
