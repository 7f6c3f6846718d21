//! SwiftLZ: a speed-oriented LZ77 block compressor/decompressor in Rust.
//!
//! The crate provides:
//! - A greedy hash-based match finder (`hash`)
//! - The opcode-level block encoder/decoder (`block`)
//! - The two-operation public API (`engine`)
//!
//! Compression is lossless and never fails on valid input; the compressed
//! stream carries no end marker, so the original length returned by
//! [`compress`] must be handed back to [`decompress`].
//!
//! # Quick Start
//!
//! ```
//! let data = b"hello world, hello world, hello world";
//!
//! let (compressed, original_len) = swiftlz::compress(data);
//! let restored = swiftlz::decompress(&compressed, original_len).unwrap();
//! assert_eq!(restored, data);
//! ```

pub mod block;
pub mod engine;
pub mod hash;

pub use engine::{
    CodecError, CompressOptions, ConfigError, DecompressOptions, compress, compress_with_options,
    decompress, decompress_with_options,
};

pub use block::decoder::DecodeError;
