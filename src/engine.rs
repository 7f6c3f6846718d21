// Public codec API: ties the match finder to the block encoder/decoder.
//
// Two operations, fully buffered and synchronous:
//   - compress: total over all byte slices, returns the stream plus the
//     original length (the stream has no end marker)
//   - decompress: exact-length reconstruction or a corruption error
//
// All working state, the hash table included, is local to one call;
// concurrent calls on independent threads need no coordination.

use log::{debug, trace};
use thiserror::Error;

use crate::block::decoder::{self, DecodeError};
use crate::block::encoder;
use crate::hash::config::{DEFAULT_TABLE_SIZE, Level};
use crate::hash::matching::MatchFinder;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for compression.
#[derive(Debug, Clone)]
pub struct CompressOptions {
    /// Wire-format level: 1 or 2, or 0 to pick by input size (level 2 at
    /// 64 KiB and above). The level is not recorded in the stream; decode
    /// with the same choice.
    pub level: u32,
    /// Hash-table slot count. Must be a power of two; larger tables find
    /// more matches at the cost of memory.
    pub table_size: usize,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            level: 0,
            table_size: DEFAULT_TABLE_SIZE,
        }
    }
}

/// Configuration for decompression.
#[derive(Debug, Clone)]
pub struct DecompressOptions {
    /// Wire-format level the stream was produced with: 1 or 2, or 0 to
    /// resolve from `original_length` the same way automatic compression
    /// resolves from the input length.
    pub level: u32,
}

impl Default for DecompressOptions {
    fn default() -> Self {
        Self { level: 0 }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Configuration rejected before any work began.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Level was not 0 (automatic), 1, or 2.
    #[error("compression level must be 0 (automatic), 1, or 2, got {0}")]
    Level(u32),

    /// Hash-table size was not a power of two.
    #[error("hash-table size must be a power of two, got {0}")]
    TableSize(usize),
}

/// Either rejected configuration or a corrupt stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

fn resolve_level(level: u32, uncompressed_len: usize) -> Result<Level, ConfigError> {
    match level {
        0 => Ok(Level::for_len(uncompressed_len)),
        1 => Ok(Level::One),
        2 => Ok(Level::Two),
        other => Err(ConfigError::Level(other)),
    }
}

// ---------------------------------------------------------------------------
// Compress
// ---------------------------------------------------------------------------

/// Compress `input` with automatic level selection.
///
/// Total over all byte slices: empty input maps to an empty stream, and
/// literal runs are the universal fallback for anything the match finder
/// cannot improve on. The returned length always equals `input.len()`
/// and must accompany the stream to [`decompress`].
pub fn compress(input: &[u8]) -> (Vec<u8>, usize) {
    compress_impl(input, Level::for_len(input.len()), DEFAULT_TABLE_SIZE)
}

/// Compress with explicit options, validated before any work.
pub fn compress_with_options(
    input: &[u8],
    opts: &CompressOptions,
) -> Result<(Vec<u8>, usize), ConfigError> {
    if !opts.table_size.is_power_of_two() {
        return Err(ConfigError::TableSize(opts.table_size));
    }
    let level = resolve_level(opts.level, input.len())?;
    Ok(compress_impl(input, level, opts.table_size))
}

fn compress_impl(input: &[u8], level: Level, table_size: usize) -> (Vec<u8>, usize) {
    if input.is_empty() {
        return (Vec::new(), 0);
    }

    let mut finder = MatchFinder::new(level, table_size);
    let tokens = finder.find_tokens(input);

    // Worst case is all-literal: one opcode byte per 32 input bytes.
    // Sized as input + 5% with constant headroom for tiny inputs.
    let mut out = Vec::with_capacity(input.len() + input.len() / 20 + 66);
    encoder::emit_tokens(&mut out, input, &tokens, level);

    debug!(
        "compressed {} bytes to {} ({} tokens, level {:?})",
        input.len(),
        out.len(),
        tokens.len(),
        level
    );
    (out, input.len())
}

// ---------------------------------------------------------------------------
// Decompress
// ---------------------------------------------------------------------------

/// Decompress `input` into exactly `original_length` bytes, resolving
/// the level from `original_length` (matching what automatic compression
/// chose for the same data).
///
/// Fails with [`DecodeError`] on any corruption; never reads past the
/// end of `input` nor produces more than `original_length` bytes.
pub fn decompress(input: &[u8], original_length: usize) -> Result<Vec<u8>, DecodeError> {
    let level = Level::for_len(original_length);
    trace!(
        "decompressing {} bytes to {original_length} (level {level:?})",
        input.len()
    );
    decoder::decode(input, original_length, level)
}

/// Decompress with an explicit level choice.
pub fn decompress_with_options(
    input: &[u8],
    original_length: usize,
    opts: &DecompressOptions,
) -> Result<Vec<u8>, CodecError> {
    let level = resolve_level(opts.level, original_length)?;
    Ok(decoder::decode(input, original_length, level)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
