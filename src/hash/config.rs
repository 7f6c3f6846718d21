// Format levels and the constants they fix.
//
// A level is a wire-format variant: it decides how far back a match may
// reach and how its distance is serialized. It is chosen per call and is
// NOT recorded in the stream, so the decode side must be configured with
// the level that produced a stream.

/// Minimum match length worth encoding.
pub const MIN_MATCH: usize = 3;

/// Longest literal run a single opcode can carry.
pub const MAX_LITERAL_RUN: usize = 32;

/// Longest match the two-byte short opcode can carry.
pub const MAX_SHORT_MATCH: usize = 8;

/// Shortest match the extended opcode encodes; continuation bytes count
/// up from here.
pub const EXTENDED_MATCH_BASE: usize = 9;

/// Maximum back-reference distance at level 1 (13-bit biased field).
pub const MAX_L1_DISTANCE: usize = 8192;

/// Longest distance level 2 can still encode in the short two-byte form.
/// The all-ones biased field (8191) is reserved as the far-form marker,
/// so level 2 loses one distance value to level 1 here.
pub const L2_NEAR_DISTANCE: usize = 8191;

/// Biased-distance value that marks the level-2 far form.
pub const L2_FAR_MARKER: usize = 8191;

/// Maximum back-reference distance at level 2: the far form carries
/// `distance - 8192` in two extra bytes.
pub const MAX_L2_DISTANCE: usize = L2_NEAR_DISTANCE + 1 + u16::MAX as usize;

/// Minimum length for a level-2 far match. A far match costs two extra
/// distance bytes, so a trigram at long range is a net loss.
pub const FAR_MATCH_MIN: usize = 5;

/// Inputs at or above this size select level 2 under automatic level
/// resolution.
pub const LEVEL_TWO_THRESHOLD: usize = 65536;

/// Default hash-table slot count (8 Ki entries).
pub const DEFAULT_TABLE_SIZE: usize = 1 << 13;

/// Wire-format variant. Fixes the maximum representable match distance
/// and the width of the distance encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Distances up to 8192, one distance byte after the opcode.
    One,
    /// Distances up to 73727 via a two-byte far extension.
    Two,
}

impl Level {
    /// The level automatic resolution picks for an uncompressed size.
    ///
    /// Compression applies this to the input length, decompression to
    /// `original_length`; the two are equal by construction, so default
    /// configurations agree on the level without a stream header.
    pub fn for_len(len: usize) -> Self {
        if len < LEVEL_TWO_THRESHOLD {
            Level::One
        } else {
            Level::Two
        }
    }

    /// Longest back-reference distance this level can represent.
    pub fn max_distance(self) -> usize {
        match self {
            Level::One => MAX_L1_DISTANCE,
            Level::Two => MAX_L2_DISTANCE,
        }
    }
}
