// Opcode-stream decoding.
//
// Single forward pass over untrusted input. Every read is bounds-checked
// against the compressed buffer and every write against the declared
// output length; the stream carries no end marker, so decoding stops
// exactly when `original_length` bytes have been produced. Overlapping
// back-references (distance < length) are the normal way runs are
// encoded and must be replayed byte by byte in increasing address order.

use thiserror::Error;

use crate::hash::config::{EXTENDED_MATCH_BASE, L2_FAR_MARKER, Level};

// ---------------------------------------------------------------------------
// Decoder error
// ---------------------------------------------------------------------------

/// Corruption detected while decoding. No partial output is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The stream ended before `original_length` bytes were produced.
    #[error("compressed stream exhausted before the declared length")]
    Truncated,

    /// The declared length was reached with stream bytes left over.
    #[error("{0} compressed byte(s) left over after the declared length")]
    TrailingBytes(usize),

    /// A back-reference pointed before the start of the output.
    #[error("back-reference distance {distance} exceeds the {produced} byte(s) produced")]
    BadDistance { distance: usize, produced: usize },

    /// An instruction would have written past the declared length.
    #[error("instruction overruns the declared length {limit} (needs {need})")]
    OutputOverrun { need: usize, limit: usize },
}

// ---------------------------------------------------------------------------
// Input cursor
// ---------------------------------------------------------------------------

/// Forward-only cursor over the compressed buffer; refuses to run off
/// the end.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    fn u8(&mut self) -> Result<u8, DecodeError> {
        let byte = *self.buf.get(self.pos).ok_or(DecodeError::Truncated)?;
        self.pos += 1;
        Ok(byte)
    }

    #[inline]
    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let bytes = self
            .buf
            .get(self.pos..self.pos + n)
            .ok_or(DecodeError::Truncated)?;
        self.pos += n;
        Ok(bytes)
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode `input` into exactly `original_length` bytes.
///
/// `level` must be the level the stream was produced with; it is not
/// recorded in the stream.
pub fn decode(input: &[u8], original_length: usize, level: Level) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(original_length);
    let mut cursor = Cursor::new(input);

    while out.len() < original_length {
        let ctrl = cursor.u8()?;
        match ctrl >> 5 {
            0 => literal_run(&mut cursor, &mut out, original_length, ctrl)?,
            kind => back_reference(&mut cursor, &mut out, original_length, level, ctrl, kind)?,
        }
    }

    match cursor.remaining() {
        0 => Ok(out),
        left => Err(DecodeError::TrailingBytes(left)),
    }
}

/// Copy a literal run straight from the stream.
fn literal_run(
    cursor: &mut Cursor<'_>,
    out: &mut Vec<u8>,
    original_length: usize,
    ctrl: u8,
) -> Result<(), DecodeError> {
    let count = (ctrl & 0x1F) as usize + 1;
    if out.len() + count > original_length {
        return Err(DecodeError::OutputOverrun {
            need: out.len() + count,
            limit: original_length,
        });
    }
    out.extend_from_slice(cursor.take(count)?);
    Ok(())
}

/// Replay a back-reference into the output.
fn back_reference(
    cursor: &mut Cursor<'_>,
    out: &mut Vec<u8>,
    original_length: usize,
    level: Level,
    ctrl: u8,
    kind: u8,
) -> Result<(), DecodeError> {
    let len = if kind == 7 {
        let mut len = EXTENDED_MATCH_BASE;
        loop {
            let code = cursor.u8()?;
            len += code as usize;
            if code < 0xFF {
                break len;
            }
        }
    } else {
        kind as usize + 2
    };

    let mut biased = ((ctrl & 0x1F) as usize) << 8;
    biased |= cursor.u8()? as usize;
    if level == Level::Two && biased == L2_FAR_MARKER {
        let hi = cursor.u8()? as usize;
        let lo = cursor.u8()? as usize;
        biased += (hi << 8) | lo;
    }
    let distance = biased + 1;

    if distance > out.len() {
        return Err(DecodeError::BadDistance {
            distance,
            produced: out.len(),
        });
    }
    if out.len() + len > original_length {
        return Err(DecodeError::OutputOverrun {
            need: out.len() + len,
            limit: original_length,
        });
    }

    let start = out.len() - distance;
    if distance >= len {
        out.extend_from_within(start..start + len);
    } else {
        // Source and destination overlap: the reference reads bytes this
        // same instruction produces, so copy strictly forward.
        for i in 0..len {
            let byte = out[start + i];
            out.push(byte);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
