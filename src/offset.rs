//! Delta-encoded offset table, used by the surrounding storage layer to
//! locate records packed one after another in a block.
//!
//! On the wire: a varint `count`, then `count` varints each a delta from
//! the previous absolute position (the first delta is measured from 0).
//! Decoding reconstructs `count + 1` absolute positions:
//! `[0, d0, d0+d1, …]`.

use crate::error::FormatError;
use crate::reader::Reader;
use crate::varint::{self, encoded_len};
use crate::writer::Writer;

/// Encode `positions` (a non-decreasing list of absolute offsets starting
/// at 0) as a delta-encoded table.
///
/// `positions[0]` must be `0`; every subsequent entry must be `>=` the one
/// before it, since deltas are encoded as non-negative varints.
pub fn encode_offsets(positions: &[u64]) -> Vec<u8> {
    if positions.is_empty() {
        let mut w = Writer::new();
        varint::encode(&mut w, 0);
        return w.finalize();
    }

    let count = (positions.len() - 1) as u64;
    let mut w = Writer::with_capacity(encoded_len(count) + positions.len() * 2);
    varint::encode(&mut w, count);
    let mut prev = positions[0];
    for &pos in &positions[1..] {
        varint::encode(&mut w, pos - prev);
        prev = pos;
    }
    w.finalize()
}

/// Decode a delta-encoded offset table, returning the `count + 1` absolute
/// positions and the number of bytes the table itself occupied (so the
/// caller can locate the payload region that follows it).
pub fn decode_offsets(bytes: &[u8]) -> Result<(Vec<u64>, usize), FormatError> {
    let mut r = Reader::new(bytes);
    let count = varint::decode(&mut r)?;

    let mut positions = Vec::with_capacity(count as usize + 1);
    positions.push(0u64);
    let mut prev = 0u64;
    for _ in 0..count {
        let delta = varint::decode(&mut r)?;
        prev += delta;
        positions.push(prev);
    }
    Ok((positions, r.position()))
}
