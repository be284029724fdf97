//! Tuple and tuple-list framing: the layer above the value codec that turns
//! a caller-supplied scalar, tuple, or list-of-tuples into one encoded key,
//! optionally scoped under an opaque prefix.

use crate::element::{self, Value};
use crate::error::Error;
use crate::marker::Kind;
use crate::reader::Reader;
use crate::writer::Writer;

/// One packed tuple: an ordered sequence of values with no separator
/// between elements.
pub type Key = Vec<Value>;

/// What a caller can hand to [`pack`]: a bare scalar, an explicit tuple, or
/// a list of tuples sharing a prefix.
pub enum Packable {
    Scalar(Value),
    Tuple(Key),
    List(Vec<Key>),
}

impl From<Value> for Packable {
    fn from(v: Value) -> Self {
        Packable::Scalar(v)
    }
}

impl From<Key> for Packable {
    fn from(t: Key) -> Self {
        Packable::Tuple(t)
    }
}

impl From<Vec<Key>> for Packable {
    fn from(list: Vec<Key>) -> Self {
        Packable::List(list)
    }
}

/// `x` if it is already a tuple, else a single-element tuple wrapping `x`.
///
/// Mirrors the external interface's `tuplize`; lists are already
/// tuples-of-tuples and are not valid input here, since there is no single
/// `Key` to return. [`pack`] handles the list case directly instead of
/// routing it through `tuplize`.
pub fn tuplize(x: Packable) -> Result<Key, Error> {
    match x {
        Packable::Tuple(t) => Ok(t),
        Packable::Scalar(v) => Ok(vec![v]),
        Packable::List(_) => Err(Error::Value(
            "tuplize expects a scalar or a single tuple, not a list".to_owned(),
        )),
    }
}

fn encode_key(w: &mut Writer, key: &[Value]) -> Result<(), Error> {
    for v in key {
        element::encode(w, v)?;
    }
    Ok(())
}

/// Write `prefix` verbatim, then encode `x` as a scalar (treated as a
/// 1-tuple), an explicit tuple, or a SEP-separated list of tuples.
pub fn pack(prefix: &[u8], x: impl Into<Packable>) -> Result<Vec<u8>, Error> {
    let mut w = Writer::with_capacity(prefix.len() + 16);
    w.put_bytes(prefix);
    match x.into() {
        Packable::Scalar(v) => encode_key(&mut w, &[v])?,
        Packable::Tuple(t) => encode_key(&mut w, &t)?,
        Packable::List(tuples) => {
            for (i, t) in tuples.iter().enumerate() {
                if i > 0 {
                    w.put_byte(Kind::SEP);
                }
                encode_key(&mut w, t)?;
            }
        }
    }
    Ok(w.finalize())
}

/// Convenience: write `prefix` then a bare varint, with no kind byte.
pub fn pack_int(prefix: &[u8], v: u64) -> Vec<u8> {
    let mut w = Writer::with_capacity(prefix.len() + 9);
    w.put_bytes(prefix);
    crate::varint::encode(&mut w, v);
    w.finalize()
}

/// Strip `prefix` from `bytes`, returning the remainder, or `None` if
/// `bytes` does not begin with `prefix`.
fn strip_prefix<'a>(prefix: &[u8], bytes: &'a [u8]) -> Option<&'a [u8]> {
    bytes.strip_prefix(prefix)
}

/// Decode one tuple, consuming elements until end of input or a SEP byte
/// (the SEP itself is consumed but not included in the tuple).
fn decode_one(r: &mut Reader) -> Result<Key, Error> {
    let mut key = Vec::new();
    loop {
        match r.peek() {
            None => break,
            Some(Kind::SEP) => {
                r.take_byte().map_err(Error::Format)?;
                break;
            }
            Some(_) => key.push(element::decode(r)?),
        }
    }
    Ok(key)
}

/// Gate on `prefix`, then decode one tuple: consumes elements until end of
/// input or a SEP. Returns `None` if `bytes` does not begin with `prefix`.
pub fn unpack(prefix: &[u8], bytes: &[u8]) -> Result<Option<Key>, Error> {
    let Some(rest) = strip_prefix(prefix, bytes) else {
        return Ok(None);
    };
    let mut r = Reader::new(rest);
    Ok(Some(decode_one(&mut r)?))
}

/// Gate on `prefix`, then decode tuples until end of input. Each tuple
/// boundary is either a SEP byte or end of input. Returns `None` if `bytes`
/// does not begin with `prefix`.
pub fn unpack_many(prefix: &[u8], bytes: &[u8]) -> Result<Option<Vec<Key>>, Error> {
    let Some(rest) = strip_prefix(prefix, bytes) else {
        return Ok(None);
    };
    let mut r = Reader::new(rest);
    let mut tuples = Vec::new();
    while !r.is_empty() {
        tuples.push(decode_one(&mut r)?);
    }
    Ok(Some(tuples))
}
