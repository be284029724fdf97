//! Order-preserving tuple key codec for ordered key-value stores.
//!
//! Encodes heterogeneous tuples of primitive values (null, bool, integer,
//! blob, text, UUID, timestamp) into a byte sequence whose unsigned
//! lexicographic byte order reproduces the natural ordering of the source
//! tuple — suitable as the key of an ordered key-value store.

mod element;
mod error;
mod integer;
mod marker;
mod offset;
mod reader;
mod strcode;
mod timestamp;
mod tuple;
mod varint;
mod writer;

pub use element::Value;
pub use error::{Error, FormatError, Result};
pub use integer::Integer;
pub use marker::{Kind, FORMAT_VERSION};
pub use offset::{decode_offsets, encode_offsets};
pub use tuple::{pack, pack_int, tuplize, unpack, unpack_many, Key, Packable};
