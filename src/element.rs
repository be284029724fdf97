//! The value codec: dispatches a single [`Value`] to its kind-tagged wire
//! representation, and decodes one tagged element back out of a [`Reader`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, FormatError};
use crate::integer::Integer;
use crate::marker::Kind;
use crate::reader::Reader;
use crate::writer::Writer;
use crate::{strcode, timestamp, varint};

/// One value a caller wants encoded into a tuple element.
///
/// `Value` owns its payload, so a decoded tuple can outlive the byte slice
/// it was read from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(Integer),
    Blob(#[serde(with = "serde_bytes")] Vec<u8>),
    Text(String),
    Uuid(Uuid),
    Time(time::OffsetDateTime),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(Integer::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Int(Integer::from(v))
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<time::OffsetDateTime> for Value {
    fn from(v: time::OffsetDateTime) -> Self {
        Value::Time(v)
    }
}

/// Write `value`'s kind tag and payload onto `w`.
pub fn encode(w: &mut Writer, value: &Value) -> Result<(), Error> {
    match value {
        Value::Null => w.put_byte(Kind::NULL),
        Value::Bool(b) => {
            w.put_byte(Kind::BOOL);
            varint::encode(w, if *b { 1 } else { 0 });
        }
        Value::Int(i) => {
            let (negative, magnitude) = i.magnitude();
            w.put_byte(if negative { Kind::NEG_INTEGER } else { Kind::INTEGER });
            varint::encode(w, magnitude);
        }
        Value::Blob(bytes) => {
            w.put_byte(Kind::BLOB);
            strcode::encode(w, bytes);
        }
        Value::Text(s) => {
            w.put_byte(Kind::TEXT);
            strcode::encode(w, s.as_bytes());
        }
        Value::Uuid(u) => {
            w.put_byte(Kind::UUID);
            strcode::encode(w, u.as_bytes());
        }
        Value::Time(dt) => {
            let composite = timestamp::compose(*dt);
            if composite < 0 {
                w.put_byte(Kind::NEG_TIME);
                varint::encode(w, composite.unsigned_abs());
            } else {
                w.put_byte(Kind::TIME);
                varint::encode(w, composite as u64);
            }
        }
    }
    Ok(())
}

/// Decode one tagged element from `r`, advancing the cursor past it.
///
/// Fails with [`Error::Format`] on a truncated payload or an unrecognized
/// tag byte, including `Kind::SEP` — callers that need to stop at a tuple
/// boundary should `peek()` for the separator before calling this.
pub fn decode(r: &mut Reader) -> Result<Value, Error> {
    let tag = r.take_byte().map_err(Error::Format)?;
    let kind = Kind::from_u8(tag).ok_or(Error::Format(FormatError::BadTag(tag)))?;
    Ok(match kind {
        Kind::Null => Value::Null,
        Kind::Bool => {
            let v = varint::decode(r).map_err(Error::Format)?;
            Value::Bool(v != 0)
        }
        Kind::Integer => {
            let magnitude = varint::decode(r).map_err(Error::Format)?;
            Value::Int(Integer::from_magnitude(false, magnitude))
        }
        Kind::NegInteger => {
            let magnitude = varint::decode(r).map_err(Error::Format)?;
            Value::Int(Integer::from_magnitude(true, magnitude))
        }
        Kind::Blob => Value::Blob(strcode::decode(r).map_err(Error::Format)?),
        Kind::Text => {
            let bytes = strcode::decode(r).map_err(Error::Format)?;
            let s = String::from_utf8(bytes).map_err(|_| Error::Format(FormatError::BadUtf8))?;
            Value::Text(s)
        }
        Kind::Uuid => {
            let bytes = strcode::decode(r).map_err(Error::Format)?;
            let arr: [u8; 16] = bytes
                .as_slice()
                .try_into()
                .map_err(|_| Error::Format(FormatError::BadUuidLen(bytes.len())))?;
            Value::Uuid(Uuid::from_bytes(arr))
        }
        Kind::Time | Kind::NegTime => {
            let magnitude = varint::decode(r).map_err(Error::Format)?;
            let composite = if kind == Kind::NegTime {
                -(magnitude as i128) as i64
            } else {
                magnitude as i64
            };
            let dt = timestamp::decompose(composite).map_err(Error::Format)?;
            Value::Time(dt)
        }
        Kind::Sep => return Err(Error::Format(FormatError::BadTag(tag))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn roundtrip(v: Value) {
        let mut w = Writer::new();
        encode(&mut w, &v).unwrap();
        let buf = w.finalize();
        let mut r = Reader::new(&buf);
        let got = decode(&mut r).unwrap();
        assert_eq!(got, v);
        assert!(r.is_empty());
    }

    #[test]
    fn roundtrips_every_kind() {
        roundtrip(Value::Null);
        roundtrip(Value::Bool(true));
        roundtrip(Value::Bool(false));
        roundtrip(Value::Int(Integer::from(42i64)));
        roundtrip(Value::Int(Integer::from(-42i64)));
        roundtrip(Value::Int(Integer::from(u64::MAX)));
        roundtrip(Value::Blob(vec![0, 1, 2, 255]));
        roundtrip(Value::Text(String::new()));
        roundtrip(Value::Text("hello".to_owned()));
        roundtrip(Value::Uuid(Uuid::from_bytes([7u8; 16])));
        roundtrip(Value::Uuid(Uuid::new_v4()));
        roundtrip(Value::Time(datetime!(2024-03-05 12:30:00 UTC)));
        roundtrip(Value::Time(datetime!(1960-01-01 00:00:00 UTC)));
    }

    #[test]
    fn concrete_scenarios() {
        let mut w = Writer::new();
        encode(&mut w, &Value::Null).unwrap();
        assert_eq!(w.finalize(), vec![0x0F]);

        let mut w = Writer::new();
        encode(&mut w, &Value::Bool(true)).unwrap();
        assert_eq!(w.finalize(), vec![0x1E, 0x01]);

        let mut w = Writer::new();
        encode(&mut w, &Value::Text(String::new())).unwrap();
        assert_eq!(w.finalize(), vec![0x32, 0x00]);
    }

    #[test]
    fn bad_tag_reports_offending_byte() {
        let buf = [0x01u8];
        let mut r = Reader::new(&buf);
        let err = decode(&mut r).unwrap_err();
        assert_eq!(err, Error::Format(FormatError::BadTag(0x01)));
    }

    #[test]
    fn sep_is_not_a_decodable_element() {
        let buf = [Kind::SEP];
        let mut r = Reader::new(&buf);
        assert!(decode(&mut r).is_err());
    }

    #[test]
    fn negative_integers_sort_by_encoded_bytes_in_reverse_numeric_order() {
        // Documented quirk (spec.md S4.3): within NEG_INTEGER, the varint of
        // the absolute value means more-negative numbers encode *larger*.
        let mut neg1 = Writer::new();
        encode(&mut neg1, &Value::Int(Integer::from(-1i64))).unwrap();
        let neg1 = neg1.finalize();

        let mut neg2 = Writer::new();
        encode(&mut neg2, &Value::Int(Integer::from(-2i64))).unwrap();
        let neg2 = neg2.finalize();

        assert!(neg2 < neg1, "-2 should sort before -1 in encoded bytes");
    }
}
