//! Frozen kind-tag byte assignment for encoded elements.
//!
//! These values are part of the on-disk format: changing any of them
//! invalidates every key ever written with this codec. The assignment here
//! matches [`FORMAT_VERSION`] 1 and must not change without bumping it.

/// The wire format version these tag assignments belong to.
pub const FORMAT_VERSION: u8 = 1;

/// Single-byte discriminator identifying an element's kind on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Null,
    NegInteger,
    Integer,
    Bool,
    Blob,
    Text,
    NegTime,
    Time,
    Uuid,
    Sep,
}

impl Kind {
    pub const NULL: u8 = 0x0F;
    pub const NEG_INTEGER: u8 = 0x14;
    pub const INTEGER: u8 = 0x15;
    pub const BOOL: u8 = 0x1E;
    pub const BLOB: u8 = 0x28;
    pub const TEXT: u8 = 0x32;
    pub const NEG_TIME: u8 = 0x3C;
    pub const TIME: u8 = 0x3D;
    pub const UUID: u8 = 0x5A;
    pub const SEP: u8 = 0x66;

    /// Convert the tag byte into a `Kind`, failing on anything the format
    /// doesn't recognize.
    pub fn from_u8(b: u8) -> Option<Kind> {
        match b {
            Kind::NULL => Some(Kind::Null),
            Kind::NEG_INTEGER => Some(Kind::NegInteger),
            Kind::INTEGER => Some(Kind::Integer),
            Kind::BOOL => Some(Kind::Bool),
            Kind::BLOB => Some(Kind::Blob),
            Kind::TEXT => Some(Kind::Text),
            Kind::NEG_TIME => Some(Kind::NegTime),
            Kind::TIME => Some(Kind::Time),
            Kind::UUID => Some(Kind::Uuid),
            Kind::SEP => Some(Kind::Sep),
            _ => None,
        }
    }

    /// Convert a `Kind` back into its tag byte.
    pub fn into_u8(self) -> u8 {
        match self {
            Kind::Null => Kind::NULL,
            Kind::NegInteger => Kind::NEG_INTEGER,
            Kind::Integer => Kind::INTEGER,
            Kind::Bool => Kind::BOOL,
            Kind::Blob => Kind::BLOB,
            Kind::Text => Kind::TEXT,
            Kind::NegTime => Kind::NEG_TIME,
            Kind::Time => Kind::TIME,
            Kind::Uuid => Kind::UUID,
            Kind::Sep => Kind::SEP,
        }
    }
}

impl From<Kind> for u8 {
    fn from(k: Kind) -> u8 {
        k.into_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_bytes_sort_in_intended_kind_order() {
        let order = [
            Kind::Null,
            Kind::NegInteger,
            Kind::Integer,
            Kind::Bool,
            Kind::Blob,
            Kind::Text,
            Kind::NegTime,
            Kind::Time,
            Kind::Uuid,
            Kind::Sep,
        ];
        let mut bytes: Vec<u8> = order.iter().map(|k| k.into_u8()).collect();
        let sorted = {
            let mut b = bytes.clone();
            b.sort_unstable();
            b
        };
        assert_eq!(bytes, sorted, "tag byte order must match the intended kind order");
        bytes.dedup();
        assert_eq!(bytes.len(), order.len(), "tag bytes must be unique");
    }

    #[test]
    fn round_trips_through_u8() {
        for b in [
            Kind::NULL,
            Kind::NEG_INTEGER,
            Kind::INTEGER,
            Kind::BOOL,
            Kind::BLOB,
            Kind::TEXT,
            Kind::NEG_TIME,
            Kind::TIME,
            Kind::UUID,
            Kind::SEP,
        ] {
            let k = Kind::from_u8(b).unwrap();
            assert_eq!(k.into_u8(), b);
        }
        assert!(Kind::from_u8(0x01).is_none());
    }
}
