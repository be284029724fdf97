//! Library error types.
use std::fmt;

/// A tupdb-codec `Result`, normally returning a tupdb-codec [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A malformed-input failure raised while decoding an encoded key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The reader ran out of bytes before finishing an element.
    Truncated {
        /// How many more bytes the decoder needed.
        expected: usize,
        /// The cursor position at the point of failure.
        position: usize,
        /// How many bytes were actually left.
        remaining: usize,
    },
    /// A kind-tag byte didn't match any known element kind.
    BadTag(u8),
    /// A TEXT element's payload wasn't valid UTF-8.
    BadUtf8,
    /// A UUID element's payload wasn't exactly 16 bytes.
    BadUuidLen(usize),
    /// A varint's leading byte implied a length not covered by the format.
    BadVarint(u8),
    /// A decoded composite timestamp fell outside the range the calendar
    /// adapter can represent.
    TimeRange,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FormatError::Truncated {
                expected,
                position,
                remaining,
            } => write!(
                f,
                "premature end of input: expected {} more byte(s) at position {}, but only {} remain",
                expected, position, remaining
            ),
            FormatError::BadTag(b) => write!(f, "unrecognized element kind tag 0x{:02x}", b),
            FormatError::BadUtf8 => write!(f, "TEXT payload was not valid UTF-8"),
            FormatError::BadUuidLen(n) => write!(f, "UUID payload was {} bytes, expected 16", n),
            FormatError::BadVarint(b) => write!(
                f,
                "varint leading byte 0x{:02x} does not encode a valid length",
                b
            ),
            FormatError::TimeRange => {
                write!(f, "decoded timestamp is out of the representable calendar range")
            }
        }
    }
}

/// A tupdb-codec error. Encompasses any issue that can happen while encoding
/// a tuple or decoding one back out of its byte representation.
///
/// There is no "unsupported value type" variant: `Value` is a closed sum
/// type and the encoder's dispatch over it is exhaustive, so that failure
/// mode cannot occur here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input bytes were malformed: a truncated varint or string, a bad
    /// kind tag, or invalid UTF-8/UUID payload.
    Format(FormatError),
    /// `unpack`/`unpack_many` was called with `bytes` shorter than `prefix`.
    Value(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Format(err) => write!(f, "format error: {}", err),
            Error::Value(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Error::Format(e)
    }
}
