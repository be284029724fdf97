//! Order-preserving variable-length encoding for non-negative 64-bit
//! integers.
//!
//! Values are encoded in 1-9 bytes, chosen so that unsigned byte comparison
//! of two encodings reproduces numeric order: a larger value either gets a
//! larger leading byte, or (when the leading byte ties) a larger
//! big-endian payload.

use byteorder::{BigEndian, ByteOrder};

use crate::error::FormatError;
use crate::reader::Reader;
use crate::writer::Writer;

const TWO_BYTE_BASE: u64 = 241;
const THREE_BYTE_BASE: u64 = 2288;
const TWO_BYTE_MAX: u64 = 2287;
const THREE_BYTE_MAX: u64 = 67_823;

/// Encode `v` onto `w` using the prefix-byte scheme described in the module
/// docs.
pub fn encode(w: &mut Writer, v: u64) {
    if v <= 240 {
        w.put_byte(v as u8);
    } else if v <= TWO_BYTE_MAX {
        let v = v - 240;
        w.put_byte(241 + (v >> 8) as u8);
        w.put_byte((v & 0xFF) as u8);
    } else if v <= THREE_BYTE_MAX {
        let v = v - THREE_BYTE_BASE;
        w.put_byte(0xF9);
        let mut buf = [0u8; 2];
        BigEndian::write_u16(&mut buf, v as u16);
        w.put_bytes(&buf);
    } else {
        let (tag, nbytes) = length_for(v);
        w.put_byte(tag);
        let mut buf = [0u8; 8];
        BigEndian::write_u64(&mut buf, v);
        w.put_bytes(&buf[8 - nbytes..]);
    }
}

/// Pick the tag byte and payload width for a value requiring 4-9 total
/// bytes (i.e. `v > THREE_BYTE_MAX`).
fn length_for(v: u64) -> (u8, usize) {
    match v {
        v if v <= 0x00FF_FFFF => (0xFA, 3),
        v if v <= 0xFFFF_FFFF => (0xFB, 4),
        v if v <= 0x0000_00FF_FFFF_FFFF => (0xFC, 5),
        v if v <= 0x0000_FFFF_FFFF_FFFF => (0xFD, 6),
        v if v <= 0x00FF_FFFF_FFFF_FFFF => (0xFE, 7),
        _ => (0xFF, 8),
    }
}

/// Decode one varint from `r`, advancing the cursor past it.
pub fn decode(r: &mut Reader) -> Result<u64, FormatError> {
    let first = r.take_byte()?;
    match first {
        0..=240 => Ok(first as u64),
        241..=248 => {
            let low = r.take_byte()?;
            Ok(240 + (((first - 241) as u64) << 8) + low as u64)
        }
        0xF9 => {
            let bytes = r.take_raw(2)?;
            Ok(THREE_BYTE_BASE + BigEndian::read_u16(bytes) as u64)
        }
        0xFA..=0xFF => {
            let nbytes = (first - 0xFA) as usize + 3;
            let bytes = r.take_raw(nbytes)?;
            let mut buf = [0u8; 8];
            buf[8 - nbytes..].copy_from_slice(bytes);
            Ok(BigEndian::read_u64(&buf))
        }
    }
}

/// Number of bytes `encode(v)` would write, without writing anything.
pub fn encoded_len(v: u64) -> usize {
    if v <= 240 {
        1
    } else if v <= TWO_BYTE_MAX {
        2
    } else if v <= THREE_BYTE_MAX {
        3
    } else {
        length_for(v).1 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(v: u64) {
        let mut w = Writer::new();
        encode(&mut w, v);
        let buf = w.finalize();
        assert_eq!(buf.len(), encoded_len(v), "length mismatch for {v}");
        let mut r = Reader::new(&buf);
        let got = decode(&mut r).unwrap();
        assert_eq!(got, v);
        assert!(r.is_empty());
    }

    #[test]
    fn edges() {
        for v in [
            0,
            1,
            239,
            240,
            241,
            242,
            2287,
            2288,
            2289,
            67_823,
            67_824,
            (1 << 24) - 1,
            1 << 24,
            (1u64 << 32) - 1,
            1u64 << 32,
            (1u64 << 40) - 1,
            1u64 << 40,
            (1u64 << 48) - 1,
            1u64 << 48,
            (1u64 << 56) - 1,
            1u64 << 56,
            u64::MAX - 1,
            u64::MAX,
        ] {
            roundtrip(v);
        }
    }

    #[test]
    fn concrete_scenarios() {
        let mut w = Writer::new();
        encode(&mut w, 0);
        assert_eq!(w.finalize(), vec![0x00]);

        let mut w = Writer::new();
        encode(&mut w, 240);
        assert_eq!(w.finalize(), vec![0xF0]);

        let mut w = Writer::new();
        encode(&mut w, 241);
        assert_eq!(w.finalize(), vec![0xF1, 0x01]);

        let mut w = Writer::new();
        encode(&mut w, 2288);
        assert_eq!(w.finalize(), vec![0xF9, 0x00, 0x00]);
    }

    #[test]
    fn monotonic() {
        let mut prev: Option<Vec<u8>> = None;
        let sample: Vec<u64> = (0..2000)
            .chain((0..62).map(|s| 1u64 << s))
            .chain((0..62).map(|s| (1u64 << s).wrapping_add(1)))
            .collect();
        let mut sample = sample;
        sample.sort_unstable();
        sample.dedup();
        for v in sample {
            let mut w = Writer::new();
            encode(&mut w, v);
            let buf = w.finalize();
            if let Some(p) = &prev {
                assert!(p.as_slice() < buf.as_slice(), "{:?} should sort before {:?}", p, buf);
            }
            prev = Some(buf);
        }
    }

    #[test]
    fn truncated_varint_reports_expected() {
        let buf = [0xFF, 1, 2, 3];
        let mut r = Reader::new(&buf);
        let err = decode(&mut r).unwrap_err();
        assert_eq!(
            err,
            FormatError::Truncated {
                expected: 8,
                position: 1,
                remaining: 3,
            }
        );
    }
}
