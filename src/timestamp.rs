//! Composite timestamp coding.
//!
//! A date-time value is folded into a single signed scalar so that it can
//! ride through the same varint codec as any other integer element, while
//! still sorting correctly against other timestamps encoded the same way.
//!
//! The composite scalar is built in three steps:
//! 1. The calendar fields (year/month/day/hour/min/sec), taken *as if* they
//!    were UTC regardless of the value's actual offset, are turned into a
//!    seconds-since-epoch count.
//! 2. That count is rescaled to milliseconds and the microsecond remainder
//!    is folded in at millisecond precision (sub-millisecond is truncated).
//! 3. The millisecond count is shifted left by 7 bits and OR'd with a
//!    7-bit offset code: `64 + utc_offset_seconds / 900`, clamped to
//!    `[0, 127]`. One unit is 15 minutes; 64 means UTC.
//!
//! Because step 3 only ever sets bits below where step 2 already placed
//! zeros, the composite scalar can equivalently (and more simply) be
//! computed and inverted with plain signed arithmetic: `composite =
//! millis * 128 + offset_code`, inverted with `div_euclid`/`rem_euclid` so
//! it works the same whether millis is negative (pre-1970) or not.

use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

use crate::error::FormatError;

const OFFSET_UNIT_SECS: i64 = 900; // 15 minutes
const OFFSET_ZERO: i64 = 64;
const OFFSET_MAX: i64 = 127;

/// Fold an [`OffsetDateTime`] into the signed composite scalar described in
/// the module docs.
pub fn compose(dt: OffsetDateTime) -> i64 {
    let as_if_utc = PrimitiveDateTime::new(dt.date(), dt.time()).assume_utc();
    let secs = as_if_utc.unix_timestamp();
    let millis = dt.microsecond() as i64 / 1000;
    let total_millis = secs * 1000 + millis;

    let offset_secs = dt.offset().whole_seconds() as i64;
    let offset_code = (OFFSET_ZERO + offset_secs / OFFSET_UNIT_SECS).clamp(0, OFFSET_MAX);

    total_millis * 128 + offset_code
}

/// Invert [`compose`], reconstructing the calendar fields and a
/// fixed-offset [`OffsetDateTime`].
///
/// The offset attached here comes entirely from the low 7 bits of the
/// composite value; it is not the offset of the caller's local clock.
pub fn decompose(composite: i64) -> Result<OffsetDateTime, FormatError> {
    let offset_code = composite.rem_euclid(128);
    let total_millis = composite.div_euclid(128);

    let secs = total_millis.div_euclid(1000);
    let millis = total_millis.rem_euclid(1000) as u32;

    let naive =
        OffsetDateTime::from_unix_timestamp(secs).map_err(|_| FormatError::TimeRange)?;
    let naive = naive
        .replace_microsecond(millis * 1000)
        .map_err(|_| FormatError::TimeRange)?;

    let offset_secs = ((offset_code - OFFSET_ZERO) * OFFSET_UNIT_SECS) as i32;
    let offset =
        UtcOffset::from_whole_seconds(offset_secs).map_err(|_| FormatError::TimeRange)?;

    let date: Date = naive.date();
    let time: Time = naive.time();
    Ok(PrimitiveDateTime::new(date, time).assume_offset(offset))
}
