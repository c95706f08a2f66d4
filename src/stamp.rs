use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const STAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year][month][day]_[hour][minute][second]");

/// Fixed-width `YYYYmmdd_HHMMSS` stamp embedded in output filenames.
///
/// Every field is zero-padded, so the textual form happens to sort the same
/// way the parsed form does — but "newest file" selection must never depend
/// on that: callers compare parsed stamps, for which `Ord` is derived on
/// the fields in most-significant-first order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchiveStamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ArchiveStamp {
    /// Stamp for the current moment (UTC).
    pub fn now() -> Self {
        Self::from_datetime(OffsetDateTime::now_utc())
    }

    fn from_datetime(dt: OffsetDateTime) -> Self {
        Self {
            year: dt.year().clamp(0, u16::MAX as i32) as u16,
            month: dt.month() as u8,
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

impl fmt::Display for ArchiveStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}_{:02}{:02}{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for ArchiveStamp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let dt = PrimitiveDateTime::parse(s, STAMP_FORMAT)
            .with_context(|| format!("invalid archive stamp `{s}` (expected YYYYmmdd_HHMMSS)"))?;
        Ok(Self::from_datetime(dt.assume_utc()))
    }
}
