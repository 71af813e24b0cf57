use crate::{Error, Result};
use chrono::{FixedOffset, Local, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use time::UtcOffset;

/// Wall clock used to read receipt timestamps.
///
/// The offset is resolved per timestamp, so `Local` and `Zone` follow daylight saving rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Calendar {
    Local,
    Zone(Tz),
    Fixed(FixedOffset),
}

impl Calendar {
    pub const UTC: Calendar = Calendar::Zone(Tz::UTC);

    pub fn fixed(offset: UtcOffset) -> Result<Calendar> {
        FixedOffset::east_opt(offset.whole_seconds())
            .map(Calendar::Fixed)
            .ok_or(Error::Conf(format!(
                "UTC offset of {} seconds is out of range",
                offset.whole_seconds()
            )))
    }

    /// Local date and time of a unix timestamp.
    pub fn local_time(&self, timestamp: i64) -> Option<NaiveDateTime> {
        match self {
            Calendar::Local => local_time(&Local, timestamp),
            Calendar::Zone(zone) => local_time(zone, timestamp),
            Calendar::Fixed(offset) => local_time(offset, timestamp),
        }
    }
}

fn local_time<Z: TimeZone>(zone: &Z, timestamp: i64) -> Option<NaiveDateTime> {
    zone.timestamp_opt(timestamp, 0)
        .single()
        .map(|it| it.naive_local())
}
