//! Wall-clock breakdown of an absolute instant.

use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeZone, Timelike, Utc};

/// Calendar fields of an instant as seen in some timezone.
///
/// The default value has every field zeroed, which is what a clock layer
/// shows before it is first given a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WallTime {
    pub year: i32,
    /// 1-based month, or 0 when unset.
    pub month: u32,
    /// 1-based day of month, or 0 when unset.
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Days since Sunday.
    pub weekday: u32,
    /// Days since January 1st.
    pub yday: u32,
    /// Seconds east of UTC.
    pub utc_offset: i32,
}

impl WallTime {
    /// Break down `dt` into wall-clock fields.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            weekday: dt.weekday().num_days_from_sunday(),
            yday: dt.ordinal0(),
            utc_offset: dt.offset().fix().local_minus_utc(),
        }
    }

    /// Calendar date of the snapshot, or `None` while the fields are unset.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Source of the local timezone rules used to snapshot wall-clock time.
pub trait LocalZone {
    fn wall_time(&self, instant: DateTime<Utc>) -> WallTime;
}

impl<Tz: TimeZone> LocalZone for Tz {
    fn wall_time(&self, instant: DateTime<Utc>) -> WallTime {
        WallTime::from_datetime(&instant.with_timezone(self))
    }
}
