// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;

use chrono::{DateTime, Datelike, LocalResult, TimeZone, Timelike, Utc};

use self::builder::ZipDateTimeBuilder;

/// The earliest year representable by the seven-bit year field.
pub const MIN_YEAR: i32 = 1980;
/// The latest year representable by the seven-bit year field.
pub const MAX_YEAR: i32 = MIN_YEAR + 127;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#446
// https://learn.microsoft.com/en-us/windows/win32/api/oleauto/nf-oleauto-dosdatetimetovarianttime

/// A date and time stored as per the MS-DOS representation used by ZIP files.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl ZipDateTime {
    /// Returns the packed date field: `day | month << 5 | (year - 1980) << 9`.
    pub fn packed_date(&self) -> u16 {
        self.date
    }

    /// Returns the packed time field: `second / 2 | minute << 5 | hour << 11`.
    pub fn packed_time(&self) -> u16 {
        self.time
    }

    /// Returns the year of this date & time.
    pub fn year(&self) -> i32 {
        (((self.date & 0xFE00) >> 9) + 1980).into()
    }

    /// Returns the month of this date & time.
    pub fn month(&self) -> u32 {
        ((self.date & 0x1E0) >> 5).into()
    }

    /// Returns the day of this date & time.
    pub fn day(&self) -> u32 {
        (self.date & 0x1F).into()
    }

    /// Returns the hour of this date & time.
    pub fn hour(&self) -> u32 {
        ((self.time & 0xF800) >> 11).into()
    }

    /// Returns the minute of this date & time.
    pub fn minute(&self) -> u32 {
        ((self.time & 0x7E0) >> 5).into()
    }

    /// Returns the second of this date & time.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(&self) -> u32 {
        ((self.time & 0x1F) << 1).into()
    }

    /// Constructs chrono's [`DateTime`] representation of this date & time.
    pub fn as_chrono(&self) -> LocalResult<DateTime<Utc>> {
        self.into()
    }

    /// Constructs this date & time from chrono's [`DateTime`] representation.
    ///
    /// Years outside of 1980 to 2107 do not fit the packed fields and produce a meaningless value. Use
    /// [`ZipDateTime::clamped`] when the input is not known to be in range.
    pub fn from_chrono(dt: &DateTime<Utc>) -> Self {
        dt.into()
    }

    /// Constructs this date & time from chrono's [`DateTime`] representation, pinning out of range years to the
    /// nearest representable instant.
    pub fn clamped(dt: &DateTime<Utc>) -> Self {
        if dt.year() < MIN_YEAR {
            ZipDateTimeBuilder::new().year(MIN_YEAR).month(1).day(1).build()
        } else if dt.year() > MAX_YEAR {
            ZipDateTimeBuilder::new().year(MAX_YEAR).month(12).day(31).hour(23).minute(59).second(58).build()
        } else {
            dt.into()
        }
    }
}

impl From<ZipDateTimeBuilder> for ZipDateTime {
    fn from(builder: ZipDateTimeBuilder) -> Self {
        builder.0
    }
}

impl From<&DateTime<Utc>> for ZipDateTime {
    fn from(value: &DateTime<Utc>) -> Self {
        let mut builder = ZipDateTimeBuilder::new();

        builder = builder.year(value.date_naive().year());
        builder = builder.month(value.date_naive().month());
        builder = builder.day(value.date_naive().day());
        builder = builder.hour(value.time().hour());
        builder = builder.minute(value.time().minute());
        builder = builder.second(value.time().second());

        builder.build()
    }
}

impl From<&ZipDateTime> for LocalResult<DateTime<Utc>> {
    fn from(value: &ZipDateTime) -> Self {
        Utc.with_ymd_and_hms(value.year(), value.month(), value.day(), value.hour(), value.minute(), value.second())
    }
}

impl From<DateTime<Utc>> for ZipDateTime {
    fn from(value: DateTime<Utc>) -> Self {
        (&value).into()
    }
}

impl From<ZipDateTime> for LocalResult<DateTime<Utc>> {
    fn from(value: ZipDateTime) -> Self {
        (&value).into()
    }
}
