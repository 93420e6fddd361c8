// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::ZipDateTime;

/// A builder for [`ZipDateTime`].
///
/// Each setter masks its value into the field's bit range, replacing any value previously set for that field.
pub struct ZipDateTimeBuilder(pub(crate) ZipDateTime);

impl From<ZipDateTime> for ZipDateTimeBuilder {
    fn from(date: ZipDateTime) -> Self {
        Self(date)
    }
}

impl Default for ZipDateTimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipDateTimeBuilder {
    /// Constructs a new builder with every field zeroed.
    pub fn new() -> Self {
        Self(ZipDateTime { date: 0, time: 0 })
    }

    /// Sets the date and time's year.
    pub fn year(mut self, year: i32) -> Self {
        let year = (((year - 1980) << 9) & 0xFE00) as u16;
        self.0.date = (self.0.date & !0xFE00) | year;
        self
    }

    /// Sets the date and time's month.
    pub fn month(mut self, month: u32) -> Self {
        let month = ((month << 5) & 0x1E0) as u16;
        self.0.date = (self.0.date & !0x1E0) | month;
        self
    }

    /// Sets the date and time's day.
    pub fn day(mut self, day: u32) -> Self {
        let day = (day & 0x1F) as u16;
        self.0.date = (self.0.date & !0x1F) | day;
        self
    }

    /// Sets the date and time's hour.
    pub fn hour(mut self, hour: u32) -> Self {
        let hour = ((hour << 11) & 0xF800) as u16;
        self.0.time = (self.0.time & !0xF800) | hour;
        self
    }

    /// Sets the date and time's minute.
    pub fn minute(mut self, minute: u32) -> Self {
        let minute = ((minute << 5) & 0x7E0) as u16;
        self.0.time = (self.0.time & !0x7E0) | minute;
        self
    }

    /// Sets the date and time's second.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(mut self, second: u32) -> Self {
        let second = ((second >> 1) & 0x1F) as u16;
        self.0.time = (self.0.time & !0x1F) | second;
        self
    }

    /// Consumes this builder and returns a final [`ZipDateTime`].
    ///
    /// This is equivalent to:
    /// ```
    /// # use stored_zip::{ZipDateTime, ZipDateTimeBuilder};
    /// #
    /// # let builder = ZipDateTimeBuilder::new().year(2024).month(3).day(2);
    /// let date: ZipDateTime = builder.into();
    /// ```
    pub fn build(self) -> ZipDateTime {
        self.into()
    }
}
