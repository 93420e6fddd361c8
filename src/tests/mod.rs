// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)


use chrono::{DateTime, TimeZone, Utc};

use crate::clock::FixedClock;
use crate::write::ZipArchiveBuilder;

pub(crate) fn fixed_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 6, 15, 13, 45, 31).unwrap()
}

pub(crate) fn fixed_builder() -> ZipArchiveBuilder<FixedClock> {
    ZipArchiveBuilder::new().with_clock(FixedClock(fixed_date()))
}

pub(crate) fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(data[offset..offset + 2].try_into().unwrap())
}

pub(crate) fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}
