// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::EntryKind;
use crate::spec::attribute::AttributeCompatibility;

// APPNOTE 6.3 in the lower byte.
const SPEC_VERSION_MADE_BY: u16 = 63;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
pub fn as_needed_to_extract(kind: EntryKind) -> u16 {
    match kind {
        EntryKind::File => 10,
        EntryKind::Directory => 20,
    }
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
pub fn as_made_by() -> u16 {
    let host: u16 = AttributeCompatibility::Unix.into();
    (host << 8) | SPEC_VERSION_MADE_BY
}
