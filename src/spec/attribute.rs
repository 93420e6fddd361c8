// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::EntryKind;
use crate::spec::consts::{DOS_ARCHIVE, DOS_DIRECTORY, PERMISSION_MASK, S_IFDIR, S_IFREG};

/// An attribute host compatibility supported by this crate.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCompatibility {
    Unix,
}

impl From<&AttributeCompatibility> for u16 {
    // Convert a supported attribute host compatibility into its relevant u16 stored with little endianness.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4422
    fn from(compatibility: &AttributeCompatibility) -> Self {
        match compatibility {
            AttributeCompatibility::Unix => 3,
        }
    }
}

impl From<AttributeCompatibility> for u16 {
    fn from(compatibility: AttributeCompatibility) -> Self {
        (&compatibility).into()
    }
}

/// Combines permission bits with the file type bits implied by the entry kind.
///
/// Any type bits present in `permissions` are discarded.
pub fn unix_mode(kind: EntryKind, permissions: u16) -> u16 {
    let file_type = match kind {
        EntryKind::File => S_IFREG,
        EntryKind::Directory => S_IFDIR,
    };

    file_type | (permissions & PERMISSION_MASK)
}

// The Unix mode lives in the upper sixteen bits, the MS-DOS attribute byte in the lower.
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4415
pub fn external_file_attribute(kind: EntryKind, permissions: u16) -> u32 {
    let dos = match kind {
        EntryKind::File => DOS_ARCHIVE,
        EntryKind::Directory => DOS_DIRECTORY,
    };

    (u32::from(unix_mode(kind, permissions)) << 16) | dos
}
