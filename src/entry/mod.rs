// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;
pub(crate) mod path;

use chrono::{DateTime, Utc};

use crate::date::ZipDateTime;
use crate::spec::attribute;

/// Whether an entry is a regular file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

/// Stores information about a ZIP entry held by an archive builder.
///
/// # Builder pattern
/// Entries are immutable once inserted. To describe a new entry with non-default metadata, the
/// [`ZipEntryBuilder`](crate::ZipEntryBuilder) builder must be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry {
    pub(crate) path: String,
    pub(crate) kind: EntryKind,
    pub(crate) data: Vec<u8>,
    pub(crate) last_modification_date: DateTime<Utc>,
    pub(crate) unix_permissions: u16,
}

impl ZipEntry {
    /// Returns the entry's normalised path.
    ///
    /// Directory paths always end with a trailing slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns whether this entry is a file or a directory.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns whether or not the entry represents a directory.
    pub fn dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    /// Returns the entry's content. This is always empty for directories.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the entry's last modification time & date.
    pub fn last_modification_date(&self) -> &DateTime<Utc> {
        &self.last_modification_date
    }

    /// Returns the entry's last modification time & date as it will be stored in the archive.
    pub fn zip_date_time(&self) -> ZipDateTime {
        ZipDateTime::clamped(&self.last_modification_date)
    }

    /// Returns the entry's permission bits, excluding the file type.
    pub fn unix_permissions(&self) -> u16 {
        self.unix_permissions
    }

    /// Returns the entry's full Unix mode, including the file type bits implied by its kind.
    pub fn unix_mode(&self) -> u16 {
        attribute::unix_mode(self.kind, self.unix_permissions)
    }

    /// Returns the entry's external file attribute.
    pub fn external_file_attribute(&self) -> u32 {
        attribute::external_file_attribute(self.kind, self.unix_permissions)
    }
}
