// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use chrono::{DateTime, Utc};

use crate::entry::{path, EntryKind, ZipEntry};
use crate::opts::ArchiveOptions;
use crate::spec::consts::PERMISSION_MASK;

/// A builder which describes an entry to be added to an archive.
///
/// Any metadata left unset is resolved by the archive builder on insertion: the last modification date defaults to
/// the builder's clock, and the permissions default to those in its [`ArchiveOptions`].
#[derive(Debug, Clone)]
pub struct ZipEntryBuilder {
    pub(crate) path: String,
    pub(crate) kind: EntryKind,
    pub(crate) data: Vec<u8>,
    pub(crate) last_modification_date: Option<DateTime<Utc>>,
    pub(crate) unix_permissions: Option<u16>,
}

impl ZipEntryBuilder {
    /// Constructs a new builder which describes a regular file with the given content.
    pub fn file(path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            data: data.into(),
            last_modification_date: None,
            unix_permissions: None,
        }
    }

    /// Constructs a new builder which describes a directory.
    ///
    /// A trailing slash on `path` is optional.
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            data: Vec::new(),
            last_modification_date: None,
            unix_permissions: None,
        }
    }

    /// Sets the entry's last modification date.
    pub fn last_modification_date(mut self, date: DateTime<Utc>) -> Self {
        self.last_modification_date = Some(date);
        self
    }

    /// Sets the entry's Unix permissions mode.
    ///
    /// # Note
    /// Only the lower twelve bits (permissions, setuid, setgid & sticky) are kept. The file type bits are always
    /// derived from whether the entry is a file or a directory.
    pub fn unix_permissions(mut self, mode: u16) -> Self {
        self.unix_permissions = Some(mode);
        self
    }

    /// Consumes this builder and returns a final [`ZipEntry`], filling unset metadata from the given defaults.
    pub(crate) fn build(self, now: DateTime<Utc>, options: &ArchiveOptions) -> ZipEntry {
        let default_permissions = match self.kind {
            EntryKind::File => options.default_file_permissions,
            EntryKind::Directory => options.default_directory_permissions,
        };

        ZipEntry {
            path: path::normalize(&self.path, self.kind),
            kind: self.kind,
            data: self.data,
            last_modification_date: self.last_modification_date.unwrap_or(now),
            unix_permissions: self.unix_permissions.unwrap_or(default_permissions) & PERMISSION_MASK,
        }
    }
}
