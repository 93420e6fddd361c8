// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports building Stored ZIP archives in memory.
//!
//! # Example
//! ```
//! # use stored_zip::{ZipArchiveBuilder, ZipEntryBuilder};
//! # use stored_zip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut builder = ZipArchiveBuilder::new();
//!
//! builder.add_text("README.md", "# Example project\n");
//! builder.add_entry(ZipEntryBuilder::file("gradlew", b"#!/bin/sh\n".to_vec()).unix_permissions(0o755));
//! builder.add_directory("src/main/resources");
//!
//! let archive: Vec<u8> = builder.serialize()?;
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod io;
pub(crate) mod serialize;

use std::io::Write;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::clock::{Clock, SystemClock};
use crate::entry::builder::ZipEntryBuilder;
use crate::entry::{path, EntryKind, ZipEntry};
use crate::error::Result;
use crate::opts::ArchiveOptions;

/// An in-memory ZIP archive builder which holds entries in insertion order.
///
/// # Ordering
/// Entries are serialised in the order their paths were first added. Adding a path again replaces the previous
/// entry's content and metadata but keeps its original position.
///
/// # Parent directories
/// Every missing ancestor directory of an added path is inserted before it, outermost first. These synthesised
/// directories never replace an entry which is already present.
pub struct ZipArchiveBuilder<C = SystemClock> {
    entries: IndexMap<String, ZipEntry>,
    options: ArchiveOptions,
    clock: C,
}

impl ZipArchiveBuilder<SystemClock> {
    /// Constructs a new, empty builder with default options which timestamps entries using the system clock.
    pub fn new() -> Self {
        Self::with_options(ArchiveOptions::default())
    }

    /// Constructs a new, empty builder with the given options.
    pub fn with_options(options: ArchiveOptions) -> Self {
        Self { entries: IndexMap::new(), options, clock: SystemClock }
    }
}

impl Default for ZipArchiveBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ZipArchiveBuilder<C> {
    /// Replaces the clock used to timestamp entries which are added without a last modification date.
    pub fn with_clock<N: Clock>(self, clock: N) -> ZipArchiveBuilder<N> {
        ZipArchiveBuilder { entries: self.entries, options: self.options, clock }
    }

    /// Adds a regular file with default metadata.
    pub fn add_file(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> &mut Self {
        self.add_entry(ZipEntryBuilder::file(path, data))
    }

    /// Adds a regular file holding the UTF-8 encoding of `text`, with default metadata.
    pub fn add_text(&mut self, path: impl Into<String>, text: &str) -> &mut Self {
        self.add_file(path, text.as_bytes())
    }

    /// Adds a directory with default metadata.
    pub fn add_directory(&mut self, path: impl Into<String>) -> &mut Self {
        self.add_entry(ZipEntryBuilder::directory(path))
    }

    /// Adds a file or directory described by a [`ZipEntryBuilder`].
    pub fn add_entry(&mut self, builder: ZipEntryBuilder) -> &mut Self {
        let entry = builder.build(self.clock.now(), &self.options);

        if entry.path.is_empty() && entry.dir() {
            tracing::trace!("ignoring the archive root directory");
            return self;
        }

        self.add_parents(&entry.path, entry.last_modification_date);

        tracing::trace!(path = %entry.path, kind = ?entry.kind, "inserting entry");
        self.entries.insert(entry.path.clone(), entry);
        self
    }

    fn add_parents(&mut self, path: &str, date: DateTime<Utc>) {
        let mut missing = Vec::new();
        let mut current = path::parent(path);

        while let Some(parent) = current {
            if !self.entries.contains_key(parent) {
                missing.push(parent);
            }
            current = path::parent(parent);
        }

        for parent in missing.into_iter().rev() {
            tracing::trace!(path = parent, "synthesising parent directory");

            let entry = ZipEntry {
                path: parent.to_string(),
                kind: EntryKind::Directory,
                data: Vec::new(),
                last_modification_date: date,
                unix_permissions: self.options.default_directory_permissions,
            };
            self.entries.insert(entry.path.clone(), entry);
        }
    }

    /// Returns the entry stored at the given normalised path.
    pub fn get(&self, path: &str) -> Option<&ZipEntry> {
        self.entries.get(path)
    }

    /// Returns an iterator over all entries in the order they will be serialised.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &ZipEntry> + '_ {
        self.entries.values()
    }

    /// Returns the number of entries, including synthesised directories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry so this builder can be reused for a new archive.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialises all entries into a complete archive.
    ///
    /// This may be called any number of times; an unmodified builder always produces identical output.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        serialize::serialize(self.entries.values())
    }

    /// Serialises all entries and writes the complete archive to the given writer.
    ///
    /// The archive is fully serialised before any bytes are written.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let archive = self.serialize()?;
        writer.write_all(&archive)?;
        Ok(())
    }
}

/// Builds an archive by handing a fresh builder to `generate` and serialising whatever it adds.
///
/// ```
/// # use stored_zip::build_archive;
/// let archive = build_archive(|zip| {
///     zip.add_text("src/main/kotlin/Application.kt", "fun main() {}\n");
/// })
/// .unwrap();
///
/// assert_eq!(&archive[..4], &[0x50, 0x4b, 0x03, 0x04]);
/// ```
pub fn build_archive<F>(generate: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut ZipArchiveBuilder),
{
    let mut builder = ZipArchiveBuilder::new();
    generate(&mut builder);
    builder.serialize()
}
