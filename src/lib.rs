// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # stored_zip
//!
//! An in-memory writer for uncompressed ZIP archives, aimed at generators which assemble a project skeleton and
//! hand it out as a single download.
//!
//! ## Features
//! - Insertion-ordered entries with automatic parent directory synthesis.
//! - Unix permissions and MS-DOS timestamps on every entry.
//! - Byte-exact, deterministic output using only the Stored method.
//! - Aims for resonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Example
//! ```
//! # use stored_zip::{ZipArchiveBuilder, FixedClock};
//! # use chrono::{TimeZone, Utc};
//! #
//! let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap());
//! let mut builder = ZipArchiveBuilder::new().with_clock(clock);
//!
//! builder.add_text("a/b/c.txt", "hello");
//!
//! let paths: Vec<&str> = builder.entries().map(|entry| entry.path()).collect();
//! assert_eq!(paths, ["a/", "a/b/", "a/b/c.txt"]);
//!
//! let archive = builder.serialize().unwrap();
//! assert_eq!(archive, builder.serialize().unwrap());
//! ```

pub mod clock;
pub mod date;
pub mod entry;
pub mod error;
pub mod opts;
pub mod spec;
pub mod write;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::entry::{builder::ZipEntryBuilder, EntryKind, ZipEntry};
pub use crate::opts::ArchiveOptions;
pub use crate::write::{build_archive, ZipArchiveBuilder};

#[cfg(test)]
pub(crate) mod tests;
