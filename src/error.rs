// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("file name length of {0} bytes exceeds the 16-bit field")]
    FileNameTooLarge(usize),
    #[error("entry '{0}' holds {1} bytes which exceeds the 32-bit size fields")]
    EntryTooLarge(String, usize),
    #[error("{0} entries exceeds the 16-bit entry count fields")]
    TooManyEntries(usize),
    #[error("archive offset {0} exceeds the 32-bit offset fields")]
    ArchiveTooLarge(u64),

    #[error("an upstream writer returned an error: {0}")]
    UpstreamWriteError(#[from] std::io::Error),
}
