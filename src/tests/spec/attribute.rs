// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::EntryKind;
use crate::spec::attribute::{external_file_attribute, unix_mode};
use crate::spec::version;

#[test]
fn file_mode_is_tagged_regular() {
    assert_eq!(unix_mode(EntryKind::File, 0o644), 0o100644);
    assert_eq!(external_file_attribute(EntryKind::File, 0o644), (0o100644 << 16) | 0x20);
}

#[test]
fn directory_mode_is_tagged_directory() {
    assert_eq!(unix_mode(EntryKind::Directory, 0o755), 0o040755);
    assert_eq!(external_file_attribute(EntryKind::Directory, 0o755), (0o040755 << 16) | 0x10);
}

#[test]
fn caller_type_bits_are_replaced() {
    // A directory type passed for a file is discarded in favour of the regular file type.
    assert_eq!(unix_mode(EntryKind::File, 0o040755), 0o100755);
    assert_eq!(unix_mode(EntryKind::Directory, 0o100700), 0o040700);
}

#[test]
fn versions() {
    assert_eq!(version::as_made_by(), 0x033F);
    assert_eq!(version::as_needed_to_extract(EntryKind::File), 10);
    assert_eq!(version::as_needed_to_extract(EntryKind::Directory), 20);
}
