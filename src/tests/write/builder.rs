// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use chrono::{TimeZone, Utc};

use crate::entry::{path, EntryKind};
use crate::opts::ArchiveOptions;
use crate::tests::{fixed_builder, fixed_date};
use crate::{ZipArchiveBuilder, ZipEntryBuilder};

fn paths<C: crate::Clock>(builder: &ZipArchiveBuilder<C>) -> Vec<&str> {
    builder.entries().map(|entry| entry.path()).collect()
}

#[test]
fn normalize_paths() {
    assert_eq!(path::normalize("a/b/c.txt", EntryKind::File), "a/b/c.txt");
    assert_eq!(path::normalize("/a//b/./c.txt", EntryKind::File), "a/b/c.txt");
    assert_eq!(path::normalize("a\\b\\c.txt", EntryKind::File), "a/b/c.txt");
    assert_eq!(path::normalize("./a/../b", EntryKind::File), "a/../b");
    assert_eq!(path::normalize("src/main", EntryKind::Directory), "src/main/");
    assert_eq!(path::normalize("src/main/", EntryKind::Directory), "src/main/");
    assert_eq!(path::normalize("/", EntryKind::Directory), "");
}

#[test]
fn parent_paths() {
    assert_eq!(path::parent("a/b/c.txt"), Some("a/b/"));
    assert_eq!(path::parent("a/b/"), Some("a/"));
    assert_eq!(path::parent("a/"), None);
    assert_eq!(path::parent("README.md"), None);
}

#[test]
fn synthesises_parent_directories() {
    let mut builder = fixed_builder();
    builder.add_file("a/b/c.txt", b"content".to_vec());

    assert_eq!(paths(&builder), ["a/", "a/b/", "a/b/c.txt"]);

    for dir in ["a/", "a/b/"] {
        let entry = builder.get(dir).expect("missing synthesised directory");
        assert!(entry.dir());
        assert!(entry.data().is_empty());
        assert_eq!(entry.unix_permissions(), 0o755);
        assert_eq!(entry.last_modification_date(), &fixed_date());
    }
}

#[test]
fn shared_parents_are_added_once() {
    let mut builder = fixed_builder();
    builder.add_text("src/main/kotlin/Application.kt", "fun main() {}");
    builder.add_text("src/main/resources/application.conf", "ktor {}");
    builder.add_text("src/test/kotlin/ApplicationTest.kt", "class ApplicationTest");

    assert_eq!(
        paths(&builder),
        [
            "src/",
            "src/main/",
            "src/main/kotlin/",
            "src/main/kotlin/Application.kt",
            "src/main/resources/",
            "src/main/resources/application.conf",
            "src/test/",
            "src/test/kotlin/",
            "src/test/kotlin/ApplicationTest.kt",
        ]
    );
}

#[test]
fn synthesis_never_overwrites_explicit_directory() {
    let explicit = Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).unwrap();

    let mut builder = fixed_builder();
    builder.add_entry(ZipEntryBuilder::directory("a").unix_permissions(0o700).last_modification_date(explicit));
    builder.add_file("a/b/c.txt", Vec::<u8>::new());

    let dir = builder.get("a/").expect("missing explicit directory");
    assert_eq!(dir.unix_permissions(), 0o700);
    assert_eq!(dir.last_modification_date(), &explicit);
    assert_eq!(paths(&builder), ["a/", "a/b/", "a/b/c.txt"]);
}

#[test]
fn readding_keeps_first_position() {
    let mut builder = fixed_builder();
    builder.add_text("first.txt", "one");
    builder.add_text("second.txt", "two");
    builder.add_entry(ZipEntryBuilder::file("first.txt", b"replaced".to_vec()).unix_permissions(0o600));

    assert_eq!(paths(&builder), ["first.txt", "second.txt"]);

    let entry = builder.get("first.txt").expect("missing entry");
    assert_eq!(entry.data(), b"replaced");
    assert_eq!(entry.unix_permissions(), 0o600);
}

#[test]
fn explicit_directory_after_synthesis_updates_in_place() {
    let mut builder = fixed_builder();
    builder.add_file("a/b.txt", Vec::<u8>::new());
    builder.add_entry(ZipEntryBuilder::directory("a/").unix_permissions(0o700));

    assert_eq!(paths(&builder), ["a/", "a/b.txt"]);
    assert_eq!(builder.get("a/").map(|entry| entry.unix_permissions()), Some(0o700));
}

#[test]
fn root_directory_is_ignored() {
    let mut builder = fixed_builder();
    builder.add_directory("/");
    builder.add_directory("");

    assert!(builder.is_empty());
}

#[test]
fn default_metadata() {
    let mut builder = fixed_builder();
    builder.add_file("gradlew", b"#!/bin/sh".to_vec());
    builder.add_directory("empty");

    let file = builder.get("gradlew").expect("missing file");
    assert_eq!(file.kind(), EntryKind::File);
    assert_eq!(file.unix_permissions(), 0o644);
    assert_eq!(file.unix_mode(), 0o100644);
    assert_eq!(file.last_modification_date(), &fixed_date());

    let dir = builder.get("empty/").expect("missing directory");
    assert_eq!(dir.kind(), EntryKind::Directory);
    assert_eq!(dir.unix_mode(), 0o040755);
}

#[test]
fn options_change_defaults() {
    let options = ArchiveOptions::new().default_file_permissions(0o600).default_directory_permissions(0o700);
    let mut builder = ZipArchiveBuilder::with_options(options).with_clock(crate::FixedClock(fixed_date()));
    builder.add_file("a/secret.txt", Vec::<u8>::new());

    assert_eq!(builder.get("a/").map(|entry| entry.unix_permissions()), Some(0o700));
    assert_eq!(builder.get("a/secret.txt").map(|entry| entry.unix_permissions()), Some(0o600));
}

#[test]
fn permissions_drop_type_bits() {
    let mut builder = fixed_builder();
    builder.add_entry(ZipEntryBuilder::file("run.sh", Vec::<u8>::new()).unix_permissions(0o040755));

    let entry = builder.get("run.sh").expect("missing entry");
    assert_eq!(entry.unix_permissions(), 0o755);
    assert_eq!(entry.unix_mode(), 0o100755);
}

#[test]
fn clear_allows_reuse() {
    let mut builder = fixed_builder();
    builder.add_text("a/b.txt", "b");
    assert_eq!(builder.len(), 2);

    builder.clear();
    assert!(builder.is_empty());

    builder.add_text("c.txt", "c");
    assert_eq!(paths(&builder), ["c.txt"]);
}
