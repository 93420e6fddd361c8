// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::crc32::{crc32, Crc32Hasher};

fn reference(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

#[test]
fn empty() {
    assert_eq!(crc32(&[]), 0);
    assert_eq!(crc32(&[]), reference(&[]));
}

#[test]
fn single_byte() {
    assert_eq!(crc32(b"a"), 0xE8B7BE43);
    assert_eq!(crc32(&[0x00]), reference(&[0x00]));
    assert_eq!(crc32(&[0xFF]), reference(&[0xFF]));
}

#[test]
fn check_values() {
    assert_eq!(crc32(b"123456789"), 0xCBF43926);
    assert_eq!(crc32(b"hello"), 0x3610A686);
}

#[test]
fn multi_kilobyte_payload() {
    let data: Vec<u8> = (0..64 * 1024).map(|i: u32| (i.wrapping_mul(31) ^ (i >> 7)) as u8).collect();
    assert_eq!(crc32(&data), reference(&data));
}

#[test]
fn incremental_matches_one_shot() {
    let data = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt...";

    let mut hasher = Crc32Hasher::new();
    for chunk in data.chunks(7) {
        hasher.update(chunk);
    }

    assert_eq!(hasher.finalize(), crc32(data));
}
