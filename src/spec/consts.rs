// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const SIGNATURE_LENGTH: usize = 4;

// Local file header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

// Unix file type bits carried in the upper half of the external file attribute.
pub const S_IFREG: u16 = 0o100000;
pub const S_IFDIR: u16 = 0o040000;
pub const PERMISSION_MASK: u16 = 0o7777;

pub const DEFAULT_FILE_PERMISSIONS: u16 = 0o644;
pub const DEFAULT_DIRECTORY_PERMISSIONS: u16 = 0o755;

// MS-DOS attribute bits carried in the lower half of the external file attribute.
pub const DOS_DIRECTORY: u32 = 0x10;
pub const DOS_ARCHIVE: u32 = 0x20;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445
pub const COMPRESSION_STORED: u16 = 0;
