// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod attribute;
pub(crate) mod consts;
pub mod crc32;
pub(crate) mod header;
pub(crate) mod version;
pub(crate) mod write;
