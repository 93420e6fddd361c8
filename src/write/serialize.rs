// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::spec::consts::{CDH_LENGTH, COMPRESSION_STORED, EOCDR_LENGTH, LFH_LENGTH, SIGNATURE_LENGTH};
use crate::spec::crc32::crc32;
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, LocalFileHeader};
use crate::spec::version;
use crate::write::io::buffer::ByteBuffer;

pub(crate) struct CentralDirectoryEntry<'a> {
    pub header: CentralDirectoryRecord,
    pub file_name: &'a [u8],
}

/// Serialises entries, in order, into a complete Stored ZIP archive.
///
/// This function does so by:
/// - writing a local file header, file name and raw data for each entry whilst retaining its central directory
///   record
/// - writing every retained central directory record
/// - writing the end of central directory record
///
/// Nothing is returned unless every field fits its width.
#[tracing::instrument(skip(entries), fields(count = entries.len()))]
pub(crate) fn serialize<'a>(entries: impl ExactSizeIterator<Item = &'a ZipEntry> + Clone) -> Result<Vec<u8>> {
    let num_of_entries = u16::try_from(entries.len()).map_err(|_| {
        tracing::warn!(entries = entries.len(), "too many entries for a non-ZIP64 archive");
        ZipError::TooManyEntries(entries.len())
    })?;

    let capacity = entries
        .clone()
        .map(|entry| {
            2 * SIGNATURE_LENGTH + LFH_LENGTH + CDH_LENGTH + 2 * entry.path().len() + entry.data().len()
        })
        .sum::<usize>()
        + SIGNATURE_LENGTH
        + EOCDR_LENGTH;

    let mut buffer = ByteBuffer::with_capacity(capacity);
    let mut cd_entries = Vec::with_capacity(entries.len());

    for entry in entries {
        let file_name = entry.path().as_bytes();
        let file_name_length = u16::try_from(file_name.len()).map_err(|_| {
            tracing::warn!(length = file_name.len(), "file name too large");
            ZipError::FileNameTooLarge(file_name.len())
        })?;
        let size = u32::try_from(entry.data().len()).map_err(|_| {
            tracing::warn!(path = entry.path(), size = entry.data().len(), "entry too large");
            ZipError::EntryTooLarge(entry.path().to_string(), entry.data().len())
        })?;
        let lh_offset = narrow_offset(buffer.offset())?;
        let date = entry.zip_date_time();

        let lf_header = LocalFileHeader {
            version: version::as_needed_to_extract(entry.kind()),
            flags: 0,
            compression: COMPRESSION_STORED,
            mod_time: date.packed_time(),
            mod_date: date.packed_date(),
            crc: crc32(entry.data()),
            compressed_size: size,
            uncompressed_size: size,
            file_name_length,
            extra_field_length: 0,
        };

        let header = CentralDirectoryRecord {
            v_made_by: version::as_made_by(),
            v_needed: lf_header.version,
            flags: lf_header.flags,
            compression: lf_header.compression,
            mod_time: lf_header.mod_time,
            mod_date: lf_header.mod_date,
            crc: lf_header.crc,
            compressed_size: lf_header.compressed_size,
            uncompressed_size: lf_header.uncompressed_size,
            file_name_length: lf_header.file_name_length,
            extra_field_length: 0,
            file_comment_length: 0,
            disk_start: 0,
            inter_attr: 0,
            exter_attr: entry.external_file_attribute(),
            lh_offset,
        };

        lf_header.write(&mut buffer);
        buffer.write_bytes(file_name);
        buffer.write_bytes(entry.data());

        cd_entries.push(CentralDirectoryEntry { header, file_name });
    }

    let cd_offset = buffer.offset();

    for entry in &cd_entries {
        entry.header.write(&mut buffer);
        buffer.write_bytes(entry.file_name);
    }

    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: num_of_entries,
        num_of_entries,
        size_cent_dir: narrow_offset(buffer.offset() - cd_offset)?,
        cent_dir_offset: narrow_offset(cd_offset)?,
        file_comm_length: 0,
    };
    header.write(&mut buffer);

    tracing::debug!(size = buffer.offset(), "archive serialised");
    Ok(buffer.into_inner())
}

fn narrow_offset(offset: usize) -> Result<u32> {
    u32::try_from(offset).map_err(|_| {
        tracing::warn!(offset, "archive exceeds 32-bit offsets");
        ZipError::ArchiveTooLarge(offset as u64)
    })
}
