// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::consts::{CDH_SIGNATURE, EOCDR_SIGNATURE, LFH_SIGNATURE};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, LocalFileHeader};
use crate::write::io::buffer::ByteBuffer;

impl LocalFileHeader {
    /// Writes the signature followed by the fixed-length portion of this header.
    ///
    /// The file name and extra field are variable-length and written by the caller.
    pub fn write(&self, buffer: &mut ByteBuffer) {
        buffer.write_u32_le(LFH_SIGNATURE);
        buffer.write_u16_le(self.version);
        buffer.write_u16_le(self.flags);
        buffer.write_u16_le(self.compression);
        buffer.write_u16_le(self.mod_time);
        buffer.write_u16_le(self.mod_date);
        buffer.write_u32_le(self.crc);
        buffer.write_u32_le(self.compressed_size);
        buffer.write_u32_le(self.uncompressed_size);
        buffer.write_u16_le(self.file_name_length);
        buffer.write_u16_le(self.extra_field_length);
    }
}

impl CentralDirectoryRecord {
    /// Writes the signature followed by the fixed-length portion of this record.
    pub fn write(&self, buffer: &mut ByteBuffer) {
        buffer.write_u32_le(CDH_SIGNATURE);
        buffer.write_u16_le(self.v_made_by);
        buffer.write_u16_le(self.v_needed);
        buffer.write_u16_le(self.flags);
        buffer.write_u16_le(self.compression);
        buffer.write_u16_le(self.mod_time);
        buffer.write_u16_le(self.mod_date);
        buffer.write_u32_le(self.crc);
        buffer.write_u32_le(self.compressed_size);
        buffer.write_u32_le(self.uncompressed_size);
        buffer.write_u16_le(self.file_name_length);
        buffer.write_u16_le(self.extra_field_length);
        buffer.write_u16_le(self.file_comment_length);
        buffer.write_u16_le(self.disk_start);
        buffer.write_u16_le(self.inter_attr);
        buffer.write_u32_le(self.exter_attr);
        buffer.write_u32_le(self.lh_offset);
    }
}

impl EndOfCentralDirectoryHeader {
    /// Writes the signature followed by the fixed-length portion of this record.
    pub fn write(&self, buffer: &mut ByteBuffer) {
        buffer.write_u32_le(EOCDR_SIGNATURE);
        buffer.write_u16_le(self.disk_num);
        buffer.write_u16_le(self.start_cent_dir_disk);
        buffer.write_u16_le(self.num_of_entries_disk);
        buffer.write_u16_le(self.num_of_entries);
        buffer.write_u32_le(self.size_cent_dir);
        buffer.write_u32_le(self.cent_dir_offset);
        buffer.write_u16_le(self.file_comm_length);
    }
}
