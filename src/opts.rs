// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::consts::{DEFAULT_DIRECTORY_PERMISSIONS, DEFAULT_FILE_PERMISSIONS, PERMISSION_MASK};

/// Archive-wide defaults applied to entries which do not set their own metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub(crate) default_file_permissions: u16,
    pub(crate) default_directory_permissions: u16,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveOptions {
    /// Constructs options with `0o644` for files and `0o755` for directories.
    pub fn new() -> Self {
        ArchiveOptions {
            default_file_permissions: DEFAULT_FILE_PERMISSIONS,
            default_directory_permissions: DEFAULT_DIRECTORY_PERMISSIONS,
        }
    }

    /// Sets the permissions given to files added without explicit permissions.
    pub fn default_file_permissions(mut self, mode: u16) -> Self {
        self.default_file_permissions = mode & PERMISSION_MASK;
        self
    }

    /// Sets the permissions given to directories added without explicit permissions, including synthesised parents.
    pub fn default_directory_permissions(mut self, mode: u16) -> Self {
        self.default_directory_permissions = mode & PERMISSION_MASK;
        self
    }
}
