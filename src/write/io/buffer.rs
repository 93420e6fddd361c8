// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// An append-only byte buffer which tracks the current byte offset.
///
/// All integers are written little-endian. Field width limits are not checked here; callers are expected to have
/// narrowed values to the width of the field they are writing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    inner: Vec<u8>,
}

impl ByteBuffer {
    /// Constructs a new, empty buffer.
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Constructs a new, empty buffer with at least the given capacity preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: Vec::with_capacity(capacity) }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.inner.push(value);
    }

    pub fn write_u16_le(&mut self, value: u16) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32_le(&mut self, value: u32) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.inner.extend_from_slice(bytes);
    }

    /// Returns the current byte offset, ie. the number of bytes written so far.
    pub fn offset(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Consumes this buffer and returns the written bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}
