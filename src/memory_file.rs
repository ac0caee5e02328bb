//! Generic representation of a file that resides in program memory.
//!
//! This is the unit the surrounding archive layer exchanges with the
//! codec. The codec itself only ever looks at `data`; `name` is carried
//! along untouched, which keeps the codec decoupled from any container
//! format.

/// A named byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    /// Entry name as the surrounding archive knows it.
    pub name: String,
    /// Raw file contents.
    pub data: Vec<u8>,
}

impl MemoryFile {
    /// Create a new in-memory file.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Length of the contents in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the contents are empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
