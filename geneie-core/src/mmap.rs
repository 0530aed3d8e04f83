//! Read-only memory-mapped file access.
//!
//! Only available with the `std` feature.

use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::{GeneieError, Result};

/// A read-only memory-mapped file.
pub struct MappedFile {
    _file: File,
    // Zero-length files cannot be mapped on every platform.
    mmap: Option<Mmap>,
}

impl MappedFile {
    /// Open and memory-map a file.
    ///
    /// The file must not be modified by another process while the mapping
    /// is alive.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GeneieError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let mmap = if file.metadata()?.len() == 0 {
            None
        } else {
            // SAFETY: the File is held open for the lifetime of the mapping
            // and the mapping is never handed out mutably.
            Some(unsafe { Mmap::map(&file) }?)
        };
        Ok(Self { _file: file, mmap })
    }

    /// The mapped bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the mapped region is empty.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl AsRef<[u8]> for MappedFile {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
