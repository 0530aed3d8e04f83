//! Owning symbol buffers.
//!
//! [`OwnedSequence`] is the storage that [`SeqView`]s borrow from. It holds
//! symbols exactly as given (case is preserved) and hands out views over its
//! whole buffer. Every in-place operation in the crate works on a view; the
//! buffer itself never shrinks, so after a splice or encode the valid data is
//! whatever the returned views cover.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use geneie_core::{ContentAddressable, Result, Sequence, Summarizable};

use crate::alphabet::{self, GAP};
use crate::view::SeqView;

/// Number of symbols shown by [`Summarizable::summary`] before eliding.
const PREVIEW_LEN: usize = 20;

/// A heap-allocated, owned symbol buffer.
#[derive(Clone, Default)]
pub struct OwnedSequence {
    data: Vec<u8>,
}

impl OwnedSequence {
    /// Allocate `len` gap symbols.
    pub fn with_len(len: usize) -> Self {
        Self {
            data: vec![GAP; len],
        }
    }

    /// Copy `bytes` into a new buffer after checking that they form a
    /// nucleic or amino strand. Whitespace is kept.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        alphabet::validate_any(bytes)?;
        Ok(Self {
            data: bytes.to_vec(),
        })
    }

    /// Validated copy of a text strand.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(text.as_bytes())
    }

    /// Copy the symbols a view currently covers.
    pub fn from_view(view: &SeqView<'_>) -> Self {
        Self {
            data: view.as_bytes().to_vec(),
        }
    }

    /// Memory-map `path`, validate its contents and copy them into a new
    /// buffer.
    #[cfg(feature = "std")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let mapped = geneie_core::mmap::MappedFile::open(path)?;
        Self::new(mapped.as_bytes())
    }

    /// A mutable view over the whole buffer.
    pub fn view_mut(&mut self) -> SeqView<'_> {
        SeqView::new(&mut self.data)
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for OwnedSequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for OwnedSequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Sequence for OwnedSequence {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl ContentAddressable for OwnedSequence {
    fn content_hash(&self) -> String {
        geneie_core::hash::sha256(&self.data)
    }
}

impl Summarizable for OwnedSequence {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(PREVIEW_LEN);
        let preview = String::from_utf8_lossy(&self.data[..preview_len]);
        if self.data.len() > PREVIEW_LEN {
            format!("sequence ({} symbols): {}...", self.data.len(), preview)
        } else {
            format!("sequence ({} symbols): {}", self.data.len(), preview)
        }
    }
}

impl fmt::Debug for OwnedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnedSequence(\"{}\")", String::from_utf8_lossy(&self.data))
    }
}

impl fmt::Display for OwnedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

impl PartialEq for OwnedSequence {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for OwnedSequence {}

impl Hash for OwnedSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}
