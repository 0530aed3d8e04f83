//! Core trait definitions shared across geneie crates.

/// A biological sequence backed by a contiguous symbol buffer.
pub trait Sequence {
    /// The raw symbols.
    fn as_bytes(&self) -> &[u8];

    /// Length in symbols.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A type whose identity can be derived from its content via cryptographic hash.
pub trait ContentAddressable {
    /// Return the content hash as a hex string (e.g. SHA-256).
    fn content_hash(&self) -> String;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
