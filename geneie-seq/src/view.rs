//! Borrowed mutable windows over an externally owned symbol buffer.
//!
//! A [`SeqView`] never allocates or frees; it is a `&mut [u8]` with the
//! operations the rest of the crate is written against. Its lifetime is tied
//! to the buffer, so a view can never outlive the storage it points into.
//!
//! Views that alias the same storage are produced by *consuming* a view and
//! splitting it (see [`SeqView::split_at`]); the pieces are disjoint, and a
//! write through one is visible in the owning buffer once the views are
//! dropped. Operations whose preconditions the caller can break (`index`,
//! `truncate`) return [`GeneieError::ContractViolation`] instead of producing
//! a corrupt window.

use std::fmt;
use std::ops::{Deref, DerefMut};

use geneie_core::{GeneieError, Result, Sequence};

use crate::alphabet;

/// A non-owning, mutable window over a symbol buffer.
pub struct SeqView<'a> {
    codes: &'a mut [u8],
}

impl<'a> SeqView<'a> {
    /// Wrap a buffer without checking its contents.
    pub fn new(codes: &'a mut [u8]) -> Self {
        Self { codes }
    }

    /// Wrap a buffer whose bytes are nucleic or amino symbols (whitespace
    /// allowed).
    pub fn validated(codes: &'a mut [u8]) -> Result<Self> {
        alphabet::validate_any(codes)?;
        Ok(Self { codes })
    }

    /// An empty view.
    pub fn empty() -> Self {
        Self { codes: &mut [] }
    }

    /// Number of symbols in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the window holds no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The window's symbols.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.codes
    }

    /// The window's symbols, mutably.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.codes
    }

    /// Give up the view and return the underlying slice with the full
    /// buffer lifetime.
    #[inline]
    pub fn into_bytes(self) -> &'a mut [u8] {
        self.codes
    }

    /// Borrow this view as a shorter-lived view over the same window.
    #[inline]
    pub fn reborrow(&mut self) -> SeqView<'_> {
        SeqView {
            codes: &mut *self.codes,
        }
    }

    /// The view starting `n` symbols later, `n` symbols shorter.
    pub fn index(self, n: usize) -> Result<Self> {
        let len = self.len();
        if n > len {
            return Err(GeneieError::ContractViolation(format!(
                "index {} past end of view of length {}",
                n, len
            )));
        }
        Ok(Self {
            codes: &mut self.codes[n..],
        })
    }

    /// The same base with length `new_len`. Views only shrink.
    pub fn truncate(self, new_len: usize) -> Result<Self> {
        let len = self.len();
        if new_len > len {
            return Err(GeneieError::ContractViolation(format!(
                "cannot grow view of length {} to {}",
                len, new_len
            )));
        }
        Ok(Self {
            codes: &mut self.codes[..new_len],
        })
    }

    /// Split into `[0, mid)` and `[mid, len)`.
    pub fn split_at(self, mid: usize) -> Result<(Self, Self)> {
        let len = self.len();
        if mid > len {
            return Err(GeneieError::ContractViolation(format!(
                "split point {} past end of view of length {}",
                mid, len
            )));
        }
        let (head, tail) = self.codes.split_at_mut(mid);
        Ok((Self { codes: head }, Self { codes: tail }))
    }

    /// Element-wise, case-sensitive equality. Views of different length are
    /// never equal.
    pub fn equals(&self, other: &[u8]) -> bool {
        self.codes.len() == other.len() && self.codes.iter().eq(other.iter())
    }

    /// Linear, case-insensitive scan for `code`.
    pub fn contains_code(&self, code: u8) -> bool {
        contains_code(&*self.codes, code)
    }
}

/// Case-insensitive membership test over any symbol slice.
#[inline]
pub fn contains_code(codes: &[u8], code: u8) -> bool {
    codes.iter().any(|b| b.eq_ignore_ascii_case(&code))
}

impl Deref for SeqView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &*self.codes
    }
}

impl DerefMut for SeqView<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut *self.codes
    }
}

impl AsRef<[u8]> for SeqView<'_> {
    fn as_ref(&self) -> &[u8] {
        &*self.codes
    }
}

impl<'a> From<&'a mut [u8]> for SeqView<'a> {
    fn from(codes: &'a mut [u8]) -> Self {
        Self::new(codes)
    }
}

impl<'a> From<&'a mut Vec<u8>> for SeqView<'a> {
    fn from(codes: &'a mut Vec<u8>) -> Self {
        Self::new(codes.as_mut_slice())
    }
}

impl Sequence for SeqView<'_> {
    fn as_bytes(&self) -> &[u8] {
        &*self.codes
    }
}

impl PartialEq for SeqView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(&*other.codes)
    }
}

impl Eq for SeqView<'_> {}

impl PartialEq<[u8]> for SeqView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.equals(other)
    }
}

impl<const N: usize> PartialEq<[u8; N]> for SeqView<'_> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.equals(other)
    }
}

impl PartialEq<&[u8]> for SeqView<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.equals(other)
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for SeqView<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.equals(*other)
    }
}

impl fmt::Debug for SeqView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeqView(\"{}\")", String::from_utf8_lossy(&*self.codes))
    }
}

impl fmt::Display for SeqView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&*self.codes))
    }
}
