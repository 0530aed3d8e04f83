//! Shared primitives, traits, and utilities for the geneie sequence toolkit.
//!
//! `geneie-core` provides the foundation that `geneie-seq` builds on:
//!
//! - **Error types** — [`GeneieError`], [`TranslationFailure`] and [`Result`]
//! - **Traits** — [`Sequence`], [`ContentAddressable`], [`Summarizable`]
//! - **Hashing** — SHA-256 content addressing
//! - **Memory mapping** — zero-copy file access (std feature only)

pub mod error;
pub mod hash;
pub mod traits;

#[cfg(feature = "std")]
pub mod mmap;

pub use error::{GeneieError, Result, TranslationFailure};
pub use traits::*;
