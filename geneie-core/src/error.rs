//! Structured error types for the geneie workspace.

use thiserror::Error;

/// Why a single codon could not be translated.
///
/// The boolean translator API collapses all of these into `false`; the
/// `Result`-returning API surfaces them individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TranslationFailure {
    /// Fewer than three symbols were available.
    #[error("codon needs 3 symbols, got {len}")]
    CodonTooShort { len: usize },

    /// No room to write the amino acid.
    #[error("output slot is empty")]
    OutputTooSmall,

    /// A gap symbol (`-`) sits inside the codon.
    #[error("gap at codon position {position}")]
    Gap { position: usize },

    /// A masked symbol (`X`) sits inside the codon.
    #[error("masked symbol at codon position {position}")]
    Masked { position: usize },

    /// No table entry matches every position of the codon.
    #[error("codon does not resolve to a single amino acid")]
    Unresolved,
}

/// Unified error type for all geneie operations.
#[derive(Debug, Error)]
pub enum GeneieError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A symbol outside the recognised alphabet.
    #[error("invalid {alphabet} symbol '{}' (0x{symbol:02X}) at position {position}", *symbol as char)]
    InvalidAlphabet {
        alphabet: &'static str,
        symbol: u8,
        position: usize,
    },

    /// Codon translation failed.
    #[error("translation failed: {0}")]
    Translation(#[from] TranslationFailure),

    /// A caller broke an operation's precondition (bad index, malformed run).
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the geneie workspace.
pub type Result<T> = std::result::Result<T, GeneieError>;
