//! In-place genetic sequence processing.
//!
//! Everything here works on borrowed, mutable windows ([`SeqView`]) over a
//! buffer the caller owns. Nothing allocates on the hot path:
//!
//! - **Alphabets** — [`NucleicAlphabet`], [`AminoAlphabet`], [`validate_any`]
//! - **Views** — [`SeqView`] with checked `index`/`truncate`/`split_at`
//! - **Ambiguity algebra** — IUPAC presence masks, [`valid_codes_for`], [`matches`]
//! - **Codon translation** — collapsed-pattern [`CodonTable`]s, [`translate_codon`]
//! - **Splicing** — run removal with in-place compaction via [`splice`]
//! - **Pipeline** — [`clean_whitespace`], 3:1 in-place [`encode`], [`transcribe`]
//! - **Owned storage** — [`OwnedSequence`]
//!
//! # Example
//!
//! ```
//! use geneie_seq::{clean_whitespace, encode, OwnedSequence};
//!
//! let mut seq = OwnedSequence::from_text("AUG UAU\n-UAA").unwrap();
//! let strand = clean_whitespace(seq.view_mut()).unwrap();
//! assert_eq!(strand, b"AUGUAU-UAA");
//!
//! // Translation halts at the gap; the rest is handed back untouched.
//! let pair = encode(strand);
//! assert_eq!(pair.translated, b"MY");
//! assert_eq!(pair.remainder, b"-UAA");
//! ```

pub mod alphabet;
pub mod ambiguity;
pub mod codon;
pub mod pipeline;
pub mod sequence;
pub mod splice;
pub mod view;

// Re-export alphabet types
pub use alphabet::{validate_any, Alphabet, AminoAlphabet, NucleicAlphabet, GAP, MASKED, STOP};

// Re-export the view type
pub use view::SeqView;

// Re-export the ambiguity algebra
pub use ambiguity::{matches, valid_codes_for, CodeSet};

// Re-export codon translation
pub use codon::{translate_codon, CodonTable, GeneticCodeId};

// Re-export the splice engine
pub use splice::{shift_left, splice, splice_detailed, RunsMatching, SpliceOutcome, Splicer};

// Re-export the pipeline
pub use pipeline::{
    clean_and_encode, clean_whitespace, encode, encode_with, reverse_transcribe, transcribe,
    EncodeOptions, EncodeStats, TranslationPair,
};

// Re-export owned storage
pub use sequence::OwnedSequence;
