//! In-place whitespace cleaning, codon-to-amino encoding and transcription.
//!
//! The encoder condenses a strand three symbols to one inside its own
//! buffer. The write cursor can never overtake the read cursor, so amino
//! acids are written over codons that have already been read and no scratch
//! buffer is needed. The strand must be free of whitespace; run
//! [`clean_whitespace`] first.
//!
//! ```
//! use geneie_seq::pipeline::{clean_whitespace, encode};
//! use geneie_seq::SeqView;
//!
//! let mut buf = b"AUG UAU\n-UAA".to_vec();
//! let strand = clean_whitespace(SeqView::from(&mut buf)).unwrap();
//! let pair = encode(strand);
//! assert_eq!(pair.translated, b"MY");
//! assert_eq!(pair.remainder, b"-UAA");
//! ```

use geneie_core::{Result, Summarizable, TranslationFailure};

use crate::alphabet::{is_whitespace, STOP};
use crate::codon::{CodonTable, GeneticCodeId, CODON_LEN};
use crate::splice::{splice, RunsMatching};
use crate::view::SeqView;

// ---------------------------------------------------------------------------
// Whitespace
// ---------------------------------------------------------------------------

/// Remove every whitespace run from `view`, compacting in place.
///
/// Idempotent: cleaning an already clean view returns it unchanged.
pub fn clean_whitespace(view: SeqView<'_>) -> Result<SeqView<'_>> {
    splice(view, &mut RunsMatching(is_whitespace))
}

// ---------------------------------------------------------------------------
// Transcription
// ---------------------------------------------------------------------------

/// Rewrite thymine as uracil in place (`T→U`, `t→u`). Returns how many
/// symbols changed.
pub fn transcribe(codes: &mut [u8]) -> usize {
    swap_symbol(codes, b'T', b'U')
}

/// Rewrite uracil as thymine in place (`U→T`, `u→t`). Returns how many
/// symbols changed.
pub fn reverse_transcribe(codes: &mut [u8]) -> usize {
    swap_symbol(codes, b'U', b'T')
}

fn swap_symbol(codes: &mut [u8], from: u8, to: u8) -> usize {
    let lower_from = from.to_ascii_lowercase();
    let mut changed = 0;
    for b in codes.iter_mut() {
        if *b == from {
            *b = to;
            changed += 1;
        } else if *b == lower_from {
            *b = to.to_ascii_lowercase();
            changed += 1;
        }
    }
    changed
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Parameters for [`encode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeOptions {
    /// Genetic code to translate with (default: Standard).
    pub code: GeneticCodeId,
    /// Stop after writing the first STOP (default: true).
    pub halt_on_stop: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            code: GeneticCodeId::Standard,
            halt_on_stop: true,
        }
    }
}

/// What an encode pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeStats {
    /// Codons consumed from the strand.
    pub codons_read: usize,
    /// Symbols written to the translated prefix (equals `codons_read`).
    pub aminos_written: usize,
    /// Whether the pass wrote a STOP.
    pub hit_stop: bool,
    /// Why translation stopped, when it stopped on an untranslatable codon.
    /// `None` when the strand was used up exactly or a STOP halted the pass.
    pub halted_by: Option<TranslationFailure>,
}

/// The two views produced by one encode pass, over the same buffer.
///
/// Symbols between the end of `translated` and the start of `remainder` are
/// left in an unspecified state.
#[derive(Debug)]
pub struct TranslationPair<'a> {
    /// Amino acids written over the front of the strand.
    pub translated: SeqView<'a>,
    /// The strand from the first codon that was not consumed.
    pub remainder: SeqView<'a>,
    pub stats: EncodeStats,
}

impl Summarizable for TranslationPair<'_> {
    fn summary(&self) -> String {
        let mut line = format!(
            "{} codon(s) translated, {} symbol(s) remaining",
            self.stats.codons_read,
            self.remainder.len()
        );
        if self.stats.hit_stop {
            line.push_str(", stopped at STOP");
        } else if let Some(reason) = self.stats.halted_by {
            line.push_str(&format!(", halted: {}", reason));
        }
        line
    }
}

/// Translate `strand` in place with the standard code, halting after the
/// first STOP or untranslatable codon.
pub fn encode(strand: SeqView<'_>) -> TranslationPair<'_> {
    encode_with(strand, &EncodeOptions::default())
}

/// Translate `strand` in place.
pub fn encode_with<'a>(strand: SeqView<'a>, options: &EncodeOptions) -> TranslationPair<'a> {
    let table = CodonTable::from_id(options.code);
    let buf = strand.into_bytes();

    let mut read = 0;
    let mut write = 0;
    let mut stats = EncodeStats::default();

    while read < buf.len() {
        let rest = &buf[read..];
        if rest.len() < CODON_LEN {
            stats.halted_by = Some(TranslationFailure::CodonTooShort { len: rest.len() });
            break;
        }
        // write <= read, and the slot may be the codon's own first symbol.
        let codon = [rest[0], rest[1], rest[2]];
        let amino = match table.translate(&codon) {
            Ok(amino) => amino,
            Err(failure) => {
                stats.halted_by = Some(failure);
                break;
            }
        };

        buf[write] = amino;
        write += 1;
        read += CODON_LEN;

        if amino == STOP {
            stats.hit_stop = true;
            if options.halt_on_stop {
                break;
            }
        }
    }

    stats.codons_read = write;
    stats.aminos_written = write;

    let (head, tail) = buf.split_at_mut(read);
    TranslationPair {
        translated: SeqView::new(&mut head[..write]),
        remainder: SeqView::new(tail),
        stats,
    }
}

/// Strip whitespace from `strand`, then [`encode`] it.
pub fn clean_and_encode(strand: SeqView<'_>) -> Result<TranslationPair<'_>> {
    Ok(encode(clean_whitespace(strand)?))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'U')],
            0..=max_len,
        )
    }

    fn spaced(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'U'), Just(b' '), Just(b'\n')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn matches_copying_translation(seq in rna(300)) {
            // Reference: translate from an untouched copy, stopping after STOP.
            let table = CodonTable::standard();
            let mut expected = Vec::new();
            for codon in seq.chunks_exact(3) {
                let amino = table.translate(codon).unwrap();
                expected.push(amino);
                if amino == STOP {
                    break;
                }
            }

            let mut buf = seq.clone();
            let pair = encode(SeqView::new(&mut buf));
            prop_assert_eq!(pair.translated.as_bytes(), &expected[..]);
            let consumed = expected.len() * 3;
            prop_assert_eq!(pair.remainder.as_bytes(), &seq[consumed..]);
        }

        #[test]
        fn cleaning_is_idempotent(seq in spaced(200)) {
            let mut buf = seq.clone();
            let once = clean_whitespace(SeqView::new(&mut buf)).unwrap();
            let snapshot = once.as_bytes().to_vec();
            let twice = clean_whitespace(once).unwrap();
            prop_assert_eq!(twice.as_bytes(), &snapshot[..]);
            prop_assert!(!snapshot.iter().any(|&b| is_whitespace(b)));
        }
    }
}
