//! Codon translation against ordered, ambiguity-aware pattern tables.
//!
//! A table is a list of `(pattern, amino)` pairs where the patterns are
//! already collapsed with IUPAC codes (`CUN → L`, `AGY → S`, ...). A codon
//! matches an entry when each of its three symbols equals or
//! [ambiguity-matches](crate::ambiguity::matches) the pattern symbol at the
//! same position. Entries are tried in declared order and the first match
//! wins.
//!
//! STOP is a successful translation to [`STOP`]; callers decide whether it
//! ends a reading frame.
//!
//! Two genetic codes are provided:
//!
//! - [`GeneticCodeId::Standard`] (NCBI table 1)
//! - [`GeneticCodeId::VertebrateMitochondrial`] (NCBI table 2): UGA=Trp,
//!   AGR=Stop, AUA=Met

use geneie_core::TranslationFailure;

use crate::alphabet::{GAP, MASKED, STOP};
use crate::ambiguity::matches;

/// Number of symbols in a codon.
pub const CODON_LEN: usize = 3;

/// One row of a codon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonPattern {
    pub pattern: [u8; CODON_LEN],
    pub amino: u8,
}

impl CodonPattern {
    const fn new(pattern: &[u8; CODON_LEN], amino: u8) -> Self {
        Self {
            pattern: *pattern,
            amino,
        }
    }

    /// Whether every position of `codon` matches this pattern.
    #[inline]
    pub fn matches(&self, codon: &[u8]) -> bool {
        self.pattern
            .iter()
            .zip(codon)
            .all(|(&p, &c)| matches(p, c))
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

// Declared order is the tie-break order.

const STANDARD: [CodonPattern; 25] = [
    CodonPattern::new(b"UUY", b'F'),
    CodonPattern::new(b"UUR", b'L'),
    CodonPattern::new(b"CUN", b'L'),
    CodonPattern::new(b"UCN", b'S'),
    CodonPattern::new(b"AGY", b'S'),
    CodonPattern::new(b"UAY", b'Y'),
    CodonPattern::new(b"UAR", STOP),
    CodonPattern::new(b"UGA", STOP),
    CodonPattern::new(b"UGY", b'C'),
    CodonPattern::new(b"UGG", b'W'),
    CodonPattern::new(b"CCN", b'P'),
    CodonPattern::new(b"CAY", b'H'),
    CodonPattern::new(b"CAR", b'Q'),
    CodonPattern::new(b"CGN", b'R'),
    CodonPattern::new(b"AGR", b'R'),
    CodonPattern::new(b"AUH", b'I'),
    CodonPattern::new(b"AUG", b'M'),
    CodonPattern::new(b"ACN", b'T'),
    CodonPattern::new(b"AAY", b'N'),
    CodonPattern::new(b"AAR", b'K'),
    CodonPattern::new(b"GUN", b'V'),
    CodonPattern::new(b"GCN", b'A'),
    CodonPattern::new(b"GAY", b'D'),
    CodonPattern::new(b"GAR", b'E'),
    CodonPattern::new(b"GGN", b'G'),
];

const VERTEBRATE_MITOCHONDRIAL: [CodonPattern; 24] = [
    CodonPattern::new(b"UUY", b'F'),
    CodonPattern::new(b"UUR", b'L'),
    CodonPattern::new(b"CUN", b'L'),
    CodonPattern::new(b"UCN", b'S'),
    CodonPattern::new(b"AGY", b'S'),
    CodonPattern::new(b"UAY", b'Y'),
    CodonPattern::new(b"UAR", STOP),
    CodonPattern::new(b"AGR", STOP),
    CodonPattern::new(b"UGY", b'C'),
    CodonPattern::new(b"UGR", b'W'),
    CodonPattern::new(b"CCN", b'P'),
    CodonPattern::new(b"CAY", b'H'),
    CodonPattern::new(b"CAR", b'Q'),
    CodonPattern::new(b"CGN", b'R'),
    CodonPattern::new(b"AUY", b'I'),
    CodonPattern::new(b"AUR", b'M'),
    CodonPattern::new(b"ACN", b'T'),
    CodonPattern::new(b"AAY", b'N'),
    CodonPattern::new(b"AAR", b'K'),
    CodonPattern::new(b"GUN", b'V'),
    CodonPattern::new(b"GCN", b'A'),
    CodonPattern::new(b"GAY", b'D'),
    CodonPattern::new(b"GAR", b'E'),
    CodonPattern::new(b"GGN", b'G'),
];

/// NCBI genetic code table identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneticCodeId {
    #[default]
    Standard = 1,
    VertebrateMitochondrial = 2,
}

// ---------------------------------------------------------------------------
// CodonTable
// ---------------------------------------------------------------------------

/// An ordered codon table.
///
/// Use [`CodonTable::from_id`] or [`CodonTable::standard`] to create.
#[derive(Debug, Clone, Copy)]
pub struct CodonTable {
    id: GeneticCodeId,
    name: &'static str,
    entries: &'static [CodonPattern],
}

impl CodonTable {
    /// The table for an NCBI genetic code.
    pub fn from_id(id: GeneticCodeId) -> Self {
        match id {
            GeneticCodeId::Standard => Self {
                id,
                name: "Standard",
                entries: &STANDARD,
            },
            GeneticCodeId::VertebrateMitochondrial => Self {
                id,
                name: "Vertebrate Mitochondrial",
                entries: &VERTEBRATE_MITOCHONDRIAL,
            },
        }
    }

    /// The standard genetic code (NCBI table 1).
    pub fn standard() -> Self {
        Self::from_id(GeneticCodeId::Standard)
    }

    /// Table identifier.
    pub fn id(&self) -> GeneticCodeId {
        self.id
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// The entries in match order.
    pub fn entries(&self) -> &'static [CodonPattern] {
        self.entries
    }

    /// The first entry matched by the first three symbols of `codon`.
    pub fn matching_entry(&self, codon: &[u8]) -> Option<&'static CodonPattern> {
        if codon.len() < CODON_LEN {
            return None;
        }
        self.entries.iter().find(|entry| entry.matches(codon))
    }

    /// Translate the first three symbols of `codon` to an amino acid (or
    /// [`STOP`]).
    pub fn translate(&self, codon: &[u8]) -> Result<u8, TranslationFailure> {
        if codon.len() < CODON_LEN {
            return Err(TranslationFailure::CodonTooShort { len: codon.len() });
        }
        let codon = &codon[..CODON_LEN];

        // No pattern accepts either symbol; report which one got in the way.
        for (position, &symbol) in codon.iter().enumerate() {
            if symbol == GAP {
                return Err(TranslationFailure::Gap { position });
            }
            if symbol.eq_ignore_ascii_case(&MASKED) {
                return Err(TranslationFailure::Masked { position });
            }
        }

        self.matching_entry(codon)
            .map(|entry| entry.amino)
            .ok_or(TranslationFailure::Unresolved)
    }

    /// Translate `codon` and write the result to `output[0]`.
    ///
    /// `output` is left untouched on failure.
    pub fn translate_into(&self, codon: &[u8], output: &mut [u8]) -> Result<u8, TranslationFailure> {
        if codon.len() < CODON_LEN {
            return Err(TranslationFailure::CodonTooShort { len: codon.len() });
        }
        let slot = output.first_mut().ok_or(TranslationFailure::OutputTooSmall)?;
        let amino = self.translate(codon)?;
        *slot = amino;
        Ok(amino)
    }

    /// Whether `codon` translates to STOP in this table.
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        self.translate(codon) == Ok(STOP)
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

// ---------------------------------------------------------------------------
// Flag-style free functions (standard code)
// ---------------------------------------------------------------------------

/// Translate one codon with the standard code, writing the amino acid to
/// `output[0]`.
///
/// Returns `false` when the codon is shorter than three symbols, `output`
/// is empty, or the codon does not resolve to a single table entry (gaps
/// and masked symbols never do). `output` is unchanged on failure. Use
/// [`CodonTable::translate`] to learn why a codon failed.
pub fn translate_codon(codon: &[u8], output: &mut [u8]) -> bool {
    CodonTable::standard().translate_into(codon, output).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Alphabet, AminoAlphabet};
    use crate::ambiguity::valid_codes_for;

    /// NCBI table 1 in AAA, AAC, AAG, AAT, ACA, ... order (A, C, G, T).
    const NCBI_TABLE1: &[u8; 64] =
        b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

    fn concrete_codons(bases: &[u8; 4]) -> impl Iterator<Item = [u8; 3]> + '_ {
        (0..64).map(move |i| [bases[i >> 4], bases[(i >> 2) & 3], bases[i & 3]])
    }

    #[test]
    fn standard_agrees_with_ncbi_table1() {
        let table = CodonTable::standard();
        for (i, codon) in concrete_codons(b"ACGU").enumerate() {
            assert_eq!(
                table.translate(&codon),
                Ok(NCBI_TABLE1[i]),
                "codon {}",
                String::from_utf8_lossy(&codon)
            );
        }
    }

    #[test]
    fn dna_codons_translate_like_rna() {
        let table = CodonTable::standard();
        for (rna, dna) in concrete_codons(b"ACGU").zip(concrete_codons(b"ACGT")) {
            assert_eq!(table.translate(&rna), table.translate(&dna));
        }
    }

    #[test]
    fn every_pattern_instance_translates_to_its_amino() {
        for id in [GeneticCodeId::Standard, GeneticCodeId::VertebrateMitochondrial] {
            let table = CodonTable::from_id(id);
            for entry in table.entries() {
                let [p0, p1, p2] = entry.pattern;
                for &a in valid_codes_for(&[p0]).symbols() {
                    for &b in valid_codes_for(&[p1]).symbols() {
                        for &c in valid_codes_for(&[p2]).symbols() {
                            let codon = [a, b, c];
                            assert_eq!(
                                table.translate(&codon),
                                Ok(entry.amino),
                                "{:?}: {} against {}",
                                id,
                                String::from_utf8_lossy(&codon),
                                String::from_utf8_lossy(&entry.pattern)
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn ambiguous_codons_that_collapse() {
        let table = CodonTable::standard();
        assert_eq!(table.translate(b"CUN"), Ok(b'L'));
        assert_eq!(table.translate(b"AUH"), Ok(b'I'));
        assert_eq!(table.translate(b"UAR"), Ok(STOP));
        assert_eq!(table.translate(b"GGN"), Ok(b'G'));
        assert_eq!(table.translate(b"uuy"), Ok(b'F'));
    }

    #[test]
    fn ambiguous_codons_that_do_not_collapse() {
        let table = CodonTable::standard();
        for codon in [b"UUN", b"AUN", b"AGN", b"YUG", b"NNN", b"UGR"] {
            assert_eq!(
                table.translate(codon),
                Err(TranslationFailure::Unresolved),
                "{}",
                String::from_utf8_lossy(codon)
            );
        }
    }

    #[test]
    fn gaps_and_masks_always_fail() {
        let table = CodonTable::standard();
        assert_eq!(table.translate(b"-UG"), Err(TranslationFailure::Gap { position: 0 }));
        assert_eq!(table.translate(b"AU-"), Err(TranslationFailure::Gap { position: 2 }));
        assert_eq!(table.translate(b"AXG"), Err(TranslationFailure::Masked { position: 1 }));
        assert_eq!(table.translate(b"AUx"), Err(TranslationFailure::Masked { position: 2 }));

        let mut out = [0u8; 1];
        for codon in [b"-AA", b"A-A", b"AA-", b"XAA", b"AXA", b"AAX"] {
            assert!(!translate_codon(codon, &mut out));
        }
    }

    #[test]
    fn short_codon_or_output_fails_without_writing() {
        let mut out = [b'?'];
        assert!(!translate_codon(b"AU", &mut out));
        assert_eq!(out, [b'?']);

        let mut empty: [u8; 0] = [];
        assert!(!translate_codon(b"AUG", &mut empty));
        assert_eq!(
            CodonTable::standard().translate_into(b"AUG", &mut empty),
            Err(TranslationFailure::OutputTooSmall)
        );
        assert_eq!(
            CodonTable::standard().translate(b""),
            Err(TranslationFailure::CodonTooShort { len: 0 })
        );
    }

    #[test]
    fn translate_codon_writes_first_slot_only() {
        let mut out = *b"??";
        assert!(translate_codon(b"AUGCCC", &mut out));
        assert_eq!(&out, b"M?");
    }

    #[test]
    fn vertebrate_mito_differences() {
        let table = CodonTable::from_id(GeneticCodeId::VertebrateMitochondrial);
        assert_eq!(table.name(), "Vertebrate Mitochondrial");
        assert_eq!(table.translate(b"UGA"), Ok(b'W'));
        assert_eq!(table.translate(b"AUA"), Ok(b'M'));
        assert_eq!(table.translate(b"AUU"), Ok(b'I'));
        assert!(table.is_stop(b"AGA"));
        assert!(table.is_stop(b"AGG"));
        assert!(!CodonTable::standard().is_stop(b"AGA"));
    }

    #[test]
    fn every_table_amino_is_in_the_amino_alphabet() {
        for id in [GeneticCodeId::Standard, GeneticCodeId::VertebrateMitochondrial] {
            for entry in CodonTable::from_id(id).entries() {
                assert!(AminoAlphabet::is_valid(entry.amino));
            }
        }
    }
}
