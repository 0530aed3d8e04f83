//! Alphabet definitions for symbol validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid uppercase bytes. Membership checks are
//! case-insensitive. String-level validation tolerates embedded whitespace,
//! which is stripped later by [`clean_whitespace`](crate::pipeline::clean_whitespace).

use geneie_core::{GeneieError, Result};

/// The gap symbol.
pub const GAP: u8 = b'-';

/// The masked-position symbol.
pub const MASKED: u8 = b'X';

/// The STOP marker written by the translator.
pub const STOP: u8 = b'*';

/// Trait for symbol alphabets.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "nucleic").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte is valid, ignoring case.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b.to_ascii_uppercase())
    }

    /// Check every byte of `bytes`, allowing whitespace between symbols.
    ///
    /// Returns the first offending byte and its position.
    fn validate(bytes: &[u8]) -> Result<()> {
        match bytes
            .iter()
            .position(|&b| !(Self::is_valid(b) || is_whitespace(b)))
        {
            Some(position) => Err(GeneieError::InvalidAlphabet {
                alphabet: Self::NAME,
                symbol: bytes[position],
                position,
            }),
            None => Ok(()),
        }
    }
}

/// IUPAC nucleic alphabet plus masked and gap: `ACGTURYKMSWBDHVNX-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NucleicAlphabet;

impl Alphabet for NucleicAlphabet {
    const NAME: &'static str = "nucleic";
    const VALID_BYTES: &'static [u8] = b"ACGTURYKMSWBDHVNX-";
}

/// The 20 standard amino acids plus the STOP marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AminoAlphabet;

impl Alphabet for AminoAlphabet {
    const NAME: &'static str = "amino";
    const VALID_BYTES: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY*";
}

/// C `isspace` over ASCII, which unlike [`u8::is_ascii_whitespace`] also
/// covers vertical tab.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Validate `bytes` as either a nucleic or an amino strand.
///
/// On failure the error reports the nucleic alphabet's first offender.
pub fn validate_any(bytes: &[u8]) -> Result<()> {
    match NucleicAlphabet::validate(bytes) {
        Ok(()) => Ok(()),
        Err(nucleic_err) => AminoAlphabet::validate(bytes).map_err(|_| nucleic_err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUCLEIC: &[u8] = b"ACGTURYKMSWBDHVNX-";

    #[test]
    fn nucleic_accepts_every_code() {
        for &b in NUCLEIC {
            assert!(NucleicAlphabet::is_valid(b), "should accept {}", b as char);
        }
    }

    #[test]
    fn nucleic_is_case_insensitive() {
        for &b in b"acgturykmswbdhvnx" {
            assert!(NucleicAlphabet::is_valid(b), "should accept {}", b as char);
        }
    }

    #[test]
    fn nucleic_rejects_other_printables() {
        for b in b' '..b'~' {
            if !NUCLEIC.contains(&b.to_ascii_uppercase()) {
                assert!(!NucleicAlphabet::is_valid(b), "should reject {}", b as char);
            }
        }
    }

    #[test]
    fn amino_accepts_standard_set_and_stop() {
        for &b in b"ACDEFGHIKLMNPQRSTVWY*" {
            assert!(AminoAlphabet::is_valid(b), "should accept {}", b as char);
        }
        assert!(!AminoAlphabet::is_valid(b'B'));
        assert!(!AminoAlphabet::is_valid(b'-'));
    }

    #[test]
    fn validate_tolerates_whitespace() {
        assert!(NucleicAlphabet::validate(b"ACGTRY\nKMSWBD  HVNX-").is_ok());
        assert!(NucleicAlphabet::validate(b"\t\x0b\x0c\r").is_ok());
    }

    #[test]
    fn validate_reports_first_offender() {
        match NucleicAlphabet::validate(b"Camel") {
            Err(GeneieError::InvalidAlphabet {
                alphabet,
                symbol,
                position,
            }) => {
                assert_eq!(alphabet, "nucleic");
                assert_eq!(symbol, b'e');
                assert_eq!(position, 3);
            }
            other => panic!("expected InvalidAlphabet, got {:?}", other),
        }
    }

    #[test]
    fn validate_any_accepts_either_alphabet() {
        assert!(validate_any(b"AUGUAU").is_ok());
        assert!(validate_any(b"MEFQ*").is_ok());
        assert!(validate_any(b"AUG1").is_err());
    }
}
