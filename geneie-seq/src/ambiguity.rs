//! IUPAC ambiguity algebra.
//!
//! Every nucleic symbol maps to a 4-bit presence mask over the bases it can
//! stand for: bit 0 = A, bit 1 = C, bit 2 = G, bit 3 = T/U. T and U are
//! synonyms and share a bit. OR-ing the masks of a group of symbols and
//! looking the result up in [`CANONICAL`] gives every code that could match
//! any of them.
//!
//! ```
//! use geneie_seq::ambiguity::{matches, valid_codes_for};
//!
//! assert_eq!(valid_codes_for(b"Y").symbols(), b"CTUY");
//! assert!(matches(b'Y', b'C'));
//! assert!(!matches(b'Y', b'A'));
//! ```

use std::fmt;
use std::ops::BitOr;

// ---------------------------------------------------------------------------
// Presence bits
// ---------------------------------------------------------------------------

pub const HAS_A: u8 = 1 << 0;
pub const HAS_C: u8 = 1 << 1;
pub const HAS_G: u8 = 1 << 2;
pub const HAS_TU: u8 = 1 << 3;

/// Presence mask for every byte; non-nucleic bytes (including `X` and `-`)
/// map to 0.
static MASKS: [u8; 256] = {
    let mut table = [0u8; 256];
    let codes: [(u8, u8); 16] = [
        (b'A', HAS_A),
        (b'C', HAS_C),
        (b'G', HAS_G),
        (b'T', HAS_TU),
        (b'U', HAS_TU),
        (b'R', HAS_A | HAS_G),
        (b'Y', HAS_C | HAS_TU),
        (b'K', HAS_G | HAS_TU),
        (b'M', HAS_A | HAS_C),
        (b'S', HAS_C | HAS_G),
        (b'W', HAS_A | HAS_TU),
        (b'B', HAS_C | HAS_G | HAS_TU),
        (b'D', HAS_A | HAS_G | HAS_TU),
        (b'H', HAS_A | HAS_C | HAS_TU),
        (b'V', HAS_A | HAS_C | HAS_G),
        (b'N', HAS_A | HAS_C | HAS_G | HAS_TU),
    ];
    let mut i = 0;
    while i < codes.len() {
        let (upper, mask) = codes[i];
        table[upper as usize] = mask;
        table[upper.to_ascii_lowercase() as usize] = mask;
        i += 1;
    }
    table
};

/// Canonical code-set literal for each of the 16 masks, indexed by mask.
pub const CANONICAL: [&[u8]; 16] = [
    b"",                 // none
    b"A",                // A
    b"C",                // C
    b"ACM",              // A,C
    b"G",                // G
    b"AGR",              // G,A
    b"CGS",              // G,C
    b"ACGMRSV",          // G,C,A
    b"TU",               // T/U
    b"ATUW",             // T/U,A
    b"CTUY",             // T/U,C
    b"ACTUMWYH",         // T/U,C,A
    b"GTUK",             // T/U,G
    b"AGTURWKD",         // T/U,G,A
    b"CGTUSYKB",         // T/U,G,C
    b"ACGTURYSWKMBDHVN", // T/U,G,C,A
];

/// Presence mask of one symbol, case-insensitive.
#[inline]
pub fn mask_of(symbol: u8) -> u8 {
    MASKS[symbol as usize]
}

// ---------------------------------------------------------------------------
// CodeSet
// ---------------------------------------------------------------------------

/// The set of symbols compatible with a group of ambiguity codes.
///
/// Stored as the 4-bit presence mask; exposed as the literal canonical
/// symbol set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeSet(u8);

impl CodeSet {
    /// The empty set.
    pub const EMPTY: CodeSet = CodeSet(0);

    /// Every nucleic code.
    pub const ANY: CodeSet = CodeSet(HAS_A | HAS_C | HAS_G | HAS_TU);

    /// Build from a presence mask. Bits above the low four are ignored.
    #[inline]
    pub const fn from_mask(mask: u8) -> Self {
        CodeSet(mask & 0x0F)
    }

    /// The presence mask.
    #[inline]
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// The canonical symbols, uppercase.
    #[inline]
    pub fn symbols(self) -> &'static [u8] {
        CANONICAL[self.0 as usize]
    }

    /// Whether `symbol` (any case) is in the set.
    pub fn contains(self, symbol: u8) -> bool {
        self.symbols().contains(&symbol.to_ascii_uppercase())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of symbols in the canonical set.
    pub fn len(self) -> usize {
        self.symbols().len()
    }

    /// Whether the set stands for exactly one base.
    pub fn is_unambiguous(self) -> bool {
        self.0.count_ones() == 1
    }
}

impl BitOr for CodeSet {
    type Output = CodeSet;

    fn bitor(self, rhs: CodeSet) -> CodeSet {
        CodeSet(self.0 | rhs.0)
    }
}

impl fmt::Display for CodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Canonical literals are ASCII.
        f.write_str(std::str::from_utf8(self.symbols()).unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Every code that could match any of `symbols`.
///
/// `"UC"` and `"Y"` both give `CTUY`; `"YR"` gives every ambiguity code.
/// Symbols with no nucleic meaning contribute nothing, so a group made only
/// of them yields [`CodeSet::EMPTY`].
pub fn valid_codes_for(symbols: &[u8]) -> CodeSet {
    CodeSet(symbols.iter().fold(0, |acc, &s| acc | mask_of(s)))
}

/// Whether `input` can stand in for `pattern`: equal (ignoring case), or a
/// member of the codes valid for `pattern`.
#[inline]
pub fn matches(pattern: u8, input: u8) -> bool {
    pattern.eq_ignore_ascii_case(&input) || CodeSet(mask_of(pattern)).contains(input)
}
