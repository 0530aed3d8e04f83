#![no_main]
use geneie_seq::{clean_whitespace, encode, SeqView};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut buf = data.to_vec();
    let Ok(strand) = clean_whitespace(SeqView::new(&mut buf)) else {
        panic!("whitespace cleaning rejected its own runs");
    };
    let len = strand.len();
    let pair = encode(strand);
    assert_eq!(pair.translated.len(), pair.stats.codons_read);
    assert_eq!(pair.stats.codons_read * 3 + pair.remainder.len(), len);
});
