#![no_main]
use geneie_seq::{splice, SeqView};
use libfuzzer_sys::fuzz_target;

// The first byte picks the symbol to delete; the rest is the strand.
fuzz_target!(|data: &[u8]| {
    let Some((&target, rest)) = data.split_first() else {
        return;
    };
    let expected: Vec<u8> = rest.iter().copied().filter(|&b| b != target).collect();

    let mut buf = rest.to_vec();
    let mut runs = |tail: &[u8]| {
        let start = tail.iter().position(|&b| b == target)?;
        Some(start..start + 1)
    };
    match splice(SeqView::new(&mut buf), &mut runs) {
        Ok(kept) => assert_eq!(kept.as_bytes(), &expected[..]),
        Err(e) => panic!("valid runs rejected: {e}"),
    }
});
