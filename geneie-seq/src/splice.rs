//! In-place removal of discovered runs from a view.
//!
//! A [`Splicer`] looks at the unscanned suffix of a buffer and names the next
//! contiguous run to delete. [`splice`] asks for runs until the splicer has
//! none left, then closes every gap in a single forward pass: each byte that
//! survives is moved at most once, so the work is proportional to the kept
//! length rather than to `kept * runs`.
//!
//! All runs are collected before anything is moved. A splicer that names a
//! run outside the suffix it was shown fails with
//! [`GeneieError::ContractViolation`] and leaves the buffer untouched.
//!
//! ```
//! use geneie_seq::splice::splice;
//! use geneie_seq::SeqView;
//!
//! let mut buf = *b"GGGUGGGA";
//! // delete every G, one at a time
//! let mut each_g = |rest: &[u8]| rest.iter().position(|&b| b == b'G').map(|i| i..i + 1);
//! let kept = splice(SeqView::new(&mut buf), &mut each_g).unwrap();
//! assert_eq!(kept, b"UA");
//! ```

use std::ops::Range;

use geneie_core::{GeneieError, Result, Summarizable};

use crate::view::SeqView;

// ---------------------------------------------------------------------------
// Splicer
// ---------------------------------------------------------------------------

/// Strategy that finds the next run to delete.
pub trait Splicer {
    /// Return the next run to delete as a range into `rest`, or `None` when
    /// nothing more should be removed. An empty range also ends the scan.
    fn next_run(&mut self, rest: &[u8]) -> Option<Range<usize>>;
}

impl<F> Splicer for F
where
    F: FnMut(&[u8]) -> Option<Range<usize>>,
{
    fn next_run(&mut self, rest: &[u8]) -> Option<Range<usize>> {
        self(rest)
    }
}

/// Deletes maximal runs of bytes accepted by a predicate.
///
/// The run starts at the first accepted byte and extends while bytes keep
/// being accepted. Carries no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct RunsMatching<P>(pub P);

impl<P> Splicer for RunsMatching<P>
where
    P: Fn(u8) -> bool,
{
    fn next_run(&mut self, rest: &[u8]) -> Option<Range<usize>> {
        let start = rest.iter().position(|&b| (self.0)(b))?;
        let len = rest[start..].iter().take_while(|&&b| (self.0)(b)).count();
        Some(start..start + len)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// A deleted run, in absolute buffer offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: usize,
    end: usize,
}

/// Result of a splice, with bookkeeping.
#[derive(Debug)]
pub struct SpliceOutcome<'a> {
    /// The compacted view, starting at the original base.
    pub view: SeqView<'a>,
    /// Number of runs deleted.
    pub runs: usize,
    /// Total symbols deleted.
    pub removed: usize,
    /// Total symbols moved while compacting.
    pub moved: usize,
}

impl Summarizable for SpliceOutcome<'_> {
    fn summary(&self) -> String {
        format!(
            "spliced {} run(s), {} symbol(s) removed, {} kept, {} moved",
            self.runs,
            self.removed,
            self.view.len(),
            self.moved
        )
    }
}

/// Remove every run `splicer` finds and return the compacted view.
pub fn splice<'a, S>(view: SeqView<'a>, splicer: &mut S) -> Result<SeqView<'a>>
where
    S: Splicer + ?Sized,
{
    splice_detailed(view, splicer).map(|outcome| outcome.view)
}

/// [`splice`], also reporting how many runs and symbols were touched.
pub fn splice_detailed<'a, S>(view: SeqView<'a>, splicer: &mut S) -> Result<SpliceOutcome<'a>>
where
    S: Splicer + ?Sized,
{
    let buf = view.into_bytes();
    let runs = collect_runs(buf, splicer)?;

    let first = match runs.first() {
        Some(run) => run.start,
        None => {
            return Ok(SpliceOutcome {
                view: SeqView::new(buf),
                runs: 0,
                removed: 0,
                moved: 0,
            })
        }
    };

    // The prefix before the first run is already in place.
    let mut write = first;
    let mut moved = 0;
    for (i, run) in runs.iter().enumerate() {
        let keep_end = runs.get(i + 1).map_or(buf.len(), |next| next.start);
        moved += shift_left(buf, run.end..keep_end, write)?;
        write += keep_end - run.end;
    }

    let removed = buf.len() - write;
    Ok(SpliceOutcome {
        view: SeqView::new(&mut buf[..write]),
        runs: runs.len(),
        removed,
        moved,
    })
}

fn collect_runs<S>(buf: &[u8], splicer: &mut S) -> Result<Vec<Run>>
where
    S: Splicer + ?Sized,
{
    let mut runs = Vec::new();
    let mut cursor = 0;

    while cursor < buf.len() {
        let rest = &buf[cursor..];
        let range = match splicer.next_run(rest) {
            Some(range) => range,
            None => break,
        };
        if range.start > range.end || range.end > rest.len() {
            return Err(GeneieError::ContractViolation(format!(
                "splicer returned run {}..{} for a suffix of length {}",
                range.start,
                range.end,
                rest.len()
            )));
        }
        if range.is_empty() {
            break;
        }
        runs.push(Run {
            start: cursor + range.start,
            end: cursor + range.end,
        });
        cursor += range.end;
    }

    Ok(runs)
}

/// Move `buf[src]` so it starts at `dest`, where `dest <= src.start`.
///
/// Source and destination may overlap. Returns the number of bytes moved
/// (0 when the range is empty or already in place).
pub fn shift_left(buf: &mut [u8], src: Range<usize>, dest: usize) -> Result<usize> {
    if src.start > src.end || src.end > buf.len() || dest > src.start {
        return Err(GeneieError::ContractViolation(format!(
            "cannot shift {}..{} to {} in a buffer of length {}",
            src.start,
            src.end,
            dest,
            buf.len()
        )));
    }
    if dest == src.start || src.is_empty() {
        return Ok(0);
    }
    let len = src.end - src.start;
    buf.copy_within(src, dest);
    Ok(len)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn strand(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'U'), Just(b'-')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn matches_filter(seq in strand(200)) {
            let expected: Vec<u8> = seq.iter().copied().filter(|&b| b != b'-').collect();
            let mut buf = seq.clone();
            let mut gaps = RunsMatching(|b: u8| b == b'-');
            let outcome = splice_detailed(SeqView::new(&mut buf), &mut gaps).unwrap();
            prop_assert_eq!(outcome.view.as_bytes(), &expected[..]);
            prop_assert_eq!(outcome.removed, seq.len() - expected.len());
            prop_assert!(outcome.moved <= expected.len());
        }

        #[test]
        fn no_runs_is_identity(seq in proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'U')],
            0..100,
        )) {
            let mut buf = seq.clone();
            let mut gaps = RunsMatching(|b: u8| b == b'-');
            let kept = splice(SeqView::new(&mut buf), &mut gaps).unwrap();
            prop_assert!(kept.equals(&seq));
        }
    }
}
