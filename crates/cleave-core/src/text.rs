//! `&str` adapters over the byte-level core.
//!
//! The generic core slices `&[u8]`; these wrappers carry the original `&str`
//! alongside it and re-slice by span, so pieces come back as `&str` without
//! copying and without `unsafe`.

use std::iter::FusedIterator;

use crate::partition::{EmptySeparator, Partition};
use crate::rsplit::RSplit;
use crate::split::Split;

/// Split `source` on `separator`, front to back, yielding `&str` pieces.
///
/// ```
/// let pieces: Vec<_> = cleave_core::split_str("a,b,,c", ",").unwrap().collect();
/// assert_eq!(pieces, ["a", "b", "", "c"]);
/// ```
///
/// # Errors
///
/// Returns [`EmptySeparator`] if `separator` is empty.
pub fn split_str<'h, 'n>(
    source: &'h str,
    separator: &'n str,
) -> Result<StrSplit<'h, 'n>, EmptySeparator> {
    let parts = Partition::new(source.as_bytes(), separator.as_bytes())?;
    Ok(StrSplit {
        source,
        inner: parts.forward(),
    })
}

/// Split `source` on `separator`, back to front, yielding `&str` pieces.
///
/// # Errors
///
/// Returns [`EmptySeparator`] if `separator` is empty.
pub fn rsplit_str<'h, 'n>(
    source: &'h str,
    separator: &'n str,
) -> Result<RStrSplit<'h, 'n>, EmptySeparator> {
    let parts = Partition::new(source.as_bytes(), separator.as_bytes())?;
    Ok(RStrSplit {
        source,
        inner: parts.backward(),
    })
}

/// Forward `&str` splitting iterator; see [`split_str`].
#[derive(Debug, Clone, PartialEq)]
pub struct StrSplit<'h, 'n> {
    source: &'h str,
    inner: Split<'h, 'n, u8>,
}

impl<'h, 'n> Iterator for StrSplit<'h, 'n> {
    type Item = &'h str;

    fn next(&mut self) -> Option<&'h str> {
        // Spans start and end at UTF-8 separator match offsets or at the
        // source's ends, all of which are char boundaries.
        self.inner.next_span().map(|span| &self.source[span])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for StrSplit<'_, '_> {}

/// Backward `&str` splitting iterator; see [`rsplit_str`].
#[derive(Debug, Clone, PartialEq)]
pub struct RStrSplit<'h, 'n> {
    source: &'h str,
    inner: RSplit<'h, 'n, u8>,
}

impl<'h, 'n> Iterator for RStrSplit<'h, 'n> {
    type Item = &'h str;

    fn next(&mut self) -> Option<&'h str> {
        self.inner.next_span().map(|span| &self.source[span])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for RStrSplit<'_, '_> {}
