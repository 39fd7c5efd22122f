use thiserror::Error;

use crate::rsplit::RSplit;
use crate::search;
use crate::split::Split;

/// Error returned when a splitter is constructed with an empty separator.
///
/// An empty separator has no well-defined occurrence positions, so every
/// constructor rejects it up front rather than picking an arbitrary meaning
/// for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("separator must not be empty")]
pub struct EmptySeparator;

/// A borrowed source buffer paired with the separator that partitions it.
///
/// `Partition` owns nothing: it is two views (the `&'h [T]` source and the
/// `&'n [T]` separator) and is `Copy`. It defines a single partitioning of
/// the source; [`forward`](Partition::forward) and
/// [`backward`](Partition::backward) produce independent cursors over that
/// same partitioning, and both resolve their boundaries through the shared
/// search primitives on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition<'h, 'n, T> {
    source: &'h [T],
    separator: &'n [T],
}

impl<'h, 'n, T: PartialEq> Partition<'h, 'n, T> {
    /// Pair a source buffer with a separator.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySeparator`] if `separator` is empty.
    pub fn new(source: &'h [T], separator: &'n [T]) -> Result<Self, EmptySeparator> {
        if separator.is_empty() {
            return Err(EmptySeparator);
        }
        Ok(Partition { source, separator })
    }

    pub fn source(&self) -> &'h [T] {
        self.source
    }

    pub fn separator(&self) -> &'n [T] {
        self.separator
    }

    /// Iterate the pieces front to back.
    pub fn forward(self) -> Split<'h, 'n, T> {
        Split::new(self)
    }

    /// Iterate the pieces back to front.
    pub fn backward(self) -> RSplit<'h, 'n, T> {
        RSplit::new(self)
    }

    /// Offset of the first separator occurrence at or after `start`.
    pub(crate) fn boundary_after(&self, start: usize) -> Option<usize> {
        search::find(&self.source[start..], self.separator).map(|at| start + at)
    }

    /// Offset of the last separator occurrence lying entirely before `end`.
    pub(crate) fn boundary_before(&self, end: usize) -> Option<usize> {
        search::rfind(&self.source[..end], self.separator)
    }
}

impl<'h, 'n, T: PartialEq> IntoIterator for Partition<'h, 'n, T> {
    type Item = &'h [T];
    type IntoIter = Split<'h, 'n, T>;

    fn into_iter(self) -> Split<'h, 'n, T> {
        self.forward()
    }
}
