//! # cleave-core
//!
//! Lazy, allocation-free splitting of a borrowed buffer on a literal
//! separator, traversable forward or backward.
//!
//! Nothing is copied and nothing is owned: a [`Partition`] is a pair of
//! views (source, separator), and the iterators it hands out yield subslices
//! of the source, discovered one separator occurrence at a time.
//!
//! ## The Round-Trip Guarantee
//!
//! The most important property of this library is that **splitting loses
//! nothing**: rejoining the yielded pieces with the separator reproduces the
//! source exactly, including the empty pieces produced by leading, trailing,
//! or consecutive separators.
//!
//! ```
//! use cleave_core::split_str;
//!
//! let input = "\nalpha\n\nbeta\n";
//! let pieces: Vec<_> = split_str(input, "\n").unwrap().collect();
//!
//! assert_eq!(pieces, ["", "alpha", "", "beta", ""]);
//! assert_eq!(pieces.join("\n"), input);
//! ```
//!
//! ## Two Directions, One Partition
//!
//! Forward and backward traversal are independent cursors over the same
//! partition, not two ends of one shared iterator. Construct as many of
//! either as you like from one [`Partition`]; each advances on its own.
//!
//! ```
//! use cleave_core::rsplit_str;
//!
//! let pieces: Vec<_> = rsplit_str("abc\ndef\r\nghi\njkl", "\r\n").unwrap().collect();
//! assert_eq!(pieces, ["ghi\njkl", "abc\ndef"]);
//! ```
//!
//! One caveat: when occurrences of the separator overlap (`"aa"` in
//! `"aaa"`), each direction consumes the occurrence nearest its own starting
//! end, so the two directions can partition the source differently. For
//! separators that cannot overlap themselves the reversed backward sequence
//! always equals the forward sequence.
//!
//! ## Generic Elements
//!
//! Splitting is defined by element-wise equality over runs, not by text
//! decoding, so the core works over `&[T]` for any `T: PartialEq`: bytes,
//! UTF-16 code units, anything comparable.
//!
//! ```
//! use cleave_core::split;
//!
//! let wide: Vec<u16> = "abc\ndef".encode_utf16().collect();
//! let sep: Vec<u16> = "\n".encode_utf16().collect();
//! let pieces: Vec<&[u16]> = split(&wide, &sep).unwrap().collect();
//! assert_eq!(pieces.len(), 2);
//! ```
//!
//! The [`split_str`]/[`rsplit_str`] adapters wrap the byte-level core and
//! yield `&str` pieces for UTF-8 text.
//!
//! ## Empty Separators
//!
//! The separator must be non-empty; every constructor returns
//! [`EmptySeparator`] otherwise.
//!
//! ```
//! assert!(cleave_core::split_str("abc", "").is_err());
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! cleave-core/
//! ├── lib.rs        # Public API: split/rsplit constructors, re-exports
//! ├── partition.rs  # Partition (source + separator pair), EmptySeparator
//! ├── search.rs     # Shared find/rfind boundary primitives
//! ├── split.rs      # Split - forward iterator
//! ├── rsplit.rs     # RSplit - backward iterator
//! └── text.rs       # StrSplit/RStrSplit - &str adapters
//! ```

mod partition;
mod rsplit;
mod search;
mod split;
mod text;

pub use partition::{EmptySeparator, Partition};
pub use rsplit::RSplit;
pub use split::Split;
pub use text::{RStrSplit, StrSplit, rsplit_str, split_str};

/// Split `source` on `separator`, front to back.
///
/// # Errors
///
/// Returns [`EmptySeparator`] if `separator` is empty.
pub fn split<'h, 'n, T: PartialEq>(
    source: &'h [T],
    separator: &'n [T],
) -> Result<Split<'h, 'n, T>, EmptySeparator> {
    Ok(Partition::new(source, separator)?.forward())
}

/// Split `source` on `separator`, back to front.
///
/// # Errors
///
/// Returns [`EmptySeparator`] if `separator` is empty.
pub fn rsplit<'h, 'n, T: PartialEq>(
    source: &'h [T],
    separator: &'n [T],
) -> Result<RSplit<'h, 'n, T>, EmptySeparator> {
    Ok(Partition::new(source, separator)?.backward())
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    /// Render pieces one per line, debug-quoted so separators stay visible.
    fn render_pieces<'a>(pieces: impl Iterator<Item = &'a str>) -> String {
        let mut out = String::new();
        for piece in pieces {
            out.push_str(&format!("{piece:?}\n"));
        }
        out
    }

    #[test]
    fn snapshot_unix_lines() {
        let pieces = split_str("abc\ndef\nghi\njkl", "\n").unwrap();
        assert_snapshot!(render_pieces(pieces));
    }

    #[test]
    fn snapshot_empty_fields() {
        let pieces = split_str("\nabc\n\ndef\n", "\n").unwrap();
        assert_snapshot!(render_pieces(pieces));
    }

    #[test]
    fn snapshot_reverse_crlf() {
        let pieces = rsplit_str("abc\ndef\r\nghi\njkl", "\r\n").unwrap();
        assert_snapshot!(render_pieces(pieces));
    }
}
