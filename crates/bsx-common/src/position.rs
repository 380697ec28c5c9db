//! Line/column positions and ranges.
//!
//! Lines and columns are zero-based, matching the source map format and the
//! positions the lexer attaches to tokens.

use serde::{Deserialize, Serialize};
use std::cmp::{max, min};
use std::fmt;

/// A zero-based line/column location in a source file.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open source range. `start <= end` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "range start {start} is after end {end}");
        Range { start, end }
    }

    pub fn from_coords(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Range::new(
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        )
    }

    /// Empty range at a single position.
    pub const fn at(position: Position) -> Self {
        Range {
            start: position,
            end: position,
        }
    }

    /// Smallest range covering both `self` and `other`.
    pub fn cover(self, other: Range) -> Range {
        Range {
            start: min(self.start, other.start),
            end: max(self.end, other.end),
        }
    }

    /// Smallest range covering every range in `ranges`, or `None` when empty.
    pub fn cover_all<I>(ranges: I) -> Option<Range>
    where
        I: IntoIterator<Item = Range>,
    {
        ranges.into_iter().reduce(Range::cover)
    }

    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

/// Two ranges "touch" when one ends on the line the other starts on.
///
/// Used to keep a trailing comment on the same output line as the construct
/// it follows.
pub fn lines_touch(a: &Range, b: &Range) -> bool {
    a.end.line == b.start.line || b.end.line == a.start.line
}
