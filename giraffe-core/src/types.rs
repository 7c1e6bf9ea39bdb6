use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-indexed base-pair position. Signed so callers may pass through whatever
/// the search engine reports, including coordinates past a circular origin.
pub type Position = i64;

/// Orientation of a match relative to the query's forward strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Orientation implied by the ordering of the subject coordinates.
    /// A single-base match (`start == end`) reads as forward.
    pub fn from_subject(subject_start: Position, subject_end: Position) -> Self {
        if subject_start > subject_end {
            Strand::Reverse
        } else {
            Strand::Forward
        }
    }
}

impl From<bool> for Strand {
    fn from(forward: bool) -> Self {
        if forward {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }
}

impl From<Strand> for bool {
    fn from(strand: Strand) -> Self {
        matches!(strand, Strand::Forward)
    }
}

impl From<Strand> for char {
    fn from(strand: Strand) -> Self {
        match strand {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Start and end on one sequence, kept exactly as supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Start past end: on a circular sequence the span crosses the origin.
    pub fn wraps_origin(&self) -> bool {
        self.start > self.end
    }

    /// Either end lies beyond `length`, the convention for a match that runs
    /// across the origin of a circular sequence without modulo reduction.
    pub fn exceeds(&self, length: Position) -> bool {
        self.start > length || self.end > length
    }
}

/// A numeric alignment statistic (evalue, identities) kept in the form it
/// was supplied: an integer stays an integer, a float stays a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Integer(i64),
    Float(f64),
}

impl Score {
    pub fn as_f64(self) -> f64 {
        match self {
            Score::Integer(n) => n as f64,
            Score::Float(x) => x,
        }
    }
}

impl From<i64> for Score {
    fn from(n: i64) -> Self {
        Score::Integer(n)
    }
}

impl From<i32> for Score {
    fn from(n: i32) -> Self {
        Score::Integer(n as i64)
    }
}

impl From<u32> for Score {
    fn from(n: u32) -> Self {
        Score::Integer(n as i64)
    }
}

impl From<f64> for Score {
    fn from(x: f64) -> Self {
        Score::Float(x)
    }
}
