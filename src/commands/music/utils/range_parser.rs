//! Expands the hyphenated range syntax accepted by the `remove` command
//! (`2-5`, `3-`, `-4`) into queue indices.
//!
//! Plain integers are not ranges and are left for [`super::index_set`] to pick up as literals.

use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Matches `<from>-<to>`, `<from>-` and `-<to>`. Both sides are optional here so that a single
/// pattern covers the three forms; [`RangeExpression::parse`] rejects the bare `-`.
static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<from>[0-9]*)-(?<to>[0-9]*)$").expect("range pattern is a valid regex")
});

/// One hyphenated range token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeExpression {
    /// `from-to`, both ends inclusive.
    Closed { from: usize, to: usize },
    /// `from-`, runs to the end of the queue.
    From { from: usize },
    /// `-to`, starts at the first removable position.
    UpTo { to: usize },
}

impl RangeExpression {
    /// Parses a single token. Returns `None` for anything that is not a well-formed range,
    /// including numbers too large for `usize` and inverted ranges such as `5-2`.
    pub fn parse(token: &str) -> Option<Self> {
        let captures = RANGE_PATTERN.captures(token)?;
        let from = captures.name("from").map(|m| m.as_str()).unwrap_or_default();
        let to = captures.name("to").map(|m| m.as_str()).unwrap_or_default();

        match (from.is_empty(), to.is_empty()) {
            (false, false) => {
                let from = from.parse().ok()?;
                let to = to.parse().ok()?;
                (from <= to).then_some(Self::Closed { from, to })
            }
            (false, true) => Some(Self::From {
                from: from.parse().ok()?,
            }),
            (true, false) => Some(Self::UpTo {
                to: to.parse().ok()?,
            }),
            (true, true) => None,
        }
    }

    /// The indices this expression covers for a queue of `queue_len` items.
    ///
    /// `-to` starts at 1 while something is playing so the now-playing slot is not implied.
    /// Returns `None` when nothing is covered.
    pub fn expand(&self, queue_len: usize, playing: bool) -> Option<RangeInclusive<usize>> {
        match *self {
            Self::Closed { from, to } => Some(from..=to),
            Self::From { from } => {
                let last = queue_len.checked_sub(1)?;
                (from <= last).then_some(from..=last)
            }
            Self::UpTo { to } => {
                let floor = usize::from(playing);
                (floor <= to).then_some(floor..=to)
            }
        }
    }
}

/// Expands every range token in `tokens`. Tokens that are not ranges contribute nothing.
pub fn expand_ranges<S: AsRef<str>>(
    tokens: &[S],
    queue_len: usize,
    playing: bool,
) -> Vec<RangeInclusive<usize>> {
    tokens
        .iter()
        .filter_map(|token| RangeExpression::parse(token.as_ref()))
        .filter_map(|expression| expression.expand(queue_len, playing))
        .collect()
}
