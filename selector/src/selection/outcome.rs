//! Outcome types for a scoring call.
//!
//! A scoring call that reached the model ends in one of three ways, and each
//! gets its own variant so callers can branch on it:
//!
//! | model output | [`Selection`] |
//! |---|---|
//! | array with at least one scored agent | [`Selection::Matched`] |
//! | empty array `[]` | [`Selection::Unscored`] |
//! | not JSON, not an array, malformed element | [`Selection::Unparseable`] |
//!
//! Failures of the generation call itself are not represented here; they
//! surface as `Err` from the selector.

use crate::selection::candidate::ScoredCandidate;
use crate::selection::parse::ResponseParseError;

/// All scored candidates, best first, or the reason there are none.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// Candidates sorted by descending score (possibly empty)
    Scored(Vec<ScoredCandidate>),
    /// The model output could not be parsed
    Unparseable(ResponseParseError),
}

/// Result of selecting the single best agent.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The highest-scoring candidate
    Matched(ScoredCandidate),
    /// The model returned a valid but empty array
    Unscored,
    /// The model output could not be parsed
    Unparseable(ResponseParseError),
}

impl Ranking {
    /// Returns the ranked candidates, empty when the output was unparseable.
    #[must_use]
    pub fn candidates(&self) -> &[ScoredCandidate] {
        match self {
            Self::Scored(candidates) => candidates,
            Self::Unparseable(_) => &[],
        }
    }

    /// Reduces the ranking to its top candidate.
    #[must_use]
    pub fn into_selection(self) -> Selection {
        match self {
            Self::Scored(candidates) => candidates
                .into_iter()
                .next()
                .map_or(Selection::Unscored, Selection::Matched),
            Self::Unparseable(err) => Selection::Unparseable(err),
        }
    }
}

impl Selection {
    /// Returns the matched candidate, if any.
    #[must_use]
    pub fn candidate(&self) -> Option<&ScoredCandidate> {
        match self {
            Self::Matched(candidate) => Some(candidate),
            Self::Unscored | Self::Unparseable(_) => None,
        }
    }

    /// Consumes the selection, returning the matched candidate, if any.
    #[must_use]
    pub fn into_candidate(self) -> Option<ScoredCandidate> {
        match self {
            Self::Matched(candidate) => Some(candidate),
            Self::Unscored | Self::Unparseable(_) => None,
        }
    }

    /// Returns `true` if an agent was selected.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Returns `true` if the model output could not be parsed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Unparseable(_))
    }
}
