/// Scored candidate type and ranking.
pub mod candidate;
/// Outcome types returned by the selector.
pub mod outcome;
/// Parsing of raw model output.
pub mod parse;
/// The agent selector.
pub mod selector;

pub use candidate::{rank, ScoredCandidate};
pub use outcome::{Ranking, Selection};
pub use parse::{parse_scores, ResponseParseError};
pub use selector::{AgentSelector, DEFAULT_MODEL};
