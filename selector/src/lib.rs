//! Agent Selector - picks the agent best suited to a user request.
//!
//! Candidate agents are described by [`AgentCard`]s. The selector renders
//! every card into a single scoring prompt, asks a generative model to score
//! each candidate between 0 and 1, and returns the highest-scoring one.
//!
//! # Example
//!
//! ```no_run
//! use agent_selector::{AgentCard, AgentSelector, Selection, Settings};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::new()?;
//! let selector = AgentSelector::from_settings(&settings)?;
//!
//! let cards = vec![
//!     AgentCard::new("weather").with_description("Forecasts and current conditions"),
//!     AgentCard::new("calendar").with_description("Schedules meetings"),
//! ];
//!
//! match selector.select("Will it rain tomorrow?", &cards).await? {
//!     Selection::Matched(candidate) => println!("route to {}", candidate.name),
//!     Selection::Unscored => println!("model scored no agents"),
//!     Selection::Unparseable(err) => println!("scoring failed: {err}"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Agent card definitions.
pub mod card;
/// LLM generation clients.
pub mod inference;
/// Infrastructure components (config, telemetry).
pub mod infrastructure;
/// Scoring prompt construction.
pub mod prompt;
/// Response parsing and agent selection.
pub mod selection;

pub use card::AgentCard;
pub use inference::{
    GeminiConfig, GeminiProvider, GenerateRequest, GenerateResponse, GenerationClient,
    InferenceError, OutputFormat,
};
pub use infrastructure::config::Settings;
pub use infrastructure::telemetry::TelemetryBuilder;
pub use prompt::{PromptBuilder, PromptLanguage};
pub use selection::{
    AgentSelector, Ranking, ResponseParseError, ScoredCandidate, Selection, DEFAULT_MODEL,
};
