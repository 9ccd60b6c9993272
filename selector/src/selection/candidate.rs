use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// An agent name with the relevance score the model assigned to it.
///
/// Models in JSON mode are loose about types, so `score` also accepts a
/// numeric string and a non-string `reason` is kept as its JSON text. Keys
/// other than `name`, `score` and `reason` are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Agent name as echoed by the model
    pub name: String,
    /// Relevance score, nominally in `0..=1`
    #[serde(deserialize_with = "lenient_score")]
    pub score: f64,
    /// Short rationale, when the model gave one
    #[serde(
        default,
        deserialize_with = "lenient_reason",
        skip_serializing_if = "Option::is_none"
    )]
    pub reason: Option<String>,
    /// Any other keys the model returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let score = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    score
        .filter(|s| s.is_finite())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid score: {value}")))
}

fn lenient_reason<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl ScoredCandidate {
    /// Creates a candidate without a reason
    #[must_use]
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
            reason: None,
            extra: Map::new(),
        }
    }

    /// Sets the reason
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Sorts candidates by score, highest first.
///
/// The sort is stable: candidates with equal scores keep the order the model
/// returned them in.
#[must_use]
pub fn rank(mut candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}
