//! Agent card types.
//!
//! An [`AgentCard`] is the read-only description of a candidate agent. The
//! serde layout follows the A2A agent card (camelCase keys), so cards
//! published by remote agents can be deserialized directly. Fields the
//! selector does not use are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Description of an agent that can be selected for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Unique agent name
    pub name: String,
    /// Free-text description of what the agent does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input content types the agent accepts by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_input_modes: Option<Vec<String>>,
    /// Output content types the agent produces by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_output_modes: Option<Vec<String>>,
    /// Arbitrary capability object (streaming, push notifications, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Value>,
}

impl AgentCard {
    /// Creates a card with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            default_input_modes: None,
            default_output_modes: None,
            capabilities: None,
        }
    }

    /// Sets the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default input modes
    #[must_use]
    pub fn with_input_modes<I, S>(mut self, modes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_input_modes = Some(modes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the default output modes
    #[must_use]
    pub fn with_output_modes<I, S>(mut self, modes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_output_modes = Some(modes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the capability object
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Value) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Returns the description, treating an empty string as missing.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Comma-joined input modes, empty when none are declared.
    #[must_use]
    pub fn input_modes_text(&self) -> String {
        join_modes(self.default_input_modes.as_deref())
    }

    /// Comma-joined output modes, empty when none are declared.
    #[must_use]
    pub fn output_modes_text(&self) -> String {
        join_modes(self.default_output_modes.as_deref())
    }

    /// Compact JSON of the capability object, `None` when absent or `null`.
    #[must_use]
    pub fn capabilities_text(&self) -> Option<String> {
        match &self.capabilities {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.to_string()),
        }
    }
}

fn join_modes(modes: Option<&[String]>) -> String {
    modes.map(|m| m.join(", ")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_a2a_card() {
        let card: AgentCard = serde_json::from_value(json!({
            "name": "translator",
            "description": "Translates text",
            "url": "http://localhost:41241",
            "version": "0.1.0",
            "defaultInputModes": ["text"],
            "defaultOutputModes": ["text", "file"],
            "capabilities": {"streaming": true}
        }))
        .unwrap();

        assert_eq!(card.name, "translator");
        assert_eq!(card.input_modes_text(), "text");
        assert_eq!(card.output_modes_text(), "text, file");
        assert_eq!(card.capabilities_text().as_deref(), Some(r#"{"streaming":true}"#));
    }

    #[test]
    fn test_null_fields_are_missing() {
        let card: AgentCard = serde_json::from_value(json!({
            "name": "bare",
            "description": null,
            "capabilities": null
        }))
        .unwrap();

        assert!(card.description_text().is_none());
        assert!(card.capabilities_text().is_none());
        assert_eq!(card.input_modes_text(), "");
        assert_eq!(card.output_modes_text(), "");
    }

    #[test]
    fn test_empty_description_is_missing() {
        let card = AgentCard::new("a").with_description("");
        assert!(card.description_text().is_none());
    }

    #[test]
    fn test_explicit_null_capabilities_is_missing() {
        let card = AgentCard::new("a").with_capabilities(Value::Null);
        assert!(card.capabilities_text().is_none());
    }

    #[test]
    fn test_empty_capability_object_is_rendered() {
        let card = AgentCard::new("a").with_capabilities(json!({}));
        assert_eq!(card.capabilities_text().as_deref(), Some("{}"));
    }

    #[test]
    fn test_serialization_skips_missing_fields() {
        let card = AgentCard::new("solo").with_input_modes(["text"]);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"name":"solo","defaultInputModes":["text"]}"#);
    }
}
