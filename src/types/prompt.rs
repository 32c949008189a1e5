//! Prompt types
//!
//! Prompt templates and the application tags they belong to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Analysis pipeline a prompt is written for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ApplicationType {
    /// Argument analysis (currently the only pipeline)
    #[default]
    ArgumentAnalysis,
    /// Any tag this client does not know, kept verbatim
    Other(String),
}

impl ApplicationType {
    pub const ARGUMENT_ANALYSIS: &'static str = "argument_analysis";

    /// Wire tag
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationType::ArgumentAnalysis => Self::ARGUMENT_ANALYSIS,
            ApplicationType::Other(tag) => tag,
        }
    }

    /// Human-readable label for selectors
    pub fn label(&self) -> &str {
        match self {
            ApplicationType::ArgumentAnalysis => "Argument Analysis",
            ApplicationType::Other(tag) => tag,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ApplicationType::ArgumentAnalysis => {
                "Analyze text for logical arguments and credibility assessment"
            }
            ApplicationType::Other(_) => "No dedicated view for this application",
        }
    }

    /// Applications this client has views for
    pub fn known() -> Vec<ApplicationType> {
        vec![ApplicationType::ArgumentAnalysis]
    }
}

impl From<String> for ApplicationType {
    fn from(tag: String) -> Self {
        if tag == Self::ARGUMENT_ANALYSIS {
            ApplicationType::ArgumentAnalysis
        } else {
            ApplicationType::Other(tag)
        }
    }
}

impl From<&str> for ApplicationType {
    fn from(tag: &str) -> Self {
        ApplicationType::from(tag.to_string())
    }
}

impl From<ApplicationType> for String {
    fn from(application: ApplicationType) -> Self {
        match application {
            ApplicationType::ArgumentAnalysis => ApplicationType::ARGUMENT_ANALYSIS.to_string(),
            ApplicationType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ApplicationType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApplicationType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ApplicationType::from)
    }
}

/// A named, versioned prompt template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique identifier (alphanumeric and underscores)
    pub name: String,
    /// Display title
    pub title: String,
    pub description: String,
    pub application: ApplicationType,
    /// Placeholders the template expects (e.g. `text`)
    pub input_variables: Vec<String>,
    /// Template body, embedding the expected JSON output format
    pub template: String,
    pub version: String,
    pub preferred_models: Vec<String>,
    pub tags: Vec<String>,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            description: String::new(),
            application: ApplicationType::ArgumentAnalysis,
            input_variables: Vec::new(),
            template: String::new(),
            version: "1.0.0".to_string(),
            preferred_models: Vec::new(),
            tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_type_from_tag() {
        assert_eq!(
            ApplicationType::from("argument_analysis"),
            ApplicationType::ArgumentAnalysis
        );
        assert_eq!(
            ApplicationType::from("summarization"),
            ApplicationType::Other("summarization".to_string())
        );
    }

    #[test]
    fn test_unknown_application_survives_serde() {
        let json = serde_json::to_string(&ApplicationType::Other("sentiment".into())).unwrap();
        assert_eq!(json, "\"sentiment\"");
        let back: ApplicationType = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "sentiment");
    }

    #[test]
    fn test_default_prompt() {
        let prompt = Prompt::default();
        assert_eq!(prompt.version, "1.0.0");
        assert_eq!(prompt.application, ApplicationType::ArgumentAnalysis);
        assert!(prompt.tags.is_empty());
    }
}
