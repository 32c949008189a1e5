//! Prompt form validation rules

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::types::prompt::Prompt;
use crate::validation::text_contains_json;

/// Maximum length of a prompt name or title
pub const MAX_NAME_LENGTH: usize = 25;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("valid name pattern"));
static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 ]+$").expect("valid title pattern"));

/// A single failed prompt rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Prompt name is required")]
    NameRequired,
    #[error("Prompt title is required")]
    TitleRequired,
    #[error("Prompt description is required")]
    DescriptionRequired,
    #[error("Prompt name too long. Limit to {MAX_NAME_LENGTH} characters")]
    NameTooLong,
    #[error("Prompt title too long. Limit to {MAX_NAME_LENGTH} characters")]
    TitleTooLong,
    #[error("Prompt name can only contain alphanumeric characters and underscores")]
    NameInvalidCharacters,
    #[error("Prompt title can only contain alphanumeric characters and spaces")]
    TitleInvalidCharacters,
    #[error(
        "Prompt template must contain a valid JSON object defining the expected output format. \
         For an example of what's expected, review api/prompts/example/argument_analysis.json"
    )]
    TemplateMissingJson,
}

/// Outcome of validating a prompt; valid when no rule failed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has(&self, error: &ValidationError) -> bool {
        self.errors.contains(error)
    }

    /// User-facing messages in rule order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Check every prompt rule and collect all failures
pub fn validate_prompt(prompt: &Prompt) -> ValidationResult {
    let mut errors = Vec::new();

    if prompt.name.trim().is_empty() {
        errors.push(ValidationError::NameRequired);
    }
    if prompt.title.trim().is_empty() {
        errors.push(ValidationError::TitleRequired);
    }
    if prompt.description.trim().is_empty() {
        errors.push(ValidationError::DescriptionRequired);
    }
    if prompt.name.chars().count() > MAX_NAME_LENGTH {
        errors.push(ValidationError::NameTooLong);
    }
    if prompt.title.chars().count() > MAX_NAME_LENGTH {
        errors.push(ValidationError::TitleTooLong);
    }
    if !NAME_PATTERN.is_match(&prompt.name) {
        errors.push(ValidationError::NameInvalidCharacters);
    }
    if !TITLE_PATTERN.is_match(&prompt.title) {
        errors.push(ValidationError::TitleInvalidCharacters);
    }
    // Only presence of a JSON fragment is checked; the model's answer shows
    // whether the format it describes actually works.
    if !text_contains_json(&prompt.template) {
        errors.push(ValidationError::TemplateMissingJson);
    }

    ValidationResult { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_prompt() -> Prompt {
        Prompt {
            name: "argument_analysis_v2".to_string(),
            title: "Valid Title 1".to_string(),
            description: "Finds and rates arguments".to_string(),
            template: "Analyze {text} and answer with {\"arguments\": []}".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_prompt() {
        let result = validate_prompt(&valid_prompt());
        assert!(result.is_valid(), "{:?}", result.messages());
    }

    #[test]
    fn test_name_with_space_is_invalid() {
        let prompt = Prompt {
            name: "a b".to_string(),
            ..valid_prompt()
        };
        let result = validate_prompt(&prompt);
        assert_eq!(result.errors, vec![ValidationError::NameInvalidCharacters]);
    }

    #[test]
    fn test_name_of_26_characters_is_invalid() {
        let prompt = Prompt {
            name: "a".repeat(26),
            ..valid_prompt()
        };
        let result = validate_prompt(&prompt);
        assert_eq!(result.errors, vec![ValidationError::NameTooLong]);

        let prompt = Prompt {
            name: "a".repeat(25),
            ..valid_prompt()
        };
        assert!(validate_prompt(&prompt).is_valid());
    }

    #[test]
    fn test_title_rules() {
        let prompt = Prompt {
            title: "Bad-Title!".to_string(),
            ..valid_prompt()
        };
        assert!(validate_prompt(&prompt).has(&ValidationError::TitleInvalidCharacters));

        let prompt = Prompt {
            title: "A very long title that goes on".to_string(),
            ..valid_prompt()
        };
        assert!(validate_prompt(&prompt).has(&ValidationError::TitleTooLong));
    }

    #[test]
    fn test_template_without_json_is_invalid() {
        let prompt = Prompt {
            template: "Analyze {text} please".to_string(),
            ..valid_prompt()
        };
        let result = validate_prompt(&prompt);
        assert_eq!(result.errors, vec![ValidationError::TemplateMissingJson]);
        assert!(result.messages()[0].contains("api/prompts/example/argument_analysis.json"));
    }

    #[test]
    fn test_empty_form_reports_every_rule_in_order() {
        let result = validate_prompt(&Prompt::default());
        assert_eq!(
            result.errors,
            vec![
                ValidationError::NameRequired,
                ValidationError::TitleRequired,
                ValidationError::DescriptionRequired,
                ValidationError::NameInvalidCharacters,
                ValidationError::TitleInvalidCharacters,
                ValidationError::TemplateMissingJson,
            ]
        );
        assert_eq!(result.messages()[0], "Prompt name is required");
    }
}
