//! Prompt editor form state

use crate::store::state::EditorTarget;
use crate::types::prompt::{ApplicationType, Prompt};
use crate::validation::{validate_prompt, ValidationResult};

/// Draft prompt plus the editor's pending inputs.
///
/// Validation runs on submit. Once a submit has failed, every later edit
/// re-validates so errors clear as the user fixes them.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PromptForm {
    draft: Prompt,
    tag_input: String,
    variables_input: String,
    validation: ValidationResult,
}

impl PromptForm {
    pub fn new(target: &EditorTarget) -> Self {
        match target {
            EditorTarget::Create => Self::default(),
            EditorTarget::Edit(prompt) => Self {
                variables_input: prompt.input_variables.join(", "),
                draft: prompt.clone(),
                ..Default::default()
            },
        }
    }

    pub fn draft(&self) -> &Prompt {
        &self.draft
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn variables_input(&self) -> &str {
        &self.variables_input
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// False while the last validation still has errors
    pub fn can_save(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn set_name(&mut self, name: String) {
        self.edit(|draft| draft.name = name);
    }

    pub fn set_title(&mut self, title: String) {
        self.edit(|draft| draft.title = title);
    }

    pub fn set_description(&mut self, description: String) {
        self.edit(|draft| draft.description = description);
    }

    pub fn set_version(&mut self, version: String) {
        self.edit(|draft| draft.version = version);
    }

    pub fn set_template(&mut self, template: String) {
        self.edit(|draft| draft.template = template);
    }

    pub fn set_application(&mut self, application: ApplicationType) {
        self.edit(|draft| draft.application = application);
    }

    /// Comma separated variable names
    pub fn set_input_variables(&mut self, text: String) {
        let variables = text
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        self.variables_input = text;
        self.edit(|draft| draft.input_variables = variables);
    }

    pub fn toggle_preferred_model(&mut self, model_name: &str) {
        self.edit(|draft| {
            if let Some(index) = draft.preferred_models.iter().position(|m| m == model_name) {
                draft.preferred_models.remove(index);
            } else {
                draft.preferred_models.push(model_name.to_string());
            }
        });
    }

    pub fn set_tag_input(&mut self, text: String) {
        self.tag_input = text;
    }

    /// Add the pending tag. Blank and duplicate tags are ignored and leave the input as is.
    pub fn add_tag(&mut self) {
        let tag = self.tag_input.trim().to_string();
        if tag.is_empty() || self.draft.tags.contains(&tag) {
            return;
        }
        self.tag_input.clear();
        self.edit(|draft| draft.tags.push(tag));
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.edit(|draft| draft.tags.retain(|t| t != tag));
    }

    /// Validate the draft; returns the prompt to save when every rule passes
    pub fn submit(&mut self) -> Option<Prompt> {
        let result = validate_prompt(&self.draft);
        if result.is_valid() {
            Some(self.draft.clone())
        } else {
            self.validation = result;
            None
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut Prompt)) {
        f(&mut self.draft);
        if !self.validation.is_valid() {
            self.validation = validate_prompt(&self.draft);
        }
    }
}
