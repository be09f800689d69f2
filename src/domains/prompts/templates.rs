//! Prompt templates module.
//!
//! Templates use a `{{variable}}` placeholder syntax.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Render the template with the given arguments.
    ///
    /// Values are inserted verbatim and are not scanned again, so a value
    /// containing `{{...}}` is left as is. Placeholders without a value are
    /// removed.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut output = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find("{{") {
            output.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let close = after
                .find("}}")
                .ok_or_else(|| PromptError::template(format!("Unclosed placeholder in '{}'", self.name)))?;

            if let Some(value) = arguments.get(after[..close].trim()) {
                output.push_str(value);
            }
            rest = &after[close + 2..];
        }
        output.push_str(rest);

        Ok(output)
    }

    /// Names of the required arguments.
    pub fn required_arguments(&self) -> impl Iterator<Item = &str> {
        self.arguments
            .iter()
            .filter(|arg| arg.required.unwrap_or(false))
            .map(|arg| arg.name.as_str())
    }
}
