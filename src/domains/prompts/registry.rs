//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    AnalyzeTransactionPrompt, ExploreAddressPrompt, PromptDefinition, ResearchTokenPrompt,
};
use super::templates::PromptTemplate;

fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        template: P::template().to_string(),
    }
}

/// Get all registered prompts as PromptTemplates, in listing order.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<AnalyzeTransactionPrompt>(),
        build_template::<ExploreAddressPrompt>(),
        build_template::<ResearchTokenPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        AnalyzeTransactionPrompt::NAME,
        ExploreAddressPrompt::NAME,
        ResearchTokenPrompt::NAME,
    ]
}
