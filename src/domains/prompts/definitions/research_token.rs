//! Token research prompt.

use super::{PromptDefinition, required_argument};
use rmcp::model::PromptArgument;

pub struct ResearchTokenPrompt;

impl PromptDefinition for ResearchTokenPrompt {
    const NAME: &'static str = "research_token";
    const DESCRIPTION: &'static str = "Research a token";

    fn template() -> &'static str {
        "Research the token {{token_symbol}}. Find its contract address, market data, holders, \
         and recent activity."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_argument("token_symbol", "Symbol of the token, e.g. DUCK")]
    }
}
