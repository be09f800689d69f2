//! Address exploration prompt.

use super::{PromptDefinition, required_argument};
use rmcp::model::PromptArgument;

pub struct ExploreAddressPrompt;

impl PromptDefinition for ExploreAddressPrompt {
    const NAME: &'static str = "explore_address";
    const DESCRIPTION: &'static str = "Explore a blockchain address";

    fn template() -> &'static str {
        "Explore this blockchain address: {{address}}. Find information about its transactions, \
         token holdings, and activity patterns."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_argument("address", "Address hash to explore")]
    }
}
