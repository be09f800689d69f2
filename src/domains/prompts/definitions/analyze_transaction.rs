//! Transaction analysis prompt.

use super::{PromptDefinition, required_argument};
use rmcp::model::PromptArgument;

pub struct AnalyzeTransactionPrompt;

impl PromptDefinition for AnalyzeTransactionPrompt {
    const NAME: &'static str = "analyze_transaction";
    const DESCRIPTION: &'static str = "Analyze a blockchain transaction";

    fn template() -> &'static str {
        "Analyze this blockchain transaction: {{transaction_hash}}. Provide details about the \
         transaction, its purpose, gas usage, and any token transfers involved."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_argument(
            "transaction_hash",
            "Hash of the transaction to analyze",
        )]
    }
}
