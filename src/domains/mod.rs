//! Domains module containing business logic organized by bounded contexts.
//!
//! - **explorer**: client for the upstream Blockscout v2 REST API
//! - **tools**: one MCP tool per explorer endpoint
//! - **resources**: static and dynamic informational resources
//! - **prompts**: prompt templates for common explorer investigations

pub mod explorer;
pub mod prompts;
pub mod resources;
pub mod tools;
