//! Supported networks resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Known Blockscout deployments (static text).
pub struct SupportedChainsResource;

impl ResourceDefinition for SupportedChainsResource {
    const URI: &'static str = "duckchain://supported-chains";
    const NAME: &'static str = "Supported Chains";
    const DESCRIPTION: &'static str = "List of supported blockchain networks";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Text(SUPPORTED_CHAINS.to_string())
    }
}

const SUPPORTED_CHAINS: &str = "Supported BlockScout Networks:

- DuckChain Mainnet (scan.duckchain.io) - Default
- Ethereum Mainnet (blockscout.com/eth/mainnet)
- Ethereum Goerli (blockscout.com/eth/goerli)
- Polygon (blockscout.com/matic/mainnet)
- BSC (blockscout.com/bsc/mainnet)
- Arbitrum (blockscout.com/arbitrum/mainnet)
- Optimism (blockscout.com/optimism/mainnet)
- Avalanche (blockscout.com/avax/mainnet)
- Fantom (blockscout.com/ftm/mainnet)
- Gnosis Chain (blockscout.com/gnosis/mainnet)
- POA Core (blockscout.com/poa/core)

Point MCP_EXPLORER_URL at another deployment's /api/v2 to use it.
";
