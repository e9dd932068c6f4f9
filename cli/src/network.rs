//! Network arguments for CLI commands

use clap::Args;
use wasm_ark::Network;

/// Network selection shared by address commands
#[derive(Debug, Clone, Args)]
pub struct NetworkOpts {
    /// Network preset (mainnet, devnet)
    #[arg(
        short,
        long,
        env = "ARK_NETWORK",
        default_value = "mainnet",
        value_parser = Network::from_name
    )]
    pub network: Network,
    /// Address prefix byte, overrides --network
    #[arg(short, long, env = "ARK_ADDRESS_PREFIX")]
    pub prefix: Option<u8>,
}

impl NetworkOpts {
    pub fn resolve(&self) -> Network {
        match self.prefix {
            Some(prefix) => Network::custom("custom", prefix),
            None => self.network.clone(),
        }
    }
}
