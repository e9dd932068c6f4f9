use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use wasm_ark::{
    address_from_multi_signature_asset, address_from_passphrase, address_from_public_key,
    decode_address, MultiSignatureAsset,
};

use crate::network::NetworkOpts;

#[derive(Subcommand)]
pub enum AddressCommand {
    /// Derive the address of a compressed public key (hex)
    FromPublicKey {
        public_key: String,
        #[command(flatten)]
        network: NetworkOpts,
    },
    /// Derive the address of a multi-signature wallet
    FromMultisig {
        /// Minimum number of signatures
        #[arg(short, long, allow_negative_numbers = true)]
        min: i64,
        /// Participant public keys (hex), order as registered
        #[arg(required = true)]
        public_keys: Vec<String>,
        #[command(flatten)]
        network: NetworkOpts,
    },
    /// Derive the address of the key pair generated from a passphrase
    FromPassphrase {
        passphrase: String,
        #[command(flatten)]
        network: NetworkOpts,
    },
    /// Check an address checksum and network prefix
    Validate {
        address: String,
        /// Accept any network prefix
        #[arg(long)]
        any_network: bool,
        #[command(flatten)]
        network: NetworkOpts,
    },
}

pub fn handle_command(command: AddressCommand) -> Result<String> {
    match command {
        AddressCommand::FromPublicKey {
            public_key,
            network,
        } => {
            let network = network.resolve();
            address_from_public_key(&public_key, network.prefix())
                .context("Failed to derive address from public key")
        }
        AddressCommand::FromMultisig {
            min,
            public_keys,
            network,
        } => {
            let network = network.resolve();
            let asset = MultiSignatureAsset::new(min, public_keys);
            address_from_multi_signature_asset(&asset, network.prefix())
                .context("Failed to derive multi-signature address")
        }
        AddressCommand::FromPassphrase {
            passphrase,
            network,
        } => {
            let network = network.resolve();
            address_from_passphrase(&passphrase, network.prefix())
                .context("Failed to derive address from passphrase")
        }
        AddressCommand::Validate {
            address,
            any_network,
            network,
        } => {
            let network = network.resolve();
            let (prefix, hash) = decode_address(&address).context("Invalid address")?;
            if !any_network && prefix != network.prefix() {
                anyhow::bail!(
                    "Address prefix {} does not match {} (prefix {})",
                    prefix,
                    network.name,
                    network.prefix()
                );
            }
            Ok(format!(
                "{} prefix={} hash={}",
                "valid".green(),
                prefix,
                hex::encode(hash)
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_ark::Network;

    const PUBLIC_KEY: &str = "03d3fdad9c5b25bf8880e6b519eb3611a5c0b31adebc8455f0e096175b28321aff";
    const MAINNET_ADDRESS: &str = "AHBoCa18iNW27Wnrk9amMAzmFHv5twdAe4";

    fn on(network: Network) -> NetworkOpts {
        NetworkOpts {
            network,
            prefix: None,
        }
    }

    #[test]
    fn test_from_public_key() {
        let address = handle_command(AddressCommand::FromPublicKey {
            public_key: PUBLIC_KEY.to_string(),
            network: on(Network::devnet()),
        })
        .unwrap();
        assert_eq!(address, "D6Z26L69gdk9qYmTv5uzk3uGepigtHY4ax");
    }

    #[test]
    fn test_from_multisig() {
        let address = handle_command(AddressCommand::FromMultisig {
            min: 2,
            public_keys: vec![
                "0235d486fea0193cbe77e955ab175b8f6eb9eaf784de689beffbd649989f5d6be3".to_string(),
                "03a46f2547d20b47003c1c376788db5a54d67264df2ae914f70bf453b6a1fa1b3a".to_string(),
                "03d7dfe44e771039334f4712fb95ad355254f674c8f5d286503199157b7bf7c357".to_string(),
            ],
            network: on(Network::devnet()),
        })
        .unwrap();
        assert_eq!(address, "DCxytpFTrQavKX17W4j9n6T9o5iPhAigw6");
    }

    #[test]
    fn test_from_multisig_negative_min() {
        let err = handle_command(AddressCommand::FromMultisig {
            min: -1,
            public_keys: vec![PUBLIC_KEY.to_string()],
            network: on(Network::devnet()),
        })
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid minimum signature count: -1"));
    }

    #[test]
    fn test_from_passphrase() {
        let address = handle_command(AddressCommand::FromPassphrase {
            passphrase: "this is a top secret passphrase".to_string(),
            network: on(Network::mainnet()),
        })
        .unwrap();
        assert_eq!(address, "AGeYmgbg2LgGxRW2vNNJvQ88PknEJsYizC");
    }

    #[test]
    fn test_validate_matching_network() {
        let out = handle_command(AddressCommand::Validate {
            address: MAINNET_ADDRESS.to_string(),
            any_network: false,
            network: on(Network::mainnet()),
        })
        .unwrap();
        assert!(out.contains("prefix=23"));
    }

    #[test]
    fn test_validate_prefix_mismatch() {
        let err = handle_command(AddressCommand::Validate {
            address: MAINNET_ADDRESS.to_string(),
            any_network: false,
            network: on(Network::devnet()),
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Address prefix 23 does not match devnet (prefix 30)"
        );
    }

    #[test]
    fn test_validate_any_network() {
        let out = handle_command(AddressCommand::Validate {
            address: MAINNET_ADDRESS.to_string(),
            any_network: true,
            network: on(Network::devnet()),
        })
        .unwrap();
        assert!(out.contains("prefix=23"));
    }

    #[test]
    fn test_validate_bad_checksum() {
        let err = handle_command(AddressCommand::Validate {
            address: "D6Z26L69gdk9qYmTv5uzk3uGepigtHY4ay".to_string(),
            any_network: true,
            network: on(Network::devnet()),
        })
        .unwrap_err();
        assert!(err.to_string().contains("Invalid address"));
    }
}
