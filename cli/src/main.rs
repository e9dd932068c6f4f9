use anyhow::Result;
use clap::{Parser, Subcommand};

mod address;
mod network;
mod transactions;

#[derive(Parser)]
#[command(name = "wasm-ark-cli", version, about = "ARK explorer address and record tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Address derivation and validation
    Address {
        #[command(subcommand)]
        command: address::AddressCommand,
    },
    /// Transaction record tools
    Transactions {
        #[command(subcommand)]
        command: transactions::TransactionsCommand,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("starting wasm-ark-cli");

    let output = match cli.command {
        Commands::Address { command } => address::handle_command(command)?,
        Commands::Transactions { command } => transactions::handle_command(command)?,
    };
    println!("{}", output);
    Ok(())
}
