use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tokenswap::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for tokenswap::AppCommand {
    fn from(cmd: Commands) -> tokenswap::AppCommand {
        match cmd {
            Commands::Prices => tokenswap::AppCommand::Prices,
            Commands::Swap { amount, from, to } => tokenswap::AppCommand::Swap {
                amount,
                from: from.unwrap_or_default(),
                to: to.unwrap_or_default(),
            },
            Commands::Wallet => tokenswap::AppCommand::Wallet,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List token prices from the price feed
    Prices,
    /// Convert an amount of one token into another
    Swap {
        /// Amount of the source token
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        amount: String,
        /// Source token currency
        #[arg(short, long)]
        from: Option<String>,
        /// Target token currency
        #[arg(short, long)]
        to: Option<String>,
    },
    /// Display wallet balances ordered by blockchain priority
    Wallet,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => tokenswap::cli::setup::setup(),
        Some(cmd) => tokenswap::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
