use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use pricebook::log::init_logging;
use rust_decimal::Decimal;

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

impl From<Commands> for pricebook::AppCommand {
    fn from(cmd: Commands) -> pricebook::AppCommand {
        match cmd {
            Commands::Add { title, price } => pricebook::AppCommand::Add { title, price },
            Commands::List => pricebook::AppCommand::List,
            Commands::Stats => pricebook::AppCommand::Stats,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Add a new priced item
    Add {
        /// Item title, 3 to 20 characters and unique
        #[arg(short, long)]
        title: Option<String>,
        /// Item price, at least 15; stored with two decimals
        #[arg(short, long)]
        price: Option<Decimal>,
    },
    /// List stored items
    List,
    /// Display average price per day, excluding today
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let result = match cli.command {
        Some(Commands::Setup) => pricebook::cli::setup::setup(),
        Some(cmd) => pricebook::run_command(cmd.into(), cli.config_path.as_deref()).await,
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
