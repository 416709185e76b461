use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rigsync_core::config::RigConfig;
use rigsync_core::{AppConfig, RigEndpoint};

mod commands;

#[derive(Parser)]
#[command(name = "rigsync")]
#[command(author, version, about = "Frequency synchronization between two rigctld endpoints")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Primary rig address as host:port (overrides the config file)
    #[arg(short = 'p', long = "primary", value_name = "HOST:PORT")]
    primary: Option<RigEndpoint>,

    /// Secondary rig address as host:port (overrides the config file)
    #[arg(short = 's', long = "secondary", value_name = "HOST:PORT")]
    secondary: Option<RigEndpoint>,

    /// Poll interval in milliseconds (overrides the config file)
    #[arg(long = "interval-ms", value_name = "MS")]
    interval_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the primary rig and mirror frequency changes to the secondary
    Run,
    /// Connect to both rigs, read the primary frequency once, and exit
    Check,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration file
    Init,
    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    // Initialize logging; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Command-line overrides
    if let Some(primary) = cli.primary {
        config.primary = RigConfig {
            host: primary.host,
            port: primary.port,
        };
    }
    if let Some(secondary) = cli.secondary {
        config.secondary = RigConfig {
            host: secondary.host,
            port: secondary.port,
        };
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.sync.poll_interval_ms = interval_ms;
    }

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Check) => commands::check::run(config).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => commands::config::init(),
            ConfigAction::Show => commands::config::show(&config),
        },
    }
}
