use clap::Parser;
use edge_engine::cli::{Cli, Commands};
use edge_engine::config::{Config, ConfigError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e @ ConfigError::Read { .. }) => {
            eprintln!("Warning: {}", e);
            eprintln!("Using default configuration");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    // Initialize telemetry
    let serving = matches!(cli.command, Commands::Serve(_));
    edge_engine::telemetry::init_telemetry(&config.telemetry, serving)?;

    config.apply_env();

    match cli.command {
        Commands::Serve(args) => {
            tracing::info!("Starting API server");
            args.execute(config).await?;
        }
        Commands::Compute(args) => {
            args.execute(config).await?;
        }
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
