// src/main.rs — honeydash entry point

use clap::Parser;

use honeydash::cli::{self, Cli, Commands};
use honeydash::infra::config::Config;
use honeydash::infra::{logger, paths};
use honeydash::source;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Precedence: flags > environment > config file > defaults
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env();
    cli.apply_overrides(&mut config);

    let command = cli.command.clone().unwrap_or(Commands::Dashboard);

    // The dashboard owns the terminal, so its logs go to a file.
    if command == Commands::Dashboard {
        paths::ensure_dirs().await?;
        let log_path = config
            .logging
            .file
            .clone()
            .unwrap_or_else(paths::log_file_path);
        logger::init_file_logging(&config.logging.level, &log_path)?;
    } else {
        logger::init_logging(&config.logging.level);
    }

    let source = source::from_config(&config, cli.file.as_deref())?;
    let limit = config.api.limit;

    match command {
        Commands::Dashboard => honeydash::tui::run_dashboard(source, limit),
        Commands::Stats => {
            let state = cli::load_state(source.as_ref(), limit).await?;
            cli::report::run_stats(&state);
            Ok(())
        }
        Commands::List { query } => {
            let mut state = cli::load_state(source.as_ref(), limit).await?;
            cli::report::run_list(&mut state, &query);
            Ok(())
        }
        Commands::Show { id, query } => {
            let mut state = cli::load_state(source.as_ref(), limit).await?;
            cli::report::run_show(&mut state, id.as_deref(), &query);
            Ok(())
        }
        Commands::Export {
            query,
            format,
            output,
        } => {
            let mut state = cli::load_state(source.as_ref(), limit).await?;
            cli::export::run_export(&mut state, &query, &format, output.as_deref()).await?;
            Ok(())
        }
    }
}
