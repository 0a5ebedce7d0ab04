use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use studentlens::app::AppContext;
use studentlens::cli::{commands, Cli, Commands};
use studentlens::config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let mut ctx = if cli.ephemeral {
        AppContext::ephemeral(config)
    } else {
        AppContext::new(cli.data.clone(), config)?
    };

    match cli.command {
        Commands::Post {
            title,
            content,
            image,
        } => {
            commands::post(&mut ctx, &title, &image, &content)?;
        }
        Commands::Delete { id, yes } => {
            commands::delete(&mut ctx, id, yes)?;
        }
        Commands::React { id, symbol } => {
            if let Err(e) = commands::react(&mut ctx, id, &symbol) {
                commands::print_reaction_symbols();
                return Err(e.into());
            }
        }
        Commands::List { search, sort } => {
            commands::list(&ctx, search.as_deref(), sort)?;
        }
        Commands::Country { name } => {
            commands::country(name.as_deref())?;
        }
        Commands::Tui => {
            studentlens::tui::run(&mut ctx)?;
        }
    }

    Ok(())
}
