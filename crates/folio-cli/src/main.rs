mod commands;

#[cfg(feature = "dev-server")]
mod server;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Folio CLI - check, render and serve the portfolio site", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate content and site settings
    Check,

    /// List known routes and the anchors each page renders
    Routes,

    /// Render one route to stdout
    Render {
        /// Route such as /home#cta or /projects/project-a
        route: String,

        /// Print the assembled page as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Serve the site (wasm shell plus server-rendered pages)
    Serve {
        /// Port to run the server on (overrides folio.toml)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (config, content) = commands::load(&cli.config)?;

    match cli.command {
        Commands::Check => {
            commands::check::execute(&config, &content)?;
        }
        Commands::Routes => {
            commands::routes::execute(&content);
        }
        Commands::Render { route, json } => {
            commands::render::execute(&config, &content, &route, json)?;
        }
        Commands::Serve { port } => {
            commands::serve::execute(config, content, port)?;
        }
    }

    Ok(())
}
