use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::{clear, config, list, serve, stats, Workspace};
use movielog_config::{Config, PathManager};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "movielog")]
#[command(about = "Movielog - a personal log of the movies you watch")]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Movies file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    #[command(long_about = "Serve the movie log JSON API. Host and port default to the [server] section of config.toml. With --ephemeral the server keeps the sample collection in memory and never touches the data file.")]
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Keep all data in memory
        #[arg(long, action = ArgAction::SetTrue)]
        ephemeral: bool,
    },
    /// List movies, ten per page
    List {
        /// Page number (starts at 1)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Only movies of this genre
        #[arg(long)]
        genre: Option<String>,

        /// Only movies with this watch status ("Completed", "Watching", "Want to Watch")
        #[arg(long)]
        status: Option<String>,
    },
    /// Show a single movie
    Show {
        id: u64,
    },
    /// Show collection statistics
    Stats,
    /// List the distinct genres in the collection
    Genres,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
    /// Delete the data file so the next start begins from the sample collection
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short, action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = PathManager::default();
    let config_file = paths.config_file();
    let settings = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    settings
        .validate()
        .map_err(|e| eyre!("Invalid config {}: {}", config_file.display(), e))?;

    logging::init_logging(cli.verbose, cli.quiet, &settings.logging)
        .map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let workspace = Workspace::new(paths, settings, cli.data_file);

    match cli.command {
        Commands::Serve { host, port, ephemeral } => {
            serve::run_serve(&workspace, host, port, ephemeral, &output).await
        }
        Commands::List { page, genre, status } => list::run_list(&workspace, page, genre, status, &output),
        Commands::Show { id } => list::run_show(&workspace, id, &output),
        Commands::Stats => stats::run_stats(&workspace, &output),
        Commands::Genres => stats::run_genres(&workspace, &output),
        Commands::Config { cmd } => config::run_config(&workspace, cmd, &output),
        Commands::Clear { yes } => clear::run_clear(&workspace, yes, &output),
    }
}
