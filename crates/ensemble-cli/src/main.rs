use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "ensemble", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Show a band's text form and career dates
    ///
    /// Loads the band from a JSON file and prints its one-line form
    /// (name, member names, career years) together with the formatted
    /// start and end dates. File arguments that don't resolve as given
    /// are looked up in the configured data directory.
    Show {
        /// Path to the band JSON file
        file: PathBuf,
    },
    /// Walk a band's members with the member cursor
    Members {
        /// Path to the band JSON file
        file: PathBuf,
    },
    /// Check a band against the validity rules
    ///
    /// Reports whether the start date falls inside the valid window
    /// (Jul 05, 1954 through today). The band name was already checked
    /// when the file was decoded.
    Validate {
        /// Path to the band JSON file
        file: PathBuf,
    },
    /// Have a band member perform a song
    Play {
        /// Path to the band JSON file
        file: PathBuf,
        /// Member name, as stored in the band file
        member: String,
        /// Song title
        song: String,
        /// Count-in called before the song
        #[arg(long)]
        rhythm_count: Option<String>,
        /// Expression of gratitude; repeat for more than one
        #[arg(long)]
        gratitude: Vec<String>,
        /// Closing dedication to the audience
        #[arg(long)]
        dedication: Option<String>,
    },
    /// Walk through the built-in Beatles example
    Demo,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Create the config file with defaults
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { file } => {
            commands::show_band(&commands::resolve_band_path(file)?)?;
        }
        Commands::Members { file } => {
            commands::list_members(&commands::resolve_band_path(file)?)?;
        }
        Commands::Validate { file } => {
            commands::validate_band(&commands::resolve_band_path(file)?)?;
        }
        Commands::Play {
            file,
            member,
            song,
            rhythm_count,
            gratitude,
            dedication,
        } => {
            commands::play_song(
                &commands::resolve_band_path(file)?,
                &member,
                song,
                rhythm_count,
                gratitude,
                dedication,
            )?;
        }
        Commands::Demo => {
            commands::run_demo()?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
