use clap::{ArgAction, Parser, Subcommand};
use commands::{completed, config, login, movie, movies, watchlist};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "watchkeep")]
#[command(about = "Watchkeep - Track what you want to watch and what you've watched")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to a file (rotated daily) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    #[command(long_about = "Exchange a username and password for an API token. The token is kept in the credentials file so later commands stay logged in across runs.")]
    Login {
        /// Username (if not provided, will prompt)
        #[arg(long)]
        username: Option<String>,
    },

    /// Log out and clear the stored session token
    Logout,

    /// Browse the movie catalog
    #[command(long_about = "List the movie catalog with client-side search, genre filtering, and pagination. The catalog is public; no login is required.")]
    Movies {
        /// Filter titles by a case-insensitive substring
        #[arg(long, value_name = "QUERY")]
        search: Option<String>,

        /// Keep only movies carrying this exact genre tag
        #[arg(long, value_name = "GENRE")]
        genre: Option<String>,

        /// Page to display (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show one movie's details, optionally adding it to a list
    #[command(long_about = "Show a movie's details. With --to-watch or --watched the movie is also added to the watchlist or completed list; login is required for that.")]
    Movie {
        /// Movie identifier
        id: u64,

        /// Add the movie to the watchlist
        #[arg(long, action = ArgAction::SetTrue)]
        to_watch: bool,

        /// Add the movie to the completed list
        #[arg(long, action = ArgAction::SetTrue)]
        watched: bool,

        /// Free-text note stored with the new entry
        #[arg(long)]
        notes: Option<String>,

        /// Priority for --to-watch (defaults to the configured value)
        #[arg(long)]
        priority: Option<i32>,

        /// Rating for --watched (defaults to the configured value)
        #[arg(long)]
        rating: Option<i32>,
    },

    /// Manage the "to watch" list
    Watchlist {
        #[command(subcommand)]
        cmd: Option<watchlist::WatchlistCommands>,
    },

    /// Manage the completed list
    Completed {
        #[command(subcommand)]
        cmd: Option<completed::CompletedCommands>,
    },

    /// View or change configuration
    Config {
        #[command(subcommand)]
        cmd: Option<config::ConfigCommands>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Login { username } => login::run_login(username, &output).await,
        Commands::Logout => login::run_logout(&output),
        Commands::Movies {
            search,
            genre,
            page,
        } => movies::run_movies(search, genre, page, &output).await,
        Commands::Movie {
            id,
            to_watch,
            watched,
            notes,
            priority,
            rating,
        } => movie::run_movie(id, to_watch, watched, notes, priority, rating, &output).await,
        Commands::Watchlist { cmd } => {
            let cmd = cmd.unwrap_or(watchlist::WatchlistCommands::Show);
            watchlist::run_watchlist(cmd, &output).await
        }
        Commands::Completed { cmd } => {
            let cmd = cmd.unwrap_or_default();
            completed::run_completed(cmd, &output).await
        }
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(config::ConfigCommands::Show);
            config::run_config(cmd, &output)
        }
    }
}
