use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use tunecli::{cli, config, error, types::AuthAttempt};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Show the authenticated user's profile
    Profile,

    /// List your top tracks
    Tracks,

    /// Search for tracks
    Search(SearchOptions),

    /// Trivia about a song
    Trivia(TriviaOptions),

    /// Start an interactive playback session
    Player,

    /// Show session status
    Info,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text track query
    pub query: String,

    /// Also ask the AI for suggestions matching the query
    #[clap(long)]
    pub ai: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TriviaOptions {
    /// Song to dig up trivia about
    pub song: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let auth_result: Arc<Mutex<Option<AuthAttempt>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&auth_result)).await;
        }
        Command::Profile => cli::profile().await,
        Command::Tracks => cli::tracks().await,
        Command::Search(opt) => cli::search(opt.query, opt.ai).await,
        Command::Trivia(opt) => cli::trivia(opt.song).await,
        Command::Player => cli::player().await,
        Command::Info => cli::info().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
