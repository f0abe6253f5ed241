use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use seedcli::{
    cli, config, error,
    types::{ItemKind, TimeRange},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default())
        .placeholder(AnsiColor::BrightMagenta.on_default())
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

    /// Show the logged in user
    Me,

    /// Show your top tracks or artists
    Top(TopOptions),

    /// Show the genres available as seeds
    Genres,

    /// Get track recommendations for up to 5 seeds
    Recommend(RecommendOptions),

    /// List your playlists
    Playlists,

    /// Add a track to one of your playlists
    Add(AddOptions),

    /// Start an interactive session
    Session(SessionOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// tracks or artists
    #[clap(value_parser = utils::parse_item_kind)]
    pub kind: ItemKind,

    /// short_term (4 weeks), medium_term (6 months) or long_term (years)
    #[clap(long, default_value = "short_term", value_parser = utils::parse_time_range)]
    pub range: TimeRange,

    /// Number of pages of 40 items to load
    #[clap(long, default_value_t = 1)]
    pub pages: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Track seed: row number of `top tracks` or a track id; can be repeated
    #[clap(long = "track", action = ArgAction::Append, num_args = 1)]
    pub tracks: Vec<String>,

    /// Artist seed: row number of `top artists` or an artist id; can be repeated
    #[clap(long = "artist", action = ArgAction::Append, num_args = 1)]
    pub artists: Vec<String>,

    /// Genre seed: row number of `genres` or a genre name; can be repeated
    #[clap(long = "genre", action = ArgAction::Append, num_args = 1)]
    pub genres: Vec<String>,

    /// Time range the row numbers of top tracks/artists refer to
    #[clap(long, default_value = "short_term", value_parser = utils::parse_time_range)]
    pub range: TimeRange,
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    /// Track id or spotify:track URI
    #[clap(long)]
    pub track: String,

    /// Playlist row number, id or exact name
    #[clap(long)]
    pub playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SessionOptions {
    /// Initial time range for top items
    #[clap(long, default_value = "short_term", value_parser = utils::parse_time_range)]
    pub range: TimeRange,
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
        Command::Auth => cli::auth().await,
        Command::Me => cli::me().await,
        Command::Top(opt) => cli::top(opt.kind, opt.range, opt.pages).await,
        Command::Genres => cli::genres().await,
        Command::Recommend(opt) => {
            cli::recommend(opt.tracks, opt.artists, opt.genres, opt.range).await
        }
        Command::Playlists => cli::playlists().await,
        Command::Add(opt) => cli::add(opt.track, opt.playlist).await,
        Command::Session(opt) => cli::session(opt.range).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
