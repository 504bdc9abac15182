use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotify_rg::{
    cli,
    config::{self, ClientConfig},
    error,
    spotify::ApiClient,
    types::TimeRange,
};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in through the browser and print an access token
    Login,

    /// Show an album
    Album(AlbumOptions),

    /// Show several albums
    Albums(IdsOptions),

    /// Show an artist
    Artist(ArtistOptions),

    /// Show several artists
    Artists(IdsOptions),

    /// Show a track
    Track(IdOptions),

    /// Show several tracks
    Tracks(IdsOptions),

    /// Show your top tracks
    TopTracks(TopTracksOptions),

    /// List a user's playlists
    Playlists(UserOptions),

    /// Create a playlist
    CreatePlaylist(CreatePlaylistOptions),

    /// Add tracks to a playlist
    AddTracks(AddTracksOptions),

    /// Get track recommendations for seed artists and tracks
    Recommend(RecommendOptions),

    /// Search the catalog
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct IdOptions {
    /// Spotify ID
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct IdsOptions {
    /// Comma separated Spotify IDs
    ids: String,
}

#[derive(Parser, Debug, Clone)]
pub struct UserOptions {
    /// Spotify user ID
    user_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    /// Spotify album ID
    id: String,

    /// List the album's tracks instead
    #[clap(long)]
    tracks: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Spotify artist ID
    id: String,

    /// List the artist's albums instead
    #[clap(long, conflicts_with = "top_tracks")]
    albums: bool,

    /// List the artist's top tracks instead
    #[clap(long)]
    top_tracks: bool,

    /// Two letter market code for --top-tracks (defaults to the token's country)
    #[clap(long, requires = "top_tracks")]
    country: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TopTracksOptions {
    /// Period the ranking covers [default: long_term]
    #[clap(long, value_enum)]
    time_range: Option<TimeRange>,

    /// Number of tracks (max 50) [default: 50]
    #[clap(long)]
    limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CreatePlaylistOptions {
    /// Spotify user ID of the owner
    user_id: String,

    /// Playlist name
    name: String,

    #[clap(long, default_value = "")]
    description: String,

    /// Make the playlist public
    #[clap(long)]
    public: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct AddTracksOptions {
    /// Playlist ID
    playlist_id: String,

    /// Track URIs, e.g. spotify:track:4iV5W9uYEdYUVa79Axb7Rh
    #[clap(required = true, num_args = 1..)]
    uris: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Comma separated artist IDs
    #[clap(long, default_value = "")]
    seed_artists: String,

    /// Comma separated track IDs
    #[clap(long, default_value = "")]
    seed_tracks: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    query: String,

    /// Comma separated item types: album, artist, playlist, track, show, episode, audiobook
    #[clap(long = "type", default_value = "track")]
    types: String,

    /// Maximum results per type
    #[clap(long, default_value_t = 20)]
    limit: u32,
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

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(config::log_filter())
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ApiClient::from_config(ClientConfig::from_env());

    if !matches!(cli.command, Command::Login | Command::Completions(_)) {
        cli::check_token(&client);
    }

    match cli.command {
        Command::Login => cli::login(&client).await,
        Command::Album(opt) => cli::album(&client, &opt.id, opt.tracks).await,
        Command::Albums(opt) => cli::albums(&client, &opt.ids).await,
        Command::Artist(opt) => {
            cli::artist(&client, &opt.id, opt.albums, opt.top_tracks, opt.country).await
        }
        Command::Artists(opt) => cli::artists(&client, &opt.ids).await,
        Command::Track(opt) => cli::track(&client, &opt.id).await,
        Command::Tracks(opt) => cli::tracks(&client, &opt.ids).await,
        Command::TopTracks(opt) => cli::top_tracks(&client, opt.time_range, opt.limit).await,
        Command::Playlists(opt) => cli::playlists(&client, &opt.user_id).await,
        Command::CreatePlaylist(opt) => {
            cli::create_playlist(&client, &opt.user_id, &opt.name, &opt.description, opt.public)
                .await
        }
        Command::AddTracks(opt) => cli::add_tracks(&client, &opt.playlist_id, &opt.uris).await,
        Command::Recommend(opt) => {
            cli::recommend(&client, &opt.seed_artists, &opt.seed_tracks).await
        }
        Command::Search(opt) => cli::search(&client, &opt.query, &opt.types, opt.limit).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
