//! Subcommand implementations for the `spotify-rg` binary.
//!
//! Each function takes a configured [`ApiClient`], performs one request behind
//! a spinner and prints the result. A failed request ends the process through
//! [`crate::error!`].

mod albums;
mod artists;
mod auth;
mod playlists;
mod search;
mod tracks;

pub use albums::{album, albums};
pub use artists::{artist, artists};
pub use auth::login;
pub use playlists::{add_tracks, create_playlist, playlists};
pub use search::search;
pub use tracks::{recommend, top_tracks, track, tracks};

use serde::Serialize;

use crate::{error, error::Result, spotify::ApiClient, utils, warning};

/// Awaits a request while a spinner shows `message`; exits on failure.
async fn fetch<T>(message: &str, request: impl Future<Output = Result<T>>) -> T {
    let pb = utils::spinner(message);
    let result = request.await;
    pb.finish_and_clear();

    match result {
        Ok(value) => value,
        Err(e) => error!("Request failed: {}", e),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => warning!("Cannot render response. Err: {}", e),
    }
}

/// Warns once when no token is configured, since every request would be rejected.
pub fn check_token(client: &ApiClient) {
    if client.config().token.as_deref().unwrap_or_default().is_empty() {
        warning!("SPOTIFY_API_TOKEN is not set. Run spotify-rg login to obtain one.");
    }
}
