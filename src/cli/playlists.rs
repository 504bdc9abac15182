use tabled::Table;

use super::fetch;
use crate::{spotify::ApiClient, success, utils, warning};

/// Maximum number of URIs the API accepts per add-tracks request.
const MAX_URIS_PER_REQUEST: usize = 100;

pub async fn playlists(client: &ApiClient, user_id: &str) {
    let page = fetch("Fetching playlists...", client.get_users_playlists(user_id)).await;
    println!("{}", Table::new(utils::playlist_rows(&page.items)));
}

pub async fn create_playlist(
    client: &ApiClient,
    user_id: &str,
    name: &str,
    description: &str,
    public: bool,
) {
    let playlist = fetch(
        "Creating playlist...",
        client.create_playlist(user_id, name, description, public),
    )
    .await;
    success!("Playlist {} created with id {}", playlist.name, playlist.id);
}

pub async fn add_tracks(client: &ApiClient, playlist_id: &str, uris: &[String]) {
    if uris.len() > MAX_URIS_PER_REQUEST {
        warning!(
            "{} tracks given, the API accepts at most {} per request.",
            uris.len(),
            MAX_URIS_PER_REQUEST
        );
    }

    let snapshot = fetch(
        "Adding tracks...",
        client.add_tracks_to_playlist(playlist_id, uris),
    )
    .await;
    success!(
        "{} track(s) added. Snapshot: {}",
        uris.len(),
        snapshot.snapshot_id
    );
}
