use tabled::Table;

use super::{fetch, print_json};
use crate::{info, spotify::ApiClient, utils};

pub async fn artist(
    client: &ApiClient,
    artist_id: &str,
    albums: bool,
    top_tracks: bool,
    country: Option<String>,
) {
    if albums {
        let page = fetch("Fetching artist albums...", client.get_artists_albums(artist_id)).await;
        info!("{} of {} albums", page.items.len(), page.total);
        println!("{}", Table::new(utils::album_rows(&page.items)));
        return;
    }

    if top_tracks {
        let response = fetch(
            "Fetching top tracks...",
            client.get_artists_top_tracks(artist_id, country.as_deref()),
        )
        .await;
        println!("{}", Table::new(utils::track_rows(&response.tracks)));
        return;
    }

    let artist = fetch("Fetching artist...", client.get_artist(artist_id)).await;
    print_json(&artist);
}

pub async fn artists(client: &ApiClient, artist_ids: &str) {
    let response = fetch("Fetching artists...", client.get_artists(artist_ids)).await;
    let found = response.artists.into_iter().flatten().collect::<Vec<_>>();
    println!("{}", Table::new(utils::artist_rows(&found)));
}
