use tabled::Table;

use super::{fetch, print_json};
use crate::{info, spotify::ApiClient, utils};

pub async fn search(client: &ApiClient, query: &str, types: &str, limit: u32) {
    let results = fetch("Searching...", client.search(query, types, limit)).await;

    if let Some(tracks) = results.tracks {
        info!("Tracks ({} total)", tracks.total);
        println!("{}", Table::new(utils::track_rows(&tracks.items)));
    }
    if let Some(artists) = results.artists {
        info!("Artists ({} total)", artists.total);
        println!("{}", Table::new(utils::artist_rows(&artists.items)));
    }
    if let Some(albums) = results.albums {
        info!("Albums ({} total)", albums.total);
        println!("{}", Table::new(utils::album_rows(&albums.items)));
    }
    if let Some(playlists) = results.playlists {
        info!("Playlists ({} total)", playlists.total);
        let items = playlists.items.into_iter().flatten().collect::<Vec<_>>();
        println!("{}", Table::new(utils::playlist_rows(&items)));
    }
    if let Some(shows) = results.shows {
        info!("Shows ({} total)", shows.total);
        print_json(&shows.items);
    }
    if let Some(episodes) = results.episodes {
        info!("Episodes ({} total)", episodes.total);
        print_json(&episodes.items);
    }
    if let Some(audiobooks) = results.audiobooks {
        info!("Audiobooks ({} total)", audiobooks.total);
        print_json(&audiobooks.items);
    }
}
