use tabled::Table;

use super::{fetch, print_json};
use crate::{info, spotify::ApiClient, types::AlbumTableRow, utils};

pub async fn album(client: &ApiClient, album_id: &str, tracks: bool) {
    if tracks {
        let page = fetch("Fetching album tracks...", client.get_albums_tracks(album_id)).await;
        info!("{} of {} tracks", page.items.len(), page.total);
        println!("{}", Table::new(utils::simplified_track_rows(&page.items, "")));
        return;
    }

    let album = fetch("Fetching album...", client.get_album(album_id)).await;
    print_json(&album);
}

pub async fn albums(client: &ApiClient, album_ids: &str) {
    let response = fetch("Fetching albums...", client.get_albums(album_ids)).await;

    let rows = response
        .albums
        .iter()
        .flatten()
        .map(|a| AlbumTableRow {
            date: a.release_date.clone(),
            name: a.name.clone(),
            artists: utils::artist_names(&a.artists),
            id: a.id.clone(),
        })
        .collect::<Vec<_>>();

    let missing = response.albums.iter().filter(|a| a.is_none()).count();
    println!("{}", Table::new(rows));
    if missing > 0 {
        info!("{} album id(s) not found", missing);
    }
}
