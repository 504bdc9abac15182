use tabled::Table;

use super::{fetch, print_json};
use crate::{info, spotify::ApiClient, types::TimeRange, utils, warning};

pub async fn track(client: &ApiClient, track_id: &str) {
    let track = fetch("Fetching track...", client.get_track(track_id)).await;
    print_json(&track);
}

pub async fn tracks(client: &ApiClient, track_ids: &str) {
    let response = fetch("Fetching tracks...", client.get_tracks(track_ids)).await;
    let found = response.tracks.into_iter().flatten().collect::<Vec<_>>();
    println!("{}", Table::new(utils::track_rows(&found)));
}

pub async fn top_tracks(client: &ApiClient, time_range: Option<TimeRange>, limit: Option<u32>) {
    let page = fetch(
        "Fetching your top tracks...",
        client.get_users_top_tracks(time_range, limit),
    )
    .await;

    info!(
        "Top tracks ({})",
        time_range.unwrap_or_default()
    );
    println!("{}", Table::new(utils::track_rows(&page.items)));
}

pub async fn recommend(client: &ApiClient, seed_artists: &str, seed_tracks: &str) {
    let seeds = seed_artists.split(',').filter(|s| !s.is_empty()).count()
        + seed_tracks.split(',').filter(|s| !s.is_empty()).count();
    if seeds > 5 {
        warning!("{} seeds given, the API accepts at most 5.", seeds);
    }

    let response = fetch(
        "Fetching recommendations...",
        client.get_recommended_tracks(seed_artists, seed_tracks),
    )
    .await;
    println!("{}", Table::new(utils::track_rows(&response.tracks)));
}
