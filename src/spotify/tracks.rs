use super::ApiClient;
use crate::{
    error::Result,
    types::{Paging, Recommendations, TimeRange, Track, Tracks},
    utils::encode_component,
};

/// Number of tracks asked for by [`ApiClient::get_users_top_tracks`] when no
/// count is given, and by [`ApiClient::get_recommended_tracks`].
pub const DEFAULT_TRACK_LIMIT: u32 = 50;

impl ApiClient {
    /// Returns one track by ID.
    pub async fn get_track(&self, track_id: &str) -> Result<Track> {
        self.api_get(&format!("/tracks/{track_id}"), &[]).await
    }

    /// Returns several tracks. The comma separated ID list is percent-encoded.
    pub async fn get_tracks(&self, track_ids: &str) -> Result<Tracks> {
        self.api_get(&format!("/tracks?ids={}", encode_component(track_ids)), &[])
            .await
    }

    /// Returns the current user's top tracks.
    ///
    /// # Arguments
    ///
    /// * `time_range` - Period the affinity is computed over, `long_term` if unset
    /// * `count` - Number of tracks to return (max 50), `50` if unset
    pub async fn get_users_top_tracks(
        &self,
        time_range: Option<TimeRange>,
        count: Option<u32>,
    ) -> Result<Paging<Track>> {
        let params = [
            (
                "time_range".to_string(),
                time_range.unwrap_or_default().to_string(),
            ),
            (
                "limit".to_string(),
                count.unwrap_or(DEFAULT_TRACK_LIMIT).to_string(),
            ),
        ];
        self.api_get("/me/top/tracks", &params).await
    }

    /// Returns up to 50 recommended tracks for the given seeds.
    ///
    /// Both seed lists are comma separated ID lists and are percent-encoded.
    /// The API accepts at most five seeds in total; that limit is left to the
    /// caller.
    pub async fn get_recommended_tracks(
        &self,
        seed_artists: &str,
        seed_tracks: &str,
    ) -> Result<Recommendations> {
        self.api_get(
            &format!(
                "/recommendations?limit={limit}&seed_artists={artists}&seed_tracks={tracks}",
                limit = DEFAULT_TRACK_LIMIT,
                artists = encode_component(seed_artists),
                tracks = encode_component(seed_tracks),
            ),
            &[],
        )
        .await
    }
}
