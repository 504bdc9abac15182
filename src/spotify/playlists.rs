use std::fmt::Display;

use super::ApiClient;
use crate::{
    error::Result,
    types::{
        AddTracksToPlaylistRequest, CreatePlaylistRequest, Paging, Playlist, SimplifiedPlaylist,
        SnapshotId,
    },
};

impl ApiClient {
    /// Returns the first page of a user's playlists.
    pub async fn get_users_playlists(&self, user_id: &str) -> Result<Paging<SimplifiedPlaylist>> {
        self.api_get(&format!("/users/{user_id}/playlists"), &[]).await
    }

    /// Creates a playlist and returns it.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Spotify ID of the owning user
    /// * `name` - Name for the playlist
    /// * `description` - Description shown in Spotify clients
    /// * `is_public` - Whether the playlist is public or private
    pub async fn create_playlist(
        &self,
        user_id: impl Display,
        name: &str,
        description: &str,
        is_public: bool,
    ) -> Result<Playlist> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: is_public,
        };
        self.api_post(&format!("/me/playlists?user_id={user_id}"), &body)
            .await
    }

    /// Adds tracks to a playlist and returns the new snapshot ID.
    ///
    /// At most 100 URIs are accepted per request by the API; chunking is up to
    /// the caller.
    pub async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        track_uris: &[String],
    ) -> Result<SnapshotId> {
        let body = AddTracksToPlaylistRequest {
            uris: track_uris.to_vec(),
        };
        self.api_post(&format!("/playlists/{playlist_id}/tracks"), &body)
            .await
    }
}
