use super::ApiClient;
use crate::{
    error::Result,
    types::{Artist, Artists, Paging, SimplifiedAlbum, TopTracks},
    utils,
};

impl ApiClient {
    /// Returns a single artist by its Spotify ID.
    pub async fn get_artist(&self, artist_id: &str) -> Result<Artist> {
        self.api_get(&format!("/artists/{artist_id}"), &[]).await
    }

    /// Returns several artists from a comma separated ID list.
    pub async fn get_artists(&self, artist_ids: &str) -> Result<Artists> {
        self.api_get(&format!("/artists?ids={artist_ids}"), &[]).await
    }

    /// Returns the first page of an artist's albums.
    pub async fn get_artists_albums(&self, artist_id: &str) -> Result<Paging<SimplifiedAlbum>> {
        self.api_get(&format!("/artists/{artist_id}/albums"), &[]).await
    }

    /// Returns an artist's top tracks in a market.
    ///
    /// `country` must be a two character code such as `FI`. Anything else,
    /// including `None`, sends `from_token` and lets the API pick the market
    /// of the token's user.
    pub async fn get_artists_top_tracks(
        &self,
        artist_id: &str,
        country: Option<&str>,
    ) -> Result<TopTracks> {
        let country = utils::market_or_from_token(country);
        self.api_get(
            &format!("/artists/{artist_id}/top-tracks?country={country}"),
            &[],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::testing::*;

    fn top_tracks() -> RecordingTransport {
        RecordingTransport::responding(json!({ "tracks": [] }))
    }

    #[tokio::test]
    async fn get_artist_path() {
        let transport = RecordingTransport::responding(json!({
            "id": "abc", "name": "Daft Punk", "genres": ["french house"],
            "followers": { "total": 10 }
        }));
        let client = client_with(&transport);

        let artist = client.get_artist("abc").await.unwrap();

        assert_eq!(transport.last().url, url("/artists/abc"));
        assert_eq!(artist.genres, vec!["french house"]);
        assert_eq!(artist.followers.unwrap().total, 10);
    }

    #[tokio::test]
    async fn get_artists_and_albums_paths() {
        let transport = RecordingTransport::responding(json!({ "artists": [] }));
        let client = client_with(&transport);
        client.get_artists("a,b,c").await.unwrap();
        assert_eq!(transport.last().url, url("/artists?ids=a,b,c"));

        let transport = RecordingTransport::responding(json!({ "items": [] }));
        let client = client_with(&transport);
        client.get_artists_albums("abc").await.unwrap();
        assert_eq!(transport.last().url, url("/artists/abc/albums"));
    }

    #[tokio::test]
    async fn top_tracks_defaults_to_from_token() {
        let transport = top_tracks();
        let client = client_with(&transport);

        client.get_artists_top_tracks("abc", None).await.unwrap();

        assert_eq!(
            transport.last().url,
            url("/artists/abc/top-tracks?country=from_token")
        );
    }

    #[tokio::test]
    async fn top_tracks_uses_two_letter_country() {
        let transport = top_tracks();
        let client = client_with(&transport);

        client.get_artists_top_tracks("abc", Some("US")).await.unwrap();

        assert_eq!(transport.last().url, url("/artists/abc/top-tracks?country=US"));
    }

    #[tokio::test]
    async fn top_tracks_rejects_other_lengths() {
        let transport = top_tracks();
        let client = client_with(&transport);

        client.get_artists_top_tracks("abc", Some("USA")).await.unwrap();
        assert!(transport.last().url.ends_with("country=from_token"));

        client.get_artists_top_tracks("abc", Some("")).await.unwrap();
        assert!(transport.last().url.ends_with("country=from_token"));
    }
}
