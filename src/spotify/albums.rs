use super::ApiClient;
use crate::{
    error::Result,
    types::{Album, Albums, Paging, SimplifiedTrack},
};

impl ApiClient {
    /// Returns a single album by its Spotify ID.
    pub async fn get_album(&self, album_id: &str) -> Result<Album> {
        self.api_get(&format!("/albums/{album_id}"), &[]).await
    }

    /// Returns several albums.
    ///
    /// `album_ids` is a comma separated list of IDs, appended to the query as
    /// given. Unknown IDs come back as `None`.
    pub async fn get_albums(&self, album_ids: &str) -> Result<Albums> {
        self.api_get(&format!("/albums?ids={album_ids}"), &[]).await
    }

    /// Returns the first page of an album's tracks.
    pub async fn get_albums_tracks(&self, album_id: &str) -> Result<Paging<SimplifiedTrack>> {
        self.api_get(&format!("/albums/{album_id}/tracks"), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::testing::*;

    #[tokio::test]
    async fn get_album_path() {
        let transport = RecordingTransport::responding(json!({
            "id": "4aaw",
            "name": "Discovery",
            "album_type": "album",
            "release_date": "2001-03-12",
            "tracks": { "items": [{ "id": "t1", "name": "One More Time" }] }
        }));
        let client = client_with(&transport);

        let album = client.get_album("4aaw").await.unwrap();

        let call = transport.last();
        assert_eq!(call.method, "GET");
        assert_eq!(call.url, url("/albums/4aaw"));
        assert!(call.params.is_empty());
        assert_eq!(album.name, "Discovery");
        assert_eq!(album.tracks.unwrap().items[0].name, "One More Time");
    }

    #[tokio::test]
    async fn get_albums_appends_ids_verbatim() {
        let transport = RecordingTransport::responding(json!({
            "albums": [{ "id": "a", "name": "A" }, null]
        }));
        let client = client_with(&transport);

        let albums = client.get_albums("a,b").await.unwrap();

        assert_eq!(transport.last().url, url("/albums?ids=a,b"));
        assert_eq!(albums.albums.len(), 2);
        assert!(albums.albums[1].is_none());
    }

    #[tokio::test]
    async fn get_albums_tracks_path() {
        let transport = RecordingTransport::responding(json!({
            "items": [], "total": 0, "limit": 20, "offset": 0, "next": null, "previous": null
        }));
        let client = client_with(&transport);

        let page = client.get_albums_tracks("xyz").await.unwrap();

        assert_eq!(transport.last().url, url("/albums/xyz/tracks"));
        assert!(page.items.is_empty());
    }
}
