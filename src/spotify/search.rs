use super::ApiClient;
use crate::{error::Result, types::SearchResults, utils::encode_component};

impl ApiClient {
    /// Searches the catalog.
    ///
    /// # Arguments
    ///
    /// * `query` - Search keywords and field filters, percent-encoded
    /// * `types` - Comma separated item types, e.g. `track,artist`, percent-encoded
    /// * `count` - Maximum number of results per type
    pub async fn search(&self, query: &str, types: &str, count: u32) -> Result<SearchResults> {
        self.api_get(
            &format!(
                "/search?q={q}&type={types}&limit={count}",
                q = encode_component(query),
                types = encode_component(types),
            ),
            &[],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::testing::*;

    #[tokio::test]
    async fn search_encodes_query_and_types() {
        let transport = RecordingTransport::responding(json!({
            "tracks": { "items": [{ "id": "t", "name": "Around the World" }] },
            "playlists": { "items": [null] }
        }));
        let client = client_with(&transport);

        let results = client
            .search("artist:Daft Punk", "track,playlist", 5)
            .await
            .unwrap();

        assert_eq!(
            transport.last().url,
            url("/search?q=artist%3ADaft%20Punk&type=track%2Cplaylist&limit=5")
        );
        assert_eq!(results.tracks.unwrap().items[0].name, "Around the World");
        assert!(results.artists.is_none());
        assert!(results.playlists.unwrap().items[0].is_none());
    }
}
