use spotify_rg::types::{SimplifiedAlbum, SimplifiedArtist, SimplifiedPlaylist, Track};
use spotify_rg::utils::*;

// Helper function to create a test artist reference
fn artist(name: &str) -> SimplifiedArtist {
    SimplifiedArtist {
        id: format!("{}_id", name.to_lowercase()),
        name: name.to_string(),
        uri: String::new(),
    }
}

// Helper function to create a test track
fn track(name: &str, artists: &[&str], album: Option<&str>) -> Track {
    Track {
        id: Some(format!("{}_id", name)),
        name: name.to_string(),
        uri: format!("spotify:track:{}", name),
        duration_ms: 0,
        popularity: None,
        explicit: false,
        track_number: None,
        artists: artists.iter().map(|a| artist(a)).collect(),
        album: album.map(|a| SimplifiedAlbum {
            id: "al".to_string(),
            name: a.to_string(),
            uri: String::new(),
            album_type: "album".to_string(),
            release_date: "2001-03-12".to_string(),
            release_date_precision: None,
            total_tracks: None,
            artists: Vec::new(),
            images: Vec::new(),
        }),
    }
}

#[test]
fn test_encode_component_reserved_characters() {
    assert_eq!(encode_component("1,2,3"), "1%2C2%2C3");
    assert_eq!(encode_component("https://app/cb"), "https%3A%2F%2Fapp%2Fcb");
    assert_eq!(encode_component("a b"), "a%20b");
    assert_eq!(encode_component("genre:rock&x=1"), "genre%3Arock%26x%3D1");
}

#[test]
fn test_encode_component_leaves_unreserved() {
    let unreserved = "AZaz09-_.~";
    assert_eq!(encode_component(unreserved), unreserved);
    assert_eq!(encode_component(""), "");
}

#[test]
fn test_encode_component_sub_delims() {
    assert_eq!(encode_component("Don't (live)!"), "Don%27t%20%28live%29%21");
    assert_eq!(encode_component("*"), "%2A");
}

#[test]
fn test_encode_component_utf8() {
    assert_eq!(encode_component("é"), "%C3%A9");
}

#[test]
fn test_market_or_from_token() {
    assert_eq!(market_or_from_token(None), FROM_TOKEN);
    assert_eq!(market_or_from_token(Some("US")), "US");
    assert_eq!(market_or_from_token(Some("fi")), "fi");
    assert_eq!(market_or_from_token(Some("USA")), "from_token");
    assert_eq!(market_or_from_token(Some("U")), "from_token");
    assert_eq!(market_or_from_token(Some("")), "from_token");
}

#[test]
fn test_market_or_from_token_counts_chars() {
    assert_eq!(market_or_from_token(Some("ÅÄ")), "ÅÄ");
    assert_eq!(market_or_from_token(Some("🇫🇮")), "🇫🇮");
    assert_eq!(market_or_from_token(Some("Å")), "from_token");
}

#[test]
fn test_artist_names() {
    assert_eq!(artist_names(&[]), "");
    assert_eq!(
        artist_names(&[artist("Daft Punk"), artist("Pharrell Williams")]),
        "Daft Punk, Pharrell Williams"
    );
}

#[test]
fn test_track_rows() {
    let tracks = vec![
        track("Get Lucky", &["Daft Punk", "Pharrell Williams"], Some("RAM")),
        track("Loose", &["Solo"], None),
    ];

    let rows = track_rows(&tracks);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].artists, "Daft Punk, Pharrell Williams");
    assert_eq!(rows[0].album, "RAM");
    assert_eq!(rows[0].uri, "spotify:track:Get Lucky");
    assert_eq!(rows[1].album, "");
}

#[test]
fn test_playlist_rows_visibility() {
    let playlist = |public: Option<bool>| SimplifiedPlaylist {
        id: "p".to_string(),
        name: "List".to_string(),
        description: None,
        public,
        collaborative: false,
        snapshot_id: String::new(),
        uri: String::new(),
        owner: None,
        tracks: None,
    };

    let rows = playlist_rows(&[playlist(Some(true)), playlist(Some(false)), playlist(None)]);

    let visibility: Vec<&str> = rows.iter().map(|r| r.public.as_str()).collect();
    assert_eq!(visibility, vec!["yes", "no", "-"]);
    assert!(rows.iter().all(|r| r.tracks == 0));
}
