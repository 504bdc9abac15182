use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{
    AlbumTableRow, Artist, ArtistTableRow, PlaylistTableRow, SimplifiedAlbum, SimplifiedArtist,
    SimplifiedPlaylist, SimplifiedTrack, Track, TrackTableRow,
};

/// Country value that tells the API to use the country of the token's user.
pub const FROM_TOKEN: &str = "from_token";

/// Percent-encodes a string for use as a single URL component.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is encoded, so `,`, `:`, `/` and
/// spaces all become `%XX` sequences. `! ' ( ) *` are encoded too, which
/// decodes to the same value on the server.
///
/// # Example
///
/// ```
/// assert_eq!(encode_component("1,2,3"), "1%2C2%2C3");
/// ```
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Picks the `country` value for the artist top tracks endpoint.
///
/// Anything other than a two character code falls back to [`FROM_TOKEN`].
/// Length is counted in `char`s, so a pair of astral-plane characters passes.
pub fn market_or_from_token(country: Option<&str>) -> &str {
    match country {
        Some(code) if code.chars().count() == 2 => code,
        _ => FROM_TOKEN,
    }
}

/// Joins artist names with `", "`.
pub fn artist_names(artists: &[SimplifiedArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn track_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: artist_names(&t.artists),
            album: t.album.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
            uri: t.uri.clone(),
        })
        .collect()
}

/// Rows for album track listings, which carry no album of their own.
pub fn simplified_track_rows(tracks: &[SimplifiedTrack], album: &str) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: artist_names(&t.artists),
            album: album.to_string(),
            uri: t.uri.clone(),
        })
        .collect()
}

pub fn album_rows(albums: &[SimplifiedAlbum]) -> Vec<AlbumTableRow> {
    albums
        .iter()
        .map(|a| AlbumTableRow {
            date: a.release_date.clone(),
            name: a.name.clone(),
            artists: artist_names(&a.artists),
            id: a.id.clone(),
        })
        .collect()
}

pub fn artist_rows(artists: &[Artist]) -> Vec<ArtistTableRow> {
    artists
        .iter()
        .map(|a| ArtistTableRow {
            name: a.name.clone(),
            genres: a.genres.iter().take(3).cloned().collect::<Vec<_>>().join(","),
            id: a.id.clone(),
        })
        .collect()
}

pub fn playlist_rows(playlists: &[SimplifiedPlaylist]) -> Vec<PlaylistTableRow> {
    playlists
        .iter()
        .map(|p| PlaylistTableRow {
            name: p.name.clone(),
            tracks: p.tracks.as_ref().map(|t| t.total).unwrap_or(0),
            public: match p.public {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => "-".to_string(),
            },
            id: p.id.clone(),
        })
        .collect()
}

/// Starts a spinner with the given message. Call `finish_and_clear` when done.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
