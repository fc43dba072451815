//! Artist filtering over the catalog. Everything here is pure.

use super::types::{ArtistFilter, Song};

/// Distinct, non-empty artists in first-seen order.
pub fn distinct_artists(songs: &[Song]) -> Vec<String> {
    let mut artists: Vec<String> = Vec::new();
    for artist in songs.iter().filter_map(Song::artist_name) {
        if !artists.iter().any(|a| a == artist) {
            artists.push(artist.to_string());
        }
    }
    artists
}

/// `All` followed by one entry per distinct artist.
pub fn artist_options(songs: &[Song]) -> Vec<ArtistFilter> {
    std::iter::once(ArtistFilter::All)
        .chain(distinct_artists(songs).into_iter().map(ArtistFilter::Artist))
        .collect()
}

/// Songs matching `selection`, in catalog order. Matching is exact.
pub fn filter<'a>(songs: &'a [Song], selection: &ArtistFilter) -> Vec<&'a Song> {
    match selection {
        ArtistFilter::All => songs.iter().collect(),
        ArtistFilter::Artist(name) => songs
            .iter()
            .filter(|s| s.artist.as_deref() == Some(name.as_str()))
            .collect(),
    }
}
