use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Response envelope shared by the `/me/top/tracks` and `/me/top/artists`
/// endpoints. Items arrive ranked most-listened first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopItems<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: Album,
    pub popularity: u32,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

/// Display-ready fields for the per-track detail view. Built from a fetched
/// [`Track`]; never round-trips back to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDetail {
    pub art_url: Option<String>,
    pub name: String,
    pub artists: String,
    pub album: String,
    pub popularity: u32,
    pub duration: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub rank: usize,
    pub name: String,
    pub artists: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub rank: usize,
    pub name: String,
}
