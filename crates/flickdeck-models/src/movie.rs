use serde::{Deserialize, Serialize};

use crate::genre::Genre;
use crate::video::VideoList;

/// A movie as returned by the catalog provider.
///
/// List endpoints populate `genre_ids`; a detail fetch instead populates
/// `genres`, `runtime` and `videos`. A missing poster or backdrop path means
/// "no image" and callers fall back to the local placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<VideoList>,
}

impl Movie {
    /// Release year, if the provider sent a date.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.split('-').next().filter(|y| !y.is_empty())
    }
}
