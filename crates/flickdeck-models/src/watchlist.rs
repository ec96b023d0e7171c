use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::movie::Movie;

/// A row in the remote `watchlist` table, unique on `(user_id, movie_id)`.
///
/// The display fields are a snapshot of the movie at the moment the user
/// added it. They are never updated afterwards, even if the catalog's
/// metadata changes upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub user_id: String,
    pub movie_id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl WatchlistEntry {
    /// Capture the denormalized snapshot used for an insert.
    pub fn from_movie(user_id: &str, movie: &Movie) -> Self {
        Self {
            user_id: user_id.to_string(),
            movie_id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            backdrop_path: movie.backdrop_path.clone(),
            overview: movie.overview.clone(),
            release_date: movie.release_date.clone(),
            vote_average: movie.vote_average,
            created_at: None,
        }
    }

    /// Convert a stored entry back into a displayable movie.
    ///
    /// Genre ids are not part of the snapshot, so the result carries none.
    pub fn into_movie(self) -> Movie {
        Movie {
            id: self.movie_id,
            title: self.title,
            overview: self.overview,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            release_date: self.release_date,
            vote_average: self.vote_average,
            genre_ids: Vec::new(),
            genres: None,
            runtime: None,
            videos: None,
        }
    }
}
