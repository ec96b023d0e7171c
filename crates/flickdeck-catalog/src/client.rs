use async_trait::async_trait;
use flickdeck_config::CatalogConfig;
use flickdeck_models::{Genre, Movie};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::categories::Category;
use crate::error::CatalogError;
use crate::images::ImageUrls;
use crate::traits::Catalog;

/// Response envelope for list endpoints.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    results: Vec<Movie>,
}

/// Response envelope for the genre vocabulary endpoint.
#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

/// HTTP client for the movie catalog provider.
///
/// Single point of translation between abstract catalog queries and
/// concrete network calls. The base URL, credential parameter and response
/// envelope shapes live here and nowhere else.
pub struct CatalogClient {
    client: Client,
    api_key: String,
    base_url: String,
    images: ImageUrls,
    // Genre vocabulary is near-static, fetch it at most once per client
    genres: OnceCell<Vec<Genre>>,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            images: ImageUrls::new(config.image_base_url.clone()),
            genres: OnceCell::new(),
        }
    }

    pub fn images(&self) -> &ImageUrls {
        &self.images
    }

    /// Append the credential parameter, joining with `&` when the endpoint
    /// already carries a query string and `?` otherwise.
    fn build_url(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}api_key={}",
            self.base_url, endpoint, separator, self.api_key
        )
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, CatalogError> {
        let url = self.build_url(endpoint);
        debug!(endpoint, "Fetching from catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(CatalogError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint, %status, "Catalog request failed");
            return Err(CatalogError::status(status, body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn trending(&self) -> Result<Vec<Movie>, CatalogError> {
        let data: ListResponse = self.fetch("/trending/movie/week").await?;
        Ok(data.results)
    }

    async fn by_category(&self, category: &Category) -> Result<Vec<Movie>, CatalogError> {
        let data: ListResponse = self.fetch(category.endpoint).await?;
        Ok(data.results)
    }

    async fn by_genre(&self, genre_id: u64) -> Result<Vec<Movie>, CatalogError> {
        let endpoint = format!("/discover/movie?with_genres={}", genre_id);
        let data: ListResponse = self.fetch(&endpoint).await?;
        Ok(data.results)
    }

    async fn details(&self, movie_id: u64) -> Result<Movie, CatalogError> {
        let endpoint = format!("/movie/{}?append_to_response=videos,credits", movie_id);
        match self.fetch::<Movie>(&endpoint).await {
            Err(CatalogError::Unavailable {
                status: Some(status),
                ..
            }) if status == StatusCode::NOT_FOUND => Err(CatalogError::NotFound { movie_id }),
            other => other,
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let endpoint = format!("/search/movie?query={}", urlencoding::encode(query));
        let data: ListResponse = self.fetch(&endpoint).await?;
        Ok(data.results)
    }

    async fn genres(&self) -> Result<Vec<Genre>, CatalogError> {
        let genres = self
            .genres
            .get_or_try_init(|| async {
                let data: GenreListResponse = self.fetch("/genre/movie/list").await?;
                Ok::<_, CatalogError>(data.genres)
            })
            .await?;
        Ok(genres.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatalogClient {
        CatalogClient::new(&CatalogConfig {
            api_key: "test-key".to_string(),
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
        })
    }

    #[test]
    fn test_build_url_appends_key_with_question_mark() {
        let url = client().build_url("/trending/movie/week");
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/trending/movie/week?api_key=test-key"
        );
    }

    #[test]
    fn test_build_url_appends_key_with_ampersand_when_query_present() {
        let url = client().build_url("/discover/movie?with_genres=28");
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/discover/movie?with_genres=28&api_key=test-key"
        );
    }

    #[test]
    fn test_search_query_is_url_encoded() {
        let encoded = urlencoding::encode("blade runner & friends");
        assert_eq!(encoded, "blade%20runner%20%26%20friends");
    }

    #[test]
    fn test_list_envelope_deserializes_movies() {
        let json = r#"{
            "page": 1,
            "results": [
                {
                    "id": 603,
                    "title": "The Matrix",
                    "overview": "A hacker discovers reality is a simulation.",
                    "poster_path": "/matrix.jpg",
                    "backdrop_path": null,
                    "release_date": "1999-03-30",
                    "vote_average": 8.2,
                    "genre_ids": [28, 878]
                }
            ],
            "total_pages": 1,
            "total_results": 1
        }"#;

        let data: ListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.results.len(), 1);
        let movie = &data.results[0];
        assert_eq!(movie.id, 603);
        assert_eq!(movie.genre_ids, vec![28, 878]);
        assert_eq!(movie.backdrop_path, None);
        assert!(movie.genres.is_none());
    }

    #[test]
    fn test_detail_envelope_is_a_flat_object_with_videos() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "overview": "A hacker discovers reality is a simulation.",
            "poster_path": "/matrix.jpg",
            "backdrop_path": "/matrix_backdrop.jpg",
            "release_date": "1999-03-30",
            "vote_average": 8.2,
            "runtime": 136,
            "genres": [
                {"id": 28, "name": "Action"},
                {"id": 878, "name": "Science Fiction"}
            ],
            "videos": {
                "results": [
                    {
                        "id": "v1",
                        "key": "vKQi3bBA1y8",
                        "name": "Official Trailer",
                        "site": "YouTube",
                        "type": "Trailer",
                        "official": true
                    }
                ]
            }
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.runtime, Some(136));
        let genres = movie.genres.unwrap();
        assert_eq!(genres[1].name, "Science Fiction");
        let videos = movie.videos.unwrap();
        assert_eq!(videos.results[0].key, "vKQi3bBA1y8");
        assert_eq!(videos.results[0].kind, "Trailer");
        // List-only field defaults to empty on a detail fetch
        assert!(movie.genre_ids.is_empty());
    }

    #[test]
    fn test_genre_envelope_deserializes() {
        let json = r#"{"genres": [{"id": 28, "name": "Action"}, {"id": 35, "name": "Comedy"}]}"#;
        let data: GenreListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.genres.len(), 2);
        assert_eq!(data.genres[0].name, "Action");
    }
}
