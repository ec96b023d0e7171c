use async_trait::async_trait;
use flickdeck_models::{Genre, Movie};

use crate::categories::Category;
use crate::error::CatalogError;

/// Uniform read surface over the movie catalog provider.
///
/// Every screen that displays movie data goes through this trait; it is
/// the seam tests stub out.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Current week's trending movies, in the provider's own ranking order.
    async fn trending(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Generic parametrized discovery fetch for a named category.
    async fn by_category(&self, category: &Category) -> Result<Vec<Movie>, CatalogError>;

    /// Discovery filtered to a single genre.
    async fn by_genre(&self, genre_id: u64) -> Result<Vec<Movie>, CatalogError>;

    /// Single movie enriched with genres, runtime and videos.
    async fn details(&self, movie_id: u64) -> Result<Movie, CatalogError>;

    /// Free-text title search. An empty query is passed through to the
    /// provider unvalidated.
    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError>;

    /// Full genre vocabulary.
    async fn genres(&self) -> Result<Vec<Genre>, CatalogError>;
}
