pub mod categories;
pub mod client;
pub mod error;
pub mod images;
pub mod traits;

pub use categories::{movie_categories, Category};
pub use client::CatalogClient;
pub use error::CatalogError;
pub use images::ImageUrls;
pub use traits::Catalog;
