use flickdeck_catalog::{movie_categories, Catalog, CatalogError, ImageUrls};
use flickdeck_models::{Genre, Movie, Profile};
use flickdeck_store::{ProfileStore, SessionHandle, WatchlistStore};
use futures::future::join_all;
use std::collections::HashMap;
use tracing::warn;

use crate::watchlist_sync::WatchlistSync;

/// One horizontally-scrolling row of cards. Movies stay in the provider's
/// order; no client-side re-sort.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub title: &'static str,
    pub movies: Vec<Movie>,
}

/// The home screen: a hero banner over the fixed category rows.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeScreen {
    pub rows: Vec<CategoryRow>,
}

impl HomeScreen {
    /// Hero banner movie: the first trending result, when there is one.
    pub fn hero(&self) -> Option<&Movie> {
        self.rows
            .iter()
            .find(|row| row.title == "Trending Now")
            .and_then(|row| row.movies.first())
    }

    /// Backdrop URL for the hero banner, falling back to the placeholder
    /// when the movie has no backdrop.
    pub fn hero_backdrop(&self, images: &ImageUrls) -> Option<String> {
        self.hero()
            .map(|movie| images.backdrop(movie.backdrop_path.as_deref()))
    }
}

/// Fetch every category concurrently and merge as results arrive.
///
/// Merge order is irrelevant: results land in a map keyed by category
/// title, and display order follows the fixed category list. A failed
/// category degrades to an empty row with a logged diagnostic.
pub async fn load_home(catalog: &dyn Catalog) -> HomeScreen {
    let fetches = movie_categories().iter().map(|category| async move {
        (category.title, catalog.by_category(category).await)
    });

    let mut by_title: HashMap<&'static str, Vec<Movie>> = HashMap::new();
    for (title, result) in join_all(fetches).await {
        match result {
            Ok(movies) => {
                by_title.insert(title, movies);
            }
            Err(e) => {
                warn!(category = title, error = %e, "Category fetch failed, showing empty row");
            }
        }
    }

    let rows = movie_categories()
        .iter()
        .map(|category| CategoryRow {
            title: category.title,
            movies: by_title.remove(category.title).unwrap_or_default(),
        })
        .collect();

    HomeScreen { rows }
}

/// The movies browse screen: the full genre vocabulary for the filter
/// control plus one page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviesScreen {
    pub genres: Vec<Genre>,
    pub selected: Option<u64>,
    pub movies: Vec<Movie>,
}

impl MoviesScreen {
    /// Display name of the selected genre, when the vocabulary knows it.
    pub fn selected_name(&self) -> Option<&str> {
        let id = self.selected?;
        self.genres
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
    }
}

/// No genre selected browses trending; a selected genre switches to
/// discover-by-genre. A failed vocabulary fetch leaves the filter list
/// empty without blocking the results.
pub async fn load_movies(catalog: &dyn Catalog, genre: Option<u64>) -> MoviesScreen {
    let genres = match catalog.genres().await {
        Ok(genres) => genres,
        Err(e) => {
            warn!(error = %e, "Genre vocabulary fetch failed, filter list will be empty");
            Vec::new()
        }
    };

    let result = match genre {
        Some(genre_id) => catalog.by_genre(genre_id).await,
        None => catalog.trending().await,
    };
    let movies = match result {
        Ok(movies) => movies,
        Err(e) => {
            warn!(?genre, error = %e, "Movies fetch failed, showing no results");
            Vec::new()
        }
    };

    MoviesScreen {
        genres,
        selected: genre,
        movies,
    }
}

#[derive(Debug)]
pub enum DetailScreen {
    Found {
        movie: Movie,
        watchlist: WatchlistSync,
    },
    NotFound,
    Unavailable,
}

/// Detail fetch plus a one-shot watchlist reconciliation.
///
/// An unknown id renders "movie not found"; a transport failure degrades
/// to an empty screen. A failed membership check falls back to
/// not-in-list rather than blocking the screen.
pub async fn load_detail(
    catalog: &dyn Catalog,
    store: &dyn WatchlistStore,
    session: &SessionHandle,
    movie_id: u64,
) -> DetailScreen {
    let movie = match catalog.details(movie_id).await {
        Ok(movie) => movie,
        Err(CatalogError::NotFound { .. }) => return DetailScreen::NotFound,
        Err(e) => {
            warn!(movie_id, error = %e, "Detail fetch failed");
            return DetailScreen::Unavailable;
        }
    };

    let watchlist = match WatchlistSync::reconcile(store, session, movie.id).await {
        Ok(sync) => sync,
        Err(e) => {
            warn!(movie_id, error = %e, "Membership check failed, assuming not in list");
            WatchlistSync::detached(session)
        }
    };

    DetailScreen::Found { movie, watchlist }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WatchlistScreen {
    /// No session: the caller redirects to sign-in.
    SignInRequired,
    Loaded(Vec<Movie>),
}

/// The signed-in user's saved movies, newest first, as display movies
/// (the stored snapshot carries no genre ids).
pub async fn load_watchlist(store: &dyn WatchlistStore, session: &SessionHandle) -> WatchlistScreen {
    let user_id = match session.current_user_id() {
        Some(uid) => uid,
        None => return WatchlistScreen::SignInRequired,
    };

    let entries = match store.entries(&user_id).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "Watchlist load failed, showing empty list");
            Vec::new()
        }
    };

    WatchlistScreen::Loaded(entries.into_iter().map(|e| e.into_movie()).collect())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileScreen {
    SignInRequired,
    Loaded(Option<Profile>),
}

pub async fn load_profile(store: &dyn ProfileStore, session: &SessionHandle) -> ProfileScreen {
    let user_id = match session.current_user_id() {
        Some(uid) => uid,
        None => return ProfileScreen::SignInRequired,
    };

    match store.profile(&user_id).await {
        Ok(profile) => ProfileScreen::Loaded(profile),
        Err(e) => {
            warn!(error = %e, "Profile load failed");
            ProfileScreen::Loaded(None)
        }
    }
}

/// Free-text title search, provider order preserved. Failures degrade to
/// an empty result set at this boundary.
pub async fn search(catalog: &dyn Catalog, query: &str) -> Vec<Movie> {
    match catalog.search(query).await {
        Ok(movies) => movies,
        Err(e) => {
            warn!(query, error = %e, "Search failed, returning no results");
            Vec::new()
        }
    }
}
