pub mod notify;
pub mod player;
pub mod routes;
pub mod screens;
pub mod watchlist_sync;

pub use notify::{CollectingNotifier, Notifier};
pub use player::{embed_url, select_trailer, PlayerScreen};
pub use routes::Route;
pub use screens::{
    load_detail, load_home, load_movies, load_profile, load_watchlist, search, CategoryRow,
    DetailScreen, HomeScreen, MoviesScreen, ProfileScreen, WatchlistScreen,
};
pub use watchlist_sync::{Membership, ToggleOutcome, WatchlistSync};
