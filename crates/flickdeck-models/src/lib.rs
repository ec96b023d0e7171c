pub mod genre;
pub mod movie;
pub mod notification;
pub mod profile;
pub mod video;
pub mod watchlist;

pub use genre::Genre;
pub use movie::Movie;
pub use notification::{Notification, NotificationKind};
pub use profile::Profile;
pub use video::{Video, VideoList};
pub use watchlist::WatchlistEntry;
