pub mod account;
pub mod browse;
pub mod config;
mod context;
pub mod watchlist;

pub use context::AppContext;
