pub mod error;
pub mod memory;
pub mod rest;
pub mod session;
pub mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use rest::RestStore;
pub use session::{AuthEvent, SessionHandle};
pub use traits::{ProfileStore, WatchlistStore};
