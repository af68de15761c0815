pub mod api;
pub mod cache;

pub use api::AuthClient;
pub use cache::{CachedSession, SessionCache};
