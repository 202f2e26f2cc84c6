// Service exports
pub mod auth;
pub mod cache;
pub mod postgres;

pub use auth::{AuthError, Claims, Identity, TokenVerifier};
pub use cache::{CacheError, CacheKey, CacheManager};
pub use postgres::{PgStore, StoreError};
