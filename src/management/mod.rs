mod auth;

pub use auth::TokenError;
pub use auth::TokenManager;
pub use auth::is_expired_at;
