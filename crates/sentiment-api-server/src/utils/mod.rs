pub mod error;
pub mod rate_limiter;

pub use error::ApiError;
pub use rate_limiter::RateLimiter;
