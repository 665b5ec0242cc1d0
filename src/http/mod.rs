//! Platform HTTP access: API client and typed API errors.

mod client;
mod error;

pub use client::{ApiClient, JSON_MEDIA_TYPE, RAW_MEDIA_TYPE, TOPICS_MEDIA_TYPE};
pub use error::{
    ApiError, RATE_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER, RateLimit,
};
