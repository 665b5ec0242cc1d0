//! Errors raised for non-successful platform API responses.

use chrono::{DateTime, Local, TimeZone, Utc};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Deserialize;

pub const RATE_LIMIT_HEADER: &str = "x-ratelimit-limit";
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate limit state reported by the platform when the request quota is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// When the window resets, in local time.
    pub reset_at: DateTime<Local>,
    /// Whole seconds until the reset, rounded up and never negative.
    pub seconds_until_reset: u64,
}

impl RateLimit {
    /// Reads the rate limit headers of a failed response.
    ///
    /// Returns `None` unless the remaining count is exactly zero and both the
    /// limit and the reset epoch can be parsed.
    pub fn from_headers(headers: &HeaderMap, now: DateTime<Utc>) -> Option<Self> {
        let remaining: u32 = header(headers, RATE_LIMIT_REMAINING_HEADER)?.parse().ok()?;
        if remaining != 0 {
            return None;
        }

        let limit = header(headers, RATE_LIMIT_HEADER)?.parse().ok()?;
        let reset_epoch: i64 = header(headers, RATE_LIMIT_RESET_HEADER)?.parse().ok()?;
        let reset = Utc.timestamp_opt(reset_epoch, 0).single()?;

        let millis = (reset - now).num_milliseconds();
        let seconds_until_reset = if millis <= 0 {
            0
        } else {
            (millis as u64).div_ceil(1000)
        };

        Some(Self {
            limit,
            reset_at: reset.with_timezone(&Local),
            seconds_until_reset,
        })
    }
}

fn header<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name)?.to_str().ok().map(str::trim)
}

/// A non-2xx response from the platform API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(
        "GitHub rate limit exceeded. The current limit is {} and it resets at {}. Try again in {} seconds.",
        .rate_limit.limit,
        .rate_limit.reset_at.format("%Y-%m-%d %H:%M:%S"),
        .rate_limit.seconds_until_reset
    )]
    RateLimited {
        status: StatusCode,
        rate_limit: RateLimit,
    },

    #[error("GitHub API error {status}: {message}")]
    Status { status: StatusCode, message: String },
}

/// Body of a platform error response.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Builds the error for a failed response, consuming its body.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();

        if let Some(rate_limit) = RateLimit::from_headers(response.headers(), Utc::now()) {
            return ApiError::RateLimited { status, rate_limit };
        }

        let body = response.text().await.unwrap_or_default();
        ApiError::Status {
            status,
            message: error_message(status, &body),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RateLimited { status, .. } | ApiError::Status { status, .. } => *status,
        }
    }

    pub fn rate_limit(&self) -> Option<&RateLimit> {
        match self {
            ApiError::RateLimited { rate_limit, .. } => Some(rate_limit),
            ApiError::Status { .. } => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.rate_limit().is_some()
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == StatusCode::NOT_FOUND
    }
}

/// Extracts the platform's `message` field, falling back to the reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}
