// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;
use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, KSoftError>;

/// API error code for a request missing required parameters.
pub const ERROR_CODE_MISSING_PARAMETERS: i64 = 123;
/// API error code for a parameter with an invalid value.
pub const ERROR_CODE_INVALID_VALUE: i64 = 124;
/// API error code for a record that already exists (e.g. duplicate ban).
pub const ERROR_CODE_ALREADY_EXISTS: i64 = 125;

#[derive(Debug, Error)]
pub enum KSoftError {
    #[error("no token provided")]
    MissingToken,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("rate limited: {0}")]
    RateLimited(ErrorResponse),

    #[error("unauthorized, token was rejected: {0}")]
    Unauthorized(ErrorResponse),

    #[error("API error: {0}")]
    Api(ErrorResponse),

    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error payload the API returns alongside non-success statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorMessage {
    pub code: i64,
    pub message: String,
}

/// Everything the client knows about a failed round trip: the request that
/// was sent, the response status and headers, the verbatim body bytes, and
/// the decoded `{code, message}` payload when the body parses as one.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    pub method: Method,
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub message: Option<ApiErrorMessage>,
}

impl ErrorResponse {
    pub(crate) fn new(
        method: Method,
        url: Url,
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Self {
        let message = serde_json::from_slice(&body).ok();
        Self {
            method,
            url,
            status,
            headers,
            body,
            message,
        }
    }

    /// Response body as text, lossily converted if it is not valid UTF-8.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(
                f,
                "HTTP {} for {} {}: code {}, {}",
                self.status, self.method, self.url, msg.code, msg.message
            ),
            None => write!(
                f,
                "HTTP {} for {} {}: {}",
                self.status,
                self.method,
                self.url,
                self.body_text()
            ),
        }
    }
}
