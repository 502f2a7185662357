// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

/// Feed retrieval errors.
///
/// A refresh either completes or fails with one of these; retry policy is
/// the caller's business.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("unexpected response status: {0}")]
    Status(StatusCode),

    /// The payload is not a parseable iCalendar document.
    #[error("iCalendar parsing error: {0}")]
    Ical(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}
