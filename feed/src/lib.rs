// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Retrieval of remote iCalendar timetable feeds.
//!
//! This crate covers the two collaborators the schedule core treats as
//! external: downloading the raw feed text over HTTP and parsing it into
//! generic calendar components. Consumers receive either a parsed
//! [`icalendar::Calendar`] or a [`FeedError`] describing why the refresh
//! has to be abandoned.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

mod client;
mod config;
mod error;

pub use crate::client::FeedClient;
pub use crate::config::{AuthMethod, FeedConfig};
pub use crate::error::FeedError;
