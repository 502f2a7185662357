// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use rooster_feed::FeedConfig;

/// The name of the rooster application.
pub const APP_NAME: &str = "rooster";

/// Configuration for the rooster engine.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// The feed to watch.
    pub feed: FeedConfig,

    /// How the timetable is interpreted and presented.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Schedule interpretation options.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ScheduleConfig {
    /// Heading shown above the derived values.
    #[serde(default = "default_name")]
    pub name: String,

    /// Pattern reducing an event title to its interesting part. Must
    /// contain one capturing group; titles that do not match pass through
    /// unchanged.
    #[serde(default)]
    pub title_pattern: Option<String>,
}

fn default_name() -> String {
    "Inpakken voor morgen".to_string()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            title_pattern: None,
        }
    }
}
