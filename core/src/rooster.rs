// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::Local;
use rooster_feed::FeedClient;

use crate::config::Config;
use crate::filter::TitleFilter;
use crate::schedule::ScheduleSnapshot;
use crate::sensor::{Sensor, SensorValue};

/// Rooster timetable watcher core.
///
/// Holds the last good [`ScheduleSnapshot`]; every derived value is a pure
/// projection of it. A refresh either completes and swaps in a fresh
/// snapshot as a unit, or fails and leaves the previous one untouched, so
/// consumers keep reading stale-but-valid values until the feed recovers.
#[derive(Debug)]
pub struct Rooster {
    config: Config,
    client: FeedClient,
    filter: Option<TitleFilter>,
    snapshot: Option<ScheduleSnapshot>,
}

impl Rooster {
    /// Creates a new engine with the given configuration.
    ///
    /// Fails when the HTTP client cannot be built or the configured title
    /// pattern is rejected; a bad pattern is a configuration error and
    /// never discovered per event.
    pub fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        let client = FeedClient::new(config.feed.clone())
            .map_err(|e| format!("Failed to create feed client: {e}"))?;

        let filter = match &config.schedule.title_pattern {
            Some(pattern) => {
                Some(TitleFilter::new(pattern).map_err(|e| format!("Invalid title_pattern: {e}"))?)
            }
            None => None,
        };

        Ok(Self {
            config,
            client,
            filter,
            snapshot: None,
        })
    }

    /// The display heading configured for this timetable.
    pub fn name(&self) -> &str {
        &self.config.schedule.name
    }

    /// Fetches the feed and replaces the snapshot.
    ///
    /// On any fetch or parse failure the previous snapshot is retained and
    /// the error is handed back to the caller.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), Box<dyn Error>> {
        let calendar = self
            .client
            .fetch()
            .await
            .map_err(|e| format!("Failed to refresh feed: {e}"))?;

        let today = Local::now().date_naive();
        let snapshot = ScheduleSnapshot::build(&calendar, today);
        tracing::debug!(
            today = %snapshot.today.date,
            today_events = snapshot.today.events.len(),
            next_school_day = %snapshot.next_school_day.date,
            next_school_day_events = snapshot.next_school_day.events.len(),
            "classified feed"
        );

        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// The latest snapshot, if any refresh has succeeded yet.
    pub fn snapshot(&self) -> Option<&ScheduleSnapshot> {
        self.snapshot.as_ref()
    }

    /// Projects one derived value from the latest snapshot.
    pub fn value(&self, sensor: Sensor) -> Result<SensorValue, Box<dyn Error>> {
        sensor
            .project(self.snapshot.as_ref(), self.filter.as_ref())
            .map_err(Into::into)
    }
}
