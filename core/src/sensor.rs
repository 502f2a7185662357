// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The derived values exposed to the host, each a pure projection of the
//! latest [`ScheduleSnapshot`].

use crate::filter::{TitleFilter, TitleFilterError};
use crate::schedule::{DayBucket, ScheduleSnapshot};

/// All sensors, in presentation order.
pub const SENSORS: [Sensor; 6] = [
    Sensor::NextSchoolDay,
    Sensor::EarliestStartToday,
    Sensor::LatestEndToday,
    Sensor::EarliestStartNextDay,
    Sensor::LatestEndNextDay,
    Sensor::TitlesNextDay,
];

/// One derived value of the timetable.
///
/// All six are projections of the one shared snapshot; nothing is fetched
/// or classified per sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    /// Label of the next school day (weekday, day and month).
    NextSchoolDay,

    /// Earliest start time among today's events.
    EarliestStartToday,

    /// Latest end time among today's events.
    LatestEndToday,

    /// Earliest start time on the next school day.
    EarliestStartNextDay,

    /// Latest end time on the next school day.
    LatestEndNextDay,

    /// Joined, deduplicated, filtered titles on the next school day.
    TitlesNextDay,
}

impl Sensor {
    /// Stable identifier, usable as an entity key by the host.
    pub fn key(&self) -> &'static str {
        match self {
            Sensor::NextSchoolDay => "next_school_day",
            Sensor::EarliestStartToday => "earliest_start_today",
            Sensor::LatestEndToday => "latest_end_today",
            Sensor::EarliestStartNextDay => "earliest_start_next_day",
            Sensor::LatestEndNextDay => "latest_end_next_day",
            Sensor::TitlesNextDay => "titles_next_day",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Sensor::NextSchoolDay => "Next school day",
            Sensor::EarliestStartToday => "Earliest start today",
            Sensor::LatestEndToday => "Latest end today",
            Sensor::EarliestStartNextDay => "Earliest start next day",
            Sensor::LatestEndNextDay => "Latest end next day",
            Sensor::TitlesNextDay => "Titles next day",
        }
    }

    /// Projects this sensor's value out of the latest snapshot.
    ///
    /// Without a snapshot (no refresh has succeeded yet) every sensor is
    /// [`SensorValue::Unknown`].
    pub fn project(
        &self,
        snapshot: Option<&ScheduleSnapshot>,
        filter: Option<&TitleFilter>,
    ) -> Result<SensorValue, TitleFilterError> {
        let Some(snapshot) = snapshot else {
            return Ok(SensorValue::Unknown);
        };

        Ok(match self {
            Sensor::NextSchoolDay => SensorValue::Text(
                snapshot
                    .next_school_day
                    .date
                    .format("%A %-d %B")
                    .to_string(),
            ),
            Sensor::EarliestStartToday => earliest_start(&snapshot.today),
            Sensor::LatestEndToday => latest_end(&snapshot.today),
            Sensor::EarliestStartNextDay => earliest_start(&snapshot.next_school_day),
            Sensor::LatestEndNextDay => latest_end(&snapshot.next_school_day),
            Sensor::TitlesNextDay => match snapshot.next_school_day.joined_summaries(filter)? {
                Some(titles) => SensorValue::Text(titles),
                None => SensorValue::Empty,
            },
        })
    }
}

/// A sensor reading.
///
/// "Computed but empty" and "no data at all" stay distinguishable so that a
/// host never confuses an empty schedule with a failed refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorValue {
    /// No data: no refresh has succeeded yet, or the bucket holds no timed
    /// events to take a time from.
    Unknown,

    /// Computed, and the result is empty.
    Empty,

    /// A computed value.
    Text(String),
}

impl SensorValue {
    /// The computed text, if there is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SensorValue::Text(text) => Some(text),
            SensorValue::Unknown | SensorValue::Empty => None,
        }
    }
}

fn earliest_start(bucket: &DayBucket) -> SensorValue {
    match bucket.earliest_start() {
        Some(event) => SensorValue::Text(event.start.format("%H:%M").to_string()),
        None => SensorValue::Unknown,
    }
}

fn latest_end(bucket: &DayBucket) -> SensorValue {
    match bucket.latest_end() {
        Some(event) => SensorValue::Text(event.end.format("%H:%M").to_string()),
        None => SensorValue::Unknown,
    }
}
