// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core logic of the rooster timetable watcher.
//!
//! One refresh cycle pulls the configured feed, classifies its timed events
//! into a "today" and a "next school day" bucket and keeps the result as an
//! atomically replaced [`ScheduleSnapshot`]. Every derived value the host
//! polls is a pure projection of the latest snapshot; a failed refresh keeps
//! the previous one.

mod config;
mod datetime;
mod event;
mod filter;
mod rooster;
mod schedule;
mod sensor;

pub use rooster_feed::{AuthMethod, FeedConfig, FeedError};

pub use crate::config::{APP_NAME, Config, ScheduleConfig};
pub use crate::datetime::LooseDateTime;
pub use crate::event::TimetableEvent;
pub use crate::filter::{TitleFilter, TitleFilterError};
pub use crate::rooster::Rooster;
pub use crate::schedule::{DayBucket, NormalizedEvent, ScheduleSnapshot, next_school_day};
pub use crate::sensor::{SENSORS, Sensor, SensorValue};
