// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Classification of feed events into per-day buckets and their reduction
//! to derived facts.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, Weekday};
use icalendar::{Calendar, CalendarComponent};

use crate::event::TimetableEvent;
use crate::filter::{TitleFilter, TitleFilterError};

/// The next date school takes place after `today`.
///
/// Friday skips the weekend (+3 days), Saturday lands on Monday (+2), every
/// other day advances to tomorrow. Holidays and school-specific closures
/// are ignored; the rule is deterministic and total over all dates.
pub fn next_school_day(today: NaiveDate) -> NaiveDate {
    let days = match today.weekday() {
        Weekday::Fri => 3,
        Weekday::Sat => 2,
        _ => 1,
    };
    today + Days::new(days)
}

/// A timed event resolved to local instants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEvent {
    /// Start instant in the local timezone.
    pub start: DateTime<Local>,

    /// End instant in the local timezone.
    pub end: DateTime<Local>,

    /// The event summary as delivered by the feed.
    pub summary: String,
}

/// The timed events falling on one target date, in feed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    /// The date this bucket collects events for.
    pub date: NaiveDate,

    /// Events starting on `date`, in feed iteration order.
    pub events: Vec<NormalizedEvent>,
}

impl DayBucket {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            events: Vec::new(),
        }
    }

    /// Whether the bucket holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The event with the earliest start instant, or `None` for an empty
    /// bucket. Ties keep the first occurrence in feed order.
    pub fn earliest_start(&self) -> Option<&NormalizedEvent> {
        self.events
            .iter()
            .reduce(|best, e| if e.start < best.start { e } else { best })
    }

    /// The event with the latest end instant, or `None` for an empty
    /// bucket. Ties keep the first occurrence in feed order.
    pub fn latest_end(&self) -> Option<&NormalizedEvent> {
        self.events
            .iter()
            .reduce(|best, e| if e.end > best.end { e } else { best })
    }

    /// Deduplicated summaries, run through the filter when one is
    /// configured, sorted lexicographically. Sorting keeps the list
    /// identical across feeds that merely reorder the same events.
    pub fn summaries(&self, filter: Option<&TitleFilter>) -> Result<Vec<String>, TitleFilterError> {
        let mut titles = Vec::with_capacity(self.events.len());
        for event in &self.events {
            let title = match filter {
                Some(f) => f.apply(&event.summary)?,
                None => event.summary.as_str(),
            };
            titles.push(title.to_string());
        }

        titles.sort();
        titles.dedup();
        Ok(titles)
    }

    /// The summaries joined with `", "`, or `None` for an empty bucket.
    pub fn joined_summaries(
        &self,
        filter: Option<&TitleFilter>,
    ) -> Result<Option<String>, TitleFilterError> {
        let titles = self.summaries(filter)?;
        Ok(match titles.is_empty() {
            true => None,
            false => Some(titles.join(", ")),
        })
    }
}

/// The complete result of one classification cycle.
///
/// Rebuilt from scratch on every refresh and swapped in as a unit, so
/// consumers never observe a half-updated schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    /// Timed events starting today.
    pub today: DayBucket,

    /// Timed events starting on the next school day.
    pub next_school_day: DayBucket,
}

impl ScheduleSnapshot {
    /// Classifies every timed event in the calendar into the today and
    /// next-school-day buckets by normalized start date.
    pub fn build(calendar: &Calendar, today: NaiveDate) -> Self {
        let mut snapshot = Self {
            today: DayBucket::new(today),
            next_school_day: DayBucket::new(next_school_day(today)),
        };

        let events = calendar.components.iter().filter_map(|c| match c {
            CalendarComponent::Event(event) => Some(event),
            _ => None,
        });
        for event in events {
            snapshot.push(event);
        }

        snapshot
    }

    /// The date of the next school day.
    pub fn next_school_day_date(&self) -> NaiveDate {
        self.next_school_day.date
    }

    fn push(&mut self, event: &icalendar::Event) {
        if event.is_all_day() {
            tracing::debug!(summary = event.summary(), "skipping all-day event");
            return;
        }

        let Some(start) = event.start() else {
            tracing::debug!(summary = event.summary(), "skipping event without a start");
            return;
        };
        // DTEND is optional; an endless lesson ends when it starts.
        let end = event.end().unwrap_or(start);

        let normalized = NormalizedEvent {
            start: start.resolve_start(),
            end: end.resolve_end(),
            summary: event.summary().to_string(),
        };

        // The rule always advances at least one day, so at most one of
        // these fires, but each comparison stands on its own.
        if start.date() == self.today.date {
            self.today.events.push(normalized.clone());
        }
        if start.date() == self.next_school_day.date {
            self.next_school_day.events.push(normalized);
        }
    }
}
