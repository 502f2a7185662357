// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use icalendar::{Component, DatePerhapsTime, EventLike};

use crate::LooseDateTime;

/// Read-only view over one parsed calendar event.
///
/// This is the boundary to the external parser: the classifier only ever
/// looks at an event through these four accessors.
pub trait TimetableEvent {
    /// The start timestamp, if the event has one.
    fn start(&self) -> Option<LooseDateTime>;

    /// The end timestamp, if the event has one.
    fn end(&self) -> Option<LooseDateTime>;

    /// The summary of the event.
    fn summary(&self) -> &str;

    /// Whether the event is an all-day entry.
    fn is_all_day(&self) -> bool;
}

impl TimetableEvent for icalendar::Event {
    fn start(&self) -> Option<LooseDateTime> {
        self.get_start().map(Into::into)
    }

    fn end(&self) -> Option<LooseDateTime> {
        self.get_end().map(Into::into)
    }

    fn summary(&self) -> &str {
        self.get_summary().unwrap_or_default()
    }

    /// An all-day entry carries a date-valued start (DTSTART;VALUE=DATE)
    /// and no timed end.
    fn is_all_day(&self) -> bool {
        matches!(self.get_start(), Some(DatePerhapsTime::Date(_)))
            && !matches!(self.get_end(), Some(DatePerhapsTime::DateTime(_)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use icalendar::{CalendarDateTime, Event};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // The trait shares accessor names with the builder setters, so the
    // setters go through their traits explicitly.
    fn event(summary: Option<&str>, start: DatePerhapsTime, end: Option<DatePerhapsTime>) -> Event {
        let mut event = Event::new();
        if let Some(summary) = summary {
            Component::summary(&mut event, summary);
        }
        EventLike::starts(&mut event, start);
        if let Some(end) = end {
            EventLike::ends(&mut event, end);
        }
        event.done()
    }

    #[test]
    fn test_timed_event_accessors() {
        let start = date(2026, 9, 1).and_hms_opt(9, 0, 0).unwrap();
        let end = date(2026, 9, 1).and_hms_opt(10, 0, 0).unwrap();
        let event = event(
            Some("Wiskunde"),
            CalendarDateTime::Floating(start).into(),
            Some(CalendarDateTime::Floating(end).into()),
        );

        assert_eq!(TimetableEvent::summary(&event), "Wiskunde");
        assert_eq!(TimetableEvent::start(&event), Some(LooseDateTime::Floating(start)));
        assert_eq!(TimetableEvent::end(&event), Some(LooseDateTime::Floating(end)));
        assert!(!event.is_all_day());
    }

    #[test]
    fn test_all_day_event_detected() {
        let event = event(
            Some("Studiedag"),
            date(2026, 9, 1).into(),
            Some(date(2026, 9, 2).into()),
        );

        assert!(event.is_all_day());
    }

    #[test]
    fn test_all_day_event_without_end_detected() {
        let event = event(Some("Vrij"), date(2026, 9, 1).into(), None);

        assert!(event.is_all_day());
    }

    #[test]
    fn test_date_start_with_timed_end_is_not_all_day() {
        let end = date(2026, 9, 1).and_hms_opt(15, 0, 0).unwrap();
        let event = event(
            Some("Sportdag"),
            date(2026, 9, 1).into(),
            Some(CalendarDateTime::Floating(end).into()),
        );

        assert!(!event.is_all_day());
    }

    #[test]
    fn test_missing_summary_is_empty() {
        let event = event(None, date(2026, 9, 1).into(), None);

        assert_eq!(TimetableEvent::summary(&event), "");
    }
}
