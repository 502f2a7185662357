// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    offset::LocalResult,
};
use chrono_tz::Tz;
use icalendar::{CalendarDateTime, DatePerhapsTime};

/// A raw calendar timestamp, which may be date only, a floating time, or a
/// time pinned to the local timezone.
///
/// Feeds mix all three shapes freely. Zone-aware values are converted to the
/// observer's local zone on construction; floating values stay naive and are
/// interpreted as local when resolved; bare dates resolve to the edges of
/// their day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LooseDateTime {
    /// Date only without time.
    DateOnly(NaiveDate),

    /// Floating date and time without timezone.
    Floating(NaiveDateTime),

    /// Date and time in the local timezone of the system running the code.
    Local(DateTime<Local>),
}

impl LooseDateTime {
    /// The local calendar date this timestamp falls on.
    pub fn date(&self) -> NaiveDate {
        match self {
            LooseDateTime::DateOnly(d) => *d,
            LooseDateTime::Floating(dt) => dt.date(),
            LooseDateTime::Local(dt) => dt.date_naive(),
        }
    }

    /// The time part, if the timestamp has one.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            LooseDateTime::DateOnly(_) => None,
            LooseDateTime::Floating(dt) => Some(dt.time()),
            LooseDateTime::Local(dt) => Some(dt.time()),
        }
    }

    /// Resolves to a local instant, snapping date-only values to the start
    /// of their day (00:00).
    pub fn resolve_start(&self) -> DateTime<Local> {
        match self {
            LooseDateTime::DateOnly(d) => attach_local(d.and_time(start_of_day())),
            LooseDateTime::Floating(dt) => attach_local(*dt),
            LooseDateTime::Local(dt) => *dt,
        }
    }

    /// Resolves to a local instant, snapping date-only values to the end of
    /// their day (23:59:59).
    pub fn resolve_end(&self) -> DateTime<Local> {
        match self {
            LooseDateTime::DateOnly(d) => attach_local(d.and_time(end_of_day())),
            LooseDateTime::Floating(dt) => attach_local(*dt),
            LooseDateTime::Local(dt) => *dt,
        }
    }
}

fn start_of_day() -> NaiveTime {
    NaiveTime::MIN
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

/// Pins a naive local time to the local timezone.
///
/// DST makes some wall-clock times ambiguous (fall-back) and some
/// nonexistent (spring-forward): the earliest instant wins, nonexistent
/// times shift past the gap.
fn attach_local(dt: NaiveDateTime) -> DateTime<Local> {
    match dt.and_local_timezone(Local) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => {
            tracing::warn!(%dt, "ambiguous local time, picking earliest");
            earliest
        }
        LocalResult::None => {
            tracing::warn!(%dt, "local time inside a DST gap, shifting forward");
            (dt + TimeDelta::hours(1))
                .and_local_timezone(Local)
                .earliest()
                .unwrap_or_else(|| Local.from_utc_datetime(&dt))
        }
    }
}

impl From<DatePerhapsTime> for LooseDateTime {
    fn from(dt: DatePerhapsTime) -> Self {
        match dt {
            DatePerhapsTime::Date(d) => d.into(),
            DatePerhapsTime::DateTime(CalendarDateTime::Floating(dt)) => dt.into(),
            DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => dt.into(),
            DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, tzid }) => {
                in_timezone(date_time, &tzid)
            }
        }
    }
}

/// Interprets a naive datetime in the feed's named timezone and converts
/// the resulting instant to the local zone. A TZID chrono-tz does not know
/// degrades to a floating time.
fn in_timezone(dt: NaiveDateTime, tzid: &str) -> LooseDateTime {
    let Ok(tz) = tzid.parse::<Tz>() else {
        tracing::warn!(tzid, "unknown timezone, treating as floating");
        return dt.into();
    };

    match tz.from_local_datetime(&dt) {
        LocalResult::Single(t) => t.into(),
        LocalResult::Ambiguous(earliest, _) => {
            tracing::warn!(tzid, "ambiguous local time, picking earliest");
            earliest.into()
        }
        LocalResult::None => {
            tracing::warn!(tzid, "invalid local time, falling back to floating");
            dt.into()
        }
    }
}

impl From<NaiveDate> for LooseDateTime {
    fn from(d: NaiveDate) -> Self {
        LooseDateTime::DateOnly(d)
    }
}

impl From<NaiveDateTime> for LooseDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        LooseDateTime::Floating(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for LooseDateTime {
    fn from(dt: DateTime<Tz>) -> Self {
        LooseDateTime::Local(dt.with_timezone(&Local))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, mm: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, mm, s).unwrap()
    }

    #[test]
    fn test_date_and_time_methods() {
        let day = date(2026, 9, 1);
        let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let floating = NaiveDateTime::new(day, time);
        let local = Local.with_ymd_and_hms(2026, 9, 1, 9, 30, 0).unwrap();

        let d1 = LooseDateTime::DateOnly(day);
        let d2 = LooseDateTime::Floating(floating);
        let d3 = LooseDateTime::Local(local);

        assert_eq!(d1.date(), day);
        assert_eq!(d2.date(), day);
        assert_eq!(d3.date(), day);

        assert_eq!(d1.time(), None);
        assert_eq!(d2.time(), Some(time));
        assert_eq!(d3.time(), Some(time));
    }

    #[test]
    fn test_resolve_start_snaps_dates_to_midnight() {
        let resolved = LooseDateTime::DateOnly(date(2026, 9, 1)).resolve_start();
        assert_eq!(resolved.date_naive(), date(2026, 9, 1));
        assert_eq!(resolved.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_resolve_end_snaps_dates_to_end_of_day() {
        let resolved = LooseDateTime::DateOnly(date(2026, 9, 1)).resolve_end();
        assert_eq!(resolved.date_naive(), date(2026, 9, 1));
        assert_eq!(resolved.time(), NaiveTime::from_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn test_resolve_keeps_timed_values() {
        let floating = datetime(2026, 9, 1, 9, 30, 0);
        assert_eq!(
            LooseDateTime::Floating(floating).resolve_start().naive_local(),
            floating
        );
        assert_eq!(
            LooseDateTime::Floating(floating).resolve_end().naive_local(),
            floating
        );

        let local = Local.with_ymd_and_hms(2026, 9, 1, 9, 30, 0).unwrap();
        assert_eq!(LooseDateTime::Local(local).resolve_start(), local);
        assert_eq!(LooseDateTime::Local(local).resolve_end(), local);
    }

    #[test]
    fn test_from_utc_preserves_the_instant() {
        let utc = Utc.with_ymd_and_hms(2026, 9, 1, 7, 0, 0).unwrap();
        let loose = LooseDateTime::from(utc);

        match loose {
            LooseDateTime::Local(dt) => assert_eq!(dt, utc),
            other => panic!("expected a local variant, got {other:?}"),
        }
    }

    #[test]
    fn test_from_date_perhaps_time_floating() {
        let floating = datetime(2026, 9, 1, 9, 0, 0);
        let dt = DatePerhapsTime::DateTime(CalendarDateTime::Floating(floating));
        assert_eq!(LooseDateTime::from(dt), LooseDateTime::Floating(floating));
    }

    #[test]
    fn test_from_date_perhaps_time_date() {
        let dt = DatePerhapsTime::Date(date(2026, 9, 1));
        assert_eq!(LooseDateTime::from(dt), LooseDateTime::DateOnly(date(2026, 9, 1)));
    }

    #[test]
    fn test_from_date_perhaps_time_with_known_timezone() {
        let dt = DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone {
            date_time: datetime(2026, 9, 1, 9, 0, 0),
            tzid: "Europe/Amsterdam".to_string(),
        });

        let expected = "Europe/Amsterdam"
            .parse::<Tz>()
            .unwrap()
            .with_ymd_and_hms(2026, 9, 1, 9, 0, 0)
            .unwrap();

        match LooseDateTime::from(dt) {
            // Comparing instants, so the assertion holds in any observer zone.
            LooseDateTime::Local(local) => assert_eq!(local, expected),
            other => panic!("expected a local variant, got {other:?}"),
        }
    }

    #[test]
    fn test_from_date_perhaps_time_with_unknown_timezone() {
        let naive = datetime(2026, 9, 1, 9, 0, 0);
        let dt = DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone {
            date_time: naive,
            tzid: "Not/AZone".to_string(),
        });

        assert_eq!(LooseDateTime::from(dt), LooseDateTime::Floating(naive));
    }
}
