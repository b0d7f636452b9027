//! Weekly-schedule evaluation ("open now").
//!
//! Day strings are matched in order: a `"closed"` substring wins, then a
//! `"24 hours"` substring, then an `"H:MM AM - H:MM PM"` range. Anything
//! else, including a missing day, evaluates to closed (fail-closed).
//!
//! Times use the HHMM encoding: `hour * 100 + minute` as a plain integer,
//! with `+1200` applied to PM hours other than 12 and `-1200` to the 12 AM
//! hour. That is an ordinal encoding for same-day comparison only, not
//! minutes since midnight; it is not safe for elapsed-time arithmetic.

use chrono::{Datelike, Local, Timelike, Weekday};
use dropoff_core::WeeklySchedule;
use regex::Regex;

/// Snapshot of the evaluating machine's local day and clock.
///
/// The machine's local clock stands in for every center's local time. A
/// center's own time zone is never modeled, so correctness depends on the
/// server clock being aligned with the centers it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub day: Weekday,
    /// HHMM-encoded 24-hour clock value, e.g. `1730` for 5:30 PM.
    pub clock: u32,
}

impl WallClock {
    /// The current local day and time.
    #[must_use]
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            day: now.weekday(),
            clock: now.hour() * 100 + now.minute(),
        }
    }

    /// A snapshot at an explicit 24-hour time.
    #[must_use]
    pub fn at(day: Weekday, hour: u32, minute: u32) -> Self {
        Self {
            day,
            clock: hour * 100 + minute,
        }
    }
}

/// Whether the schedule is open at the current local time.
#[must_use]
pub fn is_open_now(schedule: &WeeklySchedule) -> bool {
    let clock = WallClock::now();
    is_open_at(schedule, clock.day, clock.clock)
}

/// Whether the schedule is open on `day` at the HHMM-encoded `clock` value.
///
/// Both range endpoints are inclusive: a center listed as
/// `"9:00 AM - 5:00 PM"` is open at exactly 9:00 and exactly 17:00.
///
/// Ranges that cross midnight (e.g. `"10:00 PM - 2:00 AM"`) are not
/// supported: the literal numeric comparison makes them evaluate closed at
/// every time of day.
#[must_use]
pub fn is_open_at(schedule: &WeeklySchedule, day: Weekday, clock: u32) -> bool {
    let Some(hours) = schedule.day(day_key(day)) else {
        return false;
    };

    let lowered = hours.to_lowercase();
    if lowered.contains("closed") {
        return false;
    }
    if lowered.contains("24 hours") {
        return true;
    }

    match parse_range(hours) {
        Some((start, end)) => (start..=end).contains(&clock),
        None => false,
    }
}

fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Parse `"H:MM AM - H:MM PM"` into HHMM-encoded start and end values.
fn parse_range(hours: &str) -> Option<(u32, u32)> {
    let re = Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(AM|PM)\s*-\s*(\d{1,2}):(\d{2})\s*(AM|PM)")
        .expect("valid hours regex");
    let caps = re.captures(hours)?;
    let start = meridiem_value(&caps[1], &caps[2], &caps[3])?;
    let end = meridiem_value(&caps[4], &caps[5], &caps[6])?;
    Some((start, end))
}

/// Fold a 12-hour clock reading into the HHMM encoding.
fn meridiem_value(hour: &str, minute: &str, meridiem: &str) -> Option<u32> {
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    let mut value = hour * 100 + minute;
    if meridiem.eq_ignore_ascii_case("pm") && hour != 12 {
        value += 1200;
    }
    if meridiem.eq_ignore_ascii_case("am") && hour == 12 {
        value -= 1200;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(entries: &[(&str, &str)]) -> WeeklySchedule {
        entries.iter().copied().collect()
    }

    #[test]
    fn missing_day_is_closed() {
        let s = schedule(&[("monday", "9:00 AM - 5:00 PM")]);
        assert!(!is_open_at(&s, Weekday::Tue, 1200));
    }

    #[test]
    fn closed_entry_is_closed_at_any_time() {
        let s = schedule(&[("monday", "closed")]);
        assert!(!is_open_at(&s, Weekday::Mon, 0));
        assert!(!is_open_at(&s, Weekday::Mon, 1200));
        assert!(!is_open_at(&s, Weekday::Mon, 2359));
    }

    #[test]
    fn closed_substring_wins_regardless_of_case() {
        let s = schedule(&[("monday", "Closed for renovation")]);
        assert!(!is_open_at(&s, Weekday::Mon, 1200));
    }

    #[test]
    fn twenty_four_hours_is_always_open() {
        let s = schedule(&[("wednesday", "24 hours")]);
        assert!(is_open_at(&s, Weekday::Wed, 1));
        assert!(is_open_at(&s, Weekday::Wed, 2359));
    }

    #[test]
    fn twenty_four_hours_matches_case_insensitively() {
        let s = schedule(&[("wednesday", "Open 24 Hours")]);
        assert!(is_open_at(&s, Weekday::Wed, 300));
    }

    #[test]
    fn nine_to_five_boundaries_are_inclusive() {
        let s = schedule(&[("friday", "9:00 AM - 5:00 PM")]);
        assert!(!is_open_at(&s, Weekday::Fri, 859));
        assert!(is_open_at(&s, Weekday::Fri, 900));
        assert!(is_open_at(&s, Weekday::Fri, 1200));
        assert!(is_open_at(&s, Weekday::Fri, 1700));
        assert!(!is_open_at(&s, Weekday::Fri, 1701));
    }

    #[test]
    fn unparseable_entry_is_closed() {
        let s = schedule(&[("friday", "ask staff")]);
        assert!(!is_open_at(&s, Weekday::Fri, 1200));
    }

    #[test]
    fn noon_and_midnight_edge_hours() {
        // 12 PM stays 1200; 12 AM folds to 00MM.
        let s = schedule(&[("sunday", "12:00 PM - 4:00 PM")]);
        assert!(is_open_at(&s, Weekday::Sun, 1200));
        assert!(!is_open_at(&s, Weekday::Sun, 1159));

        let s = schedule(&[("saturday", "12:30 AM - 2:00 AM")]);
        assert!(is_open_at(&s, Weekday::Sat, 100));
        assert!(!is_open_at(&s, Weekday::Sat, 29));
    }

    #[test]
    fn overnight_range_never_evaluates_open() {
        // Known limitation: a range crossing midnight compares as
        // start > end, so the inclusive check fails on both sides of it.
        let s = schedule(&[("friday", "10:00 PM - 2:00 AM")]);
        assert!(!is_open_at(&s, Weekday::Fri, 2300));
        assert!(!is_open_at(&s, Weekday::Fri, 100));
        assert!(!is_open_at(&s, Weekday::Fri, 1200));
    }

    #[test]
    fn lowercase_meridiems_parse() {
        let s = schedule(&[("monday", "9:00 am - 5:00 pm")]);
        assert!(is_open_at(&s, Weekday::Mon, 1000));
    }

    #[test]
    fn extra_text_around_range_still_parses() {
        let s = schedule(&[("monday", "Open 9:00 AM - 5:00 PM daily")]);
        assert!(is_open_at(&s, Weekday::Mon, 1000));
    }

    #[test]
    fn wall_clock_at_encodes_hhmm() {
        let clock = WallClock::at(Weekday::Fri, 17, 5);
        assert_eq!(clock.clock, 1705);
        assert_eq!(clock.day, Weekday::Fri);
    }
}
