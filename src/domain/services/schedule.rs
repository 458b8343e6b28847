use crate::domain::models::package::GroupSchedule;
use chrono::NaiveTime;
use std::collections::{BTreeMap, BTreeSet};

/// Languages the schedule renderer can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleLocale {
    English,
    Italian,
}

impl ScheduleLocale {
    /// `canonical` is the Monday-first index, 0 = Monday .. 6 = Sunday.
    fn day_name(self, canonical: u8) -> &'static str {
        const EN: [&str; 7] = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        const IT: [&str; 7] = [
            "Lunedì",
            "Martedì",
            "Mercoledì",
            "Giovedì",
            "Venerdì",
            "Sabato",
            "Domenica",
        ];
        match self {
            ScheduleLocale::English => EN[canonical as usize],
            ScheduleLocale::Italian => IT[canonical as usize],
        }
    }

    fn conjunction(self) -> &'static str {
        match self {
            ScheduleLocale::English => "and",
            ScheduleLocale::Italian => "e",
        }
    }

    fn at_word(self) -> &'static str {
        match self {
            ScheduleLocale::English => "at",
            ScheduleLocale::Italian => "alle",
        }
    }
}

/// Maps a raw Sunday-based weekday (0 = Sunday .. 6 = Saturday) to the
/// canonical Monday-first display order.
pub fn canonical_weekday(weekday: u8) -> u8 {
    (weekday + 6) % 7
}

/// Accepts only the canonical zero-padded `"HH:MM"` form. `%H` alone would
/// also parse `"9:30"`, and an unpadded time no longer compares
/// chronologically as a string, which slot ordering and time grouping rely
/// on.
pub fn is_valid_time(time: &str) -> bool {
    time.len() == 5
        && time.as_bytes()[2] == b':'
        && NaiveTime::parse_from_str(time, "%H:%M").is_ok()
}

/// Renders a schedule set as one line per distinct time: weekdays sharing a
/// time are collected, ordered Monday-first and joined with the locale's
/// conjunction ("Monday and Wednesday at 17:00"). Pure and order-independent:
/// any permutation or duplication of the input yields the same lines, sorted
/// by time.
pub fn group_schedule_lines(schedules: &[GroupSchedule], locale: ScheduleLocale) -> Vec<String> {
    let mut by_time: BTreeMap<&str, BTreeSet<u8>> = BTreeMap::new();
    for schedule in schedules {
        by_time
            .entry(schedule.time.as_str())
            .or_default()
            .insert(canonical_weekday(schedule.weekday % 7));
    }

    by_time
        .into_iter()
        .map(|(time, days)| {
            let names: Vec<&str> = days.iter().map(|d| locale.day_name(*d)).collect();
            let day_list = match names.len() {
                1 => names[0].to_string(),
                n => format!(
                    "{} {} {}",
                    names[..n - 1].join(", "),
                    locale.conjunction(),
                    names[n - 1]
                ),
            };
            format!("{} {} {}", day_list, locale.at_word(), time)
        })
        .collect()
}
