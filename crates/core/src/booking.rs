//! Venue / artist / show booking rules.
//!
//! Field validation for venue and artist listings, show start-time parsing,
//! splitting shows into past and upcoming, and grouping venues by area.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Genres a venue or artist may list.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Two-letter codes accepted for the `state` field.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Naive formats accepted for `start_time` besides RFC 3339. Interpreted as UTC.
const NAIVE_START_TIME_FORMATS: &[&str] =
    &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone pattern is a valid regex")
});

/// Require a non-blank value for `field`.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate a genre list: non-empty and every entry from [`GENRES`].
pub fn validate_genres(genres: &[String]) -> Result<(), CoreError> {
    if genres.is_empty() {
        return Err(CoreError::Validation(
            "genres must contain at least one genre".into(),
        ));
    }
    if let Some(unknown) = genres.iter().find(|g| !GENRES.contains(&g.as_str())) {
        return Err(CoreError::Validation(format!("Unknown genre '{unknown}'")));
    }
    Ok(())
}

/// Validate a state code against [`STATES`].
pub fn validate_state(state: &str) -> Result<(), CoreError> {
    if !STATES.contains(&state) {
        return Err(CoreError::Validation(format!("Unknown state '{state}'")));
    }
    Ok(())
}

/// Validate a phone number in `NNN-NNN-NNNN` form.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if !PHONE_RE.is_match(phone) {
        return Err(CoreError::Validation(format!(
            "phone must look like 555-555-5555, got '{phone}'"
        )));
    }
    Ok(())
}

/// Parse a show start time.
///
/// Accepts RFC 3339 (`2035-04-01T20:00:00Z`) or a naive
/// `YYYY-MM-DD HH:MM[:SS]` value which is taken to be UTC.
pub fn parse_start_time(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoreError::Validation(format!("Invalid start_time '{raw}'")))
}

/// Split shows into `(past, upcoming)` relative to `now`.
///
/// A show is upcoming only if it starts strictly after `now`. Input order is
/// preserved within each half.
pub fn partition_shows<T>(
    shows: Vec<T>,
    start_time_of: impl Fn(&T) -> Timestamp,
    now: Timestamp,
) -> (Vec<T>, Vec<T>) {
    let (upcoming, past): (Vec<T>, Vec<T>) =
        shows.into_iter().partition(|s| start_time_of(s) > now);
    (past, upcoming)
}

/// Venues (or anything located) grouped under one `(city, state)` area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub items: Vec<T>,
}

/// Group items by `(city, state)`, keeping first-seen area order and the
/// input order within each area.
pub fn group_by_area<T>(
    items: Vec<T>,
    area_of: impl Fn(&T) -> (String, String),
) -> Vec<Area<T>> {
    let mut areas: Vec<Area<T>> = Vec::new();
    for item in items {
        let (city, state) = area_of(&item);
        match areas
            .iter_mut()
            .find(|a| a.city == city && a.state == state)
        {
            Some(area) => area.items.push(item),
            None => areas.push(Area {
                city,
                state,
                items: vec![item],
            }),
        }
    }
    areas
}
