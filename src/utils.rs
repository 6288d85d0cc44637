use std::fmt;

use crate::types::{Track, TrackArtist, TrackDetail};

/// Historical window the Spotify API aggregates listening statistics over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::ShortTerm,
        TimeRange::MediumTerm,
        TimeRange::LongTerm,
    ];

    /// The exact value the API expects in the `time_range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }

    /// Human-readable description of the window, for list headers.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "last 4 weeks",
            TimeRange::MediumTerm => "last 6 months",
            TimeRange::LongTerm => "all time",
        }
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::MediumTerm
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a time range from user input.
///
/// Accepts the bare window name (`short`, `medium`, `long`) as well as the
/// API spelling (`short_term`, `short-term`, ...), case-insensitively.
pub fn parse_time_range(s: &str) -> Result<TimeRange, String> {
    let normalized = s.trim().to_lowercase().replace('-', "_");
    if normalized.is_empty() {
        return Err("time range cannot be empty".to_string());
    }

    match normalized.as_str() {
        "short" | "short_term" => Ok(TimeRange::ShortTerm),
        "medium" | "medium_term" => Ok(TimeRange::MediumTerm),
        "long" | "long_term" => Ok(TimeRange::LongTerm),
        other => Err(format!(
            "invalid value '{}' (expected short, medium or long)",
            other
        )),
    }
}

/// Formats a track duration in milliseconds as `M:SS`.
///
/// Seconds are rounded to the nearest whole value. Rounding can push the
/// seconds column to 60; the value is not carried into the minutes column,
/// so 119700ms formats as "1:60".
pub fn format_duration(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = ((ms % 60_000) as f64 / 1000.0).round() as u64;
    format!("{}:{:02}", minutes, seconds)
}

/// Joins artist names with a comma-space separator, in their listed order.
pub fn join_artist_names(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds the display-ready detail fields for a fetched track.
pub fn track_detail(track: &Track) -> TrackDetail {
    TrackDetail {
        art_url: track.album.images.first().map(|i| i.url.clone()),
        name: track.name.clone(),
        artists: join_artist_names(&track.artists),
        album: track.album.name.clone(),
        popularity: track.popularity,
        duration: format_duration(track.duration_ms),
    }
}
