use spotopcli::types::{Album, AlbumImage, Track, TrackArtist};
use spotopcli::utils::*;

// Helper function to create a test artist credit
fn create_test_artist(name: &str) -> TrackArtist {
    TrackArtist {
        name: name.to_string(),
    }
}

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, artists: &[&str], duration_ms: u64) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: artists.iter().map(|a| create_test_artist(a)).collect(),
        album: Album {
            name: format!("{} (Album)", name),
            images: vec![AlbumImage {
                url: format!("https://i.scdn.co/image/{}", id),
            }],
        },
        popularity: 64,
        duration_ms,
    }
}

#[test]
fn test_format_duration_whole_minutes() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(60_000), "1:00");
    assert_eq!(format_duration(180_000), "3:00");
}

#[test]
fn test_format_duration_pads_seconds() {
    // Single-digit seconds get a leading zero
    assert_eq!(format_duration(65_000), "1:05");
    assert_eq!(format_duration(125_000), "2:05");
    assert_eq!(format_duration(3_000), "0:03");

    // Double-digit seconds are unchanged
    assert_eq!(format_duration(83_000), "1:23");
    assert_eq!(format_duration(59_000), "0:59");
}

#[test]
fn test_format_duration_rounds_seconds() {
    // Sub-second parts round to the nearest whole second
    assert_eq!(format_duration(65_400), "1:05");
    assert_eq!(format_duration(65_600), "1:06");
    assert_eq!(format_duration(64_500), "1:05"); // round half up
}

#[test]
fn test_format_duration_without_minute_carry() {
    // Rounding can produce a :60 seconds column; it is not carried over
    // into the minutes column
    assert_eq!(format_duration(119_700), "1:60");
    assert_eq!(format_duration(59_700), "0:60");

    // A full minute later the carry question disappears again
    assert_eq!(format_duration(120_000), "2:00");
}

#[test]
fn test_format_duration_long_tracks() {
    // Minutes are not padded and keep growing past the hour
    assert_eq!(format_duration(600_000), "10:00");
    assert_eq!(format_duration(3_600_000), "60:00");
    assert_eq!(format_duration(3_725_000), "62:05");
}

#[test]
fn test_join_artist_names_single() {
    let artists = vec![create_test_artist("Radiohead")];
    assert_eq!(join_artist_names(&artists), "Radiohead");
}

#[test]
fn test_join_artist_names_multiple_preserves_order() {
    let artists = vec![
        create_test_artist("Run The Jewels"),
        create_test_artist("El-P"),
        create_test_artist("Killer Mike"),
    ];
    assert_eq!(
        join_artist_names(&artists),
        "Run The Jewels, El-P, Killer Mike"
    );
}

#[test]
fn test_join_artist_names_empty() {
    assert_eq!(join_artist_names(&[]), "");
}

#[test]
fn test_parse_time_range_valid_inputs() {
    // Bare window names
    assert_eq!(parse_time_range("short").unwrap(), TimeRange::ShortTerm);
    assert_eq!(parse_time_range("medium").unwrap(), TimeRange::MediumTerm);
    assert_eq!(parse_time_range("long").unwrap(), TimeRange::LongTerm);

    // API spellings
    assert_eq!(parse_time_range("short_term").unwrap(), TimeRange::ShortTerm);
    assert_eq!(parse_time_range("long_term").unwrap(), TimeRange::LongTerm);

    // Hyphenated spelling and surrounding whitespace
    assert_eq!(parse_time_range("short-term").unwrap(), TimeRange::ShortTerm);
    assert_eq!(parse_time_range("  medium  ").unwrap(), TimeRange::MediumTerm);

    // Case insensitivity
    assert_eq!(parse_time_range("LONG").unwrap(), TimeRange::LongTerm);
    assert_eq!(parse_time_range("Medium_Term").unwrap(), TimeRange::MediumTerm);
}

#[test]
fn test_parse_time_range_invalid_inputs() {
    // Empty and whitespace-only input
    let result = parse_time_range("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_time_range("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Unknown value
    let result = parse_time_range("yearly");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'yearly'"));
}

#[test]
fn test_time_range_as_str_matches_api_parameter() {
    assert_eq!(TimeRange::ShortTerm.as_str(), "short_term");
    assert_eq!(TimeRange::MediumTerm.as_str(), "medium_term");
    assert_eq!(TimeRange::LongTerm.as_str(), "long_term");

    // Display mirrors the query parameter value
    assert_eq!(TimeRange::ShortTerm.to_string(), "short_term");
}

#[test]
fn test_time_range_labels() {
    assert_eq!(TimeRange::ShortTerm.label(), "last 4 weeks");
    assert_eq!(TimeRange::MediumTerm.label(), "last 6 months");
    assert_eq!(TimeRange::LongTerm.label(), "all time");
}

#[test]
fn test_time_range_default_and_all() {
    assert_eq!(TimeRange::default(), TimeRange::MediumTerm);

    assert_eq!(TimeRange::ALL.len(), 3);
    assert!(TimeRange::ALL.contains(&TimeRange::ShortTerm));
    assert!(TimeRange::ALL.contains(&TimeRange::MediumTerm));
    assert!(TimeRange::ALL.contains(&TimeRange::LongTerm));
}

#[test]
fn test_track_detail_fields() {
    let track = create_test_track("4uLU6hMC", "Weird Fishes", &["Radiohead"], 318_000);
    let detail = track_detail(&track);

    assert_eq!(detail.name, "Weird Fishes");
    assert_eq!(detail.artists, "Radiohead");
    assert_eq!(detail.album, "Weird Fishes (Album)");
    assert_eq!(detail.popularity, 64);
    assert_eq!(detail.duration, "5:18");
    assert_eq!(
        detail.art_url,
        Some("https://i.scdn.co/image/4uLU6hMC".to_string())
    );
}

#[test]
fn test_track_detail_joins_artists_and_takes_first_image() {
    let mut track = create_test_track("1a2b3c", "Close To Me", &["The Cure"], 222_000);
    track.artists.push(create_test_artist("Robert Smith"));
    track.album.images.push(AlbumImage {
        url: "https://i.scdn.co/image/smaller".to_string(),
    });

    let detail = track_detail(&track);
    assert_eq!(detail.artists, "The Cure, Robert Smith");
    assert_eq!(
        detail.art_url,
        Some("https://i.scdn.co/image/1a2b3c".to_string())
    );
}

#[test]
fn test_track_detail_without_album_art() {
    let mut track = create_test_track("9z8y7x", "Demo Take", &["Unknown"], 90_000);
    track.album.images.clear();

    let detail = track_detail(&track);
    assert_eq!(detail.art_url, None);
}
