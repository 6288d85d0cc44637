use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    info,
    types::{Artist, ArtistTableRow, Track, TrackDetail, TrackTableRow},
    utils, warning,
};

/// Output surface a render cycle draws on.
///
/// Each method replaces one region of the display rather than appending to a
/// log: `show_tracks` and `show_no_tracks` are the two states of the track
/// list, `show_artists` and `show_no_artists` the two states of the artist
/// list. `show_error` replaces the track list with the generic failure message
/// and leaves the artist list empty.
pub trait Render {
    /// Asks the user for an access token. Rendered instead of any list when no
    /// usable credential is present.
    fn show_credential_prompt(&mut self);

    /// Marks both lists as loading while requests are in flight.
    fn show_loading(&mut self);

    /// Renders the ranked track list.
    fn show_tracks(&mut self, tracks: &[Track]);

    /// Renders the empty-state message for the track list.
    fn show_no_tracks(&mut self);

    /// Renders the ranked artist list.
    fn show_artists(&mut self, artists: &[Artist]);

    /// Renders the empty-state message for the artist list.
    fn show_no_artists(&mut self);

    /// Renders the generic failure message in place of both lists.
    fn show_error(&mut self);

    /// Renders the detail view for a single track.
    fn show_detail(&mut self, detail: &TrackDetail);
}

/// Renders lists as tables on stdout, with a spinner while loading.
pub struct TerminalRenderer {
    spinner: Option<ProgressBar>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        TerminalRenderer { spinner: None }
    }

    /// Progress indicator is cleaned up before any other output is written.
    fn clear_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for TerminalRenderer {
    fn show_credential_prompt(&mut self) {
        self.clear_spinner();
        warning!("Please provide a Spotify access token to see your data.");
        info!("Enter one with: token <value>");
    }

    fn show_loading(&mut self) {
        self.clear_spinner();
        let pb = ProgressBar::new_spinner();
        pb.set_message("Loading your top tracks and artists...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        self.spinner = Some(pb);
    }

    fn show_tracks(&mut self, tracks: &[Track]) {
        self.clear_spinner();
        let rows: Vec<TrackTableRow> = tracks
            .iter()
            .enumerate()
            .map(|(idx, track)| TrackTableRow {
                rank: idx + 1,
                name: track.name.clone(),
                artists: utils::join_artist_names(&track.artists),
                duration: utils::format_duration(track.duration_ms),
            })
            .collect();

        println!();
        println!("{}", "Top tracks".bold());
        println!("{}", Table::new(rows));
    }

    fn show_no_tracks(&mut self) {
        self.clear_spinner();
        println!();
        println!("{}", "Top tracks".bold());
        info!("No top tracks found for this time range.");
    }

    fn show_artists(&mut self, artists: &[Artist]) {
        self.clear_spinner();
        let rows: Vec<ArtistTableRow> = artists
            .iter()
            .enumerate()
            .map(|(idx, artist)| ArtistTableRow {
                rank: idx + 1,
                name: artist.name.clone(),
            })
            .collect();

        println!();
        println!("{}", "Top artists".bold());
        println!("{}", Table::new(rows));
    }

    fn show_no_artists(&mut self) {
        self.clear_spinner();
        println!();
        println!("{}", "Top artists".bold());
        info!("No top artists found for this time range.");
    }

    fn show_error(&mut self) {
        self.clear_spinner();
        println!();
        warning!("There was an error loading your data. Your access token may be invalid or expired.");
    }

    fn show_detail(&mut self, detail: &TrackDetail) {
        self.clear_spinner();
        println!();
        println!("{}", detail.name.bold());
        info!("Artists: {}", detail.artists);
        info!("Album: {}", detail.album);
        info!("Popularity: {}", detail.popularity);
        info!("Duration: {}", detail.duration);
        if let Some(url) = &detail.art_url {
            info!("Album art: {}", url);
        }
    }
}
