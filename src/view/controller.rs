use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

use crate::{
    session::Session,
    spotify::top::{TOP_LIMIT, TopItemsClient},
    types::Track,
    utils::{self, TimeRange},
    view::render::Render,
};

/// How a render cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No usable credential was present. The prompt was rendered and no
    /// request left the process.
    NoCredential,
    /// Both lists were fetched and rendered.
    Rendered { tracks: usize, artists: usize },
    /// At least one request failed. The generic failure message was rendered
    /// and the stored track list was cleared.
    Error,
    /// A newer cycle started or the selection changed while this one was in
    /// flight. Nothing was rendered.
    Superseded,
}

/// Drives the fetch-and-render cycle for the top-items view.
///
/// The controller owns the session, the selected time range, and the track
/// list backing the detail view. All state lives behind locks so a cycle can
/// run concurrently with user actions; a generation counter makes sure only
/// the most recently started cycle gets to draw.
///
/// # Render Cycle
///
/// [`ViewController::refresh`] runs one full cycle:
///
/// 1. Without a usable credential, render the token prompt and stop. Nothing
///    is fetched.
/// 2. Render the loading state, then fetch top tracks and top artists in
///    sequence with the shared credential and time range.
/// 3. If a newer cycle has started in the meantime, discard both responses.
/// 4. On success render both lists (each falls back to its own empty-state
///    message independently) and store the tracks for later detail lookups.
///    On any failure render the generic failure message and clear the stored
///    tracks.
pub struct ViewController<C, R> {
    client: C,
    renderer: Mutex<R>,
    session: Mutex<Session>,
    time_range: Mutex<TimeRange>,
    tracks: Mutex<Vec<Track>>,
    generation: AtomicU64,
}

impl<C, R> ViewController<C, R>
where
    C: TopItemsClient,
    R: Render,
{
    pub fn new(client: C, renderer: R, session: Session, time_range: TimeRange) -> Self {
        ViewController {
            client,
            renderer: Mutex::new(renderer),
            session: Mutex::new(session),
            time_range: Mutex::new(time_range),
            tracks: Mutex::new(Vec::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the currently selected time range.
    pub fn time_range(&self) -> TimeRange {
        *self.time_range.lock().unwrap()
    }

    /// Changes the selected time range and invalidates any cycle still in
    /// flight, so a stale response cannot overwrite the new selection.
    pub fn set_time_range(&self, time_range: TimeRange) {
        *self.time_range.lock().unwrap() = time_range;
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Stores a new access token in the session.
    ///
    /// Returns `false` when the input is empty or the placeholder and the
    /// session is left unchanged. An accepted token invalidates in-flight
    /// cycles; the caller is expected to start a fresh one.
    pub fn submit_credential(&self, raw: &str) -> bool {
        let accepted = self.session.lock().unwrap().submit(raw);
        if accepted {
            self.generation.fetch_add(1, Ordering::SeqCst);
        }
        accepted
    }

    /// Forgets the stored access token and the track list that was fetched
    /// with it. In-flight cycles are invalidated.
    pub fn clear_credential(&self) {
        self.session.lock().unwrap().clear();
        self.tracks.lock().unwrap().clear();
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Runs one render cycle and reports how it ended.
    pub async fn refresh(&self) -> CycleOutcome {
        let credential = {
            let session = self.session.lock().unwrap();
            session.credential().map(str::to_string)
        };

        let Some(credential) = credential else {
            self.renderer.lock().unwrap().show_credential_prompt();
            return CycleOutcome::NoCredential;
        };

        let time_range = self.time_range();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.renderer.lock().unwrap().show_loading();

        // No locks are held across the awaits. Tracks complete before the
        // artist request starts.
        let tracks = self
            .client
            .top_tracks(&credential, time_range, TOP_LIMIT)
            .await;
        let artists = self
            .client
            .top_artists(&credential, time_range, TOP_LIMIT)
            .await;

        // The renderer lock makes the staleness check and the draw atomic
        // with respect to competing cycles.
        let mut renderer = self.renderer.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("render cycle {} superseded before completion", generation);
            return CycleOutcome::Superseded;
        }

        match (tracks, artists) {
            (Ok(tracks), Ok(artists)) => {
                if tracks.is_empty() {
                    renderer.show_no_tracks();
                } else {
                    renderer.show_tracks(&tracks);
                }
                if artists.is_empty() {
                    renderer.show_no_artists();
                } else {
                    renderer.show_artists(&artists);
                }

                let counts = (tracks.len(), artists.len());
                *self.tracks.lock().unwrap() = tracks;
                CycleOutcome::Rendered {
                    tracks: counts.0,
                    artists: counts.1,
                }
            }
            (tracks, artists) => {
                if let Err(e) = &tracks {
                    log::warn!("top tracks request for {} failed: {}", time_range, e);
                }
                if let Err(e) = &artists {
                    log::warn!("top artists request for {} failed: {}", time_range, e);
                }

                self.tracks.lock().unwrap().clear();
                renderer.show_error();
                CycleOutcome::Error
            }
        }
    }

    /// Renders the detail view for the track with the given id.
    ///
    /// Returns `false` when the id is not in the most recently rendered list.
    pub fn show_details(&self, id: &str) -> bool {
        let detail = {
            let tracks = self.tracks.lock().unwrap();
            match tracks.iter().find(|track| track.id == id) {
                Some(track) => utils::track_detail(track),
                None => {
                    log::warn!("no track with id {} in the current list", id);
                    return false;
                }
            }
        };

        self.renderer.lock().unwrap().show_detail(&detail);
        true
    }

    /// Renders the detail view for the track at a 1-based list position.
    ///
    /// Returns `false` when the position is outside the most recently
    /// rendered list.
    pub fn show_details_at(&self, position: usize) -> bool {
        let id = {
            let tracks = self.tracks.lock().unwrap();
            position
                .checked_sub(1)
                .and_then(|idx| tracks.get(idx))
                .map(|track| track.id.clone())
        };

        match id {
            Some(id) => self.show_details(&id),
            None => {
                log::warn!("no track at position {} in the current list", position);
                false
            }
        }
    }
}
