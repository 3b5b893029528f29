//! Player - single owner of widget state
//!
//! Holds the playlist, the engine, the view and the one `PlayerState`.
//! Transport operations live in `controller`, progress/scrub handling in
//! `position`; both are `impl` blocks on [`Player`].

use crate::{
    config::WidgetConfig,
    engine::MediaEngine,
    error::Result,
    events::{PlayerEvent, WidgetInput},
    playlist::Playlist,
    position::SyncMode,
    types::{PlaylistRow, Track},
    view::WidgetView,
};
use tracing::trace;

/// Mutable widget state
///
/// Only [`Player`] writes it; hosts get a shared reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub(crate) current_index: usize,
    pub(crate) is_playing: bool,
    pub(crate) mode: SyncMode,
}

impl PlayerState {
    /// Index of the current track, always within the playlist
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether the engine was last told to play
    ///
    /// Best-effort mirror of the engine; it can lag behind when the engine
    /// changes state on its own.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Which path currently owns the progress indicators
    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    /// Whether a scrub gesture is in progress
    pub fn is_scrubbing(&self) -> bool {
        matches!(self.mode, SyncMode::Scrubbing { .. })
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            mode: SyncMode::Passive,
        }
    }
}

/// Playlist widget core
///
/// Single-threaded and run-to-completion: every input is handled fully
/// through `&mut self` before the next one arrives.
pub struct Player<E: MediaEngine, V: WidgetView> {
    pub(crate) playlist: Playlist,
    pub(crate) state: PlayerState,
    pub(crate) engine: E,
    pub(crate) view: V,
    pub(crate) config: WidgetConfig,

    // Whether any track has been loaded yet
    pub(crate) loaded: bool,

    // Consecutive load failures since the last successful metadata load
    pub(crate) load_failures: usize,

    // Event queue for host synchronization
    pending_events: Vec<PlayerEvent>,
}

impl<E: MediaEngine, V: WidgetView> Player<E, V> {
    /// Create a player
    ///
    /// Nothing is loaded until [`Player::initialize`] is called.
    pub fn new(playlist: Playlist, engine: E, view: V, config: WidgetConfig) -> Self {
        Self {
            playlist,
            state: PlayerState::default(),
            engine,
            view,
            config,
            loaded: false,
            load_failures: 0,
            pending_events: Vec::new(),
        }
    }

    /// Create a player over the built-in playlist with default configuration
    pub fn with_builtin(engine: E, view: V) -> Self {
        Self::new(Playlist::builtin(), engine, view, WidgetConfig::default())
    }

    /// Route one host input to the matching operation
    pub fn handle(&mut self, input: WidgetInput) -> Result<()> {
        trace!("Handling input: {:?}", input);

        match input {
            WidgetInput::PlayPause => self.toggle_play_pause(),
            WidgetInput::Next => self.next(),
            WidgetInput::Previous => self.previous(),
            WidgetInput::Select { index } => self.select_track(index),
            WidgetInput::Volume { fraction } => {
                self.set_volume(fraction);
                Ok(())
            }
            WidgetInput::PointerDown { pointer, point } => self.begin_scrub(pointer, point),
            WidgetInput::PointerMove { point } => {
                self.update_scrub(point);
                Ok(())
            }
            WidgetInput::PointerUp { point } => self.end_scrub(point),
            WidgetInput::ClickSeek { point } => self.click_seek(point),
            WidgetInput::PositionChanged => {
                self.handle_position_changed();
                Ok(())
            }
            WidgetInput::MetadataReady => {
                self.handle_metadata_ready();
                Ok(())
            }
            WidgetInput::Ended => self.handle_ended(),
            WidgetInput::LoadError { message } => self.handle_load_error(&message),
        }
    }

    // ===== State Queries =====

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn is_scrubbing(&self) -> bool {
        self.state.is_scrubbing()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Track at the current index
    pub fn current_track(&self) -> &Track {
        self.playlist.track(self.state.current_index)
    }

    /// Row models for the playlist panel
    pub fn playlist_rows(&self) -> Vec<PlaylistRow> {
        self.playlist.rows(self.state.current_index)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable engine access for hosts that advance a simulated clock
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    // ===== Events =====

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    pub(crate) fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    pub(crate) fn render_playlist(&mut self) {
        let rows = self.playlist.rows(self.state.current_index);
        self.view.render_playlist(&rows);
    }
}
