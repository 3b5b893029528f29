//! Position sync - progress indicator ownership
//!
//! The progress fill, the scrubber handle and the elapsed time display are
//! written by exactly one of two paths at any time:
//! - Passive: engine position reports, while no gesture is active
//! - Scrubbing: the user's pointer or touch gesture
//!
//! ```text
//!            pointer down                       pointer up
//! Passive ─────────────────► Scrubbing ─────────────────────► Passive
//!   ▲  │    seek(preview)      │     ▲       seek(release)
//!   │  │                       │     │
//!   └──┘ position changed      └─────┘ pointer move
//!        (render)                      (render preview, no seek)
//! ```

use crate::{
    engine::MediaEngine,
    error::Result,
    events::PlayerEvent,
    player::Player,
    time::{format_time, valid_duration},
    types::{GesturePoint, PointerKind},
    view::WidgetView,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Which path may write the progress indicators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SyncMode {
    /// Engine position reports drive the indicators
    Passive,

    /// A scrub gesture drives the indicators; engine reports are dropped
    Scrubbing {
        /// Device that started the gesture
        pointer: PointerKind,

        /// Last provisional position in seconds, not yet committed
        preview: Option<f64>,
    },
}

/// Position in seconds under a gesture point
///
/// `None` when the duration is unknown or the track has no usable width.
/// The horizontal fraction is clamped, so pointers dragged past either end
/// of the track map to the start or the end.
pub fn position_for_point(point: &GesturePoint, duration: Option<f64>) -> Option<f64> {
    let duration = valid_duration(duration)?;
    let fraction = point.fraction()?;
    Some(fraction * duration)
}

/// Progress percentage for a position, clamped to `[0, 100]`
pub fn percent_of(position: f64, duration: f64) -> f64 {
    (position / duration * 100.0).clamp(0.0, 100.0)
}

impl<E: MediaEngine, V: WidgetView> Player<E, V> {
    /// Engine reported a new playback position
    ///
    /// Dropped while scrubbing or while the duration is unknown.
    pub fn handle_position_changed(&mut self) {
        if self.state.is_scrubbing() {
            trace!("Position report dropped while scrubbing");
            return;
        }

        let Some(duration) = valid_duration(self.engine.duration()) else {
            return;
        };

        let position = self.engine.position();
        if !position.is_finite() {
            return;
        }

        self.render_position(position, duration);
    }

    /// Engine loaded the metadata of the current track
    pub fn handle_metadata_ready(&mut self) {
        let Some(duration) = valid_duration(self.engine.duration()) else {
            debug!("Metadata ready without a usable duration");
            return;
        };

        self.load_failures = 0;
        self.view.set_total(&format_time(duration));
        self.emit(PlayerEvent::DurationKnown {
            duration_secs: duration,
        });
    }

    /// Pointer pressed or touch started on the progress track
    ///
    /// Takes the indicators away from the passive path and seeks straight to
    /// the pressed position.
    pub fn begin_scrub(&mut self, pointer: PointerKind, point: GesturePoint) -> Result<()> {
        if !self.state.is_scrubbing() {
            debug!("Scrub started ({:?})", pointer);
            self.emit(PlayerEvent::ScrubStarted { pointer });
        }

        let duration = self.engine.duration();
        let preview = position_for_point(&point, duration);
        self.state.mode = SyncMode::Scrubbing { pointer, preview };

        if let (Some(position), Some(duration)) = (preview, valid_duration(duration)) {
            self.render_position(position, duration);
            self.seek(position)?;
        }

        Ok(())
    }

    /// Pointer moved while a gesture may be active
    ///
    /// Only the indicators follow the pointer; the engine is not sought until
    /// release. Moves without an active gesture are ignored.
    pub fn update_scrub(&mut self, point: GesturePoint) {
        let SyncMode::Scrubbing { pointer, .. } = self.state.mode else {
            return;
        };

        let duration = self.engine.duration();
        let Some(position) = position_for_point(&point, duration) else {
            return;
        };
        let Some(duration) = valid_duration(duration) else {
            return;
        };

        self.state.mode = SyncMode::Scrubbing {
            pointer,
            preview: Some(position),
        };
        self.render_position(position, duration);
    }

    /// Pointer released or touch ended anywhere in the document
    ///
    /// Hands the indicators back to the passive path and commits one seek at
    /// the release point. Without a usable release point the last preview is
    /// committed. Releases without an active gesture are ignored.
    pub fn end_scrub(&mut self, point: Option<GesturePoint>) -> Result<()> {
        let SyncMode::Scrubbing { preview, .. } = self.state.mode else {
            return Ok(());
        };

        self.state.mode = SyncMode::Passive;
        debug!("Scrub ended");
        self.emit(PlayerEvent::ScrubEnded);

        let Some(duration) = valid_duration(self.engine.duration()) else {
            return Ok(());
        };

        let target = point
            .and_then(|p| position_for_point(&p, Some(duration)))
            .or(preview)
            .map(|position| position.clamp(0.0, duration));

        if let Some(position) = target {
            self.seek(position)?;
        }

        Ok(())
    }

    /// Single click on the progress track, outside any gesture
    pub fn click_seek(&mut self, point: GesturePoint) -> Result<()> {
        if self.state.is_scrubbing() {
            return Ok(());
        }

        match position_for_point(&point, self.engine.duration()) {
            Some(position) => self.seek(position),
            None => Ok(()),
        }
    }

    fn seek(&mut self, position: f64) -> Result<()> {
        debug!("Seeking to {:.2}s", position);
        self.engine.seek_to(position)?;
        self.emit(PlayerEvent::Seeked {
            position_secs: position,
        });
        Ok(())
    }

    fn render_position(&mut self, position: f64, duration: f64) {
        self.view.set_progress(percent_of(position, duration));
        self.view.set_elapsed(&format_time(position));
    }
}
