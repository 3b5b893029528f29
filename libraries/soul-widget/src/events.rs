//! Widget events
//!
//! Two directions:
//! - [`WidgetInput`]: what the host forwards in (button clicks, pointer and
//!   touch gestures, media engine notifications)
//! - [`PlayerEvent`]: what the widget reports out, queued until the host
//!   drains them

use crate::types::{GesturePoint, PointerKind};
use serde::{Deserialize, Serialize};

/// Input forwarded by the host
///
/// Serialized with a `type` tag so hosts can send plain JSON:
/// `{"type": "select", "index": 2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetInput {
    /// Play/pause button
    PlayPause,

    /// Next button
    Next,

    /// Previous button
    Previous,

    /// Click on a playlist row
    Select { index: i64 },

    /// Volume control moved
    Volume { fraction: f64 },

    /// Pointer pressed (or touch started) on the progress track
    PointerDown {
        #[serde(default = "default_pointer")]
        pointer: PointerKind,
        #[serde(flatten)]
        point: GesturePoint,
    },

    /// Pointer moved anywhere in the document
    PointerMove {
        #[serde(flatten)]
        point: GesturePoint,
    },

    /// Pointer released (or touch ended) anywhere in the document
    ///
    /// `point` is absent when the host could not resolve a coordinate,
    /// e.g. a cancelled touch.
    PointerUp {
        #[serde(default)]
        point: Option<GesturePoint>,
    },

    /// Single click on the progress track
    ClickSeek {
        #[serde(flatten)]
        point: GesturePoint,
    },

    /// Engine reported a new playback position
    PositionChanged,

    /// Engine loaded the metadata; duration is known
    MetadataReady,

    /// Engine reached the end of the source
    Ended,

    /// Engine failed to load or decode the source
    LoadError { message: String },
}

fn default_pointer() -> PointerKind {
    PointerKind::Mouse
}

/// Events emitted by the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerEvent {
    /// Playing flag changed
    StateChanged { playing: bool },

    /// A different (or the same, reloaded) track is now current
    TrackChanged {
        index: usize,
        previous_index: Option<usize>,
    },

    /// Duration of the current track became known
    DurationKnown { duration_secs: f64 },

    /// Engine position was moved by the user
    Seeked { position_secs: f64 },

    /// Scrub gesture started; passive updates suspended
    ScrubStarted { pointer: PointerKind },

    /// Scrub gesture ended; passive updates resumed
    ScrubEnded,

    /// Volume was forwarded to the engine
    VolumeChanged { fraction: f64 },

    /// Engine could not play the track at `index`
    LoadFailed { index: usize, message: String },

    /// Playback gave up after every track failed to load
    PlaybackStalled,
}
