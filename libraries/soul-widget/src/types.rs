//! Core types for the playlist widget

use serde::{Deserialize, Serialize};

/// One playable entry in the fixed playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// URL handed to the media engine
    pub source_url: String,

    /// Cover image URL
    pub artwork_url: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        source_url: impl Into<String>,
        artwork_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            source_url: source_url.into(),
            artwork_url: artwork_url.into(),
        }
    }
}

/// Which icon the play/pause control shows
///
/// `Play` is shown while paused, `Pause` while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayIcon {
    Play,
    Pause,
}

impl PlayIcon {
    /// Icon matching a playing flag
    pub fn for_playing(is_playing: bool) -> Self {
        if is_playing {
            PlayIcon::Pause
        } else {
            PlayIcon::Play
        }
    }
}

/// Input device that started a scrub gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// A gesture coordinate together with the progress track's bounds
///
/// Bounds travel with every sample because the host measures the bounding
/// box at event time; layout may change between events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GesturePoint {
    /// Horizontal client coordinate of the pointer
    pub client_x: f64,

    /// Left edge of the progress track in client coordinates
    pub track_left: f64,

    /// Rendered width of the progress track
    pub track_width: f64,
}

impl GesturePoint {
    pub fn new(client_x: f64, track_left: f64, track_width: f64) -> Self {
        Self {
            client_x,
            track_left,
            track_width,
        }
    }

    /// Horizontal fraction of the track under the pointer, clamped to `[0, 1]`
    ///
    /// `None` when the track has no usable width.
    pub fn fraction(&self) -> Option<f64> {
        if !self.track_width.is_finite() || self.track_width <= 0.0 {
            return None;
        }

        let fraction = (self.client_x - self.track_left) / self.track_width;
        if fraction.is_nan() {
            return None;
        }

        Some(fraction.clamp(0.0, 1.0))
    }
}

/// Volume as a fraction in `[0.0, 1.0]`
///
/// Only used to sanitize what the host sends; the engine owns the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume(f64);

impl Volume {
    /// Clamp into range (`NaN` becomes silence)
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            Self(0.0)
        } else {
            Self(fraction.clamp(0.0, 1.0))
        }
    }

    pub fn fraction(self) -> f64 {
        self.0
    }
}

/// What the playlist panel renders for one track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRow {
    pub index: usize,
    pub title: String,
    pub artist: String,
    pub artwork_url: String,

    /// Highlighted as the current track
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_follows_playing_flag() {
        assert_eq!(PlayIcon::for_playing(true), PlayIcon::Pause);
        assert_eq!(PlayIcon::for_playing(false), PlayIcon::Play);
    }

    #[test]
    fn gesture_fraction_is_relative_to_track_left() {
        let point = GesturePoint::new(150.0, 100.0, 200.0);
        assert_eq!(point.fraction(), Some(0.25));
    }

    #[test]
    fn gesture_fraction_clamps_outside_track() {
        assert_eq!(GesturePoint::new(-40.0, 0.0, 200.0).fraction(), Some(0.0));
        assert_eq!(GesturePoint::new(900.0, 0.0, 200.0).fraction(), Some(1.0));
    }

    #[test]
    fn gesture_fraction_needs_width() {
        assert_eq!(GesturePoint::new(10.0, 0.0, 0.0).fraction(), None);
        assert_eq!(GesturePoint::new(10.0, 0.0, -5.0).fraction(), None);
        assert_eq!(GesturePoint::new(10.0, 0.0, f64::NAN).fraction(), None);
        assert_eq!(GesturePoint::new(f64::NAN, 0.0, 100.0).fraction(), None);
    }

    #[test]
    fn volume_is_clamped() {
        assert_eq!(Volume::new(0.4).fraction(), 0.4);
        assert_eq!(Volume::new(1.7).fraction(), 1.0);
        assert_eq!(Volume::new(-0.2).fraction(), 0.0);
        assert_eq!(Volume::new(f64::NAN).fraction(), 0.0);
    }

    #[test]
    fn track_serializes_with_snake_case_fields() {
        let track = Track::new("Title", "Artist", "https://a/b.mp3", "https://a/b.png");
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["source_url"], "https://a/b.mp3");
        assert_eq!(json["artwork_url"], "https://a/b.png");
    }
}
