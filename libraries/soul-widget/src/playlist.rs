//! Fixed, circular playlist
//!
//! The widget plays a compiled-in list of tracks. The list never changes
//! after construction; navigation wraps around at both ends.

use crate::error::{Result, WidgetError};
use crate::types::{PlaylistRow, Track};

/// Ordered, non-empty, immutable list of tracks
///
/// ```text
///   previous()           next()
///  ┌─────────┐         ┌─────────┐
///  ▼         │         │         ▼
/// [3] ◄── [0] [1] [2] [3] ──► [0]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create a playlist
    ///
    /// Fails with [`WidgetError::EmptyPlaylist`] if `tracks` is empty, since
    /// the current-index invariant cannot hold for zero tracks.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(WidgetError::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    /// The playlist shipped with the widget
    pub fn builtin() -> Self {
        let tracks = vec![
            Track::new(
                "Chill Lofi Beat",
                "AI Music",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
                "https://placehold.co/256x256/A78BFA/FFFFFF?text=Lofi",
            ),
            Track::new(
                "Inspirational Cinematic",
                "AI Music Studio",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
                "https://placehold.co/256x256/818CF8/FFFFFF?text=Cinematic",
            ),
            Track::new(
                "Energetic Pop Track",
                "Digital Beats",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
                "https://placehold.co/256x256/6366F1/FFFFFF?text=Pop",
            ),
            Track::new(
                "Ambient Waves",
                "Soundscape Creator",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
                "https://placehold.co/256x256/4F46E5/FFFFFF?text=Ambient",
            ),
        ];

        Self { tracks }
    }

    /// Map any index onto the playlist, treating it as circular
    ///
    /// `-1` is the last track, `len()` is the first.
    pub fn normalize(&self, index: i64) -> usize {
        // len() fits in i64 for any list that fits in memory
        let len = self.tracks.len() as i64;
        index.rem_euclid(len) as usize
    }

    /// Track at an index, if it is in range
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Track at an index, wrapping out-of-range values
    pub fn track(&self, index: usize) -> &Track {
        &self.tracks[index % self.tracks.len()]
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Never true for a constructed playlist
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Row models for the playlist panel, highlighting `current`
    pub fn rows(&self, current: usize) -> Vec<PlaylistRow> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(index, track)| PlaylistRow {
                index,
                title: track.title.clone(),
                artist: track.artist.clone(),
                artwork_url: track.artwork_url.clone(),
                selected: index == current,
            })
            .collect()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::builtin()
    }
}
