//! UI surface the widget renders into
//!
//! The widget never touches markup. It tells a [`WidgetView`] what to show,
//! and the host decides how (DOM, terminal, test recorder).

use crate::types::{PlayIcon, PlaylistRow, Track};

/// Render target for the widget
pub trait WidgetView {
    /// Show title, artist and artwork of the current track
    fn show_track(&mut self, track: &Track);

    /// Swap the play/pause control icon
    fn set_play_icon(&mut self, icon: PlayIcon);

    /// Move the progress fill and the scrubber handle
    ///
    /// # Arguments
    /// * `percent` - Position along the track in `[0, 100]`
    fn set_progress(&mut self, percent: f64);

    /// Elapsed time text (`M:SS`)
    fn set_elapsed(&mut self, text: &str);

    /// Total duration text (`M:SS`)
    fn set_total(&mut self, text: &str);

    /// Re-render the playlist panel
    fn render_playlist(&mut self, rows: &[PlaylistRow]);
}

impl<V: WidgetView + ?Sized> WidgetView for Box<V> {
    fn show_track(&mut self, track: &Track) {
        (**self).show_track(track);
    }

    fn set_play_icon(&mut self, icon: PlayIcon) {
        (**self).set_play_icon(icon);
    }

    fn set_progress(&mut self, percent: f64) {
        (**self).set_progress(percent);
    }

    fn set_elapsed(&mut self, text: &str) {
        (**self).set_elapsed(text);
    }

    fn set_total(&mut self, text: &str) {
        (**self).set_total(text);
    }

    fn render_playlist(&mut self, rows: &[PlaylistRow]) {
        (**self).render_playlist(rows);
    }
}

/// View that renders nothing
///
/// Handy for headless hosts that only consume [`PlayerEvent`](crate::events::PlayerEvent)s.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl WidgetView for NullView {
    fn show_track(&mut self, _track: &Track) {}
    fn set_play_icon(&mut self, _icon: PlayIcon) {}
    fn set_progress(&mut self, _percent: f64) {}
    fn set_elapsed(&mut self, _text: &str) {}
    fn set_total(&mut self, _text: &str) {}
    fn render_playlist(&mut self, _rows: &[PlaylistRow]) {}
}
