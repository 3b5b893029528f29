//! Platform-agnostic media engine trait
//!
//! Abstracts the element that actually decodes and plays audio
//! (`HtmlAudioElement` in the browser, a simulated clock in the CLI, a
//! recording mock in tests).

use crate::error::Result;

/// Media engine driven by the widget
///
/// The engine always holds exactly one loaded source after initialization.
/// Its lifecycle notifications (position changed, metadata ready, ended,
/// load error) are forwarded by the host as
/// [`WidgetInput`](crate::events::WidgetInput)s.
pub trait MediaEngine {
    /// Replace the current source
    ///
    /// Duration becomes unknown until the engine reports metadata.
    fn load(&mut self, url: &str) -> Result<()>;

    /// Start or resume playback of the loaded source
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Move the playback position
    ///
    /// # Arguments
    /// * `seconds` - Target position from the start, within `[0, duration]`
    fn seek_to(&mut self, seconds: f64) -> Result<()>;

    /// Current playback position in seconds
    fn position(&self) -> f64;

    /// Total duration in seconds
    ///
    /// `None` (or a non-finite value) while metadata is not loaded yet.
    fn duration(&self) -> Option<f64>;

    /// Output volume as a fraction in `[0, 1]`
    fn set_volume(&mut self, fraction: f64);
}

impl<E: MediaEngine + ?Sized> MediaEngine for Box<E> {
    fn load(&mut self, url: &str) -> Result<()> {
        (**self).load(url)
    }

    fn play(&mut self) -> Result<()> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        (**self).seek_to(seconds)
    }

    fn position(&self) -> f64 {
        (**self).position()
    }

    fn duration(&self) -> Option<f64> {
        (**self).duration()
    }

    fn set_volume(&mut self, fraction: f64) {
        (**self).set_volume(fraction);
    }
}

/// Engine that plays nothing, with a settable clock
///
/// Used by unit tests inside the crate.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SilentEngine {
    pub url: Option<String>,
    pub playing: bool,
    pub position: f64,
    pub duration: Option<f64>,
    pub volume: f64,
    pub seeks: Vec<f64>,
}

#[cfg(test)]
impl MediaEngine for SilentEngine {
    fn load(&mut self, url: &str) -> Result<()> {
        self.url = Some(url.to_string());
        self.position = 0.0;
        self.duration = None;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        self.position = seconds;
        self.seeks.push(seconds);
        Ok(())
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn set_volume(&mut self, fraction: f64) {
        self.volume = fraction;
    }
}
