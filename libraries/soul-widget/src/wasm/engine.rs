//! `HtmlAudioElement`-backed media engine

use crate::{MediaEngine, Result, WidgetError};
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

/// Media engine over a detached `<audio>` element
///
/// The host attaches `timeupdate`, `loadedmetadata`, `ended` and `error`
/// listeners to [`AudioElementEngine::element`] and forwards them to the
/// widget.
pub struct AudioElementEngine {
    audio: HtmlAudioElement,
}

impl AudioElementEngine {
    /// Create a new audio element
    pub fn new() -> std::result::Result<Self, JsValue> {
        Ok(Self {
            audio: HtmlAudioElement::new()?,
        })
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.audio
    }
}

impl MediaEngine for AudioElementEngine {
    fn load(&mut self, url: &str) -> Result<()> {
        self.audio.set_src(url);
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        // Autoplay rejections arrive asynchronously through the promise
        self.audio.play().map(|_| ()).map_err(js_error)
    }

    fn pause(&mut self) {
        self.audio.pause().ok();
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        self.audio.set_current_time(seconds);
        Ok(())
    }

    fn position(&self) -> f64 {
        self.audio.current_time()
    }

    fn duration(&self) -> Option<f64> {
        // NaN until metadata is loaded; filtered by the widget
        Some(self.audio.duration())
    }

    fn set_volume(&mut self, fraction: f64) {
        self.audio.set_volume(fraction);
    }
}

fn js_error(value: JsValue) -> WidgetError {
    WidgetError::Engine(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
