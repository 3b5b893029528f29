//! WASM-compatible widget wrapper

use super::{engine::AudioElementEngine, view::CallbackView};
use crate::{
    GesturePoint, Player, Playlist, PointerKind, WidgetConfig, WidgetError, WidgetInput,
};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// Playlist widget for the browser
///
/// This wraps the core [`Player`] with a JavaScript-friendly API. The host
/// page registers render callbacks, attaches media listeners to
/// `audioElement`, forwards pointer/touch events (release listeners must be
/// document-wide), then calls `initialize()`.
#[wasm_bindgen]
pub struct WasmPlaylistWidget {
    inner: Player<AudioElementEngine, CallbackView>,

    // Event callbacks
    on_event: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlaylistWidget {
    /// Create a widget over the built-in playlist
    ///
    /// `config` is an optional object with `initial_index`,
    /// `initial_volume` and `on_load_error`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmPlaylistWidget, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let config: WidgetConfig = if config.is_undefined() || config.is_null() {
            WidgetConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let engine = AudioElementEngine::new()?;

        Ok(Self {
            inner: Player::new(Playlist::builtin(), engine, CallbackView::default(), config),
            on_event: None,
            on_error: None,
        })
    }

    /// Load the initial track and render everything once
    pub fn initialize(&mut self) -> Result<(), JsValue> {
        let result = self.inner.initialize();
        self.finish(result)
    }

    /// The `<audio>` element the widget drives
    #[wasm_bindgen(getter, js_name = audioElement)]
    pub fn audio_element(&self) -> HtmlAudioElement {
        self.inner.engine().element().clone()
    }

    // ===== Playback Control =====

    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&mut self) -> Result<(), JsValue> {
        self.run(WidgetInput::PlayPause)
    }

    pub fn next(&mut self) -> Result<(), JsValue> {
        self.run(WidgetInput::Next)
    }

    pub fn previous(&mut self) -> Result<(), JsValue> {
        self.run(WidgetInput::Previous)
    }

    /// Playlist row clicked
    #[wasm_bindgen(js_name = selectTrack)]
    pub fn select_track(&mut self, index: i32) -> Result<(), JsValue> {
        self.run(WidgetInput::Select {
            index: i64::from(index),
        })
    }

    /// Set volume (0.0 - 1.0)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, fraction: f64) -> Result<(), JsValue> {
        self.run(WidgetInput::Volume { fraction })
    }

    // ===== Seeking =====

    /// `mousedown` / `touchstart` on the progress track
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(
        &mut self,
        client_x: f64,
        track_left: f64,
        track_width: f64,
        is_touch: bool,
    ) -> Result<(), JsValue> {
        let pointer = if is_touch {
            PointerKind::Touch
        } else {
            PointerKind::Mouse
        };

        self.run(WidgetInput::PointerDown {
            pointer,
            point: GesturePoint::new(client_x, track_left, track_width),
        })
    }

    /// `mousemove` / `touchmove` anywhere in the document
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(
        &mut self,
        client_x: f64,
        track_left: f64,
        track_width: f64,
    ) -> Result<(), JsValue> {
        self.run(WidgetInput::PointerMove {
            point: GesturePoint::new(client_x, track_left, track_width),
        })
    }

    /// `mouseup` / `touchend` anywhere in the document
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(
        &mut self,
        client_x: f64,
        track_left: f64,
        track_width: f64,
    ) -> Result<(), JsValue> {
        self.run(WidgetInput::PointerUp {
            point: Some(GesturePoint::new(client_x, track_left, track_width)),
        })
    }

    /// `touchcancel`, or a release without coordinates
    #[wasm_bindgen(js_name = pointerCancel)]
    pub fn pointer_cancel(&mut self) -> Result<(), JsValue> {
        self.run(WidgetInput::PointerUp { point: None })
    }

    // ===== Media Element Notifications =====

    /// `timeupdate`
    #[wasm_bindgen(js_name = handleTimeUpdate)]
    pub fn handle_time_update(&mut self) -> Result<(), JsValue> {
        self.run(WidgetInput::PositionChanged)
    }

    /// `loadedmetadata`
    #[wasm_bindgen(js_name = handleLoadedMetadata)]
    pub fn handle_loaded_metadata(&mut self) -> Result<(), JsValue> {
        self.run(WidgetInput::MetadataReady)
    }

    /// `ended`
    #[wasm_bindgen(js_name = handleEnded)]
    pub fn handle_ended(&mut self) -> Result<(), JsValue> {
        self.run(WidgetInput::Ended)
    }

    /// `error`
    #[wasm_bindgen(js_name = handleError)]
    pub fn handle_error_event(&mut self, message: String) -> Result<(), JsValue> {
        self.run(WidgetInput::LoadError { message })
    }

    /// Dispatch a JSON-shaped input, e.g. `{ type: "select", index: 1 }`
    pub fn dispatch(&mut self, input: JsValue) -> Result<(), JsValue> {
        let input: WidgetInput = serde_wasm_bindgen::from_value(input)
            .map_err(|e| self.handle_error(WidgetError::InvalidInput(e.to_string())))?;
        self.run(input)
    }

    // ===== State Queries =====

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.inner.current_index()
    }

    #[wasm_bindgen(getter, js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    #[wasm_bindgen(getter, js_name = isScrubbing)]
    pub fn is_scrubbing(&self) -> bool {
        self.inner.is_scrubbing()
    }

    /// Playlist rows as an array of plain objects
    #[wasm_bindgen(js_name = getPlaylist)]
    pub fn get_playlist(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.playlist_rows()).unwrap_or(JsValue::NULL)
    }

    // ===== Render Callbacks =====

    /// Called with `{ title, artist, source_url, artwork_url }`
    #[wasm_bindgen(js_name = onTrack)]
    pub fn on_track(&mut self, callback: Function) {
        self.inner.view_mut().on_track = Some(callback);
    }

    /// Called with `"play"` or `"pause"`
    #[wasm_bindgen(js_name = onPlayIcon)]
    pub fn on_play_icon(&mut self, callback: Function) {
        self.inner.view_mut().on_play_icon = Some(callback);
    }

    /// Called with a percentage for the fill width and scrubber offset
    #[wasm_bindgen(js_name = onProgress)]
    pub fn on_progress(&mut self, callback: Function) {
        self.inner.view_mut().on_progress = Some(callback);
    }

    #[wasm_bindgen(js_name = onElapsed)]
    pub fn on_elapsed(&mut self, callback: Function) {
        self.inner.view_mut().on_elapsed = Some(callback);
    }

    #[wasm_bindgen(js_name = onTotal)]
    pub fn on_total(&mut self, callback: Function) {
        self.inner.view_mut().on_total = Some(callback);
    }

    /// Called with the playlist rows whenever the highlight moves
    #[wasm_bindgen(js_name = onPlaylist)]
    pub fn on_playlist(&mut self, callback: Function) {
        self.inner.view_mut().on_playlist = Some(callback);
    }

    // ===== Event Listeners =====

    /// Register player event callback
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&mut self, callback: Function) {
        self.on_event = Some(callback);
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal =====

    fn run(&mut self, input: WidgetInput) -> Result<(), JsValue> {
        let result = self.inner.handle(input);
        self.finish(result)
    }

    fn finish(&mut self, result: crate::Result<()>) -> Result<(), JsValue> {
        self.emit_events();
        result.map_err(|e| self.handle_error(e))
    }

    fn emit_events(&mut self) {
        let events = self.inner.drain_events();

        if let Some(ref cb) = self.on_event {
            for event in events {
                if let Ok(js_event) = serde_wasm_bindgen::to_value(&event) {
                    cb.call1(&JsValue::NULL, &js_event).ok();
                }
            }
        }
    }

    fn handle_error(&self, error: WidgetError) -> JsValue {
        let err_msg = error.to_string();

        // Emit error event
        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}
