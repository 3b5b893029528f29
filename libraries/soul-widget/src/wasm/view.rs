//! View that renders through JavaScript callbacks

use crate::{PlayIcon, PlaylistRow, Track, WidgetView};
use js_sys::Function;
use wasm_bindgen::JsValue;

/// Forwards every render call to a registered JS function
///
/// Unregistered targets are skipped, so a host can render only the parts
/// of the widget it shows.
#[derive(Default)]
pub struct CallbackView {
    pub(crate) on_track: Option<Function>,
    pub(crate) on_play_icon: Option<Function>,
    pub(crate) on_progress: Option<Function>,
    pub(crate) on_elapsed: Option<Function>,
    pub(crate) on_total: Option<Function>,
    pub(crate) on_playlist: Option<Function>,
}

impl WidgetView for CallbackView {
    fn show_track(&mut self, track: &Track) {
        if let Some(ref cb) = self.on_track {
            if let Ok(js_track) = serde_wasm_bindgen::to_value(track) {
                cb.call1(&JsValue::NULL, &js_track).ok();
            }
        }
    }

    fn set_play_icon(&mut self, icon: PlayIcon) {
        if let Some(ref cb) = self.on_play_icon {
            let name = match icon {
                PlayIcon::Play => "play",
                PlayIcon::Pause => "pause",
            };
            cb.call1(&JsValue::NULL, &JsValue::from_str(name)).ok();
        }
    }

    fn set_progress(&mut self, percent: f64) {
        if let Some(ref cb) = self.on_progress {
            cb.call1(&JsValue::NULL, &JsValue::from_f64(percent)).ok();
        }
    }

    fn set_elapsed(&mut self, text: &str) {
        if let Some(ref cb) = self.on_elapsed {
            cb.call1(&JsValue::NULL, &JsValue::from_str(text)).ok();
        }
    }

    fn set_total(&mut self, text: &str) {
        if let Some(ref cb) = self.on_total {
            cb.call1(&JsValue::NULL, &JsValue::from_str(text)).ok();
        }
    }

    fn render_playlist(&mut self, rows: &[PlaylistRow]) {
        if let Some(ref cb) = self.on_playlist {
            if let Ok(js_rows) = serde_wasm_bindgen::to_value(rows) {
                cb.call1(&JsValue::NULL, &js_rows).ok();
            }
        }
    }
}
