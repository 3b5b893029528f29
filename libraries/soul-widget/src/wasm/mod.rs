//! WASM bindings for soul-widget
//!
//! This module provides WebAssembly bindings for the widget core, driving an
//! `HtmlAudioElement` and rendering through JavaScript callbacks.

#[cfg(feature = "wasm")]
pub mod engine;

#[cfg(feature = "wasm")]
pub mod view;

#[cfg(feature = "wasm")]
pub mod widget;

#[cfg(feature = "wasm")]
pub use engine::AudioElementEngine;

#[cfg(feature = "wasm")]
pub use view::CallbackView;

#[cfg(feature = "wasm")]
pub use widget::WasmPlaylistWidget;
