//! Soul Player - Playlist Widget
//!
//! Platform-agnostic core of the embeddable playlist widget.
//!
//! This crate provides:
//! - A fixed, circular playlist with wraparound navigation
//! - Transport control (play/pause, next/previous, volume)
//! - Auto-advance at the end of a track
//! - Progress synchronization with click-to-seek and drag-to-scrub
//! - Recovery from tracks that fail to load
//!
//! # Architecture
//!
//! `soul-widget` never touches the DOM or decodes audio:
//! - The audio element is abstracted by [`MediaEngine`]
//! - The markup is abstracted by [`WidgetView`]
//! - Host events arrive as [`WidgetInput`]s, outcomes leave as [`PlayerEvent`]s
//!
//! The `wasm` feature adds browser bindings over `HtmlAudioElement`.
//!
//! # Example
//!
//! ```rust
//! use soul_widget::{MediaEngine, NullView, Player, Result, WidgetInput};
//!
//! #[derive(Default)]
//! struct Engine {
//!     position: f64,
//!     duration: Option<f64>,
//! }
//!
//! impl MediaEngine for Engine {
//!     fn load(&mut self, _url: &str) -> Result<()> {
//!         self.duration = None;
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) {}
//!     fn seek_to(&mut self, seconds: f64) -> Result<()> {
//!         self.position = seconds;
//!         Ok(())
//!     }
//!     fn position(&self) -> f64 {
//!         self.position
//!     }
//!     fn duration(&self) -> Option<f64> {
//!         self.duration
//!     }
//!     fn set_volume(&mut self, _fraction: f64) {}
//! }
//!
//! let mut player = Player::with_builtin(Engine::default(), NullView);
//! player.initialize()?;
//!
//! player.handle(WidgetInput::Select { index: 2 })?;
//! assert_eq!(player.current_index(), 2);
//! assert!(player.is_playing());
//! # Ok::<(), soul_widget::WidgetError>(())
//! ```

pub mod config;
mod controller;
mod engine;
mod error;
pub mod events;
mod player;
mod playlist;
pub mod position;
pub mod time;
pub mod types;
mod view;
pub mod wasm;

// Public exports
pub use config::{LoadErrorPolicy, WidgetConfig};
pub use engine::MediaEngine;
pub use error::{Result, WidgetError};
pub use events::{PlayerEvent, WidgetInput};
pub use player::{Player, PlayerState};
pub use playlist::Playlist;
pub use position::SyncMode;
pub use time::format_time;
pub use types::{GesturePoint, PlayIcon, PlaylistRow, PointerKind, Track, Volume};
pub use view::{NullView, WidgetView};
