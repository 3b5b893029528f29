//! Shared test infrastructure: recording engine and view
#![allow(dead_code)]

use soul_widget::{
    MediaEngine, PlayIcon, Player, Playlist, PlaylistRow, Result, Track, WidgetConfig,
    WidgetError, WidgetView,
};

/// Command received by the mock engine, in order
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Load(String),
    Play,
    Pause,
    SeekTo(f64),
    SetVolume(f64),
}

/// Mock media engine that records every command
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: Vec<EngineCall>,
    pub position: f64,
    pub duration: Option<f64>,
    /// Duration reported after the next `load`, simulating metadata arriving
    pub next_duration: Option<f64>,
    /// Simulate `play()` being rejected
    pub fail_on_play: bool,
}

impl RecordingEngine {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            next_duration: Some(duration),
            ..Self::default()
        }
    }

    pub fn play_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == EngineCall::Play).count()
    }

    pub fn seeks(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                EngineCall::SeekTo(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn last_load(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            EngineCall::Load(url) => Some(url.as_str()),
            _ => None,
        })
    }
}

impl MediaEngine for RecordingEngine {
    fn load(&mut self, url: &str) -> Result<()> {
        self.calls.push(EngineCall::Load(url.to_string()));
        self.position = 0.0;
        self.duration = self.next_duration;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.fail_on_play {
            return Err(WidgetError::Engine("play() rejected".to_string()));
        }
        self.calls.push(EngineCall::Play);
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(EngineCall::Pause);
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        self.calls.push(EngineCall::SeekTo(seconds));
        self.position = seconds;
        Ok(())
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn set_volume(&mut self, fraction: f64) {
        self.calls.push(EngineCall::SetVolume(fraction));
    }
}

/// Render call received by the mock view, in order
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    Track(String),
    Icon(PlayIcon),
    Progress(f64),
    Elapsed(String),
    Total(String),
    Playlist(Vec<PlaylistRow>),
}

/// Mock view that records every render call
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn icons(&self) -> Vec<PlayIcon> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Icon(icon) => Some(*icon),
                _ => None,
            })
            .collect()
    }

    pub fn last_icon(&self) -> Option<PlayIcon> {
        self.icons().last().copied()
    }

    pub fn last_progress(&self) -> Option<f64> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Progress(p) => Some(*p),
            _ => None,
        })
    }

    pub fn last_elapsed(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Elapsed(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn last_total(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Total(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn last_playlist(&self) -> Option<&[PlaylistRow]> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Playlist(rows) => Some(rows.as_slice()),
            _ => None,
        })
    }

    /// Calls that touch the progress indicators or elapsed time
    pub fn indicator_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ViewCall::Progress(_) | ViewCall::Elapsed(_)))
            .count()
    }
}

impl WidgetView for RecordingView {
    fn show_track(&mut self, track: &Track) {
        self.calls.push(ViewCall::Track(track.title.clone()));
    }

    fn set_play_icon(&mut self, icon: PlayIcon) {
        self.calls.push(ViewCall::Icon(icon));
    }

    fn set_progress(&mut self, percent: f64) {
        self.calls.push(ViewCall::Progress(percent));
    }

    fn set_elapsed(&mut self, text: &str) {
        self.calls.push(ViewCall::Elapsed(text.to_string()));
    }

    fn set_total(&mut self, text: &str) {
        self.calls.push(ViewCall::Total(text.to_string()));
    }

    fn render_playlist(&mut self, rows: &[PlaylistRow]) {
        self.calls.push(ViewCall::Playlist(rows.to_vec()));
    }
}

pub type TestPlayer = Player<RecordingEngine, RecordingView>;

pub fn create_test_playlist(n: usize) -> Playlist {
    let tracks = (0..n)
        .map(|i| {
            Track::new(
                format!("Track {}", i),
                format!("Artist {}", i),
                format!("https://example.com/audio/{}.mp3", i),
                format!("https://example.com/art/{}.png", i),
            )
        })
        .collect();
    Playlist::new(tracks).expect("non-empty playlist")
}

/// Initialized player over `n` tracks whose duration is known, with all
/// startup calls cleared
pub fn create_test_player(n: usize, duration: f64) -> TestPlayer {
    create_test_player_with_config(n, duration, WidgetConfig::default())
}

pub fn create_test_player_with_config(n: usize, duration: f64, config: WidgetConfig) -> TestPlayer {
    let mut player = Player::new(
        create_test_playlist(n),
        RecordingEngine::with_duration(duration),
        RecordingView::default(),
        config,
    );
    player.initialize().expect("initialize");
    clear_recordings(&mut player);
    player
}

pub fn clear_recordings(player: &mut TestPlayer) {
    player.engine_mut().calls.clear();
    player.view_mut().calls.clear();
    player.drain_events();
}
