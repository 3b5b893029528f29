//! Simulated engine and terminal view

use serde::Deserialize;
use soul_widget::{MediaEngine, PlayIcon, PlaylistRow, Result, Track, WidgetInput, WidgetView};
use tracing::debug;

/// One line of a simulation script
///
/// Either a widget input (`{"type": "next"}`) or a clock advance
/// (`{"advance_secs": 30}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SimStep {
    Advance { advance_secs: f64 },
    Input(WidgetInput),
}

/// Media engine with a manual clock
///
/// Metadata becomes available on the first advance after a load, the way a
/// real element reports `loadedmetadata` asynchronously.
pub struct SimulatedEngine {
    track_secs: f64,
    failing_urls: Vec<String>,
    url: Option<String>,
    playing: bool,
    position: f64,
    duration: Option<f64>,
    load_pending: bool,
}

impl SimulatedEngine {
    pub fn new(track_secs: f64, failing_urls: Vec<String>) -> Self {
        Self {
            track_secs,
            failing_urls,
            url: None,
            playing: false,
            position: 0.0,
            duration: None,
            load_pending: false,
        }
    }

    /// Move the clock forward, returning the notifications a real engine
    /// would have fired in that time
    pub fn advance(&mut self, secs: f64) -> Vec<WidgetInput> {
        let mut notices = Vec::new();

        if self.load_pending {
            self.load_pending = false;

            let failing = self
                .url
                .as_deref()
                .is_some_and(|url| self.failing_urls.iter().any(|f| url.contains(f.as_str())));
            if failing {
                self.playing = false;
                notices.push(WidgetInput::LoadError {
                    message: "simulated load failure".to_string(),
                });
                return notices;
            }

            self.duration = Some(self.track_secs);
            notices.push(WidgetInput::MetadataReady);
        }

        let Some(duration) = self.duration else {
            return notices;
        };

        if self.playing {
            self.position = (self.position + secs).min(duration);
            notices.push(WidgetInput::PositionChanged);

            if self.position >= duration {
                self.playing = false;
                notices.push(WidgetInput::Ended);
            }
        }

        notices
    }
}

impl MediaEngine for SimulatedEngine {
    fn load(&mut self, url: &str) -> Result<()> {
        debug!("Engine load: {}", url);
        self.url = Some(url.to_string());
        self.position = 0.0;
        self.duration = None;
        self.load_pending = true;
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
        debug!("Engine seek: {:.2}s", seconds);
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
        debug!("Engine volume: {:.2}", fraction);
    }
}

/// Prints every render call as one line
pub struct TerminalView;

impl WidgetView for TerminalView {
    fn show_track(&mut self, track: &Track) {
        println!("[track]    {} - {} ({})", track.title, track.artist, track.artwork_url);
    }

    fn set_play_icon(&mut self, icon: PlayIcon) {
        let glyph = match icon {
            PlayIcon::Play => "play",
            PlayIcon::Pause => "pause",
        };
        println!("[icon]     {}", glyph);
    }

    fn set_progress(&mut self, percent: f64) {
        println!("[progress] {:.1}%", percent);
    }

    fn set_elapsed(&mut self, text: &str) {
        println!("[elapsed]  {}", text);
    }

    fn set_total(&mut self, text: &str) {
        println!("[total]    {}", text);
    }

    fn render_playlist(&mut self, rows: &[PlaylistRow]) {
        for row in rows {
            let marker = if row.selected { '>' } else { ' ' };
            println!("[playlist] {} {}. {} - {}", marker, row.index, row.title, row.artist);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_arrives_on_first_advance() {
        let mut engine = SimulatedEngine::new(120.0, Vec::new());
        engine.load("https://example.com/a.mp3").unwrap();
        assert_eq!(engine.duration(), None);

        let notices = engine.advance(0.0);
        assert_eq!(notices, vec![WidgetInput::MetadataReady]);
        assert_eq!(engine.duration(), Some(120.0));
    }

    #[test]
    fn playing_engine_reports_end() {
        let mut engine = SimulatedEngine::new(10.0, Vec::new());
        engine.load("https://example.com/a.mp3").unwrap();
        engine.play().unwrap();

        let notices = engine.advance(15.0);
        assert_eq!(
            notices,
            vec![
                WidgetInput::MetadataReady,
                WidgetInput::PositionChanged,
                WidgetInput::Ended,
            ]
        );
        assert_eq!(engine.position(), 10.0);
    }

    #[test]
    fn failing_url_reports_load_error() {
        let mut engine = SimulatedEngine::new(10.0, vec!["Song-2".to_string()]);
        engine
            .load("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3")
            .unwrap();

        let notices = engine.advance(1.0);
        assert!(matches!(notices.as_slice(), [WidgetInput::LoadError { .. }]));
        assert_eq!(engine.duration(), None);
    }

    #[test]
    fn script_lines_parse() {
        let step: SimStep = serde_json::from_str(r#"{"advance_secs": 2.5}"#).unwrap();
        assert!(matches!(step, SimStep::Advance { advance_secs } if advance_secs == 2.5));

        let step: SimStep = serde_json::from_str(r#"{"type": "next"}"#).unwrap();
        assert!(matches!(step, SimStep::Input(WidgetInput::Next)));
    }
}
