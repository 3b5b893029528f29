//! Playback controller - transport operations
//!
//! Track selection with wraparound, play/pause, auto-advance at the end of a
//! track, volume, and recovery from load errors.

use crate::{
    config::LoadErrorPolicy,
    engine::MediaEngine,
    error::Result,
    events::PlayerEvent,
    player::Player,
    time::format_time,
    types::{PlayIcon, Volume},
    view::WidgetView,
};
use tracing::{debug, info, warn};

impl<E: MediaEngine, V: WidgetView> Player<E, V> {
    /// First load after construction
    ///
    /// Applies the configured volume, shows the play icon and loads the
    /// configured initial track without starting playback.
    pub fn initialize(&mut self) -> Result<()> {
        info!(
            "Initializing widget with {} tracks at index {}",
            self.playlist.len(),
            self.config.initial_index
        );

        self.set_volume(self.config.initial_volume);
        self.view
            .set_play_icon(PlayIcon::for_playing(self.state.is_playing));
        self.load_track(self.config.initial_index)
    }

    /// Make the track at `index` current
    ///
    /// Out-of-range indices wrap around. If playback was active it continues
    /// on the new track; otherwise the new track stays paused.
    pub fn load_track(&mut self, index: i64) -> Result<()> {
        self.switch_track(index, self.state.is_playing)
    }

    /// Load, render and announce the track, then start it when `resume` is set
    ///
    /// A rejected `play()` leaves the new track current but paused.
    fn switch_track(&mut self, index: i64, resume: bool) -> Result<()> {
        let index = self.playlist.normalize(index);
        let track = self.playlist.track(index);
        debug!("Loading track {} ({} - {})", index, track.artist, track.title);

        self.engine.load(&track.source_url)?;

        let previous_index = self.loaded.then_some(self.state.current_index);
        self.state.current_index = index;
        self.loaded = true;

        self.view.show_track(track);

        // The scrub gesture owns the indicators until it is released
        if !self.state.is_scrubbing() {
            self.view.set_progress(0.0);
            self.view.set_elapsed(&format_time(0.0));
        }
        self.view.set_total(&format_time(0.0));

        self.render_playlist();
        self.emit(PlayerEvent::TrackChanged {
            index,
            previous_index,
        });

        if resume {
            if let Err(e) = self.engine.play() {
                warn!("Failed to start track {}: {}", index, e);
                self.mark_paused();
                return Err(e);
            }
        }

        Ok(())
    }

    /// Pause if playing, play otherwise
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.state.is_playing {
            self.engine.pause();
        } else {
            self.engine.play()?;
        }

        self.state.is_playing = !self.state.is_playing;
        debug!("Playback toggled, playing: {}", self.state.is_playing);

        self.view
            .set_play_icon(PlayIcon::for_playing(self.state.is_playing));
        self.emit(PlayerEvent::StateChanged {
            playing: self.state.is_playing,
        });

        Ok(())
    }

    /// Skip to the next track, wrapping to the first
    pub fn next(&mut self) -> Result<()> {
        self.load_track(self.state.current_index as i64 + 1)
    }

    /// Go back to the previous track, wrapping to the last
    pub fn previous(&mut self) -> Result<()> {
        self.load_track(self.state.current_index as i64 - 1)
    }

    /// Playlist row clicked
    ///
    /// Selecting always ends in the playing state, without toggling twice
    /// when playback was already active.
    pub fn select_track(&mut self, index: i64) -> Result<()> {
        self.load_track(index)?;

        if !self.state.is_playing {
            self.toggle_play_pause()?;
        }

        Ok(())
    }

    /// Engine reached the end of the current track
    ///
    /// Advances and resumes as one transition: the engine gets exactly one
    /// `play()` and the icon is updated once.
    pub fn handle_ended(&mut self) -> Result<()> {
        let was_playing = self.state.is_playing;
        debug!("Track {} ended, advancing", self.state.current_index);

        self.switch_track(self.state.current_index as i64 + 1, true)?;

        self.state.is_playing = true;
        self.view.set_play_icon(PlayIcon::Pause);
        if !was_playing {
            self.emit(PlayerEvent::StateChanged { playing: true });
        }

        Ok(())
    }

    /// Forward a volume change to the engine
    ///
    /// The value is clamped to `[0, 1]`; the engine remains its owner.
    pub fn set_volume(&mut self, fraction: f64) {
        let volume = Volume::new(fraction);
        self.engine.set_volume(volume.fraction());
        self.emit(PlayerEvent::VolumeChanged {
            fraction: volume.fraction(),
        });
    }

    /// Engine could not load or decode the current track
    ///
    /// While playing, [`LoadErrorPolicy::SkipToNext`] moves on to the next
    /// track; after a full cycle of consecutive failures playback stops.
    /// While paused the track stays current so the user sees what failed.
    pub fn handle_load_error(&mut self, message: &str) -> Result<()> {
        let index = self.state.current_index;
        warn!("Failed to load track {}: {}", index, message);

        self.load_failures += 1;
        self.emit(PlayerEvent::LoadFailed {
            index,
            message: message.to_string(),
        });

        if !self.state.is_playing {
            return Ok(());
        }

        match self.config.on_load_error {
            LoadErrorPolicy::Stop => {
                self.stop_playback();
                Ok(())
            }
            LoadErrorPolicy::SkipToNext if self.load_failures >= self.playlist.len() => {
                warn!(
                    "All {} tracks failed to load, stopping playback",
                    self.playlist.len()
                );
                self.stop_playback();
                self.emit(PlayerEvent::PlaybackStalled);
                Ok(())
            }
            LoadErrorPolicy::SkipToNext => self.next(),
        }
    }

    fn stop_playback(&mut self) {
        if !self.state.is_playing {
            return;
        }

        self.engine.pause();
        self.mark_paused();
    }

    /// Record that the engine is not playing and show the play icon
    fn mark_paused(&mut self) {
        let was_playing = self.state.is_playing;
        self.state.is_playing = false;
        self.view.set_play_icon(PlayIcon::Play);
        if was_playing {
            self.emit(PlayerEvent::StateChanged { playing: false });
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::SilentEngine;
    use crate::events::PlayerEvent;
    use crate::player::Player;
    use crate::view::NullView;

    #[test]
    fn initialize_loads_without_playing() {
        let mut player = Player::with_builtin(SilentEngine::default(), NullView);
        player.initialize().unwrap();

        assert_eq!(player.current_index(), 0);
        assert!(!player.engine().playing);
        assert_eq!(player.engine().volume, 1.0);

        let events = player.drain_events();
        assert!(events.contains(&PlayerEvent::TrackChanged {
            index: 0,
            previous_index: None,
        }));
    }

    #[test]
    fn track_changed_reports_previous_index() {
        let mut player = Player::with_builtin(SilentEngine::default(), NullView);
        player.initialize().unwrap();
        player.drain_events();

        player.load_track(2).unwrap();
        assert_eq!(
            player.drain_events(),
            vec![PlayerEvent::TrackChanged {
                index: 2,
                previous_index: Some(0),
            }]
        );
    }

    #[test]
    fn stop_playback_is_idempotent_when_paused() {
        let mut player = Player::with_builtin(SilentEngine::default(), NullView);
        player.initialize().unwrap();
        player.drain_events();

        player.stop_playback();
        assert!(player.drain_events().is_empty());
    }
}
