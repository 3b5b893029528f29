//! Error types for the playlist widget

use thiserror::Error;

/// Widget errors
///
/// "Duration unknown" and out-of-range indices are not errors: the former is
/// a silent no-op and the latter is normalized by wraparound.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A playlist must hold at least one track
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// The media engine rejected a command
    #[error("Media engine error: {0}")]
    Engine(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed input from the host
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;
