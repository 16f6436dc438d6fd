use thiserror::Error;

/// Why the host's media subsystem refused to start a video.
///
/// None of these are fatal: widgets log them and fall back to a paused state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("playback rejected by host policy: {0}")]
    Rejected(String),
    #[error("media could not be decoded: {0}")]
    Decode(String),
    #[error("current slide is not a video")]
    NotAVideo,
}
