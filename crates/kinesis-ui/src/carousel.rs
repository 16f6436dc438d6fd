//! # Media carousel
//!
//! Exercise cards and consultation views show their images and demo videos in
//! a single-slide carousel. `CarouselController` owns the ordered media, the
//! visible index, and whether the visible video is playing.
//!
//! Ordering is the same for every media source: all videos first, in the order
//! given, then all images, in the order given.
//!
//! Navigation always pauses a playing video before moving, so at most one
//! video plays and only while it is on screen. Videos render muted and looping;
//! toggling playback never changes that.
//!
//! ```rust
//! use kinesis_ui::carousel::*;
//!
//! let source = MediaSource::single(["a.jpg", "b.jpg"], Some("demo.mp4"));
//! let mut carousel = CarouselController::new(source, NullPlayer);
//!
//! assert_eq!(carousel.current().map(|m| m.url()), Some("demo.mp4"));
//! assert!(carousel.toggle_playback());
//!
//! carousel.next();
//! assert!(!carousel.is_playing());
//! assert_eq!(carousel.current_index(), 1);
//! ```

use bitflags::bitflags;
use kinesis_core::PlaybackError;
use serde::{Deserialize, Serialize};

use crate::gestures::SwipeDirection;

bitflags! {
    /// Attributes a video element is rendered with.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PlaybackFlags: u8 {
        const MUTED = 1 << 0;
        const LOOP = 1 << 1;
    }
}

impl Default for PlaybackFlags {
    fn default() -> Self {
        PlaybackFlags::MUTED | PlaybackFlags::LOOP
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Video,
    Image,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaItem {
    kind: MediaKind,
    url: String,
}

impl MediaItem {
    pub fn video(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            url: url.into(),
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            url: url.into(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// The media a call site hands to the carousel. Both shapes occur: exercise
/// cards carry one optional demo video, consultation views carry a list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaSource {
    Single {
        images: Vec<String>,
        video: Option<String>,
    },
    Multi {
        images: Vec<String>,
        videos: Vec<String>,
    },
}

impl Default for MediaSource {
    fn default() -> Self {
        MediaSource::Single {
            images: Vec::new(),
            video: None,
        }
    }
}

impl MediaSource {
    pub fn single<I, S>(images: I, video: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MediaSource::Single {
            images: images.into_iter().map(Into::into).collect(),
            video: video.map(str::to_owned),
        }
    }

    pub fn multi<I, S, V, T>(images: I, videos: V) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        V: IntoIterator<Item = T>,
        T: Into<String>,
    {
        MediaSource::Multi {
            images: images.into_iter().map(Into::into).collect(),
            videos: videos.into_iter().map(Into::into).collect(),
        }
    }

    fn parts(&self) -> (&[String], &[String]) {
        match self {
            MediaSource::Single { images, video } => (images.as_slice(), video.as_slice()),
            MediaSource::Multi { images, videos } => (images.as_slice(), videos.as_slice()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaSequence(Vec<MediaItem>);

impl MediaSequence {
    /// Videos first, then images, each in input order. Blank URLs are skipped.
    pub fn build(source: &MediaSource) -> Self {
        let (images, videos) = source.parts();
        let usable = |u: &&String| !u.trim().is_empty();
        let items = videos
            .iter()
            .filter(usable)
            .map(MediaItem::video)
            .chain(images.iter().filter(usable).map(MediaItem::image))
            .collect();
        MediaSequence(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[MediaItem] {
        &self.0
    }
}

/// The host's media subsystem. `play` may be refused (autoplay policy,
/// decode failure); the carousel treats that as "stays paused".
pub trait MediaPlayer {
    fn play(&mut self, item: &MediaItem) -> Result<(), PlaybackError>;
    fn pause(&mut self, item: &MediaItem);
}

/// Accepts every request. Useful where nothing is actually rendered.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPlayer;

impl MediaPlayer for NullPlayer {
    fn play(&mut self, _item: &MediaItem) -> Result<(), PlaybackError> {
        Ok(())
    }
    fn pause(&mut self, _item: &MediaItem) {}
}

/// Notifications from the rendered video element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    Playing,
    Paused,
    Ended,
    Error(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub video_flags: PlaybackFlags,
}

pub struct CarouselController<P: MediaPlayer = NullPlayer> {
    source: MediaSource,
    sequence: MediaSequence,
    current: usize,
    playing: bool,
    last_error: Option<PlaybackError>,
    config: CarouselConfig,
    player: P,
}

impl<P: MediaPlayer> CarouselController<P> {
    pub fn new(source: MediaSource, player: P) -> Self {
        Self::with_config(source, player, CarouselConfig::default())
    }

    pub fn with_config(source: MediaSource, player: P, config: CarouselConfig) -> Self {
        let sequence = MediaSequence::build(&source);
        Self {
            source,
            sequence,
            current: 0,
            playing: false,
            last_error: None,
            config,
            player,
        }
    }

    /// Swap in new media. An equal source keeps the current state; anything
    /// else pauses and starts over at the first slide.
    pub fn set_source(&mut self, source: MediaSource) {
        if source == self.source {
            return;
        }
        self.pause_current();
        self.sequence = MediaSequence::build(&source);
        self.source = source;
        self.current = 0;
        self.last_error = None;
        log::debug!("carousel: new source with {} items", self.sequence.len());
    }

    pub fn next(&mut self) {
        let len = self.sequence.len();
        if len == 0 {
            return;
        }
        self.show((self.current + 1) % len);
    }

    pub fn prev(&mut self) {
        let len = self.sequence.len();
        if len == 0 {
            return;
        }
        self.show((self.current + len - 1) % len);
    }

    /// Out-of-range indices wrap around.
    pub fn go_to(&mut self, index: usize) {
        let len = self.sequence.len();
        if len == 0 {
            return;
        }
        if index >= len {
            log::debug!("carousel: go_to({index}) wrapped for {len} items");
        }
        self.show(index % len);
    }

    /// Left swipes advance, right swipes go back; vertical swipes are ignored.
    pub fn on_swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.prev(),
            SwipeDirection::Up | SwipeDirection::Down => {}
        }
    }

    /// Start the visible video. A refusal from the player leaves it paused.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        let item = self
            .current_video()
            .cloned()
            .ok_or(PlaybackError::NotAVideo)?;
        if self.playing {
            return Ok(());
        }
        match self.player.play(&item) {
            Ok(()) => {
                self.playing = true;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.playing = false;
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Play or pause the visible video. Returns whether it is playing now.
    pub fn toggle_playback(&mut self) -> bool {
        if self.playing {
            self.pause_current();
            return false;
        }
        match self.play() {
            Ok(()) => {}
            Err(PlaybackError::NotAVideo) => {
                log::trace!("carousel: toggle ignored, current slide is not a video");
            }
            Err(e) => log::warn!("carousel: could not play slide {}: {e}", self.current),
        }
        self.playing
    }

    /// Keep `is_playing` in step with what the video element reports.
    pub fn on_media_event(&mut self, event: MediaEvent) {
        if self.current_video().is_none() {
            return;
        }
        match event {
            MediaEvent::Playing => self.playing = true,
            MediaEvent::Paused => self.playing = false,
            MediaEvent::Ended => {
                if !self.config.video_flags.contains(PlaybackFlags::LOOP) {
                    self.playing = false;
                }
            }
            MediaEvent::Error(reason) => {
                let err = PlaybackError::Decode(reason);
                log::warn!("carousel: slide {}: {err}", self.current);
                self.playing = false;
                self.last_error = Some(err);
            }
        }
    }

    pub fn current(&self) -> Option<&MediaItem> {
        self.sequence.get(self.current)
    }

    /// Always 0 when there is no media.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The latest playback failure on the visible slide, cleared by moving
    /// to another slide or by a successful play.
    pub fn last_error(&self) -> Option<&PlaybackError> {
        self.last_error.as_ref()
    }

    pub fn sequence(&self) -> &MediaSequence {
        &self.sequence
    }

    pub fn source(&self) -> &MediaSource {
        &self.source
    }

    /// Render attributes for the slide at `index`; images get none.
    pub fn flags_for(&self, index: usize) -> PlaybackFlags {
        match self.sequence.get(index) {
            Some(item) if item.is_video() => self.config.video_flags,
            _ => PlaybackFlags::empty(),
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    fn current_video(&self) -> Option<&MediaItem> {
        self.current().filter(|m| m.is_video())
    }

    fn pause_current(&mut self) {
        if !self.playing {
            return;
        }
        if let Some(item) = self.sequence.get(self.current) {
            self.player.pause(item);
        }
        self.playing = false;
    }

    fn show(&mut self, index: usize) {
        self.pause_current();
        self.last_error = None;
        if index != self.current {
            log::debug!("carousel: slide {} -> {index}", self.current);
        }
        self.current = index;
    }
}
