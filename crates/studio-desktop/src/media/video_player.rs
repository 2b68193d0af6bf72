//! Playlist-driven video player
//!
//! The page owns the `<video>` element. It reports element events
//! (`loadstart`, `loadedmetadata`, `timeupdate`, `ended`) as [`VideoInput`]s
//! and applies the [`MediaEffect`]s the player emits.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::input::Key;
use crate::views::ViewAction;
use super::format::{format_duration, format_file_size};
use super::{Playlist, VideoFile};

/// Seconds skipped by the arrow keys
pub const SEEK_STEP: f64 = 10.0;
/// Volume change per arrow key
pub const VOLUME_STEP: f64 = 0.1;

/// Instruction for the page's media element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum MediaEffect {
    Play,
    Pause,
    Seek { time: f64 },
    SetVolume { volume: f64 },
    /// Swap the element's source
    Load { url: String },
    EnterFullscreen,
    ExitFullscreen,
}

/// Page events for the video player
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum VideoInput {
    TogglePlay,
    Next,
    Previous,
    Select { index: usize },
    /// Click on the progress bar at `x` of `width` pixels
    #[serde(rename_all = "camelCase")]
    SeekClick { x: f64, width: f64 },
    SetVolume { volume: f64 },
    ToggleMute,
    ToggleFullscreen,
    TogglePlaylist,
    LoadStart,
    LoadedMetadata { duration: f64 },
    TimeUpdate { time: f64 },
    Ended,
    Close,
}

/// Player state. Starts paused at full volume.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoPlayer {
    playlist: Playlist,
    is_playing: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
    is_muted: bool,
    is_fullscreen: bool,
    show_playlist: bool,
    is_loading: bool,
}

impl VideoPlayer {
    pub fn new(videos: Vec<VideoFile>, start: usize) -> Self {
        Self {
            playlist: Playlist::new(videos, start),
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            is_muted: false,
            is_fullscreen: false,
            show_playlist: false,
            is_loading: false,
        }
    }

    #[inline]
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[inline]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    #[inline]
    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    // =========================================================================
    // Transport
    // =========================================================================

    pub fn toggle_play(&mut self) -> Vec<MediaEffect> {
        if self.playlist.is_empty() {
            return Vec::new();
        }
        self.is_playing = !self.is_playing;
        vec![if self.is_playing {
            MediaEffect::Play
        } else {
            MediaEffect::Pause
        }]
    }

    /// Seek relative to the current time, clamped to `[0, duration]`
    pub fn seek_by(&mut self, seconds: f64) -> Vec<MediaEffect> {
        self.seek_to(self.current_time + seconds)
    }

    pub fn seek_to(&mut self, time: f64) -> Vec<MediaEffect> {
        if self.playlist.is_empty() || !time.is_finite() {
            return Vec::new();
        }
        self.current_time = time.clamp(0.0, self.duration.max(0.0));
        vec![MediaEffect::Seek {
            time: self.current_time,
        }]
    }

    /// Map a progress-bar click to a time
    pub fn seek_click(&mut self, x: f64, width: f64) -> Vec<MediaEffect> {
        if width <= 0.0 {
            return Vec::new();
        }
        let fraction = (x / width).clamp(0.0, 1.0);
        self.seek_to(fraction * self.duration)
    }

    /// Set the volume (clamped to `[0, 1]`); zero mutes
    pub fn set_volume(&mut self, volume: f64) -> Vec<MediaEffect> {
        let volume = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { 0.0 };
        self.volume = volume;
        self.is_muted = volume == 0.0;
        vec![MediaEffect::SetVolume { volume }]
    }

    pub fn toggle_mute(&mut self) -> Vec<MediaEffect> {
        self.is_muted = !self.is_muted;
        let volume = if self.is_muted { 0.0 } else { self.volume };
        vec![MediaEffect::SetVolume { volume }]
    }

    pub fn toggle_fullscreen(&mut self) -> Vec<MediaEffect> {
        self.is_fullscreen = !self.is_fullscreen;
        vec![if self.is_fullscreen {
            MediaEffect::EnterFullscreen
        } else {
            MediaEffect::ExitFullscreen
        }]
    }

    // =========================================================================
    // Playlist
    // =========================================================================

    pub fn next(&mut self) -> Vec<MediaEffect> {
        if !self.playlist.next() {
            return Vec::new();
        }
        self.load_current()
    }

    pub fn previous(&mut self) -> Vec<MediaEffect> {
        if !self.playlist.previous() {
            return Vec::new();
        }
        self.load_current()
    }

    /// Jump to a playlist entry and hide the playlist
    pub fn select(&mut self, index: usize) -> Vec<MediaEffect> {
        if !self.playlist.select(index) {
            return Vec::new();
        }
        self.show_playlist = false;
        self.load_current()
    }

    fn load_current(&mut self) -> Vec<MediaEffect> {
        self.is_playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.playlist
            .current()
            .map(|v| MediaEffect::Load {
                url: v.file_url.clone(),
            })
            .into_iter()
            .collect()
    }

    // =========================================================================
    // Element events
    // =========================================================================

    pub fn on_load_start(&mut self) {
        self.is_loading = true;
    }

    pub fn on_loaded_metadata(&mut self, duration: f64) {
        self.duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        self.is_loading = false;
    }

    pub fn on_time_update(&mut self, time: f64) {
        if time.is_finite() {
            self.current_time = time.max(0.0);
        }
    }

    /// Playback finished: stop, then advance if there is a next entry
    pub fn on_ended(&mut self) -> Vec<MediaEffect> {
        self.is_playing = false;
        self.next()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub fn apply(&mut self, input: VideoInput) -> Vec<ViewAction> {
        let effects = match input {
            VideoInput::TogglePlay => self.toggle_play(),
            VideoInput::Next => self.next(),
            VideoInput::Previous => self.previous(),
            VideoInput::Select { index } => self.select(index),
            VideoInput::SeekClick { x, width } => self.seek_click(x, width),
            VideoInput::SetVolume { volume } => self.set_volume(volume),
            VideoInput::ToggleMute => self.toggle_mute(),
            VideoInput::ToggleFullscreen => self.toggle_fullscreen(),
            VideoInput::TogglePlaylist => {
                self.show_playlist = !self.show_playlist;
                Vec::new()
            }
            VideoInput::LoadStart => {
                self.on_load_start();
                Vec::new()
            }
            VideoInput::LoadedMetadata { duration } => {
                self.on_loaded_metadata(duration);
                Vec::new()
            }
            VideoInput::TimeUpdate { time } => {
                self.on_time_update(time);
                Vec::new()
            }
            VideoInput::Ended => self.on_ended(),
            VideoInput::Close => return vec![ViewAction::CloseWindow],
        };
        effects.into_iter().map(ViewAction::Media).collect()
    }

    /// Keyboard shortcuts. `None` when the key means nothing here.
    pub fn handle_key(&mut self, key: Key) -> Option<Vec<ViewAction>> {
        let effects = match key {
            Key::Space => self.toggle_play(),
            Key::ArrowLeft => self.seek_by(-SEEK_STEP),
            Key::ArrowRight => self.seek_by(SEEK_STEP),
            Key::ArrowUp => self.set_volume(self.volume + VOLUME_STEP),
            Key::ArrowDown => self.set_volume(self.volume - VOLUME_STEP),
            Key::F => self.toggle_fullscreen(),
            Key::Escape if self.is_fullscreen => self.toggle_fullscreen(),
            Key::Escape => return Some(vec![ViewAction::CloseWindow]),
            _ => return None,
        };
        Some(effects.into_iter().map(ViewAction::Media).collect())
    }

    pub fn render(&self) -> Value {
        let current = self.playlist.current();
        json!({
            "current": current,
            "currentIndex": self.playlist.current_index(),
            "position": if self.playlist.is_empty() {
                String::new()
            } else {
                format!("({} of {})", self.playlist.current_index() + 1, self.playlist.len())
            },
            "playlist": self.playlist.items().iter().map(|v| json!({
                "video": v,
                "duration": format_duration(v.duration),
                "size": format_file_size(v.file_size),
            })).collect::<Vec<_>>(),
            "isPlaying": self.is_playing,
            "currentTime": self.current_time,
            "duration": self.duration,
            "timeLabel": format!("{} / {}", format_duration(self.current_time), format_duration(self.duration)),
            "progress": if self.duration > 0.0 { self.current_time / self.duration } else { 0.0 },
            "volume": self.volume,
            "isMuted": self.is_muted,
            "isFullscreen": self.is_fullscreen,
            "showPlaylist": self.show_playlist,
            "isLoading": self.is_loading,
            "hasPrevious": self.playlist.has_previous(),
            "hasNext": self.playlist.has_next(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::mock_videos;

    fn player() -> VideoPlayer {
        let mut player = VideoPlayer::new(mock_videos(), 0);
        player.on_loaded_metadata(120.0);
        player
    }

    #[test]
    fn test_initial_state() {
        let player = VideoPlayer::new(mock_videos(), 1);
        assert!(!player.is_playing());
        assert!((player.volume() - 1.0).abs() < 0.001);
        assert_eq!(player.playlist().current_index(), 1);
    }

    #[test]
    fn test_toggle_play() {
        let mut player = player();
        assert_eq!(player.toggle_play(), vec![MediaEffect::Play]);
        assert!(player.is_playing());
        assert_eq!(player.toggle_play(), vec![MediaEffect::Pause]);
    }

    #[test]
    fn test_seek_clamps() {
        let mut player = player();
        player.on_time_update(5.0);
        assert_eq!(player.seek_by(-SEEK_STEP), vec![MediaEffect::Seek { time: 0.0 }]);
        player.on_time_update(115.0);
        assert_eq!(player.seek_by(SEEK_STEP), vec![MediaEffect::Seek { time: 120.0 }]);
    }

    #[test]
    fn test_seek_click_is_linear() {
        let mut player = player();
        assert_eq!(player.seek_click(50.0, 200.0), vec![MediaEffect::Seek { time: 30.0 }]);
        assert_eq!(player.seek_click(400.0, 200.0), vec![MediaEffect::Seek { time: 120.0 }]);
        assert!(player.seek_click(10.0, 0.0).is_empty());
    }

    #[test]
    fn test_volume_and_mute() {
        let mut player = player();
        player.handle_key(Key::ArrowUp);
        assert!((player.volume() - 1.0).abs() < 0.001);

        for _ in 0..12 {
            player.handle_key(Key::ArrowDown);
        }
        assert!(player.volume().abs() < 0.001);
        assert!(player.is_muted());

        player.set_volume(0.6);
        assert!(!player.is_muted());
        assert_eq!(player.toggle_mute(), vec![MediaEffect::SetVolume { volume: 0.0 }]);
        assert!(player.is_muted());
        assert_eq!(player.toggle_mute(), vec![MediaEffect::SetVolume { volume: 0.6 }]);
    }

    #[test]
    fn test_playlist_navigation_pauses() {
        let mut player = player();
        assert!(player.previous().is_empty());

        player.toggle_play();
        let effects = player.next();
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], MediaEffect::Load { url } if url.ends_with("ElephantsDream.mp4")));
        assert!(!player.is_playing());
        assert!(player.current_time().abs() < 0.001);

        player.select(3);
        assert!(player.next().is_empty());
        assert_eq!(player.playlist().current_index(), 3);
        assert!(player.select(9).is_empty());
    }

    #[test]
    fn test_ended_advances() {
        let mut player = player();
        player.toggle_play();
        let effects = player.on_ended();
        assert_eq!(effects.len(), 1);
        assert_eq!(player.playlist().current_index(), 1);
        assert!(!player.is_playing());

        player.select(3);
        player.toggle_play();
        assert!(player.on_ended().is_empty());
        assert!(!player.is_playing());
        assert_eq!(player.playlist().current_index(), 3);
    }

    #[test]
    fn test_loading_flags() {
        let mut player = VideoPlayer::new(mock_videos(), 0);
        player.apply(VideoInput::LoadStart);
        assert!(player.is_loading());
        player.apply(VideoInput::LoadedMetadata { duration: 90.0 });
        assert!(!player.is_loading());
        assert_eq!(player.render()["timeLabel"], "0:00 / 1:30");
    }

    #[test]
    fn test_escape_leaves_fullscreen_first() {
        let mut player = player();
        player.handle_key(Key::F);
        assert!(player.is_fullscreen());
        assert_eq!(
            player.handle_key(Key::Escape),
            Some(vec![ViewAction::Media(MediaEffect::ExitFullscreen)])
        );
        assert_eq!(player.handle_key(Key::Escape), Some(vec![ViewAction::CloseWindow]));
        assert_eq!(player.handle_key(Key::R), None);
    }

    #[test]
    fn test_empty_playlist_is_inert() {
        let mut player = VideoPlayer::new(Vec::new(), 0);
        assert!(player.toggle_play().is_empty());
        assert!(player.next().is_empty());
        assert!(player.seek_by(10.0).is_empty());
        assert!(!player.is_playing());
    }
}
