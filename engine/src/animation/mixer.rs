//! Animation clip mixer
//!
//! Named-clip playback with cross-fading. The avatar controller asks for a
//! clip by name on moving/idle edges; the mixer resolves the name, guards
//! against redundant switches, and blends weights over a fade duration as
//! `advance(dt)` is called each frame.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_engine::animation::mixer::{AnimationMixer, Clip};
//!
//! let mut mixer = AnimationMixer::new(vec![Clip::new("Idle"), Clip::new("Walking")]);
//! mixer.switch_to("Walking", 1.5, 0.2).unwrap();
//! mixer.advance(0.1);
//! ```

use std::fmt;

/// Errors from clip playback operations.
///
/// These are non-fatal to the frame loop; callers catch and log them.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// No clip registered under the requested name
    ClipNotFound(String),
    /// Fade duration was zero or negative
    InvalidFadeDuration(f32),
    /// Playback rate was zero or negative
    InvalidPlaybackRate(f32),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::ClipNotFound(name) => {
                write!(f, "animation clip '{}' not found", name)
            }
            AnimationError::InvalidFadeDuration(d) => {
                write!(f, "fade duration must be positive, got {}", d)
            }
            AnimationError::InvalidPlaybackRate(r) => {
                write!(f, "playback rate must be positive, got {}", r)
            }
        }
    }
}

impl std::error::Error for AnimationError {}

/// Fade state of a single clip.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Fade {
    /// Weight is holding at its current value
    None,
    /// Weight is ramping toward 1.0 at the given rate per second
    In(f32),
    /// Weight is ramping toward 0.0 at the given rate per second
    Out(f32),
}

/// A single named animation clip.
#[derive(Debug, Clone)]
pub struct Clip {
    /// Clip name as authored in the model file
    pub name: String,
    /// Whether the clip is currently contributing to the pose
    pub playing: bool,
    /// Blend weight in [0, 1]
    pub weight: f32,
    /// Playback speed multiplier
    pub playback_rate: f32,
    /// Local playback time in seconds
    pub time: f32,
    fade: Fade,
}

impl Clip {
    /// Creates a stopped clip with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            playing: false,
            weight: 0.0,
            playback_rate: 1.0,
            time: 0.0,
            fade: Fade::None,
        }
    }

    /// Rewinds the clip to its start.
    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Starts the clip contributing to the pose.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stops the clip and silences it.
    pub fn stop(&mut self) {
        self.playing = false;
        self.weight = 0.0;
        self.fade = Fade::None;
    }

    fn begin_fade_in(&mut self, duration: f32) -> Result<(), AnimationError> {
        if duration <= 0.0 {
            return Err(AnimationError::InvalidFadeDuration(duration));
        }
        self.fade = Fade::In(1.0 / duration);
        Ok(())
    }

    fn begin_fade_out(&mut self, duration: f32) -> Result<(), AnimationError> {
        if duration <= 0.0 {
            return Err(AnimationError::InvalidFadeDuration(duration));
        }
        self.fade = Fade::Out(1.0 / duration);
        Ok(())
    }

    fn advance(&mut self, dt: f32) {
        if self.playing {
            self.time += dt * self.playback_rate;
        }
        match self.fade {
            Fade::None => {}
            Fade::In(rate) => {
                self.weight += rate * dt;
                if self.weight >= 1.0 {
                    self.weight = 1.0;
                    self.fade = Fade::None;
                }
            }
            Fade::Out(rate) => {
                self.weight -= rate * dt;
                if self.weight <= 0.0 {
                    self.weight = 0.0;
                    self.playing = false;
                    self.fade = Fade::None;
                }
            }
        }
    }
}

/// Owns the clip list and the active-clip index.
///
/// `switch_to` is the high-level entry the avatar controller uses; the
/// individual clip operations are exposed for hosts that drive clips
/// directly.
#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    clips: Vec<Clip>,
    active: Option<usize>,
}

impl AnimationMixer {
    /// Creates a mixer over the given clips, none active.
    pub fn new(clips: Vec<Clip>) -> Self {
        Self {
            clips,
            active: None,
        }
    }

    /// Looks up a clip index by name.
    pub fn clip_index(&self, name: &str) -> Option<usize> {
        self.clips.iter().position(|c| c.name == name)
    }

    /// Gets a clip by name.
    pub fn clip(&self, name: &str) -> Option<&Clip> {
        self.clips.iter().find(|c| c.name == name)
    }

    /// Name of the currently active clip, if any.
    pub fn active_clip(&self) -> Option<&str> {
        self.active.map(|i| self.clips[i].name.as_str())
    }

    /// Switches playback to the named clip.
    ///
    /// Already-active requests are a no-op, so holding a movement key across
    /// many frames issues at most one transition. The new clip is rewound,
    /// started, and faded in over `fade_duration` while the previous active
    /// clip fades out over the same duration.
    ///
    /// # Errors
    ///
    /// [`AnimationError::ClipNotFound`] if the name is unknown,
    /// [`AnimationError::InvalidFadeDuration`] /
    /// [`AnimationError::InvalidPlaybackRate`] on degenerate parameters.
    /// The mixer state is unchanged on error.
    pub fn switch_to(
        &mut self,
        name: &str,
        playback_rate: f32,
        fade_duration: f32,
    ) -> Result<(), AnimationError> {
        let next = self
            .clip_index(name)
            .ok_or_else(|| AnimationError::ClipNotFound(name.to_string()))?;

        if self.active == Some(next) {
            return Ok(());
        }
        if playback_rate <= 0.0 {
            return Err(AnimationError::InvalidPlaybackRate(playback_rate));
        }
        if fade_duration <= 0.0 {
            return Err(AnimationError::InvalidFadeDuration(fade_duration));
        }

        if let Some(prev) = self.active {
            // Durations already validated; fades cannot fail here
            let _ = self.clips[prev].begin_fade_out(fade_duration);
        }

        let clip = &mut self.clips[next];
        clip.reset();
        clip.play();
        clip.playback_rate = playback_rate;
        let _ = clip.begin_fade_in(fade_duration);
        self.active = Some(next);
        Ok(())
    }

    /// Advances clip times and fade weights by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for clip in &mut self.clips {
            clip.advance(dt);
        }
    }
}
