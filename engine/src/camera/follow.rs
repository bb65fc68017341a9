//! Third-person follow camera
//!
//! Trails the avatar from a fixed offset. The position eases toward its
//! target with a fixed-fraction lerp each frame, while the gaze snaps to the
//! avatar's torso every frame, so walking starts feel weighty but the avatar
//! never leaves the center of the view.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_engine::camera::FollowCamera;
//! use glam::Vec3;
//!
//! let mut camera = FollowCamera::new();
//! camera.update(Vec3::new(0.0, 0.0, -2.0));
//! let (yaw, pitch) = (camera.yaw(), camera.pitch());
//! ```

use glam::Vec3;

/// Fixed displacement from the avatar to the camera's target position.
/// No sideways lean, a fixed height, and a backward (+Z) pull.
pub const FOLLOW_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// Height above the avatar's ground position the camera looks at.
pub const LOOK_HEIGHT: f32 = 1.5;

/// Fraction of the remaining distance the camera closes each frame.
pub const POSITION_SMOOTHING: f32 = 0.1;

/// Camera pose and smoothing state for the third-person follow rig.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    /// Current camera position in world space
    position: Vec3,
    /// Yaw angle in radians (rotation around Y)
    yaw: f32,
    /// Pitch angle in radians (positive looks up)
    pitch: f32,
    /// Offset from the avatar to the target position
    offset: Vec3,
    /// Height of the look target above the avatar's feet
    look_height: f32,
    /// Position easing fraction per frame
    smoothing: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowCamera {
    /// Creates a follow camera at the default offset from the origin.
    pub fn new() -> Self {
        Self {
            position: FOLLOW_OFFSET,
            yaw: 0.0,
            pitch: 0.0,
            offset: FOLLOW_OFFSET,
            look_height: LOOK_HEIGHT,
            smoothing: POSITION_SMOOTHING,
        }
    }

    /// Creates a follow camera with a custom offset.
    pub fn with_offset(offset: Vec3) -> Self {
        Self {
            position: offset,
            offset,
            ..Self::new()
        }
    }

    /// Current camera position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current yaw angle in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch angle in radians.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Moves the camera instantly, skipping the ease-in (scene start).
    pub fn snap_to(&mut self, avatar_position: Vec3) {
        self.position = avatar_position + self.offset;
        self.look_at(avatar_position + Vec3::new(0.0, self.look_height, 0.0));
    }

    /// Advances the follow rig one frame.
    ///
    /// Runs before the avatar's movement resolution, so the camera reads the
    /// previous frame's resting position.
    pub fn update(&mut self, avatar_position: Vec3) {
        let target = avatar_position + self.offset;
        self.position = self.position.lerp(target, self.smoothing);
        self.look_at(avatar_position + Vec3::new(0.0, self.look_height, 0.0));
    }

    /// Aims the camera at a world-space point.
    pub fn look_at(&mut self, target: Vec3) {
        let to_target = target - self.position;
        let distance = to_target.length();
        if distance < 1e-6 {
            return;
        }
        self.yaw = to_target.x.atan2(-to_target.z);
        self.pitch = (to_target.y / distance).asin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_eases_toward_offset_target() {
        let mut camera = FollowCamera::new();
        let avatar = Vec3::new(0.0, 0.0, -10.0);

        let start = camera.position();
        camera.update(avatar);
        let target = avatar + FOLLOW_OFFSET;
        let expected = start.lerp(target, POSITION_SMOOTHING);
        assert!((camera.position() - expected).length() < 1e-5);
    }

    #[test]
    fn test_position_converges_over_frames() {
        let mut camera = FollowCamera::new();
        let avatar = Vec3::new(3.0, 0.0, -6.0);
        for _ in 0..300 {
            camera.update(avatar);
        }
        let target = avatar + FOLLOW_OFFSET;
        assert!(
            (camera.position() - target).length() < 0.01,
            "Camera should converge to the offset target"
        );
    }

    #[test]
    fn test_gaze_tracks_instantly() {
        let mut camera = FollowCamera::new();
        camera.snap_to(Vec3::ZERO);
        let yaw_centered = camera.yaw();

        // One frame after a sideways teleport the position still lags, but
        // the gaze already points at the new torso position
        camera.update(Vec3::new(5.0, 0.0, 0.0));
        assert!(camera.yaw() > yaw_centered);

        let look = Vec3::new(5.0, LOOK_HEIGHT, 0.0);
        let to_target = look - camera.position();
        let expected_yaw = to_target.x.atan2(-to_target.z);
        assert!((camera.yaw() - expected_yaw).abs() < 1e-5);
    }

    #[test]
    fn test_snap_to_skips_easing() {
        let mut camera = FollowCamera::new();
        let avatar = Vec3::new(-4.0, 0.0, 2.0);
        camera.snap_to(avatar);
        assert_eq!(camera.position(), avatar + FOLLOW_OFFSET);
    }

    #[test]
    fn test_camera_looks_down_at_avatar() {
        let mut camera = FollowCamera::new();
        camera.snap_to(Vec3::ZERO);
        // Camera sits above the look target, so pitch is negative
        assert!(camera.pitch() < 0.0);
    }
}
