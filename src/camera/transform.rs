use glam::{Quat, Vec3};

use super::pose::PoseDelta;

/// Accumulated scene orientation, updated the way the renderer applies
/// transforms: each new rotation left-multiplies the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransform {
    orientation: Quat,
}

impl SceneTransform {
    /// Spin axis (world up).
    pub const SPIN_AXIS: Vec3 = Vec3::Y;

    /// Unrotated scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orientation: Quat::IDENTITY,
        }
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Apply a spin increment in radians about [`Self::SPIN_AXIS`].
    pub fn apply_spin(&mut self, radians: f32) {
        if radians != 0.0 {
            self.rotate(Quat::from_axis_angle(Self::SPIN_AXIS, radians));
        }
    }

    /// Apply a camera pose change: undo first, then the new pose.
    pub fn apply_pose(&mut self, delta: &PoseDelta) {
        if let Some(undo) = delta.undo {
            self.rotate(undo);
        }
        if let Some(apply) = delta.apply {
            self.rotate(apply);
        }
    }

    fn rotate(&mut self, rotation: Quat) {
        self.orientation = (rotation * self.orientation).normalize();
    }
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::camera::pose::CameraPoseController;

    fn approx_eq(a: Quat, b: Quat) -> bool {
        a.dot(b).abs() > 1.0 - 1e-6
    }

    #[test]
    fn spins_about_world_up() {
        let mut scene = SceneTransform::new();
        scene.apply_spin(FRAC_PI_2);
        let x = scene.orientation() * Vec3::X;
        assert!((x - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn same_pose_twice_leaves_scene_unchanged() {
        let mut scene = SceneTransform::new();
        let mut poses = CameraPoseController::new();
        scene.apply_spin(0.7);
        scene.apply_pose(&poses.set_pose(-0.25, Vec3::new(0.3, 0.9, 0.0)));
        let once = scene.orientation();
        scene.apply_pose(&poses.set_pose(-0.25, Vec3::new(0.3, 0.9, 0.0)));
        assert!(approx_eq(scene.orientation(), once));
    }

    #[test]
    fn pose_round_trip_restores_spin_only_orientation() {
        let mut scene = SceneTransform::new();
        let mut poses = CameraPoseController::new();
        scene.apply_spin(0.4);
        scene.apply_pose(&poses.set_pose(-0.2, Vec3::X));
        scene.apply_pose(&poses.set_pose(0.0, Vec3::ZERO));
        assert!(approx_eq(scene.orientation(), Quat::from_rotation_y(0.4)));
    }

    #[test]
    fn combined_matches_stepwise_application() {
        let mut poses = CameraPoseController::new();
        let _ = poses.set_pose(-0.2, Vec3::X);
        let delta = poses.set_pose(-0.3, Vec3::Y);

        let mut stepwise = SceneTransform::new();
        stepwise.apply_spin(1.1);
        let start = stepwise.orientation();
        stepwise.apply_pose(&delta);

        assert!(approx_eq(stepwise.orientation(), delta.combined() * start));
    }
}
