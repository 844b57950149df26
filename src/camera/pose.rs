use glam::{Quat, Vec3};

use crate::gaze::GazeRotation;

/// An axis-angle look offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Rotation angle in radians.
    pub angle: f32,
    /// Unit rotation axis, or zero for "no rotation".
    pub axis: Vec3,
}

impl CameraPose {
    /// No offset, about an arbitrary valid axis.
    pub const IDENTITY: Self = Self {
        angle: 0.0,
        axis: Vec3::Y,
    };

    /// Pose with `axis` normalized (zero stays zero).
    #[must_use]
    pub fn new(angle: f32, axis: Vec3) -> Self {
        Self {
            angle,
            axis: axis.normalize_or_zero(),
        }
    }

    /// The rotation this pose applies, or `None` when it is a no-op
    /// (zero angle or zero axis).
    #[must_use]
    pub fn rotation(&self) -> Option<Quat> {
        (self.angle != 0.0 && self.axis != Vec3::ZERO)
            .then(|| Quat::from_axis_angle(self.axis, self.angle))
    }

    /// The rotation that cancels this pose: same axis, negated angle.
    #[must_use]
    pub fn inverse_rotation(&self) -> Option<Quat> {
        Self {
            angle: -self.angle,
            axis: self.axis,
        }
        .rotation()
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// What the renderer must do to move from the previous pose to the new one.
/// `undo` is applied first, then `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoseDelta {
    /// Cancels the previously applied pose.
    pub undo: Option<Quat>,
    /// Applies the new pose.
    pub apply: Option<Quat>,
}

impl PoseDelta {
    /// Whether applying this delta changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undo.is_none() && self.apply.is_none()
    }

    /// Both steps folded into one rotation (for left-multiplication).
    #[must_use]
    pub fn combined(&self) -> Quat {
        let undo = self.undo.unwrap_or(Quat::IDENTITY);
        self.apply.unwrap_or(Quat::IDENTITY) * undo
    }
}

/// Keeps exactly one gaze pose applied to the scene at a time.
#[derive(Debug, Clone, Default)]
pub struct CameraPoseController {
    current: CameraPose,
}

impl CameraPoseController {
    /// Start with the identity pose.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last applied pose.
    #[must_use]
    pub fn current(&self) -> CameraPose {
        self.current
    }

    /// Replace the applied pose: undo the previous one, apply the new one.
    ///
    /// Non-finite input is rejected and leaves the scene untouched.
    pub fn set_pose(&mut self, angle: f32, direction: Vec3) -> PoseDelta {
        if !angle.is_finite() || !direction.is_finite() {
            log::warn!("ignoring non-finite camera pose {angle} {direction}");
            return PoseDelta::default();
        }
        let next = CameraPose::new(angle, direction);
        let delta = PoseDelta {
            undo: self.current.inverse_rotation(),
            apply: next.rotation(),
        };
        self.current = next;
        delta
    }

    /// [`set_pose`](Self::set_pose) from a gaze rotation.
    pub fn apply_gaze(&mut self, gaze: &GazeRotation) -> PoseDelta {
        self.set_pose(gaze.angle, gaze.direction)
    }
}
