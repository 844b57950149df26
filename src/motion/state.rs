/// Spin direction about the world up axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationDirection {
    /// Counter-clockwise seen from above (rightward swipe).
    #[default]
    Positive,
    /// Clockwise seen from above (leftward swipe).
    Negative,
}

impl RotationDirection {
    /// `+1.0` or `-1.0`.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    /// Direction of a signed speed; zero counts as positive.
    #[must_use]
    pub fn of(signed_speed: f32) -> Self {
        if signed_speed >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Current spin dynamics. Speeds are in revolutions per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Current speed, never negative.
    pub current_speed: f32,
    /// Speed the decay is heading for.
    pub target_speed: f32,
    /// Active linear decay rate.
    pub deceleration: f32,
    /// Which way the view spins.
    pub rotation_direction: RotationDirection,
}

impl MotionState {
    /// A state spinning at `speed` with no decay scheduled.
    #[must_use]
    pub fn at_speed(speed: f32) -> Self {
        Self {
            current_speed: speed,
            target_speed: speed,
            deceleration: 0.0,
            rotation_direction: RotationDirection::Positive,
        }
    }

    /// Speed with the direction applied.
    #[must_use]
    pub fn signed_speed(&self) -> f32 {
        self.rotation_direction.sign() * self.current_speed
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::at_speed(0.0)
    }
}
