use glam::Vec2;

/// Wrist landmark index in a 21-point hand skeleton.
pub const WRIST: usize = 0;
/// Thumb tip landmark index.
pub const THUMB_TIP: usize = 4;
/// Index finger tip landmark index.
pub const INDEX_TIP: usize = 8;
/// Middle finger tip landmark index.
pub const MIDDLE_TIP: usize = 12;
/// Ring finger tip landmark index.
pub const RING_TIP: usize = 16;
/// Pinky tip landmark index.
pub const PINKY_TIP: usize = 20;
/// Number of landmarks in a full hand skeleton.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Fingertip landmark indices, thumb first.
pub const FINGERTIPS: [usize; 5] =
    [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// The landmarks of one hand the classifier needs, normalized to `[0, 1]`
/// with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSample {
    /// Wrist position. Doubles as the palm centre.
    pub wrist: Vec2,
    /// Fingertips, thumb first.
    pub fingertips: [Vec2; 5],
}

impl HandSample {
    /// Extract the needed landmarks from a full hand skeleton. `None` if
    /// the skeleton is incomplete.
    #[must_use]
    pub fn from_landmarks(points: &[Vec2]) -> Option<Self> {
        if points.len() < HAND_LANDMARK_COUNT {
            return None;
        }
        Some(Self {
            wrist: points[WRIST],
            fingertips: FINGERTIPS.map(|i| points[i]),
        })
    }

    /// Whether every landmark is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.wrist.is_finite() && self.fingertips.iter().all(|p| p.is_finite())
    }

    /// Palm-centre proxy.
    #[must_use]
    pub fn palm(&self) -> Vec2 {
        self.wrist
    }

    /// Absolute mean vertical offset of the fingertips from the palm.
    ///
    /// Large when the hand is held upright and open.
    #[must_use]
    pub fn openness(&self) -> f32 {
        let palm_y = self.palm().y;
        let sum: f32 = self.fingertips.iter().map(|tip| tip.y - palm_y).sum();
        (sum / self.fingertips.len() as f32).abs()
    }

    /// The same hand seen in a horizontally flipped frame.
    #[must_use]
    pub fn mirrored(self) -> Self {
        let flip = |p: Vec2| Vec2::new(1.0 - p.x, p.y);
        Self {
            wrist: flip(self.wrist),
            fingertips: self.fingertips.map(flip),
        }
    }
}
