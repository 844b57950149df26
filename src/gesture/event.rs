/// A discrete gesture recognised from a hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Horizontal swipe. Positive magnitude is rightward.
    Swipe {
        /// Signed swipe strength.
        magnitude: f32,
    },
    /// Open palm held up: brake the spin.
    Stop,
}

impl GestureEvent {
    /// Short label for logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Swipe { magnitude } if *magnitude >= 0.0 => "swipe-right",
            Self::Swipe { .. } => "swipe-left",
            Self::Stop => "stop",
        }
    }
}
