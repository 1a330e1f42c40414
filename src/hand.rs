//! A detected hand: landmarks plus the estimator's handedness call.

use std::str::FromStr;

use crate::finger::FingerStates;
use crate::landmark::HandLandmarks;
use crate::rect::Rect;
use crate::Error;

/// Which side of the body a detected hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

/// Parses the label strings emitted by pose estimators (`"Left"` / `"Right"`).
///
/// Any other string fails with [`Error::Handedness`] so that an estimator emitting unexpected
/// labels is caught at the boundary rather than silently treated as one of the two hands.
impl FromStr for Handedness {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Error> {
        match label {
            "Left" => Ok(Handedness::Left),
            "Right" => Ok(Handedness::Right),
            _ => Err(Error::Handedness(label.to_string())),
        }
    }
}

/// One hand detected in a frame.
///
/// Bundles the landmark positions with the handedness label and the estimator's confidence in
/// that label. The label decides the thumb test direction, so when the score is low the thumb
/// contribution of [`Hand::finger_states`] is correspondingly unreliable.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    landmarks: HandLandmarks,
    handedness: Handedness,
    handedness_score: f32,
}

impl Hand {
    pub fn new(landmarks: HandLandmarks, handedness: Handedness, handedness_score: f32) -> Self {
        Self {
            landmarks,
            handedness,
            handedness_score,
        }
    }

    pub fn landmarks(&self) -> &HandLandmarks {
        &self.landmarks
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// The estimator's confidence in the handedness label, by convention in range 0.0 to 1.0.
    pub fn handedness_score(&self) -> f32 {
        self.handedness_score
    }

    /// Classifies which of this hand's fingers are raised.
    pub fn finger_states(&self) -> FingerStates {
        FingerStates::classify(&self.landmarks, self.handedness)
    }

    /// Counts this hand's raised fingers, 0 to 5.
    pub fn raised_fingers(&self) -> u8 {
        self.finger_states().count()
    }

    /// Computes the axis-aligned bounding rectangle of all landmarks, in normalized image
    /// coordinates.
    ///
    /// Frame annotations are typically anchored to this rectangle (a box around the hand, a
    /// label above its top-left corner).
    pub fn bounding_rect(&self) -> Rect {
        Rect::bounding(self.landmarks.iter()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::landmark::{Landmark, NUM_LANDMARKS};

    use super::*;

    #[test]
    fn parses_estimator_labels() {
        assert_eq!("Left".parse(), Ok(Handedness::Left));
        assert_eq!("Right".parse(), Ok(Handedness::Right));

        for bad in ["", "left", "RIGHT", "Both"] {
            match bad.parse::<Handedness>() {
                Err(Error::Handedness(label)) => assert_eq!(label, bad),
                other => panic!("label `{bad}` parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn bounding_rect_spans_all_landmarks() {
        let mut positions = [Landmark::new(0.5, 0.5); NUM_LANDMARKS];
        positions[0] = Landmark::new(0.2, 0.9);
        positions[12] = Landmark::new(0.7, 0.1);
        let hand = Hand::new(HandLandmarks::new(positions), Handedness::Right, 0.9);

        let rect = hand.bounding_rect();
        assert_relative_eq!(rect.x(), 0.2, epsilon = 1e-6);
        assert_relative_eq!(rect.y(), 0.1, epsilon = 1e-6);
        assert_relative_eq!(rect.width(), 0.5, epsilon = 1e-6);
        assert_relative_eq!(rect.height(), 0.8, epsilon = 1e-6);
    }
}
