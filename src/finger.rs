//! Raised-finger classification.
//!
//! The classification here is a small geometric heuristic over a single frame's landmarks. It
//! carries no state between invocations, so it can be called for any number of hands, in any
//! order, from any thread.

use std::fmt;

use itertools::Itertools;

use crate::hand::Handedness;
use crate::landmark::{HandLandmarks, LandmarkIdx};

/// The five fingers of a hand, in landmark layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// Every finger, in landmark layout order.
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Returns the landmark at the finger's tip.
    pub fn tip(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbTip,
            Finger::Index => LandmarkIdx::IndexFingerTip,
            Finger::Middle => LandmarkIdx::MiddleFingerTip,
            Finger::Ring => LandmarkIdx::RingFingerTip,
            Finger::Pinky => LandmarkIdx::PinkyTip,
        }
    }

    /// Returns the joint that the raised-test compares the tip against.
    ///
    /// This is the PIP joint for the four fingers and the IP joint for the thumb, whose tip sits
    /// directly above its IP.
    pub fn reference_joint(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbIp,
            Finger::Index => LandmarkIdx::IndexFingerPip,
            Finger::Middle => LandmarkIdx::MiddleFingerPip,
            Finger::Ring => LandmarkIdx::RingFingerPip,
            Finger::Pinky => LandmarkIdx::PinkyPip,
        }
    }

    /// Returns the finger's landmarks, ordered from the joint nearest the palm to the tip.
    ///
    /// Useful for drawing each finger as a chain of phalanx lines. The wrist (landmark 0) is not
    /// part of any finger.
    pub fn landmarks(self) -> [LandmarkIdx; 4] {
        use LandmarkIdx::*;
        match self {
            Finger::Thumb => [ThumbCmc, ThumbMcp, ThumbIp, ThumbTip],
            Finger::Index => [IndexFingerMcp, IndexFingerPip, IndexFingerDip, IndexFingerTip],
            Finger::Middle => [
                MiddleFingerMcp,
                MiddleFingerPip,
                MiddleFingerDip,
                MiddleFingerTip,
            ],
            Finger::Ring => [RingFingerMcp, RingFingerPip, RingFingerDip, RingFingerTip],
            Finger::Pinky => [PinkyMcp, PinkyPip, PinkyDip, PinkyTip],
        }
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        };
        f.write_str(name)
    }
}

/// Per-finger raised states derived from one hand pose.
///
/// Produced by [`FingerStates::classify`]; recomputed for every frame rather than cached, since
/// classification is 5 coordinate comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerStates {
    raised: [bool; 5],
}

impl FingerStates {
    /// Classifies which fingers of a hand pose are raised.
    ///
    /// The four fingers are raised when their tip lies above the PIP joint, meaning a smaller Y
    /// in image coordinates. The thumb extends sideways instead, so its tip is compared against
    /// the IP joint along the X axis, in the direction given by `handedness`: outward is +X for a
    /// right hand and -X for a left hand (see the crate docs for the mirroring contract this
    /// relies on).
    ///
    /// Each test looks at a single reference joint, so a half-curled finger whose tip still
    /// clears its PIP counts as raised. That keeps the test robust against landmark jitter but
    /// makes it a heuristic, not a full pose analysis.
    pub fn classify(landmarks: &HandLandmarks, handedness: Handedness) -> Self {
        let mut raised = [false; 5];
        for finger in Finger::ALL {
            let tip = landmarks[finger.tip()];
            let reference = landmarks[finger.reference_joint()];
            raised[finger as usize] = match finger {
                Finger::Thumb => match handedness {
                    Handedness::Right => tip.x() > reference.x(),
                    Handedness::Left => tip.x() < reference.x(),
                },
                _ => tip.y() < reference.y(),
            };
        }

        let states = Self { raised };
        log::trace!(
            "{:?} hand: {} raised [{}]",
            handedness,
            states.count(),
            states.raised().format(", "),
        );
        states
    }

    /// Returns whether `finger` was classified as raised.
    #[inline]
    pub fn is_raised(&self, finger: Finger) -> bool {
        self.raised[finger as usize]
    }

    /// Returns an iterator over the raised fingers, in landmark layout order.
    pub fn raised(&self) -> impl Iterator<Item = Finger> + '_ {
        Finger::ALL.into_iter().filter(|f| self.is_raised(*f))
    }

    /// Returns the number of raised fingers, 0 to 5.
    pub fn count(&self) -> u8 {
        self.raised.iter().filter(|&&r| r).count() as u8
    }
}
