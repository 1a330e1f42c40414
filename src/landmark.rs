//! Hand landmark data as produced by an external pose estimator.

use std::ops::Index;

use nalgebra::Point2;

use crate::Error;

/// Number of landmarks in a hand pose.
pub const NUM_LANDMARKS: usize = 21;

/// A single hand landmark, in normalized image coordinates.
#[derive(Debug, Default, PartialEq, PartialOrd, Clone, Copy)]
pub struct Landmark {
    pos: [f32; 2],
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos[1]
    }

    #[inline]
    pub fn position(&self) -> Point2<f32> {
        Point2::new(self.pos[0], self.pos[1])
    }
}

impl From<[f32; 2]> for Landmark {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Landmark {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Landmark> for Point2<f32> {
    fn from(lm: Landmark) -> Self {
        lm.position()
    }
}

/// Euclidean distance between two landmarks, in normalized image coordinates.
pub fn distance(a: Landmark, b: Landmark) -> f32 {
    nalgebra::distance(&a.position(), &b.position())
}

/// The landmark positions of a single detected hand.
///
/// Contains exactly [`NUM_LANDMARKS`] entries, laid out per [`LandmarkIdx`], so any code
/// holding a value of this type can index it without bounds concerns. The estimated
/// handedness lives in [`Hand`][crate::hand::Hand], alongside this type.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    positions: [Landmark; NUM_LANDMARKS],
}

impl HandLandmarks {
    pub fn new(positions: [Landmark; NUM_LANDMARKS]) -> Self {
        Self { positions }
    }

    /// Creates a [`HandLandmarks`] collection from a slice of landmarks.
    ///
    /// Returns [`Error::LandmarkCount`] when `landmarks` does not contain exactly
    /// [`NUM_LANDMARKS`] entries. Estimator bindings typically hand over a plain list, so the
    /// length is checked here, once, instead of at every landmark access.
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self, Error> {
        let positions = <[Landmark; NUM_LANDMARKS]>::try_from(landmarks).map_err(|_| {
            Error::LandmarkCount {
                got: landmarks.len(),
            }
        })?;
        Ok(Self { positions })
    }

    pub fn iter(&self) -> impl Iterator<Item = Landmark> + Clone + '_ {
        self.positions.iter().copied()
    }

    pub fn get(&self, index: LandmarkIdx) -> Landmark {
        self.positions[index as usize]
    }

    pub fn positions(&self) -> &[Landmark; NUM_LANDMARKS] {
        &self.positions
    }
}

impl Index<LandmarkIdx> for HandLandmarks {
    type Output = Landmark;

    #[inline]
    fn index(&self, index: LandmarkIdx) -> &Landmark {
        &self.positions[index as usize]
    }
}

/// Names for the hand pose landmarks.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Landmark pairs to connect when rendering a hand skeleton.
pub const CONNECTIVITY: &[(LandmarkIdx, LandmarkIdx)] = {
    use LandmarkIdx::*;
    &[
        // Surround the palm:
        (Wrist, ThumbCmc),
        (ThumbCmc, IndexFingerMcp),
        (IndexFingerMcp, MiddleFingerMcp),
        (MiddleFingerMcp, RingFingerMcp),
        (RingFingerMcp, PinkyMcp),
        (PinkyMcp, Wrist),
        // Thumb:
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        // Index:
        (IndexFingerMcp, IndexFingerPip),
        (IndexFingerPip, IndexFingerDip),
        (IndexFingerDip, IndexFingerTip),
        // Middle:
        (MiddleFingerMcp, MiddleFingerPip),
        (MiddleFingerPip, MiddleFingerDip),
        (MiddleFingerDip, MiddleFingerTip),
        // Ring:
        (RingFingerMcp, RingFingerPip),
        (RingFingerPip, RingFingerDip),
        (RingFingerDip, RingFingerTip),
        // Pinky:
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
    ]
};

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn from_slice_rejects_wrong_length() {
        let short = vec![Landmark::default(); 20];
        match HandLandmarks::from_slice(&short) {
            Err(Error::LandmarkCount { got: 20 }) => {}
            other => panic!("expected landmark count error, got {other:?}"),
        }

        let msg = HandLandmarks::from_slice(&short).unwrap_err().to_string();
        assert_eq!(msg, "expected 21 hand landmarks, got 20");

        let exact = vec![Landmark::default(); NUM_LANDMARKS];
        assert!(HandLandmarks::from_slice(&exact).is_ok());
    }

    #[test]
    fn named_index_matches_layout() {
        let mut positions = [Landmark::default(); NUM_LANDMARKS];
        positions[8] = Landmark::new(0.25, 0.75);
        let landmarks = HandLandmarks::new(positions);

        assert_eq!(landmarks[LandmarkIdx::IndexFingerTip], Landmark::new(0.25, 0.75));
        assert_eq!(landmarks.get(LandmarkIdx::Wrist), Landmark::default());
    }

    #[test]
    fn connectivity_covers_every_landmark() {
        for index in 0..NUM_LANDMARKS {
            let covered = CONNECTIVITY
                .iter()
                .any(|&(a, b)| a as usize == index || b as usize == index);
            assert!(covered, "landmark {index} is not part of the skeleton");
        }
    }

    #[test]
    fn euclidean_distance() {
        let a = Landmark::new(0.1, 0.2);
        let b = Landmark::new(0.4, 0.6);
        assert_relative_eq!(distance(a, b), 0.5);
        assert_relative_eq!(distance(a, a), 0.0);
        assert_relative_eq!(distance(a, b), distance(b, a));
    }
}
