//! Annotation colors for rendering classified hands.
//!
//! This crate does no drawing itself. The palettes here only pick the colors, one per finger
//! plus the wrist, with a slightly darker variant for left hands so that both hands stay
//! distinguishable when they overlap in a frame.

use std::fmt;

use crate::finger::Finger;
use crate::hand::Handedness;

/// An 8-bit RGBA color.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Color([u8; 4]);

impl Color {
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.0[3]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r(),
            self.g(),
            self.b(),
            self.a(),
        )
    }
}

/// Joint and phalanx colors for annotating one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub wrist: Color,
    pub thumb: Color,
    pub index: Color,
    pub middle: Color,
    pub ring: Color,
    pub pinky: Color,
}

impl Palette {
    /// Colors for right hands.
    pub const RIGHT: Palette = Palette {
        wrist: Color::from_rgb8(200, 200, 200),
        thumb: Color::from_rgb8(200, 200, 0),
        index: Color::from_rgb8(0, 255, 0),
        middle: Color::from_rgb8(200, 0, 200),
        ring: Color::from_rgb8(255, 0, 0),
        pinky: Color::from_rgb8(0, 100, 255),
    };

    /// Colors for left hands, darker than [`Palette::RIGHT`].
    pub const LEFT: Palette = Palette {
        wrist: Color::from_rgb8(200, 200, 200),
        thumb: Color::from_rgb8(150, 150, 0),
        index: Color::from_rgb8(0, 200, 0),
        middle: Color::from_rgb8(150, 0, 150),
        ring: Color::from_rgb8(200, 0, 0),
        pinky: Color::from_rgb8(0, 80, 200),
    };

    /// Returns the palette to use for a hand with the given handedness.
    pub fn for_handedness(handedness: Handedness) -> &'static Palette {
        match handedness {
            Handedness::Left => &Palette::LEFT,
            Handedness::Right => &Palette::RIGHT,
        }
    }

    /// Returns the color assigned to `finger`.
    pub fn finger(&self, finger: Finger) -> Color {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_distinguish_hands_and_fingers() {
        assert_eq!(
            *Palette::for_handedness(Handedness::Right),
            Palette::RIGHT
        );
        assert_eq!(*Palette::for_handedness(Handedness::Left), Palette::LEFT);

        for finger in Finger::ALL {
            assert_ne!(
                Palette::RIGHT.finger(finger),
                Palette::LEFT.finger(finger),
                "{finger} should differ between hands"
            );
        }
    }

    #[test]
    fn color_debug_is_hex() {
        assert_eq!(format!("{:?}", Color::from_rgb8(0, 100, 255)), "#0064ffff");
        assert_eq!(format!("{:?}", Color::from_rgba8(1, 2, 3, 4)), "#01020304");
    }
}
