//! Raised-finger classification for hand poses.
//!
//! This crate takes the 21 hand landmarks that an external pose estimator (following the
//! MediaPipe hand model layout) produces for each detected hand, together with the estimator's
//! Left/Right handedness call, and derives which fingers are raised and how many. Hand
//! detection, tracking, frame capture and rendering all stay outside; the types here only
//! describe a pose and classify it.
//!
//! # Coordinates
//!
//! Landmarks use image coordinates normalized to the frame size: X points to the right, Y
//! points *down* (origin in the top-left corner), both nominally in range 0.0 to 1.0.
//!
//! # Mirroring
//!
//! The thumb test in [`finger::FingerStates::classify`] flips direction with
//! [`hand::Handedness`], because a mirrored hand extends its thumb the other way. It assumes
//! that frames were flipped horizontally *before* pose estimation, so that a hand labeled
//! `Right` appears on the viewer's right. Feeding unmirrored frames inverts every thumb
//! decision, and the classifier cannot detect that on its own, so the flip is part of the
//! caller's contract.

use std::fmt;

use log::LevelFilter;

pub mod action;
pub mod finger;
pub mod hand;
pub mod landmark;
pub mod palette;
pub mod rect;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and this library will log at
/// *trace* level. Otherwise, they will log at *debug* level.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

/// Error type for malformed pose estimator output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A landmark list did not contain exactly [`landmark::NUM_LANDMARKS`] entries.
    LandmarkCount {
        /// The number of landmarks that were actually supplied.
        got: usize,
    },
    /// A handedness label was neither `Left` nor `Right`.
    Handedness(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LandmarkCount { got } => write!(
                f,
                "expected {} hand landmarks, got {}",
                landmark::NUM_LANDMARKS,
                got,
            ),
            Error::Handedness(label) => {
                write!(
                    f,
                    "unknown handedness label `{label}` (expected `Left` or `Right`)"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
