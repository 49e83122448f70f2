//! Core types module - shared rule constants, frame classification and errors
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no game logic, so it can be shared by the
//! scoring core and by any caller inspecting game state.
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAMES_PER_GAME` | 10 | Frames in a complete game |
//! | `PINS_PER_FRAME` | 10 | Pins racked at the start of each frame |
//! | `MAX_ROLLS_PER_FRAME` | 2 | Rolls allowed in one frame |
//! | `MAX_BONUS_ROLLS` | 2 | Bonus rolls owed after a strike in the last frame |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{FrameKind, RollError, FRAMES_PER_GAME, PINS_PER_FRAME};
//!
//! assert_eq!(FRAMES_PER_GAME, 10);
//! assert_eq!(PINS_PER_FRAME, 10);
//!
//! // Bonus entitlement by frame outcome
//! assert_eq!(FrameKind::Strike.bonus_rolls(), 2);
//! assert_eq!(FrameKind::Spare.bonus_rolls(), 1);
//! assert_eq!(FrameKind::Open.bonus_rolls(), 0);
//!
//! // Errors carry a stable code
//! assert_eq!(RollError::GameOver.code(), "game_over");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Frames in a complete game (10)
pub const FRAMES_PER_GAME: usize = 10;

/// Pins standing at the start of every frame (10)
pub const PINS_PER_FRAME: u8 = 10;

/// Maximum rolls recorded in a single frame (2)
pub const MAX_ROLLS_PER_FRAME: usize = 2;

/// Maximum bonus rolls after the last frame (2, earned by a strike)
pub const MAX_BONUS_ROLLS: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_pin_rule_defaults() {
        assert_eq!(FRAMES_PER_GAME, 10);
        assert_eq!(PINS_PER_FRAME, 10);
        assert_eq!(MAX_ROLLS_PER_FRAME, 2);
        assert_eq!(MAX_BONUS_ROLLS, 2);
    }

    #[test]
    fn bonus_rolls_never_exceed_max() {
        for kind in [
            FrameKind::InProgress,
            FrameKind::Open,
            FrameKind::Spare,
            FrameKind::Strike,
        ] {
            assert!(kind.bonus_rolls() as usize <= MAX_BONUS_ROLLS);
        }
    }

    #[test]
    fn test_roll_error_display() {
        let overflow = RollError::InvalidRoll {
            pins: 5,
            standing: 4,
        };
        assert_eq!(overflow.code(), "invalid_roll");
        assert_eq!(overflow.to_string(), "roll of 5 pins is invalid with 4 pins standing");

        let negative = RollError::InvalidRoll {
            pins: -1,
            standing: 10,
        };
        assert_eq!(negative.to_string(), "roll of -1 pins is invalid with 10 pins standing");
        assert_eq!(negative.message(), "roll must be between 0 and the pins standing");

        assert_eq!(RollError::GameOver.code(), "game_over");
        assert_eq!(RollError::GameOver.to_string(), "game is already over");
        assert_eq!(RollError::GameOver.message(), "no frames or bonus rolls remain");
    }
}

/// Outcome of a frame, derived from its rolls
///
/// - **InProgress**: Frame can still take another roll
/// - **Open**: Two rolls, fewer than ten pins in total
/// - **Spare**: Two rolls, all ten pins
/// - **Strike**: All ten pins on the first roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    InProgress,
    Open,
    Spare,
    Strike,
}

impl FrameKind {
    /// Bonus rolls owed when this is the outcome of the last frame
    pub fn bonus_rolls(&self) -> u8 {
        match self {
            FrameKind::Strike => 2,
            FrameKind::Spare => 1,
            FrameKind::Open | FrameKind::InProgress => 0,
        }
    }
}

/// Rejected roll
///
/// Both variants are caller contract violations: the roll is discarded and the
/// game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// Pin count is negative or more than the pins left to knock down.
    ///
    /// `standing` is what the roll faced: the frame's remaining pins, a full
    /// rack for a new frame or a bonus roll, and 0 for a finished frame.
    #[error("roll of {pins} pins is invalid with {standing} pins standing")]
    InvalidRoll { pins: i32, standing: u8 },

    /// No frames or bonus rolls are left to record.
    #[error("game is already over")]
    GameOver,
}

impl RollError {
    pub fn code(self) -> &'static str {
        match self {
            RollError::InvalidRoll { .. } => "invalid_roll",
            RollError::GameOver => "game_over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RollError::InvalidRoll { .. } => "roll must be between 0 and the pins standing",
            RollError::GameOver => "no frames or bonus rolls remain",
        }
    }
}
