//! Frame module - one or two rolls against a single rack of ten pins
//!
//! A frame never stores its outcome. Strike, spare and completion are derived
//! from the recorded rolls every time they are asked for.

use arrayvec::ArrayVec;

use crate::types::{FrameKind, RollError, MAX_ROLLS_PER_FRAME, PINS_PER_FRAME};

/// A single frame of up to two rolls
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    rolls: ArrayVec<u8, MAX_ROLLS_PER_FRAME>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self {
            rolls: ArrayVec::new(),
        }
    }

    /// Record a roll of `pins` against this frame's rack.
    ///
    /// Fails with [`RollError::InvalidRoll`] when `pins` is outside `0..=10`,
    /// when it exceeds the pins still standing, or when the frame is already
    /// finished. The frame is unchanged on error.
    pub fn record_roll(&mut self, pins: i32) -> Result<(), RollError> {
        let standing = if self.is_finished() {
            0
        } else {
            self.pins_standing()
        };
        let invalid = RollError::InvalidRoll { pins, standing };

        let pins = u8::try_from(pins).map_err(|_| invalid)?;
        if pins > standing {
            return Err(invalid);
        }

        self.rolls.push(pins);
        Ok(())
    }

    /// Rolls recorded so far, in order
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Total pins knocked down in this frame
    pub fn pins_down(&self) -> u8 {
        self.rolls.iter().sum()
    }

    /// Pins still standing on this frame's rack
    pub fn pins_standing(&self) -> u8 {
        PINS_PER_FRAME - self.pins_down()
    }

    pub fn is_strike(&self) -> bool {
        self.rolls.len() == 1 && self.pins_down() == PINS_PER_FRAME
    }

    pub fn is_spare(&self) -> bool {
        self.rolls.len() == MAX_ROLLS_PER_FRAME && self.pins_down() == PINS_PER_FRAME
    }

    /// Two rolls recorded, or the rack cleared
    pub fn is_finished(&self) -> bool {
        self.rolls.len() == MAX_ROLLS_PER_FRAME || self.pins_down() == PINS_PER_FRAME
    }

    pub fn kind(&self) -> FrameKind {
        if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else if self.is_finished() {
            FrameKind::Open
        } else {
            FrameKind::InProgress
        }
    }
}
