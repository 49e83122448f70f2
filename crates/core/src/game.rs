//! Game module - routes rolls into frames and bonus rolls
//!
//! A game starts with one empty frame. Each roll either extends the current
//! frame, opens the next one, or (once the tenth frame is finished) lands in
//! the bonus rolls that frame earned. Rolls past that point are rejected.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::frame::Frame;
use crate::scoring;
use crate::snapshot::GameSnapshot;
use crate::types::{RollError, FRAMES_PER_GAME, MAX_BONUS_ROLLS, PINS_PER_FRAME};

/// Complete state of a single bowling game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: ArrayVec<Frame, FRAMES_PER_GAME>,
    bonus_rolls: ArrayVec<u8, MAX_BONUS_ROLLS>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Frames in a complete game
    pub const FRAMES: usize = FRAMES_PER_GAME;

    /// Create a game positioned on an empty first frame
    pub fn new() -> Self {
        let mut frames = ArrayVec::new();
        frames.push(Frame::new());
        Self {
            frames,
            bonus_rolls: ArrayVec::new(),
        }
    }

    /// Record a roll knocking down `pins`.
    ///
    /// Returns [`RollError::InvalidRoll`] for a pin count outside `0..=10` or
    /// one exceeding the pins left in the current frame, and
    /// [`RollError::GameOver`] once nothing is left to roll. A rejected roll
    /// leaves the game unchanged.
    pub fn record_roll(&mut self, pins: i32) -> Result<(), RollError> {
        let result = self.route_roll(pins);
        match result {
            Ok(()) => {
                trace!(pins, score = self.score(), "roll recorded");
                if self.is_over() {
                    debug!(score = self.score(), "game complete");
                }
            }
            Err(err) => debug!(
                pins,
                code = err.code(),
                reason = err.message(),
                "roll rejected: {err}"
            ),
        }
        result
    }

    fn route_roll(&mut self, pins: i32) -> Result<(), RollError> {
        let in_range = u8::try_from(pins)
            .ok()
            .filter(|&p| p <= PINS_PER_FRAME);
        let Some(checked) = in_range else {
            return Err(RollError::InvalidRoll {
                pins,
                standing: self.pins_facing_next_roll(),
            });
        };

        if self.is_final_frame_finished() {
            if self.remaining_bonus_rolls() == 0 {
                return Err(RollError::GameOver);
            }
            // Each bonus roll is a fresh rack, so only the range check applies.
            self.bonus_rolls.push(checked);
            debug!(
                pins = checked,
                remaining = self.remaining_bonus_rolls(),
                "bonus roll recorded"
            );
            return Ok(());
        }

        if !self.current_frame().is_finished() {
            return self.current_frame_mut().record_roll(pins);
        }

        // Open the next frame only once the roll has been accepted by it.
        let mut next = Frame::new();
        next.record_roll(pins)?;
        self.frames.push(next);
        debug!(frame = self.frames.len(), "frame started");
        Ok(())
    }

    /// Current total, counting only frames whose bonus is resolved
    pub fn score(&self) -> u32 {
        scoring::total_score(&self.frames, &self.bonus_rolls)
    }

    /// The last frame: the one being filled, or the one most recently finished
    pub fn current_frame(&self) -> &Frame {
        // `frames` always holds at least one frame.
        &self.frames[self.frames.len() - 1]
    }

    fn current_frame_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn bonus_rolls(&self) -> &[u8] {
        &self.bonus_rolls
    }

    /// Bonus rolls earned by the last frame: 2 for a strike, 1 for a spare.
    ///
    /// Zero until the last frame is finished.
    pub fn bonus_entitlement(&self) -> u8 {
        if self.is_final_frame_finished() {
            self.current_frame().kind().bonus_rolls()
        } else {
            0
        }
    }

    pub fn remaining_bonus_rolls(&self) -> u8 {
        // Bonus rolls never exceed the entitlement.
        self.bonus_entitlement() - self.bonus_rolls.len() as u8
    }

    /// Whether the next roll would be rejected with [`RollError::GameOver`]
    pub fn is_over(&self) -> bool {
        self.is_final_frame_finished() && self.remaining_bonus_rolls() == 0
    }

    /// Per-frame scores, bonus rolls credited to the last frame
    pub fn frame_scores(&self) -> ArrayVec<u32, FRAMES_PER_GAME> {
        scoring::frame_scores(&self.frames, &self.bonus_rolls)
    }

    /// Cumulative score after each frame
    pub fn running_totals(&self) -> ArrayVec<u32, FRAMES_PER_GAME> {
        scoring::running_totals(&self.frames, &self.bonus_rolls)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Pins the next roll faces: a full rack once the current frame is finished
    fn pins_facing_next_roll(&self) -> u8 {
        let frame = self.current_frame();
        if frame.is_finished() {
            PINS_PER_FRAME
        } else {
            frame.pins_standing()
        }
    }

    fn is_final_frame_finished(&self) -> bool {
        self.frames.len() == Self::FRAMES && self.current_frame().is_finished()
    }
}
