//! Snapshot module - serializable read-only copies of frames and game state

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{FrameKind, FRAMES_PER_GAME, MAX_BONUS_ROLLS, MAX_ROLLS_PER_FRAME};
use crate::{Frame, Game};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub rolls: ArrayVec<u8, MAX_ROLLS_PER_FRAME>,
    pub pins_down: u8,
    pub kind: FrameKind,
}

impl From<&Frame> for FrameSnapshot {
    fn from(value: &Frame) -> Self {
        Self {
            rolls: value.rolls().iter().copied().collect(),
            pins_down: value.pins_down(),
            kind: value.kind(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub frames: ArrayVec<FrameSnapshot, FRAMES_PER_GAME>,
    pub bonus_rolls: ArrayVec<u8, MAX_BONUS_ROLLS>,
    pub score: u32,
    pub running_totals: ArrayVec<u32, FRAMES_PER_GAME>,
    pub is_over: bool,
}

impl From<&Game> for GameSnapshot {
    fn from(value: &Game) -> Self {
        Self {
            frames: value.frames().iter().map(FrameSnapshot::from).collect(),
            bonus_rolls: value.bonus_rolls().iter().copied().collect(),
            score: value.score(),
            running_totals: value.running_totals(),
            is_over: value.is_over(),
        }
    }
}

impl GameSnapshot {
    pub fn current_frame(&self) -> Option<&FrameSnapshot> {
        self.frames.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_tracks_game() {
        let mut game = Game::new();
        for pins in [4, 6, 5] {
            game.record_roll(pins).unwrap();
        }

        let snap = game.snapshot();
        assert_eq!(snap.frames.len(), 2);
        assert_eq!(snap.frames[0].kind, FrameKind::Spare);
        assert_eq!(snap.current_frame().map(|f| f.pins_down), Some(5));
        assert_eq!(snap.score, 15);
        assert_eq!(snap.running_totals.as_slice(), &[15, 15]);
        assert!(!snap.is_over);
    }

    #[test]
    fn test_snapshot_serializes_kind_as_snake_case() {
        let mut game = Game::new();
        game.record_roll(2).unwrap();

        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["frames"][0]["kind"], "in_progress");
        assert_eq!(json["frames"][0]["rolls"], serde_json::json!([2]));
        assert_eq!(json["is_over"], false);
    }
}
