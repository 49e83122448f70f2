//! Core bowling logic module - pure, deterministic, and testable
//!
//! This module contains the frame state machine and the scoring rules.
//! It has **zero dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: The same rolls always produce the same frames and score
//! - **Testable**: Unit tests for every rule, plus scenario tests under `tests/`
//! - **Fast**: Frames and bonus rolls live inline, so recording and scoring never allocate
//!
//! # Module Structure
//!
//! - [`frame`]: One frame of up to two rolls, with derived strike/spare/finished flags
//! - [`game`]: Ten frames plus bonus rolls, and the routing of each roll
//! - [`scoring`]: Per-frame and total scores with strike/spare lookahead
//! - [`snapshot`]: Serializable read-only copies of game state
//!
//! # Game Rules
//!
//! - **Frames**: Ten per game, each taking two rolls unless the first clears the rack
//! - **Strike**: 10 plus the next two rolls, unscored until both are recorded
//! - **Spare**: 10 plus the next roll, unscored until it is recorded
//! - **Tenth frame**: A strike earns two bonus rolls, a spare earns one; each is a fresh rack
//! - **Partial games**: Unfinished frames score 0, so the total never decreases
//!
//! # Example
//!
//! ```
//! use tenpin_core::{Game, RollError};
//!
//! let mut game = Game::new();
//!
//! // Spare, then an open frame
//! game.record_roll(4).unwrap();
//! game.record_roll(6).unwrap();
//! game.record_roll(5).unwrap();
//! game.record_roll(0).unwrap();
//!
//! assert_eq!(game.score(), 20);
//! assert_eq!(game.current_frame().pins_down(), 5);
//!
//! // Six pins already down in a fresh frame leaves four standing
//! game.record_roll(6).unwrap();
//! assert!(matches!(game.record_roll(5), Err(RollError::InvalidRoll { .. })));
//! ```

pub mod frame;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use frame::Frame;
pub use game::Game;
pub use scoring::{following_rolls, frame_score, total_score};
pub use snapshot::{FrameSnapshot, GameSnapshot};
pub use types::{FrameKind, RollError};

/// Start a new game on an empty first frame
pub fn new_game() -> Game {
    Game::new()
}
