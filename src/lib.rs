//! Ten-pin bowling scorer (workspace facade crate).
//!
//! This package exposes the `tenpin::{core,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use tenpin_core::{new_game, Frame, Game};
pub use tenpin_types::RollError;
