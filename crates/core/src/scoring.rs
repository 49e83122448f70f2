//! Scoring module - ten-pin scoring over recorded frames
//!
//! All functions here are pure reads over a frame slice and the bonus rolls
//! taken after the last frame. They never allocate.
//!
//! Rules:
//! - An unfinished frame scores 0.
//! - An open frame scores its own pins.
//! - A spare scores 10 plus the next roll, and 0 until that roll exists.
//! - A strike scores 10 plus the next two rolls, and 0 until both exist.
//! - The last frame scores only its own pins; the bonus rolls it earned are
//!   added to the total separately.

use arrayvec::ArrayVec;

use crate::frame::Frame;
use crate::types::FRAMES_PER_GAME;

/// Rolls recorded after the frame at `index`: rolls of later frames in order,
/// then bonus rolls.
pub fn following_rolls<'a>(
    frames: &'a [Frame],
    bonus_rolls: &'a [u8],
    index: usize,
) -> impl Iterator<Item = u8> + 'a {
    frames
        .iter()
        .skip(index + 1)
        .flat_map(|frame| frame.rolls().iter().copied())
        .chain(bonus_rolls.iter().copied())
}

/// Score of the frame at `index`, excluding the bonus rolls after the last frame.
pub fn frame_score(frames: &[Frame], bonus_rolls: &[u8], index: usize) -> u32 {
    let Some(frame) = frames.get(index) else {
        return 0;
    };
    if !frame.is_finished() {
        return 0;
    }

    let pins = u32::from(frame.pins_down());
    if index == FRAMES_PER_GAME - 1 {
        return pins;
    }

    // Strike looks ahead two rolls, spare one, open frame none.
    let lookahead = usize::from(frame.kind().bonus_rolls());
    if lookahead == 0 {
        return pins;
    }

    let mut seen = 0;
    let mut extra = 0u32;
    for roll in following_rolls(frames, bonus_rolls, index).take(lookahead) {
        seen += 1;
        extra += u32::from(roll);
    }

    if seen < lookahead {
        0
    } else {
        pins + extra
    }
}

/// Total score: every frame score plus all bonus rolls
pub fn total_score(frames: &[Frame], bonus_rolls: &[u8]) -> u32 {
    let frames_total: u32 = (0..frames.len())
        .map(|index| frame_score(frames, bonus_rolls, index))
        .sum();
    frames_total + bonus_total(bonus_rolls)
}

/// Per-frame scores, with the bonus rolls credited to the last frame.
///
/// The entries always sum to [`total_score`].
pub fn frame_scores(frames: &[Frame], bonus_rolls: &[u8]) -> ArrayVec<u32, FRAMES_PER_GAME> {
    (0..frames.len().min(FRAMES_PER_GAME))
        .map(|index| {
            let score = frame_score(frames, bonus_rolls, index);
            if index == FRAMES_PER_GAME - 1 {
                score + bonus_total(bonus_rolls)
            } else {
                score
            }
        })
        .collect()
}

/// Cumulative totals after each frame
pub fn running_totals(frames: &[Frame], bonus_rolls: &[u8]) -> ArrayVec<u32, FRAMES_PER_GAME> {
    frame_scores(frames, bonus_rolls)
        .into_iter()
        .scan(0u32, |total, score| {
            *total += score;
            Some(*total)
        })
        .collect()
}

fn bonus_total(bonus_rolls: &[u8]) -> u32 {
    bonus_rolls.iter().map(|&pins| u32::from(pins)).sum()
}
