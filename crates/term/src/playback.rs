//! Replays a cascade one phase at a time.
//!
//! The engine resolves a swap in one call; the playback queue holds the
//! intermediate snapshots so the UI can show the swap, the cleared cells, the
//! fallen tiles and the refill in order. Frames switch instantly every
//! `frame_ms` milliseconds.

use std::collections::VecDeque;

use crate::core::BoardSnapshot;
use crate::engine::Resolution;

/// What a playback frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Swapped,
    Cleared,
    Compacted,
    Refilled,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Swapped => "SWAP",
            Phase::Cleared => "CLEAR",
            Phase::Compacted => "FALL",
            Phase::Refilled => "REFILL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub phase: Phase,
    pub board: BoardSnapshot,
}

#[derive(Debug, Clone)]
pub struct CascadePlayback {
    frames: VecDeque<Frame>,
    frame_ms: u32,
    elapsed_ms: u32,
}

impl CascadePlayback {
    pub fn new(frame_ms: u32) -> Self {
        Self {
            frames: VecDeque::new(),
            frame_ms: frame_ms.max(1),
            elapsed_ms: 0,
        }
    }

    /// Queue the frames of `resolution`, replacing anything still playing.
    ///
    /// A swap that made no run has nothing to animate and queues no frames.
    pub fn load(&mut self, resolution: &Resolution) {
        self.frames.clear();
        self.elapsed_ms = 0;
        if resolution.steps.is_empty() {
            return;
        }

        self.frames.push_back(Frame {
            phase: Phase::Swapped,
            board: resolution.swapped.clone(),
        });
        for step in &resolution.steps {
            self.frames.push_back(Frame {
                phase: Phase::Cleared,
                board: step.after_clear.clone(),
            });
            self.frames.push_back(Frame {
                phase: Phase::Compacted,
                board: step.after_compact.clone(),
            });
            self.frames.push_back(Frame {
                phase: Phase::Refilled,
                board: step.after_refill.clone(),
            });
        }
    }

    pub fn is_active(&self) -> bool {
        !self.frames.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// Frame to draw now, if any.
    pub fn current(&self) -> Option<&Frame> {
        self.frames.front()
    }

    /// Advance by `dt_ms`. Returns true when the visible frame changed.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        if self.frames.is_empty() {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        let mut changed = false;
        while self.elapsed_ms >= self.frame_ms && !self.frames.is_empty() {
            self.elapsed_ms -= self.frame_ms;
            self.frames.pop_front();
            changed = true;
        }
        if self.frames.is_empty() {
            self.elapsed_ms = 0;
        }
        changed
    }

    /// Drop the remaining frames.
    pub fn skip(&mut self) {
        self.frames.clear();
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::types::{Coord, SwapRequest, TileKind};
    use crate::engine::CascadeStep;

    fn snap(kind: TileKind) -> BoardSnapshot {
        BoardSnapshot::from(&Board::filled(3, 3, kind).unwrap())
    }

    fn resolution(steps: usize) -> Resolution {
        let step = CascadeStep {
            runs: Vec::new(),
            cleared: 3,
            after_clear: snap(TileKind::Empty),
            after_compact: snap(TileKind::Empty),
            after_refill: snap(TileKind::Square),
        };
        Resolution {
            request: SwapRequest::new(Coord::new(0, 0), Coord::new(0, 1)),
            swapped: snap(TileKind::Circle),
            steps: vec![step; steps],
        }
    }

    #[test]
    fn match_free_swap_has_nothing_to_play() {
        let mut playback = CascadePlayback::new(100);
        playback.load(&resolution(0));
        assert!(!playback.is_active());
        assert!(playback.current().is_none());
    }

    #[test]
    fn frames_follow_phase_order() {
        let mut playback = CascadePlayback::new(100);
        playback.load(&resolution(2));
        assert_eq!(playback.remaining(), 1 + 2 * 3);

        let mut phases = Vec::new();
        while let Some(frame) = playback.current() {
            phases.push(frame.phase);
            playback.tick(100);
        }
        assert_eq!(
            phases,
            vec![
                Phase::Swapped,
                Phase::Cleared,
                Phase::Compacted,
                Phase::Refilled,
                Phase::Cleared,
                Phase::Compacted,
                Phase::Refilled,
            ]
        );
    }

    #[test]
    fn tick_accumulates_partial_frames() {
        let mut playback = CascadePlayback::new(100);
        playback.load(&resolution(1));
        assert!(!playback.tick(60));
        assert_eq!(playback.current().map(|f| f.phase), Some(Phase::Swapped));
        assert!(playback.tick(60));
        assert_eq!(playback.current().map(|f| f.phase), Some(Phase::Cleared));

        // A long stall skips several frames at once.
        assert!(playback.tick(1_000));
        assert!(!playback.is_active());
    }

    #[test]
    fn skip_clears_queue() {
        let mut playback = CascadePlayback::new(100);
        playback.load(&resolution(3));
        playback.skip();
        assert!(!playback.is_active());
        assert!(!playback.tick(100));
    }
}
