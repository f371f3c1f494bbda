//! RNG module - tile palette and seeded random source
//!
//! The palette holds the active tile kinds (the first `n` playable kinds).
//! Generation draws a freshly shuffled ordering of the palette for every cell;
//! refill draws one kind uniformly at random.
//!
//! Everything takes `&mut R where R: Rng`, so tests can inject any source. The
//! default source is a `StdRng` seeded from a `u64`, which makes a seed fully
//! reproducible.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::ConstructionError;
use crate::types::{TileKind, MAX_TILE_KINDS, MIN_TILE_KINDS};

/// Shuffled candidate list for one generated cell
pub type KindOrder = ArrayVec<TileKind, MAX_TILE_KINDS>;

/// The active tile kinds of a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePalette {
    kinds: ArrayVec<TileKind, MAX_TILE_KINDS>,
}

impl TilePalette {
    /// Palette of the first `count` playable kinds.
    pub fn new(count: usize) -> Result<Self, ConstructionError> {
        if count < MIN_TILE_KINDS {
            return Err(ConstructionError::TooFewKinds {
                kinds: count,
                min: MIN_TILE_KINDS,
            });
        }
        if count > MAX_TILE_KINDS {
            return Err(ConstructionError::TooManyKinds {
                kinds: count,
                max: MAX_TILE_KINDS,
            });
        }
        Ok(Self {
            kinds: TileKind::PLAYABLE[..count].iter().copied().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kinds(&self) -> &[TileKind] {
        &self.kinds
    }

    pub fn contains(&self, kind: TileKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// All kinds in a random order (Fisher-Yates).
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> KindOrder {
        let mut order = self.kinds.clone();
        order.shuffle(rng);
        order
    }

    /// One kind, uniformly at random.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> TileKind {
        self.kinds[rng.random_range(0..self.kinds.len())]
    }
}

/// Pick the seed for a new engine: the given one, or fresh entropy.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Deterministic random source for `seed`.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
