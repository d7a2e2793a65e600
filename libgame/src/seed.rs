use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{board::TileState, pos::Position};

/// Decides the initial state of each tile in a seed zone.
pub trait Seeder {
    fn seed(&mut self, pos: Position) -> TileState;
}

impl<F> Seeder for F
where
    F: FnMut(Position) -> TileState,
{
    fn seed(&mut self, pos: Position) -> TileState {
        self(pos)
    }
}

/// Flips a fair coin for every tile.
pub struct RandomSeeder<R> {
    rng: R,
}

impl<R> RandomSeeder<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSeeder<StdRng> {
    /// Reproducible seeding for a given `u64`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R> Seeder for RandomSeeder<R>
where
    R: Rng,
{
    fn seed(&mut self, _pos: Position) -> TileState {
        self.rng.random_bool(0.5).into()
    }
}
