use crate::board::TileState;

/// Neighbour counts that bring a dead tile to life (`birth`) or keep a live one alive (`survive`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub birth: &'static [usize],
    pub survive: &'static [usize],
}

impl Rule {
    /// B3/S23.
    pub const fn conway() -> Self {
        Self {
            birth: &[3],
            survive: &[2, 3],
        }
    }

    pub fn next_state(&self, tile: TileState, alive_neighbor_count: usize) -> TileState {
        let alive = match tile {
            TileState::Alive => self.survive.contains(&alive_neighbor_count),
            TileState::Dead => self.birth.contains(&alive_neighbor_count),
        };

        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}
