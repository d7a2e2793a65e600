use std::io;

use board::{GameBoard, TileState};
use error::GameError;
use itertools::Itertools;
use log::{debug, trace};
use pos::Position;
use rule::Rule;
use seed::Seeder;

pub mod board;
pub mod error;
pub mod pos;
pub mod rule;
pub mod seed;

pub const DEFAULT_WORLD_SIZE: usize = 25;
pub const DEFAULT_SEED_ZONE_SIZE: usize = 5;

const NEIGHBOR_RELATIVE_POSITIONS: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// A bounded Game of Life world. Tiles beyond the edges count as dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: GameBoard,
    rule: Rule,
}

impl Game {
    /// An entirely dead world of `size × size` tiles.
    pub fn new(size: usize) -> Self {
        Self::from_board(GameBoard::new(size))
    }

    pub fn from_board(board: GameBoard) -> Self {
        Self {
            board,
            rule: Rule::conway(),
        }
    }

    /// Starts from an explicit grid, see [`GameBoard::from_rows`].
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self, GameError>
    where
        R: AsRef<[T]>,
        T: Copy + Into<TileState>,
    {
        GameBoard::from_rows(rows).map(Self::from_board)
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn live_count(&self) -> usize {
        self.board.live_count()
    }

    /// Fills the `seed_zone_size × seed_zone_size` square in the middle of the world using `seeder`
    /// and returns how many of its tiles ended up alive. Tiles outside the zone are left as they are.
    ///
    /// The zone may be at most half the world size so the pattern has room to grow before it hits an edge.
    pub fn seed<S>(&mut self, seed_zone_size: usize, mut seeder: S) -> Result<usize, GameError>
    where
        S: Seeder,
    {
        let world_size = self.board.size();
        if seed_zone_size > world_size / 2 {
            return Err(GameError::InvalidSeedZone {
                seed_zone_size,
                world_size,
            });
        }

        let offset = world_size / 2 - seed_zone_size / 2;
        let zone = offset..offset + seed_zone_size;

        let mut alive_cells = 0;
        for (row, column) in zone.clone().cartesian_product(zone) {
            let pos = Position { row, column };
            let state = seeder.seed(pos);

            // The size check above keeps the whole zone on the board.
            if let Some(tile) = self.board.tile_mut(pos) {
                *tile = state;
            }

            if state.is_alive() {
                alive_cells += 1;
            }
        }

        debug!("seeded {seed_zone_size}x{seed_zone_size} zone at offset {offset}: {alive_cells} alive");

        Ok(alive_cells)
    }

    /// Advances the world by one generation and returns the number of live tiles in it.
    ///
    /// The next generation is computed entirely from the current board and then swapped in whole.
    pub fn step(&mut self) -> usize {
        let next_tiles = self
            .board
            .enumerate_tiles()
            .map(|(tile_pos, tile)| self.step_tile(tile_pos, *tile))
            .collect();

        self.board = GameBoard::with_tiles(self.board.size(), next_tiles);

        let alive_cells = self.board.live_count();
        trace!("step produced {alive_cells} live cells");
        alive_cells
    }

    pub fn is_alive(&self, row: usize, column: usize) -> Result<bool, GameError> {
        self.board
            .tile([row, column])
            .map(|tile| tile.is_alive())
            .ok_or_else(|| GameError::InvalidCoordinates {
                row,
                column,
                size: self.board.size(),
            })
    }

    /// Writes the world one row per line, `O` for live tiles and `-` for dead ones.
    pub fn render<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        write!(writer, "{}", self.board)
    }

    fn step_tile(&self, tile_pos: Position, tile: TileState) -> TileState {
        self.rule.next_state(tile, self.alive_neighbor_count(tile_pos))
    }

    fn alive_neighbor_count(&self, tile_pos: Position) -> usize {
        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|&delta| self.board.tile(tile_pos.offset(delta)?))
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_SIZE)
    }
}
