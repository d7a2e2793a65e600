use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::{error::GameError, pos::Position};

pub const ALIVE_MARKER: char = 'O';
pub const DEAD_MARKER: char = '-';

/// A square grid of tiles stored row-major. The size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    size: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(size: usize) -> Self {
        let tiles = vec![TileState::default(); size * size];
        Self::with_tiles(size, tiles)
    }

    /// Builds a board from explicit rows. Every row must be as long as there are rows.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self, GameError>
    where
        R: AsRef<[T]>,
        T: Copy + Into<TileState>,
    {
        let size = rows.len();

        if let Some((row, found)) = rows
            .iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|(_, len)| *len != size)
        {
            return Err(GameError::MalformedGrid {
                row,
                expected: size,
                found,
            });
        }

        let tiles = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().map(|&tile| tile.into()))
            .collect();

        Ok(Self::with_tiles(size, tiles))
    }

    pub(crate) fn with_tiles(size: usize, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), size * size);
        Self { size, tiles }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn live_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, column } = pos.into();

        if row >= self.size || column >= self.size {
            return None;
        }

        Some(column + (row * self.size))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.size;
        let column = index % self.size;
        Position { row, column }
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            return Ok(());
        }

        for row in &self.tiles.iter().chunks(self.size) {
            for tile in row {
                write!(f, "{}", tile.marker())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl FromStr for GameBoard {
    type Err = GameError;

    /// Reads the rendered form back: one line per row, `O` alive and `-` dead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().collect_vec();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let rows = lines
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.trim_end()
                    .chars()
                    .enumerate()
                    .map(|(column, marker)| {
                        TileState::from_marker(marker).ok_or(GameError::InvalidMarker {
                            row,
                            column,
                            marker,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(&rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }

    /// `1` is alive, anything else is dead.
    pub fn from_bit(bit: u8) -> Self {
        if bit == 1 {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }

    pub fn bit(self) -> u8 {
        match self {
            TileState::Alive => 1,
            TileState::Dead => 0,
        }
    }

    pub fn marker(self) -> char {
        match self {
            TileState::Alive => ALIVE_MARKER,
            TileState::Dead => DEAD_MARKER,
        }
    }

    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            ALIVE_MARKER => Some(TileState::Alive),
            DEAD_MARKER => Some(TileState::Dead),
            _ => None,
        }
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}

impl From<u8> for TileState {
    fn from(bit: u8) -> Self {
        Self::from_bit(bit)
    }
}
