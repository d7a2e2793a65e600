#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Applies a signed `[row, column]` delta, returning `None` if either axis would go negative.
    /// Upper bounds are the board's business.
    pub fn offset(self, delta: [isize; 2]) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(delta[0])?,
            column: self.column.checked_add_signed(delta[1])?,
        })
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            row: value[0],
            column: value[1],
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.row, value.column]
    }
}
