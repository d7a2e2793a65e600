use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(
        "too large seed zone: seed zone should be less or equal to half of world size \
         (got {seed_zone_size} for a world of size {world_size})"
    )]
    InvalidSeedZone {
        seed_zone_size: usize,
        world_size: usize,
    },

    #[error("coordinates expected within range: 0-{size} (got row {row}, column {column})")]
    InvalidCoordinates {
        row: usize,
        column: usize,
        size: usize,
    },

    #[error("malformed grid: row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown marker {marker:?} at row {row}, column {column}")]
    InvalidMarker {
        row: usize,
        column: usize,
        marker: char,
    },
}
