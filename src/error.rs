use std::error::Error;
use std::fmt;

/// Reasons a puzzle cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Boards must be at least 2x2.
    BoardTooSmall { size: usize },
    /// The board has more cells than `u32` labels can number.
    BoardTooLarge { size: usize },
    /// A shuffle of zero moves would leave the board solved forever.
    NoShuffle,
    /// An explicit arrangement was not a permutation of `0..size*size`.
    InvalidTiles { reason: String },
    /// Pointer-to-cell mapping needs a non-zero tile size.
    ZeroTileSize,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::BoardTooSmall { size } => {
                write!(f, "board size must be at least 2, got {}", size)
            }
            PuzzleError::BoardTooLarge { size } => {
                write!(f, "board size {} is too large", size)
            }
            PuzzleError::NoShuffle => write!(f, "shuffle strength must be at least 1"),
            PuzzleError::InvalidTiles { reason } => write!(f, "invalid tile arrangement: {}", reason),
            PuzzleError::ZeroTileSize => write!(f, "tile size must be greater than zero"),
        }
    }
}

impl Error for PuzzleError {}
