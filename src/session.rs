//! A single game session: one puzzle plus the pointer-to-cell mapping a
//! frontend needs. Sessions share nothing, so any number can run side by side.

use log::{debug, info};
use rand::{thread_rng, Rng};

use crate::error::PuzzleError;
use crate::puzzle::{MoveOutcome, Puzzle};

/// Parameters for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Tiles per side.
    pub size: usize,
    /// Number of random blank moves used to scramble the board.
    pub shuffle_strength: usize,
    /// Width and height of one tile in pointer units (pixels).
    pub tile_size: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: 4,
            shuffle_strength: 15,
            tile_size: 70,
        }
    }
}

/// Result of one click as seen by a frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickReport {
    pub outcome: MoveOutcome,
    /// Set only on the move that solved the puzzle.
    pub cleared: bool,
}

#[derive(Debug)]
pub struct Session {
    puzzle: Puzzle,
    tile_size: u32,
    moves: usize,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Result<Self, PuzzleError> {
        Self::with_rng(config, &mut thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        config: &SessionConfig,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let puzzle = Puzzle::with_rng(config.size, config.shuffle_strength, rng)?;
        let session = Self::from_puzzle(puzzle, config.tile_size)?;
        debug!("started session with {:?}", config);
        Ok(session)
    }

    /// Wraps an existing puzzle, e.g. one built with [`Puzzle::from_tiles`].
    pub fn from_puzzle(puzzle: Puzzle, tile_size: u32) -> Result<Self, PuzzleError> {
        if tile_size == 0 {
            return Err(PuzzleError::ZeroTileSize);
        }
        Ok(Self {
            puzzle,
            tile_size,
            moves: 0,
        })
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Successful moves made so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Maps a pointer offset from the board's top-left corner to `(col, row)`.
    ///
    /// Anything left of, above, or beyond the board maps to `None`.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let col = self.axis_cell(x)?;
        let row = self.axis_cell(y)?;
        Some((col, row))
    }

    fn axis_cell(&self, offset: f64) -> Option<usize> {
        if !offset.is_finite() || offset < 0.0 {
            return None;
        }
        let cell = (offset / f64::from(self.tile_size)).floor() as usize;
        (cell < self.puzzle.size()).then_some(cell)
    }

    /// Handles a click at a pointer offset from the board's top-left corner.
    pub fn click_at(&mut self, x: f64, y: f64) -> ClickReport {
        if self.puzzle.completed_status() {
            return ClickReport {
                outcome: MoveOutcome::Frozen,
                cleared: false,
            };
        }
        match self.cell_at(x, y) {
            Some((col, row)) => self.click_cell(col as isize, row as isize),
            None => ClickReport {
                outcome: MoveOutcome::OutOfBounds,
                cleared: false,
            },
        }
    }

    /// Handles a click on the cell at `(col, row)`.
    pub fn click_cell(&mut self, col: isize, row: isize) -> ClickReport {
        let was_complete = self.puzzle.completed_status();
        let outcome = self.puzzle.move_tile(col, row);
        if outcome.is_moved() {
            self.moves += 1;
        }
        let cleared = !was_complete && self.puzzle.completed_status();
        if cleared {
            info!("session cleared in {} moves", self.moves);
        }
        ClickReport { outcome, cleared }
    }
}
