use log::{debug, info, trace};
use rand::{thread_rng, Rng};
use std::fmt;

use crate::error::PuzzleError;

/// One orthogonal step of the blank (or of a neighbor scan).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed scan order used both by the shuffle draw and by neighbor lookups.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` offset of this direction.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle of a board. `Frozen` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Frozen,
}

/// What happened when a cell was addressed by [`Puzzle::move_tile`].
///
/// Only `Moved` changes the board; every other variant is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The tile at `from` slid into the blank at `to`. Both are `(row, col)`.
    Moved {
        from: (usize, usize),
        to: (usize, usize),
    },
    /// The addressed cell is the blank itself.
    Blank,
    /// The addressed tile does not touch the blank.
    NotAdjacent,
    /// The coordinates lie outside the board.
    OutOfBounds,
    /// The puzzle is already solved and accepts no more moves.
    Frozen,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// An N×N sliding puzzle.
///
/// Tiles are stored row-major as labels `0..N²`; the highest label is the
/// blank. The board is solved when every label sits at its own index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    size: usize,
    tiles: Vec<u32>,
    blank_row: usize,
    blank_col: usize,
    status: Status,
}

// Number of cells on a `size`-wide board, which must also fit the `u32` labels.
fn tile_count(size: usize) -> Result<u32, PuzzleError> {
    if size < 2 {
        return Err(PuzzleError::BoardTooSmall { size });
    }
    size.checked_mul(size)
        .and_then(|count| u32::try_from(count).ok())
        .ok_or(PuzzleError::BoardTooLarge { size })
}

impl Puzzle {
    /// Creates a shuffled puzzle using the thread-local RNG.
    ///
    /// The returned board is guaranteed not to be solved.
    pub fn new(size: usize, shuffle_moves: usize) -> Result<Self, PuzzleError> {
        Self::with_rng(size, shuffle_moves, &mut thread_rng())
    }

    /// Creates a shuffled puzzle drawing directions from `rng`.
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use sliding_puzzle::Puzzle;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let puzzle = Puzzle::with_rng(4, 15, &mut rng).unwrap();
    /// assert!(!puzzle.is_complete());
    /// ```
    pub fn with_rng<R: Rng + ?Sized>(
        size: usize,
        shuffle_moves: usize,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let mut puzzle = Self::solved(size)?;
        if shuffle_moves == 0 {
            return Err(PuzzleError::NoShuffle);
        }

        let mut attempts = 1;
        puzzle.shuffle(shuffle_moves, rng);
        while puzzle.is_complete() {
            puzzle.reset();
            puzzle.shuffle(shuffle_moves, rng);
            attempts += 1;
        }

        debug!(
            "shuffled {}x{} board with {} moves after {} attempt(s)",
            size, size, shuffle_moves, attempts
        );
        Ok(puzzle)
    }

    /// The solved arrangement, unshuffled.
    pub fn solved(size: usize) -> Result<Self, PuzzleError> {
        let count = tile_count(size)?;
        Ok(Self {
            size,
            tiles: (0..count).collect(),
            blank_row: size - 1,
            blank_col: size - 1,
            status: Status::Active,
        })
    }

    /// Adopts an explicit row-major arrangement.
    ///
    /// The board starts `Active` even if `tiles` is already solved.
    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> Result<Self, PuzzleError> {
        let count = tile_count(size)? as usize;
        if tiles.len() != count {
            return Err(PuzzleError::InvalidTiles {
                reason: format!("expected {} tiles, got {}", count, tiles.len()),
            });
        }

        let mut seen = vec![false; count];
        for &label in &tiles {
            let label = label as usize;
            if label >= count {
                return Err(PuzzleError::InvalidTiles {
                    reason: format!("label {} is out of range", label),
                });
            }
            if seen[label] {
                return Err(PuzzleError::InvalidTiles {
                    reason: format!("label {} appears more than once", label),
                });
            }
            seen[label] = true;
        }

        let blank = (count - 1) as u32;
        let blank_index = tiles
            .iter()
            .position(|&label| label == blank)
            .ok_or_else(|| PuzzleError::InvalidTiles {
                reason: "no blank tile".to_string(),
            })?;

        Ok(Self {
            size,
            tiles,
            blank_row: blank_index / size,
            blank_col: blank_index % size,
            status: Status::Active,
        })
    }

    fn reset(&mut self) {
        for (index, label) in self.tiles.iter_mut().enumerate() {
            *label = index as u32;
        }
        self.blank_row = self.size - 1;
        self.blank_col = self.size - 1;
        self.status = Status::Active;
    }

    // Random walk of the blank. Out-of-bounds draws are thrown away and
    // redrawn, so every step is legal; cells on edges and corners see a
    // skewed mix of directions as a result.
    fn shuffle<R: Rng + ?Sized>(&mut self, moves: usize, rng: &mut R) {
        for _ in 0..moves {
            loop {
                let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
                if self.step_blank(direction) {
                    break;
                }
            }
        }
    }

    /// Slides the blank one cell in `direction`.
    ///
    /// Returns `false` without touching the board if that would leave the
    /// grid or if the puzzle is frozen. Never latches completion.
    pub fn step_blank(&mut self, direction: Direction) -> bool {
        if self.status == Status::Frozen {
            return false;
        }

        match self.neighbor(self.blank_row, self.blank_col, direction) {
            Some((row, col)) => {
                let blank = self.index(self.blank_row, self.blank_col);
                let target = self.index(row, col);
                self.tiles.swap(blank, target);
                self.blank_row = row;
                self.blank_col = col;
                true
            }
            None => false,
        }
    }

    /// Addresses the cell at `(col, row)` as a player click.
    ///
    /// If the cell touches the blank, its tile slides into the blank. The
    /// first move that leaves the board solved freezes the puzzle.
    pub fn move_tile(&mut self, col: isize, row: isize) -> MoveOutcome {
        if self.status == Status::Frozen {
            return MoveOutcome::Frozen;
        }

        let (col, row) = match (usize::try_from(col), usize::try_from(row)) {
            (Ok(col), Ok(row)) if col < self.size && row < self.size => (col, row),
            _ => {
                trace!("ignoring click outside the board at ({}, {})", col, row);
                return MoveOutcome::OutOfBounds;
            }
        };

        let clicked = self.index(row, col);
        if self.tiles[clicked] == self.blank_label() {
            return MoveOutcome::Blank;
        }

        for direction in Direction::ALL {
            let Some((dest_row, dest_col)) = self.neighbor(row, col, direction) else {
                continue;
            };
            let dest = self.index(dest_row, dest_col);
            if self.tiles[dest] != self.blank_label() {
                continue;
            }

            self.tiles.swap(clicked, dest);
            self.blank_row = row;
            self.blank_col = col;
            trace!(
                "tile {} slid {} from ({}, {})",
                self.tiles[dest],
                direction,
                row,
                col
            );

            if self.is_complete() {
                self.status = Status::Frozen;
                info!("{}x{} puzzle solved", self.size, self.size);
            }
            return MoveOutcome::Moved {
                from: (row, col),
                to: (dest_row, dest_col),
            };
        }

        MoveOutcome::NotAdjacent
    }

    /// True when the labels read row-major are exactly `0, 1, …, N²-1`.
    pub fn is_complete(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &label)| label as usize == index)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Label of the blank, always `N² - 1`.
    pub fn blank_label(&self) -> u32 {
        (self.size * self.size - 1) as u32
    }

    /// Label at `(row, col)`, or `None` outside the board.
    pub fn tile(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.size && col < self.size {
            Some(self.tiles[self.index(row, col)])
        } else {
            None
        }
    }

    /// All labels in row-major order.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// `(row, col)` of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn completed_status(&self) -> bool {
        self.status == Status::Frozen
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (d_row, d_col) = direction.as_offset();
        let row = row.checked_add_signed(d_row)?;
        let col = col.checked_add_signed(d_col)?;
        if row < self.size && col < self.size {
            Some((row, col))
        } else {
            None
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.blank_label().to_string().len();
        for row in self.tiles.chunks(self.size) {
            for &label in row {
                if label == self.blank_label() {
                    write!(f, "{:>width$} ", "", width = width)?;
                } else {
                    write!(f, "{:>width$} ", label, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
