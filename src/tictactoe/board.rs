//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board side length
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A candidate move: a (row, column) coordinate, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable Tic-Tac-Toe position.
///
/// The board stores cells only; whose turn it is is always derived from the
/// mark counts (see [`crate::tictactoe::rules::current_player`]), so a board
/// can never disagree with its own turn order.
///
/// This type implements `Copy` for efficiency since it's only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create the initial empty board
    pub fn initial() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the cell at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfRange`] if either coordinate is >= 3.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, crate::Error> {
        if row >= SIZE || col >= SIZE {
            return Err(crate::Error::OutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Unchecked cell access for in-crate loops over 0..SIZE indices
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Return a new board with the target cell set to `mark`.
    ///
    /// Pure copy-on-write; the receiver is never mutated. Occupancy is not
    /// checked here: [`crate::tictactoe::rules::apply_action`] validates cell
    /// emptiness before calling this constructor.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfRange`] if either coordinate is >= 3.
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, row: usize, col: usize, mark: Cell) -> Result<Board, crate::Error> {
        if row >= SIZE || col >= SIZE {
            return Err(crate::Error::OutOfRange { row, col });
        }
        let mut next = *self;
        next.cells[row][col] = mark;
        Ok(next)
    }

    /// Count the X and O marks on the board
    pub fn mark_counts(&self) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::X => x += 1,
                    Cell::O => o += 1,
                    Cell::Empty => {}
                }
            }
        }
        (x, o)
    }

    /// Count the empty cells on the board
    pub fn empty_count(&self) -> usize {
        let (x, o) = self.mark_counts();
        SIZE * SIZE - x - o
    }

    /// Check whether every cell is occupied
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Create a board from a 9-character row-major string.
    ///
    /// Whitespace is filtered out; `.` marks an empty cell, `X`/`x` and
    /// `O`/`o`/`0` mark the players.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not contain exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The mark counts violate the legal-play invariant (X count must equal
    ///   the O count or exceed it by exactly one)
    pub fn from_string(s: &str) -> Result<Board, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / SIZE][i % SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let board = Board { cells };
        let (x, o) = board.mark_counts();
        if x != o && x != o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: x,
                o_count: o,
            });
        }

        Ok(board)
    }

    /// Get the canonical 9-character row-major encoding for use as a key
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flat_map(|row| row.iter().map(|&c| c.to_char()))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
