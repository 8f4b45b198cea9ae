//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::ops::Not;

use anyhow::bail;

/// Number of squares along each side of the board.
pub const BOARD_WIDTH: i8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_WIDTH as usize);

/// A (row, column) coordinate on the board grid.
///
/// Rows grow towards Black's side of the board: White starts on rows 0 and 1,
/// Black on rows 6 and 7. Columns grow from left to right from White's
/// perspective.
///
/// A square is a plain value and can point outside of the board: move
/// generation first computes a target and only then checks whether it is
/// within bounds.
///
/// ```
/// use chessington::chess::core::Square;
///
/// assert_eq!(Square::at(1, 4), Square::at(1, 4));
/// assert_ne!(Square::at(1, 4), Square::at(4, 1));
/// assert!(Square::at(7, 7).is_on_board());
/// assert!(!Square::at(8, 0).is_on_board());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: i8,
    column: i8,
}

impl Square {
    /// Creates a square at the given coordinates. The coordinates are not
    /// validated: see [`Square::is_on_board`].
    #[must_use]
    pub const fn at(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn column(self) -> i8 {
        self.column
    }

    /// Returns true if both coordinates are within `0..BOARD_WIDTH`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        0 <= self.row && self.row < BOARD_WIDTH && 0 <= self.column && self.column < BOARD_WIDTH
    }

    /// Position of the square in the row-major mailbox, [`None`] for squares
    /// outside of the board.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        if !self.is_on_board() {
            return None;
        }
        // Both coordinates are non-negative at this point.
        let (row, column) = (self.row.unsigned_abs() as usize, self.column.unsigned_abs() as usize);
        Some(row * BOARD_WIDTH as usize + column)
    }

    /// The square `distance` steps away in the given `direction`.
    ///
    /// ```
    /// use chessington::chess::core::{Direction, Square};
    ///
    /// assert_eq!(Square::at(0, 0).offset(Direction::UP_RIGHT, 3), Square::at(3, 3));
    /// assert_eq!(Square::at(0, 0).offset(Direction::DOWN, 1), Square::at(-1, 0));
    /// ```
    #[must_use]
    pub const fn offset(self, direction: Direction, distance: i8) -> Self {
        Self {
            row: self.row + direction.row * distance,
            column: self.column + direction.column * distance,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Unit vector on the board.
///
/// "Up" means increasing row (towards Black), "right" means increasing column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Direction {
    row: i8,
    column: i8,
}

impl Direction {
    #[allow(missing_docs)]
    pub const UP: Self = Self::new(1, 0);
    #[allow(missing_docs)]
    pub const DOWN: Self = Self::new(-1, 0);
    #[allow(missing_docs)]
    pub const RIGHT: Self = Self::new(0, 1);
    #[allow(missing_docs)]
    pub const LEFT: Self = Self::new(0, -1);
    #[allow(missing_docs)]
    pub const UP_RIGHT: Self = Self::new(1, 1);
    #[allow(missing_docs)]
    pub const DOWN_RIGHT: Self = Self::new(-1, 1);
    #[allow(missing_docs)]
    pub const UP_LEFT: Self = Self::new(1, -1);
    #[allow(missing_docs)]
    pub const DOWN_LEFT: Self = Self::new(-1, -1);

    const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn column(self) -> i8 {
        self.column
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(-self.row, -self.column)
    }
}

/// Directions a rook slides in.
pub const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::UP,
    Direction::RIGHT,
    Direction::DOWN,
    Direction::LEFT,
];

/// Directions a bishop slides in.
pub const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::UP_RIGHT,
    Direction::DOWN_RIGHT,
    Direction::UP_LEFT,
    Direction::DOWN_LEFT,
];

/// Directions a queen slides in: rook directions followed by bishop directions.
pub const QUEEN_DIRECTIONS: [Direction; 8] = [
    Direction::UP,
    Direction::RIGHT,
    Direction::DOWN,
    Direction::LEFT,
    Direction::UP_RIGHT,
    Direction::DOWN_RIGHT,
    Direction::UP_LEFT,
    Direction::DOWN_LEFT,
];

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The direction this player's pawns advance in.
    #[must_use]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::UP,
            Self::Black => Direction::DOWN,
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("player should be 'w' or 'b', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl TryFrom<&str> for PieceKind {
    type Error = anyhow::Error;

    /// Accepts either the full lowercase name or the single-letter symbol.
    fn try_from(kind: &str) -> anyhow::Result<Self> {
        match kind {
            "pawn" | "p" => Ok(Self::Pawn),
            "knight" | "n" => Ok(Self::Knight),
            "bishop" | "b" => Ok(Self::Bishop),
            "rook" | "r" => Ok(Self::Rook),
            "queen" | "q" => Ok(Self::Queen),
            "king" | "k" => Ok(Self::King),
            _ => bail!("unknown piece kind '{kind}'"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        })
    }
}

/// A specific piece owned by a player.
///
/// The piece does not know where it stands: the [`crate::chess::board::Board`]
/// owns the association between pieces and squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
    moves_made: u32,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self {
            owner,
            kind,
            moves_made: 0,
        }
    }

    /// Number of completed relocations of this piece.
    #[must_use]
    pub const fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub(super) fn record_move(&mut self) {
        self.moves_made += 1;
    }
}

impl fmt::Display for Piece {
    /// Uppercase symbol for White pieces, lowercase for Black.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.to_string();
        match self.owner {
            Player::White => f.write_str(&symbol.to_uppercase()),
            Player::Black => f.write_str(&symbol),
        }
    }
}

/// Identity of a piece instance placed on a [`crate::chess::board::Board`].
///
/// Two pieces of the same owner and kind are still different pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub(super) usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
