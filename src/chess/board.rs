//! Square-centric ("mailbox") board: each square holds at most one piece and
//! the board owns the association between pieces and squares.
//!
//! Pieces are stored in an arena and addressed by [`PieceId`]. A captured
//! piece stays in the arena (so its record can still be inspected) but is no
//! longer found on any square.

use std::fmt::{self, Write};

use anyhow::{bail, Context};

use crate::chess::core::{Piece, PieceId, PieceKind, Player, Square, BOARD_SIZE, BOARD_WIDTH};
use crate::chess::movegen::{self, Occupancy};

const BACK_RANK: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Pieces placed on the 8×8 grid and the player to move.
#[derive(Clone)]
pub struct Board {
    squares: [Option<PieceId>; BOARD_SIZE],
    pieces: Vec<Piece>,
    current_player: Player,
}

impl Board {
    /// Creates a board without any pieces, White to move.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE],
            pieces: Vec::new(),
            current_player: Player::White,
        }
    }

    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use chessington::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "rnbqkbnr\npppppppp\n........\n........\n........\n........\nPPPPPPPP\nRNBQKBNR\n"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (column, kind) in (0..BOARD_WIDTH).zip(BACK_RANK) {
            for (row, owner, kind) in [
                (0, Player::White, kind),
                (1, Player::White, PieceKind::Pawn),
                (BOARD_WIDTH - 2, Player::Black, PieceKind::Pawn),
                (BOARD_WIDTH - 1, Player::Black, kind),
            ] {
                if let Some(index) = Square::at(row, column).index() {
                    board.squares[index] = Some(PieceId(board.pieces.len()));
                    board.pieces.push(Piece::new(owner, kind));
                }
            }
        }
        board
    }

    fn checked_index(square: Square) -> anyhow::Result<usize> {
        match square.index() {
            Some(index) => Ok(index),
            None => bail!("square {square} is outside the board"),
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    #[allow(missing_docs)]
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Puts a new piece on an empty square and returns its identity.
    ///
    /// # Errors
    ///
    /// The square has to be on the board and empty.
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> anyhow::Result<PieceId> {
        let index = Self::checked_index(square)?;
        if let Some(occupant) = self.squares[index] {
            bail!(
                "square {square} is already occupied by {}",
                self.pieces[occupant.0]
            );
        }
        let id = PieceId(self.pieces.len());
        self.pieces.push(piece);
        self.squares[index] = Some(id);
        Ok(id)
    }

    /// The record of a piece, including pieces that have been captured.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// Identity of the piece standing on the square.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        square.index().and_then(|index| self.squares[index])
    }

    /// Locates the piece on the board.
    ///
    /// # Errors
    ///
    /// The piece is not on the board: it has been captured or it was placed on
    /// another board.
    pub fn find_piece(&self, id: PieceId) -> anyhow::Result<Square> {
        match self.pieces().find(|&(_, candidate, _)| candidate == id) {
            Some((square, _, _)) => Ok(square),
            None => bail!("piece {id} is not on the board"),
        }
    }

    /// Iterates over occupied squares row by row, starting from (0, 0).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PieceId, &Piece)> + '_ {
        (0..BOARD_WIDTH)
            .flat_map(|row| (0..BOARD_WIDTH).map(move |column| Square::at(row, column)))
            .filter_map(move |square| {
                self.piece_at(square)
                    .map(|id| (square, id, &self.pieces[id.0]))
            })
    }

    /// Relocates the piece standing on `from` to `to` and passes the turn to
    /// the opponent of its owner. Returns the captured piece, if `to` was
    /// occupied.
    ///
    /// This does not validate the move against the rules and does not update
    /// the move counter: see [`Board::move_to`].
    ///
    /// # Errors
    ///
    /// Both squares have to be on the board, be different and `from` has to
    /// be occupied.
    pub fn move_piece(&mut self, from: Square, to: Square) -> anyhow::Result<Option<Piece>> {
        let (from_index, to_index) = (Self::checked_index(from)?, Self::checked_index(to)?);
        if from_index == to_index {
            bail!("can not move a piece from {from} onto itself");
        }
        let Some(moving) = self.squares[from_index] else {
            bail!("there is no piece on {from}");
        };
        let owner = self.pieces[moving.0].owner;
        if owner != self.current_player {
            log::warn!(
                "{} on {from} moves out of turn: {} to move",
                self.pieces[moving.0],
                self.current_player
            );
        }
        let captured = self.squares[to_index].map(|victim| self.pieces[victim.0]);
        self.squares[from_index] = None;
        self.squares[to_index] = Some(moving);
        match captured {
            Some(victim) => log::debug!("{} {from} -> {to} captures {victim}", self.pieces[moving.0]),
            None => log::debug!("{} {from} -> {to}", self.pieces[moving.0]),
        }
        self.current_player = owner.opponent();
        Ok(captured)
    }

    /// Candidate destinations of the piece, not filtered for check safety.
    ///
    /// # Errors
    ///
    /// Fails if the piece is not on the board or its kind has no move
    /// generation implemented.
    pub fn available_moves(&self, id: PieceId) -> anyhow::Result<Vec<Square>> {
        let square = self.find_piece(id)?;
        let piece = &self.pieces[id.0];
        movegen::available_moves(piece, square, self)
            .with_context(|| format!("generating moves for {piece} on {square}"))
    }

    /// Moves the piece to `destination` and records the move in its counter.
    ///
    /// # Errors
    ///
    /// Fails if the piece is not on the board or `destination` is outside of
    /// it. The move counter is left untouched in that case.
    pub fn move_to(&mut self, id: PieceId, destination: Square) -> anyhow::Result<Option<Piece>> {
        let from = self.find_piece(id)?;
        let captured = self.move_piece(from, destination)?;
        self.pieces[id.0].record_move();
        Ok(captured)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Occupancy for Board {
    fn in_board(&self, square: Square) -> bool {
        square.is_on_board()
    }

    fn get_piece(&self, square: Square) -> Option<&Piece> {
        self.piece_at(square).map(|id| &self.pieces[id.0])
    }
}

impl fmt::Display for Board {
    /// Dumps the board in a simple format: '.' for empty square, uppercase
    /// letter for White pieces and lowercase for Black. The top row is Black's
    /// back rank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_WIDTH).rev() {
            for column in 0..BOARD_WIDTH {
                match self.get_piece(Square::at(row, column)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")?;
        writeln!(f, "Player to move: {:?}", &self.current_player)?;
        Ok(())
    }
}
