//! Candidate move generation: the squares a single piece could move to, not
//! yet filtered for leaving its own king in check.
//!
//! The generator only reads the board through [`Occupancy`] and takes the
//! square of the moving piece as an explicit input. Sliding pieces (bishop,
//! rook, queen) share [`sliding_moves`] parameterized by their direction set,
//! pawns have their own rules in [`pawn_moves`].

use anyhow::bail;

use crate::chess::core::{
    Direction,
    Piece,
    PieceKind,
    Player,
    Square,
    BISHOP_DIRECTIONS,
    BOARD_WIDTH,
    QUEEN_DIRECTIONS,
    ROOK_DIRECTIONS,
};

/// Read-only view of the board that move generation consumes.
pub trait Occupancy {
    /// Returns true if the square lies within the board.
    fn in_board(&self, square: Square) -> bool;

    /// The piece occupying given square, if any.
    fn get_piece(&self, square: Square) -> Option<&Piece>;

    #[allow(missing_docs)]
    fn is_square_empty(&self, square: Square) -> bool {
        self.get_piece(square).is_none()
    }

    /// Owner of the piece occupying given square, if any.
    fn square_controlled_by(&self, square: Square) -> Option<Player> {
        self.get_piece(square).map(|piece| piece.owner)
    }
}

/// Produces the candidate destinations of `piece` standing on `square`.
///
/// Every returned square is on the board, appears at most once and is never
/// occupied by a piece of the same owner. The order is stable: sliding pieces
/// emit squares direction by direction (in the order of [`ROOK_DIRECTIONS`],
/// [`BISHOP_DIRECTIONS`] and [`QUEEN_DIRECTIONS`]) and closest first, pawns emit forward
/// moves before captures.
///
/// # Errors
///
/// Knight and king move generation is not implemented: asking for their moves
/// is an error rather than an empty list, which would be indistinguishable
/// from "no legal moves".
pub fn available_moves(
    piece: &Piece,
    square: Square,
    board: &impl Occupancy,
) -> anyhow::Result<Vec<Square>> {
    let moves = match piece.kind {
        PieceKind::Pawn => pawn_moves(piece.owner, piece.moves_made(), square, board),
        PieceKind::Bishop => sliding_moves(piece.owner, square, &BISHOP_DIRECTIONS, board),
        PieceKind::Rook => sliding_moves(piece.owner, square, &ROOK_DIRECTIONS, board),
        PieceKind::Queen => sliding_moves(piece.owner, square, &QUEEN_DIRECTIONS, board),
        PieceKind::Knight => bail!("knight move generation is not implemented"),
        PieceKind::King => bail!("king move generation is not implemented"),
    };
    log::trace!("{piece} on {square}: {} candidate moves", moves.len());
    Ok(moves)
}

/// Walks outward from `from` along each direction until the edge of the board
/// or the first occupied square. The first occupied square is included only
/// when it belongs to the opponent.
pub fn sliding_moves(
    owner: Player,
    from: Square,
    directions: &[Direction],
    board: &impl Occupancy,
) -> Vec<Square> {
    // A queen in the center of an empty board reaches 27 squares.
    let mut moves = Vec::with_capacity(27);
    for &direction in directions {
        for distance in 1..BOARD_WIDTH {
            let target = from.offset(direction, distance);
            if !board.in_board(target) {
                break;
            }
            match board.square_controlled_by(target) {
                None => moves.push(target),
                Some(player) if player == owner => break,
                Some(_) => {
                    moves.push(target);
                    break;
                },
            }
        }
    }
    moves
}

/// Pawn rules:
///
/// - One square forward if it is empty.
/// - Two squares forward if the pawn has never moved and both squares are
///   empty.
/// - One square diagonally forward (either side) only to capture an opponent
///   piece other than the king.
///
/// Pawns of [`Player::White`] advance towards higher rows, pawns of
/// [`Player::Black`] towards lower rows.
pub fn pawn_moves(
    owner: Player,
    moves_made: u32,
    from: Square,
    board: &impl Occupancy,
) -> Vec<Square> {
    let forward = owner.push_direction();
    let mut moves = Vec::with_capacity(4);
    let one_forward = from.offset(forward, 1);
    if board.in_board(one_forward) && board.is_square_empty(one_forward) {
        moves.push(one_forward);
        let two_forward = from.offset(forward, 2);
        if moves_made == 0 && board.in_board(two_forward) && board.is_square_empty(two_forward) {
            moves.push(two_forward);
        }
    }
    for side in [Direction::LEFT, Direction::RIGHT] {
        let target = one_forward.offset(side, 1);
        if !board.in_board(target) {
            continue;
        }
        // Kings are never captured: check is handled by legality filtering
        // which lives outside of candidate generation.
        if let Some(victim) = board.get_piece(target) {
            if victim.owner == owner.opponent() && victim.kind != PieceKind::King {
                moves.push(target);
            }
        }
    }
    moves
}
