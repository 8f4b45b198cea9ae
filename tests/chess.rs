use chessington::chess::board::Board;
use chessington::chess::core::{Piece, PieceId, PieceKind, Player, Square};
use pretty_assertions::assert_eq;

fn place(board: &mut Board, row: i8, column: i8, owner: Player, kind: PieceKind) -> PieceId {
    board
        .set_piece(Square::at(row, column), Piece::new(owner, kind))
        .expect("placing a piece on an empty square")
}

fn pawn_on_empty_board(owner: Player, row: i8, column: i8) -> (Board, PieceId) {
    let mut board = Board::empty();
    let pawn = place(&mut board, row, column, owner, PieceKind::Pawn);
    (board, pawn)
}

#[test]
fn unmoved_pawns_advance_one_or_two_squares() {
    let (board, pawn) = pawn_on_empty_board(Player::White, 1, 4);
    let moves = board.available_moves(pawn).unwrap();
    assert_eq!(moves, vec![Square::at(2, 4), Square::at(3, 4)]);
    assert!(!moves.contains(&Square::at(4, 4)));

    let (board, pawn) = pawn_on_empty_board(Player::Black, 6, 4);
    assert_eq!(
        board.available_moves(pawn).unwrap(),
        vec![Square::at(5, 4), Square::at(4, 4)]
    );
}

#[test]
fn moved_pawns_never_regain_double_step() {
    for (owner, start, path) in [
        (Player::White, Square::at(1, 4), [2, 3, 4]),
        (Player::Black, Square::at(6, 4), [5, 4, 3]),
    ] {
        let mut board = Board::empty();
        let pawn = board
            .set_piece(start, Piece::new(owner, PieceKind::Pawn))
            .unwrap();
        for row in path {
            let _ = board.move_to(pawn, Square::at(row, 4)).unwrap();
            let moves = board.available_moves(pawn).unwrap();
            assert_eq!(
                moves,
                vec![Square::at(row, 4).offset(owner.push_direction(), 1)],
                "{owner} pawn on row {row}"
            );
        }
        assert_eq!(board.piece(pawn).unwrap().moves_made(), 3);
    }
}

#[test]
fn blocked_pawns() {
    // Directly obstructed: no moves at all.
    for (owner, obstruction) in [(Player::White, 5), (Player::Black, 3)] {
        let (mut board, pawn) = pawn_on_empty_board(owner, 4, 4);
        let _ = place(&mut board, obstruction, 4, owner.opponent(), PieceKind::Pawn);
        assert_eq!(board.available_moves(pawn).unwrap(), Vec::<Square>::new());
    }
    // Obstructed two squares ahead: only the single step remains.
    let (mut board, pawn) = pawn_on_empty_board(Player::White, 1, 4);
    let _ = place(&mut board, 3, 4, Player::Black, PieceKind::Rook);
    assert_eq!(board.available_moves(pawn).unwrap(), vec![Square::at(2, 4)]);

    let (mut board, pawn) = pawn_on_empty_board(Player::Black, 6, 4);
    let _ = place(&mut board, 5, 4, Player::Black, PieceKind::Bishop);
    assert_eq!(board.available_moves(pawn).unwrap(), Vec::<Square>::new());
}

#[test]
fn pawns_at_the_far_edge_can_not_move() {
    let (board, pawn) = pawn_on_empty_board(Player::White, 7, 4);
    assert_eq!(board.available_moves(pawn).unwrap(), Vec::<Square>::new());
    let (board, pawn) = pawn_on_empty_board(Player::Black, 0, 4);
    assert_eq!(board.available_moves(pawn).unwrap(), Vec::<Square>::new());
}

#[test]
fn pawns_capture_diagonally() {
    let (mut board, pawn) = pawn_on_empty_board(Player::White, 3, 3);
    let _ = place(&mut board, 4, 4, Player::Black, PieceKind::Pawn);
    let _ = place(&mut board, 4, 2, Player::Black, PieceKind::Pawn);
    let moves = board.available_moves(pawn).unwrap();
    assert!(moves.contains(&Square::at(4, 4)));
    assert!(moves.contains(&Square::at(4, 2)));
    assert_eq!(moves.len(), 4);

    let (mut board, pawn) = pawn_on_empty_board(Player::Black, 3, 4);
    let _ = place(&mut board, 2, 5, Player::White, PieceKind::Knight);
    let _ = place(&mut board, 2, 3, Player::White, PieceKind::Queen);
    let moves = board.available_moves(pawn).unwrap();
    assert_eq!(
        moves,
        vec![
            Square::at(2, 4),
            Square::at(1, 4),
            Square::at(2, 3),
            Square::at(2, 5)
        ]
    );
}

#[test]
fn pawns_do_not_move_diagonally_except_to_capture() {
    let (mut board, pawn) = pawn_on_empty_board(Player::White, 3, 4);
    let _ = place(&mut board, 4, 5, Player::White, PieceKind::Pawn);
    let moves = board.available_moves(pawn).unwrap();
    assert!(!moves.contains(&Square::at(4, 3)));
    assert!(!moves.contains(&Square::at(4, 5)));

    let (mut board, pawn) = pawn_on_empty_board(Player::Black, 3, 4);
    let _ = place(&mut board, 2, 5, Player::Black, PieceKind::Pawn);
    let moves = board.available_moves(pawn).unwrap();
    assert!(!moves.contains(&Square::at(2, 3)));
    assert!(!moves.contains(&Square::at(2, 5)));
}

#[test]
fn pawns_do_not_capture_kings() {
    let (mut board, pawn) = pawn_on_empty_board(Player::White, 3, 3);
    let _ = place(&mut board, 4, 2, Player::Black, PieceKind::King);
    let _ = place(&mut board, 4, 4, Player::White, PieceKind::King);
    assert_eq!(
        board.available_moves(pawn).unwrap(),
        vec![Square::at(4, 3), Square::at(5, 3)]
    );
}

#[test]
fn pawns_take_pieces() {
    for (owner, from, victim) in [
        (Player::White, Square::at(3, 3), Square::at(4, 2)),
        (Player::White, Square::at(3, 3), Square::at(4, 4)),
        (Player::Black, Square::at(4, 3), Square::at(3, 4)),
        (Player::Black, Square::at(4, 3), Square::at(3, 2)),
    ] {
        let mut board = Board::empty();
        board.set_current_player(owner);
        let pawn = board
            .set_piece(from, Piece::new(owner, PieceKind::Pawn))
            .unwrap();
        let _ = board
            .set_piece(victim, Piece::new(owner.opponent(), PieceKind::Pawn))
            .unwrap();
        assert!(board.available_moves(pawn).unwrap().contains(&victim));

        let captured = board.move_to(pawn, victim).unwrap();
        assert_eq!(
            captured,
            Some(Piece::new(owner.opponent(), PieceKind::Pawn))
        );
        assert_eq!(board.piece_at(from), None);
        assert_eq!(board.piece_at(victim), Some(pawn));
        assert_eq!(board.current_player(), owner.opponent());
    }
}

#[test]
fn captured_pieces_have_no_moves() {
    let mut board = Board::empty();
    let rook = place(&mut board, 0, 0, Player::White, PieceKind::Rook);
    let victim = place(&mut board, 0, 5, Player::Black, PieceKind::Bishop);
    let _ = board.move_to(rook, Square::at(0, 5)).unwrap();
    assert_eq!(
        board.available_moves(victim).unwrap_err().to_string(),
        format!("piece {victim} is not on the board")
    );
    // The record of the captured piece survives.
    assert_eq!(
        board.piece(victim),
        Some(&Piece::new(Player::Black, PieceKind::Bishop))
    );
}

#[test]
fn turn_alternates() {
    let mut board = Board::starting();
    assert_eq!(board.current_player(), Player::White);
    let _ = board.move_piece(Square::at(1, 4), Square::at(3, 4)).unwrap();
    assert_eq!(board.current_player(), Player::Black);
    let _ = board.move_piece(Square::at(6, 4), Square::at(4, 4)).unwrap();
    assert_eq!(board.current_player(), Player::White);
    // Out of turn moves are not rejected, the turn passes to the opponent of
    // the mover.
    let _ = board.move_piece(Square::at(6, 0), Square::at(5, 0)).unwrap();
    assert_eq!(board.current_player(), Player::White);
}

#[test]
fn starting_board_pieces() {
    let board = Board::starting();
    assert_eq!(board.pieces().count(), 32);
    assert_eq!(
        board
            .pieces()
            .filter(|(_, _, piece)| piece.kind == PieceKind::Pawn)
            .count(),
        16
    );
    for (square, id, piece) in board.pieces() {
        assert_eq!(board.find_piece(id).unwrap(), square);
        assert_eq!(board.piece(id), Some(piece));
    }
    let king = board.piece_at(Square::at(7, 4)).unwrap();
    assert_eq!(
        board.piece(king),
        Some(&Piece::new(Player::Black, PieceKind::King))
    );
}

#[test]
#[should_panic(expected = "square (4, 4) is already occupied by P")]
fn two_pieces_on_one_square() {
    let (mut board, _) = pawn_on_empty_board(Player::White, 4, 4);
    let _ = place(&mut board, 4, 4, Player::Black, PieceKind::Queen);
}

#[test]
#[should_panic(expected = "square (0, -1) is outside the board")]
fn move_off_the_board() {
    let (mut board, pawn) = pawn_on_empty_board(Player::White, 0, 0);
    let _ = board.move_to(pawn, Square::at(0, -1)).unwrap();
}
