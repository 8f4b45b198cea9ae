//! Chess rules engine: places pieces on a board and answers which squares each
//! piece could move to.
//!
//! Move generation lives in [`chess::movegen`] and only reads the board
//! through [`chess::movegen::Occupancy`]. [`chess::board::Board`] is the
//! concrete board that owns the pieces and their positions.
//!
//! ```
//! use chessington::chess::board::Board;
//! use chessington::chess::core::{Piece, PieceKind, Player, Square};
//!
//! let mut board = Board::empty();
//! let pawn = board
//!     .set_piece(Square::at(1, 4), Piece::new(Player::White, PieceKind::Pawn))
//!     .unwrap();
//! assert_eq!(
//!     board.available_moves(pawn).unwrap(),
//!     vec![Square::at(2, 4), Square::at(3, 4)]
//! );
//! ```

pub mod chess;

mod session;
pub use session::Session;
use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the engine name and version on startup.
pub fn print_engine_info() {
    println!("Chessington {}", version());
}

/// Prints the build type and whether the build is clean on startup.
pub fn print_binary_info() {
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
