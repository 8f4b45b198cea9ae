//! Commands understood by [`super::Session`].
//!
//! Squares are given as two integers: `row column`. This is deliberately not
//! chess notation.

use crate::chess::core::{PieceKind, Player, Square};

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    /// Replace the board with an empty one.
    NewBoard,
    /// Replace the board with the standard starting layout.
    StartingBoard,
    Put {
        square: Square,
        owner: Player,
        kind: PieceKind,
    },
    Moves {
        square: Square,
    },
    Move {
        from: Square,
        to: Square,
    },
    Turn,
    Display,
    Quit,
    Unknown(String),
}

fn parse_square(row: &str, column: &str) -> Option<Square> {
    Some(Square::at(row.parse().ok()?, column.parse().ok()?))
}

fn parse_put(parts: &[&str]) -> Option<Command> {
    match parts {
        [_, row, column, owner, kind] => Some(Command::Put {
            square: parse_square(row, column)?,
            owner: Player::try_from(*owner).ok()?,
            kind: PieceKind::try_from(*kind).ok()?,
        }),
        _ => None,
    }
}

fn parse_moves(parts: &[&str]) -> Option<Command> {
    match parts {
        [_, row, column] => Some(Command::Moves {
            square: parse_square(row, column)?,
        }),
        _ => None,
    }
}

fn parse_move(parts: &[&str]) -> Option<Command> {
    match parts {
        [_, from_row, from_column, to_row, to_column] => Some(Command::Move {
            from: parse_square(from_row, from_column)?,
            to: parse_square(to_row, to_column)?,
        }),
        _ => None,
    }
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();

        let command = match parts.first() {
            None => None,
            Some(&"new") => Some(Self::NewBoard),
            Some(&"start") => Some(Self::StartingBoard),
            Some(&"put") => parse_put(&parts),
            Some(&"moves") => parse_moves(&parts),
            Some(&"move") => parse_move(&parts),
            Some(&"turn") => Some(Self::Turn),
            Some(&"d") => Some(Self::Display),
            Some(&"quit") => Some(Self::Quit),
            Some(_) => None,
        };
        command.unwrap_or_else(|| Self::Unknown(input.trim().to_string()))
    }
}
