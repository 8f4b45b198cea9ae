//! Interactive driver around a [`Board`]: reads commands line by line, applies
//! them and reports the results.
//!
//! [`Session::run`] is the "main loop" of the binary. It is generic over the
//! input and output streams so that it can be driven from tests.

use std::io::{BufRead, Write};

use anyhow::Context;
use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::{Piece, PieceKind, Player, Square};
use crate::session::command::Command;

mod command;

/// Connects a [`Board`] with a stream of commands and a stream of responses.
pub struct Session<'a, R: BufRead, W: Write> {
    board: Board,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a new session with an empty board and provided I/O.
    #[must_use]
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            board: Board::empty(),
            input,
            output,
        }
    }

    /// Continuously reads the input stream and executes commands until `quit`
    /// is sent or the input is exhausted.
    ///
    /// A command that can not be executed (e.g. asking for the moves of an
    /// empty square) is reported on the output and does not end the session.
    ///
    /// # Errors
    ///
    /// Reading the input or writing the output failed.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut line = String::new();
            if self
                .input
                .read_line(&mut line)
                .context("reading session input")?
                == 0
            {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            let command = Command::parse(&line);
            if command == Command::Quit {
                break;
            }
            if let Err(e) = self.execute(command) {
                writeln!(self.output, "error: {e:#}")?;
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::NewBoard => self.board = Board::empty(),
            Command::StartingBoard => self.board = Board::starting(),
            Command::Put {
                square,
                owner,
                kind,
            } => self.handle_put(square, owner, kind)?,
            Command::Moves { square } => self.handle_moves(square)?,
            Command::Move { from, to } => self.handle_move(from, to)?,
            Command::Turn => writeln!(self.output, "turn: {}", self.board.current_player())?,
            Command::Display => write!(self.output, "{}", self.board)?,
            Command::Quit => {},
            Command::Unknown(command) => {
                log::warn!("unsupported command: {command}");
                writeln!(self.output, "unsupported command: {command}")?;
            },
        }
        Ok(())
    }

    fn handle_put(&mut self, square: Square, owner: Player, kind: PieceKind) -> anyhow::Result<()> {
        let piece = Piece::new(owner, kind);
        let _ = self.board.set_piece(square, piece)?;
        writeln!(self.output, "placed {piece} at {square}")?;
        Ok(())
    }

    fn handle_moves(&mut self, square: Square) -> anyhow::Result<()> {
        let Some(id) = self.board.piece_at(square) else {
            anyhow::bail!("there is no piece on {square}");
        };
        let moves = self.board.available_moves(id)?;
        if moves.is_empty() {
            writeln!(self.output, "moves: none")?;
        } else {
            writeln!(self.output, "moves: {}", moves.iter().join(" "))?;
        }
        Ok(())
    }

    fn handle_move(&mut self, from: Square, to: Square) -> anyhow::Result<()> {
        let Some(id) = self.board.piece_at(from) else {
            anyhow::bail!("there is no piece on {from}");
        };
        match self.board.move_to(id, to)? {
            Some(captured) => writeln!(self.output, "moved {from} -> {to}, captured {captured}")?,
            None => writeln!(self.output, "moved {from} -> {to}")?,
        }
        Ok(())
    }
}
