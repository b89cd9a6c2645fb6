//! Command parser for the interactive session
//!
//! One command per line, tokens separated by whitespace. Squares are in
//! algebraic notation; anything unparseable becomes `Unknown`.

use crate::board::{PieceKind, Square};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SessionCommand {
    NewGame,
    /// `position <placement> <castling>`
    Position {
        placement: String,
        castling: String,
    },
    /// `position fen <fen>`
    PositionFen(String),
    Moves(Square),
    Move {
        from: Square,
        to: Square,
    },
    Promote(PieceKind),
    Board,
    Fen,
    Status,
    Perft(u8),
    SetOption {
        name: String,
        value: Option<String>,
    },
    Quit,
    Unknown(String),
}

/// Parse a session command from a string (simple tokenizer)
pub fn parse_session_command(line: &str) -> SessionCommand {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let unknown = || SessionCommand::Unknown(trimmed.to_string());

    match parts.as_slice() {
        [] => unknown(),
        ["new"] => SessionCommand::NewGame,
        ["board"] => SessionCommand::Board,
        ["fen"] => SessionCommand::Fen,
        ["status"] => SessionCommand::Status,
        ["quit"] => SessionCommand::Quit,
        ["position", "fen", fen @ ..] if !fen.is_empty() => {
            SessionCommand::PositionFen(fen.join(" "))
        }
        ["position", placement, castling] => SessionCommand::Position {
            placement: placement.to_string(),
            castling: castling.to_string(),
        },
        ["moves", sq] => match sq.parse::<Square>() {
            Ok(sq) => SessionCommand::Moves(sq),
            Err(_) => unknown(),
        },
        ["move", from, to] => match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(from), Ok(to)) => SessionCommand::Move { from, to },
            _ => unknown(),
        },
        // Compact form: move e2e4
        ["move", joined] if joined.len() == 4 && joined.is_ascii() => {
            let (from, to) = joined.split_at(2);
            match (from.parse::<Square>(), to.parse::<Square>()) {
                (Ok(from), Ok(to)) => SessionCommand::Move { from, to },
                _ => unknown(),
            }
        }
        ["promote", letter] => {
            let mut chars = letter.chars();
            match (chars.next().and_then(PieceKind::from_char), chars.next()) {
                (Some(kind), None) => SessionCommand::Promote(kind),
                _ => unknown(),
            }
        }
        ["perft", depth] => match depth.parse::<u8>() {
            Ok(d) => SessionCommand::Perft(d),
            Err(_) => unknown(),
        },
        ["setoption", rest @ ..] => parse_setoption(rest),
        _ => unknown(),
    }
}

// expected: setoption name <name> [value <val>]
fn parse_setoption(parts: &[&str]) -> SessionCommand {
    let mut name = String::new();
    let mut value: Option<String> = None;
    let mut i = 0usize;
    while i < parts.len() {
        match parts[i] {
            "name" => {
                i += 1;
                let mut words = Vec::new();
                while i < parts.len() && parts[i] != "value" {
                    words.push(parts[i]);
                    i += 1;
                }
                name = words.join(" ");
            }
            "value" => {
                value = Some(parts[i + 1..].join(" "));
                break;
            }
            _ => i += 1,
        }
    }
    SessionCommand::SetOption { name, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_session_command("new"), SessionCommand::NewGame);
        assert_eq!(parse_session_command("  board "), SessionCommand::Board);
        assert_eq!(parse_session_command("status"), SessionCommand::Status);
        assert_eq!(parse_session_command("quit"), SessionCommand::Quit);
    }

    #[test]
    fn parses_both_move_forms() {
        let expected = SessionCommand::Move {
            from: sq("e2"),
            to: sq("e4"),
        };
        assert_eq!(parse_session_command("move e2 e4"), expected);
        assert_eq!(parse_session_command("move e2e4"), expected);
        assert!(matches!(
            parse_session_command("move e2 e9"),
            SessionCommand::Unknown(_)
        ));
    }

    #[test]
    fn parses_positions() {
        assert_eq!(
            parse_session_command("position 4k3/8/8/8/8/8/8/4K3 -"),
            SessionCommand::Position {
                placement: "4k3/8/8/8/8/8/8/4K3".to_string(),
                castling: "-".to_string(),
            }
        );
        assert_eq!(
            parse_session_command("position fen 4k3/8/8/8/8/8/8/4K3 b - - 0 1"),
            SessionCommand::PositionFen("4k3/8/8/8/8/8/8/4K3 b - - 0 1".to_string())
        );
    }

    #[test]
    fn parses_promotion_letters() {
        assert_eq!(
            parse_session_command("promote n"),
            SessionCommand::Promote(PieceKind::Knight)
        );
        assert_eq!(
            parse_session_command("promote Q"),
            SessionCommand::Promote(PieceKind::Queen)
        );
        assert!(matches!(
            parse_session_command("promote queen"),
            SessionCommand::Unknown(_)
        ));
    }

    #[test]
    fn parses_setoption() {
        assert_eq!(
            parse_session_command("setoption name LogLevel value 5"),
            SessionCommand::SetOption {
                name: "LogLevel".to_string(),
                value: Some("5".to_string()),
            }
        );
        assert_eq!(
            parse_session_command("setoption name ShowBoard"),
            SessionCommand::SetOption {
                name: "ShowBoard".to_string(),
                value: None,
            }
        );
    }
}
