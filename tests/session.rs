//! Integration tests for the text session protocol

use scacchiera::options::SessionOptions;
use scacchiera::session::{process_line, Session};

#[test]
fn test_session_lifecycle() {
    let mut session = Session::default();
    assert!(session.is_running());

    let responses = process_line("status", &mut session);
    assert_eq!(responses, vec!["status ongoing"]);

    let responses = process_line("quit", &mut session);
    assert!(responses.is_empty());
    assert!(!session.is_running());
}

#[test]
fn test_position_commands() {
    let mut session = Session::default();

    process_line("position r3k2r/8/8/8/8/8/8/R3K2R KQkq", &mut session);
    assert_eq!(process_line("fen", &mut session), vec!["r3k2r/8/8/8/8/8/8/R3K2R KQkq"]);
    assert_eq!(
        process_line("moves e1", &mut session),
        vec!["moves e1 d2 e2 f2 c1 d1 f1 g1"]
    );

    let responses = process_line("position fen 4k3/8/8/8/8/8/8/4K3 b - - 0 1", &mut session);
    assert!(responses.is_empty());
    assert_eq!(session.position().side_to_move(), scacchiera::Color::Black);

    // A bad position keeps the old one
    let responses = process_line("position 4k3/8/8/8/8/8/8/8 -", &mut session);
    assert_eq!(responses.len(), 1);
    assert!(responses[0].starts_with("info string invalid piece placement"));
    assert_eq!(process_line("fen", &mut session), vec!["4k3/8/8/8/8/8/8/4K3 -"]);
}

#[test]
fn test_perft_command() {
    let mut session = Session::default();
    assert_eq!(process_line("perft 2", &mut session), vec!["perft 2 400"]);
}

#[test]
fn test_show_board_after_moves() {
    let options = SessionOptions {
        show_board: true,
        ..SessionOptions::default()
    };
    let mut session = Session::new(options);
    let responses = process_line("move e2e4", &mut session);
    assert_eq!(responses.len(), 10);
    assert_eq!(responses[4], ". . . . P . . .  4");
    assert_eq!(responses[9], "black to move, castling KQkq");
}

#[test]
fn test_strict_repetition_option() {
    let mut session = Session::default();
    process_line("setoption name StrictRepetition value true", &mut session);
    for mv in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1"] {
        assert!(process_line(&format!("move {}", mv), &mut session).is_empty());
    }
    let responses = process_line("move f6g8", &mut session);
    assert_eq!(responses, vec!["status draw by threefold repetition"]);
}

#[test]
fn test_unknown_input() {
    let mut session = Session::default();
    assert_eq!(
        process_line("go depth 5", &mut session),
        vec!["info string unknown command: go depth 5"]
    );
    assert!(session.is_running());
}
