use scacchiera::{GameStatus, Position, PositionOptions, Square};

fn play(pos: &mut Position, mv: &str) {
    let from: Square = mv[..2].parse().unwrap();
    let to: Square = mv[2..4].parse().unwrap();
    pos.make_move(from, to)
        .unwrap_or_else(|e| panic!("Move {} rejected: {}", mv, e));
}

#[test]
fn test_threefold_repetition_simple() {
    let mut pos = Position::new();

    // 1. Nf3 Nf6 2. Ng1 Ng8 3. Nf3 Nf6 4. Ng1 Ng8 -> start position for the third time
    let moves = [
        "g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8",
    ];

    assert!(!pos.is_threefold_repetition());
    for (i, m_str) in moves.iter().enumerate() {
        play(&mut pos, m_str);
        if i >= 7 {
            assert!(pos.is_threefold_repetition(), "Should be draw by repetition");
            assert_eq!(pos.status(), GameStatus::ThreefoldRepetition);
        } else {
            assert!(!pos.is_threefold_repetition(), "Draw flagged too early at ply {}", i + 1);
        }
    }
    assert_eq!(pos.repetition_count(), 3);

    // Once reached, a fourth occurrence keeps it true
    for m_str in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        play(&mut pos, m_str);
    }
    assert_eq!(pos.repetition_count(), 4);
    assert!(pos.is_threefold_repetition());
}

#[test]
fn test_rejected_moves_do_not_count() {
    let mut pos = Position::new();
    let before = pos.clone();
    assert!(pos.make_move("g1".parse().unwrap(), "g3".parse().unwrap()).is_err());
    assert_eq!(pos, before);
    assert_eq!(pos.repetition_count(), 1);
}

#[test]
fn test_default_key_ignores_side_to_move() {
    // 1. Ke2 Kd8 2. Ke1 Kd7 3. Ke2 Ke8 4. Ke1: same placement as the start, other side to move
    let line = ["e1e2", "e8d8", "e2e1", "d8d7", "e1e2", "d7e8", "e2e1"];

    let mut loose = Position::from_parts("4k3/8/8/8/8/8/8/4K3", "-").unwrap();
    let mut strict = loose.clone().with_options(PositionOptions::strict());
    for mv in line {
        play(&mut loose, mv);
        play(&mut strict, mv);
    }
    assert_eq!(loose.board(), strict.board());
    assert_eq!(loose.repetition_count(), 2);
    assert_eq!(strict.repetition_count(), 1);
}

#[test]
fn test_strict_key_separates_en_passant_chances() {
    let mut pos = Position::new().with_options(PositionOptions::strict());
    let key_before = pos.position_key();
    play(&mut pos, "e2e4");
    assert!(pos.position_key().ends_with(" b e3"));
    assert_ne!(pos.position_key(), key_before);
    play(&mut pos, "g8f6");
    assert!(pos.position_key().ends_with(" w -"));
}

#[test]
fn test_castling_rights_are_part_of_the_key() {
    // The rook goes away and comes back; the lost right makes it a new position
    let mut pos = Position::from_parts("4k3/8/8/8/8/8/8/4K2R", "K").unwrap();
    for mv in ["h1h2", "e8d8", "h2h1", "d8e8"] {
        play(&mut pos, mv);
    }
    assert_eq!(pos.board_to_fen(), "4k3/8/8/8/8/8/8/4K2R -");
    assert_eq!(pos.repetition_count(), 1);
}
