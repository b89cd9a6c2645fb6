use scacchiera::perft::perft;
use scacchiera::{Position as Game, START_FEN};
use shakmaty::fen::Fen;
use shakmaty::{Chess, Position};

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth-1);
    }
    nodes
}

fn run_perft_check(fen_str: &str, depth: u8, name: &str) {
    let game = Game::from_fen(fen_str).expect("Valid FEN");
    let got = perft(&game, depth);

    let fen: Fen = fen_str.parse().unwrap();
    let pos: Chess = fen
        .into_position(shakmaty::CastlingMode::Standard)
        .expect("Shakmaty should accept FEN");
    let expected = perft_shakmaty(&pos, depth);

    assert_eq!(got, expected, "Mismatch in {name} at depth {depth}");
}

#[test]
fn perft_regression_starting_pos() {
    let game = Game::new();
    let pos: Chess = Chess::default();

    for depth in 1..=3u8 {
        let expected = perft_shakmaty(&pos, depth);
        let got = perft(&game, depth);
        assert_eq!(got, expected, "perft mismatch at depth {}: got {} expected {}", depth, got, expected);
    }
    assert_eq!(perft(&game, 3), 8902);
}

#[test]
fn perft_start_fen_matches_new() {
    assert_eq!(Game::from_fen(START_FEN).unwrap(), Game::new());
}

#[test]
fn perft_kiwipete() {
    // Castling both ways, pins, en passant and promotions in one position
    run_perft_check(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        2,
        "kiwipete",
    );
}

#[test]
fn perft_rook_endgame_with_en_passant_pins() {
    run_perft_check("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3, "position 3");
}

#[test]
fn perft_promotions_and_lost_castling() {
    run_perft_check(
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        2,
        "position 4",
    );
}

#[test]
fn perft_en_passant_from_fen() {
    run_perft_check("8/8/8/k1pP4/8/8/8/4K3 w - c6 0 1", 2, "ep discovered check");
    // Capturing en passant would expose the king along the rank
    run_perft_check("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 1", 2, "ep horizontal pin");
}

#[test]
fn perft_castling_through_check() {
    run_perft_check("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 2, "bare castling");
    run_perft_check("4k3/8/8/8/8/8/6r1/R3K2R w KQ - 0 1", 2, "attacked path");
}
