use clap::Parser;
use scacchiera::board::START_FEN;
use scacchiera::logger::{Logger, LEVEL_DEBUG};
use scacchiera::perft::{divide, perft};
use shakmaty::fen::Fen;
use shakmaty::{Chess, Position};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Print per-move counts from both generators
    #[arg(long)]
    divide: bool,

    #[arg(short, long, default_value_t = 0)]
    log_level: u8,
}

fn main() {
    let args = Args::parse();
    let mut logger = Logger::new(args.log_level);

    println!("Running perft on FEN: '{}' at depth {}", args.fen, args.depth);

    let ours = match scacchiera::Position::from_fen(&args.fen) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("cannot load FEN: {}", e);
            std::process::exit(1);
        }
    };
    let oracle: Chess = match args
        .fen
        .parse::<Fen>()
        .map_err(|e| e.to_string())
        .and_then(|fen| {
            fen.into_position(shakmaty::CastlingMode::Standard)
                .map_err(|e| e.to_string())
        }) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("shakmaty rejected FEN: {}", e);
            std::process::exit(1);
        }
    };

    logger.time_start("scacchiera");
    let start = std::time::Instant::now();
    let nodes = perft(&ours, args.depth);
    let duration = start.elapsed();
    logger.time_end(LEVEL_DEBUG, "scacchiera");
    println!(
        "Scacchiera perft({}) = {} nodes ({} ms)",
        args.depth,
        nodes,
        duration.as_millis()
    );

    let start = std::time::Instant::now();
    let expected = perft_shakmaty(&oracle, args.depth);
    let duration = start.elapsed();
    println!(
        "Shakmaty perft({}) = {} nodes ({} ms, {:.2} Mnps)",
        args.depth,
        expected,
        duration.as_millis(),
        expected as f64 / (duration.as_micros().max(1) as f64)
    );

    if args.divide {
        for (mv, count) in divide(&ours, args.depth) {
            println!("{}: {}", mv, count);
        }
    }

    if nodes != expected {
        eprintln!("MISMATCH: {} vs {}", nodes, expected);
        std::process::exit(2);
    }
}

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}
