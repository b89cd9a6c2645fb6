//! Scacchiera interactive session entry point.

use clap::Parser;
use scacchiera::options::SessionOptions;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Diagnostics verbosity on stderr, 0 (silent) to 10
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=10))]
    log_level: u8,

    /// Count repetitions with side to move and en passant square in the key
    #[arg(long)]
    strict_repetition: bool,

    /// Print the board after every accepted move
    #[arg(long)]
    show_board: bool,
}

fn main() {
    let args = Args::parse();

    let options = SessionOptions {
        log_level: args.log_level,
        strict_repetition: args.strict_repetition,
        show_board: args.show_board,
    };

    if let Err(e) = scacchiera::session::run_session_loop(options) {
        eprintln!("session loop failed: {:?}", e);
    }
}
