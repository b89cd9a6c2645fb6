//! Line-oriented game session over stdin/stdout
//!
//! Every command yields zero or more response lines. Errors are reported as
//! `info string ...` lines and never end the session.

use super::parser::{parse_session_command, SessionCommand};
use crate::board::Square;
use crate::logger::{Logger, LEVEL_DEBUG, LEVEL_INFO};
use crate::options::SessionOptions;
use crate::perft;
use crate::position::{GameStatus, MoveOutcome, Position};
use std::io::{self, BufRead, Write};

pub struct Session {
    position: Position,
    options: SessionOptions,
    logger: Logger,
    running: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        let logger = Logger::new(options.log_level);
        let position = Position::new().with_options(options.position_options());
        Self {
            position,
            options,
            logger,
            running: true,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle_command(&mut self, cmd: SessionCommand) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            SessionCommand::NewGame => {
                self.position = Position::new().with_options(self.options.position_options());
                self.logger.log(LEVEL_INFO, "new game");
            }
            SessionCommand::Position {
                placement,
                castling,
            } => match Position::from_parts(&placement, &castling) {
                Ok(pos) => self.set_position(pos),
                Err(e) => res.push(format!("info string {}", e)),
            },
            SessionCommand::PositionFen(fen) => match Position::from_fen(&fen) {
                Ok(pos) => self.set_position(pos),
                Err(e) => res.push(format!("info string {}", e)),
            },
            SessionCommand::Moves(sq) => match self.position.legal_moves(sq) {
                Ok(mut targets) => {
                    targets.sort();
                    let names: Vec<String> = targets.iter().map(Square::to_string).collect();
                    res.push(format!("moves {} {}", sq, names.join(" ")).trim_end().to_string());
                }
                Err(e) => res.push(format!("info string {}", e)),
            },
            SessionCommand::Move { from, to } => match self.position.make_move(from, to) {
                Ok(MoveOutcome::Applied) => {
                    self.logger.log_lazy(LEVEL_DEBUG, || format!("played {}{}", from, to));
                    self.after_turn(&mut res);
                }
                Ok(MoveOutcome::PromotionPending(sq)) => {
                    res.push(format!("promotion pending on {}", sq));
                }
                Err(rejection) => {
                    self.logger
                        .log_lazy(LEVEL_DEBUG, || format!("rejected {}{}: {:?}", from, to, rejection));
                    res.push(format!("illegal move {}{}: {}", from, to, rejection));
                }
            },
            SessionCommand::Promote(kind) => match self.position.complete_promotion(kind) {
                Ok(()) => self.after_turn(&mut res),
                Err(e) => res.push(format!("info string {}", e)),
            },
            SessionCommand::Board => {
                res.extend(self.position.to_string().lines().map(str::to_string));
            }
            SessionCommand::Fen => res.push(self.position.board_to_fen()),
            SessionCommand::Status => res.push(format!("status {}", self.position.status())),
            SessionCommand::Perft(depth) => {
                self.logger.time_start("perft");
                let nodes = perft::perft(&self.position, depth);
                self.logger.time_end(LEVEL_INFO, "perft");
                res.push(format!("perft {} {}", depth, nodes));
            }
            SessionCommand::SetOption { name, value } => {
                match self.options.set_option(&name, value.as_deref()) {
                    Ok(()) => {
                        self.logger.set_level(self.options.log_level);
                        if name == "StrictRepetition" {
                            // Counts so far used the old key; restart them
                            let pos = self.position.clone();
                            self.set_position(pos);
                        }
                        res.push(format!("info string {} set to {}", name, value.unwrap_or_default()));
                    }
                    Err(e) => res.push(format!("info string error: {}", e)),
                }
            }
            SessionCommand::Quit => {
                self.running = false;
            }
            SessionCommand::Unknown(s) => {
                res.push(format!("info string unknown command: {}", s));
            }
        }
        res
    }

    fn set_position(&mut self, pos: Position) {
        self.position = pos.with_options(self.options.position_options());
        self.logger
            .log_lazy(LEVEL_INFO, || format!("position set: {}", self.position.board_to_fen()));
    }

    fn after_turn(&self, res: &mut Vec<String>) {
        if self.options.show_board {
            res.extend(self.position.to_string().lines().map(str::to_string));
        }
        let status = self.position.status();
        if status != GameStatus::Ongoing {
            res.push(format!("status {}", status));
        }
    }
}

pub fn run_session_loop(options: SessionOptions) -> io::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let mut session = Session::new(options);
    let mut buf = String::new();

    while session.is_running() {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            // EOF reached
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        for r in process_line(line, &mut session) {
            writeln!(writer, "{}", r)?;
        }
        writer.flush()?;
    }

    Ok(())
}

pub fn process_line(line: &str, session: &mut Session) -> Vec<String> {
    let cmd = parse_session_command(line);
    session.handle_command(cmd)
}
