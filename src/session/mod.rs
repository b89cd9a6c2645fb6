pub mod event_loop;
pub mod parser;

pub use event_loop::{process_line, run_session_loop, Session};
pub use parser::{parse_session_command, SessionCommand};
