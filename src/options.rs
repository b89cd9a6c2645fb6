//! Configuration for positions and the text front end
//!
//! - `PositionOptions` tunes the rules core (currently the repetition key);
//! - `SessionOptions` holds the runtime options of the command loop and is
//!   changed through `setoption name <Name> value <v>`.

/// What goes into the key used for repetition counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepetitionKey {
    /// Piece placement and castling rights only. Positions differing only in
    /// side to move or en passant target share a count.
    #[default]
    PlacementAndCastling,
    /// Placement, castling rights, side to move and en passant target.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionOptions {
    pub repetition_key: RepetitionKey,
}

impl PositionOptions {
    pub fn strict() -> Self {
        Self {
            repetition_key: RepetitionKey::Strict,
        }
    }
}

/// Options of the command loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Logger verbosity, 0 = silent, 10 = everything
    pub log_level: u8,

    /// Count repetitions with side to move and en passant target included
    pub strict_repetition: bool,

    /// Print the board diagram after every accepted move
    pub show_board: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            log_level: 0,
            strict_repetition: false,
            show_board: false,
        }
    }
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position_options(&self) -> PositionOptions {
        if self.strict_repetition {
            PositionOptions::strict()
        } else {
            PositionOptions::default()
        }
    }

    /// Set option value
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), String> {
        match name {
            "LogLevel" => {
                let v_str = value.ok_or_else(|| format!("Option {} requires a numeric value", name))?;
                match v_str.parse::<u8>() {
                    Ok(level) if level <= 10 => self.log_level = level,
                    _ => return Err(format!("Invalid value for option {}: {}", name, v_str)),
                }
            }
            "StrictRepetition" => self.strict_repetition = parse_check(name, value)?,
            "ShowBoard" => self.show_board = parse_check(name, value)?,
            _ => return Err(format!("Unknown option: {}", name)),
        }
        Ok(())
    }
}

fn parse_check(name: &str, value: Option<&str>) -> Result<bool, String> {
    match value {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(format!("Invalid value for option {}: {}", name, other)),
        None => Err(format!("Option {} requires true or false", name)),
    }
}
