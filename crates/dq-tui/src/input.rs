//! Input handling - convert typed lines to commands
//!
//! Only the first non-whitespace character of a line counts, in either case.

use dq_core::{Command, Side};

/// Key for walking into the left room
pub const KEY_LEFT: char = 'e';
/// Key for walking into the right room
pub const KEY_RIGHT: char = 'd';
/// Key for ending the exploration
pub const KEY_QUIT: char = 's';

/// Convert a typed line to a navigation command
pub fn line_to_command(line: &str) -> Option<Command> {
    let key = line.trim_start().chars().next()?;
    match key.to_ascii_lowercase() {
        KEY_LEFT => Some(Command::Go(Side::Left)),
        KEY_RIGHT => Some(Command::Go(Side::Right)),
        KEY_QUIT => Some(Command::Quit),
        _ => None,
    }
}

/// Key that issues `command`
pub fn command_key(command: Command) -> char {
    match command {
        Command::Go(Side::Left) => KEY_LEFT,
        Command::Go(Side::Right) => KEY_RIGHT,
        Command::Quit => KEY_QUIT,
    }
}
