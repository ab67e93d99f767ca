//! dq-tui: Line-oriented terminal front end
//!
//! Provides the console, input parsing and text rendering for the game.

pub mod app;
pub mod console;
pub mod display;
pub mod input;

pub use app::App;
pub use console::{Console, ScriptedConsole, TerminalConsole};
