//! Session driver
//!
//! Runs one game over a [`Console`]: the exploration loop, the clue summary
//! and the accusation prompt.

use std::io;

use dq_core::{
    Accusation, CaseReport, Command, ExploreState, Explorer, FinishReason, GameOptions, Mansion,
    StepOutcome, SuspectDirectory, accuse,
};

use crate::console::Console;
use crate::display;
use crate::input::line_to_command;

/// One game session
pub struct App<'m, C> {
    mansion: &'m Mansion,
    directory: &'m SuspectDirectory,
    options: GameOptions,
    console: C,
}

impl<'m, C: Console> App<'m, C> {
    pub fn new(
        mansion: &'m Mansion,
        directory: &'m SuspectDirectory,
        options: GameOptions,
        console: C,
    ) -> Self {
        Self {
            mansion,
            directory,
            options,
            console,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Play a full game and return its report
    pub fn run(&mut self) -> io::Result<CaseReport> {
        self.clear()?;
        self.console.write_lines(&display::banner())?;

        let explorer = self.explore()?;
        let report = CaseReport::from_explorer(&explorer, self.directory);
        tracing::info!(
            rooms = report.trail.len(),
            clues = report.clues.len(),
            "exploration finished"
        );

        self.clear()?;
        self.console.write_lines(&display::clue_list_lines(&report.clues))?;
        self.console
            .write_lines(&display::association_lines(&report.associations))?;

        let report = match self.accuse(&explorer)? {
            Some(accusation) => report.with_accusation(accusation),
            None => report,
        };

        self.console.write_line("")?;
        self.console.write_line(&display::farewell_line())?;
        Ok(report)
    }

    /// Walk the mansion until the player quits or a dead end stops the walk
    pub fn explore(&mut self) -> io::Result<Explorer<'m>> {
        let mut explorer = Explorer::new(self.mansion, self.options.stop_policy);
        let mut notice: Option<String> = None;

        loop {
            self.clear()?;
            let room = explorer.current_room();
            self.console.write_lines(&display::room_lines(room))?;
            if let Some(notice) = notice.take() {
                self.console.write_line(&notice)?;
            }

            match explorer.state() {
                ExploreState::Finished(FinishReason::DeadEnd) => {
                    self.console
                        .write_line(&display::dead_end_line(self.options.stop_policy))?;
                    break;
                }
                ExploreState::Finished(FinishReason::Quit) => break,
                ExploreState::AtRoom(room) => {
                    if room.is_dead_end() {
                        self.console
                            .write_line(&display::dead_end_line(self.options.stop_policy))?;
                    }
                    self.console.write_lines(&display::menu_lines(room))?;
                    self.console.write_line("")?;
                    self.console.write_prompt("> ")?;
                }
            }

            let command = match self.console.read_line()? {
                Some(line) => line_to_command(&line),
                // End of input counts as quitting
                None => Some(Command::Quit),
            };
            let Some(command) = command else {
                tracing::warn!("invalid navigation option");
                notice = Some(display::invalid_option_line());
                continue;
            };

            match explorer.step(command) {
                StepOutcome::Entered { .. } => {}
                StepOutcome::NoRoom(side) => {
                    tracing::warn!(%side, "no room that way");
                    notice = Some(display::no_room_line(side));
                }
                StepOutcome::Finished(_) => {
                    self.console.write_line("")?;
                    self.console.write_line(&display::leaving_line())?;
                    break;
                }
            }
        }
        Ok(explorer)
    }

    /// Ask for a suspect until a name is given or input runs out
    pub fn accuse(&mut self, explorer: &Explorer<'_>) -> io::Result<Option<Accusation>> {
        self.console.write_line("")?;
        self.console
            .write_line(&display::suspects_line(&self.directory.suspects()))?;

        loop {
            self.console.write_prompt(display::accusation_prompt())?;
            let Some(line) = self.console.read_line()? else {
                self.console.write_line("")?;
                self.console.write_line(&display::no_accusation_line())?;
                return Ok(None);
            };

            match accuse(self.directory, explorer.clues(), &line) {
                Ok(accusation) => {
                    self.console.write_line("")?;
                    self.console.write_line(&display::verdict_line(&accusation))?;
                    return Ok(Some(accusation));
                }
                Err(err) => {
                    tracing::warn!(%err, "accusation rejected");
                    self.console.write_line(&display::blank_accusation_line())?;
                }
            }
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.options.clear_screen {
            self.console.clear()?;
        }
        Ok(())
    }
}
