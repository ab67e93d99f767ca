//! Text rendering of rooms, clues and verdicts

use dq_core::{Accusation, Association, Command, Room, Side, StopPolicy, Verdict};
use strum::IntoEnumIterator;

use crate::input::command_key;

const RULE: &str = "==============================================";

/// Title banner shown once at startup
pub fn banner() -> Vec<String> {
    vec![
        RULE.to_string(),
        "   DETECTIVE QUEST - THE SINCLAIR MANSION".to_string(),
        RULE.to_string(),
    ]
}

/// Header and clue line of a room
pub fn room_lines(room: &Room) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        format!("You are in: {}", room.name()),
        RULE.to_string(),
    ];
    match room.clue() {
        Some(clue) => lines.push(format!("Clue found: \"{clue}\"")),
        None => lines.push("No clue here.".to_string()),
    }
    lines
}

/// Commands available in `room`
pub fn menu_lines(room: &Room) -> Vec<String> {
    let mut lines = vec![String::new(), "Choose a path:".to_string()];
    for side in Side::iter() {
        if let Some(next) = room.child(side) {
            lines.push(format!(
                " ({}) Go {side} to {}",
                command_key(Command::Go(side)),
                next.name()
            ));
        }
    }
    lines.push(format!(" ({}) Stop exploring", command_key(Command::Quit)));
    lines
}

pub fn no_room_line(side: Side) -> String {
    format!("There is no room to the {side}!")
}

pub fn invalid_option_line() -> String {
    "Invalid option! Try again.".to_string()
}

/// Shown when the exploration ends by itself
pub fn dead_end_line(policy: StopPolicy) -> String {
    match policy {
        StopPolicy::AtDeadEnd => {
            "Dead end: nowhere left to go. The exploration is over.".to_string()
        }
        StopPolicy::ExplicitQuit => "Dead end: nowhere left to go.".to_string(),
    }
}

pub fn leaving_line() -> String {
    "Leaving the exploration...".to_string()
}

/// Sorted clue list, one `- ` line per clue
pub fn clue_list_lines(clues: &[String]) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        "          COLLECTED CLUES (SORTED)".to_string(),
        RULE.to_string(),
    ];
    if clues.is_empty() {
        lines.push("No clues were collected.".to_string());
    } else {
        lines.extend(clues.iter().map(|clue| format!("- {clue}")));
    }
    lines
}

/// Clue to suspect table of the collected clues
pub fn association_lines(associations: &[Association]) -> Vec<String> {
    if associations.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Who each clue points to:".to_string()];
    lines.extend(
        associations
            .iter()
            .map(|association| format!("  {} -> {}", association.clue, association.suspect)),
    );
    lines
}

pub fn suspects_line(suspects: &[&str]) -> String {
    format!("Suspects: {}", suspects.join(", "))
}

pub fn accusation_prompt() -> &'static str {
    "Who do you accuse? "
}

pub fn blank_accusation_line() -> String {
    "No suspect named. Accusation aborted, try again.".to_string()
}

pub fn no_accusation_line() -> String {
    "No accusation made.".to_string()
}

/// One-line verdict for an accusation
pub fn verdict_line(accusation: &Accusation) -> String {
    let name = &accusation.suspect;
    match accusation.verdict {
        Verdict::Confirmed => format!(
            "VERDICT: {} clues point to {name}. The accusation is confirmed!",
            accusation.tally
        ),
        Verdict::Weak => format!(
            "VERDICT: only {} clue points to {name}. Not enough evidence to convict.",
            accusation.tally
        ),
        Verdict::Unsupported => {
            format!("VERDICT: no clue points to {name}. The accusation is unsupported.")
        }
    }
}

pub fn farewell_line() -> String {
    "Investigation closed. The mystery is almost solved!".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_lines() {
        let room = Room::new("Library", "torn diary page");
        let lines = room_lines(&room);
        assert_eq!(lines[1], "You are in: Library");
        assert_eq!(lines[3], "Clue found: \"torn diary page\"");

        let empty = Room::new("Hallway", "");
        assert_eq!(room_lines(&empty)[3], "No clue here.");
    }

    #[test]
    fn test_menu_shows_only_real_exits() {
        let room = Room::new("Kitchen", "").with_right(Room::new("Attic", ""));
        let menu = menu_lines(&room);
        assert_eq!(
            menu,
            vec![
                "".to_string(),
                "Choose a path:".to_string(),
                " (d) Go right to Attic".to_string(),
                " (s) Stop exploring".to_string(),
            ]
        );

        let dead_end = Room::new("Attic", "");
        assert_eq!(menu_lines(&dead_end).len(), 3);
    }

    #[test]
    fn test_clue_list() {
        let lines = clue_list_lines(&["a".to_string(), "b".to_string()]);
        assert_eq!(&lines[3..], &["- a".to_string(), "- b".to_string()]);
        assert_eq!(clue_list_lines(&[])[3], "No clues were collected.");
    }

    #[test]
    fn test_association_lines() {
        let associations = vec![Association {
            clue: "old key".to_string(),
            suspect: "Gardener".to_string(),
        }];
        assert_eq!(association_lines(&associations)[2], "  old key -> Gardener");
        assert!(association_lines(&[]).is_empty());
    }

    #[test]
    fn test_verdict_lines() {
        let mut accusation = Accusation {
            suspect: "Housekeeper".to_string(),
            tally: 2,
            verdict: Verdict::Confirmed,
            evidence: Vec::new(),
        };
        assert_eq!(
            verdict_line(&accusation),
            "VERDICT: 2 clues point to Housekeeper. The accusation is confirmed!"
        );

        accusation.tally = 1;
        accusation.verdict = Verdict::Weak;
        assert!(verdict_line(&accusation).contains("only 1 clue"));

        accusation.tally = 0;
        accusation.verdict = Verdict::Unsupported;
        assert!(verdict_line(&accusation).ends_with("unsupported."));
    }

    #[test]
    fn test_diagnostics() {
        assert_eq!(no_room_line(Side::Left), "There is no room to the left!");
        assert_eq!(suspects_line(&["A", "B"]), "Suspects: A, B");
    }
}
