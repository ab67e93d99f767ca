use dq_core::{
    CaseReport, ClueIndex, Command, Explorer, FinishReason, Mansion, Side, StopPolicy,
    SuspectDirectory, Verdict, accuse, tally,
};

fn walk<'a>(mansion: &'a Mansion, policy: StopPolicy, commands: &[Command]) -> Explorer<'a> {
    let mut explorer = Explorer::new(mansion, policy);
    for &command in commands {
        explorer.step(command);
    }
    explorer
}

#[test]
fn test_entrance_library_study_walk() {
    let mansion = Mansion::standard();
    let directory = SuspectDirectory::standard();
    let explorer = walk(
        &mansion,
        StopPolicy::AtDeadEnd,
        &[Command::Go(Side::Left), Command::Go(Side::Left), Command::Quit],
    );

    // The study is a dead end, so the trailing quit is never needed
    assert!(explorer.is_finished());
    assert_eq!(explorer.trail(), &["Entrance Hall", "Library", "Study"]);
    assert_eq!(
        explorer.clues().to_vec(),
        vec![
            "mud footprints by the front door",
            "sealed envelope with red wax",
            "torn diary page",
        ]
    );

    let housekeeper = accuse(&directory, explorer.clues(), "Housekeeper").unwrap();
    assert_eq!(housekeeper.tally, 2);
    assert_eq!(housekeeper.verdict, Verdict::Confirmed);

    let gardener = accuse(&directory, explorer.clues(), "Gardener").unwrap();
    assert_eq!(gardener.tally, 1);
    assert_eq!(gardener.verdict, Verdict::Weak);

    let sinclair = accuse(&directory, explorer.clues(), "Madame Sinclair").unwrap();
    assert_eq!(sinclair.verdict, Verdict::Unsupported);
}

#[test]
fn test_every_room_confirms_each_suspect() {
    let mansion = Mansion::standard();
    let directory = SuspectDirectory::standard();
    let clues: ClueIndex = mansion.clues().collect();

    assert_eq!(clues.len(), 6);
    for suspect in directory.suspects() {
        assert_eq!(tally(&directory, &clues, suspect), 2, "suspect {suspect}");
    }
    let gardener = accuse(&directory, &clues, "Gardener").unwrap();
    assert_eq!(gardener.verdict, Verdict::Confirmed);
    assert_eq!(
        gardener.evidence,
        vec!["mud footprints by the front door", "old key dropped among the flowers"]
    );
}

#[test]
fn test_quit_at_entrance() {
    let mansion = Mansion::standard();
    let directory = SuspectDirectory::standard();
    let explorer = walk(&mansion, StopPolicy::AtDeadEnd, &[Command::Quit]);

    let report = CaseReport::from_explorer(&explorer, &directory);
    assert_eq!(report.finish, Some(FinishReason::Quit));
    assert_eq!(report.clues, vec!["mud footprints by the front door"]);

    let accusation = accuse(&directory, explorer.clues(), "Housekeeper").unwrap();
    assert_eq!(accusation.verdict, Verdict::Unsupported);
}

#[test]
fn test_blocked_moves_change_nothing() {
    let mansion = Mansion::standard();
    let explorer = walk(
        &mansion,
        StopPolicy::ExplicitQuit,
        &[
            Command::Go(Side::Right),
            Command::Go(Side::Left),
            Command::Go(Side::Left),
            Command::Go(Side::Right),
            Command::Go(Side::Right),
            Command::Go(Side::Left),
        ],
    );

    assert!(!explorer.is_finished());
    assert_eq!(explorer.current_room().name(), "Attic");
    assert_eq!(explorer.trail(), &["Entrance Hall", "Kitchen", "Attic"]);
    assert_eq!(explorer.moves(), 2);
}

#[test]
fn test_structures_release_everything() {
    let mansion = Mansion::standard();
    let directory = SuspectDirectory::standard();
    let clues = walk(&mansion, StopPolicy::AtDeadEnd, &[Command::Go(Side::Right)]).into_clues();

    assert_eq!(clues.release(), 2);
    assert_eq!(directory.release(), 6);
    assert_eq!(mansion.release(), 6);
}
