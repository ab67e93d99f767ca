//! The standard mansion
//!
//! ```text
//!                  [Entrance Hall]
//!                   /           \
//!           [Library]           [Kitchen]
//!            /     \                 \
//!       [Study]   [Garden]          [Attic]
//! ```

use super::{Mansion, Room};
use crate::consts::ENTRANCE;

/// Name and clue of one room of the standard mansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSpec {
    pub name: &'static str,
    pub clue: &'static str,
}

/// Rooms of the standard mansion in pre-order
pub const STANDARD_ROOMS: [RoomSpec; 6] = [
    RoomSpec {
        name: ENTRANCE,
        clue: "mud footprints by the front door",
    },
    RoomSpec {
        name: "Library",
        clue: "torn diary page",
    },
    RoomSpec {
        name: "Study",
        clue: "sealed envelope with red wax",
    },
    RoomSpec {
        name: "Garden",
        clue: "old key dropped among the flowers",
    },
    RoomSpec {
        name: "Kitchen",
        clue: "broken glass with a lipstick mark",
    },
    RoomSpec {
        name: "Attic",
        clue: "torn portrait of an unknown woman",
    },
];

impl RoomSpec {
    fn build(&self) -> Room {
        Room::new(self.name, self.clue)
    }
}

impl Mansion {
    /// Build the six-room mansion every game is played in
    pub fn standard() -> Self {
        let [entrance, library, study, garden, kitchen, attic] = &STANDARD_ROOMS;

        let library = library
            .build()
            .with_left(study.build())
            .with_right(garden.build());
        let kitchen = kitchen.build().with_right(attic.build());

        Mansion::new(entrance.build().with_left(library).with_right(kitchen))
    }
}
