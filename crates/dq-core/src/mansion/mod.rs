//! Mansion topology
//!
//! The mansion is a fixed binary tree of rooms rooted at the entrance.

mod layout;
mod room;

pub use layout::{STANDARD_ROOMS, RoomSpec};
pub use room::{Room, Side};

use room::release_rooms;

/// The whole mansion, owning every room reachable from the entrance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mansion {
    root: Box<Room>,
}

impl Mansion {
    pub fn new(root: Room) -> Self {
        Self {
            root: Box::new(root),
        }
    }

    /// The room every exploration starts in
    pub fn root(&self) -> &Room {
        &self.root
    }

    /// All rooms in pre-order (a room before its left then right subtree)
    pub fn rooms(&self) -> Rooms<'_> {
        Rooms {
            stack: vec![self.root()],
        }
    }

    pub fn room_count(&self) -> usize {
        self.root.count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Find a room by exact name
    pub fn find(&self, name: &str) -> Option<&Room> {
        self.rooms().find(|room| room.name() == name)
    }

    /// Every clue placed somewhere in the mansion, in pre-order
    pub fn clues(&self) -> impl Iterator<Item = &str> {
        self.rooms().filter_map(Room::clue)
    }

    /// Tear the mansion down children first, returning how many rooms were released
    pub fn release(self) -> usize {
        let released = release_rooms(Some(self.root));
        tracing::debug!(released, "mansion released");
        released
    }
}

/// Pre-order iterator over the rooms of a mansion
pub struct Rooms<'a> {
    stack: Vec<&'a Room>,
}

impl<'a> Iterator for Rooms<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let room = self.stack.pop()?;
        if let Some(right) = room.right() {
            self.stack.push(right);
        }
        if let Some(left) = room.left() {
            self.stack.push(left);
        }
        Some(room)
    }
}
