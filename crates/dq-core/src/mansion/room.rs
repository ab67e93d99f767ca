//! Rooms of the mansion
//!
//! A room owns its two optional children, so the whole mansion is a plain
//! binary tree hanging off the entrance.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Which child of a room to walk into
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A room of the mansion, optionally holding one clue
///
/// Rooms are wired together once with [`Room::with_left`] and
/// [`Room::with_right`] and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    /// Empty when the room holds no clue
    clue: String,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Create a room with no exits
    pub fn new(name: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clue: clue.into(),
            left: None,
            right: None,
        }
    }

    /// Attach the left child
    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    /// Attach the right child
    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue found here, if any
    pub fn clue(&self) -> Option<&str> {
        if self.clue.is_empty() {
            None
        } else {
            Some(&self.clue)
        }
    }

    pub fn has_clue(&self) -> bool {
        !self.clue.is_empty()
    }

    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    pub fn child(&self, side: Side) -> Option<&Room> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// True when neither exit leads anywhere
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of rooms in this subtree, this one included
    pub fn count(&self) -> usize {
        1 + self.left().map_or(0, Room::count) + self.right().map_or(0, Room::count)
    }

    /// Length of the longest path from this room down to a dead end
    pub fn depth(&self) -> usize {
        1 + self
            .left()
            .map_or(0, Room::depth)
            .max(self.right().map_or(0, Room::depth))
    }
}

/// Drop a subtree children first, returning how many rooms were released
pub(crate) fn release_rooms(room: Option<Box<Room>>) -> usize {
    let Some(room) = room else {
        return 0;
    };
    let Room { left, right, .. } = *room;
    release_rooms(left) + release_rooms(right) + 1
}
