//! The mansion: a fixed binary tree of rooms
//!
//! Rooms live in an arena and are addressed by copyable handles, which keeps
//! the exploration cursor a plain value instead of a borrow into the tree.

use super::{ClueText, RoomName};
use crate::QuestError;

/// Handle to a room inside a [`Mansion`].
///
/// Only the mansion that issued a handle can resolve it; the handle itself
/// is just an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

/// A direction choice at a branching room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// One room of the mansion.
///
/// A room may hide at most one clue; collecting it clears the field, so a
/// second visit finds nothing.
#[derive(Debug, Clone)]
pub struct Room {
    name: RoomName,
    clue: Option<ClueText>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn name(&self) -> &RoomName {
        &self.name
    }

    /// The clue still waiting in this room, if any.
    pub fn clue(&self) -> Option<&ClueText> {
        self.clue.as_ref()
    }

    pub fn left(&self) -> Option<RoomId> {
        self.left
    }

    pub fn right(&self) -> Option<RoomId> {
        self.right
    }

    /// The child in the given direction, if that exit exists.
    pub fn child(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// A room with no exits ends the path.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The mansion: an arena of rooms wired into a binary tree by the caller.
///
/// The arena performs no cycle or duplicate-parent checks; keeping the shape
/// a tree is the builder's contract, exactly as in the classic exercise.
#[derive(Debug, Clone, Default)]
pub struct Mansion {
    rooms: Vec<Room>,
}

impl Mansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room with no clue. Fails on an over-length name.
    pub fn add_room(&mut self, name: &str) -> Result<RoomId, QuestError> {
        self.push(RoomName::new(name)?, None)
    }

    /// Add a room hiding a clue. An empty clue string means "no clue there",
    /// matching the classic exercise's blank-buffer convention.
    pub fn add_room_with_clue(&mut self, name: &str, clue: &str) -> Result<RoomId, QuestError> {
        let clue = if clue.is_empty() {
            None
        } else {
            Some(ClueText::new(clue)?)
        };
        self.push(RoomName::new(name)?, clue)
    }

    fn push(&mut self, name: RoomName, clue: Option<ClueText>) -> Result<RoomId, QuestError> {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            name,
            clue,
            left: None,
            right: None,
        });
        Ok(id)
    }

    /// Wire both child links of a room at once.
    pub fn connect(&mut self, parent: RoomId, left: Option<RoomId>, right: Option<RoomId>) {
        let room = &mut self.rooms[parent.0];
        room.left = left;
        room.right = right;
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Collect the clue waiting in a room. The first call takes it; any
    /// later call finds the room already picked clean.
    pub fn take_clue(&mut self, id: RoomId) -> Option<ClueText> {
        self.rooms[id.0].clue.take()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level_mansion() -> (Mansion, RoomId, RoomId, RoomId) {
        let mut mansion = Mansion::new();
        let hall = mansion.add_room("Hall").unwrap();
        let library = mansion.add_room_with_clue("Biblioteca", "Livro rasgado").unwrap();
        let kitchen = mansion.add_room("Cozinha").unwrap();
        mansion.connect(hall, Some(library), Some(kitchen));
        (mansion, hall, library, kitchen)
    }

    #[test]
    fn connect_wires_both_children() {
        let (mansion, hall, library, kitchen) = two_level_mansion();
        let root = mansion.room(hall);
        assert_eq!(root.left(), Some(library));
        assert_eq!(root.right(), Some(kitchen));
        assert_eq!(root.child(Direction::Left), Some(library));
        assert_eq!(root.child(Direction::Right), Some(kitchen));
        assert!(!root.is_leaf());
    }

    #[test]
    fn unconnected_rooms_are_leaves() {
        let (mansion, _, library, kitchen) = two_level_mansion();
        assert!(mansion.room(library).is_leaf());
        assert!(mansion.room(kitchen).is_leaf());
    }

    #[test]
    fn take_clue_collects_exactly_once() {
        let (mut mansion, _, library, _) = two_level_mansion();
        let clue = mansion.take_clue(library).expect("first visit finds the clue");
        assert_eq!(clue.as_str(), "Livro rasgado");
        assert!(mansion.take_clue(library).is_none());
        assert!(mansion.room(library).clue().is_none());
    }

    #[test]
    fn empty_clue_means_no_clue() {
        let mut mansion = Mansion::new();
        let hall = mansion.add_room_with_clue("Hall", "").unwrap();
        assert!(mansion.room(hall).clue().is_none());
        assert!(mansion.take_clue(hall).is_none());
    }

    #[test]
    fn over_length_room_name_is_rejected() {
        let mut mansion = Mansion::new();
        assert!(mansion.add_room(&"x".repeat(51)).is_err());
        assert!(mansion.is_empty());
    }
}
