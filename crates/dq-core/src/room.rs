//! Room tree nodes.

use crate::command::Direction;

/// A room in the mansion and the two rooms reachable from it.
///
/// Children are owned exclusively, so every room except the root has
/// exactly one parent and the tree cannot contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Create a room with no exits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    /// Attach `room` as the left child.
    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    /// Attach `room` as the right child.
    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    /// The room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The child on the given side, if any.
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    /// Whether this room is a dead end.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Navigable directions, left before right.
    pub fn exits(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.child(*d).is_some())
            .collect()
    }

    /// Follow `path` from this room.
    ///
    /// Returns `None` as soon as a step has no room on that side.
    pub fn descend(&self, path: &[Direction]) -> Option<&Room> {
        path.iter().try_fold(self, |room, dir| room.child(*dir))
    }

    /// Pre-order walk over this room and all rooms below it.
    pub fn iter(&self) -> Rooms<'_> {
        Rooms { stack: vec![self] }
    }

    /// Number of rooms in this subtree, including this one.
    pub fn room_count(&self) -> usize {
        self.iter().count()
    }

    /// Height of this subtree. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.child(d))
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Pre-order iterator over a room tree.
#[derive(Debug)]
pub struct Rooms<'a> {
    stack: Vec<&'a Room>,
}

impl<'a> Iterator for Rooms<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let room = self.stack.pop()?;
        // Right first so the left subtree is visited first.
        self.stack.extend(room.right());
        self.stack.extend(room.left());
        Some(room)
    }
}

impl<'a> IntoIterator for &'a Room {
    type Item = &'a Room;
    type IntoIter = Rooms<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Room {
        Room::new("a")
            .with_left(Room::new("b").with_right(Room::new("d")))
            .with_right(Room::new("c"))
    }

    #[test]
    fn new_room_is_leaf() {
        let room = Room::new("Sótão");
        assert_eq!(room.name(), "Sótão");
        assert!(room.is_leaf());
        assert!(room.exits().is_empty());
        assert_eq!(room.depth(), 0);
        assert_eq!(room.room_count(), 1);
    }

    #[test]
    fn children_by_direction() {
        let room = sample();
        assert_eq!(room.child(Direction::Left).unwrap().name(), "b");
        assert_eq!(room.child(Direction::Right).unwrap().name(), "c");
        assert_eq!(room.exits(), vec![Direction::Left, Direction::Right]);
    }

    #[test]
    fn single_exit() {
        let room = sample();
        let b = room.left().unwrap();
        assert!(!b.is_leaf());
        assert!(b.left().is_none());
        assert_eq!(b.exits(), vec![Direction::Right]);
    }

    #[test]
    fn descend_follows_path() {
        let room = sample();
        assert_eq!(room.descend(&[]).unwrap().name(), "a");
        assert_eq!(
            room.descend(&[Direction::Left, Direction::Right])
                .unwrap()
                .name(),
            "d"
        );
        assert!(room.descend(&[Direction::Left, Direction::Left]).is_none());
        assert!(room.descend(&[Direction::Right, Direction::Left]).is_none());
    }

    #[test]
    fn preorder_walk() {
        let room = sample();
        let names: Vec<_> = room.iter().map(Room::name).collect();
        assert_eq!(names, ["a", "b", "d", "c"]);
        assert_eq!(room.room_count(), 4);
        assert_eq!(room.depth(), 2);
    }
}
