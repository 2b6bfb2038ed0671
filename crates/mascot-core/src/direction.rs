use glam::Vec2;

/// Heading of the mascot sprite relative to the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    #[default]
    South,
    East,
    West,
}

impl Direction {
    /// The dominant axis wins; ties resolve vertically.
    #[inline]
    pub fn from_delta(delta: Vec2) -> Self {
        if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                Direction::East
            } else {
                Direction::West
            }
        } else if delta.y > 0.0 {
            Direction::South
        } else {
            Direction::North
        }
    }

    /// Direction from the mascot center toward the pointer.
    #[inline]
    pub fn toward(center: Vec2, pointer: Vec2) -> Self {
        Self::from_delta(pointer - center)
    }
}
