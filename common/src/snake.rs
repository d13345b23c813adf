use std::collections::VecDeque;

use crate::constants::{GRID_SIZE, INITIAL_CAPACITY, SURFACE_SIZE};

/// A grid-aligned point on the drawing surface, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the position lies on the playable surface.
    pub fn on_board(self) -> bool {
        self.x >= 0 && self.x < SURFACE_SIZE && self.y >= 0 && self.y < SURFACE_SIZE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Velocity of one tick of movement, in surface units. Exactly one
    /// component is nonzero.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -GRID_SIZE),
            Direction::Down => (0, GRID_SIZE),
            Direction::Left => (-GRID_SIZE, 0),
            Direction::Right => (GRID_SIZE, 0),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Leading cell, tracked separately from the body for movement math.
    pub head: Position,
    /// Current heading. `None` until the first direction is accepted.
    pub heading: Option<Direction>,
    /// Body cells, front = most recent head, back = tail. Empty until
    /// motion begins filling it.
    pub body: VecDeque<Position>,
    /// Maximum body length the current growth state allows.
    pub capacity: usize,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Snake {
            head,
            heading: None,
            body: VecDeque::new(),
            capacity: INITIAL_CAPACITY,
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Turn acceptance rule: horizontal turns only while the horizontal
    /// axis is idle, vertical turns only while the vertical axis is idle.
    /// A stationary snake accepts any direction.
    pub fn can_turn(&self, direction: Direction) -> bool {
        match self.heading {
            None => true,
            Some(heading) => heading.axis() != direction.axis(),
        }
    }

    /// Current velocity vector; (0, 0) while stationary.
    pub fn velocity(&self) -> (i32, i32) {
        self.heading.map(Direction::delta).unwrap_or((0, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snake_is_stationary_and_bodiless() {
        let snake = Snake::new(Position::new(160, 160));
        assert_eq!(snake.heading, None);
        assert!(snake.is_empty());
        assert_eq!(snake.capacity, INITIAL_CAPACITY);
        assert_eq!(snake.velocity(), (0, 0));
    }

    #[test]
    fn stationary_snake_accepts_any_direction() {
        let snake = Snake::new(Position::new(160, 160));
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert!(snake.can_turn(dir));
        }
    }

    #[test]
    fn moving_snake_only_accepts_orthogonal_turns() {
        let mut snake = Snake::new(Position::new(160, 160));

        snake.heading = Some(Direction::Right);
        assert!(!snake.can_turn(Direction::Left));
        assert!(!snake.can_turn(Direction::Right));
        assert!(snake.can_turn(Direction::Up));
        assert!(snake.can_turn(Direction::Down));

        snake.heading = Some(Direction::Up);
        assert!(snake.can_turn(Direction::Left));
        assert!(snake.can_turn(Direction::Right));
        assert!(!snake.can_turn(Direction::Up));
        assert!(!snake.can_turn(Direction::Down));
    }

    #[test]
    fn deltas_move_one_cell_along_one_axis() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), GRID_SIZE);
        }
    }

    #[test]
    fn board_bounds_are_half_open() {
        assert!(Position::new(0, 0).on_board());
        assert!(Position::new(SURFACE_SIZE - GRID_SIZE, SURFACE_SIZE - GRID_SIZE).on_board());
        assert!(!Position::new(-GRID_SIZE, 0).on_board());
        assert!(!Position::new(SURFACE_SIZE, 0).on_board());
        assert!(!Position::new(0, SURFACE_SIZE).on_board());
    }
}
