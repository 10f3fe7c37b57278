use std::collections::VecDeque;

use crate::Cell;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Stopped,
}

impl Direction {
    /// (row, col) delta of one step, or None when not moving.
    pub fn offset(self) -> Option<(i16, i16)> {
        match self {
            Up => Some((-1, 0)),
            Down => Some((1, 0)),
            Left => Some((0, -1)),
            Right => Some((0, 1)),
            Stopped => None,
        }
    }
}

/// Ordered body cells, tail at the front of the deque, head at the back.
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    /// Horizontal snake facing right, head at (row, head_col),
    /// the rest of the body extending to the left.
    pub fn new(row: u8, head_col: u8, size: u8) -> Self {
        let body = (0..size).map(|k| (row, head_col - (size - 1) + k)).collect();
        Snake { body, direction: Right }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        Snake { body: cells.into_iter().collect(), direction }
    }

    pub fn head(&self) -> Cell {
        *self.body.back().unwrap()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Reversing into the own body is ignored; any other direction sticks.
    pub fn set_direction(&mut self, new_direction: Direction) {
        match (new_direction, self.direction) {
            (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left) => {}
            _ => self.direction = new_direction,
        }
    }

    /// Ordinary move: the tail cell vacates, the head advances.
    /// Returns the vacated tail cell so the caller can repaint it.
    pub fn advance(&mut self, new_head: Cell) -> Cell {
        let old_tail = self.body.pop_front().unwrap();
        self.body.push_back(new_head);
        old_tail
    }

    /// Eating move: the head advances and the tail stays put.
    pub fn grow(&mut self, new_head: Cell) {
        self.body.push_back(new_head);
    }
}
