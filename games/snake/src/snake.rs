//! The snake body on a grid of cells

use arcade_core::{Direction, Point};
use std::collections::VecDeque;

/// Ordered cells, head first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Point>,
    heading: Direction,
    /// Direction of the last step actually taken
    last_step: Direction,
}

impl Snake {
    /// A snake of `parts` cells all stacked on `start`
    pub fn new(start: Point, parts: usize, heading: Direction) -> Self {
        Self {
            body: std::iter::repeat(start).take(parts.max(1)).collect(),
            heading,
            last_step: heading,
        }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Never zero: the head is always there
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn occupies(&self, cell: Point) -> bool {
        self.body.contains(&cell)
    }

    /// Turn for the next step. Reversing onto the neck is refused.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if dir == self.last_step.opposite() {
            return false;
        }
        self.heading = dir;
        true
    }

    /// Advance one cell. Returns the vacated tail cell.
    pub fn step(&mut self) -> Point {
        let (dx, dy) = self.heading.delta();
        let head = self.head().offset(dx, dy);
        self.body.push_front(head);
        self.last_step = self.heading;
        // the body always holds at least the new head and the old tail
        self.body.pop_back().unwrap_or(head)
    }

    /// Regrow the tail cell vacated by the last step
    pub fn grow(&mut self, tail: Point) {
        self.body.push_back(tail);
    }

    /// Head shares a cell with another part
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&p| p == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake() -> Snake {
        Snake::new(Point::new(0, 0), 6, Direction::Right)
    }

    #[test]
    fn test_starts_stacked() {
        let s = snake();
        assert_eq!(s.len(), 6);
        assert!(s.cells().all(|&p| p == Point::new(0, 0)));
        assert_eq!(s.heading(), Direction::Right);
    }

    #[test]
    fn test_step_shifts_body() {
        let mut s = snake();
        let tail = s.step();
        assert_eq!(tail, Point::new(0, 0));
        assert_eq!(s.head(), Point::new(1, 0));
        assert_eq!(s.len(), 6);

        s.step();
        s.turn(Direction::Down);
        s.step();
        let cells: Vec<Point> = s.cells().copied().take(4).collect();
        assert_eq!(
            cells,
            vec![
                Point::new(2, 1),
                Point::new(2, 0),
                Point::new(1, 0),
                Point::new(0, 0)
            ]
        );
        assert!(!s.bites_itself());
    }

    #[test]
    fn test_grow_keeps_tail() {
        let mut s = Snake::new(Point::new(5, 5), 2, Direction::Up);
        let tail = s.step();
        s.grow(tail);
        assert_eq!(s.len(), 3);
        assert_eq!(
            s.cells().copied().collect::<Vec<_>>(),
            vec![Point::new(5, 4), Point::new(5, 5), Point::new(5, 5)]
        );
    }

    #[test]
    fn test_reversal_checked_against_last_step() {
        let mut s = snake();
        assert!(!s.turn(Direction::Left));
        assert!(s.turn(Direction::Up));
        // still refused: the last step went right
        assert!(!s.turn(Direction::Left));
        s.step();
        assert!(s.turn(Direction::Left));
        assert_eq!(s.heading(), Direction::Left);
    }

    #[test]
    fn test_bites_itself() {
        let mut s = Snake::new(Point::new(5, 5), 1, Direction::Right);
        for _ in 0..4 {
            let tail = s.step();
            s.grow(tail);
        }
        // body runs (9,5)..(5,5); loop back into it
        s.turn(Direction::Down);
        s.step();
        s.turn(Direction::Left);
        s.step();
        s.turn(Direction::Up);
        s.step();
        assert!(s.bites_itself());
    }
}
