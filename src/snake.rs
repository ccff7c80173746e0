use std::collections::VecDeque;

use crate::board::Board;
use crate::input::Direction;
use crate::vec2::Vec2;

/// Mutable snake state: body segments, heading, and pending growth.
///
/// The body is ordered head first. All segment coordinates are
/// integer-valued and lie inside the board; [`Snake::advance`] is the sole
/// mutator of the body.
///
/// The relative vector between two logically adjacent segments is *not*
/// guaranteed to have magnitude 1: across the wrap seam it has magnitude
/// `cells - 1`. Readers classifying segment orientation should renormalize
/// through [`Board::unit_delta`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Vec2>,
    direction: Vec2,
    growth_pending: bool,
}

impl Snake {
    /// Creates the standard three-segment starting snake heading right.
    #[must_use]
    pub fn starting_body() -> Self {
        Self::from_segments(
            vec![Vec2::new(5.0, 3.0), Vec2::new(4.0, 3.0), Vec2::new(3.0, 3.0)],
            Direction::Right,
        )
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Vec2>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction: direction.vector(),
            growth_pending: false,
        }
    }

    /// Sets the movement direction consumed by the next [`Snake::advance`].
    ///
    /// Reversal validation is the input gate's job; the snake applies
    /// whatever it is handed.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction.vector();
    }

    /// Returns the current movement direction as a unit vector.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Queues growth for the next movement step. Idempotent while pending.
    pub fn request_growth(&mut self) {
        self.growth_pending = true;
    }

    /// Moves the snake one cell in its current direction, wrapping at the
    /// board edges.
    ///
    /// With growth pending the tail is kept and the body gains a segment;
    /// otherwise the tail is dropped and the length is unchanged.
    pub fn advance(&mut self, board: Board) {
        let new_head = board.wrap(self.head() + self.direction);

        if self.growth_pending {
            self.growth_pending = false;
        } else {
            let _ = self.body.pop_back();
        }
        self.body.push_front(new_head);
    }

    /// Returns true when the head coincides with any other segment.
    ///
    /// Only meaningful directly after [`Snake::advance`]: the head is the
    /// one segment that can newly overlap, and the food check must run
    /// after this one.
    #[must_use]
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Vec2 {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Vec2) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.body.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::input::Direction;
    use crate::vec2::Vec2;

    use super::Snake;

    #[test]
    fn starting_snake_has_three_segments_heading_right() {
        let snake = Snake::starting_body();

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Vec2::new(5.0, 3.0));
        assert_eq!(snake.direction(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn advance_moves_one_cell_without_changing_length() {
        let mut snake = Snake::starting_body();

        snake.advance(Board::new(20));

        assert_eq!(snake.head(), Vec2::new(6.0, 3.0));
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Vec2::new(3.0, 3.0)), "tail cell is vacated");
    }

    #[test]
    fn advance_wraps_across_the_right_edge() {
        let board = Board::new(20);
        let mut snake = Snake::from_segments(
            vec![Vec2::new(19.0, 7.0), Vec2::new(18.0, 7.0)],
            Direction::Right,
        );

        snake.advance(board);

        assert_eq!(snake.head(), Vec2::new(0.0, 7.0));
    }

    #[test]
    fn advance_wraps_across_the_left_edge() {
        let board = Board::new(20);
        let mut snake = Snake::from_segments(
            vec![Vec2::new(0.0, 7.0), Vec2::new(1.0, 7.0)],
            Direction::Left,
        );

        snake.advance(board);

        assert_eq!(snake.head(), Vec2::new(19.0, 7.0));
    }

    #[test]
    fn growth_adds_exactly_one_segment_and_keeps_the_tail() {
        let mut snake = Snake::starting_body();

        snake.request_growth();
        snake.request_growth(); // idempotent while pending
        snake.advance(Board::new(20));

        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Vec2::new(3.0, 3.0)), "old tail is retained");

        // Growth is consumed: the next step moves without growing.
        snake.advance(Board::new(20));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn self_collision_detects_head_overlap() {
        let colliding = Snake::from_segments(
            vec![
                Vec2::new(5.0, 5.0),
                Vec2::new(4.0, 5.0),
                Vec2::new(3.0, 5.0),
                Vec2::new(5.0, 5.0),
            ],
            Direction::Right,
        );
        assert!(colliding.self_collision());

        let distinct = Snake::starting_body();
        assert!(!distinct.self_collision());
    }
}
