use crate::board::{Board, Collision};
use crate::Coords;

use Direction::*;
use StepOutcome::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// No heading set, nothing moved.
    Idle,
    Moved { ate_food: bool },
    /// The body is left untouched; the caller ends the game.
    Crashed(Collision),
}

pub struct Snake {
    body: Vec<Coords>,
    heading: Option<Direction>,
}

impl Snake {
    /// A new snake is a single cell with no heading; it starts moving on
    /// the first direction key.
    pub fn new(pos: Coords) -> Self {
        Snake { body: vec![pos], heading: None }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[self.body.len() - 1]
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    /// U-turn guard: the exact opposite of the current heading is ignored,
    /// since reversing in place would be an instant self-collision.
    pub fn set_heading(&mut self, new_heading: Direction) {
        match self.heading {
            Some(current) if new_heading == current.opposite() => {}
            _ => self.heading = Some(new_heading),
        }
    }

    pub fn stop(&mut self) {
        self.heading = None;
    }

    /// Advances the snake one cell along its heading. Eating keeps the tail
    /// in place, so the body grows by exactly one; otherwise the tail cell
    /// is dropped and the length is unchanged.
    pub fn step(&mut self, board: &Board, food: Coords) -> StepOutcome {
        let heading = match self.heading {
            Some(d) => d,
            None => return Idle,
        };

        let (hx, hy) = self.head();
        let new_head = match heading {
            Up => (hx, hy - 1),
            Down => (hx, hy + 1),
            Left => (hx - 1, hy),
            Right => (hx + 1, hy),
        };

        if let Some(hit) = board.classify(new_head, &self.body) {
            return Crashed(hit);
        }

        self.body.push(new_head);

        if new_head == food {
            Moved { ate_food: true }
        } else {
            self.body.remove(0);
            Moved { ate_food: false }
        }
    }

    pub fn head_char(&self) -> char {
        match self.heading {
            Some(Up) => '^',
            Some(Down) => 'v',
            Some(Left) => '<',
            Some(Right) => '>',
            None => '@',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FOOD: Coords = (1, 1);

    fn board() -> Board {
        Board::new(20, 10)
    }

    #[test]
    fn step_without_heading_is_a_noop() {
        let mut snake = Snake::new((10, 5));

        assert_eq!(snake.step(&board(), NO_FOOD), StepOutcome::Idle);
        assert_eq!(snake.body(), &[(10, 5)]);
    }

    #[test]
    fn step_moves_the_head_and_drops_the_tail() {
        let mut snake = Snake::new((10, 5));
        snake.set_heading(Right);

        let outcome = snake.step(&board(), NO_FOOD);

        assert_eq!(outcome, StepOutcome::Moved { ate_food: false });
        assert_eq!(snake.body(), &[(11, 5)]);
    }

    #[test]
    fn eating_grows_the_body_by_one() {
        let mut snake = Snake::new((5, 5));
        snake.set_heading(Right);

        assert_eq!(snake.step(&board(), (6, 5)), StepOutcome::Moved { ate_food: true });
        assert_eq!(snake.body(), &[(5, 5), (6, 5)]);

        // Now at length two, heading onto food at (7, 5).
        assert_eq!(snake.step(&board(), (7, 5)), StepOutcome::Moved { ate_food: true });
        assert_eq!(snake.body(), &[(5, 5), (6, 5), (7, 5)]);
    }

    #[test]
    fn step_never_shrinks_the_body() {
        let mut snake = Snake::new((5, 5));
        snake.set_heading(Right);

        let mut prev_len = snake.body().len();
        for food in [(6, 5), (7, 5), (9, 9)].iter() {
            snake.step(&board(), *food);
            assert!(snake.body().len() >= prev_len);
            prev_len = snake.body().len();
        }
    }

    #[test]
    fn walking_into_a_wall_crashes() {
        let mut snake = Snake::new((18, 5));
        snake.set_heading(Right);

        let outcome = snake.step(&board(), NO_FOOD);

        assert_eq!(outcome, StepOutcome::Crashed(Collision::Wall));
        assert_eq!(snake.body(), &[(18, 5)], "a crash leaves the body untouched");
    }

    #[test]
    fn walking_into_the_body_crashes() {
        // Grow to length 5 along a row, then hook back into the body.
        let mut snake = Snake::new((3, 5));
        snake.set_heading(Right);
        for x in 4..=7 {
            assert_eq!(snake.step(&board(), (x, 5)), StepOutcome::Moved { ate_food: true });
        }

        snake.set_heading(Up);
        snake.step(&board(), NO_FOOD);
        snake.set_heading(Left);
        snake.step(&board(), NO_FOOD);
        snake.set_heading(Down);

        assert_eq!(snake.step(&board(), NO_FOOD), StepOutcome::Crashed(Collision::SelfHit));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = Snake::new((10, 5));
        snake.set_heading(Right);

        snake.set_heading(Left);
        assert_eq!(snake.heading(), Some(Right));

        snake.set_heading(Up);
        assert_eq!(snake.heading(), Some(Up));
        snake.set_heading(Down);
        assert_eq!(snake.heading(), Some(Up));
    }

    #[test]
    fn any_heading_is_allowed_from_standstill() {
        let mut snake = Snake::new((10, 5));
        snake.set_heading(Right);
        snake.stop();

        assert_eq!(snake.heading(), None);
        snake.set_heading(Left);
        assert_eq!(snake.heading(), Some(Left));
    }
}
