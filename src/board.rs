use crate::{Coords, TermInt};

use rand::seq::SliceRandom;

pub const MIN_WIDTH: TermInt = 20;
pub const MIN_HEIGHT: TermInt = 10;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Collision {
    Wall,
    SelfHit,
}

/// The playable grid. The outermost ring of cells is the wall; everything
/// inside it is fair game for the snake and the food.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Board {
    width: TermInt,
    height: TermInt,
}

impl Board {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        Board {
            width: width.max(MIN_WIDTH),
            height: height.max(MIN_HEIGHT),
        }
    }

    /// Builds a board from a terminal size probe. One row is reserved so the
    /// bottom frame line never pushes the screen into scrolling.
    pub fn from_terminal(cols: TermInt, rows: TermInt, half_size: bool) -> Self {
        let (mut w, mut h) = (cols, rows.saturating_sub(1));

        if half_size {
            w /= 2;
            h /= 2;
        }

        Board::new(w, h)
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    pub fn is_wall(&self, (x, y): Coords) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    /// Classifies a candidate head position against the pre-move body.
    /// The wall check runs first, so a cell that somehow matched both
    /// would report as a wall hit.
    pub fn classify(&self, head: Coords, body: &[Coords]) -> Option<Collision> {
        if self.is_wall(head) {
            Some(Collision::Wall)
        } else if body.contains(&head) {
            Some(Collision::SelfHit)
        } else {
            None
        }
    }

    /// Picks a uniformly random interior cell not occupied by the snake.
    /// Returns None only when the interior is completely covered.
    pub fn place_food(&self, body: &[Coords]) -> Option<Coords> {
        let choices: Vec<Coords> = self
            .interior()
            .filter(|pos| !body.contains(pos))
            .collect();

        choices.choose(&mut rand::thread_rng()).copied()
    }

    fn interior(&self) -> impl Iterator<Item = Coords> + '_ {
        (1..self.height - 1).flat_map(move |y| (1..self.width - 1).map(move |x| (x, y)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(MIN_WIDTH, MIN_HEIGHT)
    }
}
