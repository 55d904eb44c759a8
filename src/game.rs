use std::thread::sleep;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::event::{poll, read, Event, KeyEvent};

use crate::board::{Board, Collision};
use crate::input::{self, Command};
use crate::menu::{self, MenuChoice};
use crate::render;
use crate::snake::{Direction, Snake, StepOutcome};
use crate::term::TermManager;
use crate::Coords;

const TICK_INTERVAL_MS: u64 = 10;
const TICKS_UNTIL_STEP: u64 = 10; // one snake step per ~100ms
const VERTICAL_STEP_FACTOR: f64 = 1.35;
const MENU_POLL_MS: u64 = 50;
const PROBE_DIAGNOSTIC: &str = "probe failed; 20x10";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Mode {
    Menu,
    Playing,
    Paused,
}

impl Mode {
    fn toggle_pause(self) -> Mode {
        match self {
            Mode::Playing => Mode::Paused,
            Mode::Paused => Mode::Playing,
            Mode::Menu => Mode::Menu,
        }
    }
}

/// Why the process is ending. Collisions are the game's defined end state,
/// not errors, so all of these exit with status 0.
enum GameEnd {
    Quit,
    Crashed(Collision),
    BoardFull,
}

enum PlayEnd {
    ToMenu,
    Over(GameEnd),
}

enum MenuOutcome {
    Play,
    Quit,
}

pub fn run() -> Result<()> {
    let mut game = Game::new();
    let end = game.run()?;

    // The terminal is back in cooked mode here, so this prints normally.
    match end {
        GameEnd::Quit => {}
        GameEnd::Crashed(Collision::Wall) => println!("Game over: the snake hit a wall."),
        GameEnd::Crashed(Collision::SelfHit) => println!("Game over: the snake ran into itself."),
        GameEnd::BoardFull => println!("You filled the whole board. Nowhere left to go."),
    }

    Ok(())
}

/// One game in progress. Dropped when the player crashes or never started.
struct Session {
    snake: Snake,
    food: Coords,
}

impl Session {
    fn new(board: &Board) -> Result<Self> {
        let snake = Snake::new(board.center());
        let food = board
            .place_food(snake.body())
            .context("no free cell left for food")?;
        Ok(Session { snake, food })
    }
}

/// The driver. Owns every piece of game state for the process lifetime;
/// nothing here is shared or concurrent.
struct Game {
    term: TermManager,
    board: Board,
    half_size: bool,
    probe_failed: bool,
    mode: Mode,
    session: Option<Session>,
}

impl Game {
    fn new() -> Self {
        let mut game = Game {
            term: TermManager::new(),
            board: Board::default(),
            half_size: false,
            probe_failed: false,
            mode: Mode::Menu,
            session: None,
        };
        game.probe_dimensions();
        game
    }

    fn run(&mut self) -> Result<GameEnd> {
        self.term.setup()?;
        let result = self.main_loop();
        // Restore before propagating so an error message lands on a sane
        // terminal; Drop covers the panic path.
        self.term.restore()?;
        result
    }

    fn main_loop(&mut self) -> Result<GameEnd> {
        loop {
            match self.mode {
                Mode::Menu => match self.menu_loop()? {
                    MenuOutcome::Play => {
                        if self.session.is_none() {
                            self.probe_dimensions();
                            self.session = Some(Session::new(&self.board)?);
                        }
                        // Returning from the menu always resumes unpaused.
                        self.mode = Mode::Playing;
                    }
                    MenuOutcome::Quit => return Ok(GameEnd::Quit),
                },
                Mode::Playing | Mode::Paused => match self.play()? {
                    PlayEnd::ToMenu => self.mode = Mode::Menu,
                    PlayEnd::Over(end) => return Ok(end),
                },
            }
        }
    }

    /// The blocking menu sub-loop: one choice per iteration, redrawing
    /// silently on anything unrecognized, until the player resumes or quits.
    fn menu_loop(&mut self) -> Result<MenuOutcome> {
        self.term.clear()?;

        loop {
            let diagnostic = if self.probe_failed { Some(PROBE_DIAGNOSTIC) } else { None };
            let frame = render::menu_frame(
                &self.board,
                self.session.is_some(),
                self.half_size,
                diagnostic,
            );
            self.term.draw_frame(&frame)?;

            match menu::map_choice(&wait_key()?) {
                Some(MenuChoice::StartOrResume) => return Ok(MenuOutcome::Play),
                Some(MenuChoice::ToggleSize) => {
                    // Only takes effect between games.
                    if self.session.is_none() {
                        self.half_size = !self.half_size;
                        self.probe_dimensions();
                        self.term.clear()?;
                    }
                }
                Some(MenuChoice::ShowControls) => {
                    self.term.clear()?;
                    self.term.draw_frame(&render::controls_frame(&self.board))?;
                    wait_key()?;
                    self.term.clear()?;
                }
                Some(MenuChoice::Quit) => return Ok(MenuOutcome::Quit),
                None => {}
            }
        }
    }

    /// The fixed-tick game loop. Each iteration sleeps, decodes at most one
    /// command, and every TICKS_UNTIL_STEP ticks applies the buffered
    /// heading, moves the snake and redraws.
    fn play(&mut self) -> Result<PlayEnd> {
        let session = match self.session.as_mut() {
            Some(s) => s,
            None => bail!("entered play mode without a game in progress"),
        };

        self.term.clear()?;
        self.term
            .draw_frame(&render::board_frame(&self.board, &session.snake, session.food))?;

        // Direction presses are buffered and applied once per step, so two
        // quick presses can't fold the snake back onto itself between steps.
        let mut pending_dir: Option<Direction> = None;
        let mut ticks_left = TICKS_UNTIL_STEP;

        loop {
            sleep(Duration::from_millis(TICK_INTERVAL_MS));

            if let Some(cmd) = input::poll_command(Duration::from_millis(1))? {
                match cmd {
                    Command::Move(d) => pending_dir = Some(d),
                    Command::Stop => {
                        pending_dir = None;
                        session.snake.stop();
                    }
                    Command::TogglePause => {
                        self.mode = self.mode.toggle_pause();
                        let frame = if self.mode == Mode::Paused {
                            render::pause_frame(&self.board)
                        } else {
                            render::board_frame(&self.board, &session.snake, session.food)
                        };
                        self.term.draw_frame(&frame)?;
                    }
                    Command::OpenMenu => return Ok(PlayEnd::ToMenu),
                    Command::Quit => return Ok(PlayEnd::Over(GameEnd::Quit)),
                }
            }

            if self.mode != Mode::Playing {
                continue;
            }

            ticks_left -= 1;
            if ticks_left > 0 {
                continue;
            }

            if let Some(d) = pending_dir.take() {
                session.snake.set_heading(d);
            }

            // Terminal cells are taller than wide, so vertical travel gets
            // a longer step interval to match the apparent speed.
            ticks_left = match session.snake.heading() {
                Some(Direction::Up) | Some(Direction::Down) => {
                    (TICKS_UNTIL_STEP as f64 * VERTICAL_STEP_FACTOR).ceil() as u64
                }
                _ => TICKS_UNTIL_STEP,
            };

            match session.snake.step(&self.board, session.food) {
                StepOutcome::Idle => {}
                StepOutcome::Crashed(hit) => return Ok(PlayEnd::Over(GameEnd::Crashed(hit))),
                StepOutcome::Moved { ate_food } => {
                    if ate_food {
                        match self.board.place_food(session.snake.body()) {
                            Some(food) => session.food = food,
                            None => return Ok(PlayEnd::Over(GameEnd::BoardFull)),
                        }
                    }
                    self.term
                        .draw_frame(&render::board_frame(&self.board, &session.snake, session.food))?;
                }
            }
        }
    }

    fn probe_dimensions(&mut self) {
        match self.term.probe_size() {
            Some((cols, rows)) => {
                self.board = Board::from_terminal(cols, rows, self.half_size);
                self.probe_failed = false;
            }
            None => {
                self.board = Board::default();
                self.probe_failed = true;
            }
        }
    }
}

/// Waits for the next key press. Polling with a timeout keeps this a
/// bounded wait per iteration rather than a busy spin.
fn wait_key() -> Result<KeyEvent> {
    loop {
        if poll(Duration::from_millis(MENU_POLL_MS))? {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_toggles_between_playing_and_paused() {
        assert_eq!(Mode::Playing.toggle_pause(), Mode::Paused);
        assert_eq!(Mode::Paused.toggle_pause(), Mode::Playing);
        assert_eq!(Mode::Menu.toggle_pause(), Mode::Menu);
    }

    #[test]
    fn a_fresh_session_starts_at_the_center() {
        let board = Board::new(20, 10);
        let session = Session::new(&board).unwrap();

        assert_eq!(session.snake.body(), &[(10, 5)]);
        assert_eq!(session.snake.heading(), None);
        assert!(!board.is_wall(session.food));
        assert_ne!(session.food, (10, 5));
    }

    #[test]
    fn visiting_the_menu_leaves_the_session_untouched() {
        let board = Board::new(20, 10);
        let mut game = Game {
            term: TermManager::new(),
            board,
            half_size: false,
            probe_failed: false,
            mode: Mode::Playing,
            session: Some(Session::new(&board).unwrap()),
        };

        let body_before = game.session.as_ref().unwrap().snake.body().to_vec();
        let food_before = game.session.as_ref().unwrap().food;

        // Open and leave the menu a few times without resuming into a step.
        for _ in 0..3 {
            game.mode = Mode::Menu;
            game.mode = Mode::Playing;
        }

        let session = game.session.as_ref().unwrap();
        assert_eq!(session.snake.body(), &body_before[..]);
        assert_eq!(session.food, food_before);
    }
}
