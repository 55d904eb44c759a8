use crate::board::Board;
use crate::snake::Snake;
use crate::Coords;

const WALL_CHAR: char = '#';
const FOOD_CHAR: char = '*';
const SNAKE_BODY_CHAR: char = 'o';
const EMPTY_CHAR: char = ' ';

const TITLE_ART: [&str; 3] = [
    "~ ~ ~ ~ ~ ~ ~",
    "  S N A K E  ",
    "~ ~ ~ ~ ~ ~ ~",
];

/// How far the title block sits above the vertical center of the screen.
const TITLE_LIFT: i32 = 2;

/// Renders the playing field as one full-size frame. Every frame covers the
/// whole board, so homing the cursor between frames fully overwrites the
/// previous one without a clear.
pub fn board_frame(board: &Board, snake: &Snake, food: Coords) -> Vec<String> {
    let mut rows = Vec::with_capacity(board.height() as usize);

    for y in 0..board.height() {
        let mut row = String::with_capacity(board.width() as usize);
        for x in 0..board.width() {
            row.push(cell_char(board, snake, food, (x, y)));
        }
        rows.push(row);
    }

    rows
}

fn cell_char(board: &Board, snake: &Snake, food: Coords, pos: Coords) -> char {
    if board.is_wall(pos) {
        WALL_CHAR
    } else if pos == food {
        FOOD_CHAR
    } else if pos == snake.head() {
        snake.head_char()
    } else if snake.body().contains(&pos) {
        SNAKE_BODY_CHAR
    } else {
        EMPTY_CHAR
    }
}

pub fn pause_frame(board: &Board) -> Vec<String> {
    let lines = ["PAUSED", "", "p to resume"];
    let mut rows = blank_frame(board);
    overlay_centered(&mut rows, board, &lines, 0);
    rows
}

pub fn menu_frame(
    board: &Board,
    game_in_progress: bool,
    half_size: bool,
    diagnostic: Option<&str>,
) -> Vec<String> {
    let start = if game_in_progress { "1. resume" } else { "1. start" };
    let size = if half_size { "2. half-size: on" } else { "2. half-size: off" };
    let lines = [
        TITLE_ART[0],
        TITLE_ART[1],
        TITLE_ART[2],
        "",
        start,
        size,
        "3. controls",
        "4. quit",
    ];

    let mut rows = blank_frame(board);
    overlay_centered(&mut rows, board, &lines, -TITLE_LIFT);

    if let Some(msg) = diagnostic {
        let last = board.height() as usize - 1;
        rows[last] = centered(msg, board.width() as usize);
    }

    rows
}

pub fn controls_frame(board: &Board) -> Vec<String> {
    let lines = [
        "CONTROLS",
        "",
        "w a s d  move",
        "x  stop",
        "p  pause",
        "m / esc  menu",
        "ctrl+c  quit",
        "",
        "press any key",
    ];

    let mut rows = blank_frame(board);
    overlay_centered(&mut rows, board, &lines, 0);
    rows
}

///////////////////////////////////////////////////////////////////////////

fn blank_frame(board: &Board) -> Vec<String> {
    vec![" ".repeat(board.width() as usize); board.height() as usize]
}

/// Writes a block of lines centered on the board, shifted by y_offset rows.
/// Lines that would land outside the frame are dropped.
fn overlay_centered(rows: &mut Vec<String>, board: &Board, lines: &[&str], y_offset: i32) {
    let height = board.height() as i32;
    let top = (height / 2 - lines.len() as i32 / 2 + y_offset).max(0);

    for (i, line) in lines.iter().enumerate() {
        let y = top + i as i32;
        if y >= height {
            break;
        }
        rows[y as usize] = centered(line, board.width() as usize);
    }
}

fn centered(text: &str, width: usize) -> String {
    if text.len() >= width {
        text.chars().take(width).collect()
    } else {
        format!("{: ^width$}", text, width = width)
    }
}
