mod board;
mod game;
mod input;
mod menu;
mod render;
mod snake;
mod term;

pub type TermInt = u16;
pub type Coords = (u16, u16);

use anyhow::Result;

fn main() -> Result<()> {
    game::run()
}
