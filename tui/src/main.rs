use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use granada_core::{Coord2, Game, GameConfig};

use input::{Action, Direction};

mod input;
mod view;

#[derive(Parser, Debug)]
#[command(name = "granada", about = "Terminal minesweeper", version)]
struct Cli {
    /// Board rows
    #[arg(long, default_value_t = 16)]
    rows: u16,
    /// Board columns
    #[arg(long, default_value_t = 32)]
    cols: u16,
    /// Bomb placement seed, taken from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // stderr so a `2>granada.log` redirect keeps diagnostics off the board
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(seed_from_time);
    let game = Game::new(GameConfig::new(cli.rows, cli.cols, seed))?;

    App::new(game).run()
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Restores the terminal even when the event loop errors out.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        let _ = disable_raw_mode();
    }
}

struct App {
    game: Game,
    cursor: Coord2,
}

impl App {
    fn new(game: Game) -> Self {
        Self {
            game,
            cursor: (0, 0),
        }
    }

    fn run(mut self) -> Result<()> {
        let _guard = TerminalGuard::enter()?;
        let mut out = io::stdout();

        loop {
            view::draw(&mut out, &self.game, self.cursor)?;

            if self.game.is_game_over() {
                wait_for_key()?;
                break;
            }

            let Event::Key(key) = event::read()? else {
                continue;
            };
            match input::action_for(key) {
                Some(Action::Quit) => {
                    log::info!("exiting because the user asked to");
                    break;
                }
                Some(Action::Move(direction)) => self.move_cursor(direction),
                Some(Action::Reveal) => {
                    self.game.reveal(self.cursor)?;
                }
                Some(Action::ToggleFlag) => self.game.toggle_flag(self.cursor)?,
                None => {}
            }
        }

        Ok(())
    }

    fn move_cursor(&mut self, direction: Direction) {
        let (row, col) = self.cursor;
        self.cursor = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(self.game.rows() - 1), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(self.game.cols() - 1)),
        };
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
