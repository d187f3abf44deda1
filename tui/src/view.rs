//! Draws the board from the engine's read-only cell views.

use std::io::Write;

use anyhow::Result;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};
use granada_core::{CellView, Coord2, Game, GameState};

pub fn draw(out: &mut impl Write, game: &Game, cursor_pos: Coord2) -> Result<()> {
    queue!(out, Clear(ClearType::All))?;

    for row in 0..game.rows() {
        queue!(out, cursor::MoveTo(0, row))?;
        for col in 0..game.cols() {
            draw_cell(out, game.cell_view((row, col))?, (row, col) == cursor_pos)?;
        }
    }

    draw_status(out, game)?;
    out.flush()?;
    Ok(())
}

fn draw_cell(out: &mut impl Write, view: CellView, under_cursor: bool) -> Result<()> {
    if under_cursor {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }

    match view {
        CellView::Hidden => queue!(out, SetForegroundColor(Color::DarkGrey), Print('·'))?,
        CellView::Flagged => queue!(out, SetForegroundColor(Color::Red), Print('⚑'))?,
        CellView::Revealed { bomb: true, .. } => {
            queue!(out, SetForegroundColor(Color::Red), Print('✸'))?
        }
        CellView::Revealed {
            adjacent_bombs: 0, ..
        } => queue!(out, Print(' '))?,
        CellView::Revealed { adjacent_bombs, .. } => queue!(
            out,
            SetForegroundColor(count_color(adjacent_bombs)),
            Print(char::from(b'0' + adjacent_bombs))
        )?,
    }

    queue!(out, ResetColor)?;
    if under_cursor {
        queue!(out, SetAttribute(Attribute::NoReverse))?;
    }
    Ok(())
}

fn draw_status(out: &mut impl Write, game: &Game) -> Result<()> {
    let hint = match game.state() {
        GameState::Lost => "boom! press any key to exit",
        GameState::Won => "field cleared! press any key to exit",
        _ => "arrows move, enter reveals, space flags, q quits",
    };
    queue!(
        out,
        cursor::MoveTo(0, game.rows() + 1),
        Clear(ClearType::CurrentLine),
        Print(format!("bombs: {}  {}", game.bomb_count(), hint))
    )?;
    Ok(())
}

fn count_color(count: u8) -> Color {
    match count {
        1 => Color::Blue,
        2 => Color::Green,
        3 => Color::Red,
        4 => Color::DarkBlue,
        5 => Color::DarkRed,
        6 => Color::Cyan,
        7 => Color::Magenta,
        _ => Color::DarkGrey,
    }
}
