//! Terminal presentation layer
//!
//! Reads positions, outlines, and life fractions out of the sim and queues
//! crossterm draw calls. Nothing here feeds back into gameplay: the sim never
//! sees the terminal, and a headless harness can skip this module entirely.

use std::io::Write;

use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    style::{self, Color, Print},
    terminal,
};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::rotate_deg;
use crate::sim::{GamePhase, GameState};

/// Maps sim-space coordinates onto the terminal cell grid
struct Viewport {
    cols: u16,
    rows: u16,
}

impl Viewport {
    /// Cell for an arena point, or `None` when it lies outside the arena
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(0.0..ARENA_WIDTH).contains(&x) || !(0.0..ARENA_HEIGHT).contains(&y) {
            return None;
        }
        let col = ((x / ARENA_WIDTH) * self.cols as f32) as u16;
        let row = ((y / ARENA_HEIGHT) * self.rows as f32) as u16;
        Some((col.min(self.cols - 1), row.min(self.rows - 1)))
    }
}

/// Draw one frame of the current state
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport { cols, rows };

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_stars(out, state, &view)?;
    draw_debris(out, state, &view)?;
    draw_bullets(out, state, &view)?;
    draw_particles(out, state, &view)?;
    draw_rocket(out, state, &view)?;
    draw_hud(out, state)?;

    match state.phase {
        GamePhase::StartScreen => draw_start_overlay(out, &view)?,
        GamePhase::Paused => draw_pause_overlay(out, &view)?,
        GamePhase::GameOver => draw_game_over_overlay(out, state, &view)?,
        GamePhase::Playing => {}
    }

    out.queue(style::ResetColor)?;
    out.flush()
}

fn put<W: Write>(out: &mut W, cell: Option<(u16, u16)>, glyph: char) -> std::io::Result<()> {
    if let Some((col, row)) = cell {
        out.queue(MoveTo(col, row))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_stars<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    for star in &state.stars {
        let (color, glyph) = if star.brightness > 0.75 {
            (Color::White, '+')
        } else if star.brightness > 0.5 {
            (Color::Grey, '.')
        } else {
            (Color::DarkGrey, '.')
        };
        out.queue(style::SetForegroundColor(color))?;
        put(out, view.cell(star.pos.x, star.pos.y), glyph)?;
    }
    Ok(())
}

fn draw_debris<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    for debris in &state.debris {
        out.queue(style::SetForegroundColor(Color::DarkYellow))?;
        for &offset in &debris.outline {
            let p = debris.pos + rotate_deg(offset, debris.rotation);
            put(out, view.cell(p.x, p.y), '#')?;
        }
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        for hole in &debris.holes {
            let p = debris.pos + rotate_deg(hole.offset, debris.rotation);
            put(out, view.cell(p.x, p.y), 'o')?;
        }
    }
    Ok(())
}

fn draw_bullets<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(Color::White))?;
    for bullet in &state.rocket.bullets {
        put(out, view.cell(bullet.pos.x, bullet.pos.y), '*')?;
    }
    Ok(())
}

fn draw_particles<W: Write>(
    out: &mut W,
    state: &GameState,
    view: &Viewport,
) -> std::io::Result<()> {
    for particle in &state.particles {
        // brightness follows remaining life
        let (color, glyph) = if particle.life > 0.66 {
            (Color::White, '*')
        } else if particle.life > 0.33 {
            (Color::Grey, '+')
        } else {
            (Color::DarkGrey, '.')
        };
        out.queue(style::SetForegroundColor(color))?;
        put(out, view.cell(particle.pos.x, particle.pos.y), glyph)?;
    }
    Ok(())
}

fn draw_rocket<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let rocket = &state.rocket;
    let center_x = rocket.x + rocket.width / 2.0;
    let base_y = rocket.y + rocket.height;

    // nose, hull sides, then one muzzle marker per launcher
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    put(out, view.cell(center_x, rocket.y), '^')?;

    let Some((_, top_row)) = view.cell(center_x, rocket.y) else {
        return Ok(());
    };
    let Some((_, base_row)) = view.cell(center_x, base_y - 1.0) else {
        return Ok(());
    };
    for row in top_row + 1..=base_row {
        let y = (row as f32 + 0.5) / view.rows as f32 * ARENA_HEIGHT;
        put(out, view.cell(rocket.x, y), '|')?;
        put(out, view.cell(rocket.x + rocket.width - 1.0, y), '|')?;
    }

    out.queue(style::SetForegroundColor(Color::Red))?;
    for muzzle_x in rocket.muzzle_xs() {
        put(out, view.cell(muzzle_x, base_y - 1.0), '=')?;
    }
    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(MoveTo(0, 0))?;
    out.queue(Print(format!("Score: {}", state.score)))?;
    out.queue(MoveTo(0, 1))?;
    out.queue(Print(format!("Level: {}", state.difficulty_level)))?;
    out.queue(MoveTo(0, 2))?;
    out.queue(Print(format!("Debris: {}", state.debris.len())))?;
    Ok(())
}

fn centered_line<W: Write>(
    out: &mut W,
    view: &Viewport,
    row: u16,
    color: Color,
    text: &str,
) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_start_overlay<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let cy = view.rows / 2;
    centered_line(out, view, cy.saturating_sub(4), Color::Cyan, "D E B R I S   R A I N")?;
    centered_line(
        out,
        view,
        cy.saturating_sub(2),
        Color::White,
        "Use LEFT and RIGHT arrows to move",
    )?;
    centered_line(out, view, cy.saturating_sub(1), Color::White, "Press SPACE to shoot")?;
    centered_line(out, view, cy, Color::White, "Destroy the space debris!")?;
    centered_line(out, view, cy + 2, Color::Yellow, "Press ENTER to start")?;
    centered_line(out, view, cy + 3, Color::DarkGrey, "Q quits")?;
    Ok(())
}

fn draw_pause_overlay<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let cy = view.rows / 2;
    centered_line(out, view, cy.saturating_sub(1), Color::Yellow, "PAUSED")?;
    centered_line(out, view, cy + 1, Color::White, "P resume   R restart   Q quit")?;
    Ok(())
}

fn draw_game_over_overlay<W: Write>(
    out: &mut W,
    state: &GameState,
    view: &Viewport,
) -> std::io::Result<()> {
    let cy = view.rows / 2;
    centered_line(out, view, cy.saturating_sub(2), Color::Red, "GAME OVER!")?;
    centered_line(
        out,
        view,
        cy,
        Color::White,
        &format!("Final Score: {}", state.score),
    )?;
    centered_line(
        out,
        view,
        cy + 1,
        Color::White,
        &format!("Level Reached: {}", state.difficulty_level),
    )?;
    centered_line(out, view, cy + 3, Color::Yellow, "R restart   Q quit")?;
    Ok(())
}
