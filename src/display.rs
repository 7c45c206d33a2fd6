/// Rendering layer — all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable frame. Engine
/// coordinates are 1-based character cells; crossterm's are 0-based.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use terminal_invaders::entities::{Frame, Overlay, Sprite};
use terminal_invaders::shape::ShapeId;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BOSS: Color = Color::Magenta;
const C_BULLET: Color = Color::Cyan;
const C_DAMAGED: Color = Color::Rgb { r: 245, g: 0, b: 0 };
const C_TITLE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

const FILLED: &str = "█";

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame, width: u16, height: u16) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match frame.overlay {
        Some(Overlay::Start) => draw_start_screen(out, width, height)?,
        Some(Overlay::Loss { score }) => draw_loss_screen(out, score, width, height)?,
        None => {
            draw_hud(out, frame)?;
            for sprite in &frame.sprites {
                draw_sprite(out, sprite, width, height)?;
            }
        }
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, frame: &Frame) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Wave:{:>4}", frame.wave)))?;
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

fn sprite_color(sprite: &Sprite) -> Color {
    if sprite.damaged {
        return C_DAMAGED;
    }
    match sprite.shape {
        ShapeId::Player => C_PLAYER,
        ShapeId::Boss | ShapeId::BossTurned => C_BOSS,
        ShapeId::Bullet | ShapeId::PlayerShot => C_BULLET,
        ShapeId::Scout | ShapeId::Weaver | ShapeId::Brute => C_ENEMY,
    }
}

/// Only filled cells are drawn; cells off screen are clipped.
fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: &Sprite,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(sprite_color(sprite)))?;
    for (col, row) in sprite.shape.shape().cells() {
        let x = sprite.x + col as i32 - 1;
        let y = sprite.y + row as i32 - 1;
        if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
            continue;
        }
        out.queue(cursor::MoveTo(x as u16, y as u16))?;
        out.queue(Print(FILLED))?;
    }
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_start_screen<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════════╗", C_TITLE),
        ("║    TERMINAL  INVADERS    ║", C_TITLE),
        ("╚══════════════════════════╝", C_TITLE),
        ("", C_HINT),
        ("W: SHOOT | A: LEFT | D: RIGHT", Color::White),
        ("PRESS S TO START   Q TO QUIT", C_HINT),
    ];
    draw_centered(out, lines, width, height)
}

fn draw_loss_screen<W: Write>(
    out: &mut W,
    score: u32,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let score_line = format!("Score: {score}");
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║      YOU  LOSE     ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        ("PRESS S TO RESTART   Q TO QUIT", Color::White),
    ];
    draw_centered(out, lines, width, height)
}
