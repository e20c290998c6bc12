use crossterm::event::KeyCode;
use crossterm::style::Color;

use crate::game::Session;
use crate::state::{State, Transition};
use crate::states::{GameOverState, PausedState};
use crate::surface::{FontStyle, Surface, TextAlign};

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_LIVES: Color = Color::Red;
const C_DEBUG: Color = Color::DarkGrey;

/// Active gameplay screen.  Entities, collision and scoring are not built
/// yet; this state owns the play-field frame, the lives HUD and the pause
/// overlay wiring.
#[derive(Default)]
pub struct PlayingState;

impl PlayingState {
    pub fn new() -> Self {
        Self
    }
}

impl State for PlayingState {
    fn name(&self) -> &str {
        "playing"
    }

    fn update(&mut self, session: &mut Session, _dt: f32) -> Transition {
        if session.lives == 0 {
            return Transition::Switch(Box::new(GameOverState::new()));
        }
        Transition::None
    }

    fn draw(
        &mut self,
        session: &Session,
        dt: f32,
        surface: &mut dyn Surface,
    ) -> std::io::Result<()> {
        surface.clear()?;
        draw_field_border(session, surface)?;
        draw_hud(session, surface)?;
        if session.config.debug {
            draw_debug_line(session, dt, surface)?;
        }
        Ok(())
    }

    fn key_down(&mut self, _session: &mut Session, code: KeyCode) -> Transition {
        match code {
            KeyCode::Char('p') | KeyCode::Esc => Transition::Push(Box::new(PausedState::new())),
            _ => Transition::None,
        }
    }
}

// ── Play-field border ─────────────────────────────────────────────────────────

/// Draw the play-field bounds, clamped to the visible surface.  The
/// configured field may be larger than the terminal; off-screen edges are
/// pinned to the surface rim.
fn draw_field_border(session: &Session, surface: &mut dyn Surface) -> std::io::Result<()> {
    if session.width < 3 || session.height < 3 {
        return Ok(());
    }
    let max_x = i32::from(session.width - 1);
    let max_y = i32::from(session.height - 1);
    let b = session.bounds;

    let left = b.left.clamp(0, max_x) as u16;
    let right = b.right.clamp(0, max_x) as u16;
    let top = b.top.clamp(1, max_y) as u16; // row 0 is the HUD
    let bottom = b.bottom.clamp(1, max_y) as u16;
    if right <= left || bottom <= top {
        return Ok(());
    }

    let inner = (right - left).saturating_sub(1) as usize;

    surface.set_fill(C_BORDER)?;
    surface.set_font(FontStyle::Text)?;
    surface.set_align(TextAlign::Left)?;

    surface.draw_text(left, top, &format!("┌{}┐", "─".repeat(inner)))?;
    surface.draw_text(left, bottom, &format!("└{}┘", "─".repeat(inner)))?;
    for row in top + 1..bottom {
        surface.draw_text(left, row, "│")?;
        surface.draw_text(right, row, "│")?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud(session: &Session, surface: &mut dyn Surface) -> std::io::Result<()> {
    let hearts: String = "♥".repeat(session.lives as usize);
    surface.set_fill(C_HUD_LIVES)?;
    surface.set_align(TextAlign::Right)?;
    surface.draw_text(
        session.width.saturating_sub(1),
        0,
        &format!("Lives: {}", hearts),
    )
}

fn draw_debug_line(session: &Session, dt: f32, surface: &mut dyn Surface) -> std::io::Result<()> {
    surface.set_fill(C_DEBUG)?;
    surface.set_align(TextAlign::Left)?;
    surface.draw_text(
        0,
        0,
        &format!("dt={:.4}s held={}", dt, session.pressed_keys.len()),
    )
}
