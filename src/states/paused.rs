use crossterm::event::KeyCode;
use crossterm::style::Color;

use crate::game::Session;
use crate::state::{State, Transition};
use crate::surface::{FontStyle, Surface, TextAlign};

/// Modal pause overlay.  Pushed on top of the playing state, which resumes
/// untouched when this pops; the banner therefore draws without clearing.
#[derive(Default)]
pub struct PausedState;

impl PausedState {
    pub fn new() -> Self {
        Self
    }
}

impl State for PausedState {
    fn name(&self) -> &str {
        "paused"
    }

    fn draw(
        &mut self,
        session: &Session,
        _dt: f32,
        surface: &mut dyn Surface,
    ) -> std::io::Result<()> {
        let cx = session.width / 2;
        let cy = session.height / 2;

        surface.set_fill(Color::Yellow)?;
        surface.set_align(TextAlign::Center)?;

        surface.set_font(FontStyle::Title)?;
        surface.draw_text(cx, cy, "PAUSED")?;

        surface.set_font(FontStyle::Text)?;
        surface.draw_text(cx, cy + 2, "Press 'p' to resume.")?;
        Ok(())
    }

    fn key_down(&mut self, _session: &mut Session, code: KeyCode) -> Transition {
        match code {
            KeyCode::Char('p') | KeyCode::Esc => Transition::Pop,
            _ => Transition::None,
        }
    }
}
