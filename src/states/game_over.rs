use crossterm::event::KeyCode;
use crossterm::style::Color;

use crate::game::Session;
use crate::state::{State, Transition};
use crate::states::WelcomeState;
use crate::surface::{FontStyle, Surface, TextAlign};

/// End-of-run screen.  Space returns to the title.
#[derive(Default)]
pub struct GameOverState;

impl GameOverState {
    pub fn new() -> Self {
        Self
    }
}

impl State for GameOverState {
    fn name(&self) -> &str {
        "game-over"
    }

    fn draw(
        &mut self,
        session: &Session,
        _dt: f32,
        surface: &mut dyn Surface,
    ) -> std::io::Result<()> {
        let cx = session.width / 2;
        let cy = session.height / 2;

        surface.clear()?;
        surface.set_align(TextAlign::Center)?;

        surface.set_fill(Color::Red)?;
        surface.set_font(FontStyle::Title)?;
        surface.draw_text(cx, cy.saturating_sub(2), "Game Over")?;

        surface.set_fill(Color::White)?;
        surface.set_font(FontStyle::Text)?;
        surface.draw_text(cx, cy, "Press 'Space' for the title screen.")?;
        Ok(())
    }

    fn key_down(&mut self, _session: &mut Session, code: KeyCode) -> Transition {
        match code {
            KeyCode::Char(' ') => Transition::Switch(Box::new(WelcomeState::new())),
            _ => Transition::None,
        }
    }
}
