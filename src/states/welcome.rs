use crossterm::event::KeyCode;
use crossterm::style::Color;

use crate::game::Session;
use crate::state::{State, Transition};
use crate::states::PlayingState;
use crate::surface::{FontStyle, Surface, TextAlign};

/// Title screen.  Space starts a run.
#[derive(Default)]
pub struct WelcomeState;

impl WelcomeState {
    pub fn new() -> Self {
        Self
    }
}

impl State for WelcomeState {
    fn name(&self) -> &str {
        "welcome"
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
        surface.set_fill(Color::White)?;
        surface.set_align(TextAlign::Center)?;

        surface.set_font(FontStyle::Title)?;
        surface.draw_text(cx, cy.saturating_sub(2), "Space Invaders")?;

        surface.set_font(FontStyle::Text)?;
        surface.draw_text(cx, cy, "Press 'Space' to start.")?;
        Ok(())
    }

    fn key_down(&mut self, _session: &mut Session, code: KeyCode) -> Transition {
        match code {
            KeyCode::Char(' ') => Transition::Switch(Box::new(PlayingState::new())),
            _ => Transition::None,
        }
    }
}
