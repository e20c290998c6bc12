/// The `State` trait — one mutually-exclusive game screen.
///
/// Every hook has a default no-op body, so a state implements only the
/// hooks it needs.  Hooks that may change screens return a [`Transition`],
/// which the owning [`Game`](crate::game::Game) applies after the hook
/// returns; states never manipulate the stack directly.

use crossterm::event::KeyCode;

use crate::game::Session;
use crate::surface::Surface;

/// Requested change to the state stack, applied by the stack owner.
pub enum Transition {
    /// Stay on the current state.
    None,
    /// Replace the active state: leave(old), then enter(new).  Stack depth
    /// is unchanged.
    Switch(Box<dyn State>),
    /// Overlay a new state on top; the one beneath resumes when it pops.
    Push(Box<dyn State>),
    /// Remove the active state, restoring whatever was pushed beneath.
    Pop,
}

pub trait State {
    /// Short identifier for logs and assertions.
    fn name(&self) -> &str;

    /// Called exactly once when this state becomes active via a push or
    /// switch.
    fn enter(&mut self, _session: &mut Session) {}

    /// Called exactly once when this state is popped or replaced.
    fn leave(&mut self, _session: &mut Session) {}

    /// Advance the state by one fixed tick of `dt` seconds.
    fn update(&mut self, _session: &mut Session, _dt: f32) -> Transition {
        Transition::None
    }

    /// Render the state.  Runs after `update` within the same tick.
    fn draw(
        &mut self,
        _session: &Session,
        _dt: f32,
        _surface: &mut dyn Surface,
    ) -> std::io::Result<()> {
        Ok(())
    }

    /// A key went down while this state was active.
    fn key_down(&mut self, _session: &mut Session, _code: KeyCode) -> Transition {
        Transition::None
    }

    /// A key was released while this state was active.
    fn key_up(&mut self, _session: &mut Session, _code: KeyCode) -> Transition {
        Transition::None
    }
}
