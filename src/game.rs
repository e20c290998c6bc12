/// Session state and the state stack — the hub the clock and input both
/// drive.
///
/// `Game` owns an ordered stack of states (last element = active) and the
/// [`Session`] every hook receives.  The two live in separate fields so a
/// state borrowed off the stack can mutate the session freely.

use std::collections::HashSet;

use crossterm::event::KeyCode;

use crate::config::GameConfig;
use crate::state::{State, Transition};
use crate::states::WelcomeState;
use crate::surface::Surface;

/// Play-field rectangle, centred within the render surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Session-wide mutable data shared with every state hook.
#[derive(Clone, Debug)]
pub struct Session {
    pub config: GameConfig,
    /// Remaining lives.  Reset to 3 by [`Game::start`].
    pub lives: u32,
    /// Render-surface width in cells.
    pub width: u16,
    /// Render-surface height in cells.
    pub height: u16,
    /// Play-field bounds, derived once from the surface dimensions.
    pub bounds: GameBounds,
    /// Keys currently held down.
    pub pressed_keys: HashSet<KeyCode>,
}

impl Session {
    fn new(config: GameConfig) -> Self {
        Self {
            config,
            lives: 3,
            width: 0,
            height: 0,
            bounds: GameBounds::default(),
            pressed_keys: HashSet::new(),
        }
    }

    /// True while `code` is held down.
    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed_keys.contains(&code)
    }
}

// ── State stack ───────────────────────────────────────────────────────────────

pub struct Game {
    pub session: Session,
    stack: Vec<Box<dyn State>>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: Session::new(config),
            stack: Vec::new(),
        }
    }

    /// Record the final surface dimensions and centre the play-field
    /// within them.
    pub fn initialise(&mut self, width: u16, height: u16) {
        self.session.width = width;
        self.session.height = height;

        let gw = i32::from(self.session.config.game_width);
        let gh = i32::from(self.session.config.game_height);
        self.session.bounds = GameBounds {
            left: i32::from(width) / 2 - gw / 2,
            right: i32::from(width) / 2 + gw / 2,
            top: i32::from(height) / 2 - gh / 2,
            bottom: i32::from(height) / 2 + gh / 2,
        };
    }

    /// The active state, if any.
    pub fn current_state(&self) -> Option<&dyn State> {
        self.stack.last().map(|s| s.as_ref())
    }

    /// Number of states on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Replace the active state: leave(old) and pop it, then enter(new)
    /// and push.  The old top is discarded, not retained beneath.
    pub fn move_to_state(&mut self, mut state: Box<dyn State>) {
        if let Some(mut old) = self.stack.pop() {
            old.leave(&mut self.session);
        }
        tracing::info!(state = state.name(), "switching state");
        state.enter(&mut self.session);
        self.stack.push(state);
    }

    /// Overlay `state` on top of the stack without popping anything.
    pub fn push_state(&mut self, mut state: Box<dyn State>) {
        tracing::info!(state = state.name(), "pushing state");
        state.enter(&mut self.session);
        self.stack.push(state);
    }

    /// Leave and pop the active state, restoring whatever was pushed
    /// beneath.  No-op on an empty stack.
    pub fn pop_state(&mut self) {
        if let Some(mut old) = self.stack.pop() {
            tracing::info!(state = old.name(), "popping state");
            old.leave(&mut self.session);
        }
    }

    /// Reset the session and make the title screen the active state.  The
    /// caller then drives ticks from a [`Clock`](crate::clock::Clock).
    pub fn start(&mut self) {
        self.session.lives = 3;
        self.session.config.debug =
            self.session.config.debug || crate::config::debug_requested();
        self.move_to_state(Box::new(WelcomeState::new()));
    }

    // ── Input dispatch ────────────────────────────────────────────────────────

    pub fn key_down(&mut self, code: KeyCode) {
        self.session.pressed_keys.insert(code);
        if let Some(state) = self.stack.last_mut() {
            let transition = state.key_down(&mut self.session, code);
            self.apply(transition);
        }
    }

    pub fn key_up(&mut self, code: KeyCode) {
        self.session.pressed_keys.remove(&code);
        if let Some(state) = self.stack.last_mut() {
            let transition = state.key_up(&mut self.session, code);
            self.apply(transition);
        }
    }

    // ── Game loop ─────────────────────────────────────────────────────────────

    /// One fixed tick: update the active state, apply any transition it
    /// requested, then draw the now-current state.  A tick with an empty
    /// stack does nothing.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> std::io::Result<()> {
        let dt = 1.0 / self.session.config.fps as f32;

        if let Some(state) = self.stack.last_mut() {
            let transition = state.update(&mut self.session, dt);
            self.apply(transition);
        } else {
            return Ok(());
        }

        if let Some(state) = self.stack.last_mut() {
            state.draw(&self.session, dt, surface)?;
            surface.present()?;
        }
        Ok(())
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::Switch(state) => self.move_to_state(state),
            Transition::Push(state) => self.push_state(state),
            Transition::Pop => self.pop_state(),
        }
    }
}
