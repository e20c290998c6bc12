//! Space Invaders — a state-stack-driven terminal arcade shell.
//!
//! Core modules:
//! - `game`: session data and the state stack (replace / push / pop)
//! - `state`: the `State` trait every screen implements
//! - `states`: concrete screens (welcome, playing, paused, game over)
//! - `clock`: fixed-rate, cancellable tick scheduler
//! - `surface`: narrow 2D drawing interface over the terminal

pub mod clock;
pub mod config;
pub mod game;
pub mod state;
pub mod states;
pub mod surface;

pub use clock::{Clock, ClockHandle};
pub use config::GameConfig;
pub use game::{Game, GameBounds, Session};
pub use state::{State, Transition};
pub use surface::{FontStyle, Surface, TerminalSurface, TextAlign};
