/// Concrete game screens.

mod game_over;
mod paused;
mod playing;
mod welcome;

pub use game_over::GameOverState;
pub use paused::PausedState;
pub use playing::PlayingState;
pub use welcome::WelcomeState;
