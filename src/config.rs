/// Game configuration — fixed at startup, consulted everywhere via the session.

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Logical play-field width in cells.
    pub game_width: u16,
    /// Logical play-field height in cells.
    pub game_height: u16,
    /// Fixed tick rate of the game loop.
    pub fps: u32,
    /// Enables diagnostic overlays and file logging.
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_width: 400,
            game_height: 300,
            fps: 50,
            debug: false,
        }
    }
}

impl GameConfig {
    /// Default config with the debug flag filled in from the process
    /// environment.
    pub fn from_environment() -> Self {
        Self {
            debug: debug_requested(),
            ..Self::default()
        }
    }
}

/// True if a `debug=true` marker appears in any command-line argument or in
/// the `SPACE_INVADERS_DEBUG` environment variable.
pub fn debug_requested() -> bool {
    std::env::args().any(|arg| arg.contains("debug=true"))
        || std::env::var("SPACE_INVADERS_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
}
