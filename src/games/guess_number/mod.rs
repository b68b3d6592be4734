pub mod decision;
pub mod game;
pub mod outcome;
pub mod renderer;
pub mod secret;

pub use decision::ContinueDecision;
pub use game::{GameState, GuessInput, NumberGame, SessionStats};
pub use outcome::RoundOutcome;
pub use renderer::NumberRenderer;
pub use secret::{RandomSecrets, Secret, SecretSource};

use crate::core::engine::Engine;

/// Engine wired up for a guess-the-number session
pub fn engine<S: SecretSource>(secrets: S) -> Engine<NumberGame<S>, NumberRenderer> {
    Engine::new(NumberGame::new(secrets), NumberRenderer)
}
