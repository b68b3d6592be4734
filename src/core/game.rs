/// Core game interface for line-oriented terminal games
use crate::core::error::InputError;

/// Main game trait driven by [`crate::core::engine::Engine`].
///
/// A game is a state machine. Some states wait for one line of user input,
/// the others move on by themselves through [`LineGame::advance`].
pub trait LineGame {
    /// State that gets handed to the renderer after every transition
    type State;

    /// Parsed form of one input line
    type Input;

    fn state(&self) -> &Self::State;

    /// True when the current state is waiting for a line of input
    fn awaits_input(&self) -> bool;

    /// True once the game reached its terminal state
    fn is_finished(&self) -> bool;

    /// Game controls input parsing; the meaning of a line depends on the state
    fn parse_line(&self, line: &str) -> Result<Self::Input, InputError>;

    /// Apply parsed input to the current state
    fn handle_input(&mut self, input: Self::Input);

    /// Leave a state that does not wait for input
    fn advance(&mut self);

    /// Stdin was closed while the game was waiting for input
    fn handle_eof(&mut self);

    /// A line failed to parse and the same state will be prompted again
    fn handle_rejected(&mut self, _error: &InputError) {}
}
