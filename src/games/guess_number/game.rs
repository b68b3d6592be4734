use tracing::{debug, warn};

use crate::core::error::InputError;
use crate::core::game::LineGame;

use super::decision::ContinueDecision;
use super::outcome::RoundOutcome;
use super::secret::{Secret, SecretSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitGuess,
    Feedback(RoundOutcome),
    AwaitContinue,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    Guess(i64),
    Continue(ContinueDecision),
}

/// Counters for one session, from launch to farewell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Rounds started, i.e. secrets drawn
    pub rounds: u32,
    pub correct: u32,
    pub too_low: u32,
    pub too_high: u32,
    /// Lines that were not a valid guess
    pub rejected: u32,
}

impl SessionStats {
    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Correct => self.correct += 1,
            RoundOutcome::TooLow => self.too_low += 1,
            RoundOutcome::TooHigh => self.too_high += 1,
        }
    }
}

/// Guess-the-number session: one guess per secret, then ask whether to go again.
pub struct NumberGame<S: SecretSource> {
    secrets: S,
    secret: Secret,
    state: GameState,
    stats: SessionStats,
}

impl<S: SecretSource> NumberGame<S> {
    pub fn new(mut secrets: S) -> Self {
        let secret = secrets.draw();
        Self {
            secrets,
            secret,
            state: GameState::AwaitGuess,
            stats: SessionStats {
                rounds: 1,
                ..SessionStats::default()
            },
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    fn transition(&mut self, next: GameState) {
        debug!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
    }

    fn new_round(&mut self) {
        self.secret = self.secrets.draw();
        self.stats.rounds += 1;
        self.transition(GameState::AwaitGuess);
    }
}

impl<S: SecretSource> LineGame for NumberGame<S> {
    type State = GameState;
    type Input = GuessInput;

    fn state(&self) -> &GameState {
        &self.state
    }

    fn awaits_input(&self) -> bool {
        matches!(self.state, GameState::AwaitGuess | GameState::AwaitContinue)
    }

    fn is_finished(&self) -> bool {
        self.state == GameState::Terminated
    }

    fn parse_line(&self, line: &str) -> Result<GuessInput, InputError> {
        match self.state {
            GameState::AwaitGuess => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return Err(InputError::Empty);
                }
                trimmed
                    .parse::<i64>()
                    .map(GuessInput::Guess)
                    .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
            }
            GameState::AwaitContinue => Ok(GuessInput::Continue(ContinueDecision::parse(line))),
            GameState::Feedback(_) | GameState::Terminated => Err(InputError::Unexpected),
        }
    }

    fn handle_input(&mut self, input: GuessInput) {
        match (self.state, input) {
            (GameState::AwaitGuess, GuessInput::Guess(guess)) => {
                let outcome = RoundOutcome::judge(guess, self.secret);
                debug!(guess, ?outcome, "guess judged");
                self.stats.record(outcome);
                self.transition(GameState::Feedback(outcome));
            }
            (GameState::AwaitContinue, GuessInput::Continue(decision)) => {
                if decision.should_continue() {
                    self.new_round();
                } else {
                    self.transition(GameState::Terminated);
                }
            }
            (state, input) => {
                warn!(?state, ?input, "input does not fit the current state; ignored");
            }
        }
    }

    fn advance(&mut self) {
        if let GameState::Feedback(_) = self.state {
            self.transition(GameState::AwaitContinue);
        }
    }

    fn handle_eof(&mut self) {
        self.transition(GameState::Terminated);
    }

    fn handle_rejected(&mut self, _error: &InputError) {
        self.stats.rejected += 1;
    }
}
