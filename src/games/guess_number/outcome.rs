use std::cmp::Ordering;

use super::secret::Secret;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct,
    TooLow,
    TooHigh,
}

impl RoundOutcome {
    pub fn judge(guess: i64, secret: Secret) -> Self {
        match guess.cmp(&i64::from(secret.value())) {
            Ordering::Equal => RoundOutcome::Correct,
            Ordering::Less => RoundOutcome::TooLow,
            Ordering::Greater => RoundOutcome::TooHigh,
        }
    }
}
