#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    #[error("no input expected in the current state")]
    Unexpected,
}
