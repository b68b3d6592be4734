/// Game configuration constants.
///
/// The secret range is closed on both ends.
pub const SECRET_MIN: u8 = 1;

/// Upper bound (inclusive) of the secret range.
pub const SECRET_MAX: u8 = 10;

/// Log filter used when `RUST_LOG` is unset. Diagnostics go to stderr.
pub const DEFAULT_LOG_FILTER: &str = "warn";
