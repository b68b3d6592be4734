/// Answer to the "continue?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueDecision {
    Continue,
    Stop,
}

impl ContinueDecision {
    /// Only the line terminator is stripped. Anything but exactly `y` or `Y`,
    /// the empty line included, means stop.
    pub fn parse(line: &str) -> Self {
        match line.trim_end_matches(['\n', '\r']) {
            "y" | "Y" => ContinueDecision::Continue,
            _ => ContinueDecision::Stop,
        }
    }

    pub fn should_continue(self) -> bool {
        self == ContinueDecision::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_in_either_case_continues() {
        for line in ["y", "Y", "y\n", "Y\r\n"] {
            assert!(ContinueDecision::parse(line).should_continue(), "{line:?}");
        }
    }

    #[test]
    fn everything_else_stops() {
        for line in ["", "\n", "n", "N", "yes", "Yes", " y", "y ", "yy", "1", "是"] {
            assert_eq!(ContinueDecision::parse(line), ContinueDecision::Stop, "{line:?}");
        }
    }
}
