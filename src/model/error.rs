use thiserror::Error;

/// Errors raised while building or parsing model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Interval start ({start}) must be strictly before end ({end})")]
    EmptyInterval { start: u32, end: u32 },

    #[error("Interval end ({0}) is past midnight")]
    PastMidnight(u32),

    #[error("Invalid clock time: {0:?}")]
    InvalidClock(String),

    #[error("Unknown weekday: {0:?}")]
    UnknownWeekday(String),

    #[error("Unknown priority: {0:?}")]
    UnknownPriority(String),

    #[error("Unknown strategy: {0:?}")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_interval_display() {
        let e = ModelError::EmptyInterval {
            start: 600,
            end: 480,
        };
        assert_eq!(
            e.to_string(),
            "Interval start (600) must be strictly before end (480)"
        );
    }

    #[test]
    fn past_midnight_display() {
        let e = ModelError::PastMidnight(1500);
        assert_eq!(e.to_string(), "Interval end (1500) is past midnight");
    }

    #[test]
    fn parse_errors_quote_input() {
        assert_eq!(
            ModelError::InvalidClock("25:99".into()).to_string(),
            "Invalid clock time: \"25:99\""
        );
        assert_eq!(
            ModelError::UnknownWeekday("Funday".into()).to_string(),
            "Unknown weekday: \"Funday\""
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(ModelError::PastMidnight(1441), ModelError::PastMidnight(1441));
        assert_ne!(
            ModelError::UnknownPriority("x".into()),
            ModelError::UnknownStrategy("x".into())
        );
    }
}
