//! errors of the geometry engine and of the settings file

/// why a set of parameters can not be turned into a picture
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, serde::Serialize)]
pub enum InvalidInput {
    #[error("both windings are zero, the ratio is undefined")]
    ZeroRatio,
    #[error("windings {a} and {b} cancel out (a + b = 0)")]
    OppositeWindings { a: i64, b: i64 },
    #[error("winding of zero leaves no step size to sample with")]
    ZeroWinding,
    #[error("parameter range must be finite and not negative")]
    BadRange,
    #[error("step hint must be finite and positive")]
    BadStep,
    #[error("{requested} samples requested, at most {limit} are supported")]
    TooManySamples { requested: u64, limit: u64 },
    #[error("knot {index} was asked for, but only {count} knots exist")]
    NoSuchKnot { index: usize, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, serde::Serialize)]
pub enum DanceError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

pub type DanceResult<T> = Result<T, DanceError>;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is malformed: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("could not write settings: {0}")]
    Write(#[from] ron::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        let err = DanceError::from(InvalidInput::OppositeWindings { a: 3, b: -3 });
        assert_eq!(
            err.to_string(),
            "invalid input: windings 3 and -3 cancel out (a + b = 0)"
        );
        let err = DanceError::from(InvalidInput::TooManySamples { requested: 7, limit: 5 });
        assert!(err.to_string().contains("at most 5"));
    }
}
