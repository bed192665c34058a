/// Errors returned by table construction and the two conversion directions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// The value needs more than three repetitions of the table's largest symbol.
    #[error("value {value} is out of range (max {max})")]
    OutOfRange { value: u64, max: u64 },

    #[error("invalid numeral {input:?}: {reason}")]
    InvalidNumeral { input: String, reason: String },

    #[error("invalid numeral table: {0}")]
    InvalidTable(String),
}

impl NumeralError {
    pub(crate) fn invalid_numeral(input: &[char], reason: impl Into<String>) -> Self {
        NumeralError::InvalidNumeral {
            input: input.iter().collect(),
            reason: reason.into(),
        }
    }
}
