use thiserror::Error;

/// Failures surfaced by the rules collaborator to its callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("move `{mv}` is not legal in this position")]
    IllegalMove { mv: String },

    #[error("cannot parse `{text}` as a UCI move")]
    InvalidMove { text: String },
}
