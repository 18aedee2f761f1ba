use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("unknown field key `{0}`")]
    UnknownField(String),

    #[error("input event has no input element target")]
    MissingInputTarget,

    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
