use thiserror::Error;

/// Fatal schedule errors.
///
/// A rejected insertion is not an error (see [`crate::InsertOutcome`]); the
/// only fatal case is a schedule that no longer satisfies its structural
/// invariants, which means the resolver itself is wrong.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule integrity violated: {reason}\n{dump}")]
    Integrity { reason: String, dump: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
