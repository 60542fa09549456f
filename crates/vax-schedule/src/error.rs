use thiserror::Error;

/// Recoverable scheduling failures, returned — never panicked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("person {0} not found")]
    PersonNotFound(String),

    #[error("vaccine {0} not found")]
    VaccineNotFound(String),

    #[error("health center {0} not found")]
    CenterNotFound(String),

    /// The person is already registered, or already holds an appointment at
    /// the target center.
    #[error("duplicated person {0}")]
    DuplicatedPerson(String),

    #[error("no vaccine is available within the search window")]
    NoVaccinesAvailable,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
