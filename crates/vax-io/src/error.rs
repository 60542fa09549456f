use thiserror::Error;

use vax_schedule::ScheduleError;

/// Failures while loading campaign records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unknown entry type {0:?}")]
    InvalidEntryType(String),

    #[error("{kind} entry has {got} fields, expected {expected}")]
    InvalidEntryFormat {
        kind:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("entry parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Failures while writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
