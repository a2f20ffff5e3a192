use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("hour {0} is outside the simulated day (0..=23)")]
    UnknownHour(usize),

    #[error("curve parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
