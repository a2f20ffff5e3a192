use cc_core::CoreError;
use cc_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The configuration was rejected before hour 0.
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("staffing error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Internal state went inconsistent.  Always a defect; `dump` is the
    /// full station state at the moment of detection.
    #[error("internal invariant violated: {what}\n{dump}")]
    Invariant {
        what: String,
        dump: String,
    },
}

impl SimError {
    pub(crate) fn invariant(what: impl Into<String>, dump: impl std::fmt::Debug) -> Self {
        SimError::Invariant {
            what: what.into(),
            dump: format!("{dump:#?}"),
        }
    }

    /// `true` for configuration errors, `false` for internal failures.
    pub fn is_config(&self) -> bool {
        matches!(self, SimError::Config(_))
    }
}

pub type SimResult<T> = Result<T, SimError>;
