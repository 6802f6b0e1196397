/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Retrieval of a tabular resource did not succeed
    #[error("Transport error fetching {locator}: {reason}")]
    Transport {
        locator: String,
        /// HTTP status when the server answered; `None` for network, IO and timeout failures
        status: Option<u16>,
        reason: String,
    },

    /// Tabular text could not be parsed into rows
    #[error("Parse error: {0}")]
    Parse(String),
}

impl AppError {
    /// Builds a transport error from a failed retrieval
    pub fn transport(locator: impl Into<String>, status: Option<u16>, reason: impl Into<String>) -> Self {
        AppError::Transport {
            locator: locator.into(),
            status,
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Transport { status, .. } => *status,
            AppError::Parse(_) => None,
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        let message = match err.position() {
            Some(pos) => format!("{} (record {}, line {})", err, pos.record(), pos.line()),
            None => err.to_string(),
        };
        AppError::Parse(message)
    }
}

pub type AppResult<T> = Result<T, AppError>;
