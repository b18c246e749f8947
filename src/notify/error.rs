use std::fmt::Formatter;

#[derive(Debug)]
pub enum NotifyError {
    Transport(reqwest::Error),
    Encoding(serde_json::Error),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            NotifyError::Transport(inner) => {
                format!("Could not deliver notification: {}", inner)
            },
            NotifyError::Encoding(inner) => {
                format!("Could not encode notification: {}", inner)
            },
        };
        write!(f, "Notify error: {}", msg)
    }
}

impl std::error::Error for NotifyError {}

impl From<reqwest::Error> for NotifyError {
    fn from(error: reqwest::Error) -> Self {
        NotifyError::Transport(error)
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(error: serde_json::Error) -> Self {
        NotifyError::Encoding(error)
    }
}
