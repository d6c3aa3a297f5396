use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} answered HTTP {status}")]
    Status { provider: String, status: u16 },

    #[error("malformed {provider} response: {reason}")]
    Malformed { provider: String, reason: String },

    #[error("{provider} could not route: {code}")]
    Declined { provider: String, code: String },

    #[error("{provider} returned no route")]
    NoRoute { provider: String },
}

pub type Result<T> = std::result::Result<T, ProviderError>;
