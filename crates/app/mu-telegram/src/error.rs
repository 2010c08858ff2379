pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("'{0}' cannot be used as a Telegram API base URL")]
    InvalidBaseUrl(String),

    #[error("failed to reach the Telegram API")]
    Send(#[source] reqwest::Error),
}
