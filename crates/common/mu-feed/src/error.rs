use mu_models::Category;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to fetch {category} feed")]
    Fetch {
        category: Category,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch device registry for {codename}")]
    Registry {
        codename: String,
        #[source]
        source: reqwest::Error,
    },
}
