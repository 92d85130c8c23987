use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("catalog query failed: {0}")]
    Catalog(#[from] diesel::result::Error),

    #[error("catalog connection failed: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("record store error: {0}")]
    RecordStore(Box<mongodb::error::Error>),

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the error came from the terminal rather than a store.
    ///
    /// The interactive loop treats these as end of input.
    #[must_use]
    pub fn is_prompt(&self) -> bool {
        matches!(self, Error::Prompt(_))
    }
}

impl From<mongodb::error::Error> for Error {
    fn from(err: mongodb::error::Error) -> Self {
        Error::RecordStore(Box::new(err))
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Prompt(err.to_string())
    }
}
