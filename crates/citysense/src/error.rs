use citysense_lib::NetworkError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid network file {path}: {source}")]
    NetworkFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
