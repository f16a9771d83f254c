use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("detector request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("detector returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed detection payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("replay script {path}: {source}")]
    Replay {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("replay script {path} line {line}: {source}")]
    ReplayLine {
        path: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("detector session has not been started")]
    NotStarted,
}

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("manifest for {bundle} is invalid: {source}")]
    Manifest {
        bundle: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("manifest for {bundle} lists an unsafe shard path: {path}")]
    ShardPath { bundle: String, path: String },

    #[error("model cache at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
