use thiserror::Error;

/// Errors that can occur while resolving branch ancestry.
#[derive(Error, Debug)]
pub enum AncestryError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Empty response body")]
    EmptyResponse,

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Branch '{branch}' not found")]
    BranchNotFound { branch: String },

    #[error("Local branch '{branch}' not found")]
    LocalBranchNotFound { branch: String },

    #[error("Commit for branch '{branch}' not found")]
    CommitNotFound { branch: String },

    #[error("Reference log for branch '{branch}' is empty")]
    EmptyLog { branch: String },

    #[error("Not enough entries in reference log for branch '{branch}'")]
    InsufficientHistory { branch: String },

    #[error("Malformed reference log for branch '{branch}': {reason}")]
    MalformedLog { branch: String, reason: String },

    #[error("Branches '{remote}' and '{local}' do not share a merge base")]
    NoCommonAncestor { remote: String, local: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to read reference log: {0}")]
    Io(#[from] std::io::Error),
}

pub type AncestryResult<T> = Result<T, AncestryError>;
