use serde::{Deserialize, Serialize};

/// A branch observed at a point in time.
///
/// Value object: `commit_sha` identifies the branch tip at observation time
/// and never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name
    pub name: String,

    /// SHA of the commit the branch pointed to when observed
    pub commit_sha: String,
}

impl Branch {
    pub fn new(name: impl Into<String>, commit_sha: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit_sha: commit_sha.into(),
        }
    }
}

/// A commit with its direct ancestry.
///
/// Constructed by decoding either a remote JSON object or local
/// reference-log fields; immutable once built. The parent list preserves
/// source order, which determines the tie-break in merge-base resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit message
    pub message: String,

    /// Commit SHA
    pub sha: String,

    /// Parent commit SHAs, in source order
    pub parents: Vec<String>,
}

impl Commit {
    pub fn new(message: impl Into<String>, sha: impl Into<String>, parents: Vec<String>) -> Self {
        Self {
            message: message.into(),
            sha: sha.into(),
            parents,
        }
    }

    /// A merge commit has more than one parent.
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// A root commit has no parents.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// File paths that differ between two commits, in response order.
pub type ChangeSet = Vec<String>;
