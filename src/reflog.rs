//! Local reference-log reader
//!
//! Reconstructs a branch's tip and lineage from the append-only log at
//! `.git/logs/refs/heads/<branch>`, one ref update per line. Fields are
//! split on single spaces; the fixed field count of a log record (old sha,
//! new sha, author, email, timestamp, offset, then the subject) is the
//! structural contract the parser relies on. The reader never writes.

use crate::error::{AncestryError, AncestryResult};
use crate::types::{Branch, Commit};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Minimum space-delimited fields in a well-formed log record.
const MIN_LOG_FIELDS: usize = 7;

/// Field index where the free-text subject begins.
const SUBJECT_FIELD: usize = 6;

fn log_path(local_repo: &Path, branch_name: &str) -> PathBuf {
    local_repo
        .join(".git")
        .join("logs")
        .join("refs")
        .join("heads")
        .join(branch_name)
}

fn heads_dir(local_repo: &Path) -> PathBuf {
    local_repo.join(".git").join("logs").join("refs").join("heads")
}

/// Find a local branch by name and return its current tip.
///
/// The tip sha is the second field of the log's last line. The branch name
/// is also cross-checked against the sibling entries of the heads
/// directory; a name missing from the listing is treated as not found.
pub fn find_branch_by_name(local_repo: &Path, branch_name: &str) -> AncestryResult<Branch> {
    let path = log_path(local_repo, branch_name);
    debug!("Reading reference log at {}", path.display());

    if !path.exists() {
        return Err(AncestryError::LocalBranchNotFound {
            branch: branch_name.to_string(),
        });
    }

    let listed = fs::read_dir(heads_dir(local_repo))?
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_name().to_string_lossy() == branch_name);
    if !listed {
        return Err(AncestryError::LocalBranchNotFound {
            branch: branch_name.to_string(),
        });
    }

    let contents = fs::read_to_string(&path)?;
    let last_line = contents.lines().last().ok_or_else(|| AncestryError::MalformedLog {
        branch: branch_name.to_string(),
        reason: "log has no entries".to_string(),
    })?;

    let sha = last_line
        .split(' ')
        .nth(1)
        .filter(|sha| !sha.is_empty())
        .ok_or_else(|| AncestryError::MalformedLog {
            branch: branch_name.to_string(),
            reason: "last entry has no commit sha".to_string(),
        })?;

    Ok(Branch::new(branch_name, sha))
}

/// Reconstruct the latest commit of a branch from its reference log.
///
/// Every line after the first contributes its old-sha field to the parent
/// list; lines below the fixed field count are skipped as malformed
/// entries. The final line supplies the commit's own sha and subject and is
/// always validated strictly.
pub fn latest_commit(branch: &Branch, local_repo: &Path) -> AncestryResult<Commit> {
    let path = log_path(local_repo, &branch.name);
    debug!(
        "Reconstructing commit history for '{}' from {}",
        branch.name,
        path.display()
    );

    if !path.exists() {
        return Err(AncestryError::LocalBranchNotFound {
            branch: branch.name.clone(),
        });
    }

    if fs::metadata(&path)?.len() == 0 {
        return Err(AncestryError::EmptyLog {
            branch: branch.name.clone(),
        });
    }

    let contents = fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() < 2 {
        // A single-entry log yields a sha but no parent history.
        return Err(AncestryError::InsufficientHistory {
            branch: branch.name.clone(),
        });
    }

    let mut parents = Vec::new();
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(' ').collect();
        if fields.len() < MIN_LOG_FIELDS {
            warn!("Skipping malformed log entry for '{}'", branch.name);
            continue;
        }
        parents.push(fields[0].to_string());
    }

    let last_fields: Vec<&str> = lines[lines.len() - 1].split(' ').collect();
    if last_fields.len() < MIN_LOG_FIELDS || last_fields[1].is_empty() {
        return Err(AncestryError::MalformedLog {
            branch: branch.name.clone(),
            reason: "malformed final entry".to_string(),
        });
    }

    let sha = last_fields[1].to_string();
    let message = last_fields[SUBJECT_FIELD..].join(" ");

    Ok(Commit::new(message, sha, parents))
}
