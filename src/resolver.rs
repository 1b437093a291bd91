use crate::error::{AncestryError, AncestryResult};
use crate::reflog;
use crate::remote::RemoteClient;
use crate::types::Commit;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// First parent of the remote commit, in its original order, that also
/// appears among the local commit's parents.
///
/// Single-hop intersection: only the immediate parent lists of the two
/// commits are compared, never the full ancestor graph. The remote list's
/// order is the tie-break when several shared ancestors exist at this depth.
pub fn first_shared_parent<'a>(remote: &'a Commit, local: &Commit) -> Option<&'a str> {
    let local_parents: HashSet<&str> = local.parents.iter().map(String::as_str).collect();
    remote
        .parents
        .iter()
        .map(String::as_str)
        .find(|sha| local_parents.contains(sha))
}

/// Compute the merge base between a remote branch and a local branch.
///
/// Resolves both branch tips (remote via the hosting API, local via the
/// reference log), retrieves each tip's parent list, and returns the first
/// remote parent shared with the local side.
pub fn find_merge_base(
    client: &RemoteClient,
    remote_branch: &str,
    local_branch: &str,
    local_repo: &Path,
    token: Option<&str>,
) -> AncestryResult<String> {
    debug!(
        "Resolving merge base between remote '{}' and local '{}'",
        remote_branch, local_branch
    );

    let remote = client.find_branch_by_name(remote_branch, token)?;
    let remote_commit = client.latest_commit(&remote, token)?;

    let local = reflog::find_branch_by_name(local_repo, local_branch)?;
    let local_commit = reflog::latest_commit(&local, local_repo)?;

    match first_shared_parent(&remote_commit, &local_commit) {
        Some(sha) => {
            info!(
                "Merge base of '{}' and '{}' is {}",
                remote_branch, local_branch, sha
            );
            Ok(sha.to_string())
        }
        None => Err(AncestryError::NoCommonAncestor {
            remote: remote_branch.to_string(),
            local: local_branch.to_string(),
        }),
    }
}
