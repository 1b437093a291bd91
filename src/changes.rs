use crate::error::AncestryResult;
use crate::remote::RemoteClient;
use crate::types::ChangeSet;

/// List the files changed between a merge base and a branch head.
///
/// Pass-through to the remote comparison call, kept as its own operation
/// because it is invoked with resolved commit shas (the resolver's output)
/// rather than branch names, and its result is a terminal artifact.
pub fn modified_files_between(
    client: &RemoteClient,
    head_sha: &str,
    base_sha: &str,
    token: Option<&str>,
) -> AncestryResult<ChangeSet> {
    client.modified_files(head_sha, base_sha, token)
}
