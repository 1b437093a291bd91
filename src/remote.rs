use crate::config::RemoteConfig;
use crate::error::{AncestryError, AncestryResult};
use crate::types::{Branch, ChangeSet, Commit};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Entry in the branches listing response
#[derive(Debug, Clone, Deserialize)]
struct BranchEntry {
    name: String,
    commit: BranchTip,
}

#[derive(Debug, Clone, Deserialize)]
struct BranchTip {
    sha: String,
}

/// Commit detail response
#[derive(Debug, Clone, Deserialize)]
struct CommitDetail {
    sha: String,
    commit: CommitBody,
    parents: Vec<ParentRef>,
}

#[derive(Debug, Clone, Deserialize)]
struct CommitBody {
    message: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ParentRef {
    sha: String,
}

/// Comparison response between two commits
#[derive(Debug, Clone, Deserialize)]
struct Comparison {
    files: Vec<ComparisonFile>,
}

#[derive(Debug, Clone, Deserialize)]
struct ComparisonFile {
    filename: String,
}

/// Client for the repository-hosting API.
///
/// Holds no mutable state between calls other than the transport handle,
/// so one client can serve concurrent callers. The access token is threaded
/// per call rather than stored, so authenticated and anonymous requests can
/// be issued through the same client.
pub struct RemoteClient {
    http: reqwest::blocking::Client,
    config: RemoteConfig,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> AncestryResult<Self> {
        config
            .validate()
            .map_err(|msg| AncestryError::InvalidConfig { message: msg })?;

        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn get(&self, url: &str, token: Option<&str>) -> AncestryResult<reqwest::blocking::Response> {
        let mut request = self.http.get(url);
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.header("Authorization", format!("token {}", token));
        }
        Ok(request.send()?)
    }

    /// Read a success response body, rejecting empty bodies before decoding.
    fn read_body(response: reqwest::blocking::Response) -> AncestryResult<String> {
        let body = response.text()?;
        if body.is_empty() {
            return Err(AncestryError::EmptyResponse);
        }
        Ok(body)
    }

    /// Find a branch by name in the remote branches listing.
    ///
    /// Scans the listing in response order and returns the first entry whose
    /// name matches exactly.
    pub fn find_branch_by_name(
        &self,
        branch_name: &str,
        token: Option<&str>,
    ) -> AncestryResult<Branch> {
        debug!(
            "Looking up branch '{}' in {}/{}",
            branch_name, self.config.owner, self.config.repo
        );

        let url = format!("{}/branches", self.config.api_base);
        let response = self.get(&url, token)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AncestryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = Self::read_body(response)?;
        let branches: Vec<BranchEntry> = serde_json::from_str(&body)?;

        for entry in branches {
            if entry.name == branch_name {
                info!("Branch '{}' is at {}", branch_name, entry.commit.sha);
                return Ok(Branch::new(branch_name, entry.commit.sha));
            }
        }

        warn!("Branch '{}' not present in remote listing", branch_name);
        Err(AncestryError::BranchNotFound {
            branch: branch_name.to_string(),
        })
    }

    /// Retrieve the latest commit a branch points to, with its parent list.
    pub fn latest_commit(&self, branch: &Branch, token: Option<&str>) -> AncestryResult<Commit> {
        debug!(
            "Fetching commit {} for branch '{}'",
            branch.commit_sha, branch.name
        );

        let url = format!("{}/commits/{}", self.config.api_base, branch.commit_sha);
        let response = self.get(&url, token)?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 404 {
                return Err(AncestryError::CommitNotFound {
                    branch: branch.name.clone(),
                });
            }
            let body = response.text().unwrap_or_default();
            return Err(AncestryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = Self::read_body(response)?;
        let detail: CommitDetail = serde_json::from_str(&body)?;

        let parents: Vec<String> = detail.parents.into_iter().map(|p| p.sha).collect();

        info!(
            "Commit {} has {} parent(s)",
            detail.sha,
            parents.len()
        );

        Ok(Commit::new(detail.commit.message, detail.sha, parents))
    }

    /// List the file paths modified between two commits, in response order.
    pub fn modified_files(
        &self,
        head_sha: &str,
        base_sha: &str,
        token: Option<&str>,
    ) -> AncestryResult<ChangeSet> {
        debug!("Comparing {}...{}", base_sha, head_sha);

        let url = format!("{}/compare/{}...{}", self.config.api_base, base_sha, head_sha);
        let response = self.get(&url, token)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AncestryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = Self::read_body(response)?;
        let comparison: Comparison = serde_json::from_str(&body)?;

        let files: ChangeSet = comparison.files.into_iter().map(|f| f.filename).collect();

        info!("{} file(s) differ between {} and {}", files.len(), base_sha, head_sha);
        Ok(files)
    }
}
