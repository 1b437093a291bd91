use mergebase::{
    find_merge_base, modified_files_between, AncestryError, RemoteClient, RemoteConfig,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn make_client(api_base: &str) -> RemoteClient {
    let config = RemoteConfig::new(api_base, "owner", "repo");
    RemoteClient::new(config).expect("client creation")
}

fn write_reflog(repo: &Path, branch: &str, entries: &[(&str, &str, &str)]) {
    let dir = repo.join(".git").join("logs").join("refs").join("heads");
    fs::create_dir_all(&dir).expect("heads dir");

    let lines: Vec<String> = entries
        .iter()
        .map(|(old, new, msg)| {
            format!("{} {} Tester <tester@example.com> 1712000000 +0000 {}", old, new, msg)
        })
        .collect();
    fs::write(dir.join(branch), lines.join("\n")).expect("reference log");
}

#[test]
fn test_merge_base_resolved_from_both_sources() {
    let mut server = mockito::Server::new();
    let _branches = server
        .mock("GET", "/branches")
        .with_status(200)
        .with_body(r#"[{"name": "main", "commit": {"sha": "abc123"}}]"#)
        .create();
    let _commit = server
        .mock("GET", "/commits/abc123")
        .with_status(200)
        .with_body(
            r#"{
                "sha": "abc123",
                "commit": {"message": "Merge feature into main"},
                "parents": [{"sha": "def456"}, {"sha": "fff999"}]
            }"#,
        )
        .create();

    let local = TempDir::new().expect("tempdir");
    write_reflog(
        local.path(),
        "work",
        &[
            ("000000", "111111", "commit (initial): start"),
            ("111111", "222222", "commit: local change"),
            ("def456", "333333", "commit: pulled and diverged"),
        ],
    );

    let client = make_client(&server.url());
    let base = find_merge_base(&client, "main", "work", local.path(), None)
        .expect("merge base resolution");

    assert_eq!(base, "def456");
}

#[test]
fn test_disjoint_histories_share_no_merge_base() {
    let mut server = mockito::Server::new();
    let _branches = server
        .mock("GET", "/branches")
        .with_status(200)
        .with_body(r#"[{"name": "main", "commit": {"sha": "abc123"}}]"#)
        .create();
    let _commit = server
        .mock("GET", "/commits/abc123")
        .with_status(200)
        .with_body(
            r#"{
                "sha": "abc123",
                "commit": {"message": "Remote-only work"},
                "parents": [{"sha": "r1"}, {"sha": "r2"}]
            }"#,
        )
        .create();

    let local = TempDir::new().expect("tempdir");
    write_reflog(
        local.path(),
        "work",
        &[
            ("000000", "111111", "commit (initial): start"),
            ("111111", "222222", "commit: unrelated"),
        ],
    );

    let client = make_client(&server.url());
    let result = find_merge_base(&client, "main", "work", local.path(), None);

    match result {
        Err(AncestryError::NoCommonAncestor { remote, local: local_name }) => {
            assert_eq!(remote, "main");
            assert_eq!(local_name, "work");
        }
        other => panic!("expected NoCommonAncestor, got {:?}", other),
    }
}

#[test]
fn test_missing_remote_branch_surfaces_not_found() {
    let mut server = mockito::Server::new();
    let _branches = server
        .mock("GET", "/branches")
        .with_status(200)
        .with_body(r#"[{"name": "main", "commit": {"sha": "abc123"}}]"#)
        .create();

    let local = TempDir::new().expect("tempdir");
    write_reflog(
        local.path(),
        "work",
        &[
            ("000000", "111111", "commit (initial): start"),
            ("111111", "222222", "commit: change"),
        ],
    );

    let client = make_client(&server.url());
    let result = find_merge_base(&client, "release", "work", local.path(), None);

    assert!(matches!(
        result,
        Err(AncestryError::BranchNotFound { branch }) if branch == "release"
    ));
}

#[test]
fn test_missing_local_branch_surfaces_not_found() {
    let mut server = mockito::Server::new();
    let _branches = server
        .mock("GET", "/branches")
        .with_status(200)
        .with_body(r#"[{"name": "main", "commit": {"sha": "abc123"}}]"#)
        .create();
    let _commit = server
        .mock("GET", "/commits/abc123")
        .with_status(200)
        .with_body(
            r#"{
                "sha": "abc123",
                "commit": {"message": "Tip"},
                "parents": [{"sha": "def456"}]
            }"#,
        )
        .create();

    let local = TempDir::new().expect("tempdir");
    fs::create_dir_all(local.path().join(".git").join("logs").join("refs").join("heads"))
        .expect("heads dir");

    let client = make_client(&server.url());
    let result = find_merge_base(&client, "main", "missing", local.path(), None);

    assert!(matches!(
        result,
        Err(AncestryError::LocalBranchNotFound { branch }) if branch == "missing"
    ));
}

#[test]
fn test_change_set_fetched_for_resolved_pair() {
    let mut server = mockito::Server::new();
    let _branches = server
        .mock("GET", "/branches")
        .with_status(200)
        .with_body(r#"[{"name": "main", "commit": {"sha": "abc123"}}]"#)
        .create();
    let _commit = server
        .mock("GET", "/commits/abc123")
        .with_status(200)
        .with_body(
            r#"{
                "sha": "abc123",
                "commit": {"message": "Merge feature into main"},
                "parents": [{"sha": "def456"}]
            }"#,
        )
        .create();
    let _compare = server
        .mock("GET", "/compare/def456...abc123")
        .with_status(200)
        .with_body(
            r#"{
                "files": [
                    {"filename": "src/lib.rs"},
                    {"filename": "README.md"}
                ]
            }"#,
        )
        .create();

    let local = TempDir::new().expect("tempdir");
    write_reflog(
        local.path(),
        "work",
        &[
            ("000000", "111111", "commit (initial): start"),
            ("def456", "222222", "commit: diverge"),
        ],
    );

    let client = make_client(&server.url());
    let base = find_merge_base(&client, "main", "work", local.path(), None)
        .expect("merge base resolution");
    assert_eq!(base, "def456");

    let files =
        modified_files_between(&client, "abc123", &base, None).expect("change set fetch");
    assert_eq!(files, vec!["src/lib.rs", "README.md"]);
}
