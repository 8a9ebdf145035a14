//! CLI end-to-end tests that invoke the compiled `sunshine` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use sunshine_test_utils::TestTree;

const HOME: &str = "/nonexistent/sunshine-home";

/// Get a Command for the sunshine binary running in `dir`
fn sunshine_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("sunshine").expect("Failed to find sunshine binary");
    cmd.current_dir(dir).env("SUNSHINE_HOME", HOME).env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic flags
// ============================================================================

#[test]
fn test_help_exits_zero() {
    Command::cargo_bin("sunshine")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--recursive"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("sunshine")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sunshine"));
}

// ============================================================================
// Recursive scan of the current directory
// ============================================================================

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn test_private_key_too_open_exits_one() {
        let tree = TestTree::new();
        tree.file(".ssh/id_test", 0o644).dir(".ssh", 0o700);

        sunshine_in(tree.root())
            .assert()
            .code(1)
            .stdout(".ssh/id_test: expected chmod 0600, got 0644\n");
    }

    #[test]
    fn test_compliant_tree_exits_zero() {
        let tree = TestTree::new();
        tree.file(".ssh/id_test", 0o600).dir(".ssh", 0o700);

        sunshine_in(tree.root())
            .assert()
            .success()
            .stdout("")
            .stderr("");
    }

    #[test]
    fn test_nested_findings_are_relative_to_cwd() {
        let tree = TestTree::new();
        tree.file("users/bob/.ssh/id_rsa.pub", 0o600)
            .dir("users/bob/.ssh", 0o700)
            .file("etc/ssh/authorized_keys", 0o644);

        sunshine_in(tree.root())
            .assert()
            .code(1)
            .stdout(concat!(
                "etc/ssh/authorized_keys: expected chmod 0600, got 0644\n",
                "users/bob/.ssh/id_rsa.pub: expected chmod 0644, got 0600\n",
            ));
    }

    #[test]
    fn test_home_rule_uses_configured_home() {
        let tree = TestTree::new();
        tree.dir("alice", 0o700);

        sunshine_in(tree.root())
            .arg("--home")
            .arg("/home/alice")
            .assert()
            .code(1)
            .stdout("alice: expected chmod 0755, got 0700\n");
    }

    // ========================================================================
    // Explicit paths
    // ========================================================================

    #[test]
    fn test_listed_paths_are_not_descended() {
        let tree = TestTree::new();
        tree.file(".ssh/id_rsa", 0o644).dir(".ssh", 0o755);

        sunshine_in(tree.root())
            .arg(".ssh")
            .assert()
            .code(1)
            .stdout(".ssh: expected chmod 0700, got 0755\n");
    }

    #[test]
    fn test_recursive_flag_descends_listed_paths() {
        let tree = TestTree::new();
        tree.file(".ssh/id_rsa", 0o644).dir(".ssh", 0o700);

        sunshine_in(tree.root())
            .args(["-r", ".ssh"])
            .assert()
            .code(1)
            .stdout(".ssh/id_rsa: expected chmod 0600, got 0644\n");
    }

    #[test]
    fn test_json_output() {
        let tree = TestTree::new();
        tree.file("known_hosts", 0o600);

        let output = sunshine_in(tree.root()).arg("--json").output().unwrap();

        assert_eq!(output.status.code(), Some(1));
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["discrepancies"][0]["path"], "known_hosts");
        assert_eq!(value["discrepancies"][0]["role"], "known-hosts");
        assert_eq!(value["discrepancies"][0]["expected"], "0644");
        assert_eq!(value["discrepancies"][0]["actual"], "0600");
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_root_exits_one_with_error() {
    let tree = TestTree::new();

    sunshine_in(tree.root())
        .args(["-r", "missing"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_missing_listed_path_exits_one() {
    let tree = TestTree::new();

    sunshine_in(tree.root())
        .arg("missing")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing"));
}

#[cfg(unix)]
#[test]
fn test_missing_listed_path_does_not_hide_later_findings() {
    let tree = TestTree::new();
    tree.file("authorized_keys", 0o644);

    sunshine_in(tree.root())
        .args(["missing", "authorized_keys"])
        .assert()
        .code(1)
        .stdout("authorized_keys: expected chmod 0600, got 0644\n")
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_unusable_home_fails_before_scanning() {
    let tree = TestTree::new();

    sunshine_in(tree.root())
        .args(["--home", "/"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Home directory"));
}
