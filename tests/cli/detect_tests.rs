//! Tests for `repomind-scan detect`

use crate::common::TestRepo;

#[test]
fn test_detect_by_extension() {
    let repo = TestRepo::new();
    repo.add_file("src/App.tsx", "export const App = () => null;\n");

    let output = repo.run_cli_success(&["detect", "src/App.tsx"]);
    assert_eq!(output.trim(), "TypeScript (React)");
}

#[test]
fn test_detect_by_shebang() {
    let repo = TestRepo::new();
    repo.add_file("bin/deploy", "#!/usr/bin/env python3\nprint('hi')\n");

    let output = repo.run_cli_success(&["detect", "bin/deploy"]);
    assert_eq!(output.trim(), "Python");
}

#[test]
fn test_detect_by_filename() {
    let repo = TestRepo::new();
    repo.add_file("Dockerfile", "FROM alpine\n");

    let output = repo.run_cli_success(&["detect", "Dockerfile"]);
    assert_eq!(output.trim(), "Dockerfile");
}

#[test]
fn test_detect_unknown() {
    let repo = TestRepo::new();
    repo.add_file("NOTES", "just words\n");

    let output = repo.run_cli_success(&["detect", "NOTES"]);
    assert_eq!(output.trim(), "Unknown");
}

#[test]
fn test_detect_missing_file() {
    let repo = TestRepo::new();
    let (code, _) = repo.run_cli_failure(&["detect", "nope.rs"]);
    assert_eq!(code, Some(1));
}
