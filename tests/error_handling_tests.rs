//! Error handling integration tests

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_missing_mapping_file() {
    let workspace = TestWorkspace::new();

    common::artmap_cmd_for_workspace(&workspace)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read mapping file"))
        .stderr(predicate::str::contains("poe_nft_art_map.json"));

    assert!(!workspace.file_exists(common::DEFAULT_OUTPUT));
}

#[test]
fn test_malformed_mapping_json() {
    let workspace = TestWorkspace::new();
    workspace.write_map(r#"{"1.png": {"image": "a.jpg""#);

    common::artmap_cmd_for_workspace(&workspace)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse mapping file"));

    assert!(!workspace.file_exists(common::DEFAULT_OUTPUT));
}

#[test]
fn test_mapping_record_without_image() {
    let workspace = TestWorkspace::new();
    workspace.write_map(r#"{"1.png": {"title": "The Raven"}}"#);

    common::artmap_cmd_for_workspace(&workspace)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse mapping file"))
        .stderr(predicate::str::contains("image"));
}

#[test]
fn test_mapping_not_an_object() {
    let workspace = TestWorkspace::new();
    workspace.write_map(r#"["a.jpg", "b.jpg"]"#);

    common::artmap_cmd_for_workspace(&workspace)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse mapping file"));
}

#[test]
fn test_copy_failure_stops_run_and_keeps_earlier_copies() {
    let workspace = TestWorkspace::new();
    workspace.write_map(r#"{"1.png": {"image": "a.jpg"}, "2.png": {"image": "b.jpg"}}"#);
    workspace.write_image("a.jpg", b"a");
    workspace.write_image("b.jpg", b"b");
    // A directory where the second copy should land
    std::fs::create_dir_all(workspace.path.join(TestWorkspace::output("2.png")))
        .expect("Failed to create blocking directory");

    common::artmap_cmd_for_workspace(&workspace)
        .assert()
        .failure()
        .stdout(predicate::str::contains("All images processed successfully.").not())
        .stderr(predicate::str::contains("Failed to copy"));

    assert_eq!(workspace.read_file(&TestWorkspace::output("1.png")), b"a");
}

#[test]
fn test_output_path_is_a_file() {
    let workspace = TestWorkspace::new();
    workspace.write_map(r#"{"1.png": {"image": "a.jpg"}}"#);
    workspace.write_image("a.jpg", b"a");
    workspace.write_file(common::DEFAULT_OUTPUT, b"not a directory");

    common::artmap_cmd_for_workspace(&workspace)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create directory"));
}

#[test]
fn test_unknown_completions_shell() {
    let workspace = TestWorkspace::new();

    common::artmap_cmd_for_workspace(&workspace)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}
