//! Edge case and error handling tests for treeviz


use harness::{graphviz_available, run_treeviz};
use treeviz::test_utils::TestTree;

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_still_exits_zero() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    if !graphviz_available() {
        eprintln!("skipping: graphviz not installed");
        return;
    }

    let tree = TestTree::new();
    tree.add_file("ok.txt", "x");
    let locked = tree.add_dir("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permissions don't bind for root; nothing to observe in that case
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (stdout, stderr, success) = run_treeviz(tree.path(), &["."]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "run should still exit zero: {stderr}");
    assert!(stdout.contains("🚫 Access Denied"), "notice: {stdout}");
    assert!(stdout.contains("ok.txt"), "walk should continue: {stdout}");

    let text = std::fs::read_to_string(tree.path().join("directory_tree.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["locked"], serde_json::json!("🚫 Access Denied"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_listed_but_not_followed() {
    use std::os::unix::fs::symlink;

    if !graphviz_available() {
        eprintln!("skipping: graphviz not installed");
        return;
    }

    let tree = TestTree::new();
    tree.add_file("real/inner.txt", "x");
    symlink(tree.path().join("real"), tree.path().join("link")).unwrap();

    let (stdout, _stderr, success) = run_treeviz(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("link"), "symlink entry shown: {stdout}");
    assert!(stdout.contains("inner.txt"), "real dir walked: {stdout}");

    let text = std::fs::read_to_string(tree.path().join("directory_tree.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    // The symlink lands in the file bucket, never descended into
    assert_eq!(parsed["link"], serde_json::Value::Null);
    assert_eq!(parsed["real"]["inner.txt"], serde_json::Value::Null);
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_does_not_hang() {
    use std::os::unix::fs::symlink;

    if !graphviz_available() {
        eprintln!("skipping: graphviz not installed");
        return;
    }

    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "x");
    symlink("..", tree.path().join("subdir").join("parent")).unwrap();

    let (stdout, _stderr, success) = run_treeviz(tree.path(), &["."]);
    assert!(success, "should not hang on a parent symlink");
    assert!(stdout.contains("subdir"));
    assert!(stdout.contains("parent"));
}

#[test]
fn test_unicode_names_render_everywhere() {
    if !graphviz_available() {
        eprintln!("skipping: graphviz not installed");
        return;
    }

    let tree = TestTree::new();
    tree.add_file("héllo 🌲.txt", "x");

    let (stdout, _stderr, success) = run_treeviz(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("héllo 🌲.txt"));

    let text = std::fs::read_to_string(tree.path().join("directory_tree.json")).unwrap();
    assert!(text.contains("héllo 🌲.txt"), "raw UTF-8 in JSON: {text}");
}

#[test]
fn test_empty_directory_still_produces_outputs() {
    if !graphviz_available() {
        eprintln!("skipping: graphviz not installed");
        return;
    }

    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_treeviz(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("📁 Directory Tree:"));

    let text = std::fs::read_to_string(tree.path().join("directory_tree.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, serde_json::json!({}));
    // Root node alone still yields an image
    assert!(tree.path().join("directory_tree.png").exists());
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    if !graphviz_available() {
        eprintln!("skipping: graphviz not installed");
        return;
    }

    let tree = TestTree::new();
    tree.add_file("b.txt", "x");
    tree.add_file("a/nested.txt", "x");

    // First run adds directory_tree.json/.png to the listing; compare the
    // two runs over that now-stable content
    run_treeviz(tree.path(), &["."]);
    let (stdout1, _stderr, ok1) = run_treeviz(tree.path(), &["."]);
    let json1 = std::fs::read_to_string(tree.path().join("directory_tree.json")).unwrap();
    let (stdout2, _stderr, ok2) = run_treeviz(tree.path(), &["."]);
    let json2 = std::fs::read_to_string(tree.path().join("directory_tree.json")).unwrap();

    assert!(ok1 && ok2);
    assert_eq!(stdout1, stdout2);
    assert_eq!(json1, json2);
}
