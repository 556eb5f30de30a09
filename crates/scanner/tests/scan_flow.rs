//! End-to-end scan of a small repository tree.

use pretty_assertions::assert_eq;
use repograph_graph::{ImportEdge, NodeCategory};
use repograph_scanner::RepoScanner;
use std::fs;
use tempfile::tempdir;

#[test]
fn scans_service_and_utility_with_import_edge() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("AuthService.py"),
        "import 'src/Utils'\n\ndef login(user):\n    return hash_password(user)\n",
    )
    .unwrap();
    fs::write(src.join("Utils.py"), "def hash_password(user):\n    return user\n").unwrap();

    let outcome = RepoScanner::new(temp.path()).scan();

    let mut ids: Vec<&str> = outcome.nodes.iter().map(|n| n.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["src/AuthService.py", "src/Utils.py"]);

    let auth = outcome
        .nodes
        .iter()
        .find(|n| n.id == "src/AuthService.py")
        .unwrap();
    assert_eq!(auth.label, "AuthService.py");
    assert_eq!(auth.category, NodeCategory::Service);

    let utils = outcome.nodes.iter().find(|n| n.id == "src/Utils.py").unwrap();
    assert_eq!(utils.label, "Utils.py");
    assert_eq!(utils.category, NodeCategory::Utility);

    assert_eq!(
        outcome.edges,
        vec![ImportEdge {
            source: "src/AuthService.py".to_string(),
            target: "src/Utils.py".to_string(),
        }]
    );
}

#[test]
fn scanned_parts_load_into_the_graph_store() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("AppMain.go"), "import \"helpers\"\n").unwrap();
    fs::write(temp.path().join("helpers.go"), "package helpers\n").unwrap();

    let outcome = RepoScanner::new(temp.path()).scan();
    let store = repograph_graph::GraphStore::new();
    store.initialize(outcome.nodes, outcome.edges).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.edges.len(), 1);
    assert!(snapshot.highlighted.is_empty());
}
