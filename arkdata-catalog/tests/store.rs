mod common;

use std::fs;

use arkdata_catalog::*;
use common::sample_document;

#[test]
fn load_from_empty_dir_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = OutputStore::new(dir.path());
    assert!(store.load().unwrap().is_none());
    assert!(
        store
            .load_if_current(&sample_document().commit_hashes)
            .unwrap()
            .is_none()
    );
}

#[test]
fn save_writes_compact_and_pretty_documents() {
    let dir = tempfile::tempdir().unwrap();
    let store = OutputStore::new(dir.path().join("out"));
    let doc = sample_document();
    store.save(&doc).unwrap();

    let compact = fs::read_to_string(store.document_path()).unwrap();
    let pretty = fs::read_to_string(store.pretty_path()).unwrap();
    assert!(!compact.contains('\n'));
    assert!(pretty.contains("\n  \"commitHashes\""));

    let from_pretty: ArkDocument = serde_json::from_str(&pretty).unwrap();
    assert_eq!(from_pretty, doc);
    assert_eq!(store.load().unwrap(), Some(doc));

    let leftovers: Vec<_> = fs::read_dir(store.dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temporary files left behind: {leftovers:?}");
}

#[test]
fn current_document_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let store = OutputStore::new(dir.path());
    let doc = sample_document();
    store.save(&doc).unwrap();

    let loaded = store.load_if_current(&doc.commit_hashes).unwrap();
    assert_eq!(loaded, Some(doc));
}

#[test]
fn either_hash_changing_invalidates_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = OutputStore::new(dir.path());
    let doc = sample_document();
    store.save(&doc).unwrap();

    let newer_yostar = CommitHashes {
        yostar: "ccc".to_string(),
        cn: doc.commit_hashes.cn.clone(),
    };
    assert!(store.load_if_current(&newer_yostar).unwrap().is_none());

    let newer_cn = CommitHashes {
        yostar: doc.commit_hashes.yostar.clone(),
        cn: "ddd".to_string(),
    };
    assert!(store.load_if_current(&newer_cn).unwrap().is_none());
}

#[test]
fn corrupt_document_is_stale_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let store = OutputStore::new(dir.path());
    fs::write(store.document_path(), "{ not json").unwrap();

    assert!(matches!(store.load(), Err(StoreError::Json { .. })));
    let hashes = sample_document().commit_hashes;
    assert!(store.load_if_current(&hashes).unwrap().is_none());
}

#[test]
fn save_overwrites_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = OutputStore::new(dir.path());
    let mut doc = sample_document();
    store.save(&doc).unwrap();

    doc.items.clear();
    doc.commit_hashes.cn = "eee".to_string();
    store.save(&doc).unwrap();

    let loaded = store.load_if_current(&doc.commit_hashes).unwrap().unwrap();
    assert!(loaded.items.is_empty());
}
