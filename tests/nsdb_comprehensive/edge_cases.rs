//! Boundary inputs and lifecycle corner cases

use crate::{bucket, file_db};
use nsdb::{Bucket, Database, Entry};

#[test]
fn empty_key_and_value() {
    let (db, _teardown) = Database::open(None).unwrap();
    db.set_bucket("ns", bucket(&[("", "")])).unwrap();
    assert_eq!(db.get_entries("ns").unwrap(), vec![Entry::new("", "")]);
}

#[test]
fn empty_namespace_name() {
    let (db, _teardown) = Database::open(None).unwrap();
    db.set_bucket("", bucket(&[("k", "v")])).unwrap();
    assert_eq!(db.get_bucket("").unwrap()["k"], "v");
}

#[test]
fn unicode_round_trips_through_file() {
    let (db, teardown, _dir, path) = file_db();
    db.set_bucket("日本", bucket(&[("キー", "値"), ("emoji", "🦀")])).unwrap();
    teardown.run().unwrap();

    let (reopened, teardown) = Database::open_path(&path).unwrap();
    assert_eq!(reopened.get_bucket("日本").unwrap()["emoji"], "🦀");
    teardown.run().unwrap();
}

#[test]
fn empty_mapping_does_not_create_namespace() {
    let (db, _teardown) = Database::open(None).unwrap();
    db.set_bucket("ns", Bucket::new()).unwrap();
    assert!(db.get_bucket("ns").unwrap_err().is_not_found());
}

#[test]
fn sort_is_bytewise_lexicographic() {
    let (db, _teardown) = Database::open(None).unwrap();
    db.set_bucket("ns", bucket(&[("b", "1"), ("B", "2"), ("a10", "3"), ("a2", "4")]))
        .unwrap();
    let keys: Vec<String> = db
        .get_entries("ns")
        .unwrap()
        .into_iter()
        .map(|e| e.key)
        .collect();
    assert_eq!(keys, vec!["B", "a10", "a2", "b"]);
}

#[test]
fn usable_in_memory_after_close() {
    let (db, teardown, _dir, path) = file_db();
    db.set_bucket("ns", bucket(&[("a", "1")])).unwrap();
    teardown.run().unwrap();

    // Store is empty and detached from the file
    assert!(db.get_bucket("ns").unwrap_err().is_not_found());
    db.set_bucket("after", bucket(&[("x", "y")])).unwrap();
    db.save().unwrap();

    let (reopened, teardown) = Database::open_path(&path).unwrap();
    assert!(!reopened.contains_namespace("after"));
    assert!(reopened.contains_namespace("ns"));
    teardown.run().unwrap();
}
