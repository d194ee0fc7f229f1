//! Snapshot persistence across open/close cycles

use crate::{bucket, file_db};
use nsdb::{Database, DatabaseConfig, Entry, SnapshotCodec};

#[test]
fn save_then_reopen_reproduces_contents() {
    let (db, teardown, _dir, path) = file_db();
    db.set_bucket("settings", bucket(&[("theme", "dark"), ("lang", "en")]))
        .unwrap();
    db.set_entries("scratch", vec![Entry::new("n", "42")]).unwrap();
    db.save().unwrap();

    let (reopened, reopened_teardown) = Database::open_path(&path).unwrap();
    assert_eq!(
        reopened.get_bucket("settings").unwrap(),
        bucket(&[("theme", "dark"), ("lang", "en")])
    );
    assert_eq!(reopened.get_entries("scratch").unwrap(), vec![Entry::new("n", "42")]);

    reopened_teardown.run().unwrap();
    teardown.run().unwrap();
}

#[test]
fn close_persists_without_explicit_save() {
    let (db, teardown, _dir, path) = file_db();
    db.set_bucket("ns", bucket(&[("a", "1")])).unwrap();
    teardown.run().unwrap();

    let (reopened, teardown) = Database::open_path(&path).unwrap();
    assert_eq!(reopened.get_bucket("ns").unwrap(), bucket(&[("a", "1")]));
    teardown.run().unwrap();
}

#[test]
fn zero_byte_file_initialises_to_empty_snapshot() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("empty.nsdb");
    std::fs::File::create(&path).unwrap();

    let (db, teardown) = Database::open(Some(DatabaseConfig::with_path(&path))).unwrap();
    assert!(db.namespaces().is_empty());
    assert_eq!(
        std::fs::read(&path).unwrap(),
        SnapshotCodec::encode(&Default::default()).unwrap()
    );

    db.save().unwrap();
    teardown.run().unwrap();

    let (reopened, teardown) = Database::open_path(&path).unwrap();
    assert!(reopened.namespaces().is_empty());
    teardown.run().unwrap();
}

#[test]
fn shrinking_save_leaves_no_stale_bytes() {
    let (db, teardown, _dir, path) = file_db();
    let big: Vec<Entry> = (0..100)
        .map(|i| Entry::new(format!("key{:03}", i), "x".repeat(64)))
        .collect();
    db.set_entries("big", big).unwrap();
    db.save().unwrap();
    let big_len = std::fs::metadata(&path).unwrap().len();

    db.delete_namespace("big").unwrap();
    db.save().unwrap();
    let small_len = std::fs::metadata(&path).unwrap().len();

    assert!(small_len < big_len);
    assert_eq!(
        small_len,
        SnapshotCodec::encode(&Default::default()).unwrap().len() as u64
    );
    teardown.run().unwrap();
}

#[test]
fn deleted_namespace_stays_deleted_after_reopen() {
    let (db, teardown, _dir, path) = file_db();
    db.set_bucket("gone", bucket(&[("a", "1")])).unwrap();
    db.set_bucket("kept", bucket(&[("b", "2")])).unwrap();
    db.save().unwrap();
    db.delete_namespace("gone").unwrap();
    teardown.run().unwrap();

    let (reopened, teardown) = Database::open_path(&path).unwrap();
    assert!(reopened.get_bucket("gone").unwrap_err().is_not_found());
    assert_eq!(reopened.namespaces(), vec!["kept"]);
    teardown.run().unwrap();
}

#[test]
fn corrupt_file_fails_open() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("bad.nsdb");
    std::fs::write(&path, vec![0xAB; 64]).unwrap();

    assert!(Database::open_path(&path).unwrap_err().is_corrupt());
}

#[test]
fn config_file_drives_persistence_mode() {
    let dir = tempfile::TempDir::new().unwrap();
    let data_path = dir.path().join("cfg.nsdb");
    let cfg_path = dir.path().join("nsdb.toml");
    std::fs::write(
        &cfg_path,
        format!("path = {:?}\n", data_path.to_string_lossy()),
    )
    .unwrap();

    let config = DatabaseConfig::from_file(&cfg_path).unwrap();
    let (db, teardown) = Database::open(Some(config)).unwrap();
    assert!(db.is_persistent());
    teardown.run().unwrap();
    assert!(data_path.exists());
}
