//! 履歴ストアテスト（ファイル保存）
//!
//! CLIが使うファイルベースのストアで履歴の順序・上限・削除を検証

use clean_sea_vision::storage::FileStore;
use clean_sea_vision_common::{HistoryStore, KeyValueStore, PredictionResult, HISTORY_KEY};
use tempfile::tempdir;

fn entry(label: &str) -> PredictionResult {
    PredictionResult::new(label, 0.75, "2026-01-18T09:30:00.000Z", "data:image/jpeg;base64,")
}

/// 保存先がまだ存在しない
#[test]
fn test_history_missing_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let history = HistoryStore::new(FileStore::new(dir.path().join("not-yet")));

    assert!(history.load().is_empty());
}

/// 追加順と逆順で保存される
#[test]
fn test_history_order_persisted() {
    let dir = tempdir().expect("Failed to create temp dir");
    let history = HistoryStore::new(FileStore::new(dir.path()));

    history.append(entry("A")).expect("保存失敗");
    history.append(entry("B")).expect("保存失敗");
    history.append(entry("C")).expect("保存失敗");

    // 別インスタンスから読み直す
    let reloaded = HistoryStore::new(FileStore::new(dir.path()));
    let labels: Vec<String> = reloaded.load().iter().map(|e| e.label().to_string()).collect();
    assert_eq!(labels, vec!["C", "B", "A"]);
}

/// 21件目で最古が消える
#[test]
fn test_history_capacity() {
    let dir = tempdir().expect("Failed to create temp dir");
    let history = HistoryStore::new(FileStore::new(dir.path()));

    for i in 1..=21 {
        history.append(entry(&format!("photo {}", i))).expect("保存失敗");
    }

    let entries = history.load();
    assert_eq!(entries.len(), 20);
    assert_eq!(entries[0].label(), "photo 21");
    assert_eq!(entries[19].label(), "photo 2");
}

/// 削除後は空
#[test]
fn test_history_clear_removes_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path());
    let path = store.path_for(HISTORY_KEY);
    let history = HistoryStore::new(store);

    history.append(entry("A")).expect("保存失敗");
    assert!(path.exists());

    history.clear().expect("削除失敗");
    assert!(!path.exists());
    assert!(history.load().is_empty());
}

/// 破損した履歴ファイルは空として扱う
#[test]
fn test_history_corrupted_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path());
    std::fs::write(store.path_for(HISTORY_KEY), "[{ broken").unwrap();

    let history = HistoryStore::new(store);
    assert!(history.load().is_empty());
}

/// 書き込めない場所への保存はエラーを返す（パニックしない）
#[test]
fn test_history_write_failure() {
    let dir = tempdir().expect("Failed to create temp dir");
    // ファイルをディレクトリとして使わせる
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let history = HistoryStore::new(FileStore::new(&blocker));
    assert!(history.append(entry("A")).is_err());
    assert!(history.load().is_empty());
}

/// FileStoreの基本操作
#[test]
fn test_file_store_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path());

    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "[]").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("[]"));
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    assert!(store.remove("k").is_ok());
}
