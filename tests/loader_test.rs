//! ロード処理テスト
//!
//! ラベルファイル・モデルファイルの読み込みエラーを検証

use clean_sea_vision::loader;
use clean_sea_vision_common::{HistoryStore, InputSpec, LoadError, MemoryStore, ModelStatus, Pipeline};
use tempfile::tempdir;

/// ラベルファイルの読み込み
#[tokio::test]
async fn test_load_labels() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("labels.txt");
    std::fs::write(&path, "0 Marine_Debris\n1 Clean_Water\n2 Oil_Spill\n").unwrap();

    let labels = loader::load_labels(&path).await.expect("読み込み失敗");
    assert_eq!(labels.len(), 3);
    assert_eq!(labels.get(0), Some("Marine Debris"));
    assert_eq!(labels.get(2), Some("Oil Spill"));
}

/// 存在しないラベルファイル
#[tokio::test]
async fn test_load_labels_missing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = loader::load_labels(&dir.path().join("missing.txt")).await.unwrap_err();
    assert!(matches!(err, LoadError::Labels(_)));
}

/// 空のラベルファイル
#[tokio::test]
async fn test_load_labels_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("labels.txt");
    std::fs::write(&path, "\n").unwrap();

    let err = loader::load_labels(&path).await.unwrap_err();
    assert!(matches!(err, LoadError::Labels(_)));
}

/// 存在しないモデルファイル
#[tokio::test]
async fn test_load_model_missing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let labels = dir.path().join("labels.txt");
    std::fs::write(&labels, "Clean_Water").unwrap();

    let result = loader::load(&dir.path().join("model.onnx"), &labels, InputSpec::default()).await;
    assert!(matches!(result, Err(LoadError::Model(_))));
}

/// 壊れたモデルファイル
#[tokio::test]
async fn test_load_model_invalid() {
    let dir = tempdir().expect("Failed to create temp dir");
    let model = dir.path().join("model.onnx");
    let labels = dir.path().join("labels.txt");
    std::fs::write(&model, b"not a protobuf").unwrap();
    std::fs::write(&labels, "Clean_Water").unwrap();

    let result = loader::load(&model, &labels, InputSpec::default()).await;
    assert!(matches!(result, Err(LoadError::Model(_))));
}

/// 読み込み失敗はエラーとして返り、状態もFailedになる
#[tokio::test]
async fn test_load_into_reports_failure() {
    let dir = tempdir().expect("Failed to create temp dir");
    let labels = dir.path().join("labels.txt");
    std::fs::write(&labels, "Clean_Water").unwrap();

    let mut pipeline = Pipeline::new(HistoryStore::new(MemoryStore::new()));
    let result =
        loader::load_into(&mut pipeline, &dir.path().join("model.onnx"), &labels, InputSpec::default())
            .await;

    assert!(matches!(result, Err(LoadError::Model(_))));
    assert!(matches!(pipeline.status(), ModelStatus::Failed(_)));
    assert!(!pipeline.status().is_ready());
}
