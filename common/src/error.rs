//! エラー型定義
//!
//! ロード・推論・履歴保存の3系統に分ける。

use thiserror::Error;

/// モデル/ラベルのロードエラー（再ロードするまで推論不可）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Model load error: {0}")]
    Model(String),

    #[error("Label load error: {0}")]
    Labels(String),
}

/// 推論エラー（いずれもユーザー操作でリトライ可能）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    #[error("Model is not ready yet. Please wait for it to load.")]
    NotReady,

    #[error("Please upload an image first!")]
    NoImage,

    #[error("A prediction is already running")]
    Busy,

    #[error("Image error: {0}")]
    Image(String),

    #[error("Inference error: {0}")]
    Inference(String),
}

/// 履歴ストレージエラー（致命的ではない）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Storage read error: {0}")]
    Read(String),

    #[error("Storage write error: {0}")]
    Write(String),

    #[error("History serialize error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialize(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_load() {
        let error = LoadError::Model("404 Not Found".to_string());
        assert_eq!(format!("{}", error), "Model load error: 404 Not Found");

        let error = LoadError::Labels("labels.txt".to_string());
        assert!(format!("{}", error).contains("labels.txt"));
    }

    #[test]
    fn test_error_display_predict() {
        assert!(format!("{}", PredictError::NoImage).contains("upload an image"));
        assert!(format!("{}", PredictError::NotReady).contains("not ready"));
    }

    #[test]
    fn test_storage_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: StorageError = json_error.into();
        assert!(matches!(error, StorageError::Serialize(_)));
    }
}
