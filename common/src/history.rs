//! 推論履歴ストア
//!
//! 新しい順・最大20件。1つのキーにJSON配列として丸ごと保存する。
//! 履歴は参考情報なので、読み込み失敗や破損データは空として扱う。

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use crate::types::PredictionResult;

/// 保存キー
pub const HISTORY_KEY: &str = "cleanSeaVision.history";

/// 最大保持件数
pub const HISTORY_CAPACITY: usize = 20;

pub struct HistoryStore<S> {
    store: S,
    key: String,
    capacity: usize,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: HISTORY_KEY.to_string(),
            capacity: HISTORY_CAPACITY,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 履歴を読み込み（新しい順）
    pub fn load(&self) -> Vec<PredictionResult> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "history read failed, treating as empty");
                return Vec::new();
            }
        };

        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(error = %e, "history is corrupted, treating as empty");
                return Vec::new();
            }
        };

        // 読めないエントリだけ捨てて残りは生かす
        let total = values.len();
        let entries: Vec<PredictionResult> = values
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect();
        if entries.len() < total {
            tracing::warn!(skipped = total - entries.len(), "dropped unreadable history entries");
        }
        entries
    }

    /// 先頭に追加して上限で切り詰め、丸ごと書き戻す
    ///
    /// 書き込み後の履歴を返す。
    pub fn append(&self, result: PredictionResult) -> Result<Vec<PredictionResult>, StorageError> {
        let mut entries = self.load();
        entries.insert(0, result);
        entries.truncate(self.capacity);

        let json = serde_json::to_string(&entries)?;
        self.store.set(&self.key, &json)?;
        Ok(entries)
    }

    /// 履歴を削除
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }

    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.load().is_empty()
    }
}
