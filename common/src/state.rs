//! アプリケーション状態
//!
//! モデルとラベルは起動時に一度だけセットし、以降は読むだけ。

use crate::error::LoadError;
use crate::labels::LabelSet;

/// モデルのロード状態
#[derive(Debug, Clone, PartialEq)]
pub enum ModelStatus {
    Loading,
    Ready { classes: usize },
    Failed(String),
}

impl ModelStatus {
    /// UI表示用メッセージ
    pub fn message(&self) -> String {
        match self {
            ModelStatus::Loading => "Loading model...".to_string(),
            ModelStatus::Ready { .. } => "Model loaded successfully!".to_string(),
            ModelStatus::Failed(reason) => format!("Model failed to load: {}", reason),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelStatus::Ready { .. })
    }
}

/// ロード済みのモデルとラベル
pub struct LoadedModel<C> {
    pub classifier: C,
    pub labels: LabelSet,
}

pub struct AppState<C> {
    status: ModelStatus,
    loaded: Option<LoadedModel<C>>,
}

impl<C> Default for AppState<C> {
    fn default() -> Self {
        Self {
            status: ModelStatus::Loading,
            loaded: None,
        }
    }
}

impl<C> AppState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ModelStatus {
        &self.status
    }

    pub fn loaded(&self) -> Option<&LoadedModel<C>> {
        self.loaded.as_ref()
    }

    /// ロード結果を反映する
    ///
    /// 失敗時はモデルを一切公開しない。
    pub fn apply_load(&mut self, result: Result<(C, LabelSet), LoadError>) -> &ModelStatus {
        match result {
            Ok((classifier, labels)) => {
                tracing::info!(classes = labels.len(), "model ready");
                self.status = ModelStatus::Ready {
                    classes: labels.len(),
                };
                self.loaded = Some(LoadedModel { classifier, labels });
            }
            Err(e) => {
                tracing::error!(error = %e, "model load failed");
                self.status = ModelStatus::Failed(e.to_string());
                self.loaded = None;
            }
        }
        &self.status
    }
}
