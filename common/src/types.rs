//! 推論結果の型定義
//!
//! CLIとWeb(WASM)で共有される。履歴ストアにはこの形のままJSONで保存する。

use crate::confidence::ConfidenceLevel;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// 1回分の推論結果（作成後は不変）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    label: String,
    /// モデルの生スコア。softmax済みとは限らないので [0,1] を超えることもある
    /// 常に有限値（JSONに `null` として書かれないように）
    confidence_score: f32,
    /// ISO-8601 (UTC)
    timestamp: String,
    /// サムネイル（data URL）
    #[serde(default)]
    thumbnail: String,
}

impl PredictionResult {
    pub fn new(
        label: impl Into<String>,
        confidence_score: f32,
        timestamp: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            confidence_score: finite_score(confidence_score),
            timestamp: timestamp.into(),
            thumbnail: thumbnail.into(),
        }
    }

    /// 現在時刻のタイムスタンプで作成
    pub fn now(label: impl Into<String>, confidence_score: f32, thumbnail: impl Into<String>) -> Self {
        Self::new(label, confidence_score, now_timestamp(), thumbnail)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn confidence_score(&self) -> f32 {
        self.confidence_score
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence_score)
    }

    /// 表示用のパーセント表記（例: `93.25%`）
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence_score * 100.0)
    }
}

/// ±∞ は f32 の最大/最小値に、NaN は 0 に寄せる
fn finite_score(score: f32) -> f32 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(f32::MIN, f32::MAX)
    }
}

/// `2026-01-18T09:30:00.000Z` 形式
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
