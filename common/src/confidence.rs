//! 信頼度の段階表示
//!
//! スコアは正規化されていない生値なので、ゲージの幅は [0,1] に丸めて使う。

use serde::{Deserialize, Serialize};

/// 高信頼度の下限
pub const HIGH_THRESHOLD: f32 = 0.8;

/// 中信頼度の下限
pub const MEDIUM_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// `score >= 0.8` は High、`score >= 0.5` は Medium、それ以外（NaN含む）は Low
    pub fn from_score(score: f32) -> Self {
        if score >= HIGH_THRESHOLD {
            ConfidenceLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// CSSクラス名などに使う識別子
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// ゲージの塗り幅（0〜100%）
pub fn gauge_percent(score: f32) -> f32 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0) * 100.0
    }
}
