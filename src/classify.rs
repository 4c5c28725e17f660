//! 画像ファイル1枚の分類

use crate::error::Result;
use clean_sea_vision_common::{Classifier, KeyValueStore, Pipeline, Prediction, PredictError};
use std::path::Path;

/// 画像を開いて推論する
///
/// 画像の読み込み失敗と推論エラーはどちらも `VisionError::Predict` になる。
pub fn classify_file<C: Classifier, S: KeyValueStore>(
    pipeline: &Pipeline<C, S>,
    path: &Path,
) -> Result<Prediction> {
    let image = image::open(path).map_err(|e| PredictError::Image(e.to_string()))?;
    let prediction = pipeline.predict(Some(&image))?;
    Ok(prediction)
}
