//! ロード処理の共通部分
//!
//! 取得（ファイル/fetch）は各フロントエンドが行い、ここではバイト列とテキストを組み立てる。

use crate::error::LoadError;
use crate::labels::LabelSet;

/// ラベルファイルの既定パス
pub const DEFAULT_LABELS_PATH: &str = "labels.txt";

/// モデルファイルの既定パス
pub const DEFAULT_MODEL_PATH: &str = "model/model.onnx";

/// ラベルテキストをパース。1件もなければエラー
pub fn labels_from_text(text: &str) -> Result<LabelSet, LoadError> {
    let labels = LabelSet::parse(text);
    if labels.is_empty() {
        return Err(LoadError::Labels("label file is empty".into()));
    }
    Ok(labels)
}

/// モデルとラベルを組み立てる（モデル → ラベルの順）
#[cfg(feature = "onnx")]
pub fn build_model(
    model_bytes: &[u8],
    label_text: &str,
    spec: crate::preprocess::InputSpec,
) -> Result<(crate::onnx::OnnxClassifier, LabelSet), LoadError> {
    let classifier = crate::onnx::OnnxClassifier::from_bytes(model_bytes, spec)?;
    let labels = labels_from_text(label_text)?;
    Ok((classifier, labels))
}
