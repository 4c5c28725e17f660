//! モデルとラベルファイルの読み込み

use clean_sea_vision_common::{
    labels_from_text, InputSpec, KeyValueStore, LabelSet, LoadError, OnnxClassifier, Pipeline,
};
use std::path::Path;

/// モデル → ラベルの順に読み込む
pub async fn load(
    model_path: &Path,
    labels_path: &Path,
    spec: InputSpec,
) -> Result<(OnnxClassifier, LabelSet), LoadError> {
    let bytes = tokio::fs::read(model_path)
        .await
        .map_err(|e| LoadError::Model(format!("{}: {}", model_path.display(), e)))?;
    tracing::debug!(path = %model_path.display(), size = bytes.len(), "model file read");

    let classifier = OnnxClassifier::from_bytes(&bytes, spec)?;
    let labels = load_labels(labels_path).await?;

    Ok((classifier, labels))
}

/// 読み込んでパイプラインに反映する
///
/// 状態は失敗時も `Failed` に更新され、エラーは呼び出し側に返る。
pub async fn load_into<S: KeyValueStore>(
    pipeline: &mut Pipeline<OnnxClassifier, S>,
    model_path: &Path,
    labels_path: &Path,
    spec: InputSpec,
) -> Result<(), LoadError> {
    let loaded = load(model_path, labels_path, spec).await;
    let failure = loaded.as_ref().err().cloned();
    pipeline.apply_load(loaded);
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// ラベルファイルを読み込んでパース
pub async fn load_labels(path: &Path) -> Result<LabelSet, LoadError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::Labels(format!("{}: {}", path.display(), e)))?;
    labels_from_text(&text)
}
