//! モデルとラベルの取得（fetch）

use clean_sea_vision_common::{build_model, InputSpec, LabelSet, LoadError, OnnxClassifier};
use gloo::net::http::Request;

pub const MODEL_URL: &str = "model/model.onnx";
pub const LABELS_URL: &str = "labels.txt";

/// モデル → ラベルの順に取得して組み立てる
pub async fn load() -> Result<(OnnxClassifier, LabelSet), LoadError> {
    let model_bytes = fetch_bytes(MODEL_URL).await.map_err(LoadError::Model)?;
    let label_text = fetch_text(LABELS_URL).await.map_err(LoadError::Labels)?;

    build_model(&model_bytes, &label_text, InputSpec::default())
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("{}: {}", url, e))?;

    if !response.ok() {
        return Err(format!("{}: HTTP {}", url, response.status()));
    }

    response.binary().await.map_err(|e| format!("{}: {}", url, e))
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("{}: {}", url, e))?;

    if !response.ok() {
        return Err(format!("{}: HTTP {}", url, response.status()));
    }

    response.text().await.map_err(|e| format!("{}: {}", url, e))
}
