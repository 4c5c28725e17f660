//! ONNXモデル（tract）による分類器

use crate::classifier::Classifier;
use crate::error::{LoadError, PredictError};
use crate::preprocess::{InputSpec, InputTensor};
use std::io::Cursor;
use tract_onnx::prelude::*;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

pub struct OnnxClassifier {
    plan: Plan,
    spec: InputSpec,
}

impl OnnxClassifier {
    /// モデルのバイト列から構築
    ///
    /// 入力は `spec` の形状に固定して最適化する。
    pub fn from_bytes(bytes: &[u8], spec: InputSpec) -> Result<Self, LoadError> {
        if bytes.is_empty() {
            return Err(LoadError::Model("model file is empty".into()));
        }

        let plan = tract_onnx::onnx()
            .model_for_read(&mut Cursor::new(bytes))
            .and_then(|model| model.with_input_fact(0, f32::fact(spec.shape()).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| LoadError::Model(format!("ONNX parse error: {}", e)))?;

        Ok(Self { plan, spec })
    }
}

impl Classifier for OnnxClassifier {
    fn input_spec(&self) -> InputSpec {
        self.spec
    }

    fn forward(&self, input: InputTensor) -> Result<Vec<f32>, PredictError> {
        let tensor = Tensor::from_shape::<f32>(&input.shape[..], input.data.as_slice())
            .map_err(|e| PredictError::Inference(format!("invalid input tensor: {}", e)))?;
        drop(input);

        let outputs = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| PredictError::Inference(format!("failed to run model: {}", e)))?;

        let output = outputs
            .first()
            .ok_or_else(|| PredictError::Inference("model produced no outputs".into()))?;
        let view = output
            .to_array_view::<f32>()
            .map_err(|e| PredictError::Inference(format!("output is not f32: {}", e)))?;

        Ok(view.iter().copied().collect())
    }
}
