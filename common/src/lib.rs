//! CleanSea Vision Common Library
//!
//! CLIとWeb(WASM)で共有される分類パイプラインと履歴ストア

pub mod classifier;
pub mod confidence;
pub mod eco_tip;
pub mod error;
pub mod history;
pub mod labels;
pub mod loader;
#[cfg(feature = "onnx")]
pub mod onnx;
pub mod pipeline;
pub mod preprocess;
pub mod selection;
pub mod state;
pub mod storage;
pub mod thumbnail;
pub mod types;

pub use classifier::Classifier;
pub use confidence::{gauge_percent, ConfidenceLevel};
pub use eco_tip::{eco_tip, EcoTipTable, DEFAULT_TIP};
pub use error::{LoadError, PredictError, StorageError};
pub use history::{HistoryStore, HISTORY_CAPACITY, HISTORY_KEY};
pub use labels::LabelSet;
pub use loader::{labels_from_text, DEFAULT_LABELS_PATH, DEFAULT_MODEL_PATH};
#[cfg(feature = "onnx")]
pub use loader::build_model;
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;
pub use pipeline::{Pipeline, Prediction};
pub use preprocess::{prepare_input, InputSpec, InputTensor, TensorLayout, DEFAULT_INPUT_SIZE};
pub use selection::select_best;
pub use state::{AppState, LoadedModel, ModelStatus};
pub use storage::{KeyValueStore, MemoryStore};
pub use types::PredictionResult;
