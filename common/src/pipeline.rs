//! 推論パイプライン
//!
//! 前処理 → 推論 → 最大スコア選択 → ラベル/Tip対応付け → 履歴追加。
//! 同時に2つの推論は走らせない（実行中フラグで弾く）。

use crate::classifier::Classifier;
use crate::eco_tip::EcoTipTable;
use crate::error::{LoadError, PredictError, StorageError};
use crate::history::HistoryStore;
use crate::labels::LabelSet;
use crate::preprocess::prepare_input;
use crate::selection::select_best;
use crate::state::{AppState, ModelStatus};
use crate::storage::KeyValueStore;
use crate::thumbnail::{make_thumbnail, THUMBNAIL_SIZE};
use crate::types::PredictionResult;
use image::DynamicImage;
use std::sync::atomic::{AtomicBool, Ordering};

/// 1回の推論の出力
#[derive(Debug, Clone)]
pub struct Prediction {
    pub result: PredictionResult,
    pub tip: &'static str,
    /// 履歴保存に失敗した場合のみ。推論自体は成功扱い
    pub history_error: Option<StorageError>,
}

pub struct Pipeline<C, S> {
    state: AppState<C>,
    history: HistoryStore<S>,
    tips: &'static EcoTipTable,
    in_flight: AtomicBool,
}

impl<C: Classifier, S: KeyValueStore> Pipeline<C, S> {
    pub fn new(history: HistoryStore<S>) -> Self {
        Self {
            state: AppState::new(),
            history,
            tips: EcoTipTable::builtin(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn status(&self) -> &ModelStatus {
        self.state.status()
    }

    pub fn state(&self) -> &AppState<C> {
        &self.state
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// ローダーの結果を反映
    pub fn apply_load(&mut self, result: Result<(C, LabelSet), LoadError>) -> &ModelStatus {
        self.state.apply_load(result)
    }

    /// 画像を分類して履歴に追加
    pub fn predict(&self, image: Option<&DynamicImage>) -> Result<Prediction, PredictError> {
        let loaded = self.state.loaded().ok_or(PredictError::NotReady)?;
        let image = image.ok_or(PredictError::NoImage)?;
        let _guard = InFlight::acquire(&self.in_flight)?;

        let input = prepare_input(image, &loaded.classifier.input_spec());
        let scores = loaded.classifier.forward(input)?;

        if scores.len() != loaded.labels.len() {
            tracing::warn!(
                outputs = scores.len(),
                labels = loaded.labels.len(),
                "label count does not match model output"
            );
        }

        let (index, score) = select_best(&scores)
            .ok_or_else(|| PredictError::Inference("model produced no usable scores".into()))?;
        drop(scores);

        let label = loaded.labels.label_for(index);
        tracing::debug!(index, score, label = %label, "prediction");

        let thumbnail = make_thumbnail(image, THUMBNAIL_SIZE).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "thumbnail encode failed");
            String::new()
        });

        let result = PredictionResult::now(label, score, thumbnail);
        let tip = self.tips.tip_for(result.label());

        let history_error = match self.history.append(result.clone()) {
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to save prediction history");
                Some(e)
            }
        };

        Ok(Prediction {
            result,
            tip,
            history_error,
        })
    }
}

/// 実行中フラグ。dropで必ず解除される
struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, PredictError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PredictError::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORY_CAPACITY;
    use crate::preprocess::{InputSpec, InputTensor, TensorLayout};
    use crate::storage::MemoryStore;
    use crate::eco_tip::DEFAULT_TIP;
    use image::{ImageBuffer, Rgb};
    use std::cell::RefCell;

    /// 固定スコアを返すモデル
    struct FixedScores {
        scores: Vec<f32>,
        seen_shapes: RefCell<Vec<[usize; 4]>>,
    }

    impl FixedScores {
        fn new(scores: Vec<f32>) -> Self {
            Self {
                scores,
                seen_shapes: RefCell::new(Vec::new()),
            }
        }
    }

    impl Classifier for FixedScores {
        fn input_spec(&self) -> InputSpec {
            InputSpec::square(16, TensorLayout::Nhwc)
        }

        fn forward(&self, input: InputTensor) -> Result<Vec<f32>, PredictError> {
            self.seen_shapes.borrow_mut().push(input.shape);
            Ok(self.scores.clone())
        }
    }

    /// 常に失敗するモデル
    struct Broken;

    impl Classifier for Broken {
        fn input_spec(&self) -> InputSpec {
            InputSpec::default()
        }

        fn forward(&self, _input: InputTensor) -> Result<Vec<f32>, PredictError> {
            Err(PredictError::Inference("backend crashed".into()))
        }
    }

    fn labels() -> LabelSet {
        LabelSet::parse("0 Marine_Debris\n1 Clean_Water\n2 Oil_Spill")
    }

    fn image() -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(32, 24, Rgb([0u8, 80, 160])))
    }

    fn ready(scores: Vec<f32>) -> Pipeline<FixedScores, MemoryStore> {
        let mut pipeline = Pipeline::new(HistoryStore::new(MemoryStore::new()));
        pipeline.apply_load(Ok((FixedScores::new(scores), labels())));
        pipeline
    }

    #[test]
    fn test_predict_not_ready() {
        let pipeline: Pipeline<FixedScores, MemoryStore> =
            Pipeline::new(HistoryStore::new(MemoryStore::new()));

        let err = pipeline.predict(Some(&image())).unwrap_err();
        assert_eq!(err, PredictError::NotReady);
        assert!(pipeline.history().load().is_empty());
    }

    #[test]
    fn test_predict_after_failed_load_is_not_ready() {
        let mut pipeline: Pipeline<FixedScores, MemoryStore> =
            Pipeline::new(HistoryStore::new(MemoryStore::new()));
        pipeline.apply_load(Err(LoadError::Labels("unreachable".into())));

        assert_eq!(pipeline.predict(Some(&image())).unwrap_err(), PredictError::NotReady);
        assert!(pipeline.history().is_empty());
    }

    #[test]
    fn test_predict_no_image() {
        let pipeline = ready(vec![0.1, 0.8, 0.1]);
        assert_eq!(pipeline.predict(None).unwrap_err(), PredictError::NoImage);
        assert!(pipeline.history().is_empty());
    }

    #[test]
    fn test_predict_picks_best_label_and_tip() {
        let pipeline = ready(vec![0.05, 0.15, 0.8]);
        let prediction = pipeline.predict(Some(&image())).unwrap();

        assert_eq!(prediction.result.label(), "Oil Spill");
        assert!((prediction.result.confidence_score() - 0.8).abs() < 1e-6);
        assert!(prediction.tip.contains("Report oil spills"));
        assert!(prediction.result.thumbnail().starts_with("data:image/jpeg;base64,"));
        assert!(prediction.history_error.is_none());

        let history = pipeline.history().load();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], prediction.result);
    }

    #[test]
    fn test_predict_uses_model_input_spec() {
        let pipeline = ready(vec![1.0, 0.0, 0.0]);
        pipeline.predict(Some(&image())).unwrap();

        let loaded = pipeline.state().loaded().unwrap();
        assert_eq!(*loaded.classifier.seen_shapes.borrow(), vec![[1, 16, 16, 3]]);
    }

    #[test]
    fn test_predict_tie_takes_first() {
        let pipeline = ready(vec![0.2, 0.9, 0.9]);
        let prediction = pipeline.predict(Some(&image())).unwrap();
        assert_eq!(prediction.result.label(), "Clean Water");
    }

    #[test]
    fn test_predict_out_of_range_label() {
        let pipeline = ready(vec![0.1, 0.1, 0.1, 0.7]);
        let prediction = pipeline.predict(Some(&image())).unwrap();
        assert_eq!(prediction.result.label(), "Label 3");
        assert_eq!(prediction.tip, DEFAULT_TIP);
    }

    #[test]
    fn test_predict_empty_output() {
        let pipeline = ready(vec![]);
        let err = pipeline.predict(Some(&image())).unwrap_err();
        assert!(matches!(err, PredictError::Inference(_)));
        assert!(pipeline.history().is_empty());
    }

    #[test]
    fn test_inference_error_releases_guard() {
        let mut pipeline = Pipeline::new(HistoryStore::new(MemoryStore::new()));
        pipeline.apply_load(Ok((Broken, labels())));

        for _ in 0..2 {
            let err = pipeline.predict(Some(&image())).unwrap_err();
            assert_eq!(err, PredictError::Inference("backend crashed".into()));
        }
        assert!(pipeline.history().is_empty());
    }

    #[test]
    fn test_history_is_capped() {
        let pipeline = ready(vec![0.9, 0.1, 0.0]);
        for _ in 0..HISTORY_CAPACITY + 3 {
            pipeline.predict(Some(&image())).unwrap();
        }
        assert_eq!(pipeline.history().len(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_in_flight_guard() {
        let flag = AtomicBool::new(false);
        let first = InFlight::acquire(&flag).unwrap();
        assert!(matches!(InFlight::acquire(&flag), Err(PredictError::Busy)));

        drop(first);
        assert!(InFlight::acquire(&flag).is_ok());
    }
}
