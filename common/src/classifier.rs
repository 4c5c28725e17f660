//! 分類モデルの抽象
//!
//! パイプラインはモデルの中身を知らない。入力テンソルを渡してクラスごとのスコアを受け取るだけ。

use crate::error::PredictError;
use crate::preprocess::{InputSpec, InputTensor};

pub trait Classifier {
    /// モデルが期待する入力
    fn input_spec(&self) -> InputSpec;

    /// 順伝播。戻り値は 1xC の出力を平坦化したスコア
    ///
    /// 入力は所有権ごと受け取り、推論後に解放する。
    fn forward(&self, input: InputTensor) -> Result<Vec<f32>, PredictError>;
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn input_spec(&self) -> InputSpec {
        (**self).input_spec()
    }

    fn forward(&self, input: InputTensor) -> Result<Vec<f32>, PredictError> {
        (**self).forward(input)
    }
}
