//! 画像 → 入力テンソル変換
//!
//! モデルの学習時と同じ前処理でなければならない:
//! 224x224へ最近傍リサイズ、f32化、255で割って[0,1]、先頭にバッチ次元1。

use image::imageops::{self, FilterType};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// 入力解像度のデフォルト
pub const DEFAULT_INPUT_SIZE: u32 = 224;

/// テンソルの次元順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TensorLayout {
    /// [1, H, W, 3]（ブラウザのピクセルテンソルと同じ）
    #[default]
    Nhwc,
    /// [1, 3, H, W]
    Nchw,
}

impl std::str::FromStr for TensorLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nhwc" => Ok(TensorLayout::Nhwc),
            "nchw" => Ok(TensorLayout::Nchw),
            _ => Err(format!("Unknown layout: {}. Use nhwc or nchw", s)),
        }
    }
}

impl std::fmt::Display for TensorLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TensorLayout::Nhwc => write!(f, "nhwc"),
            TensorLayout::Nchw => write!(f, "nchw"),
        }
    }
}

/// モデル入力の仕様
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub width: u32,
    pub height: u32,
    pub layout: TensorLayout,
}

impl Default for InputSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_INPUT_SIZE,
            height: DEFAULT_INPUT_SIZE,
            layout: TensorLayout::Nhwc,
        }
    }
}

impl InputSpec {
    pub fn square(size: u32, layout: TensorLayout) -> Self {
        Self {
            width: size,
            height: size,
            layout,
        }
    }

    pub fn shape(&self) -> [usize; 4] {
        let (h, w) = (self.height as usize, self.width as usize);
        match self.layout {
            TensorLayout::Nhwc => [1, h, w, 3],
            TensorLayout::Nchw => [1, 3, h, w],
        }
    }
}

/// モデルに渡す入力。推論に所有権ごと渡すので、どの経路でも推論後に解放される
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    pub shape: [usize; 4],
    pub data: Vec<f32>,
}

/// 画像を入力テンソルに変換
pub fn prepare_input(image: &DynamicImage, spec: &InputSpec) -> InputTensor {
    let rgb = image.to_rgb8();
    let resized = imageops::resize(&rgb, spec.width, spec.height, FilterType::Nearest);

    let (w, h) = (spec.width as usize, spec.height as usize);
    let mut data = vec![0f32; w * h * 3];

    for (x, y, pixel) in resized.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        for c in 0..3 {
            let index = match spec.layout {
                TensorLayout::Nhwc => (y * w + x) * 3 + c,
                TensorLayout::Nchw => c * h * w + y * w + x,
            };
            data[index] = pixel[c] as f32 / 255.0;
        }
    }

    InputTensor {
        shape: spec.shape(),
        data,
    }
}
