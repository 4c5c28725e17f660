use crate::error::{Result, VisionError};
use clean_sea_vision_common::{
    InputSpec, TensorLayout, DEFAULT_INPUT_SIZE, DEFAULT_LABELS_PATH, DEFAULT_MODEL_PATH,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// モデルパスを上書きする環境変数
pub const MODEL_ENV: &str = "CLEAN_SEA_VISION_MODEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub input_size: u32,
    pub layout: TensorLayout,
    /// 履歴の保存先（省略時はデータディレクトリ）
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            labels_path: PathBuf::from(DEFAULT_LABELS_PATH),
            input_size: DEFAULT_INPUT_SIZE,
            layout: TensorLayout::Nhwc,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| VisionError::Config("設定ディレクトリが見つかりません".into()))?;
        Ok(dir.join("clean-sea-vision").join("config.json"))
    }

    /// モデルパス（環境変数を優先）
    pub fn model_path(&self) -> PathBuf {
        match std::env::var(MODEL_ENV) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.model_path.clone(),
        }
    }

    /// 履歴ディレクトリ
    pub fn history_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let dir = dirs::data_local_dir()
            .ok_or_else(|| VisionError::Config("データディレクトリが見つかりません".into()))?;
        Ok(dir.join("clean-sea-vision"))
    }

    pub fn input_spec(&self) -> InputSpec {
        InputSpec::square(self.input_size, self.layout)
    }
}
