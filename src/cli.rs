use clap::{Parser, Subcommand};
use clean_sea_vision_common::TensorLayout;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clean-sea-vision")]
#[command(about = "海洋汚染写真の画像分類ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を分類してエコTipを表示
    Classify {
        /// 画像ファイルまたはフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// モデルファイル（ONNX）
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// ラベルファイル
        #[arg(short, long)]
        labels: Option<PathBuf>,

        /// 履歴に保存しない
        #[arg(long)]
        no_history: bool,
    },

    /// 推論履歴を表示/削除
    History {
        /// 履歴を削除
        #[arg(long)]
        clear: bool,

        /// JSONで出力
        #[arg(long)]
        json: bool,

        /// 表示件数
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// ラベルファイルの解析結果を表示
    Labels {
        /// ラベルファイル（省略時は設定値）
        #[arg(short, long)]
        labels: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// モデルファイルを設定
        #[arg(long)]
        set_model: Option<PathBuf>,

        /// ラベルファイルを設定
        #[arg(long)]
        set_labels: Option<PathBuf>,

        /// 入力テンソルの次元順 (nhwc/nchw)
        #[arg(long)]
        set_layout: Option<TensorLayout>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_classify() {
        let cli = Cli::parse_from(["clean-sea-vision", "classify", "a.jpg", "photos", "--no-history"]);
        match cli.command {
            Commands::Classify { paths, no_history, model, .. } => {
                assert_eq!(paths.len(), 2);
                assert!(no_history);
                assert!(model.is_none());
            }
            _ => panic!("classify expected"),
        }
    }

    #[test]
    fn test_parse_layout() {
        let cli = Cli::parse_from(["clean-sea-vision", "config", "--set-layout", "nchw"]);
        match cli.command {
            Commands::Config { set_layout, .. } => assert_eq!(set_layout, Some(TensorLayout::Nchw)),
            _ => panic!("config expected"),
        }
    }
}
