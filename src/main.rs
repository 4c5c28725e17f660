use clap::Parser;
use clean_sea_vision::{classify, cli, config, error, loader, scanner, storage};
use clean_sea_vision_common::{HistoryStore, KeyValueStore, MemoryStore, OnnxClassifier, Pipeline};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use storage::FileStore;
use tracing_subscriber::EnvFilter;

type CliPipeline = Pipeline<OnnxClassifier, Box<dyn KeyValueStore>>;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Classify { paths, model, labels, no_history } => {
            println!("🌊 clean-sea-vision - 画像分類\n");

            let images = scanner::collect_images(&paths)?;
            if images.is_empty() {
                return Err(error::VisionError::NoImagesFound(
                    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "),
                ));
            }

            // 履歴なしの場合はメモリ上に置いて捨てる
            let store: Box<dyn KeyValueStore> = if no_history {
                Box::new(MemoryStore::new())
            } else {
                Box::new(FileStore::new(config.history_dir()?))
            };
            let mut pipeline: CliPipeline = Pipeline::new(HistoryStore::new(store));
            println!("{}", pipeline.status().message());

            let model_path = model.unwrap_or_else(|| config.model_path());
            let labels_path = labels.unwrap_or_else(|| config.labels_path.clone());
            let loaded =
                loader::load_into(&mut pipeline, &model_path, &labels_path, config.input_spec()).await;
            println!("{}\n", pipeline.status().message());
            loaded?;

            for path in &images {
                print_classification(&pipeline, path);
            }

            println!("\n✅ 分類完了 ({}枚)", images.len());
        }

        Commands::History { clear, json, limit } => {
            let history = HistoryStore::new(FileStore::new(config.history_dir()?));

            if clear {
                history.clear()?;
                println!("✔ 履歴を削除しました");
                return Ok(());
            }

            let mut entries = history.load();
            if let Some(limit) = limit {
                entries.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("履歴はありません");
            } else {
                println!("推論履歴 ({}件):", entries.len());
                for (i, entry) in entries.iter().enumerate() {
                    println!(
                        "  {:>2}. {}  {} ({})",
                        i + 1,
                        entry.timestamp(),
                        entry.label(),
                        entry.confidence_percent()
                    );
                }
            }
        }

        Commands::Labels { labels } => {
            let path = labels.unwrap_or_else(|| config.labels_path.clone());
            let labels = loader::load_labels(&path).await?;

            println!("ラベル ({}件): {}", labels.len(), path.display());
            for (i, label) in labels.iter().enumerate() {
                println!("  {:>3}: {}", i, label);
            }
        }

        Commands::Config { set_model, set_labels, set_layout, show } => {
            let mut config = config;
            let changed = set_model.is_some() || set_labels.is_some() || set_layout.is_some();

            if let Some(path) = set_model {
                config.model_path = path;
            }
            if let Some(path) = set_labels {
                config.labels_path = path;
            }
            if let Some(layout) = set_layout {
                config.layout = layout;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  モデル: {}", config.model_path().display());
                println!("  ラベル: {}", config.labels_path.display());
                println!("  入力サイズ: {}px", config.input_size);
                println!("  次元順: {}", config.layout);
                println!("  履歴: {}", config.history_dir()?.display());
            }
        }
    }

    Ok(())
}

/// 1枚分類して結果を表示。エラーは表示して次へ進む
fn print_classification(pipeline: &CliPipeline, path: &std::path::Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    match classify::classify_file(pipeline, path) {
        Ok(prediction) => {
            println!("📷 {}", name);
            println!("  Prediction: {}", prediction.result.label());
            println!(
                "  Confidence: {} ({})",
                prediction.result.confidence_percent(),
                prediction.result.confidence_level()
            );
            println!("  {}", prediction.tip);
            if let Some(e) = prediction.history_error {
                println!("  ⚠ 履歴を保存できませんでした: {}", e);
            }
        }
        Err(e) => {
            tracing::error!(file = %name, error = %e, "classification failed");
            println!("✘ {}: {}", name, e);
        }
    }
}
