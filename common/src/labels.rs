//! ラベルファイルのパース
//!
//! 1行1ラベル。先頭の数値インデックス（`0 Marine_Debris` 形式）は冗長なので除去し、
//! アンダースコアは空白に置き換える。

use serde::{Deserialize, Serialize};

/// モデル出力インデックス → ラベル名
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// ラベルファイルの内容をパース
    ///
    /// 全体をtrimしてから行に分割するので、行数Nに対してN個のラベルになる。
    ///
    /// # Examples
    /// ```
    /// use clean_sea_vision_common::LabelSet;
    ///
    /// let labels = LabelSet::parse("0 Marine_Debris\n1 Clean_Water\n");
    /// assert_eq!(labels.get(0), Some("Marine Debris"));
    /// assert_eq!(labels.get(1), Some("Clean Water"));
    /// ```
    pub fn parse(text: &str) -> Self {
        let labels = text.trim().lines().map(parse_label_line).collect();
        Self { labels }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// インデックスに対応するラベル。範囲外なら `Label {index}` を合成する
    pub fn label_for(&self, index: usize) -> String {
        self.get(index)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Label {}", index))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// 1行分をパース
///
/// 先頭トークンが整数で、かつ後続トークンがある場合のみ除去する。
/// 数字だけの行はそれ自体をラベルとして残す。
pub fn parse_label_line(line: &str) -> String {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let rest = match tokens.split_first() {
        Some((first, rest)) if !rest.is_empty() && first.parse::<i64>().is_ok() => rest,
        _ => &tokens[..],
    };

    rest.iter()
        .map(|t| t.replace('_', " "))
        .collect::<Vec<_>>()
        .join(" ")
}
