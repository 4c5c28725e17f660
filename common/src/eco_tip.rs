//! エコTipテーブル
//!
//! ラベル（小文字化）→ アドバイス文。未登録ラベルはデフォルトTip。

/// 未登録ラベル用
pub const DEFAULT_TIP: &str = "🌍 Be kind to our oceans!";

const BUILTIN_TIPS: &[(&str, &str)] = &[
    ("marine debris", "⚠ Tip: Organize beach clean-ups and reduce plastic use."),
    ("clean water", "💧 Tip: Keep it clean! Avoid dumping or littering near water sources."),
    ("oil spill", "🛢 Tip: Report oil spills immediately and support cleanup initiatives."),
];

static BUILTIN: EcoTipTable = EcoTipTable {
    entries: BUILTIN_TIPS,
    default_tip: DEFAULT_TIP,
};

/// 読み取り専用のTipテーブル
#[derive(Debug, Clone, Copy)]
pub struct EcoTipTable {
    entries: &'static [(&'static str, &'static str)],
    default_tip: &'static str,
}

impl EcoTipTable {
    /// 組み込みテーブル（プロセス全体で共有）
    pub fn builtin() -> &'static EcoTipTable {
        &BUILTIN
    }

    /// ラベルに対応するTip。大文字小文字は区別しない
    pub fn tip_for(&self, label: &str) -> &'static str {
        let key = label.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, tip)| *tip)
            .unwrap_or(self.default_tip)
    }

    pub fn default_tip(&self) -> &'static str {
        self.default_tip
    }
}

/// 組み込みテーブルで引く
pub fn eco_tip(label: &str) -> &'static str {
    EcoTipTable::builtin().tip_for(label)
}
