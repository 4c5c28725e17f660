//! 信頼度ゲージ
//!
//! 段階（high / medium / low）で色を変える。

use clean_sea_vision_common::{gauge_percent, ConfidenceLevel};
use leptos::prelude::*;

#[component]
pub fn ConfidenceGauge(score: f32) -> impl IntoView {
    let level = ConfidenceLevel::from_score(score);

    view! {
        <div class="gauge">
            <div
                class=format!("gauge-fill {}", level.as_str())
                style=format!("width: {:.0}%", gauge_percent(score))
            />
        </div>
    }
}
