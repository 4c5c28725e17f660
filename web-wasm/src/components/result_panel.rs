//! 推論結果の表示

use super::confidence_gauge::ConfidenceGauge;
use clean_sea_vision_common::Prediction;
use leptos::prelude::*;

#[component]
pub fn ResultPanel(prediction: ReadSignal<Option<Prediction>>) -> impl IntoView {
    view! {
        {move || prediction.get().map(|p| {
            view! {
                <div class="result-panel">
                    <p class="result">{format!("Prediction: {}", p.result.label())}</p>
                    <p class="confidence">{format!("Confidence: {}", p.result.confidence_percent())}</p>
                    <ConfidenceGauge score=p.result.confidence_score() />
                    <p class="eco-tip">{p.tip}</p>
                </div>
            }
        })}
    }
}
