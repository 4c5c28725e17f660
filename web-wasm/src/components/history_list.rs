//! 推論履歴リスト（新しい順）

use clean_sea_vision_common::PredictionResult;
use leptos::prelude::*;

#[component]
pub fn HistoryList(history: ReadSignal<Vec<PredictionResult>>) -> impl IntoView {
    view! {
        <section class="history">
            <h2>"History"</h2>
            <Show
                when=move || history.with(|h| !h.is_empty())
                fallback=|| view! { <p class="text-muted">"No predictions yet"</p> }
            >
                <ul class="history-list">
                    {move || history.get().into_iter().map(|entry| view! { <HistoryItem entry=entry /> }).collect_view()}
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn HistoryItem(entry: PredictionResult) -> impl IntoView {
    let has_thumbnail = !entry.thumbnail().is_empty();

    view! {
        <li class="history-item">
            {has_thumbnail.then(|| view! {
                <img class="history-thumb" src=entry.thumbnail().to_string() alt=entry.label().to_string() />
            })}
            <div class="history-info">
                <span class="history-label">{entry.label().to_string()}</span>
                <span class="history-confidence">{entry.confidence_percent()}</span>
                <span class="history-time text-muted">{entry.timestamp().to_string()}</span>
            </div>
        </li>
    }
}
