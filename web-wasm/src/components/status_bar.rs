//! モデル状態の表示

use clean_sea_vision_common::ModelStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBar(status: ReadSignal<ModelStatus>) -> impl IntoView {
    let status_class = move || {
        status.with(|s| match s {
            ModelStatus::Loading => "status loading",
            ModelStatus::Ready { .. } => "status ready",
            ModelStatus::Failed(_) => "status error",
        })
    };

    view! {
        <p class=status_class>
            {move || status.with(|s| s.message())}
        </p>
    }
}
