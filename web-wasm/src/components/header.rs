//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🌊 CleanSea Vision"</h1>
            <p class="text-muted">"Upload a photo of the sea to check for marine pollution"</p>
        </header>
    }
}
