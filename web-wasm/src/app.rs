//! メインアプリケーションコンポーネント

use crate::components::{
    action_buttons::ActionButtons, header::Header, history_list::HistoryList,
    result_panel::ResultPanel, status_bar::StatusBar, upload_area::UploadArea,
};
use crate::loader;
use crate::local_store::LocalStore;
use clean_sea_vision_common::{HistoryStore, ModelStatus, OnnxClassifier, Pipeline, Prediction};
use gloo::timers::future::TimeoutFuture;
use image::DynamicImage;
use leptos::prelude::*;
use leptos::task::spawn_local;

type WebPipeline = Pipeline<OnnxClassifier, LocalStore>;

/// 選択中の画像
#[derive(Clone)]
pub struct SelectedImage {
    pub file_name: String,
    pub preview_url: String,
    pub image: DynamicImage,
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let pipeline = StoredValue::new_local(WebPipeline::new(HistoryStore::new(LocalStore)));

    let (status, set_status) = signal(ModelStatus::Loading);
    let (selected, set_selected) = signal(None::<SelectedImage>);
    let (prediction, set_prediction) = signal(None::<Prediction>);
    let (message, set_message) = signal(None::<String>);
    let (is_predicting, set_is_predicting) = signal(false);
    let (history, set_history) = signal(pipeline.with_value(|p| p.history().load()));

    // 起動時に一度だけモデルを読み込む
    spawn_local(async move {
        let loaded = loader::load().await;
        if let Err(e) = &loaded {
            gloo::console::error!(e.to_string());
        }
        pipeline.update_value(|p| {
            p.apply_load(loaded);
        });
        set_status.set(pipeline.with_value(|p| p.status().clone()));
    });

    let is_ready = Signal::derive(move || status.with(|s| s.is_ready()));
    let can_predict = Signal::derive(move || is_ready.get() && selected.with(|s| s.is_some()));
    let has_history = Signal::derive(move || history.with(|h| !h.is_empty()));

    // 画像選択ハンドラ
    let on_image = move |result: Result<SelectedImage, String>| match result {
        Ok(image) => {
            gloo::console::log!(format!("selected {}", image.file_name));
            if let Some(old) = selected.get_untracked() {
                let _ = web_sys::Url::revoke_object_url(&old.preview_url);
            }
            set_selected.set(Some(image));
            set_prediction.set(None);
            set_message.set(None);
        }
        Err(e) => {
            gloo::console::error!(e.clone());
            set_message.set(Some(e));
        }
    };

    // 推論ハンドラ
    let on_predict = move |_| {
        if is_predicting.get_untracked() {
            return;
        }
        set_is_predicting.set(true);
        set_message.set(None);

        spawn_local(async move {
            // ボタン表示を先に更新させる
            TimeoutFuture::new(0).await;

            let outcome = selected.with_untracked(|s| {
                pipeline.with_value(|p| p.predict(s.as_ref().map(|s| &s.image)))
            });

            match outcome {
                Ok(result) => {
                    if let Some(e) = &result.history_error {
                        gloo::console::warn!(e.to_string());
                        set_message.set(Some(format!("History was not saved: {}", e)));
                    }
                    set_history.set(pipeline.with_value(|p| p.history().load()));
                    set_prediction.set(Some(result));
                }
                Err(e) => {
                    gloo::console::error!(e.to_string());
                    set_message.set(Some(e.to_string()));
                }
            }

            set_is_predicting.set(false);
        });
    };

    // 画像と結果をクリア
    let on_clear = move |_| {
        if let Some(old) = selected.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&old.preview_url);
        }
        set_selected.set(None);
        set_prediction.set(None);
        set_message.set(None);
    };

    // 履歴を削除
    let on_clear_history = move |_| {
        if !confirm("Clear prediction history?") {
            return;
        }
        if let Err(e) = pipeline.with_value(|p| p.history().clear()) {
            gloo::console::warn!(e.to_string());
            set_message.set(Some(e.to_string()));
        }
        // 削除に失敗した場合は残っている履歴をそのまま表示する
        set_history.set(pipeline.with_value(|p| p.history().load()));
    };

    view! {
        <div class="container">
            <Header />

            <StatusBar status=status />

            <UploadArea enabled=is_ready on_image=on_image />

            <Show when=move || selected.with(|s| s.is_some())>
                <img
                    class="preview"
                    src=move || selected.with(|s| s.as_ref().map(|s| s.preview_url.clone()).unwrap_or_default())
                    alt=move || selected.with(|s| s.as_ref().map(|s| s.file_name.clone()).unwrap_or_default())
                />
            </Show>

            <ActionButtons
                can_predict=can_predict
                is_predicting=is_predicting
                has_history=has_history
                on_predict=on_predict
                on_clear=on_clear
                on_clear_history=on_clear_history
            />

            <Show when=move || message.with(|m| m.is_some())>
                <p class="message">{move || message.get().unwrap_or_default()}</p>
            </Show>

            <ResultPanel prediction=prediction />

            <HistoryList history=history />
        </div>
    }
}

/// 確認ダイアログ。ウィンドウが取れなければ実行しない
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
