//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択、またはドラッグ&ドロップ。1枚だけ受け付ける。

use crate::app::SelectedImage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, File, HtmlInputElement, Url};

#[component]
pub fn UploadArea<F>(enabled: Signal<bool>, on_image: F) -> impl IntoView
where
    F: Fn(Result<SelectedImage, String>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_file = move |file: File| {
        let on_image = on_image.clone();
        spawn_local(async move {
            on_image(read_image(file).await);
        });
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if !enabled.get_untracked() {
                return;
            }

            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                handle_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if enabled.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if !enabled.get_untracked() {
            return;
        }
        // 非表示のinputでファイル選択ダイアログを開く
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <div class="upload">
            <div
                class=move || {
                    let mut classes = vec!["upload-area"];
                    if is_dragover.get() {
                        classes.push("dragover");
                    }
                    if !enabled.get() {
                        classes.push("disabled");
                    }
                    classes.join(" ")
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <Show
                    when=move || enabled.get()
                    fallback=|| view! {
                        <div class="upload-icon">"⏳"</div>
                        <p>"Waiting for the model..."</p>
                    }
                >
                    <div class="upload-icon">"📷"</div>
                    <p>"Drag & drop a photo here, or click to choose"</p>
                    <p class="text-muted">"JPEG, PNG, WebP, GIF, BMP"</p>
                </Show>
            </div>
            <input
                type="file"
                accept="image/*"
                style="display: none"
                node_ref=input_ref
                on:change=on_change
            />
        </div>
    }
}

/// ファイルを読み込んでデコード
async fn read_image(file: File) -> Result<SelectedImage, String> {
    let file_name = file.name();
    let preview_url = Url::create_object_url_with_blob(&file)
        .map_err(|e| format!("{}: {:?}", file_name, e))?;

    let file = gloo::file::File::from(file);
    let decoded = match gloo::file::futures::read_as_bytes(&file).await {
        Ok(bytes) => image::load_from_memory(&bytes).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match decoded {
        Ok(image) => Ok(SelectedImage {
            file_name,
            preview_url,
            image,
        }),
        Err(e) => {
            let _ = Url::revoke_object_url(&preview_url);
            Err(format!("{}: {}", file_name, e))
        }
    }
}
