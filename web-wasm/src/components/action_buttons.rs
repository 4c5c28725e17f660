//! 推論・クリア・履歴削除ボタン

use leptos::prelude::*;

#[component]
pub fn ActionButtons<FP, FC, FH>(
    can_predict: Signal<bool>,
    is_predicting: ReadSignal<bool>,
    has_history: Signal<bool>,
    on_predict: FP,
    on_clear: FC,
    on_clear_history: FH,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
    FH: Fn(()) + 'static + Clone,
{
    view! {
        <div class="action-buttons">
            <button
                class="btn btn-primary"
                disabled=move || !can_predict.get() || is_predicting.get()
                on:click={
                    let on_predict = on_predict.clone();
                    move |_| on_predict(())
                }
            >
                {move || if is_predicting.get() { "Predicting..." } else { "Predict" }}
            </button>

            <button
                class="btn btn-secondary"
                disabled=move || is_predicting.get()
                on:click={
                    let on_clear = on_clear.clone();
                    move |_| on_clear(())
                }
            >
                "Clear"
            </button>

            <button
                class="btn btn-tertiary"
                disabled=move || !has_history.get()
                on:click={
                    let on_clear_history = on_clear_history.clone();
                    move |_| on_clear_history(())
                }
            >
                "Clear History"
            </button>
        </div>
    }
}
