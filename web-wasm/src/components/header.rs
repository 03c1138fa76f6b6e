//! ヘッダーコンポーネント（タイトルとテーマ切替）

use leptos::prelude::*;
use sentiment_common::Theme;

#[component]
pub fn Header<F>(theme: RwSignal<Theme>, on_toggle_theme: F) -> impl IntoView
where
    F: Fn(bool) + 'static + Clone,
{
    view! {
        <header class="header d-flex justify-content-between align-items-center">
            <h1>"Sentiment Analysis"</h1>
            <div class="theme-switch-wrapper">
                <label class="theme-switch" for="checkbox">
                    <input
                        type="checkbox"
                        id="checkbox"
                        prop:checked=move || theme.get().is_dark()
                        on:change=move |ev| on_toggle_theme(event_target_checked(&ev))
                    />
                    <div class="slider round"></div>
                </label>
                <span class="ms-2">"Dark mode"</span>
            </div>
        </header>
    }
}
