//! 解析中インジケーター

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(loading: RwSignal<bool>) -> impl IntoView {
    view! {
        <div id="loadingIndicator" class="text-center mt-3" class:d-none=move || !loading.get()>
            <div class="spinner-border" role="status">
                <span class="visually-hidden">"Analyzing..."</span>
            </div>
        </div>
    }
}
