//! タブ切替のナビゲーション

use leptos::prelude::*;
use sentiment_common::Tab;

#[component]
pub fn FloatingNav<F>(active_tab: RwSignal<Tab>, on_select: F) -> impl IntoView
where
    F: Fn(Tab) + 'static + Clone,
{
    view! {
        <nav class="floating-nav">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class="floating-nav-link"
                            class:active=move || active_tab.get() == tab
                            data-tab=tab.key()
                            on:click=move |_| on_select(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
