//! 解析結果の表示欄

use leptos::prelude::*;
use sentiment_common::{ResultSummary, ResultView};

#[component]
pub fn ResultCard(result: RwSignal<Option<ResultView>>) -> impl IntoView {
    let class = move || match result.get() {
        Some(view) => view.css_class(),
        None => "sentiment-result mt-3 d-none".to_string(),
    };

    view! {
        <div id="result" class=class>
            {move || result.get().map(|view| match view {
                ResultView::Advisory(message) => message.into_any(),
                ResultView::Summary(summary) => view! { <Summary summary=summary /> }.into_any(),
            })}
        </div>
    }
}

#[component]
fn Summary(summary: ResultSummary) -> impl IntoView {
    let confidence = summary.confidence.clone();

    view! {
        <div class="d-flex align-items-center mb-2">
            <span class="sentiment-emoji">{summary.emoji}</span>
            <strong class="ms-2">"Sentiment:"</strong>
            " "
            {summary.label}
        </div>
        <div class="progress mb-2" style="height: 10px;">
            <div
                class=format!("progress-bar bg-{}", summary.bar_color)
                role="progressbar"
                style=format!("width: {}", summary.bar_width())
                aria-valuenow=confidence.clone()
                aria-valuemin="0"
                aria-valuemax="100"
            ></div>
        </div>
        <strong>"Confidence:"</strong>
        " "
        {format!("{}%", confidence)}
    }
}
