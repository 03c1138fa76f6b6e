//! 解析結果の図の置き場所
//!
//! 中身は `render::render_visualizations` がPlotlyで描く。

use leptos::prelude::*;
use sentiment_common::viz::{EMOTION_PIE_ID, SENTIMENT_METER_ID, WORD_CLOUD_ID};

#[component]
pub fn VisualizationPanel() -> impl IntoView {
    view! {
        <div class="row mt-4 visualizations">
            <div class="col-md-6">
                <div class="card">
                    <div class="card-header">"Sentiment Meter"</div>
                    <div class="card-body"><div id=SENTIMENT_METER_ID></div></div>
                </div>
            </div>
            <div class="col-md-6">
                <div class="card">
                    <div class="card-header">"Emotion Distribution"</div>
                    <div class="card-body"><div id=EMOTION_PIE_ID></div></div>
                </div>
            </div>
            <div class="col-12 mt-3">
                <div class="card">
                    <div class="card-header">"Word Sentiment Cloud"</div>
                    <div class="card-body"><div id=WORD_CLOUD_ID></div></div>
                </div>
            </div>
        </div>
    }
}
