//! ダッシュボード（集計カウンターと図）

use leptos::prelude::*;
use sentiment_common::viz::{DISTRIBUTION_ID, TRENDS_ID};
use sentiment_common::{Sentiment, StatsSnapshot};

#[component]
pub fn Dashboard(stats: RwSignal<Option<StatsSnapshot>>) -> impl IntoView {
    let total = move || stats.with(|s| s.as_ref().map_or(0, |s| s.total));
    let count = move |sentiment: Sentiment| {
        move || stats.with(|s| s.as_ref().map_or(0, |s| s.count(sentiment)))
    };

    view! {
        <div class="dashboard">
            <div class="row text-center">
                <div class="col-md-3">
                    <div class="stat-card">
                        <h3 id="totalAnalyses">{total}</h3>
                        <p>"Total Analyses"</p>
                    </div>
                </div>
                <div class="col-md-3">
                    <div class="stat-card positive">
                        <h3 id="positiveCount">{count(Sentiment::Positive)}</h3>
                        <p>"Positive"</p>
                    </div>
                </div>
                <div class="col-md-3">
                    <div class="stat-card neutral">
                        <h3 id="neutralCount">{count(Sentiment::Neutral)}</h3>
                        <p>"Neutral"</p>
                    </div>
                </div>
                <div class="col-md-3">
                    <div class="stat-card negative">
                        <h3 id="negativeCount">{count(Sentiment::Negative)}</h3>
                        <p>"Negative"</p>
                    </div>
                </div>
            </div>

            <div class="row mt-4">
                <div class="col-md-6">
                    <div class="card">
                        <div class="card-header">"Sentiment Distribution"</div>
                        <div class="card-body"><div id=DISTRIBUTION_ID></div></div>
                    </div>
                </div>
                <div class="col-md-6">
                    <div class="card">
                        <div class="card-header">"7-Day Trend"</div>
                        <div class="card-body"><div id=TRENDS_ID></div></div>
                    </div>
                </div>
            </div>
        </div>
    }
}
