//! 履歴テーブル

use leptos::prelude::*;
use sentiment_common::history::HISTORY_COLUMNS;
use sentiment_common::{history_rows, HistoryEntry, EMPTY_HISTORY_MESSAGE};

#[component]
pub fn HistoryTable(history: RwSignal<Option<Vec<HistoryEntry>>>) -> impl IntoView {
    let rows = move || {
        let rows = history.with(|h| h.as_deref().map(history_rows).unwrap_or_default());
        if rows.is_empty() {
            return view! {
                <tr>
                    <td colspan=HISTORY_COLUMNS.to_string() class="text-center">
                        {EMPTY_HISTORY_MESSAGE}
                    </td>
                </tr>
            }
            .into_any();
        }

        rows.into_iter()
            .map(|row| {
                view! {
                    <tr>
                        <td>{row.text}</td>
                        <td>
                            <span class=format!("badge bg-{}", row.badge_color)>
                                {row.sentiment.as_str()}
                            </span>
                        </td>
                        <td>{row.confidence}</td>
                        <td>{row.timestamp}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-responsive">
            <table class="table table-hover">
                <thead>
                    <tr>
                        <th>"Text"</th>
                        <th>"Sentiment"</th>
                        <th>"Confidence"</th>
                        <th>"Time"</th>
                    </tr>
                </thead>
                <tbody id="historyTableBody">{rows}</tbody>
            </table>
        </div>
    }
}
