//! 入力欄と操作ボタン

use leptos::prelude::*;

#[component]
pub fn AnalyzePanel<FI, FA, FC, FL>(
    text: RwSignal<String>,
    on_input: FI,
    on_analyze: FA,
    on_clear: FC,
    on_live_toggle: FL,
) -> impl IntoView
where
    FI: Fn(String) + 'static + Clone,
    FA: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
    FL: Fn(bool) + 'static + Clone,
{
    view! {
        <div class="analyze-panel">
            <div class="form-group mb-3">
                <label for="textInput">"Text to analyze"</label>
                <textarea
                    id="textInput"
                    class="form-control"
                    rows="5"
                    placeholder="Type or paste some text..."
                    prop:value=move || text.get()
                    on:input=move |ev| on_input(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="d-flex align-items-center gap-2">
                <button
                    id="analyzeBtn"
                    class="btn btn-primary"
                    on:click={
                        let on_analyze = on_analyze.clone();
                        move |_| on_analyze(())
                    }
                >
                    "Analyze"
                </button>

                <button
                    id="clearBtn"
                    class="btn btn-secondary"
                    on:click={
                        let on_clear = on_clear.clone();
                        move |_| on_clear(())
                    }
                >
                    "Clear"
                </button>

                <div class="form-check form-switch ms-3">
                    <input
                        type="checkbox"
                        id="enableLiveAnalysis"
                        class="form-check-input"
                        on:change=move |ev| on_live_toggle(event_target_checked(&ev))
                    />
                    <label class="form-check-label" for="enableLiveAnalysis">
                        "Live analysis"
                    </label>
                </div>
            </div>
        </div>
    }
}
