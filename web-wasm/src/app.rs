//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use sentiment_common::{
    analyze_text, load_history, load_stats, AnalysisResult, HistoryEntry, LiveSubscription,
    ResultView, StatsSnapshot, Tab, TabFetch, Theme, LIVE_ANALYSIS_DELAY,
};

use crate::api::FetchBackend;
use crate::components::{
    analyze_panel::AnalyzePanel,
    dashboard::Dashboard,
    header::Header,
    history_table::HistoryTable,
    loading_indicator::LoadingIndicator,
    nav::FloatingNav,
    result_card::ResultCard,
    visualizations::VisualizationPanel,
};
use crate::render;
use crate::theme_store;
use crate::timer::BrowserScheduler;

/// アプリケーションの状態
///
/// 現在の解析結果は `current` だけが持ち、描画側へは引数で渡す。
#[derive(Clone, Copy)]
pub struct AppState {
    pub theme: RwSignal<Theme>,
    pub text: RwSignal<String>,
    pub current: RwSignal<Option<AnalysisResult>>,
    /// `None` なら結果欄は非表示
    pub result: RwSignal<Option<ResultView>>,
    pub loading: RwSignal<bool>,
    pub active_tab: RwSignal<Tab>,
    pub stats: RwSignal<Option<StatsSnapshot>>,
    pub history: RwSignal<Option<Vec<HistoryEntry>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(theme_store::load_theme()),
            text: RwSignal::new(String::new()),
            current: RwSignal::new(None),
            result: RwSignal::new(None),
            loading: RwSignal::new(false),
            active_tab: RwSignal::new(Tab::default()),
            stats: RwSignal::new(None),
            history: RwSignal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// 入力中のテキストを解析する
///
/// 実行中の解析は取り消さない。後から終わった応答が表示に残る。
fn run_analysis(state: AppState) {
    let text = state.text.get_untracked();
    spawn_local(async move {
        let outcome = analyze_text(&FetchBackend, &text, |loading| {
            state.loading.set(loading);
            if loading {
                state.result.set(None);
            }
        })
        .await;

        state.result.set(Some(outcome.view));
        state.current.set(outcome.current);
    });
}

/// タブを開き、必要なら統計・履歴を取りに行く
fn activate_tab(state: AppState, tab: Tab) {
    state.active_tab.set(tab);

    match tab.fetch_on_activate() {
        Some(TabFetch::Stats) => spawn_local(async move {
            if let Some(stats) = load_stats(&FetchBackend).await {
                state.stats.set(Some(stats));
            }
        }),
        Some(TabFetch::History) => spawn_local(async move {
            if let Some(history) = load_history(&FetchBackend).await {
                state.history.set(Some(history));
            }
        }),
        None => {}
    }
}

/// ダッシュボードの図を描き直す
///
/// 統計が届いた時とテーマ切替の時だけ描く。タブを開いただけでは描かず、
/// 取得に失敗したら前の図を残す。
pub fn watch_dashboard<D>(state: AppState, draw: D)
where
    D: Fn(Theme, &StatsSnapshot) + 'static,
{
    Effect::new(move |_| {
        let theme = state.theme.get();
        state.stats.track();
        if state.active_tab.get_untracked() != Tab::Dashboard {
            return;
        }
        state.stats.with_untracked(|stats| match stats {
            Some(stats) => draw(theme, stats),
            None => draw(theme, &StatsSnapshot::default()),
        });
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    // ライブ解析の購読（チェックボックスで付け外し）
    let live = StoredValue::new_local(LiveSubscription::new(
        BrowserScheduler,
        LIVE_ANALYSIS_DELAY,
        move || run_analysis(state),
    ));

    // テーマ: bodyクラスの反映
    Effect::new(move |_| {
        theme_store::apply_theme(state.theme.get());
    });

    // 解析画面の図: 初回は空の状態、以降は結果かテーマが変わるたびに描き直す
    Effect::new(move |_| {
        let theme = state.theme.get();
        state
            .current
            .with(|current| render::render_visualizations(theme, current.as_ref()));
    });

    watch_dashboard(state, render::render_dashboard);

    activate_tab(state, state.active_tab.get_untracked());

    let on_toggle_theme = move |dark: bool| {
        let theme = if dark { Theme::Dark } else { Theme::Light };
        state.theme.set(theme);
        theme_store::save_theme(theme);
    };

    let on_select_tab = move |tab: Tab| activate_tab(state, tab);

    let on_analyze = move |_| run_analysis(state);

    let on_clear = move |_| {
        live.with_value(|l| l.cancel_pending());
        state.text.set(String::new());
        state.result.set(None);
        state.current.set(None);
    };

    let on_input = move |value: String| {
        state.text.set(value);
        live.with_value(|l| {
            l.notify();
        });
    };

    let on_live_toggle = move |enabled: bool| {
        live.update_value(|l| l.set_enabled(enabled));
        log::debug!("live analysis {}", if enabled { "enabled" } else { "disabled" });
    };

    view! {
        <div class="container">
            <Header theme=state.theme on_toggle_theme=on_toggle_theme />

            <FloatingNav active_tab=state.active_tab on_select=on_select_tab />

            <div
                id=Tab::Analyze.pane_id()
                class="content-tab"
                class:active=move || state.active_tab.get() == Tab::Analyze
            >
                <AnalyzePanel
                    text=state.text
                    on_input=on_input
                    on_analyze=on_analyze
                    on_clear=on_clear
                    on_live_toggle=on_live_toggle
                />
                <LoadingIndicator loading=state.loading />
                <ResultCard result=state.result />
                <VisualizationPanel />
            </div>

            <div
                id=Tab::Dashboard.pane_id()
                class="content-tab"
                class:active=move || state.active_tab.get() == Tab::Dashboard
            >
                <Dashboard stats=state.stats />
            </div>

            <div
                id=Tab::History.pane_id()
                class="content-tab"
                class:active=move || state.active_tab.get() == Tab::History
            >
                <HistoryTable history=state.history />
            </div>
        </div>
    }
}
