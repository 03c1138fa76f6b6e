//! ブラウザ上で動かすテスト（wasm-pack test --headless --firefox）

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::Executor;
use sentiment_common::{LiveSubscription, StatsSnapshot, Tab, Theme};
use sentiment_web::app::{watch_dashboard, AppState};
use sentiment_web::theme_store;
use sentiment_web::timer::BrowserScheduler;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep(ms: u32) {
    gloo::timers::future::TimeoutFuture::new(ms).await;
}

#[wasm_bindgen_test]
fn theme_persists_in_local_storage() {
    theme_store::save_theme(Theme::Dark);
    assert_eq!(theme_store::load_theme(), Theme::Dark);
    theme_store::save_theme(Theme::Light);
    assert_eq!(theme_store::load_theme(), Theme::Light);
}

#[wasm_bindgen_test]
fn theme_toggles_body_class() {
    theme_store::apply_theme(Theme::Dark);
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .expect("body");
    assert!(body.class_list().contains("dark-mode"));
    theme_store::apply_theme(Theme::Light);
    assert!(!body.class_list().contains("dark-mode"));
}

#[wasm_bindgen_test]
async fn live_analysis_fires_once_after_quiet_period() {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let mut live = LiveSubscription::new(BrowserScheduler, Duration::from_millis(50), move || {
        counter.set(counter.get() + 1);
    });
    live.subscribe();

    for _ in 0..3 {
        live.notify();
        sleep(10).await;
    }
    assert_eq!(count.get(), 0);

    sleep(120).await;
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
async fn dashboard_redraws_only_on_stats_or_theme() {
    let _ = Executor::init_wasm_bindgen();
    let owner = Owner::new();
    owner.set();

    let state = AppState::new();
    state.theme.set(Theme::Light);
    let draws: Rc<RefCell<Vec<(Theme, u64)>>> = Rc::default();
    let sink = Rc::clone(&draws);
    watch_dashboard(state, move |theme, stats: &StatsSnapshot| {
        sink.borrow_mut().push((theme, stats.total));
    });
    sleep(20).await;
    assert!(draws.borrow().is_empty());

    // タブを開いただけでは描かない
    state.active_tab.set(Tab::Dashboard);
    sleep(20).await;
    assert!(draws.borrow().is_empty());

    state.stats.set(Some(StatsSnapshot { total: 4, positive: 4, ..Default::default() }));
    sleep(20).await;
    assert_eq!(*draws.borrow(), vec![(Theme::Light, 4)]);

    state.theme.set(Theme::Dark);
    sleep(20).await;
    assert_eq!(draws.borrow().last(), Some(&(Theme::Dark, 4)));
    assert_eq!(draws.borrow().len(), 2);

    // 別のタブではテーマを変えても描かない
    state.active_tab.set(Tab::History);
    state.theme.set(Theme::Light);
    sleep(20).await;
    assert_eq!(draws.borrow().len(), 2);
}
