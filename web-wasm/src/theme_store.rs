//! テーマ設定の保存（localStorage）
//!
//! 値は `"dark"` / `"light"` の生文字列で保存する。

use sentiment_common::{Theme, THEME_STORAGE_KEY};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// 保存済みのテーマ。なければライト
pub fn load_theme() -> Theme {
    let stored = local_storage().and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub fn save_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage is unavailable; theme not saved");
        return;
    };
    if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("failed to save theme: {:?}", e);
    }
}

/// `<body>` の `dark-mode` クラスを切り替える
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force("dark-mode", theme.is_dark()) {
        log::warn!("failed to apply theme class: {:?}", e);
    }
}
