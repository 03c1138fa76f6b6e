//! 通信中のスピナー

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(80);

/// 通信中だけ回るスピナー。drop で必ず消える
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// 止まった状態で作る
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        Self { bar }
    }

    pub fn set_active(&self, active: bool) {
        if active {
            self.bar.enable_steady_tick(TICK);
        } else {
            self.bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
