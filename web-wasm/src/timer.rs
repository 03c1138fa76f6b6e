//! ブラウザの setTimeout によるスケジューラ

use std::time::Duration;

use gloo::timers::callback::Timeout;
use sentiment_common::Scheduler;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }

    fn cancel(&self, handle: Timeout) {
        // 発火済みのタイマーでも clearTimeout は無害
        let _ = handle.cancel();
    }
}
