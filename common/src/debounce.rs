//! デバウンスとライブ解析の購読
//!
//! タイマーそのものは `Scheduler` に任せる。ブラウザでは `setTimeout`、
//! テストでは手動で時計を進めるスケジューラを使う。

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// ライブ解析の静止待ち時間
pub const LIVE_ANALYSIS_DELAY: Duration = Duration::from_millis(1000);

/// 遅延実行の仕組み
pub trait Scheduler {
    type Handle;

    /// `delay` 後に `task` を1回実行する。呼び出し中に同期実行してはならない
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// 未実行なら取り消す。実行済みのハンドルを渡しても何も起きない
    fn cancel(&self, handle: Self::Handle);
}

/// 連続した呼び出しを最後の1回にまとめる
///
/// 保留中の実行は常に高々1つ。`call` のたびに前の予約を取り消して
/// 予約し直すので、最後の引数だけが `action` に渡る。
pub struct Debouncer<S: Scheduler, A = ()> {
    scheduler: S,
    delay: Duration,
    action: Rc<dyn Fn(A)>,
    pending: RefCell<Option<S::Handle>>,
    armed: Rc<Cell<bool>>,
}

impl<S: Scheduler, A: 'static> Debouncer<S, A> {
    pub fn new(scheduler: S, delay: Duration, action: impl Fn(A) + 'static) -> Self {
        Self {
            scheduler,
            delay,
            action: Rc::new(action),
            pending: RefCell::new(None),
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn call(&self, arg: A) {
        self.cancel();

        let action = Rc::clone(&self.action);
        let armed = Rc::clone(&self.armed);
        armed.set(true);

        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                armed.set(false);
                action(arg);
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }
}

impl<S: Scheduler, A> Debouncer<S, A> {
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            self.scheduler.cancel(handle);
        }
        self.armed.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<S: Scheduler, A> Drop for Debouncer<S, A> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// 入力イベントへのライブ解析の購読
///
/// 購読中だけデバウンサーを持つ。解除するとデバウンサーごと捨て、
/// 保留中の解析も取り消される。
pub struct LiveSubscription<S: Scheduler + Clone> {
    scheduler: S,
    delay: Duration,
    action: Rc<dyn Fn()>,
    trigger: Option<Debouncer<S, ()>>,
}

impl<S: Scheduler + Clone> LiveSubscription<S> {
    pub fn new(scheduler: S, delay: Duration, action: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            delay,
            action: Rc::new(action),
            trigger: None,
        }
    }

    /// 既に購読中なら何もしない
    pub fn subscribe(&mut self) {
        if self.trigger.is_some() {
            return;
        }
        let action = Rc::clone(&self.action);
        self.trigger = Some(Debouncer::new(
            self.scheduler.clone(),
            self.delay,
            move |()| action(),
        ));
    }

    pub fn unsubscribe(&mut self) {
        self.trigger = None;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.subscribe();
        } else {
            self.unsubscribe();
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.trigger.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.trigger.as_ref().is_some_and(|t| t.is_pending())
    }

    /// 購読は続けたまま、保留中の解析だけ取り消す
    pub fn cancel_pending(&self) {
        if let Some(trigger) = &self.trigger {
            trigger.cancel();
        }
    }

    /// 入力イベント。購読中でなければ無視して `false` を返す
    pub fn notify(&self) -> bool {
        match &self.trigger {
            Some(trigger) => {
                trigger.call(());
                true
            }
            None => false,
        }
    }
}
