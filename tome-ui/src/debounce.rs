//! Debounced dispatch for instant search
//!
//! An explicit timer instead of an rx-style stream: every keystroke re-arms
//! a cancellable task, so within one window the handler fires at most once,
//! with the last value pushed. The pending task is cancelled on unmount.

use dioxus::core::Task;
use dioxus::prelude::*;

/// Debounce window for instant search (in milliseconds)
pub const INSTANT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Handle created by [`use_debounce`].
#[derive(Clone, Copy, PartialEq)]
pub struct DebounceHandle {
    latest: Signal<String>,
    pending: Signal<Option<Task>>,
    on_settle: EventHandler<String>,
}

impl DebounceHandle {
    /// Push the latest value and re-arm the timer.
    pub fn update(&self, value: String) {
        let mut latest = self.latest;
        let mut pending = self.pending;
        let on_settle = self.on_settle;

        latest.set(value);
        if let Some(task) = pending.take() {
            task.cancel();
        }
        let task = spawn(async move {
            sleep_ms(INSTANT_SEARCH_DEBOUNCE_MS).await;
            let value = latest.peek().clone();
            tracing::debug!(term = %value, "instant search settled");
            on_settle.call(value);
        });
        pending.set(Some(task));
    }

    /// Cancel the pending dispatch, if any, without firing the handler.
    pub fn cancel(&self) {
        let mut pending = self.pending;
        if let Some(task) = pending.take() {
            task.cancel();
        }
    }
}

/// Hook that creates a [`DebounceHandle`] dispatching into `on_settle`.
///
/// The pending task is cancelled when the owning component unmounts, so no
/// dispatch can outlive the scope that asked for it.
pub fn use_debounce(on_settle: EventHandler<String>) -> DebounceHandle {
    let latest = use_signal(String::new);
    let pending = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Some(task) = pending.peek().as_ref() {
            task.cancel();
        }
    });

    DebounceHandle {
        latest,
        pending,
        on_settle,
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_core::NoOpMutations;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    static DISPATCHES: AtomicUsize = AtomicUsize::new(0);
    static LAST_TERM: Mutex<Option<String>> = Mutex::new(None);

    // Pushes three values in quick succession from inside the runtime, the
    // way keystrokes would arrive well within one debounce window.
    fn harness() -> Element {
        let debounce = use_debounce(EventHandler::new(|term: String| {
            DISPATCHES.fetch_add(1, Ordering::SeqCst);
            *LAST_TERM.lock().unwrap() = Some(term);
        }));

        use_hook(move || {
            spawn(async move {
                debounce.update("j".to_string());
                debounce.update("java".to_string());
                debounce.update("javascript".to_string());
            });
        });

        rsx! { div {} }
    }

    // Drive the scheduler until the deadline; the dom has no more work once
    // the debounce settles, so the timeout is what ends the loop.
    async fn drive(dom: &mut VirtualDom, for_ms: u64) {
        let _ = tokio::time::timeout(Duration::from_millis(for_ms), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;
    }

    #[tokio::test]
    async fn test_rapid_updates_dispatch_once_with_last_value() {
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        drive(&mut dom, INSTANT_SEARCH_DEBOUNCE_MS + 400).await;

        assert_eq!(DISPATCHES.load(Ordering::SeqCst), 1);
        assert_eq!(LAST_TERM.lock().unwrap().as_deref(), Some("javascript"));
    }
}
