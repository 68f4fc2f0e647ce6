//! Timer hooks. Timers live inside effects and are cancelled when the
//! effect is torn down, because dropping a `gloo_timers` handle clears it.
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Invoke `callback` every `period_ms` while the component is mounted.
///
/// The latest `callback` is always used; changing `period_ms` restarts the
/// timer.
#[hook]
pub fn use_interval(callback: Callback<()>, period_ms: u32) {
    let latest: Rc<RefCell<Callback<()>>> = use_mut_ref(|| callback.clone());
    *latest.borrow_mut() = callback;

    use_effect_with(period_ms, move |&period| {
        #[cfg(target_arch = "wasm32")]
        let interval = gloo_timers::callback::Interval::new(period, move || {
            let cb = latest.borrow().clone();
            cb.emit(());
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (period, latest);
        move || {
            #[cfg(target_arch = "wasm32")]
            drop(interval);
        }
    });
}

/// Invoke `callback` once, `delay_ms` after mount.
#[hook]
pub fn use_timeout(callback: Callback<()>, delay_ms: u32) {
    let latest: Rc<RefCell<Callback<()>>> = use_mut_ref(|| callback.clone());
    *latest.borrow_mut() = callback;

    use_effect_with(delay_ms, move |&delay| {
        #[cfg(target_arch = "wasm32")]
        let timeout = gloo_timers::callback::Timeout::new(delay, move || {
            let cb = latest.borrow().clone();
            cb.emit(());
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (delay, latest);
        move || {
            #[cfg(target_arch = "wasm32")]
            drop(timeout);
        }
    });
}
