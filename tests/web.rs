//! Browser-only checks for the gloo-backed scheduler.
//! Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use cassidy_image_downloader::schedule::{BrowserScheduler, Cancel, Scheduler};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_scheduled_task_runs_after_delay() {
    let ran = Rc::new(Cell::new(false));

    let r = ran.clone();
    let _handle = BrowserScheduler.schedule(10, move || r.set(true));
    assert!(!ran.get());

    TimeoutFuture::new(50).await;
    assert!(ran.get());
}

#[wasm_bindgen_test]
async fn test_cancelled_task_does_not_run() {
    let ran = Rc::new(Cell::new(false));

    let r = ran.clone();
    let handle = BrowserScheduler.schedule(10, move || r.set(true));
    handle.cancel();

    TimeoutFuture::new(50).await;
    assert!(!ran.get());
}

#[wasm_bindgen_test]
async fn test_dropped_handle_does_not_run() {
    let ran = Rc::new(Cell::new(false));

    let r = ran.clone();
    drop(BrowserScheduler.schedule(10, move || r.set(true)));

    TimeoutFuture::new(50).await;
    assert!(!ran.get());
}
