#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use optgrad_frontend::search::DebounceSlot;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn only_the_last_scheduled_callback_fires() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let mut slot = DebounceSlot::default();

    for query in ["rea", "reac", "react"] {
        let fired = fired.clone();
        slot.schedule(30, move || fired.borrow_mut().push(query));
    }

    TimeoutFuture::new(80).await;
    assert_eq!(*fired.borrow(), vec!["react"]);
}

#[wasm_bindgen_test]
async fn cancel_prevents_the_callback() {
    let fired = Rc::new(RefCell::new(false));
    let mut slot = DebounceSlot::default();
    {
        let fired = fired.clone();
        slot.schedule(20, move || *fired.borrow_mut() = true);
    }
    slot.cancel();

    TimeoutFuture::new(60).await;
    assert!(!*fired.borrow());
}

#[wasm_bindgen_test]
async fn dropping_the_slot_cancels() {
    let fired = Rc::new(RefCell::new(false));
    {
        let mut slot = DebounceSlot::default();
        let fired = fired.clone();
        slot.schedule(20, move || *fired.borrow_mut() = true);
    }

    TimeoutFuture::new(60).await;
    assert!(!*fired.borrow());
}
