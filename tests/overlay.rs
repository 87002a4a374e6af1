#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};
use yew::prelude::*;

use optgrad_frontend::config;
use optgrad_frontend::search::SearchOverlay;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone, Default)]
struct Calls {
    searches: Rc<RefCell<Vec<String>>>,
    closes: Rc<Cell<u32>>,
}

#[derive(Properties, Clone)]
struct HarnessProps {
    calls: Calls,
}

impl PartialEq for HarnessProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.calls.searches, &other.calls.searches)
    }
}

// Owns the open flag the way the hero section does, plus a button to reopen.
#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let open = use_state(|| true);
    let on_close = {
        let open = open.clone();
        let closes = props.calls.closes.clone();
        Callback::from(move |_: ()| {
            closes.set(closes.get() + 1);
            open.set(false);
        })
    };
    let on_search = {
        let searches = props.calls.searches.clone();
        Callback::from(move |query: String| searches.borrow_mut().push(query))
    };
    let reopen = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };

    html! {
        <>
            <button class="reopen" onclick={reopen}>{"open"}</button>
            <SearchOverlay is_open={*open} {on_close} {on_search} />
        </>
    }
}

async fn mount() -> (Element, Calls) {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let calls = Calls::default();
    yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { calls: calls.clone() }).render();
    settle(20).await;
    (root, calls)
}

async fn settle(millis: u32) {
    TimeoutFuture::new(millis).await;
}

fn find(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector).unwrap().map(|e| e.unchecked_into())
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

async fn click(root: &Element, selector: &str) {
    find(root, selector).unwrap_or_else(|| panic!("no {selector}")).click();
    settle(20).await;
}

async fn type_text(root: &Element, text: &str) {
    let input: HtmlInputElement = find(root, ".search-input").unwrap().unchecked_into();
    input.set_value(text);
    let init = EventInit::new();
    init.set_bubbles(true);
    input
        .dispatch_event(&Event::new_with_event_init_dict("input", &init).unwrap())
        .unwrap();
    settle(20).await;
}

async fn press_enter(root: &Element) {
    let input = find(root, ".search-input").unwrap();
    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    input.dispatch_event(&event).unwrap();
    settle(20).await;
}

#[wasm_bindgen_test]
async fn backdrop_and_close_button_never_search() {
    let (root, calls) = mount().await;

    click(&root, ".search-backdrop").await;
    assert_eq!(calls.closes.get(), 1);
    assert!(find(&root, ".search-overlay").is_none());

    click(&root, ".reopen").await;
    click(&root, ".search-close").await;
    assert_eq!(calls.closes.get(), 2);
    assert!(calls.searches.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn trending_click_searches_once_with_the_term() {
    let (root, calls) = mount().await;

    click(&root, ".trending-chip").await;
    assert_eq!(*calls.searches.borrow(), vec!["Machine Learning".to_string()]);
    assert_eq!(calls.closes.get(), 1);
}

#[wasm_bindgen_test]
async fn enter_submits_raw_text_even_without_matches() {
    let (root, calls) = mount().await;

    type_text(&root, "zzz").await;
    press_enter(&root).await;
    assert_eq!(*calls.searches.borrow(), vec!["zzz".to_string()]);
    assert_eq!(calls.closes.get(), 1);
}

#[wasm_bindgen_test]
async fn result_click_searches_with_the_title() {
    let (root, calls) = mount().await;

    type_text(&root, "data").await;
    assert_eq!(count(&root, ".search-spinner"), 1);
    settle(config::SEARCH_DEBOUNCE_MS + 100).await;
    assert_eq!(count(&root, ".search-result"), 1);

    click(&root, ".search-result").await;
    assert_eq!(*calls.searches.borrow(), vec!["Data Analysis with Python".to_string()]);
    assert_eq!(calls.closes.get(), 1);
}

#[wasm_bindgen_test]
async fn closing_before_the_debounce_leaves_the_next_session_empty() {
    let (root, calls) = mount().await;

    type_text(&root, "machine").await;
    click(&root, ".search-close").await;
    click(&root, ".reopen").await;
    settle(config::SEARCH_DEBOUNCE_MS + 100).await;

    let input: HtmlInputElement = find(&root, ".search-input").unwrap().unchecked_into();
    assert_eq!(input.value(), "");
    assert_eq!(count(&root, ".search-result"), 0);
    assert_eq!(count(&root, ".search-spinner"), 0);
    assert!(count(&root, ".trending-chip") > 0);
    assert!(calls.searches.borrow().is_empty());
    assert_eq!(calls.closes.get(), 1);
}
