use std::cell::RefCell;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;

thread_local! {
    static SEEN: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

#[allow(dead_code)]
pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Records a value observed during a render.
#[allow(dead_code)]
pub fn record(value: impl Into<String>) {
    SEEN.with(|seen| seen.borrow_mut().push(value.into()));
}

/// Runs the first render of `app` and returns everything it recorded.
#[allow(dead_code)]
pub fn render_once(app: fn() -> Element) -> Vec<String> {
    setup();
    SEEN.with(|seen| seen.borrow_mut().clear());
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    SEEN.with(|seen| seen.borrow().clone())
}

/// Runs the first render of `app`, then applies each update inside the
/// app's runtime followed by a render of whatever it marked dirty.
#[allow(dead_code)]
pub fn render_with_updates(app: fn() -> Element, updates: &[fn()]) -> Vec<String> {
    setup();
    SEEN.with(|seen| seen.borrow_mut().clear());
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    for update in updates {
        dom.in_runtime(*update);
        dom.render_immediate(&mut NoOpMutations);
    }
    SEEN.with(|seen| seen.borrow().clone())
}
