//! Thin wrappers over the browser APIs the hooks need.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use crate::error::SiteError;
use crate::pointer::Rect;
use crate::tracker::PageHost;

/// The live page as seen by the section tracker.
pub struct DomHost;

impl PageHost for DomHost {
    fn element_top(&self, id: &str) -> Option<f64> {
        let window = web_sys::window()?;
        let element = window.document()?.get_element_by_id(id)?;
        let scroll = window.scroll_y().unwrap_or(0.0);
        Some(element.get_bounding_client_rect().top() + scroll)
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Owns an `IntersectionObserver` and its callback. Dropping it disconnects
/// the observer, after which the callback is never invoked again.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_intersections<F>(
    targets: &[Element],
    threshold: f64,
    mut on_entries: F,
) -> Result<ObserverGuard, SiteError>
where
    F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .collect();
            on_entries(entries, &observer);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}

/// Schedules `f` for the next animation frame and returns the request id.
pub fn request_frame<F>(f: F) -> Result<i32, SiteError>
where
    F: FnOnce(f64) + 'static,
{
    let window = web_sys::window().ok_or_else(|| SiteError::Js("no window".to_string()))?;
    let callback = Closure::once_into_js(f);
    Ok(window.request_animation_frame(callback.unchecked_ref())?)
}

pub fn cancel_frame(id: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.cancel_animation_frame(id);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::tracker::{Section, SectionList, SectionTracker};
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(id: &str, style: &str) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let element = document.create_element("div").expect("create div");
        element.set_id(id);
        element.set_attribute("style", style).expect("set style");
        document
            .body()
            .expect("body available")
            .append_child(&element)
            .expect("append test element");
        element
    }

    #[wasm_bindgen_test]
    fn test_missing_anchor_has_no_top() {
        assert_eq!(DomHost.element_top("no-such-anchor"), None);
    }

    #[wasm_bindgen_test]
    fn test_anchor_tops_follow_layout() {
        let a = mount("dom-test-a", "height: 500px;");
        let b = mount("dom-test-b", "height: 50px;");
        let top_a = DomHost.element_top("dom-test-a").expect("a mounted");
        let top_b = DomHost.element_top("dom-test-b").expect("b mounted");
        assert!((top_b - top_a - 500.0).abs() < 1.0);
        a.remove();
        b.remove();
    }

    #[wasm_bindgen_test]
    fn test_element_rect_reads_bounding_box() {
        let el = mount(
            "dom-test-rect",
            "position: fixed; left: 10px; top: 20px; width: 100px; height: 40px;",
        );
        let rect = element_rect(&el);
        assert_eq!(rect, Rect::new(10.0, 20.0, 100.0, 40.0));
        el.remove();
    }

    #[wasm_bindgen_test]
    fn test_tracker_navigates_with_dom_host() {
        const SECTIONS: &[Section] = &[
            Section { id: "dom-nav-top", label: "Top" },
            Section { id: "dom-nav-contact", label: "Contact" },
            Section { id: "dom-nav-missing", label: "Missing" },
        ];
        let top = mount("dom-nav-top", "height: 300px;");
        let contact = mount("dom-nav-contact", "height: 300px;");

        let list = SectionList::new(SECTIONS).expect("valid sections");
        let mut tracker = SectionTracker::new(list, 0.4, 80.0);
        let expected = (DomHost.element_top("dom-nav-contact").unwrap() - 80.0).max(0.0);

        assert_eq!(tracker.navigate_to("dom-nav-contact", &DomHost), Some(expected));
        assert_eq!(tracker.active(), "dom-nav-contact");
        assert_eq!(tracker.navigate_to("dom-nav-missing", &DomHost), None);
        assert_eq!(tracker.active(), "dom-nav-contact");

        top.remove();
        contact.remove();
    }

    #[wasm_bindgen_test]
    fn test_observer_registers_requested_threshold() {
        let el = mount("dom-observe-threshold", "height: 40px;");
        let guard = observe_intersections(&[el.clone()], 0.4, |_, _| {}).expect("observer");
        let thresholds = guard.observer.thresholds();
        assert_eq!(thresholds.length(), 1);
        assert_eq!(thresholds.get(0).as_f64(), Some(0.4));
        drop(guard);
        el.remove();
    }

    #[wasm_bindgen_test]
    async fn test_dropped_observer_stops_reporting() {
        let el = mount("dom-observe-drop", "height: 40px;");
        let calls = Rc::new(Cell::new(0u32));
        let visible = Rc::new(Cell::new(false));
        let guard = {
            let calls = calls.clone();
            let visible = visible.clone();
            observe_intersections(&[el.clone()], 0.0, move |entries, _| {
                calls.set(calls.get() + 1);
                visible.set(entries.iter().any(|entry| entry.is_intersecting()));
            })
            .expect("observer")
        };

        TimeoutFuture::new(200).await;
        assert!(calls.get() >= 1);
        assert!(visible.get());

        let seen = calls.get();
        drop(guard);
        el.set_attribute("style", "display: none;").expect("hide element");
        TimeoutFuture::new(200).await;

        assert_eq!(calls.get(), seen);
        assert!(visible.get());
        el.remove();
    }

    #[wasm_bindgen_test]
    async fn test_cancelled_frame_never_runs() {
        let ran = Rc::new(Cell::new(false));
        let id = {
            let ran = ran.clone();
            request_frame(move |_| ran.set(true)).expect("frame scheduled")
        };
        cancel_frame(id);
        TimeoutFuture::new(100).await;
        assert!(!ran.get());
    }

    #[wasm_bindgen_test]
    async fn test_requested_frame_runs() {
        let ran = Rc::new(Cell::new(false));
        {
            let ran = ran.clone();
            request_frame(move |_| ran.set(true)).expect("frame scheduled");
        }
        TimeoutFuture::new(200).await;
        assert!(ran.get());
    }
}
