use gloo::events::EventListener;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

pub const VIEWPORT_MARGIN: &str = "-100px";
const VISIBLE_THRESHOLD: f64 = 0.1;

struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    node: &NodeRef,
    root_margin: &str,
    on_visible: Callback<()>,
) -> Option<ObserverGuard> {
    let element = node.cast::<Element>()?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            if intersecting {
                observer.disconnect();
                on_visible.emit(());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok()?;
    observer.observe(&element);

    Some(ObserverGuard {
        observer,
        _callback: callback,
    })
}

/// Becomes `true` the first time `node` scrolls into view and stays `true`.
#[hook]
pub fn use_in_view_once(node: &NodeRef, root_margin: &'static str) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        let node = node.clone();
        use_effect_with((), move |_| {
            let guard = observe_once(
                &node,
                root_margin,
                Callback::from(move |_| in_view.set(true)),
            );
            move || drop(guard)
        });
    }

    *in_view
}

#[hook]
pub fn use_window_event<F>(event_type: &'static str, handler: F)
where
    F: Fn(&Event) + 'static,
{
    use_effect_with((), move |_| {
        let listener = window().map(|win| EventListener::new(&win, event_type, handler));
        move || drop(listener)
    });
}
