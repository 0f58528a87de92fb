use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Browsers round intersection ratios to device pixels, so the report for a
// crossing can land just under the registered threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-shot entry detection for a single element.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedElement {
    threshold: f64,
    has_entered: bool,
}

impl TrackedElement {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) };
        TrackedElement { threshold, has_entered: false }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn has_entered(&self) -> bool {
        self.has_entered
    }

    /// Feeds one intersection report. Returns true only for the report that
    /// first reaches the threshold.
    pub fn report(&mut self, visible_fraction: f64, is_intersecting: bool) -> bool {
        if self.has_entered || !is_intersecting || visible_fraction + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.has_entered = true;
        true
    }
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Registration with the browser's IntersectionObserver. Dropping it unobserves.
pub struct Subscription {
    inner: Option<(IntersectionObserver, EntryCallback)>,
}

impl Subscription {
    fn inert() -> Self {
        Subscription { inner: None }
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    pub fn unobserve(&mut self) {
        if let Some((observer, _callback)) = self.inner.take() {
            observer.disconnect();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unobserve();
    }
}

/// Calls `on_enter` once, when at least `threshold` of `element` is visible.
/// A missing element yields an inert subscription.
pub fn observe(
    element: Option<Element>,
    threshold: f64,
    on_enter: impl FnOnce() + 'static,
) -> Subscription {
    let Some(element) = element else {
        return Subscription::inert();
    };

    let tracked = Rc::new(RefCell::new(TrackedElement::new(threshold)));
    let mut on_enter = Some(on_enter);
    let callback = {
        let tracked = tracked.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let entered = tracked
                        .borrow_mut()
                        .report(entry.intersection_ratio(), entry.is_intersecting());
                    if entered {
                        observer.disconnect();
                        if let Some(on_enter) = on_enter.take() {
                            on_enter();
                        }
                        break;
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(tracked.borrow().threshold()));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Subscription { inner: Some((observer, callback)) }
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            Subscription::inert()
        }
    }
}

/// True once the node behind `node` has scrolled into view. Never flips back.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let subscription = observe(node.cast::<Element>(), threshold, move || {
                    entered.set(true)
                });
                move || drop(subscription)
            },
            node,
        );
    }

    *entered
}

/// Like `use_in_view` but for content that should animate straight after mount.
#[hook]
pub fn use_mounted() -> bool {
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }
    *mounted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut element = TrackedElement::new(0.3);
        assert!(!element.report(0.1, true));
        assert!(!element.has_entered());
        assert!(element.report(0.3, true));
        assert!(element.has_entered());
        assert!(!element.report(0.9, true));
    }

    #[test]
    fn crossing_report_rounded_under_threshold_still_fires() {
        let mut element = TrackedElement::new(0.3);
        assert!(element.report(0.299_99, true));
        assert!(element.has_entered());

        let mut full = TrackedElement::new(1.0);
        assert!(full.report(0.999_5, true));
    }

    #[test]
    fn never_fires_below_threshold() {
        for threshold in [0.05, 0.2, 0.5, 1.0] {
            let mut element = TrackedElement::new(threshold);
            let below = threshold - 0.01;
            for _ in 0..10 {
                assert!(!element.report(below, true));
            }
            assert!(!element.has_entered());
        }
    }

    #[test]
    fn entered_stays_true_after_leaving() {
        let mut element = TrackedElement::new(0.2);
        assert!(element.report(0.5, true));
        assert!(!element.report(0.0, false));
        assert!(element.has_entered());
    }

    #[test]
    fn non_intersecting_reports_ignored() {
        let mut element = TrackedElement::new(0.0);
        assert!(!element.report(0.0, false));
        assert!(element.report(0.0, true));
    }

    #[test]
    fn threshold_clamped() {
        assert_eq!(TrackedElement::new(1.7).threshold(), 1.0);
        assert_eq!(TrackedElement::new(-0.5).threshold(), 0.0);
        assert_eq!(TrackedElement::new(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn missing_element_is_a_noop() {
        let mut subscription = observe(None, 0.2, || panic!("must not fire"));
        assert!(!subscription.is_active());
        subscription.unobserve();
        subscription.unobserve();
    }
}
