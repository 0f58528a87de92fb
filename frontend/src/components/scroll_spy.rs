use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::{NAV_ACTIVATION_LEAD, NAV_LINKS};

type Listener = Rc<dyn Fn(f64)>;

/// Subscriber bookkeeping for the scroll publisher, independent of the DOM.
#[derive(Default)]
pub struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

impl Registry {
    pub fn insert(&mut self, listener: Listener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn snapshot(&self) -> Vec<Listener> {
        self.listeners.values().cloned().collect()
    }
}

#[derive(Default)]
struct Hub {
    registry: Registry,
    dom_listener: Option<Closure<dyn Fn()>>,
}

thread_local! {
    static HUB: RefCell<Hub> = RefCell::new(Hub::default());
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn publish() {
    let listeners = HUB.with(|hub| hub.borrow().registry.snapshot());
    let y = current_scroll_y();
    for listener in listeners {
        listener(y);
    }
}

fn attach(hub: &mut Hub) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn Fn()>::new(publish);
    for event in ["scroll", "resize"] {
        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            warn!("failed to listen for {}: {:?}", event, e);
        }
    }
    hub.dom_listener = Some(callback);
}

fn detach(hub: &mut Hub) {
    let Some(callback) = hub.dom_listener.take() else {
        return;
    };
    if let Some(window) = web_sys::window() {
        for event in ["scroll", "resize"] {
            if let Err(e) = window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                warn!("failed to stop listening for {}: {:?}", event, e);
            }
        }
    }
}

/// Live registration with the scroll publisher. Unsubscribes on drop.
pub struct ScrollSubscription {
    id: u64,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        HUB.with(|hub| {
            let mut hub = hub.borrow_mut();
            hub.registry.remove(self.id);
            if hub.registry.is_empty() {
                detach(&mut hub);
            }
        });
    }
}

/// Registers `listener` for window scroll offsets. The window listener is
/// shared by all subscribers and only exists while someone is subscribed.
pub fn subscribe(listener: impl Fn(f64) + 'static) -> ScrollSubscription {
    let listener: Listener = Rc::new(listener);
    let id = HUB.with(|hub| {
        let mut hub = hub.borrow_mut();
        let id = hub.registry.insert(listener.clone());
        if hub.dom_listener.is_none() {
            attach(&mut hub);
        }
        id
    });
    listener(current_scroll_y());
    ScrollSubscription { id }
}

/// The last anchor whose top is within `lead` of the current offset, or the
/// first anchor when none is.
pub fn active_section<'a>(scroll_y: f64, anchors: &[(&'a str, Option<f64>)], lead: f64) -> &'a str {
    let mut current = anchors.first().map(|(name, _)| *name).unwrap_or_default();
    for (name, top) in anchors {
        if let Some(top) = top {
            if scroll_y >= top - lead {
                current = *name;
            }
        }
    }
    current
}

fn anchor_tops(scroll_y: f64) -> Vec<(&'static str, Option<f64>)> {
    let document = web_sys::window().and_then(|w| w.document());
    NAV_LINKS
        .iter()
        .map(|(name, id)| {
            let top = document
                .as_ref()
                .and_then(|d| d.get_element_by_id(id))
                .map(|el| el.get_bounding_client_rect().top() + scroll_y);
            (*name, top)
        })
        .collect()
}

/// Name of the nav link whose section is currently in view. `set_active`
/// overrides it until the next scroll event.
#[hook]
pub fn use_active_section() -> (String, Callback<String>) {
    let active = use_state_eq(|| NAV_LINKS[0].0.to_string());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = subscribe(move |y| {
                    let name = active_section(y, &anchor_tops(y), NAV_ACTIVATION_LEAD);
                    active.set(name.to_string());
                });
                move || drop(subscription)
            },
            (),
        );
    }

    let set_active = {
        let active = active.clone();
        Callback::from(move |name: String| active.set(name))
    };

    ((*active).clone(), set_active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const ANCHORS: [(&str, Option<f64>); 5] = [
        ("Home", Some(0.0)),
        ("About", Some(900.0)),
        ("Services", Some(1600.0)),
        ("Clients", Some(3200.0)),
        ("Contact", Some(4500.0)),
    ];

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(active_section(0.0, &ANCHORS, 120.0), "Home");
    }

    #[test]
    fn lead_activates_early() {
        assert_eq!(active_section(779.0, &ANCHORS, 120.0), "Home");
        assert_eq!(active_section(780.0, &ANCHORS, 120.0), "About");
        assert_eq!(active_section(4400.0, &ANCHORS, 120.0), "Contact");
    }

    #[test]
    fn missing_anchor_skipped() {
        let anchors = [("Home", Some(0.0)), ("About", None), ("Services", Some(500.0))];
        assert_eq!(active_section(450.0, &anchors, 120.0), "Services");
        assert_eq!(active_section(100.0, &anchors, 120.0), "Home");
    }

    #[test]
    fn registry_tracks_lifetimes() {
        let hits = Rc::new(Cell::new(0));
        let mut registry = Registry::default();
        let a = {
            let hits = hits.clone();
            registry.insert(Rc::new(move |_: f64| hits.set(hits.get() + 1)))
        };
        let b = {
            let hits = hits.clone();
            registry.insert(Rc::new(move |_: f64| hits.set(hits.get() + 10)))
        };
        for listener in registry.snapshot() {
            listener(0.0);
        }
        assert_eq!(hits.get(), 11);

        assert!(registry.remove(a));
        assert!(!registry.remove(a));
        for listener in registry.snapshot() {
            listener(0.0);
        }
        assert_eq!(hits.get(), 21);

        assert!(registry.remove(b));
        assert!(registry.is_empty());
    }
}
