use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub body: &'static str,
}

/// What the carousel shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub current_index: usize,
    pub transitioning: bool,
}

/// Index rotation with a hold window between slides.
///
/// Driven either by the browser timers (`on_interval` / `on_hold_elapsed`) or,
/// with a simulated clock, by `advance_to`. Both go through the same
/// transitions.
#[derive(Debug, Clone)]
pub struct Rotation {
    len: usize,
    interval_ms: u64,
    hold_ms: u64,
    state: CarouselState,
    // generation of the pending hold, if any
    pending_hold: Option<u64>,
    generation: u64,
    stopped: bool,
    next_interval_at: u64,
    hold_until: Option<u64>,
}

impl Rotation {
    pub fn start(len: usize, interval_ms: u32, hold_ms: u32, now: u64) -> Self {
        let interval_ms = u64::from(interval_ms.max(1));
        Rotation {
            len,
            interval_ms,
            hold_ms: u64::from(hold_ms),
            state: CarouselState::default(),
            pending_hold: None,
            generation: 0,
            stopped: len == 0,
            next_interval_at: now + interval_ms,
            hold_until: None,
        }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Interval fired: enter the hold window. Returns the hold token to pass
    /// to `on_hold_elapsed`.
    pub fn on_interval(&mut self) -> Option<u64> {
        if self.stopped {
            return None;
        }
        self.generation += 1;
        self.pending_hold = Some(self.generation);
        self.state.transitioning = true;
        Some(self.generation)
    }

    /// Hold window over: advance. Stale tokens (superseded by `go_to` or a
    /// newer interval) are ignored.
    pub fn on_hold_elapsed(&mut self, token: u64) -> bool {
        if self.stopped || self.pending_hold != Some(token) {
            return false;
        }
        self.pending_hold = None;
        self.state.current_index = (self.state.current_index + 1) % self.len;
        self.state.transitioning = false;
        true
    }

    /// Manual selection. Cancels a pending hold but keeps the interval phase.
    pub fn go_to(&mut self, index: usize) {
        if self.stopped || index >= self.len {
            return;
        }
        self.pending_hold = None;
        self.hold_until = None;
        self.state.current_index = index;
        self.state.transitioning = false;
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.pending_hold = None;
        self.hold_until = None;
    }

    /// Replays every timer event due up to `now`.
    pub fn advance_to(&mut self, now: u64) {
        loop {
            if self.stopped {
                return;
            }
            let hold_due = self.hold_until.filter(|at| *at <= now);
            let interval_due = (self.next_interval_at <= now).then_some(self.next_interval_at);
            match (hold_due, interval_due) {
                (Some(hold_at), Some(interval_at)) if hold_at <= interval_at => self.fire_hold(),
                (Some(_), None) => self.fire_hold(),
                (_, Some(interval_at)) => {
                    self.next_interval_at = interval_at + self.interval_ms;
                    if self.on_interval().is_some() {
                        self.hold_until = Some(interval_at + self.hold_ms);
                    }
                }
                (None, None) => return,
            }
        }
    }

    fn fire_hold(&mut self) {
        self.hold_until = None;
        if let Some(token) = self.pending_hold {
            self.on_hold_elapsed(token);
        }
    }
}

pub struct UseRotationHandle {
    pub state: CarouselState,
    pub go_to: Callback<usize>,
}

/// Rotates through `len` slides while the calling component is mounted.
#[hook]
pub fn use_rotation(len: usize, interval_ms: u32, hold_ms: u32) -> UseRotationHandle {
    let state = use_state(CarouselState::default);
    let rotation = use_mut_ref(|| Rotation::start(len, interval_ms, hold_ms, 0));
    let hold_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let state = state.clone();
        let rotation = rotation.clone();
        let hold_timer = hold_timer.clone();
        use_effect_with_deps(
            move |&(len, interval_ms, hold_ms)| {
                *rotation.borrow_mut() = Rotation::start(len, interval_ms, hold_ms, 0);
                state.set(rotation.borrow().state());

                let interval = {
                    let rotation = rotation.clone();
                    let hold_timer = hold_timer.clone();
                    Interval::new(interval_ms, move || {
                        let Some(token) = rotation.borrow_mut().on_interval() else {
                            return;
                        };
                        state.set(rotation.borrow().state());

                        let rotation = rotation.clone();
                        let state = state.clone();
                        let timeout = Timeout::new(hold_ms, move || {
                            if rotation.borrow_mut().on_hold_elapsed(token) {
                                state.set(rotation.borrow().state());
                            }
                        });
                        *hold_timer.borrow_mut() = Some(timeout);
                    })
                };

                move || {
                    rotation.borrow_mut().stop();
                    drop(interval);
                    if let Some(timeout) = hold_timer.borrow_mut().take() {
                        timeout.cancel();
                    }
                }
            },
            (len, interval_ms, hold_ms),
        );
    }

    let go_to = {
        let state = state.clone();
        let rotation = rotation.clone();
        Callback::from(move |index: usize| {
            rotation.borrow_mut().go_to(index);
            state.set(rotation.borrow().state());
        })
    };

    UseRotationHandle { state: *state, go_to }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Rotation {
        Rotation::start(5, 3000, 300, 0)
    }

    #[test]
    fn hold_then_advance() {
        let mut rotation = five();
        rotation.advance_to(2999);
        assert_eq!(rotation.state(), CarouselState { current_index: 0, transitioning: false });

        rotation.advance_to(3000);
        assert_eq!(rotation.state(), CarouselState { current_index: 0, transitioning: true });

        rotation.advance_to(3299);
        assert!(rotation.state().transitioning);

        rotation.advance_to(3300);
        assert_eq!(rotation.state(), CarouselState { current_index: 1, transitioning: false });
    }

    #[test]
    fn index_over_several_cycles() {
        let mut rotation = five();
        rotation.advance_to(9000);
        assert_eq!(rotation.state(), CarouselState { current_index: 2, transitioning: true });
        rotation.advance_to(9300);
        assert_eq!(rotation.state(), CarouselState { current_index: 3, transitioning: false });
        rotation.advance_to(30_300);
        assert_eq!(rotation.state(), CarouselState { current_index: 0, transitioning: false });
    }

    #[test]
    fn go_to_is_immediate_and_keeps_phase() {
        let mut rotation = five();
        rotation.advance_to(1000);
        rotation.go_to(2);
        assert_eq!(rotation.state(), CarouselState { current_index: 2, transitioning: false });

        // next interval still lands at 3000
        rotation.advance_to(3000);
        assert!(rotation.state().transitioning);
        rotation.advance_to(3300);
        assert_eq!(rotation.state().current_index, 3);
    }

    #[test]
    fn go_to_during_hold_cancels_the_advance() {
        let mut rotation = five();
        rotation.advance_to(3100);
        assert!(rotation.state().transitioning);
        rotation.go_to(2);
        assert_eq!(rotation.state(), CarouselState { current_index: 2, transitioning: false });
        rotation.advance_to(3300);
        assert_eq!(rotation.state().current_index, 2);
        rotation.advance_to(6300);
        assert_eq!(rotation.state().current_index, 3);
    }

    #[test]
    fn go_to_out_of_range_ignored() {
        let mut rotation = five();
        rotation.go_to(5);
        assert_eq!(rotation.state().current_index, 0);
    }

    #[test]
    fn stop_mid_hold_freezes_state() {
        let mut rotation = five();
        rotation.advance_to(3100);
        rotation.stop();
        let frozen = rotation.state();
        rotation.advance_to(60_000);
        assert_eq!(rotation.state(), frozen);
        assert_eq!(rotation.on_interval(), None);
        rotation.go_to(4);
        assert_eq!(rotation.state(), frozen);
    }

    #[test]
    fn stale_hold_token_ignored() {
        let mut rotation = five();
        let first = rotation.on_interval().unwrap();
        let second = rotation.on_interval().unwrap();
        assert!(!rotation.on_hold_elapsed(first));
        assert!(rotation.on_hold_elapsed(second));
        assert_eq!(rotation.state().current_index, 1);
    }

    #[test]
    fn empty_carousel_never_rotates() {
        let mut rotation = Rotation::start(0, 3000, 300, 0);
        assert!(rotation.is_stopped());
        rotation.advance_to(10_000);
        assert_eq!(rotation.state(), CarouselState::default());
    }
}
