//! Custom cursor: an eased follower of the pointer plus fading trail markers.
//!
//! `Follower` and `TrailCadence` hold the arithmetic; `CursorAnimator` owns
//! the DOM element, the listeners and the `requestAnimationFrame` loop, and
//! undoes all of it when dropped.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

use crate::config::{CURSOR_EASING, TRAIL_EVERY_NTH_MOVE, TRAIL_LIFETIME_MS};
use crate::dom;
use crate::error::Result;

const CURSOR_CLASS: &str = "custom-cursor";
const TRAIL_CLASS: &str = "cursor-trail";
const BODY_ACTIVE_CLASS: &str = "custom-cursor-active";
const HOVER_CLASS: &str = "hover";
const CLICK_CLASS: &str = "click";
const INTERACTIVE_SELECTOR: &str = "button, a, input, textarea, select, [role=\"button\"], .clickable";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[cfg(test)]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Exponential smoothing towards the latest pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    position: Point,
    target: Point,
    easing: f64,
}

impl Default for Follower {
    fn default() -> Self {
        Self::new(CURSOR_EASING)
    }
}

impl Follower {
    pub fn new(easing: f64) -> Self {
        Self {
            position: Point::default(),
            target: Point::default(),
            easing,
        }
    }

    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    #[cfg(test)]
    pub fn position(&self) -> Point {
        self.position
    }

    /// One frame: `position += (target - position) * easing`.
    pub fn tick(&mut self) -> Point {
        self.position.x += (self.target.x - self.position.x) * self.easing;
        self.position.y += (self.target.y - self.position.y) * self.easing;
        self.position
    }
}

/// Decides which raw pointer moves leave a trail marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailCadence {
    every: u32,
    moves: u32,
}

impl Default for TrailCadence {
    fn default() -> Self {
        Self::new(TRAIL_EVERY_NTH_MOVE)
    }
}

impl TrailCadence {
    pub fn new(every: u32) -> Self {
        Self { every: every.max(1), moves: 0 }
    }

    /// Counts a move; true on every `every`-th one.
    pub fn record(&mut self) -> bool {
        self.moves = self.moves.wrapping_add(1);
        self.moves % self.every == 0
    }
}

/// Trail markers still waiting for their removal timer, keyed by spawn order.
#[derive(Debug)]
pub struct TrailBook<T> {
    next_id: u64,
    pending: HashMap<u64, T>,
}

impl<T> Default for TrailBook<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: HashMap::new(),
        }
    }
}

impl<T> TrailBook<T> {
    /// Stores the entry built for the next id and returns that id.
    pub fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert(id, build(id));
        id
    }

    /// Takes the entry whose timer fired. `None` once it is gone.
    pub fn expire(&mut self, id: u64) -> Option<T> {
        self.pending.remove(&id)
    }

    /// Empties the book on teardown.
    pub fn drain(&mut self) -> Vec<T> {
        self.pending.drain().map(|(_, entry)| entry).collect()
    }
}

struct PendingTrail {
    element: Element,
    _removal: Timeout,
}

struct CursorShared {
    follower: Follower,
    cadence: TrailCadence,
    running: bool,
    frame: Option<i32>,
    trails: TrailBook<PendingTrail>,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct CursorAnimator {
    window: Window,
    document: Document,
    body: HtmlElement,
    cursor: HtmlElement,
    shared: Rc<RefCell<CursorShared>>,
    frame_callback: FrameCallback,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_press: Closure<dyn FnMut()>,
    on_release: Closure<dyn FnMut()>,
    on_enter: Closure<dyn FnMut()>,
    on_leave: Closure<dyn FnMut()>,
    hover_targets: Vec<Element>,
}

impl CursorAnimator {
    pub fn attach() -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;
        let body = dom::body(&document)?;

        let cursor = dom::create_div(&document, CURSOR_CLASS)?;
        let style = cursor.style();
        style.set_property("opacity", "1")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("position", "fixed")?;
        style.set_property("z-index", "10000")?;
        body.append_child(&cursor)?;
        body.class_list().add_1(BODY_ACTIVE_CLASS)?;

        let shared = Rc::new(RefCell::new(CursorShared {
            follower: Follower::default(),
            cadence: TrailCadence::default(),
            running: true,
            frame: None,
            trails: TrailBook::default(),
        }));

        let on_move = {
            let document = document.clone();
            let body = body.clone();
            let weak = Rc::downgrade(&shared);
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let at = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                let spawn = {
                    let mut state = shared.borrow_mut();
                    state.follower.set_target(at);
                    state.cadence.record()
                };
                if spawn {
                    if let Err(err) = spawn_trail(&document, &body, &shared, at) {
                        warn!("cursor trail skipped: {}", err);
                    }
                }
            })
        };

        let on_press = class_toggle(&cursor, CLICK_CLASS, true);
        let on_release = class_toggle(&cursor, CLICK_CLASS, false);
        let on_enter = class_toggle(&cursor, HOVER_CLASS, true);
        let on_leave = class_toggle(&cursor, HOVER_CLASS, false);

        document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("mousedown", on_press.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("mouseup", on_release.as_ref().unchecked_ref())?;

        // Elements rendered later are not picked up.
        let mut hover_targets = Vec::new();
        let nodes = document.query_selector_all(INTERACTIVE_SELECTOR)?;
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            element.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
            element.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
            hover_targets.push(element);
        }

        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        {
            let window = window.clone();
            let cursor = cursor.clone();
            let weak = Rc::downgrade(&shared);
            let handle = Rc::downgrade(&frame_callback);
            *frame_callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let mut state = shared.borrow_mut();
                if !state.running {
                    return;
                }
                let position = state.follower.tick();
                let style = cursor.style();
                let _ = style.set_property("left", &format!("{}px", position.x));
                let _ = style.set_property("top", &format!("{}px", position.y));
                state.frame = request_frame(&window, &handle);
            }));
        }
        let first = request_frame(&window, &Rc::downgrade(&frame_callback));
        shared.borrow_mut().frame = first;

        debug!("cursor animator attached ({} hover targets)", hover_targets.len());

        Ok(Self {
            window,
            document,
            body,
            cursor,
            shared,
            frame_callback,
            on_move,
            on_press,
            on_release,
            on_enter,
            on_leave,
            hover_targets,
        })
    }
}

impl Drop for CursorAnimator {
    fn drop(&mut self) {
        let trails = {
            let mut state = self.shared.borrow_mut();
            state.running = false;
            if let Some(id) = state.frame.take() {
                let _ = self.window.cancel_animation_frame(id);
            }
            state.trails.drain()
        };
        self.frame_callback.borrow_mut().take();

        let remaining = trails.len();
        // dropping each entry also cancels its removal timer
        for trail in trails {
            trail.element.remove();
        }

        let _ = self
            .document
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mousedown", self.on_press.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mouseup", self.on_release.as_ref().unchecked_ref());
        for element in &self.hover_targets {
            let _ = element.remove_event_listener_with_callback("mouseenter", self.on_enter.as_ref().unchecked_ref());
            let _ = element.remove_event_listener_with_callback("mouseleave", self.on_leave.as_ref().unchecked_ref());
        }

        if self.cursor.parent_node().is_some() {
            self.cursor.remove();
        }
        let _ = self.body.class_list().remove_1(BODY_ACTIVE_CLASS);
        debug!("cursor animator detached ({} trail(s) cleared)", remaining);
    }
}

fn request_frame(window: &Window, callback: &Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>>) -> Option<i32> {
    let callback = callback.upgrade()?;
    let callback = callback.borrow();
    let closure = callback.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

fn class_toggle(target: &HtmlElement, class: &'static str, on: bool) -> Closure<dyn FnMut()> {
    let target = target.clone();
    Closure::<dyn FnMut()>::new(move || {
        let classes = target.class_list();
        let _ = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    })
}

fn spawn_trail(document: &Document, body: &HtmlElement, shared: &Rc<RefCell<CursorShared>>, at: Point) -> Result<()> {
    let trail = dom::create_div(document, TRAIL_CLASS)?;
    let style = trail.style();
    style.set_property("left", &format!("{}px", at.x))?;
    style.set_property("top", &format!("{}px", at.y))?;
    body.append_child(&trail)?;

    let weak = Rc::downgrade(shared);
    let element: Element = trail.into();
    shared.borrow_mut().trails.insert_with(move |id| PendingTrail {
        element,
        _removal: Timeout::new(TRAIL_LIFETIME_MS, move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let finished = shared.borrow_mut().trails.expire(id);
            if let Some(trail) = finished {
                if trail.element.parent_node().is_some() {
                    trail.element.remove();
                }
            }
        }),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_first_tick_covers_a_quarter() {
        let mut follower = Follower::default();
        follower.set_target(Point::new(100.0, 100.0));
        let p = follower.tick();
        assert!((p.x - 25.0).abs() < EPS);
        assert!((p.y - 25.0).abs() < EPS);
    }

    #[test]
    fn test_five_ticks_follow_geometric_decay() {
        let mut follower = Follower::default();
        follower.set_target(Point::new(100.0, 100.0));
        for _ in 0..5 {
            follower.tick();
        }
        let expected = 100.0 * (1.0 - 0.75f64.powi(5));
        let p = follower.position();
        assert!((p.x - expected).abs() < 1e-6);
        assert!((p.x - 76.26953125).abs() < 1e-6);
        assert!((p.y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_shrinks_by_three_quarters_without_overshoot() {
        let mut follower = Follower::default();
        let target = Point::new(-40.0, 310.0);
        follower.set_target(target);
        let mut previous = follower.position().distance(target);
        for _ in 0..40 {
            let p = follower.tick();
            let distance = p.distance(target);
            assert!((distance - previous * 0.75).abs() < 1e-9);
            assert!(p.x >= target.x && p.x <= 0.0);
            assert!(p.y <= target.y && p.y >= 0.0);
            previous = distance;
        }
    }

    #[test]
    fn test_retargeting_mid_flight() {
        let mut follower = Follower::new(0.5);
        follower.set_target(Point::new(10.0, 0.0));
        follower.tick();
        follower.set_target(Point::new(0.0, 0.0));
        let p = follower.tick();
        assert!((p.x - 2.5).abs() < EPS);
    }

    #[test]
    fn test_trail_every_third_move() {
        let mut cadence = TrailCadence::default();
        let spawned: Vec<bool> = (0..9).map(|_| cadence.record()).collect();
        assert_eq!(
            spawned,
            vec![false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn test_trail_cadence_never_divides_by_zero() {
        let mut cadence = TrailCadence::new(0);
        assert!(cadence.record());
        assert!(cadence.record());
    }

    struct Marker {
        live: Rc<std::cell::Cell<usize>>,
    }

    impl Marker {
        fn new(live: &Rc<std::cell::Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Self { live: live.clone() }
        }
    }

    impl Drop for Marker {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn test_trail_ids_follow_spawn_order() {
        let mut book = TrailBook::default();
        let first = book.insert_with(|id| id * 10);
        let second = book.insert_with(|id| id * 10);
        assert_eq!((first, second), (0, 1));
        assert_eq!(book.expire(second), Some(10));
        // ids are not reused after an expiry
        assert_eq!(book.insert_with(|id| id * 10), 2);
    }

    #[test]
    fn test_expired_trail_is_removed_once() {
        let live = Rc::new(std::cell::Cell::new(0));
        let mut book = TrailBook::default();
        let id = book.insert_with(|_| Marker::new(&live));
        assert!(book.expire(id).is_some());
        assert_eq!(live.get(), 0);
        assert!(book.expire(id).is_none());
        assert!(book.drain().is_empty());
    }

    #[test]
    fn test_teardown_with_two_pending_trails_clears_everything() {
        let live = Rc::new(std::cell::Cell::new(0));
        let mut book = TrailBook::default();
        let first = book.insert_with(|_| Marker::new(&live));
        let second = book.insert_with(|_| Marker::new(&live));
        assert_eq!(live.get(), 2);

        let drained = book.drain();
        assert_eq!(drained.len(), 2);
        drop(drained);
        assert_eq!(live.get(), 0);

        // timers that would fire after teardown find nothing to remove
        assert!(book.expire(first).is_none());
        assert!(book.expire(second).is_none());
        assert!(book.drain().is_empty());
    }
}
