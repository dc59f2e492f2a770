use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};
use yew::Callback;

use crate::config::SCROLL_DEBOUNCE_MS;
use crate::dom;
use crate::error::Result;
use crate::sections::{active_section, in_view, ScrollMeasurement, SectionId, Span};

/// Holds the one outstanding debounce handle. Scheduling hands back the
/// handle it replaced so the caller drops (and thereby cancels) it.
#[derive(Debug)]
pub struct Debounce<T> {
    pending: Option<T>,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Debounce<T> {
    pub fn schedule(&mut self, handle: T) -> Option<T> {
        self.pending.replace(handle)
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }
}

/// Debounced window scroll listener reporting the active section and the
/// sections currently inside the reveal band.
pub struct ScrollTracker {
    window: Window,
    listener: Closure<dyn FnMut()>,
    pending: Rc<RefCell<Debounce<Timeout>>>,
}

impl ScrollTracker {
    /// Registers the listener and runs one measurement immediately.
    pub fn attach(on_measure: Callback<ScrollMeasurement>) -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document()?;
        let pending: Rc<RefCell<Debounce<Timeout>>> = Rc::new(RefCell::new(Debounce::default()));

        let listener = {
            let window = window.clone();
            let document = document.clone();
            let pending = pending.clone();
            let on_measure = on_measure.clone();
            Closure::<dyn FnMut()>::new(move || {
                let window = window.clone();
                let document = document.clone();
                let on_measure = on_measure.clone();
                let timeout = Timeout::new(SCROLL_DEBOUNCE_MS, move || {
                    on_measure.emit(measure(&window, &document));
                });
                let superseded = pending.borrow_mut().schedule(timeout);
                drop(superseded);
            })
        };

        window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())?;

        on_measure.emit(measure(&window, &document));
        debug!("scroll tracker attached");

        Ok(Self {
            window,
            listener,
            pending,
        })
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.listener.as_ref().unchecked_ref());
        let cancelled = self.pending.borrow_mut().cancel();
        drop(cancelled);
        debug!("scroll tracker detached");
    }
}

fn measure(window: &Window, document: &Document) -> ScrollMeasurement {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    let mut spans = Vec::with_capacity(SectionId::ALL.len());
    let mut visible = Vec::new();
    for section in SectionId::ALL {
        let Some(element) = document.get_element_by_id(section.dom_id()) else {
            continue;
        };
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            spans.push((
                section,
                Span {
                    top: f64::from(html.offset_top()),
                    height: f64::from(html.offset_height()),
                },
            ));
        }
        let rect = element.get_bounding_client_rect();
        if in_view(rect.top(), rect.bottom(), viewport_height) {
            visible.push(section);
        }
    }

    ScrollMeasurement {
        active: active_section(&spans, scroll_y),
        in_view: visible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Handle {
        id: u32,
        cancelled: Rc<Cell<u32>>,
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    #[test]
    fn test_new_event_replaces_pending_measurement() {
        let cancelled = Rc::new(Cell::new(0));
        let mut debounce = Debounce::default();
        let handle = |id| Handle { id, cancelled: cancelled.clone() };

        assert!(debounce.schedule(handle(1)).is_none());
        let superseded = debounce.schedule(handle(2));
        assert_eq!(superseded.as_ref().map(|h| h.id), Some(1));
        drop(superseded);
        assert_eq!(cancelled.get(), 1);

        drop(debounce.schedule(handle(3)));
        assert_eq!(cancelled.get(), 2);
        assert_eq!(debounce.cancel().map(|h| h.id), Some(3));
        assert_eq!(cancelled.get(), 3);
    }

    #[test]
    fn test_cancel_without_pending_is_noop() {
        let mut debounce: Debounce<u32> = Debounce::default();
        assert!(debounce.cancel().is_none());
        debounce.schedule(7);
        assert_eq!(debounce.cancel(), Some(7));
        assert!(debounce.cancel().is_none());
    }
}
