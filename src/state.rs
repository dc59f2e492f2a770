use std::rc::Rc;

use yew::prelude::*;

use crate::effects::rotator::next_index;
use crate::sections::{ScrollMeasurement, SectionId, VisibilityMap};
use crate::theme::ThemePreference;

/// All mutable UI state of the landing page, owned by `App` and shared
/// through context.
#[derive(Clone, Debug, PartialEq)]
pub struct LandingState {
    pub theme: ThemePreference,
    pub active_section: SectionId,
    pub visibility: VisibilityMap,
    pub testimonial_index: usize,
    pub testimonial_count: usize,
    pub menu_open: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LandingAction {
    ToggleTheme,
    ScrollMeasured(ScrollMeasurement),
    AdvanceTestimonial,
    ToggleMenu,
    /// Navigation to a section; the scroll itself is done by the caller.
    Navigate(SectionId),
}

impl LandingState {
    pub fn new(theme: ThemePreference, testimonial_count: usize) -> Self {
        Self {
            theme,
            active_section: SectionId::Home,
            visibility: VisibilityMap::default(),
            testimonial_index: 0,
            testimonial_count,
            menu_open: false,
        }
    }

    pub fn apply(&mut self, action: LandingAction) {
        match action {
            LandingAction::ToggleTheme => {
                self.theme = self.theme.toggled();
            }
            LandingAction::ScrollMeasured(measurement) => {
                // no match keeps the previous section highlighted
                if let Some(active) = measurement.active {
                    self.active_section = active;
                }
                for section in measurement.in_view {
                    self.visibility.mark(section);
                }
            }
            LandingAction::AdvanceTestimonial => {
                self.testimonial_index = next_index(self.testimonial_index, self.testimonial_count);
            }
            LandingAction::ToggleMenu => {
                self.menu_open = !self.menu_open;
            }
            LandingAction::Navigate(_) => {
                self.menu_open = false;
            }
        }
    }
}

impl Reducible for LandingState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub type LandingContext = UseReducerHandle<LandingState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(active: Option<SectionId>, in_view: &[SectionId]) -> LandingAction {
        LandingAction::ScrollMeasured(ScrollMeasurement {
            active,
            in_view: in_view.to_vec(),
        })
    }

    #[test]
    fn test_initial_state() {
        let state = LandingState::new(ThemePreference::Light, 3);
        assert_eq!(state.active_section, SectionId::Home);
        assert_eq!(state.visibility.visible_count(), 0);
        assert_eq!(state.testimonial_index, 0);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_without_match_keeps_active_section() {
        let mut state = LandingState::new(ThemePreference::Dark, 3);
        state.apply(measured(Some(SectionId::Services), &[]));
        state.apply(measured(None, &[]));
        assert_eq!(state.active_section, SectionId::Services);
    }

    #[test]
    fn test_visibility_is_sticky() {
        let mut state = LandingState::new(ThemePreference::Dark, 3);
        state.apply(measured(Some(SectionId::Home), &[SectionId::Home, SectionId::About]));
        // scrolled far away: nothing in view
        state.apply(measured(Some(SectionId::Contact), &[SectionId::Contact]));
        state.apply(measured(None, &[]));
        for section in [SectionId::Home, SectionId::About, SectionId::Contact] {
            assert!(state.visibility.is_visible(section), "{:?} reverted", section);
        }
        assert!(!state.visibility.is_visible(SectionId::Terms));
    }

    #[test]
    fn test_testimonial_index_wraps() {
        let mut state = LandingState::new(ThemePreference::Dark, 3);
        for firings in 1..=10 {
            state.apply(LandingAction::AdvanceTestimonial);
            assert_eq!(state.testimonial_index, firings % 3);
        }
    }

    #[test]
    fn test_toggle_theme_twice() {
        let mut state = LandingState::new(ThemePreference::Dark, 3);
        state.apply(LandingAction::ToggleTheme);
        assert_eq!(state.theme, ThemePreference::Light);
        state.apply(LandingAction::ToggleTheme);
        assert_eq!(state.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut state = LandingState::new(ThemePreference::Dark, 3);
        state.apply(LandingAction::ToggleMenu);
        assert!(state.menu_open);
        state.apply(LandingAction::Navigate(SectionId::Portfolio));
        assert!(!state.menu_open);
        // navigation does not touch the active section; the scroll tracker does
        assert_eq!(state.active_section, SectionId::Home);
    }

    #[test]
    fn test_reduce_reuses_unchanged_state() {
        let state = Rc::new(LandingState::new(ThemePreference::Dark, 3));
        let same = state.clone().reduce(measured(None, &[]));
        assert!(Rc::ptr_eq(&state, &same));

        let changed = state.clone().reduce(LandingAction::ToggleMenu);
        assert!(!Rc::ptr_eq(&state, &changed));
        assert!(changed.menu_open);
    }
}
