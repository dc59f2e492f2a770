//! Section ids and the geometry behind the active-section and reveal checks.
//!
//! Everything here is pure so the scroll tracker's decisions can be tested
//! without a browser.

use crate::config::{ACTIVE_SECTION_OFFSET_PX, VISIBILITY_BAND};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Portfolio,
    Testimonials,
    Contact,
    Terms,
}

impl SectionId {
    /// Page order, which is also the active-section scan order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Portfolio,
        SectionId::Testimonials,
        SectionId::Contact,
        SectionId::Terms,
    ];

    /// Sections linked from the top navigation. Terms is reached from the contact section.
    pub const NAV: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Portfolio,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Portfolio => "portfolio",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
            SectionId::Terms => "terms",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Portfolio => "Portfolio",
            SectionId::Testimonials => "Testimonials",
            SectionId::Contact => "Contact",
            SectionId::Terms => "Terms",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Vertical extent of a rendered section in page coordinates
/// (`offsetTop`, `offsetHeight`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section, in scan order, whose span holds `scroll_y` plus the active offset.
pub fn active_section(spans: &[(SectionId, Span)], scroll_y: f64) -> Option<SectionId> {
    let probe = scroll_y + ACTIVE_SECTION_OFFSET_PX;
    spans
        .iter()
        .find(|(_, span)| span.contains(probe))
        .map(|(id, _)| *id)
}

/// True when any part of the box has entered the lower band of the viewport.
/// `top` and `bottom` are viewport-relative, as from `getBoundingClientRect`.
pub fn in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height * VISIBILITY_BAND && bottom > 0.0
}

/// Result of one measurement pass over the rendered sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollMeasurement {
    pub active: Option<SectionId>,
    pub in_view: Vec<SectionId>,
}

/// Per-section reveal flags. Flags only ever turn on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    flags: [bool; SectionId::ALL.len()],
}

impl VisibilityMap {
    pub fn mark(&mut self, section: SectionId) {
        self.flags[section.index()] = true;
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.flags[section.index()]
    }

    #[cfg(test)]
    pub fn visible_count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<(SectionId, Span)> {
        vec![
            (SectionId::Home, Span { top: 0.0, height: 800.0 }),
            (SectionId::About, Span { top: 800.0, height: 600.0 }),
            (SectionId::Services, Span { top: 1400.0, height: 900.0 }),
        ]
    }

    #[test]
    fn test_active_section_boundary_between_about_and_services() {
        let spans = page();
        assert_eq!(active_section(&spans, 1299.0), Some(SectionId::About));
        assert_eq!(active_section(&spans, 1300.0), Some(SectionId::Services));
    }

    #[test]
    fn test_active_section_uses_offset_probe() {
        let spans = page();
        // scrollY 0 probes y=100, inside home
        assert_eq!(active_section(&spans, 0.0), Some(SectionId::Home));
        // scrollY 700 probes y=800, the first pixel of about
        assert_eq!(active_section(&spans, 700.0), Some(SectionId::About));
    }

    #[test]
    fn test_active_section_none_past_last_span() {
        let spans = page();
        assert_eq!(active_section(&spans, 2200.0), None);
        assert_eq!(active_section(&[], 0.0), None);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        // about was not rendered; its range falls through to nothing
        let spans = vec![
            (SectionId::Home, Span { top: 0.0, height: 800.0 }),
            (SectionId::Services, Span { top: 1400.0, height: 900.0 }),
        ];
        assert_eq!(active_section(&spans, 900.0), None);
        assert_eq!(active_section(&spans, 1350.0), Some(SectionId::Services));
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let spans = vec![
            (SectionId::Contact, Span { top: 0.0, height: 500.0 }),
            (SectionId::Terms, Span { top: 0.0, height: 500.0 }),
        ];
        assert_eq!(active_section(&spans, 0.0), Some(SectionId::Contact));
    }

    #[test]
    fn test_in_view_band() {
        let viewport = 1000.0;
        assert!(in_view(799.0, 1500.0, viewport));
        assert!(!in_view(800.0, 1500.0, viewport));
        assert!(in_view(-400.0, 1.0, viewport));
        assert!(!in_view(-400.0, 0.0, viewport));
    }

    #[test]
    fn test_visibility_map_marks() {
        let mut map = VisibilityMap::default();
        assert_eq!(map.visible_count(), 0);
        map.mark(SectionId::Portfolio);
        map.mark(SectionId::Portfolio);
        assert!(map.is_visible(SectionId::Portfolio));
        assert!(!map.is_visible(SectionId::Terms));
        assert_eq!(map.visible_count(), 1);
    }

    #[test]
    fn test_nav_excludes_terms() {
        assert!(!SectionId::NAV.contains(&SectionId::Terms));
        assert_eq!(SectionId::ALL[..6], SectionId::NAV);
        for id in SectionId::ALL {
            assert_eq!(id.dom_id(), id.label().to_lowercase());
        }
    }
}
