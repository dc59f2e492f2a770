use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::error::{Result, SiteError};
use crate::sections::SectionId;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(SiteError::NoBody)
}

pub fn create_div(document: &Document, class: &str) -> Result<HtmlElement> {
    let element = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::ElementType { expected: "HtmlElement" })?;
    element.set_class_name(class);
    Ok(element)
}

/// Smooth-scrolls to a section. A section that is not rendered is ignored.
pub fn scroll_to_section(section: SectionId) {
    let Ok(document) = document() else {
        return;
    };
    if let Some(element) = document.get_element_by_id(section.dom_id()) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
