//! Geometry queries against the live page.
//!
//! Everything here reads the browser layout fresh on each call; the pure
//! logic in [`crate::tracker`] and [`crate::tooltip`] never touches the DOM.

use crate::{
    config::TrackerConfig,
    geometry::{Rect, ScrollMetrics, Size},
    sections::Section,
    tooltip::TooltipGeometry,
    tracker::{self, Anchor},
};
use leptos::{document, html, window, NodeRef};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MeasureError {
    #[error("{0} element is not mounted")]
    NotMounted(&'static str),
    #[error("document has no root element")]
    NoDocumentElement,
    #[error("viewport size is unavailable")]
    NoViewport,
}

fn bounding_rect(el: &Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn scroll_metrics() -> Result<ScrollMetrics, MeasureError> {
    let root = document()
        .document_element()
        .ok_or(MeasureError::NoDocumentElement)?;

    Ok(ScrollMetrics::new(
        f64::from(root.scroll_top()),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    ))
}

/// Anchors of the sections currently in the document, in document order.
pub fn section_anchors() -> Vec<Anchor> {
    let document = document();
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let el = document.get_element_by_id(section.id())?;
            Some(Anchor::new(section, el.get_bounding_client_rect().top()))
        })
        .collect()
}

pub fn viewport() -> Result<Size, MeasureError> {
    let window = window();
    let width = window.inner_width().ok().and_then(|w| w.as_f64());
    let height = window.inner_height().ok().and_then(|h| h.as_f64());

    match (width, height) {
        (Some(width), Some(height)) => Ok(Size::new(width, height)),
        _ => Err(MeasureError::NoViewport),
    }
}

pub fn tooltip_geometry(
    trigger: NodeRef<html::Span>,
    tooltip: NodeRef<html::Span>,
) -> Result<TooltipGeometry, MeasureError> {
    let trigger = trigger.get().ok_or(MeasureError::NotMounted("trigger"))?;
    let tooltip = tooltip.get().ok_or(MeasureError::NotMounted("tooltip"))?;

    Ok(TooltipGeometry {
        trigger: bounding_rect(&trigger),
        tooltip: bounding_rect(&tooltip).size(),
        viewport: viewport()?,
    })
}

fn offset_top(section: Section) -> Option<f64> {
    let el = document().get_element_by_id(section.id())?;
    let el = el.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(el.offset_top()))
}

/// Smoothly scrolls the window to the section with DOM id `id`.
///
/// Unknown ids and sections that aren't mounted are ignored.
pub fn scroll_to_section(id: &str, config: &TrackerConfig) {
    let Some(top) = tracker::scroll_target(id, offset_top, config) else {
        return;
    };

    let mut options = ScrollToOptions::new();
    options.top(top).behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
