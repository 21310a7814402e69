//! Scroll arithmetic and the smooth-scroll helpers built on it.
//!
//! The pure functions here are what the scroll listeners recompute on every
//! event; none of them keeps state between calls.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

/// A section eligible for nav highlighting: id, page-relative top and height.
pub type SectionBounds = (String, f64, f64);

pub fn header_is_scrolled(offset: f64) -> bool {
    offset > config::STICKY_THRESHOLD_PX
}

pub fn parallax_translate(offset: f64) -> f64 {
    offset * config::PARALLAX_SPEED
}

/// Destination for a smooth scroll to an element, compensating for the
/// fixed header overlapping the top of the page.
pub fn scroll_target_top(rect_top: f64, page_y_offset: f64) -> f64 {
    rect_top + page_y_offset - config::HEADER_OFFSET_PX
}

/// Which section's nav link should be highlighted at the given offset.
///
/// Each section claims the band `(top - 150, top - 150 + height]`. Bands may
/// overlap; the last matching section in document order wins.
pub fn active_section(offset: f64, sections: &[SectionBounds]) -> Option<&str> {
    let mut active = None;
    for (id, top, height) in sections {
        let band_top = top - config::SECTION_BAND_LEAD_PX;
        if offset > band_top && offset <= band_top + height {
            active = Some(id.as_str());
        }
    }
    active
}

/// Folds one scroll sample into the current highlight. When the offset falls
/// outside every band the previous link keeps its marker; only a match moves
/// it.
pub fn apply_highlight(
    previous: Option<String>,
    offset: f64,
    sections: &[SectionBounds],
) -> Option<String> {
    active_section(offset, sections)
        .map(str::to_string)
        .or(previous)
}

/// Snapshot of every `section[id]` in the document, in document order.
pub fn collect_sections(document: &Document) -> Vec<SectionBounds> {
    let mut sections = Vec::new();
    if let Ok(list) = document.query_selector_all("section[id]") {
        for i in 0..list.length() {
            let Some(node) = list.get(i) else { continue };
            if let Ok(el) = node.dyn_into::<HtmlElement>() {
                sections.push((el.id(), el.offset_top() as f64, el.offset_height() as f64));
            }
        }
    }
    sections
}

/// Smoothly scrolls the window to the section with the given id. A missing
/// section is a silent no-op.
pub fn scroll_to_section(document: &Document, id: &str) {
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let rect_top = target.get_bounding_client_rect().top();
    let page_y = window.page_y_offset().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_target_top(rect_top, page_y));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            ("home".to_string(), 200.0, 800.0),
            ("features".to_string(), 800.0, 900.0),
            ("pricing".to_string(), 1700.0, 700.0),
        ]
    }

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(header_is_scrolled(150.0));
        assert!(!header_is_scrolled(50.0));
        assert!(!header_is_scrolled(100.0));
        assert!(header_is_scrolled(100.5));
    }

    #[test]
    fn parallax_is_half_the_offset() {
        assert_eq!(parallax_translate(0.0), 0.0);
        assert_eq!(parallax_translate(240.0), 120.0);
    }

    #[test]
    fn scroll_target_compensates_for_the_header() {
        // Target 500px below the viewport top while scrolled to 1000.
        assert_eq!(scroll_target_top(500.0, 1000.0), 1420.0);
        assert_eq!(scroll_target_top(-200.0, 1000.0), 720.0);
    }

    #[test]
    fn highlight_picks_the_containing_band() {
        let sections = sections();
        assert_eq!(active_section(0.0, &sections), None);
        assert_eq!(active_section(100.0, &sections), Some("home"));
        assert_eq!(active_section(700.0, &sections), Some("features"));
        assert_eq!(active_section(2000.0, &sections), Some("pricing"));
        // Past the last band.
        assert_eq!(active_section(3000.0, &sections), None);
    }

    #[test]
    fn highlight_lets_the_last_overlapping_section_win() {
        let overlapping = vec![
            ("a".to_string(), 100.0, 1000.0),
            ("b".to_string(), 500.0, 1000.0),
        ];
        // 600 sits inside both bands; the later section takes the link.
        assert_eq!(active_section(600.0, &overlapping), Some("b"));
        // Only the first band covers 200.
        assert_eq!(active_section(200.0, &overlapping), Some("a"));
    }

    #[test]
    fn highlight_is_retained_when_no_band_matches() {
        let sections = sections();
        let current = apply_highlight(None, 900.0, &sections);
        assert_eq!(current, Some("features".to_string()));

        // Scrolled past every band: the marker stays where it was.
        let current = apply_highlight(current, 3000.0, &sections);
        assert_eq!(current, Some("features".to_string()));

        // Above the first band it is retained as well.
        let current = apply_highlight(current, 0.0, &sections);
        assert_eq!(current, Some("features".to_string()));

        // A later match still moves it.
        let current = apply_highlight(current, 2000.0, &sections);
        assert_eq!(current, Some("pricing".to_string()));
    }

    #[test]
    fn highlight_starts_empty_below_the_first_band() {
        let sections = sections();
        assert_eq!(apply_highlight(None, 0.0, &sections), None);
    }

    #[test]
    fn highlight_is_idempotent_for_a_fixed_offset() {
        let sections = sections();
        let first = active_section(900.0, &sections);
        let second = active_section(900.0, &sections);
        assert_eq!(first, second);
        assert_eq!(first, Some("features"));
    }
}
