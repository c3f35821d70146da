use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::{nav::ScrollTarget, section::SectionId};

pub fn section_exists(id: SectionId) -> bool {
    document().get_element_by_id(id.as_str()).is_some()
}

/// Smooth-scroll the viewport to `target`.
pub fn scroll_to(target: ScrollTarget) {
    match target {
        ScrollTarget::Element(id) => {
            // the region may have unmounted since the target was resolved
            let Some(el) = document().get_element_by_id(id.as_str()) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
        ScrollTarget::Top => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);
        }
        ScrollTarget::Stay => {}
    }
}
