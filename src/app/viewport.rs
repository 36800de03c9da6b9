use leptos::prelude::{document, window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::shell::{NavError, SectionId, Viewport};

/// Scrolls the live document. Only touched from event handlers, so never on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_into_view(&mut self, section: SectionId) -> Result<(), NavError> {
        let el = document()
            .get_element_by_id(section.anchor())
            .ok_or(NavError::TargetMissing(section))?;
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        Ok(())
    }

    fn scroll_to_top(&mut self) {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}
