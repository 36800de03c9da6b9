use thiserror::Error;

use super::section::SectionId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("no element for section: {0}")]
    TargetMissing(SectionId),
}

/// The surface that navigation scrolls.
///
/// The browser implementation performs smooth scrolling on the document;
/// tests use an in-memory page.
pub trait Viewport {
    /// Smooth-scroll until the element for `section` is in view.
    fn scroll_into_view(&mut self, section: SectionId) -> Result<(), NavError>;

    /// Smooth-scroll back to the top of the page.
    fn scroll_to_top(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    state: MenuState,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Scrolls to `target` and closes the menu.
    ///
    /// A target that is not a known section, or that has no element on the
    /// page, is ignored. The menu closes either way.
    pub fn select<V: Viewport + ?Sized>(&mut self, target: &str, viewport: &mut V) {
        let res = target
            .parse::<SectionId>()
            .and_then(|section| viewport.scroll_into_view(section));
        if let Err(e) = res {
            log::debug!("navigation skipped: {e}");
        }
        self.state = MenuState::Closed;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    /// In-memory page: sections sit at fixed offsets and scrolling jumps there.
    #[derive(Debug, Default)]
    pub(crate) struct FakeViewport {
        pub anchors: HashMap<SectionId, f64>,
        pub offset: f64,
        pub scrolls: usize,
    }

    impl FakeViewport {
        pub fn with_all_sections() -> Self {
            let anchors = SectionId::ALL
                .iter()
                .enumerate()
                .map(|(i, s)| (*s, 900.0 * (i + 1) as f64))
                .collect();
            Self {
                anchors,
                ..Default::default()
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_into_view(&mut self, section: SectionId) -> Result<(), NavError> {
            let top = self
                .anchors
                .get(&section)
                .ok_or(NavError::TargetMissing(section))?;
            self.offset = *top;
            self.scrolls += 1;
            Ok(())
        }

        fn scroll_to_top(&mut self) {
            self.offset = 0.0;
            self.scrolls += 1;
        }
    }

    #[test]
    fn test_starts_closed() {
        let menu = NavMenu::new();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle_pairs() {
        let mut menu = NavMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_select_closes_and_scrolls() {
        let mut viewport = FakeViewport::with_all_sections();
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.select("skills", &mut viewport);
        assert!(!menu.is_open());
        assert_eq!(viewport.offset, viewport.anchors[&SectionId::Skills]);
        assert_eq!(viewport.scrolls, 1);
    }

    #[test]
    fn test_select_unknown_target_is_noop() {
        let mut viewport = FakeViewport::with_all_sections();
        viewport.offset = 42.0;
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.select("nonexistent", &mut viewport);
        assert!(!menu.is_open());
        assert_eq!(viewport.offset, 42.0);
        assert_eq!(viewport.scrolls, 0);
    }

    #[test]
    fn test_select_missing_element_is_noop() {
        let mut viewport = FakeViewport::default();
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.select("contact", &mut viewport);
        assert!(!menu.is_open());
        assert_eq!(viewport.scrolls, 0);
    }

    #[test]
    fn test_select_when_closed_stays_closed() {
        let mut viewport = FakeViewport::with_all_sections();
        let mut menu = NavMenu::new();
        menu.select("about", &mut viewport);
        assert!(!menu.is_open());
        assert_eq!(viewport.offset, viewport.anchors[&SectionId::About]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NavError::UnknownSection("blog".into()).to_string(),
            "unknown section: blog"
        );
        assert_eq!(
            NavError::TargetMissing(SectionId::Skills).to_string(),
            "no element for section: skills"
        );
    }
}
